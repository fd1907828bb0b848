use std::future::Future;

use futures_util::future::join_all;
use once_cell::sync::Lazy;

use crate::api::models::{CatalogItem, TreeEntry, TreeListing};
use crate::api::{EGG_PATH_MARKER, EGG_PATH_SUFFIX, RAW_CONTENT_BASE, TREE_LISTING_URL};
use crate::diagnostics::log_error;
use crate::utils::title_case_hyphenated;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Client for the community egg index: one tree listing on the GitHub API
/// plus one raw-content fetch per egg file.
pub struct CatalogClient {
    listing_url: String,
    raw_content_base: String,
}

impl CatalogClient {
    pub fn new() -> Self {
        Self {
            listing_url: TREE_LISTING_URL.to_string(),
            raw_content_base: RAW_CONTENT_BASE.to_string(),
        }
    }

    #[cfg(test)]
    fn with_endpoints(listing_url: impl Into<String>, raw_content_base: impl Into<String>) -> Self {
        Self {
            listing_url: listing_url.into(),
            raw_content_base: raw_content_base.into(),
        }
    }

    /// Fetch the full egg catalog. Never errors to the caller: a failed tree
    /// listing yields an empty catalog, and a failed content fetch drops only
    /// that one egg. Results keep the listing order regardless of which fetch
    /// finishes first.
    pub async fn fetch_all(&self) -> Vec<CatalogItem> {
        let listing = match self.fetch_listing().await {
            Ok(listing) => listing,
            Err(err) => {
                log_error("catalog.listing", &err);
                return Vec::new();
            }
        };

        let entries = filter_tree_entries(listing.tree);
        collect_items(entries, |path| async move {
            self.fetch_raw_content(&path).await
        })
        .await
    }

    async fn fetch_listing(&self) -> Result<TreeListing, String> {
        let response = HTTP_CLIENT
            .get(&self.listing_url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            return Err(format!(
                "listing request returned status {}",
                response.status()
            ));
        }
        let body = response.text().await.map_err(|e| e.to_string())?;
        serde_json::from_str::<TreeListing>(&body).map_err(|e| e.to_string())
    }

    async fn fetch_raw_content(&self, path: &str) -> Result<String, String> {
        let response = HTTP_CLIENT
            .get(self.raw_content_url(path))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            return Err(format!("content request returned status {}", response.status()));
        }
        response.text().await.map_err(|e| e.to_string())
    }

    /// Template a repository path onto the raw-content host, encoding each
    /// segment while keeping the separators.
    fn raw_content_url(&self, path: &str) -> String {
        let encoded = path
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        format!("{}{}", self.raw_content_base, encoded)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep only egg files: `.json` paths carrying the `/egg-` marker, in the
/// order the listing reported them.
fn filter_tree_entries(tree: Vec<TreeEntry>) -> Vec<TreeEntry> {
    tree.into_iter()
        .filter(|entry| {
            entry.path.ends_with(EGG_PATH_SUFFIX) && entry.path.contains(EGG_PATH_MARKER)
        })
        .collect()
}

/// `bots/discord/egg-discord-bot.json` -> `Discord Bot`. The first `egg-`
/// occurrence in the stem is removed wherever it sits, not just at the front.
pub(crate) fn display_name_from_path(path: &str) -> String {
    let file = path.rsplit('/').next().unwrap_or(path);
    let stem = file.strip_suffix(EGG_PATH_SUFFIX).unwrap_or(file);
    title_case_hyphenated(stem.replacen("egg-", "", 1))
}

/// Fan out one content fetch per entry, all issued at once, and wait for
/// every one to settle. A failed fetch is logged and drops only its own
/// entry; survivors come back in entry order, not completion order.
async fn collect_items<F, Fut>(entries: Vec<TreeEntry>, fetch_content: F) -> Vec<CatalogItem>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<String, String>>,
{
    let fetches = entries.into_iter().map(|entry| {
        let content = fetch_content(entry.path.clone());
        async move {
            match content.await {
                Ok(content) => Some(CatalogItem {
                    display_name: display_name_from_path(&entry.path),
                    content,
                }),
                Err(err) => {
                    log_error("catalog.item", &format!("{}: {err}", entry.path));
                    None
                }
            }
        }
    });

    join_all(fetches).await.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str) -> TreeEntry {
        TreeEntry {
            path: path.to_string(),
        }
    }

    #[test]
    fn display_name_strips_prefix_and_title_cases() {
        assert_eq!(
            display_name_from_path("game_eggs/minecraft/java/paper/egg-minecraft-paper.json"),
            "Minecraft Paper"
        );
        assert_eq!(display_name_from_path("bots/egg-discord-bot.json"), "Discord Bot");
        assert_eq!(display_name_from_path("misc/egg-teamspeak.json"), "Teamspeak");
    }

    #[test]
    fn display_name_removes_first_egg_marker_anywhere_in_stem() {
        // The /egg- marker can sit in a directory name, leaving a file whose
        // stem carries egg- in the middle.
        assert_eq!(
            display_name_from_path("game/egg-collection/my-egg-thing.json"),
            "My Thing"
        );
    }

    #[test]
    fn tree_filter_requires_suffix_and_marker() {
        let filtered = filter_tree_entries(vec![
            entry("game_eggs/egg-paper.json"),
            entry("README.md"),
            entry("game_eggs/egg-paper/README.md"),
            entry("scripts/example.json"),
            entry("bots/discord/egg-discord-bot.json"),
        ]);
        let paths: Vec<&str> = filtered.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["game_eggs/egg-paper.json", "bots/discord/egg-discord-bot.json"]
        );
    }

    #[test]
    fn raw_content_url_encodes_segments_but_not_separators() {
        let client = CatalogClient::with_endpoints("http://unused/", "https://raw.test/eggs/");
        assert_eq!(
            client.raw_content_url("game eggs/egg-a.json"),
            "https://raw.test/eggs/game%20eggs/egg-a.json"
        );
    }

    #[tokio::test]
    async fn collect_items_drops_failed_fetches_and_keeps_order() {
        let entries = vec![
            entry("a/egg-alpha.json"),
            entry("b/egg-broken.json"),
            entry("c/egg-charlie.json"),
            entry("d/egg-delta.json"),
            entry("e/egg-echo.json"),
        ];

        let items = collect_items(entries, |path| async move {
            if path.contains("broken") {
                Err("content request returned status 502".to_string())
            } else {
                Ok(format!("{{\"source\":\"{path}\"}}"))
            }
        })
        .await;

        let names: Vec<&str> = items.iter().map(|i| i.display_name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Charlie", "Delta", "Echo"]);
        assert_eq!(items[0].content, "{\"source\":\"a/egg-alpha.json\"}");
    }

    #[tokio::test]
    async fn collect_items_with_no_entries_is_empty() {
        let items = collect_items(vec![], |_| async move { Ok(String::new()) }).await;
        assert!(items.is_empty());
    }

    fn spawn_one_shot_server(status_line: &'static str, body: &'static str) -> String {
        use std::io::{Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}/")
    }

    #[tokio::test]
    async fn listing_failure_yields_empty_catalog() {
        let listing_url = spawn_one_shot_server("500 Internal Server Error", "");
        let client = CatalogClient::with_endpoints(listing_url, "http://unused/");
        assert!(client.fetch_all().await.is_empty());
    }

    #[tokio::test]
    async fn malformed_listing_yields_empty_catalog() {
        let listing_url = spawn_one_shot_server("200 OK", "<!doctype html>");
        let client = CatalogClient::with_endpoints(listing_url, "http://unused/");
        assert!(client.fetch_all().await.is_empty());
    }

    #[tokio::test]
    async fn listing_with_no_egg_paths_yields_empty_catalog() {
        let listing_url = spawn_one_shot_server(
            "200 OK",
            r#"{"sha":"x","tree":[{"path":"README.md"},{"path":"scripts/example.json"}]}"#,
        );
        let client = CatalogClient::with_endpoints(listing_url, "http://unused/");
        assert!(client.fetch_all().await.is_empty());
    }
}
