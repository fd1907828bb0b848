use crate::api::{CatalogItem, EGG_PATH_SUFFIX};

/// Restrict the catalog to entries whose display name contains `query`,
/// compared case-insensitively, preserving catalog order. An empty query
/// matches everything.
pub fn filter_catalog<'a>(items: &'a [CatalogItem], query: &str) -> Vec<&'a CatalogItem> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.display_name.to_lowercase().contains(&needle))
        .collect()
}

/// Exact display-name lookup. The first match in catalog order wins when
/// names collide.
pub fn find_by_display_name<'a>(items: &'a [CatalogItem], name: &str) -> Option<&'a CatalogItem> {
    items.iter().find(|item| item.display_name == name)
}

/// File name for the synthetic upload: `Minecraft Paper` -> `minecraft-paper.json`.
/// Only spaces become hyphens; every other character passes through as-is.
pub fn synthetic_file_name(display_name: &str) -> String {
    format!(
        "{}{}",
        display_name.replace(' ', "-").to_lowercase(),
        EGG_PATH_SUFFIX
    )
}
