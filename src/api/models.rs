use serde::Deserialize;

/// One selectable egg: a display name derived from its repository path plus
/// the raw JSON document behind it. Built once per page load, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub display_name: String,
    pub content: String,
}

/// GitHub `git/trees` response, reduced to the fields the catalog reads.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeListing {
    #[serde(default)]
    pub tree: Vec<TreeEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreeEntry {
    #[serde(default)]
    pub path: String,
}
