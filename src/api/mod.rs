mod catalog;
mod models;

pub use catalog::CatalogClient;
pub use models::{CatalogItem, TreeEntry, TreeListing};

pub const TREE_LISTING_URL: &str =
    "https://api.github.com/repos/parkervcp/eggs/git/trees/master?recursive=1";
pub const RAW_CONTENT_BASE: &str = "https://raw.githubusercontent.com/parkervcp/eggs/master/";

/// Tree entries are eggs only if the path carries both of these.
pub const EGG_PATH_SUFFIX: &str = ".json";
pub const EGG_PATH_MARKER: &str = "/egg-";
