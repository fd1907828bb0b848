pub mod api;
pub mod components;
pub mod diagnostics;
pub mod utils;

pub use api::{CatalogClient, CatalogItem};
pub use components::{filter_catalog, find_by_display_name, synthetic_file_name};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    wasm_bindgen_futures::spawn_local(run());
}

/// Fetch the catalog, then wait for the import modal to show up and mount the
/// combobox into it. An empty catalog short-circuits to the error notice; a
/// fresh page load is the only recovery path.
#[cfg(target_arch = "wasm32")]
async fn run() {
    components::ensure_styles();

    let items = api::CatalogClient::new().fetch_all().await;
    if items.is_empty() {
        diagnostics::log_error("bootstrap", "no eggs fetched");
        components::render_error_notice();
        return;
    }

    // Check for the modal every second; mount on first sight, then stop.
    loop {
        gloo_timers::future::TimeoutFuture::new(components::MODAL_POLL_INTERVAL_MS).await;
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            continue;
        };
        if let Some(modal) = document.query_selector(".modal-content").ok().flatten() {
            components::mount(&items, &modal);
            break;
        }
    }
}
