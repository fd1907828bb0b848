#[cfg(target_arch = "wasm32")]
mod combobox;
#[cfg(target_arch = "wasm32")]
mod notice;
mod selector;
#[cfg(target_arch = "wasm32")]
mod styles;

#[cfg(target_arch = "wasm32")]
pub use combobox::mount;
#[cfg(target_arch = "wasm32")]
pub use notice::render_error_notice;
pub use selector::{filter_catalog, find_by_display_name, synthetic_file_name};
#[cfg(target_arch = "wasm32")]
pub use styles::ensure_styles;

/// The combobox only belongs in the egg import modal, recognized by title.
pub const MODAL_TITLE_MARKER: &str = "Import an Egg";
pub const MODAL_POLL_INTERVAL_MS: u32 = 1_000;

/// Long enough for an option mousedown to land, short enough not to flicker.
pub const BLUR_HIDE_DELAY_MS: u32 = 200;
