/// Log a swallowed failure. Remote errors never propagate past their origin,
/// so the console line is the only trace they leave.
#[cfg(target_arch = "wasm32")]
pub fn log_error(scope: &str, details: &str) {
    web_sys::console::error_1(&format!("[egg-search] {scope}: {details}").into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_error(scope: &str, details: &str) {
    eprintln!("[egg-search] {scope}: {details}");
}
