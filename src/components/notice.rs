use web_sys::window;

const ERROR_MESSAGE: &str =
    "Failed to load egg list. Please try refreshing the page or check the console for more details.";

/// Render the static failure notice as the first child of the import modal
/// body, if the modal is present right now. There is no retry path; a fresh
/// page load is the way back.
pub fn render_error_notice() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document
        .query_selector(".modal-content .modal-body")
        .ok()
        .flatten()
    else {
        return;
    };

    let Ok(notice) = document.create_element("div") else {
        return;
    };
    notice.set_class_name("egg-combobox-error");
    notice.set_text_content(Some(ERROR_MESSAGE));
    let _ = body.insert_before(&notice, body.first_child().as_ref());
}
