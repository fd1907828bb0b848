use wasm_bindgen::JsCast;
use web_sys::{window, HtmlStyleElement};

const STYLE_ELEMENT_ID: &str = "egg-combobox-style";

const STYLESHEET: &str = r#"
.egg-combobox-container {
    display: flex;
    flex-direction: column;
    width: 100%;
    margin-bottom: 15px;
}
.egg-combobox-input-wrapper {
    position: relative;
    display: flex;
    width: 100%;
}
.egg-combobox-input {
    flex: 1;
    width: 100%;
    padding-right: 30px;
}
.egg-combobox-dropdown {
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    max-height: 200px;
    overflow-y: auto;
    background-color: #b5bcc1;
    border: 1px solid #ccc;
    border-top: none;
    z-index: 1000;
    display: none;
}
.egg-combobox-option {
    padding: 5px 10px;
    cursor: pointer;
    color: #444;
}
.egg-combobox-option:hover {
    background-color: #a0a7ac;
}
.egg-combobox-arrow {
    position: absolute;
    right: 10px;
    top: 50%;
    transform: translateY(-50%);
    width: 0;
    height: 0;
    border-left: 5px solid transparent;
    border-right: 4px solid transparent;
    border-top: 5px solid #888;
    pointer-events: none;
}
.egg-combobox-error {
    color: #721c24;
    background-color: #f8d7da;
    border: 1px solid #f5c6cb;
    padding: 10px;
    margin-top: 10px;
    border-radius: 4px;
}
"#;

/// Inject the combobox stylesheet into the page head exactly once. Calling
/// again finds the element by id and leaves it alone.
pub fn ensure_styles() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return;
    }

    let Some(style) = document
        .create_element("style")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlStyleElement>().ok())
    else {
        return;
    };
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(STYLESHEET));

    if let Some(head) = document.head() {
        let _ = head.append_child(&style);
    }
}
