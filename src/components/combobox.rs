use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    window, DataTransfer, Document, Element, Event, File, FilePropertyBag, HtmlElement,
    HtmlInputElement,
};

use crate::api::CatalogItem;
use crate::components::selector::{filter_catalog, find_by_display_name, synthetic_file_name};
use crate::components::{BLUR_HIDE_DELAY_MS, MODAL_TITLE_MARKER};

const CONTAINER_CLASS: &str = "egg-combobox-container";
const OPTION_CLASS: &str = "egg-combobox-option";

/// Mount the search combobox as the first child of the import modal body.
/// A no-op unless `modal` carries the expected title and a body region; an
/// already-mounted combobox in the body is removed first, so mounting twice
/// leaves exactly one instance.
pub fn mount(items: &[CatalogItem], modal: &Element) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    let title_matches = modal
        .query_selector(".modal-title")
        .ok()
        .flatten()
        .map(|title| {
            title
                .text_content()
                .unwrap_or_default()
                .contains(MODAL_TITLE_MARKER)
        })
        .unwrap_or(false);
    if !title_matches {
        return;
    }

    let Some(body) = modal.query_selector(".modal-body").ok().flatten() else {
        return;
    };

    if let Some(existing) = body
        .query_selector(&format!(".{CONTAINER_CLASS}"))
        .ok()
        .flatten()
    {
        existing.remove();
    }

    let Some(container) = build_combobox(&document, items.to_vec()) else {
        return;
    };
    let _ = body.insert_before(&container, body.first_child().as_ref());
}

fn build_combobox(document: &Document, items: Vec<CatalogItem>) -> Option<Element> {
    let container = document.create_element("div").ok()?;
    container.set_class_name("form-group egg-combobox-container");
    container.set_inner_html(
        r#"<label class="control-label" for="eggCombobox">Search for an Egg</label>
<div class="egg-combobox-input-wrapper">
    <input type="text" id="eggCombobox" class="form-control egg-combobox-input" placeholder="Search and select an egg..." autocomplete="off">
    <span class="egg-combobox-arrow"></span>
    <div class="egg-combobox-dropdown"></div>
</div>"#,
    );

    let input: HtmlInputElement = container
        .query_selector(".egg-combobox-input")
        .ok()??
        .dyn_into()
        .ok()?;
    let dropdown: HtmlElement = container
        .query_selector(".egg-combobox-dropdown")
        .ok()??
        .dyn_into()
        .ok()?;

    // Recompute the visible options on every keystroke and on focus.
    {
        let items = items.clone();
        let input = input.clone();
        let dropdown = dropdown.clone();
        let refresh = Closure::wrap(Box::new(move || {
            refresh_dropdown(&items, &input, &dropdown);
        }) as Box<dyn FnMut()>);
        let _ = input.add_event_listener_with_callback("input", refresh.as_ref().unchecked_ref());
        let _ = input.add_event_listener_with_callback("focus", refresh.as_ref().unchecked_ref());
        refresh.forget();
    }

    // Hide on blur, but late enough that an option mousedown lands first.
    {
        let dropdown = dropdown.clone();
        let on_blur = Closure::wrap(Box::new(move || {
            let dropdown = dropdown.clone();
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(BLUR_HIDE_DELAY_MS).await;
                hide_dropdown(&dropdown);
            });
        }) as Box<dyn FnMut()>);
        let _ = input.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref());
        on_blur.forget();
    }

    // Commit the selection on mousedown, before the blur teardown fires.
    {
        let input = input.clone();
        let dropdown_el = dropdown.clone();
        let on_pick = Closure::wrap(Box::new(move |event: Event| {
            let Some(option) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            if !option.class_list().contains(OPTION_CLASS) {
                return;
            }

            let name = option.text_content().unwrap_or_default();
            input.set_value(&name);
            hide_dropdown(&dropdown_el);

            // A lookup miss means no injection; the input keeps its text.
            if let Some(item) = find_by_display_name(&items, &input.value()) {
                inject_synthetic_file(item);
            }
        }) as Box<dyn FnMut(Event)>);
        let _ =
            dropdown.add_event_listener_with_callback("mousedown", on_pick.as_ref().unchecked_ref());
        on_pick.forget();
    }

    Some(container)
}

/// Rebuild the option rows from the current query. The dropdown is visible
/// iff at least one catalog entry matches.
fn refresh_dropdown(items: &[CatalogItem], input: &HtmlInputElement, dropdown: &HtmlElement) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    let matches = filter_catalog(items, &input.value());

    dropdown.set_inner_html("");
    for item in &matches {
        let Ok(option) = document.create_element("div") else {
            continue;
        };
        option.set_class_name(OPTION_CLASS);
        option.set_text_content(Some(&item.display_name));
        let _ = dropdown.append_child(&option);
    }

    let display = if matches.is_empty() { "none" } else { "block" };
    let _ = dropdown.style().set_property("display", display);
}

fn hide_dropdown(dropdown: &HtmlElement) {
    let _ = dropdown.style().set_property("display", "none");
}

/// Stand in for a user-chosen upload: wrap the egg JSON in a `File` and hand
/// it to the page's file input through a `DataTransfer`.
fn inject_synthetic_file(item: &CatalogItem) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Some(file_input) = document
        .query_selector("input[type=\"file\"]")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };

    let parts = js_sys::Array::of1(&JsValue::from_str(&item.content));
    let options = FilePropertyBag::new();
    options.set_type("application/json");

    let Ok(file) = File::new_with_str_sequence_and_options(
        &parts,
        &synthetic_file_name(&item.display_name),
        &options,
    ) else {
        return;
    };
    let Ok(transfer) = DataTransfer::new() else {
        return;
    };
    if transfer.items().add_with_file(&file).is_err() {
        return;
    }
    file_input.set_files(transfer.files().as_ref());
}
