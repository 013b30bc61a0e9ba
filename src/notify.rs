use crate::constants::{DESTRUCTIVE_CLASS, TOAST_ID, TOAST_VISIBLE_MS};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const TIMER_ATTR: &str = "data-timer";

/// Show a destructive toast in `#toast` and hide it again after a few seconds.
/// A newer notice replaces the visible one and restarts the timer.
pub fn show_error(message: &str) {
    log::warn!("[blog] notice: {}", message);
    let Some(document) = dom::window_document() else {
        return;
    };
    let Some(el) = document.get_element_by_id(TOAST_ID) else {
        return;
    };
    el.set_text_content(Some(message));
    _ = el.class_list().add_1(DESTRUCTIVE_CLASS);
    _ = el.set_attribute("role", "alert");
    dom::set_visible(&document, TOAST_ID, true);
    schedule_hide(&el);
}

fn schedule_hide(el: &web::Element) {
    let Some(window) = web::window() else {
        return;
    };
    if let Some(prev) = el
        .get_attribute(TIMER_ATTR)
        .and_then(|s| s.parse::<i32>().ok())
    {
        window.clear_timeout_with_handle(prev);
    }
    let hide = Closure::once_into_js(move || {
        if let Some(document) = dom::window_document() {
            dom::set_visible(&document, TOAST_ID, false);
            if let Some(el) = document.get_element_by_id(TOAST_ID) {
                _ = el.remove_attribute(TIMER_ATTR);
            }
        }
    });
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        hide.unchecked_ref(),
        TOAST_VISIBLE_MS,
    ) {
        Ok(id) => {
            _ = el.set_attribute(TIMER_ATTR, &id.to_string());
        }
        Err(e) => log::warn!("setTimeout failed: {:?}", e),
    }
}
