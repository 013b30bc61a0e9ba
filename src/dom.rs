use crate::constants::{HIDDEN_CLASS, MAX_DEVICE_PIXEL_RATIO};
use crate::viewport::canvas_size;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// A registered DOM listener. Dropping it removes the listener again.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("addEventListener({}) failed: {:?}", event, e);
            return None;
        }
        Some(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// Keep the listener for the lifetime of the page.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> Option<EventListener> {
    let el = document.get_element_by_id(element_id)?;
    EventListener::new(&el, "click", move |_| handler())
}

/// Match the canvas backing store to its CSS box times devicePixelRatio.
/// Returns the new size, or `None` while the canvas has no area; an empty box
/// shrinks the backing store to 0x0.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Option<(u32, u32)> {
    let w = web::window()?;
    let rect = canvas.get_bounding_client_rect();
    let (w_px, h_px) = canvas_size(
        rect.width(),
        rect.height(),
        w.device_pixel_ratio(),
        MAX_DEVICE_PIXEL_RATIO,
    );
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    (w_px > 0 && h_px > 0).then_some((w_px, h_px))
}

pub fn set_visible(document: &web::Document, element_id: &str, visible: bool) {
    let Some(el) = document.get_element_by_id(element_id) else {
        return;
    };
    if visible {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
    } else {
        _ = el.class_list().add_1(HIDDEN_CLASS);
    }
    // Fallback in case the stylesheet has no `.hidden` rule
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        let display = if visible { "" } else { "none" };
        _ = html.style().set_property("display", display);
    }
}

pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn data_attr(el: &web::Element, name: &str) -> Option<String> {
    el.get_attribute(name)
}
