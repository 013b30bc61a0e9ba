use crate::viewport::viewport_ndc;
use folio_core::normalize_in_rect;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas-local normalized device coordinates, used for picking.
pub fn event_ndc(ev: &web::Event, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let me = ev.dyn_ref::<web::MouseEvent>()?;
    let rect = canvas.get_bounding_client_rect();
    normalize_in_rect(
        Vec2::new(me.client_x() as f32, me.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
    )
}

/// Pointer State sample for a window-level event, relative to the whole viewport.
pub fn window_ndc(ev: &web::Event, window: &web::Window) -> Option<Vec2> {
    let me = ev.dyn_ref::<web::MouseEvent>()?;
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    viewport_ndc(
        Vec2::new(me.client_x() as f32, me.client_y() as f32),
        Vec2::new(w as f32, h as f32),
    )
}
