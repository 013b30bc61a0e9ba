// Pointer and canvas-size mapping; no browser types.

use folio_core::normalize_pointer;
use glam::Vec2;

/// Pointer State sample for a window-level pointer event: viewport pixels to
/// `[-1, 1]` with +Y up. Scrollbar gutters can report slightly outside the
/// viewport, so the result is clamped.
pub fn viewport_ndc(client: Vec2, viewport: Vec2) -> Option<Vec2> {
    normalize_pointer(client, viewport).map(|p| p.clamp(Vec2::NEG_ONE, Vec2::ONE))
}

/// Canvas backing-store size for a CSS box, or `None` for an empty box.
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64, max_dpr: f64) -> Option<(u32, u32)> {
    let dpr = if dpr.is_finite() && dpr > 0.0 {
        dpr.min(max_dpr)
    } else {
        1.0
    };
    let w = (css_width * dpr).floor();
    let h = (css_height * dpr).floor();
    if !(w >= 1.0 && h >= 1.0) {
        return None;
    }
    Some((w as u32, h as u32))
}

/// Size to give the canvas element: the backing size, or 0x0 while the box is
/// empty so nothing is drawn at the element's 300x150 default.
pub fn canvas_size(css_width: f64, css_height: f64, dpr: f64, max_dpr: f64) -> (u32, u32) {
    backing_size(css_width, css_height, dpr, max_dpr).unwrap_or((0, 0))
}
