// Host-side tests for pointer normalization and canvas sizing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod viewport {
    include!("../src/viewport.rs");
}

use glam::Vec2;
use viewport::*;

const VIEWPORT: Vec2 = Vec2::new(1600.0, 900.0);

#[test]
fn pointer_maps_viewport_corners_to_unit_square() {
    assert_eq!(viewport_ndc(Vec2::ZERO, VIEWPORT), Some(Vec2::new(-1.0, 1.0)));
    assert_eq!(viewport_ndc(VIEWPORT, VIEWPORT), Some(Vec2::new(1.0, -1.0)));
    assert_eq!(viewport_ndc(VIEWPORT * 0.5, VIEWPORT), Some(Vec2::ZERO));
}

#[test]
fn pointer_far_from_a_small_canvas_stays_in_range() {
    // A 300px-wide scene in the top-left corner; pointer on the far right of the page
    let ndc = viewport_ndc(Vec2::new(1500.0, 450.0), VIEWPORT).unwrap();
    assert!((ndc.x - 0.875).abs() < 1e-6);
    assert!(ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0);
}

#[test]
fn pointer_outside_the_viewport_is_clamped() {
    let ndc = viewport_ndc(Vec2::new(1620.0, -30.0), VIEWPORT).unwrap();
    assert_eq!(ndc, Vec2::new(1.0, 1.0));
}

#[test]
fn empty_viewport_gives_no_sample() {
    assert_eq!(viewport_ndc(Vec2::new(10.0, 10.0), Vec2::new(0.0, 900.0)), None);
}

#[test]
fn backing_size_scales_by_capped_pixel_ratio() {
    assert_eq!(backing_size(300.0, 150.0, 1.0, 2.0), Some((300, 150)));
    assert_eq!(backing_size(300.0, 150.0, 1.5, 2.0), Some((450, 225)));
    assert_eq!(backing_size(300.0, 150.0, 3.0, 2.0), Some((600, 300)));
    assert_eq!(backing_size(300.0, 150.0, f64::NAN, 2.0), Some((300, 150)));
}

#[test]
fn empty_box_has_no_backing_size() {
    assert_eq!(backing_size(0.0, 150.0, 2.0, 2.0), None);
    assert_eq!(backing_size(300.0, 0.2, 2.0, 2.0), None);
}

#[test]
fn hidden_container_collapses_the_canvas() {
    assert_eq!(canvas_size(0.0, 0.0, 2.0, 2.0), (0, 0));
    assert_eq!(canvas_size(640.0, 0.0, 1.0, 2.0), (0, 0));
    assert_eq!(canvas_size(640.0, 360.0, 1.0, 2.0), (640, 360));
}
