// Host-side tests for pointer normalization and exponential smoothing.

use folio_core::*;
use glam::{Vec2, Vec3};

#[test]
fn pointer_normalization_maps_corners_and_center() {
    let vp = Vec2::new(800.0, 600.0);
    assert_eq!(normalize_pointer(Vec2::new(400.0, 300.0), vp), Some(Vec2::ZERO));
    assert_eq!(normalize_pointer(Vec2::ZERO, vp), Some(Vec2::new(-1.0, 1.0)));
    assert_eq!(normalize_pointer(vp, vp), Some(Vec2::new(1.0, -1.0)));
}

#[test]
fn zero_area_viewport_yields_no_sample() {
    assert_eq!(normalize_pointer(Vec2::new(10.0, 10.0), Vec2::new(0.0, 600.0)), None);
    assert_eq!(normalize_pointer(Vec2::new(10.0, 10.0), Vec2::ZERO), None);
}

#[test]
fn container_relative_normalization_subtracts_origin() {
    let ndc = normalize_in_rect(
        Vec2::new(150.0, 250.0),
        Vec2::new(100.0, 200.0),
        Vec2::new(100.0, 100.0),
    );
    assert_eq!(ndc, Some(Vec2::ZERO));
}

#[test]
fn pointer_state_keeps_only_the_previous_sample() {
    let mut p = PointerState::default();
    p.sample(Vec2::new(0.5, 0.5));
    p.sample(Vec2::new(0.75, 0.25));
    assert_eq!(p.previous, Vec2::new(0.5, 0.5));
    assert_eq!(p.current, Vec2::new(0.75, 0.25));
    assert_eq!(p.delta(), Vec2::new(0.25, -0.25));
}

#[test]
fn smoothing_converges_monotonically_without_overshoot() {
    let target = Vec3::new(10.0, 0.0, 0.0);
    let mut x = Vec3::ZERO;
    let mut prev = x.x;
    for _ in 0..500 {
        x = smooth_toward(x, target, PARALLAX_SMOOTHING);
        assert!(x.x >= prev, "moved away from target: {} < {}", x.x, prev);
        assert!(x.x <= target.x, "overshot: {}", x.x);
        prev = x.x;
    }
    assert!((target.x - x.x).abs() < 1e-3);
}

#[test]
fn smoothing_from_above_never_undershoots() {
    let target = Vec3::new(0.0, -2.0, 5.0);
    let mut x = Vec3::new(0.0, 3.0, 5.0);
    let mut prev = x.y;
    for _ in 0..300 {
        x = smooth_toward(x, target, ORBS_PARALLAX_SMOOTHING);
        assert!(x.y <= prev);
        assert!(x.y >= target.y);
        assert_eq!(x.z, 5.0, "axis already at target stays put");
        prev = x.y;
    }
}

#[test]
fn first_smoothing_step_covers_k_of_the_gap() {
    let x = smooth_toward(Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0), 0.25);
    assert!((x.x - 1.0).abs() < 1e-6);
}
