use glam::{Vec2, Vec3};

/// Latest normalized pointer sample plus the one before it. No history beyond that.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub current: Vec2,
    pub previous: Vec2,
}

impl PointerState {
    #[inline]
    pub fn sample(&mut self, ndc: Vec2) {
        self.previous = self.current;
        self.current = ndc;
    }

    #[inline]
    pub fn delta(&self) -> Vec2 {
        self.current - self.previous
    }
}

/// Map viewport pixels to `[-1, 1]` with +Y up:
/// `nx = x / w * 2 - 1`, `ny = -(y / h * 2 - 1)`.
///
/// Returns `None` for a zero-area viewport.
#[inline]
pub fn normalize_pointer(client: Vec2, viewport: Vec2) -> Option<Vec2> {
    normalize_in_rect(client, Vec2::ZERO, viewport)
}

/// Same mapping relative to a container rect at `origin` with `size`.
#[inline]
pub fn normalize_in_rect(client: Vec2, origin: Vec2, size: Vec2) -> Option<Vec2> {
    if !(size.x > 0.0 && size.y > 0.0) {
        return None;
    }
    let local = client - origin;
    Some(Vec2::new(
        (local.x / size.x) * 2.0 - 1.0,
        -((local.y / size.y) * 2.0 - 1.0),
    ))
}

/// One step of the discrete low-pass filter `x += (target - x) * k`.
///
/// For `k` in (0, 1) this never overshoots and converges geometrically.
#[inline]
pub fn smooth_toward(current: Vec3, target: Vec3, k: f32) -> Vec3 {
    current + (target - current) * k
}
