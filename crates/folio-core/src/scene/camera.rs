use super::pick::Ray;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Perspective camera looking at `target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn new(fov_y_deg: f32, camera_z: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, camera_z),
            target: Vec3::ZERO,
            fov_y: fov_y_deg.to_radians(),
            aspect: 1.0,
            near,
            far,
        }
    }

    /// Update the aspect ratio for a new surface size. A zero-sized surface is
    /// ignored and the previous aspect kept. Returns whether anything changed.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        let aspect = width as f32 / height as f32;
        let changed = (aspect - self.aspect).abs() > f32::EPSILON;
        self.aspect = aspect;
        changed
    }

    #[inline]
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    #[inline]
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    #[inline]
    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }

    /// Camera basis vectors in world space, used for billboarding.
    pub fn right_up(&self) -> (Vec3, Vec3) {
        let fwd = (self.target - self.position).normalize_or_zero();
        let right = fwd.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(fwd).normalize_or_zero();
        (right, up)
    }

    /// World-space ray from the eye through a normalized device coordinate.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        Ray {
            origin: self.position,
            dir: (p1 - self.position).normalize(),
        }
    }
}
