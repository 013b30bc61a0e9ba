use super::object::{ObjectId, VisualObject};
use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// Nearest non-negative hit distance along a normalized ray, if any.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t = -b - sq;
    if t >= 0.0 {
        return Some(t);
    }
    // origin inside the sphere: report the exit point
    let t_far = -b + sq;
    (t_far >= 0.0).then_some(t_far)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub id: ObjectId,
    pub distance: f32,
    pub point: Vec3,
}

/// Test `ray` against every live object (as spheres transformed by `group`)
/// and return the nearest hit. Objects no longer in `objects` cannot be hit.
pub fn pick_nearest<'a>(
    ray: Ray,
    objects: impl IntoIterator<Item = &'a VisualObject>,
    group: Mat4,
    radius_factor: f32,
) -> Option<Hit> {
    let mut best: Option<Hit> = None;
    for obj in objects {
        let center = group.transform_point3(obj.position);
        let radius = obj.radius() * radius_factor;
        if let Some(t) = ray_sphere(ray.origin, ray.dir, center, radius) {
            match best {
                Some(b) if t >= b.distance => {}
                _ => {
                    best = Some(Hit {
                        id: obj.id,
                        distance: t,
                        point: center,
                    })
                }
            }
        }
    }
    best
}

/// Selected key into a small static list, owned by the enclosing UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<usize>,
}

impl Selection {
    pub fn with(index: usize) -> Self {
        Self {
            current: Some(index),
        }
    }

    #[inline]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Select `index`. Returns false (and changes nothing) when it is already selected.
    pub fn select(&mut self, index: usize) -> bool {
        if self.current == Some(index) {
            return false;
        }
        self.current = Some(index);
        true
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
