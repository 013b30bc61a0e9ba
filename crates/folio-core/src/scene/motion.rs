use super::object::VisualObject;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

/// Boundary policy for drifting objects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Wrap {
    None,
    /// Leaving `[-b, b]` on a wrapped axis teleports to the opposite bound.
    Toroidal { half_extent: Vec3, axes: [bool; 3] },
    /// Leaving the sphere of `radius` mirrors the position through the origin.
    Antipodal { radius: f32 },
}

impl Wrap {
    pub fn apply(&self, p: Vec3) -> Vec3 {
        match *self {
            Wrap::None => p,
            Wrap::Toroidal { half_extent, axes } => {
                let mut out = p.to_array();
                let b = half_extent.to_array();
                for k in 0..3 {
                    if axes[k] {
                        out[k] = wrap_axis(out[k], b[k]);
                    }
                }
                Vec3::from_array(out)
            }
            Wrap::Antipodal { radius } => {
                if p.length() > radius {
                    -p
                } else {
                    p
                }
            }
        }
    }
}

#[inline]
fn wrap_axis(x: f32, bound: f32) -> f32 {
    if x > bound {
        -bound
    } else if x < -bound {
        bound
    } else {
        x
    }
}

/// Per-object motion rule applied every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    Still,
    /// `position += velocity` once per frame, then the wrap policy.
    Drift { wrap: Wrap },
    /// Rotate the position about the Y axis at `angular_rate` rad/s.
    Orbit { angular_rate: f32 },
    /// Burst outward (`velocity * delta * speed_scale`) and fade over `lifespan` seconds.
    Explode { lifespan: f32, speed_scale: f32 },
}

impl Motion {
    /// Advance one object by `delta` seconds. Returns false when the object
    /// has expired and must leave the live set this frame.
    pub fn step(&self, obj: &mut VisualObject, delta: f32) -> bool {
        obj.rotation += obj.spin * delta;
        match *self {
            Motion::Still => true,
            Motion::Drift { wrap } => {
                obj.position = wrap.apply(obj.position + obj.velocity);
                true
            }
            Motion::Orbit { angular_rate } => {
                obj.position = Quat::from_rotation_y(angular_rate * delta) * obj.position;
                true
            }
            Motion::Explode { speed_scale, .. } => {
                obj.position += obj.velocity * delta * speed_scale;
                match obj.lifespan.as_mut() {
                    Some(l) => l.advance(delta),
                    None => true,
                }
            }
        }
    }

    #[inline]
    pub fn lifespan(&self) -> Option<f32> {
        match *self {
            Motion::Explode { lifespan, .. } => Some(lifespan),
            _ => None,
        }
    }
}

/// Motion of the whole set as one group (rotation, bobbing, pointer tilt).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GroupMotion {
    /// Rotation rate per axis; rotation = spin * elapsed.
    pub spin: Vec3,
    pub bob_amplitude: f32,
    pub bob_rate: f32,
    /// Extra rotation per unit of normalized pointer (x tilts about Y, y about X).
    pub pointer_tilt: f32,
}

impl GroupMotion {
    pub fn transform(&self, elapsed: f32, pointer: Vec2) -> GroupTransform {
        let rotation = self.spin * elapsed
            + Vec3::new(pointer.y * self.pointer_tilt, pointer.x * self.pointer_tilt, 0.0);
        let offset = Vec3::new(0.0, (elapsed * self.bob_rate).sin() * self.bob_amplitude, 0.0);
        GroupTransform { rotation, offset }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GroupTransform {
    pub rotation: Vec3,
    pub offset: Vec3,
}

impl GroupTransform {
    #[inline]
    pub fn matrix(&self) -> Mat4 {
        let q = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_rotation_translation(q, self.offset)
    }
}
