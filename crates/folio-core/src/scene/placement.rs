use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Where the objects of a set start out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    /// Evenly spaced on a circle in the XZ plane, `angle = 2π·i/N`. Deterministic.
    Orbit { radius: f32 },
    /// Uniform inside the axis-aligned box `[-half_extent, half_extent]`.
    Random { half_extent: Vec3 },
    /// Uniform direction, radius uniform in `[inner, outer]`.
    Shell { inner: f32, outer: f32 },
    /// Row-major grid on the XZ plane centred on the origin. Deterministic.
    Grid { spacing: f32, columns: u32 },
}

impl Placement {
    /// Position of object `index` out of `n`. Random strategies draw from `rng`;
    /// deterministic ones ignore it.
    pub fn position<R: Rng + ?Sized>(&self, n: usize, index: usize, rng: &mut R) -> Vec3 {
        match *self {
            Placement::Orbit { radius } => orbit_position(n, radius, index),
            Placement::Random { half_extent } => Vec3::new(
                uniform(rng, -half_extent.x, half_extent.x),
                uniform(rng, -half_extent.y, half_extent.y),
                uniform(rng, -half_extent.z, half_extent.z),
            ),
            Placement::Shell { inner, outer } => {
                let radius = uniform(rng, inner, outer);
                random_direction(rng) * radius
            }
            Placement::Grid { spacing, columns } => grid_position(n, spacing, columns, index),
        }
    }

    pub fn generate<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<Vec3> {
        (0..n).map(|i| self.position(n, i, rng)).collect()
    }

    #[inline]
    pub fn is_deterministic(&self) -> bool {
        matches!(self, Placement::Orbit { .. } | Placement::Grid { .. })
    }
}

/// Point `index` of `n` on a circle of `radius` around the Y axis.
///
/// Pure: identical `(n, radius, index)` always yields the identical position.
/// `n == 0` has no valid index and maps to the origin.
#[inline]
pub fn orbit_position(n: usize, radius: f32, index: usize) -> Vec3 {
    if n == 0 {
        return Vec3::ZERO;
    }
    let angle = TAU * index as f32 / n as f32;
    Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
}

fn grid_position(n: usize, spacing: f32, columns: u32, index: usize) -> Vec3 {
    let cols = columns.max(1) as usize;
    let rows = n.div_ceil(cols).max(1);
    let col = index % cols;
    let row = index / cols;
    let x = (col as f32 - (cols - 1) as f32 * 0.5) * spacing;
    let z = (row as f32 - (rows - 1) as f32 * 0.5) * spacing;
    Vec3::new(x, 0.0, z)
}

/// Speed drawn uniformly from `[min, max]` along a uniformly random direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedRange {
    pub min: f32,
    pub max: f32,
    /// Restrict directions to the XY plane (drifting fields facing the camera).
    pub planar: bool,
}

impl SpeedRange {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        let speed = uniform(rng, self.min, self.max);
        let dir = if self.planar {
            let a = uniform(rng, 0.0, TAU);
            Vec3::new(a.cos(), a.sin(), 0.0)
        } else {
            random_direction(rng)
        };
        dir * speed
    }
}

/// Uniform scalar scale in `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleRange {
    pub min: f32,
    pub max: f32,
}

impl ScaleRange {
    pub const fn fixed(s: f32) -> Self {
        Self { min: s, max: s }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        uniform(rng, self.min, self.max)
    }
}

/// Euler angles uniform in `[0, π)` per axis.
pub fn random_rotation<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    Vec3::new(
        uniform(rng, 0.0, PI),
        uniform(rng, 0.0, PI),
        uniform(rng, 0.0, PI),
    )
}

/// Unit vector uniform on the sphere (`phi = acos(2u - 1)` avoids pole clustering).
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let theta = uniform(rng, 0.0, TAU);
    let phi = uniform(rng, -1.0, 1.0).clamp(-1.0, 1.0).acos();
    Vec3::new(
        phi.sin() * theta.cos(),
        phi.sin() * theta.sin(),
        phi.cos(),
    )
}

// gen_range panics on empty ranges; degenerate bounds are legal here.
#[inline]
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    lo + (hi - lo) * rng.gen::<f32>()
}
