use super::object::Lifespan;
use super::placement::SpeedRange;
use glam::Vec3;
use rand::Rng;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
}

/// A short-lived explosion: all particles share one lifespan and fade together.
///
/// Opacity is `remaining / initial` and point size shrinks with it, so both
/// decay monotonically to zero. The burst reports itself dead in the same
/// step its lifespan crosses zero; no frame ever draws it at opacity <= 0.
#[derive(Clone, Debug)]
pub struct ParticleBurst {
    particles: Vec<Particle>,
    life: Lifespan,
    pub color: [f32; 3],
    pub base_size: f32,
}

impl ParticleBurst {
    pub fn spawn<R: Rng + ?Sized>(
        origin: Vec3,
        count: usize,
        speed: SpeedRange,
        lifespan: f32,
        color: [f32; 3],
        base_size: f32,
        rng: &mut R,
    ) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                position: origin,
                velocity: speed.sample(rng),
            })
            .collect();
        Self {
            particles,
            life: Lifespan::new(lifespan),
            color,
            base_size,
        }
    }

    /// Advance by `delta` seconds; positions move `velocity * delta * speed_scale`.
    /// Returns false when the burst has expired.
    pub fn step(&mut self, delta: f32, speed_scale: f32) -> bool {
        if !self.life.advance(delta) {
            return false;
        }
        let k = delta * speed_scale;
        for p in &mut self.particles {
            p.position += p.velocity * k;
        }
        true
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.life.fraction()
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.base_size * self.opacity()
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life.remaining > 0.0
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Live bursts of one scene. Rarely more than a handful at once.
#[derive(Clone, Debug, Default)]
pub struct BurstField {
    bursts: SmallVec<[ParticleBurst; 4]>,
}

impl BurstField {
    pub fn push(&mut self, burst: ParticleBurst) {
        self.bursts.push(burst);
    }

    /// Step every burst and drop the expired ones in the same call.
    pub fn step(&mut self, delta: f32, speed_scale: f32) {
        self.bursts.retain(|b| b.step(delta, speed_scale));
    }

    pub fn live_particles(&self) -> usize {
        self.bursts.iter().map(|b| b.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParticleBurst> {
        self.bursts.iter()
    }

    pub fn len(&self) -> usize {
        self.bursts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bursts.is_empty()
    }

    pub fn clear(&mut self) {
        self.bursts.clear();
    }
}
