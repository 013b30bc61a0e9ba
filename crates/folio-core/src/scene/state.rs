use super::burst::{BurstField, ParticleBurst};
use super::camera::Camera;
use super::color::{lerp_rgb, scale_rgb};
use super::config::{PickAction, SceneConfig};
use super::motion::GroupTransform;
use super::object::{Lifespan, ObjectId, ObjectSet, VisualObject};
use super::pick::pick_nearest;
use super::placement::{random_rotation, SpeedRange};
use crate::constants::*;
use glam::{Vec2, Vec3};
use rand::prelude::*;

/// Frames longer than this (e.g. after a background tab resumes) are clamped
/// so orbiting and spinning objects do not visibly jump.
pub const MAX_FRAME_DELTA_SEC: f32 = 0.25;

/// Per-sprite record uploaded to the GPU each frame.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

/// What a successful pick hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickEvent {
    pub id: ObjectId,
    pub payload: Option<usize>,
    /// World-space center of the hit object.
    pub position: Vec3,
    /// The object left the live set (explode-on-pick scenes).
    pub removed: bool,
}

/// Simulation side of one mounted animation: exactly one camera, one object
/// set, one burst field and one pointer state. Platform-free; the web host
/// feeds it input and draws the instances it writes.
///
/// Typical usage:
/// - `Scene::new(config)` on mount
/// - `resize(w, h)` whenever the surface size changes
/// - `pointer_moved(ndc)` on pointer events, `click(ndc)` on clicks
/// - `tick(delta)` then `write_instances(&mut buf)` once per animation frame
pub struct Scene {
    config: SceneConfig,
    objects: ObjectSet,
    bursts: BurstField,
    camera: Camera,
    pointer: super::input::PointerState,
    group: GroupTransform,
    hover_rotation: Vec3,
    hovered: bool,
    highlight: Option<ObjectId>,
    elapsed: f32,
    viewport: Option<(u32, u32)>,
    rng: StdRng,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut objects = ObjectSet::new();
        let n = config.object_count;
        let lifespan = config.motion.lifespan();
        for i in 0..n {
            let position = config.placement.position(n, i, &mut rng);
            let velocity = config
                .velocity
                .map_or(Vec3::ZERO, |v| v.sample(&mut rng));
            let rotation = if config.random_rotation {
                random_rotation(&mut rng)
            } else {
                Vec3::ZERO
            };
            let scale = Vec3::splat(config.scale.sample(&mut rng));
            let brightness = 1.0 - config.palette.brightness_jitter * rng.gen::<f32>();
            objects.spawn(|id| VisualObject {
                id,
                position,
                rotation,
                scale,
                velocity,
                spin: config.spin,
                lifespan: lifespan.map(Lifespan::new),
                payload: config.indexed_payloads.then_some(i),
                brightness,
            });
        }
        if let Some(core) = config.core_scale {
            objects.spawn(|id| VisualObject {
                id,
                position: Vec3::ZERO,
                rotation: Vec3::ZERO,
                scale: Vec3::splat(core),
                velocity: Vec3::ZERO,
                spin: Vec3::ZERO,
                lifespan: None,
                payload: None,
                brightness: 1.0,
            });
        }
        let cam = config.camera;
        let camera = Camera::new(cam.fov_deg, cam.z, cam.near, cam.far);
        log::debug!(
            "[scene] created objects={} placement={:?} seed={}",
            objects.len(),
            config.placement,
            config.seed
        );
        Self {
            config,
            objects,
            bursts: BurstField::default(),
            camera,
            pointer: Default::default(),
            group: GroupTransform::default(),
            hover_rotation: Vec3::ZERO,
            hovered: false,
            highlight: None,
            elapsed: 0.0,
            viewport: None,
            rng,
        }
    }

    /// Track a new surface size. Zero-sized surfaces are ignored (the scene
    /// keeps running with its previous aspect). Returns whether the size changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        if self.viewport == Some((width, height)) {
            return false;
        }
        self.viewport = Some((width, height));
        self.camera.set_viewport(width, height);
        true
    }

    #[inline]
    pub fn pointer_moved(&mut self, ndc: Vec2) {
        self.pointer.sample(ndc);
    }

    #[inline]
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Highlight the object carrying `payload` (e.g. the selected project marker).
    pub fn highlight_payload(&mut self, payload: Option<usize>) {
        self.highlight = payload
            .and_then(|p| self.objects.find_by_payload(p))
            .map(|o| o.id);
    }

    /// Advance the simulation by `delta` seconds.
    pub fn tick(&mut self, delta: f32) {
        let delta = delta.clamp(0.0, MAX_FRAME_DELTA_SEC);
        self.elapsed += delta;
        if self.hovered {
            self.hover_rotation += self.config.hover_spin * delta;
        }

        let motion = self.config.motion;
        self.objects.retain_mut(|o| motion.step(o, delta));
        self.bursts.step(delta, BURST_SPEED_SCALE);

        let mut group = self.config.group.transform(self.elapsed, self.pointer.current);
        group.rotation += self.hover_rotation;
        self.group = group;

        if let Some(p) = self.config.parallax {
            let target = Vec3::new(
                self.pointer.current.x * p.gain.x,
                self.pointer.current.y * p.gain.y,
                self.config.camera.z,
            );
            self.camera.position =
                super::input::smooth_toward(self.camera.position, target, p.smoothing);
        }
    }

    /// Cast a ray through `ndc` and act on the nearest live object.
    /// Misses and non-pickable scenes return `None` and change nothing.
    pub fn click(&mut self, ndc: Vec2) -> Option<PickEvent> {
        if !self.config.pickable {
            return None;
        }
        let ray = self.camera.ray_from_ndc(ndc);
        let hit = pick_nearest(ray, &self.objects, self.group.matrix(), PICK_RADIUS_FACTOR)?;
        let payload = self.objects.get(hit.id)?.payload;
        let removed = match self.config.on_pick {
            PickAction::Select => false,
            PickAction::Explode => {
                self.objects.remove(hit.id);
                let burst = ParticleBurst::spawn(
                    hit.point,
                    BURST_PARTICLE_COUNT,
                    SpeedRange {
                        min: BURST_SPEED_MIN,
                        max: BURST_SPEED_MAX,
                        planar: false,
                    },
                    BURST_LIFESPAN_SEC,
                    self.config.palette.burst,
                    BURST_POINT_SIZE,
                    &mut self.rng,
                );
                self.bursts.push(burst);
                true
            }
        };
        log::info!(
            "[pick] object {} payload={:?} removed={}",
            hit.id.0,
            payload,
            removed
        );
        Some(PickEvent {
            id: hit.id,
            payload,
            position: hit.point,
            removed,
        })
    }

    /// Fill `out` with one sprite per live object and burst particle.
    /// Nothing with opacity <= 0 is ever written.
    pub fn write_instances(&self, out: &mut Vec<SpriteInstance>) {
        out.clear();
        out.reserve(self.objects.len() + self.bursts.live_particles());
        let palette = &self.config.palette;
        let m = self.group.matrix();
        for o in &self.objects {
            let alpha = palette.opacity * o.opacity();
            if alpha <= 0.0 {
                continue;
            }
            let base = scale_rgb(palette.base, o.brightness);
            let rgb = if self.highlight == Some(o.id) {
                lerp_rgb(base, palette.highlight, 0.6)
            } else {
                base
            };
            out.push(SpriteInstance {
                position: m.transform_point3(o.position).to_array(),
                size: o.radius(),
                color: [rgb[0], rgb[1], rgb[2], alpha],
            });
        }
        for b in self.bursts.iter() {
            let alpha = b.opacity();
            if alpha <= 0.0 {
                continue;
            }
            let size = b.size();
            for p in b.particles() {
                out.push(SpriteInstance {
                    position: p.position.to_array(),
                    size,
                    color: [b.color[0], b.color[1], b.color[2], alpha],
                });
            }
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn objects(&self) -> &ObjectSet {
        &self.objects
    }

    pub fn bursts(&self) -> &BurstField {
        &self.bursts
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn pointer(&self) -> &super::input::PointerState {
        &self.pointer
    }

    pub fn group(&self) -> GroupTransform {
        self.group
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn viewport(&self) -> Option<(u32, u32)> {
        self.viewport
    }

    #[inline]
    pub fn live_objects(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn live_particles(&self) -> usize {
        self.bursts.live_particles()
    }

    /// World-space position of an object (group transform applied).
    pub fn world_position(&self, id: ObjectId) -> Option<Vec3> {
        let m = self.group.matrix();
        self.objects.get(id).map(|o| m.transform_point3(o.position))
    }
}
