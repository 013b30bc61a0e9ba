use super::color::rgb_from_hex;
use super::motion::{GroupMotion, Motion, Wrap};
use super::placement::{Placement, ScaleRange, SpeedRange};
use crate::constants::*;
use crate::content::PROJECTS;
use glam::{Vec2, Vec3};
use std::str::FromStr;

/// Hard cap on generated objects per scene; keeps per-frame instance uploads bounded.
pub const MAX_OBJECTS: usize = 50_000;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown scene preset: {0}")]
    UnknownPreset(String),

    #[error("smoothing factor must be in (0, 1), got {0}")]
    Smoothing(f32),

    #[error("invalid {what} range: {min} > {max}")]
    Range { what: &'static str, min: f32, max: f32 },

    #[error("invalid camera clip planes: near={near} far={far}")]
    ClipPlanes { near: f32, far: f32 },

    #[error("grid needs at least one column")]
    EmptyGrid,

    #[error("too many objects: {0} (max {MAX_OBJECTS})")]
    TooManyObjects(usize),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    pub fov_deg: f32,
    pub z: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: DEFAULT_FOV_DEG,
            z: DEFAULT_CAMERA_Z,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }
}

/// Pointer-driven camera drift. Each frame the camera moves toward
/// `(pointer.x * gain.x, pointer.y * gain.y, camera.z)` by `smoothing`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub gain: Vec2,
    pub smoothing: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickAction {
    /// Report the hit; the surrounding UI owns the selection.
    Select,
    /// Remove the hit object and spawn a particle burst where it was.
    Explode,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub base: [f32; 3],
    pub highlight: [f32; 3],
    pub burst: [f32; 3],
    /// Per-object brightness drawn from `[1 - jitter, 1]`.
    pub brightness_jitter: f32,
    pub opacity: f32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            base: rgb_from_hex(ACCENT_HEX),
            highlight: rgb_from_hex(STAR_HEX),
            burst: rgb_from_hex(ACCENT_HEX),
            brightness_jitter: 0.0,
            opacity: 1.0,
        }
    }
}

/// Full description of one animated scene. Build with [`SceneConfig::builder`]
/// or start from a [`Preset`].
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub object_count: usize,
    pub placement: Placement,
    pub motion: Motion,
    pub velocity: Option<SpeedRange>,
    pub scale: ScaleRange,
    pub random_rotation: bool,
    /// Per-object spin in rad/s.
    pub spin: Vec3,
    pub group: GroupMotion,
    /// Extra group spin (rad/s) accumulated only while the pointer hovers the host.
    pub hover_spin: Vec3,
    /// Optional central object at the origin (orb core, wireframe hub).
    pub core_scale: Option<f32>,
    pub pickable: bool,
    pub on_pick: PickAction,
    /// Tag object `i` with payload `i` (links markers to static records).
    pub indexed_payloads: bool,
    pub camera: CameraConfig,
    pub parallax: Option<Parallax>,
    pub palette: Palette,
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            object_count: 300,
            placement: Placement::Random {
                half_extent: Vec3::splat(7.5),
            },
            motion: Motion::Still,
            velocity: None,
            scale: ScaleRange::fixed(0.015),
            random_rotation: false,
            spin: Vec3::ZERO,
            group: GroupMotion::default(),
            hover_spin: Vec3::ZERO,
            core_scale: None,
            pickable: false,
            on_pick: PickAction::Select,
            indexed_payloads: false,
            camera: CameraConfig::default(),
            parallax: None,
            palette: Palette::default(),
            seed: 42,
        }
    }
}

impl SceneConfig {
    pub fn builder() -> SceneConfigBuilder {
        SceneConfigBuilder {
            config: SceneConfig::default(),
        }
    }

    /// Continue building from this configuration (used for per-container overrides).
    pub fn to_builder(&self) -> SceneConfigBuilder {
        SceneConfigBuilder {
            config: self.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.object_count > MAX_OBJECTS {
            return Err(ConfigError::TooManyObjects(self.object_count));
        }
        if let Some(p) = self.parallax {
            if !(p.smoothing > 0.0 && p.smoothing < 1.0) {
                return Err(ConfigError::Smoothing(p.smoothing));
            }
        }
        if self.scale.min > self.scale.max {
            return Err(ConfigError::Range {
                what: "scale",
                min: self.scale.min,
                max: self.scale.max,
            });
        }
        if let Some(v) = self.velocity {
            if v.min > v.max {
                return Err(ConfigError::Range {
                    what: "speed",
                    min: v.min,
                    max: v.max,
                });
            }
        }
        let cam = self.camera;
        if !(cam.near > 0.0 && cam.far > cam.near) {
            return Err(ConfigError::ClipPlanes {
                near: cam.near,
                far: cam.far,
            });
        }
        if let Placement::Grid { columns: 0, .. } = self.placement {
            return Err(ConfigError::EmptyGrid);
        }
        Ok(())
    }
}

pub struct SceneConfigBuilder {
    config: SceneConfig,
}

impl SceneConfigBuilder {
    pub fn object_count(mut self, n: usize) -> Self {
        self.config.object_count = n;
        self
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.config.placement = placement;
        self
    }

    pub fn motion(mut self, motion: Motion) -> Self {
        self.config.motion = motion;
        self
    }

    pub fn velocity(mut self, speed: SpeedRange) -> Self {
        self.config.velocity = Some(speed);
        self
    }

    pub fn scale(mut self, scale: ScaleRange) -> Self {
        self.config.scale = scale;
        self
    }

    pub fn random_rotation(mut self, on: bool) -> Self {
        self.config.random_rotation = on;
        self
    }

    pub fn spin(mut self, spin: Vec3) -> Self {
        self.config.spin = spin;
        self
    }

    pub fn group(mut self, group: GroupMotion) -> Self {
        self.config.group = group;
        self
    }

    pub fn hover_spin(mut self, spin: Vec3) -> Self {
        self.config.hover_spin = spin;
        self
    }

    pub fn core(mut self, scale: f32) -> Self {
        self.config.core_scale = Some(scale);
        self
    }

    pub fn pickable(mut self, action: PickAction) -> Self {
        self.config.pickable = true;
        self.config.on_pick = action;
        self
    }

    pub fn indexed_payloads(mut self, on: bool) -> Self {
        self.config.indexed_payloads = on;
        self
    }

    pub fn camera(mut self, camera: CameraConfig) -> Self {
        self.config.camera = camera;
        self
    }

    pub fn camera_z(mut self, z: f32) -> Self {
        self.config.camera.z = z;
        self
    }

    pub fn parallax(mut self, gain: Vec2, smoothing: f32) -> Self {
        self.config.parallax = Some(Parallax { gain, smoothing });
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.config.palette = palette;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn build(self) -> Result<SceneConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// The animation variants used across the site, expressed as configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    Hero,
    Asteroids,
    Orb,
    Orbs,
    Grid,
    Particles,
    Skills,
    Icon,
    Projects,
}

impl Preset {
    pub const ALL: [Preset; 9] = [
        Preset::Hero,
        Preset::Asteroids,
        Preset::Orb,
        Preset::Orbs,
        Preset::Grid,
        Preset::Particles,
        Preset::Skills,
        Preset::Icon,
        Preset::Projects,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Hero => "hero",
            Preset::Asteroids => "asteroids",
            Preset::Orb => "orb",
            Preset::Orbs => "orbs",
            Preset::Grid => "grid",
            Preset::Particles => "particles",
            Preset::Skills => "skills",
            Preset::Icon => "icon",
            Preset::Projects => "projects",
        }
    }

    pub fn config(self) -> SceneConfig {
        let accent = rgb_from_hex(ACCENT_HEX);
        let base = SceneConfig::default();
        match self {
            Preset::Hero => SceneConfig {
                object_count: HERO_PARTICLE_COUNT,
                placement: Placement::Random {
                    half_extent: Vec3::splat(HERO_FIELD_EXTENT),
                },
                scale: ScaleRange::fixed(HERO_POINT_SIZE),
                group: GroupMotion {
                    spin: Vec3::new(0.02, 0.05, 0.0),
                    pointer_tilt: -0.25,
                    ..GroupMotion::default()
                },
                parallax: Some(Parallax {
                    gain: Vec2::new(0.8, 0.5),
                    smoothing: PARALLAX_SMOOTHING,
                }),
                ..base
            },
            Preset::Asteroids => SceneConfig {
                object_count: ASTEROID_COUNT,
                placement: Placement::Random {
                    half_extent: Vec3::splat(ASTEROID_FIELD_EXTENT),
                },
                motion: Motion::Drift {
                    wrap: Wrap::Toroidal {
                        half_extent: Vec3::splat(ASTEROID_FIELD_EXTENT),
                        axes: [true, true, false],
                    },
                },
                velocity: Some(SpeedRange {
                    min: 0.0,
                    max: ASTEROID_SPEED_MAX,
                    planar: true,
                }),
                scale: ScaleRange { min: 0.5, max: 2.5 },
                random_rotation: true,
                spin: Vec3::new(ASTEROID_SPIN, ASTEROID_SPIN, 0.0),
                pickable: true,
                on_pick: PickAction::Explode,
                camera: CameraConfig {
                    z: ASTEROID_CAMERA_Z,
                    ..CameraConfig::default()
                },
                palette: Palette {
                    base: rgb_from_hex(ASTEROID_HEX),
                    burst: accent,
                    ..Palette::default()
                },
                ..base
            },
            Preset::Orb => SceneConfig {
                object_count: 50,
                placement: Placement::Shell {
                    inner: 1.5,
                    outer: 2.5,
                },
                scale: ScaleRange::fixed(0.05),
                group: GroupMotion {
                    spin: Vec3::new(0.0, -0.3, 0.0),
                    ..GroupMotion::default()
                },
                core_scale: Some(1.0),
                parallax: Some(Parallax {
                    gain: Vec2::new(0.5, 0.5),
                    smoothing: PARALLAX_SMOOTHING,
                }),
                palette: Palette {
                    base: rgb_from_hex(STAR_HEX),
                    highlight: accent,
                    ..Palette::default()
                },
                ..base
            },
            Preset::Orbs => SceneConfig {
                object_count: 5,
                // Inside the antipodal radius so no orb starts out flipping every frame
                placement: Placement::Shell {
                    inner: 0.0,
                    outer: ORBS_FIELD_RADIUS,
                },
                motion: Motion::Drift {
                    wrap: Wrap::Antipodal {
                        radius: ORBS_WRAP_RADIUS,
                    },
                },
                velocity: Some(SpeedRange {
                    min: 0.0,
                    max: 0.0087,
                    planar: false,
                }),
                scale: ScaleRange { min: 0.2, max: 0.7 },
                parallax: Some(Parallax {
                    gain: Vec2::new(2.0, -2.0),
                    smoothing: ORBS_PARALLAX_SMOOTHING,
                }),
                palette: Palette {
                    brightness_jitter: 0.5,
                    ..Palette::default()
                },
                ..base
            },
            Preset::Grid => SceneConfig {
                object_count: 51 * 51,
                placement: Placement::Grid {
                    spacing: 1.0,
                    columns: 51,
                },
                scale: ScaleRange::fixed(0.03),
                group: GroupMotion {
                    spin: Vec3::new(0.0, 0.1, 0.0),
                    bob_amplitude: 2.0,
                    bob_rate: 0.5,
                    ..GroupMotion::default()
                },
                parallax: Some(Parallax {
                    gain: Vec2::new(1.0, 0.0),
                    smoothing: PARALLAX_SMOOTHING,
                }),
                palette: Palette {
                    base: rgb_from_hex(GRID_LINE_HEX),
                    highlight: accent,
                    ..Palette::default()
                },
                ..base
            },
            Preset::Particles => SceneConfig {
                group: GroupMotion {
                    spin: Vec3::new(0.02, 0.05, 0.0),
                    pointer_tilt: 0.2,
                    ..GroupMotion::default()
                },
                ..base
            },
            Preset::Skills => SceneConfig {
                object_count: 500,
                scale: ScaleRange::fixed(0.03),
                group: GroupMotion {
                    spin: Vec3::new(0.0, -0.02, 0.0),
                    ..GroupMotion::default()
                },
                core_scale: Some(1.5),
                palette: Palette {
                    opacity: 0.5,
                    ..Palette::default()
                },
                ..base
            },
            Preset::Icon => SceneConfig {
                object_count: 1,
                placement: Placement::Orbit { radius: 0.0 },
                scale: ScaleRange::fixed(1.0),
                group: GroupMotion {
                    spin: Vec3::new(0.05, 0.1, 0.0),
                    ..GroupMotion::default()
                },
                hover_spin: Vec3::new(1.8, 3.0, 0.0),
                camera: CameraConfig {
                    z: 2.5,
                    ..CameraConfig::default()
                },
                ..base
            },
            Preset::Projects => SceneConfig {
                object_count: PROJECTS.len(),
                placement: Placement::Orbit {
                    radius: PROJECT_ORBIT_RADIUS,
                },
                motion: Motion::Orbit {
                    angular_rate: PROJECT_ORBIT_RATE,
                },
                scale: ScaleRange::fixed(PROJECT_MARKER_SCALE),
                pickable: true,
                on_pick: PickAction::Select,
                indexed_payloads: true,
                parallax: Some(Parallax {
                    gain: Vec2::new(0.5, 0.5),
                    smoothing: PARALLAX_SMOOTHING,
                }),
                ..base
            },
        }
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == key)
            .ok_or(ConfigError::UnknownPreset(s.to_string()))
    }
}
