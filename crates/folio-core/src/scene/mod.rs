pub mod burst;
pub mod camera;
pub mod color;
pub mod config;
pub mod input;
pub mod motion;
pub mod object;
pub mod pick;
pub mod placement;
pub mod state;

pub use burst::{BurstField, Particle, ParticleBurst};
pub use camera::Camera;
pub use color::{lerp_rgb, rgb_from_hex, scale_rgb};
pub use config::{
    CameraConfig, ConfigError, Palette, Parallax, PickAction, Preset, SceneConfig,
    SceneConfigBuilder,
};
pub use input::{normalize_in_rect, normalize_pointer, smooth_toward, PointerState};
pub use motion::{GroupMotion, Motion, Wrap};
pub use object::{Lifespan, ObjectId, ObjectSet, VisualObject};
pub use pick::{pick_nearest, ray_sphere, Hit, Ray, Selection};
pub use placement::{orbit_position, Placement, ScaleRange, SpeedRange};
pub use state::{PickEvent, Scene, SpriteInstance};
