// Shared scene tuning constants. These are cosmetic defaults lifted from the
// site's animations; presets in `scene::config` are built from them.

// Palette
pub const ACCENT_HEX: u32 = 0xBE77FF;
pub const ASTEROID_HEX: u32 = 0xAAAAAA;
pub const STAR_HEX: u32 = 0xFFFFFF;
pub const GRID_LINE_HEX: u32 = 0x555555;

// Camera
pub const DEFAULT_FOV_DEG: f32 = 75.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 1000.0;
pub const DEFAULT_CAMERA_Z: f32 = 5.0;

// Parallax: camera += (target - camera) * k, k in (0, 1)
pub const PARALLAX_SMOOTHING: f32 = 0.05;
pub const ORBS_PARALLAX_SMOOTHING: f32 = 0.02;

// Orbs
pub const ORBS_FIELD_RADIUS: f32 = 5.0;
pub const ORBS_WRAP_RADIUS: f32 = 8.0;

// Hero field
pub const HERO_PARTICLE_COUNT: usize = 10_000;
pub const HERO_FIELD_EXTENT: f32 = 10.0; // half-width of the cube
pub const HERO_POINT_SIZE: f32 = 0.012;

// Asteroid field
pub const ASTEROID_COUNT: usize = 100;
pub const ASTEROID_FIELD_EXTENT: f32 = 50.0; // wrap bound on X and Y
pub const ASTEROID_CAMERA_Z: f32 = 30.0;
pub const ASTEROID_SPEED_MAX: f32 = 0.035; // units per frame
pub const ASTEROID_SPIN: f32 = 0.06; // rad/s, ~0.001 per frame at 60 Hz

// Explosion bursts
pub const BURST_PARTICLE_COUNT: usize = 200;
pub const BURST_LIFESPAN_SEC: f32 = 1.0;
pub const BURST_SPEED_MIN: f32 = 0.2;
pub const BURST_SPEED_MAX: f32 = 0.7;
pub const BURST_SPEED_SCALE: f32 = 20.0; // velocity * delta * scale
pub const BURST_POINT_SIZE: f32 = 0.2;

// Picking: sphere radius = object scale * factor
pub const PICK_RADIUS_FACTOR: f32 = 1.0;

// Projects orbit
pub const PROJECT_ORBIT_RADIUS: f32 = 2.2;
pub const PROJECT_ORBIT_RATE: f32 = 0.15; // rad/s
pub const PROJECT_MARKER_SCALE: f32 = 0.35;
