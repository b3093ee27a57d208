use glam::Vec3;

// Shared visual tuning constants used by both web and native frontends.

// Field geometry
pub const DEFAULT_RADIUS: f32 = 3.0; // radius the page hands to the globe
pub const RADIUS_SCALE: f32 = 0.4; // page radius -> world radius
pub const EXPANDED_RADIUS_BASE: f32 = 4.5; // scaled by RADIUS_SCALE like the page radius
pub const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653; // PI * (3 - sqrt(5))

// Particle seeding
pub const INITIAL_JITTER: f32 = 0.15; // full width of the per-axis start offset
pub const DRIFT_PER_FRAME: f32 = 0.002; // full width of the per-axis drift, per reference frame
pub const REFERENCE_FPS: f32 = 60.0; // frame rate the per-frame tunings were authored at

// Wave motion
pub const WAVE_AMPLITUDE: f32 = 0.015;
pub const WAVE_FREQUENCIES: [f32; 3] = [0.5, 0.3, 0.4]; // rad/s per axis
pub const WAVE_Z_PHASE_SHIFT: f32 = 1.0;

// Easing factors as authored per reference frame
pub const POSITION_BLEND_PER_FRAME: f32 = 0.15;
pub const SIZE_BLEND_PER_FRAME: f32 = 0.1;
pub const GROUP_BLEND_PER_FRAME: f32 = 0.05;

// Point size rule
pub const BASE_POINT_SIZE: f32 = 0.02;
pub const POINT_SIZE_GROWTH: f32 = 0.03;
pub const SIZE_SAMPLE_COUNT: usize = 100; // particles averaged for the expansion proxy
pub const SIZE_THRESHOLD_DISTANCE: f32 = 4.0;
pub const SIZE_REFERENCE_DISTANCE: f32 = 5.0;
pub const MAX_EXPANSION_EXPANDED: f32 = 4.5;
pub const MAX_EXPANSION_COMPACT: f32 = 2.5;

// Group layout (viewport in CSS pixels)
pub const WIDE_VIEWPORT_MIN_WIDTH: f32 = 768.0;
pub const TALL_VIEWPORT_MIN_HEIGHT: f32 = 700.0;
pub const MAX_SCROLL_FOR_MOVEMENT: f32 = 400.0;
pub const WIDE_COMPACT_OFFSET_X: f32 = 2.0;
pub const WIDE_BASE_Y: f32 = -0.3;
pub const NARROW_BASE_Y: f32 = -1.5;
pub const WIDE_TALL_COMPACT_Y: f32 = 0.3;
pub const NARROW_COMPACT_Y: f32 = -0.5;

// Group rotation
pub const SPIN_RATE: f32 = 0.1; // rad/s around +Y
pub const TILT: f32 = 0.3; // rad around +X

// Seed for jitter, drift and phase when the caller does not supply one
pub const DEFAULT_SEED: u64 = 42;

// Frame clock
pub const MAX_FRAME_DELTA: f32 = 0.1; // seconds; longer gaps (tab resume) are clamped

// Point colors per effect, as sRGB hex (linearized before reaching the GPU)
pub const COMPACT_COLOR_SRGB: u32 = 0xFFFFFF;
pub const EXPANDED_COLOR_SRGB: u32 = 0x555555;

// Camera and lights of the presentation layer
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_FOV_DEGREES: f32 = 50.0;
pub const AMBIENT_INTENSITY: f32 = 0.6;
pub const DIRECTIONAL_INTENSITY: f32 = 0.8;
pub const DIRECTIONAL_POSITION: [f32; 3] = [5.0, 5.0, 5.0];

// Point-count policy
pub const LOW_POWER_POINT_COUNT: usize = 20_000;
pub const DEFAULT_POINT_COUNT: usize = 50_000;

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::new(0.0, 0.0, CAMERA_Z)
}
