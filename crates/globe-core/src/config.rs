//! Construction-time configuration for a [`ParticleField`](crate::ParticleField).
//!
//! `Default` reproduces the portfolio page: a radius-3 globe (1.2 world units)
//! expanding to 1.8, authored against 60 fps and converted to half-lives.

use crate::constants::*;
use crate::easing::half_life_from_per_frame;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("{name} must be a non-negative finite number, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("size rule max expansion {max} must differ from its reference distance {reference}")]
    DegenerateSizeRule { reference: f32, max: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct WaveConfig {
    pub amplitude: f32,
    /// Angular frequency per axis (rad/s).
    pub frequencies: [f32; 3],
    /// Extra phase on the z axis so the three sinusoids never pulse together.
    pub z_phase_shift: f32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            amplitude: WAVE_AMPLITUDE,
            frequencies: WAVE_FREQUENCIES,
            z_phase_shift: WAVE_Z_PHASE_SHIFT,
        }
    }
}

/// Half-lives (seconds) of the three eased quantities.
#[derive(Clone, Debug, PartialEq)]
pub struct Smoothing {
    pub position_half_life: f32,
    pub size_half_life: f32,
    pub group_half_life: f32,
}

impl Default for Smoothing {
    fn default() -> Self {
        // ~0.071s, ~0.110s and ~0.225s respectively
        Self {
            position_half_life: half_life_from_per_frame(POSITION_BLEND_PER_FRAME, REFERENCE_FPS),
            size_half_life: half_life_from_per_frame(SIZE_BLEND_PER_FRAME, REFERENCE_FPS),
            group_half_life: half_life_from_per_frame(GROUP_BLEND_PER_FRAME, REFERENCE_FPS),
        }
    }
}

/// Maps how far the field looks expanded to a point size.
#[derive(Clone, Debug, PartialEq)]
pub struct SizeRule {
    pub base: f32,
    pub growth: f32,
    pub sample_count: usize,
    pub threshold_distance: f32,
    pub reference_distance: f32,
    pub max_expansion_expanded: f32,
    pub max_expansion_compact: f32,
}

impl Default for SizeRule {
    fn default() -> Self {
        Self {
            base: BASE_POINT_SIZE,
            growth: POINT_SIZE_GROWTH,
            sample_count: SIZE_SAMPLE_COUNT,
            threshold_distance: SIZE_THRESHOLD_DISTANCE,
            reference_distance: SIZE_REFERENCE_DISTANCE,
            max_expansion_expanded: MAX_EXPANSION_EXPANDED,
            max_expansion_compact: MAX_EXPANSION_COMPACT,
        }
    }
}

/// Viewport breakpoints and offsets for placing the whole group on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    pub wide_min_width: f32,
    pub tall_min_height: f32,
    pub max_scroll: f32,
    pub wide_compact_x: f32,
    pub wide_base_y: f32,
    pub narrow_base_y: f32,
    pub wide_tall_compact_y: f32,
    pub narrow_compact_y: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            wide_min_width: WIDE_VIEWPORT_MIN_WIDTH,
            tall_min_height: TALL_VIEWPORT_MIN_HEIGHT,
            max_scroll: MAX_SCROLL_FOR_MOVEMENT,
            wide_compact_x: WIDE_COMPACT_OFFSET_X,
            wide_base_y: WIDE_BASE_Y,
            narrow_base_y: NARROW_BASE_Y,
            wide_tall_compact_y: WIDE_TALL_COMPACT_Y,
            narrow_compact_y: NARROW_COMPACT_Y,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RotationConfig {
    pub spin_rate: f32,
    pub tilt: f32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            spin_rate: SPIN_RATE,
            tilt: TILT,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub point_count: usize,
    /// Page-space radius; world radius is `radius * radius_scale`.
    pub radius: f32,
    /// Page-space radius of the expanded shell.
    pub expanded_radius: f32,
    pub radius_scale: f32,
    /// Full width of the uniform per-axis start offset.
    pub jitter: f32,
    /// Full width of the uniform per-axis drift velocity, in units per second.
    pub drift: f32,
    pub wave: WaveConfig,
    pub smoothing: Smoothing,
    pub size: SizeRule,
    pub layout: LayoutConfig,
    pub rotation: RotationConfig,
    /// Upper bound on a single frame's `dt`. `None` integrates any gap as-is.
    pub max_frame_delta: Option<f32>,
    pub seed: u64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            radius: DEFAULT_RADIUS,
            expanded_radius: EXPANDED_RADIUS_BASE,
            radius_scale: RADIUS_SCALE,
            jitter: INITIAL_JITTER,
            drift: DRIFT_PER_FRAME * REFERENCE_FPS,
            wave: WaveConfig::default(),
            smoothing: Smoothing::default(),
            size: SizeRule::default(),
            layout: LayoutConfig::default(),
            rotation: RotationConfig::default(),
            max_frame_delta: Some(MAX_FRAME_DELTA),
            seed: DEFAULT_SEED,
        }
    }
}

impl FieldConfig {
    /// World-space radius of the compact sphere.
    #[inline]
    pub fn inner_radius(&self) -> f32 {
        self.radius * self.radius_scale
    }

    /// World-space radius of the expanded sphere.
    #[inline]
    pub fn outer_radius(&self) -> f32 {
        self.expanded_radius * self.radius_scale
    }

    pub fn with_point_count(mut self, point_count: usize) -> Self {
        self.point_count = point_count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Disables start jitter, drift and wave motion so particles follow their
    /// targets exactly.
    pub fn without_ambient_motion(mut self) -> Self {
        self.jitter = 0.0;
        self.drift = 0.0;
        self.wave.amplitude = 0.0;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("radius", self.radius)?;
        positive("expanded_radius", self.expanded_radius)?;
        positive("radius_scale", self.radius_scale)?;
        non_negative("jitter", self.jitter)?;
        non_negative("drift", self.drift)?;
        non_negative("wave.amplitude", self.wave.amplitude)?;
        for f in self.wave.frequencies {
            non_negative("wave.frequencies", f)?;
        }
        non_negative("smoothing.position_half_life", self.smoothing.position_half_life)?;
        non_negative("smoothing.size_half_life", self.smoothing.size_half_life)?;
        non_negative("smoothing.group_half_life", self.smoothing.group_half_life)?;
        positive("size.base", self.size.base)?;
        non_negative("size.growth", self.size.growth)?;
        for max in [self.size.max_expansion_expanded, self.size.max_expansion_compact] {
            if (max - self.size.reference_distance).abs() <= f32::EPSILON {
                return Err(ConfigError::DegenerateSizeRule {
                    reference: self.size.reference_distance,
                    max,
                });
            }
        }
        positive("layout.max_scroll", self.layout.max_scroll)?;
        if let Some(max_dt) = self.max_frame_delta {
            positive("max_frame_delta", max_dt)?;
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}
