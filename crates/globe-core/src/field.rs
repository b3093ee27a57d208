//! The particle field and its per-frame integrator.

use crate::config::{ConfigError, FieldConfig, WaveConfig};
use crate::distribution;
use crate::easing::{blend_factor, ease_f32, ease_vec3};
use crate::inputs::{Effect, FrameInputs};
use crate::layout::target_group_offset;
use crate::particle::{Particle, PointBuffer};
use glam::{Mat4, Vec3};
use std::f32::consts::TAU;

/// Per-axis wave angles `t * frequency`, wrapped to [0, 2π) in f64.
///
/// The clock grows without bound; wrapping before the f32 cast keeps the
/// wave moving smoothly however long the page stays open.
pub fn wave_angles(wave: &WaveConfig, t: f64) -> [f32; 3] {
    wave.frequencies
        .map(|f| (t * f as f64).rem_euclid(std::f64::consts::TAU) as f32)
}

/// Wave displacement of a particle with `phase` at the given angles.
#[inline]
pub fn wave_offset(wave: &WaveConfig, angles: [f32; 3], phase: f32) -> Vec3 {
    Vec3::new(
        (angles[0] + phase).sin(),
        (angles[1] + phase).cos(),
        (angles[2] + phase + wave.z_phase_shift).sin(),
    ) * wave.amplitude
}

/// Orientation of the whole group: a fixed tilt about X, then a spin about Y.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GroupRotation {
    pub tilt: f32,
    pub spin: f32,
}

/// Everything the presentation layer needs for one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameOutput<'a> {
    /// Three floats per particle.
    pub positions: &'a [f32],
    /// Set when `positions` changed since the last output and must be re-uploaded.
    pub positions_dirty: bool,
    pub point_size: f32,
    pub color: [f32; 4],
    pub group_offset: Vec3,
    pub rotation: GroupRotation,
}

impl FrameOutput<'_> {
    #[inline]
    pub fn point_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Group transform: translate, then tilt about X, then spin about Y.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.group_offset)
            * Mat4::from_rotation_x(self.rotation.tilt)
            * Mat4::from_rotation_y(self.rotation.spin)
    }
}

pub struct ParticleField {
    config: FieldConfig,
    particles: Vec<Particle>,
    buffer: PointBuffer,
    elapsed: f64,
    effect: Effect,
    current_size: f32,
    target_size: f32,
    group_position: Vec3,
    rotation: GroupRotation,
}

impl ParticleField {
    pub fn new(config: FieldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let particles = distribution::generate(&config);
        let mut buffer = PointBuffer::new(particles.len());
        for (i, p) in particles.iter().enumerate() {
            buffer.set(i, p.position);
        }
        log::info!(
            "[field] points={} inner_r={:.2} outer_r={:.2} seed={} max_dt={:?}",
            particles.len(),
            config.inner_radius(),
            config.outer_radius(),
            config.seed,
            config.max_frame_delta
        );
        Ok(Self {
            current_size: config.size.base,
            target_size: config.size.base,
            rotation: GroupRotation {
                tilt: config.rotation.tilt,
                spin: 0.0,
            },
            config,
            particles,
            buffer,
            elapsed: 0.0,
            effect: Effect::default(),
            group_position: Vec3::ZERO,
        })
    }

    /// Advances the field by one frame.
    ///
    /// `dt` is the wall-clock time since the previous frame in seconds. It is
    /// clamped to `max_frame_delta` (when set) and non-finite or negative
    /// values count as zero. Step order: particles, point size, group offset,
    /// rotation.
    pub fn step(&mut self, dt: f32, inputs: &FrameInputs) -> FrameOutput<'_> {
        let dt = self.frame_delta(dt);
        let inputs = inputs.sanitized();
        self.elapsed += dt as f64;
        if inputs.effect != self.effect {
            log::debug!("[field] effect {:?} -> {:?}", self.effect, inputs.effect);
            self.effect = inputs.effect;
        }

        self.integrate_particles(dt);
        self.update_point_size(dt);
        self.update_group(dt, &inputs);
        self.output()
    }

    /// Current state without advancing time. Consumes the dirty flag like
    /// [`step`](Self::step) does.
    pub fn output(&mut self) -> FrameOutput<'_> {
        let positions_dirty = self.buffer.take_dirty();
        FrameOutput {
            positions: self.buffer.as_slice(),
            positions_dirty,
            point_size: self.current_size,
            color: self.effect.color(),
            group_offset: self.group_position,
            rotation: self.rotation,
        }
    }

    fn frame_delta(&self, dt: f32) -> f32 {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        match self.config.max_frame_delta {
            Some(max_dt) => dt.min(max_dt),
            None => dt,
        }
    }

    fn integrate_particles(&mut self, dt: f32) {
        let effect = self.effect;
        let wave = &self.config.wave;
        let angles = wave_angles(wave, self.elapsed);
        let blend = blend_factor(self.config.smoothing.position_half_life, dt);

        for (i, p) in self.particles.iter_mut().enumerate() {
            let target = p.active_target(effect);
            let offset = if wave.amplitude > 0.0 {
                wave_offset(wave, angles, p.phase)
            } else {
                Vec3::ZERO
            };
            p.position += p.velocity * dt;
            p.position = p.position.lerp(target + offset, blend);
            self.buffer.set(i, p.position);
        }
        if !self.particles.is_empty() {
            self.buffer.mark_dirty();
        }
    }

    fn update_point_size(&mut self, dt: f32) {
        let rule = &self.config.size;
        let avg = self.mean_sample_distance();
        self.target_size = if avg < rule.threshold_distance {
            rule.base
        } else {
            let max_expansion = match self.effect {
                Effect::Expanded => rule.max_expansion_expanded,
                Effect::Compact => rule.max_expansion_compact,
            };
            let ratio = ((avg - rule.reference_distance)
                / (max_expansion - rule.reference_distance))
                .clamp(0.0, 1.0);
            rule.base + ratio * rule.growth
        };
        self.current_size = ease_f32(
            self.current_size,
            self.target_size,
            self.config.smoothing.size_half_life,
            dt,
        );
    }

    /// Mean distance from the origin over the first few particles, used as a
    /// cheap proxy for how expanded the field currently looks.
    fn mean_sample_distance(&self) -> f32 {
        let n = self.particles.len().min(self.config.size.sample_count);
        if n == 0 {
            return 0.0;
        }
        let sum: f32 = self.particles[..n].iter().map(|p| p.position.length()).sum();
        sum / n as f32
    }

    fn update_group(&mut self, dt: f32, inputs: &FrameInputs) {
        let target = target_group_offset(
            &self.config.layout,
            inputs.effect,
            inputs.scroll_offset,
            inputs.viewport,
        );
        self.group_position = ease_vec3(
            self.group_position,
            target,
            self.config.smoothing.group_half_life,
            dt,
        );
        self.rotation.tilt = self.config.rotation.tilt;
        let spin = self.rotation.spin + dt * self.config.rotation.spin_rate;
        self.rotation.spin = spin.rem_euclid(TAU);
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.particles.len()
    }

    /// Seconds of animation time integrated so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn effect(&self) -> Effect {
        self.effect
    }

    pub fn point_size(&self) -> f32 {
        self.current_size
    }

    pub fn target_point_size(&self) -> f32 {
        self.target_size
    }

    pub fn group_position(&self) -> Vec3 {
        self.group_position
    }

    pub fn rotation(&self) -> GroupRotation {
        self.rotation
    }
}
