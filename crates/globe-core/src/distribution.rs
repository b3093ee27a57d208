//! Golden-angle (Fibonacci) sphere distribution.
//!
//! Index `i` of `n` gets latitude `y = 1 - 2(i + 0.5)/n` and azimuth
//! `i * GOLDEN_ANGLE`. Both target shells are built from the same unit
//! direction, so expanding the field is a pure radial scale.

use crate::config::FieldConfig;
use crate::constants::GOLDEN_ANGLE;
use crate::particle::Particle;
use glam::Vec3;
use rand::prelude::*;
use std::f64::consts::TAU;

/// Azimuth of index `i`, wrapped to [0, 2π).
#[inline]
pub fn azimuth(index: usize) -> f64 {
    (index as f64 * GOLDEN_ANGLE).rem_euclid(TAU)
}

/// Unit direction of point `index` out of `count`.
///
/// Evaluated in f64: at 50k points the raw angle exceeds 1e5 rad, where f32
/// loses the low bits that separate neighbouring azimuths.
pub fn sphere_direction(index: usize, count: usize) -> Vec3 {
    let t = (index as f64 + 0.5) / count.max(1) as f64;
    let y = 1.0 - 2.0 * t;
    let planar = (1.0 - y * y).max(0.0).sqrt();
    let angle = azimuth(index);
    Vec3::new(
        (angle.cos() * planar) as f32,
        y as f32,
        (angle.sin() * planar) as f32,
    )
}

/// Builds the particle population described by `cfg`.
///
/// Jitter, drift and phase are drawn from a `StdRng` seeded with `cfg.seed`,
/// in that order per particle, so equal configs yield equal fields.
pub fn generate(cfg: &FieldConfig) -> Vec<Particle> {
    let n = cfg.point_count;
    let inner = cfg.inner_radius();
    let outer = cfg.outer_radius();
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let mut centered = |width: f32| (rng.gen::<f32>() - 0.5) * width;

    let mut particles = Vec::with_capacity(n);
    for i in 0..n {
        let dir = sphere_direction(i, n);
        let compact_target = dir * inner;
        let expanded_target = dir * outer;
        let jitter = Vec3::new(
            centered(cfg.jitter),
            centered(cfg.jitter),
            centered(cfg.jitter),
        );
        let velocity = Vec3::new(
            centered(cfg.drift),
            centered(cfg.drift),
            centered(cfg.drift),
        );
        let phase = (centered(1.0) + 0.5) * std::f32::consts::TAU;
        particles.push(Particle {
            position: compact_target + jitter,
            compact_target,
            expanded_target,
            velocity,
            phase,
        });
    }
    particles
}
