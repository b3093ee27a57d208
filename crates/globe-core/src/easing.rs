//! Frame-rate independent exponential smoothing.
//!
//! Every eased quantity in the field is described by a half-life in seconds:
//! the time it takes to close half of the remaining gap to its target. A
//! per-frame lerp factor `f` authored at a fixed frame rate maps to the
//! half-life `ln(0.5) / ln(1 - f) / fps`, so the look is preserved at any
//! display refresh rate.

use glam::Vec3;

/// Fraction of the remaining gap to close this frame.
///
/// A non-positive half-life snaps to the target; a non-positive `dt` leaves the
/// value untouched.
#[inline]
pub fn blend_factor(half_life: f32, dt: f32) -> f32 {
    if half_life <= 0.0 {
        return 1.0;
    }
    if dt <= 0.0 {
        return 0.0;
    }
    1.0 - 0.5_f32.powf(dt / half_life)
}

/// Half-life equivalent to lerping by `factor` once per frame at `fps`.
pub fn half_life_from_per_frame(factor: f32, fps: f32) -> f32 {
    if factor >= 1.0 {
        return 0.0;
    }
    let factor = factor.max(f32::EPSILON);
    (0.5_f32.ln() / (1.0 - factor).ln()) / fps
}

#[inline]
pub fn ease_f32(current: f32, target: f32, half_life: f32, dt: f32) -> f32 {
    current + (target - current) * blend_factor(half_life, dt)
}

#[inline]
pub fn ease_vec3(current: Vec3, target: Vec3, half_life: f32, dt: f32) -> Vec3 {
    current.lerp(target, blend_factor(half_life, dt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_half_life_closes_half_the_gap() {
        let v = ease_f32(0.0, 1.0, 0.25, 0.25);
        assert!((v - 0.5).abs() < 1e-6);
    }

    #[test]
    fn per_frame_conversion_reproduces_the_authored_factor() {
        let hl = half_life_from_per_frame(0.15, 60.0);
        assert!((blend_factor(hl, 1.0 / 60.0) - 0.15).abs() < 1e-5);
        // two half-frames equal one full frame
        let half = blend_factor(hl, 1.0 / 120.0);
        let two_steps = 1.0 - (1.0 - half) * (1.0 - half);
        assert!((two_steps - 0.15).abs() < 1e-5);
    }

    #[test]
    fn zero_half_life_snaps_and_zero_dt_holds() {
        assert_eq!(blend_factor(0.0, 0.016), 1.0);
        assert_eq!(blend_factor(0.1, 0.0), 0.0);
        assert_eq!(half_life_from_per_frame(1.0, 60.0), 0.0);
    }
}
