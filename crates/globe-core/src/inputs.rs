//! Per-frame control inputs handed to the integrator by the page.
//!
//! These are plain values captured once per frame. The page's scroll handler
//! may update its own copy at any rate; the integrator only ever sees the
//! snapshot it was given.

use crate::constants::{COMPACT_COLOR_SRGB, EXPANDED_COLOR_SRGB};

/// Which target shape the field is animating toward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Effect {
    #[default]
    Compact,
    Expanded,
}

impl Effect {
    /// Page color for this effect as `0xRRGGBB` sRGB.
    #[inline]
    pub fn srgb(self) -> u32 {
        match self {
            Effect::Compact => COMPACT_COLOR_SRGB,
            Effect::Expanded => EXPANDED_COLOR_SRGB,
        }
    }

    /// Linear RGBA point color. Render targets are sRGB, so the hardware
    /// re-encodes it to the page color on write.
    #[inline]
    pub fn color(self) -> [f32; 4] {
        srgb_hex_to_linear(self.srgb())
    }
}

/// Decodes one sRGB channel in [0, 1] to linear light.
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// `0xRRGGBB` to opaque linear RGBA.
pub fn srgb_hex_to_linear(hex: u32) -> [f32; 4] {
    let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xFF) as f32 / 255.0);
    [channel(16), channel(8), channel(0), 1.0]
}

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInputs {
    pub effect: Effect,
    /// Fraction of the header scrolled past, in [0, 1].
    pub scroll_progress: f32,
    /// Scaled page scroll position in pixels.
    pub scroll_offset: f32,
    pub viewport: Viewport,
}

impl FrameInputs {
    /// Copy with out-of-range values pulled back to safe defaults.
    pub fn sanitized(&self) -> Self {
        let finite_or_zero = |v: f32| if v.is_finite() { v } else { 0.0 };
        Self {
            effect: self.effect,
            scroll_progress: finite_or_zero(self.scroll_progress).clamp(0.0, 1.0),
            scroll_offset: finite_or_zero(self.scroll_offset),
            viewport: Viewport {
                width: finite_or_zero(self.viewport.width).max(0.0),
                height: finite_or_zero(self.viewport.height).max(0.0),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_compact_and_zero_scroll() {
        let inputs = FrameInputs::default();
        assert_eq!(inputs.effect, Effect::Compact);
        assert_eq!(inputs.scroll_progress, 0.0);
        assert_eq!(inputs.scroll_offset, 0.0);
    }

    #[test]
    fn sanitized_clamps_progress_and_drops_nan() {
        let inputs = FrameInputs {
            scroll_progress: 3.0,
            scroll_offset: f32::NAN,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(inputs.scroll_progress, 1.0);
        assert_eq!(inputs.scroll_offset, 0.0);
    }

    #[test]
    fn effect_colors_differ() {
        assert_ne!(Effect::Compact.color(), Effect::Expanded.color());
    }

    #[test]
    fn colors_are_linearized_from_srgb() {
        // #555 is 0.0908 in linear light, not its 0.333 sRGB code value
        let grey = Effect::Expanded.color();
        for c in &grey[..3] {
            assert!((c - 0.0908).abs() < 1e-3, "got {c}");
        }
        assert_eq!(grey[3], 1.0);
        assert_eq!(Effect::Compact.color(), [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn srgb_decode_endpoints_and_toe() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        assert!((srgb_to_linear(0.04) - 0.04 / 12.92).abs() < 1e-7);
        assert_eq!(srgb_hex_to_linear(0x000000), [0.0, 0.0, 0.0, 1.0]);
    }
}
