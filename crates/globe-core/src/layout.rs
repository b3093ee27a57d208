use crate::config::LayoutConfig;
use crate::inputs::{Effect, Viewport};
use glam::Vec3;

/// Scroll distance mapped to [0, 1]; anything past `max_scroll` saturates.
#[inline]
pub fn scroll_ratio(layout: &LayoutConfig, scroll_offset: f32) -> f32 {
    (scroll_offset / layout.max_scroll).clamp(0.0, 1.0)
}

/// Where the whole point group should sit for this viewport, effect and scroll.
///
/// On wide screens the compact globe shifts right to sit beside the header
/// copy. Once expanded (or on short wide screens) it rises from its base
/// height toward the centre as the page scrolls.
pub fn target_group_offset(
    layout: &LayoutConfig,
    effect: Effect,
    scroll_offset: f32,
    viewport: Viewport,
) -> Vec3 {
    let wide = viewport.width >= layout.wide_min_width;
    let tall = viewport.height >= layout.tall_min_height;
    let compact = effect == Effect::Compact;

    let x = if wide && compact {
        layout.wide_compact_x
    } else {
        0.0
    };

    let base_y = if wide {
        layout.wide_base_y
    } else {
        layout.narrow_base_y
    };
    let y = if wide && tall && compact {
        layout.wide_tall_compact_y
    } else if !wide && compact {
        layout.narrow_compact_y
    } else {
        base_y + scroll_ratio(layout, scroll_offset) * base_y.abs()
    };

    Vec3::new(x, y, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE_TALL: Viewport = Viewport {
        width: 1440.0,
        height: 900.0,
    };
    const NARROW: Viewport = Viewport {
        width: 390.0,
        height: 844.0,
    };

    #[test]
    fn compact_on_wide_screen_sits_right_and_high() {
        let l = LayoutConfig::default();
        let t = target_group_offset(&l, Effect::Compact, 0.0, WIDE_TALL);
        assert_eq!(t, Vec3::new(2.0, 0.3, 0.0));
    }

    #[test]
    fn compact_on_narrow_screen_is_centered_low() {
        let l = LayoutConfig::default();
        let t = target_group_offset(&l, Effect::Compact, 250.0, NARROW);
        assert_eq!(t, Vec3::new(0.0, -0.5, 0.0));
    }

    #[test]
    fn expanded_rises_with_scroll_until_the_cap() {
        let l = LayoutConfig::default();
        let at = |s| target_group_offset(&l, Effect::Expanded, s, WIDE_TALL).y;
        assert!((at(0.0) + 0.3).abs() < 1e-6);
        assert!((at(200.0) + 0.15).abs() < 1e-6);
        assert!(at(400.0).abs() < 1e-6);
        assert_eq!(at(800.0), at(400.0));
    }

    #[test]
    fn short_wide_screen_uses_scroll_rule_even_when_compact() {
        let l = LayoutConfig::default();
        let short = Viewport {
            width: 1280.0,
            height: 600.0,
        };
        let t = target_group_offset(&l, Effect::Compact, 0.0, short);
        assert_eq!(t, Vec3::new(2.0, -0.3, 0.0));
    }

    #[test]
    fn negative_scroll_does_not_push_below_base() {
        let l = LayoutConfig::default();
        assert_eq!(scroll_ratio(&l, -100.0), 0.0);
    }
}
