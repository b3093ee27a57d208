//! Turns raw page scroll geometry into the field's control inputs.
//!
//! The page reports where its header currently sits; the tracker derives the
//! scroll progress through the header, the scaled scroll offset and the
//! effect (compact globe while the header is in view, expanded once the
//! reader scrolls into the content).

use crate::inputs::Effect;

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollConfig {
    /// Multiplier from page scroll pixels to the offset fed to the layout.
    pub offset_scale: f32,
    /// Fraction of the header height that must scroll past for full progress.
    pub progress_span: f32,
    /// Header counts as visible while its bottom edge is below this fraction of the viewport.
    pub visible_fraction: f32,
    /// Progress above which a visible header already switches to expanded.
    pub expand_progress: f32,
    /// Page scroll beyond which a landing or a stalled progress counts as fully scrolled.
    pub scrolled_past: f32,
    /// Progress below which a scrolled page is forced to complete.
    pub completion_floor: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            offset_scale: 1.5,
            progress_span: 0.8,
            visible_fraction: 0.3,
            expand_progress: 0.1,
            scrolled_past: 100.0,
            completion_floor: 0.5,
        }
    }
}

/// One reading of the page geometry, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    pub scroll_y: f32,
    /// Header bottom edge relative to the viewport top.
    pub header_bottom: f32,
    pub header_height: f32,
    pub viewport_height: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub effect: Effect,
    pub progress: f32,
    pub offset: f32,
}

#[derive(Clone, Debug, Default)]
pub struct ScrollTracker {
    config: ScrollConfig,
    state: ScrollState,
}

impl ScrollTracker {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            state: ScrollState::default(),
        }
    }

    /// First reading after the page loads. A page restored mid-scroll starts
    /// fully expanded before the regular rules run.
    pub fn initial(&mut self, sample: ScrollSample) -> ScrollState {
        if sample.scroll_y > self.config.scrolled_past {
            log::debug!("[scroll] landed at y={:.0}, starting expanded", sample.scroll_y);
            self.state.progress = 1.0;
            self.state.effect = Effect::Expanded;
        }
        self.update(sample)
    }

    /// Applies one scroll event.
    pub fn update(&mut self, sample: ScrollSample) -> ScrollState {
        let cfg = &self.config;
        let offset = finite(sample.scroll_y) * cfg.offset_scale;

        let span = sample.header_height * cfg.progress_span;
        let mut progress = if span > 0.0 {
            ((sample.header_height - sample.header_bottom) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        if !progress.is_finite() {
            progress = 0.0;
        }

        let header_visible = sample.header_bottom > sample.viewport_height * cfg.visible_fraction;
        let effect = if !header_visible || progress > cfg.expand_progress {
            Effect::Expanded
        } else {
            Effect::Compact
        };

        if sample.scroll_y > cfg.scrolled_past && progress < cfg.completion_floor {
            progress = 1.0;
        }

        self.state = ScrollState {
            effect,
            progress,
            offset,
        };
        self.state
    }

    #[inline]
    pub fn state(&self) -> ScrollState {
        self.state
    }
}

#[inline]
fn finite(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
