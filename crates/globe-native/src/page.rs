//! A stand-in for the portfolio page: a full-height header followed by
//! content, scrolled with the mouse wheel or keyboard.

use globe_core::ScrollSample;

/// Pixels scrolled per wheel line or arrow key press.
pub const LINE_STEP: f32 = 40.0;
/// How many viewport heights of content follow the header.
pub const CONTENT_SCREENS: f32 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VirtualPage {
    scroll_y: f32,
    viewport_height: f32,
}

impl VirtualPage {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            scroll_y: 0.0,
            viewport_height: viewport_height.max(0.0),
        }
    }

    #[inline]
    pub fn header_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn max_scroll(&self) -> f32 {
        // header + content, minus the visible window
        self.header_height() + self.viewport_height * CONTENT_SCREENS - self.viewport_height
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    pub fn scroll_by(&mut self, dy: f32) {
        if dy.is_finite() {
            self.scroll_y = (self.scroll_y + dy).clamp(0.0, self.max_scroll().max(0.0));
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_y = 0.0;
    }

    pub fn scroll_to_end(&mut self) {
        self.scroll_y = self.max_scroll().max(0.0);
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height.max(0.0);
        self.scroll_by(0.0);
    }

    pub fn sample(&self) -> ScrollSample {
        let header_height = self.header_height();
        ScrollSample {
            scroll_y: self.scroll_y,
            header_bottom: header_height - self.scroll_y,
            header_height,
            viewport_height: self.viewport_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use globe_core::{Effect, ScrollConfig, ScrollTracker};

    #[test]
    fn scrolling_is_clamped_to_the_page() {
        let mut page = VirtualPage::new(800.0);
        page.scroll_by(-100.0);
        assert_eq!(page.scroll_y(), 0.0);
        page.scroll_by(1e9);
        assert_eq!(page.scroll_y(), page.max_scroll());
        page.scroll_by(f32::NAN);
        assert_eq!(page.scroll_y(), page.max_scroll());
    }

    #[test]
    fn header_scrolls_out_of_view() {
        let mut page = VirtualPage::new(800.0);
        let s = page.sample();
        assert_eq!(s.header_bottom, 800.0);
        page.scroll_by(300.0);
        assert_eq!(page.sample().header_bottom, 500.0);
    }

    #[test]
    fn shrinking_the_window_keeps_scroll_in_range() {
        let mut page = VirtualPage::new(800.0);
        page.scroll_to_end();
        page.set_viewport_height(400.0);
        assert!(page.scroll_y() <= page.max_scroll());
    }

    #[test]
    fn scrolling_down_expands_the_globe() {
        let mut page = VirtualPage::new(800.0);
        let mut tracker = ScrollTracker::new(ScrollConfig::default());
        assert_eq!(tracker.initial(page.sample()).effect, Effect::Compact);
        page.scroll_by(LINE_STEP * 10.0);
        assert_eq!(tracker.update(page.sample()).effect, Effect::Expanded);
        page.scroll_to_top();
        assert_eq!(tracker.update(page.sample()).effect, Effect::Compact);
    }
}
