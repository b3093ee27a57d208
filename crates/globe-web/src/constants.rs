// Page wiring and presentation constants for the web frontend

// DOM hooks the page provides
pub const CANVAS_ID: &str = "globe-canvas";
pub const HEADER_ID: &str = "top";

// Optional `data-point-count` on the canvas overrides the capability policy
pub const POINT_COUNT_ATTR: &str = "data-point-count";
pub const MAX_POINT_COUNT_OVERRIDE: usize = 200_000;

// Media query probed for the reduced-motion preference
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Background behind the points (the page dims the canvas itself)
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

// Backing store is capped so 4K + high-DPR screens don't allocate huge surfaces
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

/// Parses the canvas point-count override; junk and out-of-range values are ignored.
pub fn parse_point_count(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|n| *n <= MAX_POINT_COUNT_OVERRIDE)
}
