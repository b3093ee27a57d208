// Host-side tests for the scroll controller and capability policy.

use globe_core::{
    resolve_point_count, Capabilities, Effect, ScrollConfig, ScrollSample, ScrollTracker,
};

const HEADER: f32 = 600.0;
const VIEWPORT: f32 = 800.0;

/// Page geometry after scrolling `y` pixels with the header at the top.
fn sample_at(y: f32) -> ScrollSample {
    ScrollSample {
        scroll_y: y,
        header_bottom: HEADER - y,
        header_height: HEADER,
        viewport_height: VIEWPORT,
    }
}

fn tracker() -> ScrollTracker {
    ScrollTracker::new(ScrollConfig::default())
}

#[test]
fn top_of_page_is_compact_with_no_progress() {
    let mut t = tracker();
    let s = t.update(sample_at(0.0));
    assert_eq!(s.effect, Effect::Compact);
    assert_eq!(s.progress, 0.0);
    assert_eq!(s.offset, 0.0);
}

#[test]
fn offset_is_scaled_scroll() {
    let mut t = tracker();
    assert_eq!(t.update(sample_at(40.0)).offset, 60.0);
}

#[test]
fn progress_measures_header_scrolled_past() {
    let mut t = tracker();
    // 48px of a 480px span
    let s = t.update(sample_at(48.0));
    assert!((s.progress - 0.1).abs() < 1e-6);
    assert_eq!(s.effect, Effect::Compact);

    let s = t.update(sample_at(60.0));
    assert!((s.progress - 0.125).abs() < 1e-6);
    assert_eq!(s.effect, Effect::Expanded);
}

#[test]
fn header_out_of_view_is_always_expanded() {
    let mut t = tracker();
    // header bottom at 200px, below the 240px visibility line
    let s = t.update(ScrollSample {
        scroll_y: 0.0,
        header_bottom: 200.0,
        header_height: 200.0,
        viewport_height: VIEWPORT,
    });
    assert_eq!(s.progress, 0.0);
    assert_eq!(s.effect, Effect::Expanded);
}

#[test]
fn progress_saturates_at_one() {
    let mut t = tracker();
    let s = t.update(sample_at(5_000.0));
    assert_eq!(s.progress, 1.0);
    assert_eq!(s.effect, Effect::Expanded);
}

#[test]
fn stalled_progress_on_a_scrolled_page_completes() {
    let mut t = tracker();
    // a tall header barely moves relative to its height
    let s = t.update(ScrollSample {
        scroll_y: 150.0,
        header_bottom: 2_850.0,
        header_height: 3_000.0,
        viewport_height: VIEWPORT,
    });
    assert_eq!(s.progress, 1.0);
}

#[test]
fn restored_scroll_position_starts_expanded() {
    let mut t = tracker();
    let s = t.initial(sample_at(700.0));
    assert_eq!(s.effect, Effect::Expanded);
    assert_eq!(s.progress, 1.0);
    assert_eq!(t.state(), s);
}

#[test]
fn zero_height_header_does_not_divide_by_zero() {
    let mut t = tracker();
    let s = t.update(ScrollSample {
        scroll_y: 0.0,
        header_bottom: 0.0,
        header_height: 0.0,
        viewport_height: VIEWPORT,
    });
    assert_eq!(s.progress, 0.0);
    assert!(s.offset.is_finite());
}

#[test]
fn low_power_devices_get_fewer_points() {
    let strong = Capabilities {
        cores: Some(8),
        device_memory_gb: Some(8.0),
        prefers_reduced_motion: false,
    };
    assert!(!strong.is_low_power());
    assert_eq!(strong.point_count(), 50_000);

    let few_cores = Capabilities {
        cores: Some(4),
        ..strong
    };
    assert_eq!(few_cores.point_count(), 20_000);

    let little_memory = Capabilities {
        device_memory_gb: Some(2.0),
        ..strong
    };
    assert_eq!(little_memory.point_count(), 20_000);

    let reduced = Capabilities {
        prefers_reduced_motion: true,
        ..strong
    };
    assert_eq!(reduced.point_count(), 20_000);
}

#[test]
fn unknown_hints_assume_a_modest_device() {
    assert!(Capabilities::default().is_low_power());
    let only_cores = Capabilities {
        cores: Some(16),
        ..Default::default()
    };
    // memory falls back to 4 GB
    assert!(only_cores.is_low_power());
}

#[test]
fn explicit_point_count_wins() {
    let caps = Capabilities::default();
    assert_eq!(resolve_point_count(Some(123), &caps), 123);
    assert_eq!(resolve_point_count(None, &caps), 20_000);
}
