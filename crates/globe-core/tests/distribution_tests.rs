// Host-side tests for the golden-angle sphere distribution.

use globe_core::distribution::{azimuth, generate, sphere_direction};
use globe_core::FieldConfig;
use std::f32::consts::TAU;

#[test]
fn targets_sit_on_their_shells_for_small_counts() {
    for n in [1usize, 2, 3, 7, 100, 1000] {
        let cfg = FieldConfig::default().with_point_count(n);
        let particles = generate(&cfg);
        assert_eq!(particles.len(), n);
        for (i, p) in particles.iter().enumerate() {
            assert!(
                (p.compact_target.length() - cfg.inner_radius()).abs() < 1e-4,
                "n={n} i={i}"
            );
            assert!(
                (p.expanded_target.length() - cfg.outer_radius()).abs() < 1e-4,
                "n={n} i={i}"
            );
        }
    }
}

#[test]
fn expanded_target_is_a_radial_scale_of_compact_target() {
    let cfg = FieldConfig::default().with_point_count(2_000);
    let scale = cfg.outer_radius() / cfg.inner_radius();
    for p in generate(&cfg) {
        let scaled = p.compact_target * scale;
        assert!(
            (scaled - p.expanded_target).length() < 1e-5,
            "{scaled:?} vs {:?}",
            p.expanded_target
        );
    }
}

#[test]
fn page_scenario_radius_three_with_fifty_thousand_points() {
    let cfg = FieldConfig {
        radius: 3.0,
        ..FieldConfig::default()
    }
    .with_point_count(50_000);
    assert!((cfg.inner_radius() - 1.2).abs() < 1e-6);
    assert!((cfg.outer_radius() - 1.8).abs() < 1e-6);
    let particles = generate(&cfg);
    assert_eq!(particles.len(), 50_000);
    for p in &particles {
        assert!((p.compact_target.length() - 1.2).abs() < 1e-3);
        assert!((p.expanded_target.length() - 1.8).abs() < 1e-3);
    }
}

#[test]
fn no_two_indices_share_an_azimuth() {
    let n = 100_000usize;
    let mut angles: Vec<f64> = (0..n).map(azimuth).collect();
    angles.sort_by(|a, b| a.partial_cmp(b).expect("finite azimuth"));
    for w in angles.windows(2) {
        assert!(w[1] > w[0], "duplicate azimuth {}", w[0]);
    }
    assert!(angles.iter().all(|a| (0.0..std::f64::consts::TAU).contains(a)));
}

#[test]
fn zero_points_is_an_empty_field() {
    let cfg = FieldConfig::default().with_point_count(0);
    assert!(generate(&cfg).is_empty());
}

#[test]
fn single_point_is_finite_and_on_the_shell() {
    // With the half-offset latitude rule a lone point lands on the equator.
    let d = sphere_direction(0, 1);
    assert!(d.is_finite());
    assert!((d.length() - 1.0).abs() < 1e-6);
    assert!(d.y.abs() < 1e-6);

    let cfg = FieldConfig::default().with_point_count(1);
    let p = &generate(&cfg)[0];
    assert!(p.position.is_finite());
    assert!((p.compact_target.length() - cfg.inner_radius()).abs() < 1e-6);
}

#[test]
fn seeded_randomness_stays_within_bounds() {
    let cfg = FieldConfig::default().with_point_count(5_000);
    let half_jitter = cfg.jitter / 2.0;
    let half_drift = cfg.drift / 2.0;
    for p in generate(&cfg) {
        let offset = p.position - p.compact_target;
        assert!(offset.abs().max_element() <= half_jitter + 1e-6);
        assert!(p.velocity.abs().max_element() <= half_drift + 1e-6);
        assert!(p.phase >= 0.0 && p.phase < TAU);
    }
}

#[test]
fn points_cover_both_hemispheres_evenly() {
    let cfg = FieldConfig::default().with_point_count(10_000);
    let particles = generate(&cfg);
    let north = particles.iter().filter(|p| p.compact_target.y > 0.0).count();
    assert_eq!(north, 5_000);
    let east = particles.iter().filter(|p| p.compact_target.x > 0.0).count();
    assert!((east as i64 - 5_000).abs() < 100, "east={east}");
}
