//! Point-count policy from device capability hints.
//!
//! Front-ends probe the platform (navigator on the web, the OS natively) and
//! hand the hints over; this module only decides.

use crate::constants::{DEFAULT_POINT_COUNT, LOW_POWER_POINT_COUNT};

const ASSUMED_CORES: u32 = 2;
const ASSUMED_MEMORY_GB: f32 = 4.0;
const LOW_POWER_MAX_CORES: u32 = 4;
const LOW_POWER_MAX_MEMORY_GB: f32 = 4.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Capabilities {
    pub cores: Option<u32>,
    pub device_memory_gb: Option<f32>,
    pub prefers_reduced_motion: bool,
}

impl Capabilities {
    /// Unknown hints count as a modest device.
    pub fn is_low_power(&self) -> bool {
        let cores = self.cores.filter(|c| *c > 0).unwrap_or(ASSUMED_CORES);
        let mem = self
            .device_memory_gb
            .filter(|m| m.is_finite() && *m > 0.0)
            .unwrap_or(ASSUMED_MEMORY_GB);
        cores <= LOW_POWER_MAX_CORES || mem <= LOW_POWER_MAX_MEMORY_GB || self.prefers_reduced_motion
    }

    pub fn point_count(&self) -> usize {
        if self.is_low_power() {
            LOW_POWER_POINT_COUNT
        } else {
            DEFAULT_POINT_COUNT
        }
    }
}

/// An explicit override wins over the capability policy.
pub fn resolve_point_count(override_count: Option<usize>, caps: &Capabilities) -> usize {
    match override_count {
        Some(n) => {
            log::info!("[capability] point count override: {n}");
            n
        }
        None => {
            let n = caps.point_count();
            log::info!(
                "[capability] cores={:?} mem={:?} reduced_motion={} -> {} points",
                caps.cores,
                caps.device_memory_gb,
                caps.prefers_reduced_motion,
                n
            );
            n
        }
    }
}
