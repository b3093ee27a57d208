use crate::inputs::Effect;
use glam::Vec3;

/// One point of the field.
///
/// Only `position` changes after creation; the targets, drift and phase are
/// fixed when the field is generated.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub compact_target: Vec3,
    pub expanded_target: Vec3,
    /// Ambient drift in units per second.
    pub velocity: Vec3,
    /// Wave phase in [0, 2π).
    pub phase: f32,
}

impl Particle {
    #[inline]
    pub fn active_target(&self, effect: Effect) -> Vec3 {
        match effect {
            Effect::Compact => self.compact_target,
            Effect::Expanded => self.expanded_target,
        }
    }
}

/// Flat `xyz` position buffer handed to the renderer.
///
/// The integrator rewrites it every frame and raises the dirty flag; the
/// presentation layer uploads it and clears the flag.
#[derive(Clone, Debug, Default)]
pub struct PointBuffer {
    data: Vec<f32>,
    dirty: bool,
}

impl PointBuffer {
    pub fn new(point_count: usize) -> Self {
        Self {
            data: vec![0.0; point_count * 3],
            dirty: true,
        }
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.data.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn set(&mut self, index: usize, p: Vec3) {
        let o = index * 3;
        self.data[o] = p.x;
        self.data[o + 1] = p.y;
        self.data[o + 2] = p.z;
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Vec3> {
        let o = index * 3;
        self.data
            .get(o..o + 3)
            .map(|xyz| Vec3::new(xyz[0], xyz[1], xyz[2]))
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns whether an upload is pending and clears the flag.
    #[inline]
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_layout_is_xyz_per_point() {
        let mut buf = PointBuffer::new(2);
        buf.set(1, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(buf.point_count(), 2);
        assert_eq!(buf.as_slice(), &[0.0, 0.0, 0.0, 1.0, 2.0, 3.0]);
        assert_eq!(buf.get(1), Some(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(buf.get(2), None);
    }

    #[test]
    fn dirty_flag_is_consumed_once() {
        let mut buf = PointBuffer::new(1);
        assert!(buf.take_dirty());
        assert!(!buf.take_dirty());
        buf.mark_dirty();
        assert!(buf.is_dirty());
    }

    #[test]
    fn active_target_follows_effect() {
        let p = Particle {
            position: Vec3::ZERO,
            compact_target: Vec3::X,
            expanded_target: Vec3::X * 1.5,
            velocity: Vec3::ZERO,
            phase: 0.0,
        };
        assert_eq!(p.active_target(Effect::Compact), Vec3::X);
        assert_eq!(p.active_target(Effect::Expanded), Vec3::X * 1.5);
    }
}
