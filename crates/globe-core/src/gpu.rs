//! GPU-facing data layout for the point renderer.
//!
//! Points are drawn as instanced quads: slot 0 holds the six quad corners,
//! slot 1 the per-instance `xyz` taken straight from the field's flat buffer.

use crate::field::FrameOutput;
use crate::state::{Camera, Lighting};

/// Two triangles spanning [-0.5, 0.5]².
pub const QUAD_CORNERS: [[f32; 2]; 6] = [
    [-0.5, -0.5],
    [0.5, -0.5],
    [0.5, 0.5],
    [-0.5, -0.5],
    [0.5, 0.5],
    [-0.5, 0.5],
];

/// Bytes per instance in the position buffer.
pub const POINT_STRIDE: u64 = (std::mem::size_of::<f32>() * 3) as u64;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointUniforms {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    /// xyz: direction toward the light.
    pub light_dir: [f32; 4],
    /// x: point size (world units), y: ambient, z: directional intensity.
    pub params: [f32; 4],
}

impl PointUniforms {
    pub fn new(camera: &Camera, lighting: &Lighting, frame: &FrameOutput<'_>) -> Self {
        let dir = lighting.direction.normalize_or_zero();
        Self {
            view: camera.view_matrix().to_cols_array_2d(),
            proj: camera.projection_matrix().to_cols_array_2d(),
            model: frame.model_matrix().to_cols_array_2d(),
            color: frame.color,
            light_dir: [dir.x, dir.y, dir.z, 0.0],
            params: [frame.point_size, lighting.ambient, lighting.directional, 0.0],
        }
    }
}

/// Size in bytes of a position buffer able to hold `point_count` points.
///
/// Never zero so an empty field can still bind a valid buffer.
#[inline]
pub fn position_buffer_size(point_count: usize) -> u64 {
    (point_count as u64 * POINT_STRIDE).max(16)
}

/// Instances to draw: the frame's points, limited to what the buffer holds.
#[inline]
pub fn instance_count(point_count: usize, buffer_capacity: u64) -> u32 {
    (point_count as u64)
        .min(buffer_capacity / POINT_STRIDE)
        .min(u32::MAX as u64) as u32
}
