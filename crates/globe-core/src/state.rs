//! Scene-side state shared by the web and native presentation layers.
//!
//! These types avoid platform-specific APIs. Front-ends build their camera
//! and light uniforms from them.

use crate::constants::*;
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: camera_eye_vec3(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    /// Track the surface aspect ratio; zero-sized surfaces keep the last value.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

/// Ambient plus one directional light.
///
/// Points are shaded using their direction from the globe center as the
/// surface normal, so the lit hemisphere reads brighter.
#[derive(Clone, Debug)]
pub struct Lighting {
    pub ambient: f32,
    pub directional: f32,
    /// Direction toward the light, not normalized.
    pub direction: Vec3,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: AMBIENT_INTENSITY,
            directional: DIRECTIONAL_INTENSITY,
            direction: Vec3::from(DIRECTIONAL_POSITION),
        }
    }
}
