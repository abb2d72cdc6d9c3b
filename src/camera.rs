//! Camera projection and GPU-facing matrix data.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec4};

/// Perspective projection parameters.
///
/// The field of view is stored in radians; constructors take degrees.
/// Near/far planes default to 0.1 / 100.0 and are not expected to
/// change over a view session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Projection {
            fov_y: std::f32::consts::FRAC_PI_4, // 45 degrees
            aspect: 1.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Projection {
    /// Create a perspective projection. `fov_y_degrees` is converted to
    /// radians on construction.
    pub fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Projection {
            fov_y: fov_y_degrees.to_radians(),
            aspect,
            near,
            far,
        }
    }

    /// Build the projection matrix.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Replace the aspect ratio, keeping all other parameters.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }
}

/// Camera uniform data for GPU upload.
///
/// Built by [`OrbitCamera::uniform_data`](crate::OrbitCamera::uniform_data)
/// from the current view and projection matrices.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniformData {
    pub view: Mat4,
    pub proj: Mat4,
    pub view_proj: Mat4,
    /// Camera position in world space (w = 1).
    pub position: Vec4,
}
