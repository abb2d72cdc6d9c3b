//! Orbit camera controller.
//!
//! Tracks azimuth/elevation/distance around a fixed target at the
//! origin and derives an orthonormal camera basis from them. The host
//! windowing layer feeds it pointer deltas (via [`CameraInput`] or the
//! individual methods) and reads back view/projection matrices each
//! frame.

use glam::{Mat4, Vec2, Vec3};

use crate::camera::{CameraUniformData, Projection};

/// Closest the camera may get to the orbit target.
const MIN_DISTANCE: f32 = 1.0;

/// Elevation clamp in degrees. One degree short of the poles so the
/// front vector never becomes parallel to the world up axis.
const ELEVATION_LIMIT: f32 = 89.0;

/// Camera movement direction, abstracted from windowing-layer key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// Per-frame input snapshot for the camera.
///
/// The host's event callbacks accumulate into this instead of mutating
/// the camera directly; [`OrbitCamera::apply_input`] routes it once per
/// frame. Key fields hold current pressed state, delta fields hold
/// accumulated motion since the last [`reset_deltas`](Self::reset_deltas).
#[derive(Debug, Clone, Default)]
pub struct CameraInput {
    /// Movement keys (WASD, QE for up/down)
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,

    /// Cursor delta since last frame (in pixels)
    pub mouse_delta: Vec2,

    /// Scroll delta since last frame (positive = scroll up)
    pub scroll_delta: f32,

    /// Whether the orbit drag is active (left mouse button held)
    pub orbit_active: bool,
}

impl CameraInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset per-frame deltas (call after update).
    pub fn reset_deltas(&mut self) {
        self.mouse_delta = Vec2::ZERO;
        self.scroll_delta = 0.0;
    }
}

/// Orbit camera around a fixed target at the origin.
///
/// Orbital parameters are private: every mutation goes through
/// [`orbit`](Self::orbit) / [`zoom`](Self::zoom) / the builders, which
/// wrap, clamp, and recompute the derived basis synchronously. The
/// basis is therefore always orthonormal and consistent with the last
/// committed angles; nothing is accumulated across frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Perspective projection. Aspect ratio is fed by the host via
    /// [`set_viewport`](Self::set_viewport) on every resize.
    pub projection: Projection,
    /// Degrees of rotation per pixel of mouse drag.
    pub mouse_sensitivity: f32,
    /// Distance units per scroll notch.
    pub zoom_sensitivity: f32,
    /// Keyboard nudge speed in units per second.
    pub movement_speed: f32,

    // Orbital parameters. Angles in degrees.
    azimuth: f32,
    elevation: f32,
    distance: f32,
    world_up: Vec3,

    // Derived basis, rebuilt by recompute() on every orbit/zoom.
    position: Vec3,
    front: Vec3,
    right: Vec3,
    up: Vec3,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitCamera {
    /// Create a camera with the default view: azimuth 90°, elevation
    /// 30°, ten units from the origin.
    pub fn new() -> Self {
        let mut camera = Self {
            projection: Projection::default(),
            mouse_sensitivity: 0.3,
            zoom_sensitivity: 0.5,
            movement_speed: 10.0,
            azimuth: 90.0,
            elevation: 30.0,
            distance: 10.0,
            world_up: Vec3::Y,
            position: Vec3::ZERO,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
        };
        camera.recompute();
        camera
    }

    /// Set the initial angles (degrees). Wrapped and clamped like any
    /// other mutation.
    pub fn with_angles(mut self, azimuth_degrees: f32, elevation_degrees: f32) -> Self {
        self.azimuth = azimuth_degrees;
        self.elevation = elevation_degrees;
        self.normalize_angles();
        self.recompute();
        self
    }

    /// Set the initial distance from the target.
    pub fn with_distance(mut self, distance: f32) -> Self {
        self.distance = distance.max(MIN_DISTANCE);
        self.recompute();
        self
    }

    /// Set the vertical field of view (degrees).
    pub fn with_fov(mut self, fov_y_degrees: f32) -> Self {
        self.projection.fov_y = fov_y_degrees.to_radians();
        self
    }

    /// Set the mouse sensitivity (degrees per pixel).
    pub fn with_mouse_sensitivity(mut self, sensitivity: f32) -> Self {
        self.mouse_sensitivity = sensitivity;
        self
    }

    /// Set the zoom sensitivity (distance per scroll unit).
    pub fn with_zoom_sensitivity(mut self, sensitivity: f32) -> Self {
        self.zoom_sensitivity = sensitivity;
        self
    }

    /// Set the keyboard movement speed (units per second).
    pub fn with_movement_speed(mut self, speed: f32) -> Self {
        self.movement_speed = speed;
        self
    }

    /// Horizontal orbit angle in degrees, always in `[0, 360)`.
    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Vertical tilt in degrees, always in `[-89, 89]`.
    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    /// Distance from the orbit target, never below 1.0.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Camera position in world space.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Camera up vector (unit length).
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Apply pointer-motion deltas (pixels) as an orbit around the
    /// target. Azimuth wraps into `[0, 360)`, elevation clamps to
    /// `[-89, 89]`; the derived basis is recomputed before returning.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.azimuth += dx * self.mouse_sensitivity;
        self.elevation -= dy * self.mouse_sensitivity;
        self.normalize_angles();
        self.recompute();
    }

    /// Apply a scroll delta as a zoom. Positive values move closer;
    /// the distance never drops below 1.0.
    pub fn zoom(&mut self, scroll_delta: f32) {
        self.distance = (self.distance - scroll_delta * self.zoom_sensitivity).max(MIN_DISTANCE);
        self.recompute();
    }

    /// Nudge the camera position along the chosen axis.
    ///
    /// `Up`/`Down` move along the world up axis; the other directions
    /// move along the current front/right vectors. The offset is
    /// transient: it moves only the derived position, and the next
    /// [`orbit`](Self::orbit) or [`zoom`](Self::zoom) rebuilds the
    /// position from the orbital parameters, discarding it.
    pub fn process_keyboard(&mut self, direction: Direction, delta_time: f32) {
        let velocity = self.movement_speed * delta_time.max(0.0);
        let (axis, sign) = match direction {
            Direction::Forward => (self.front, 1.0),
            Direction::Backward => (self.front, -1.0),
            Direction::Left => (self.right, -1.0),
            Direction::Right => (self.right, 1.0),
            Direction::Up => (self.world_up, 1.0),
            Direction::Down => (self.world_up, -1.0),
        };
        self.position += axis * (sign * velocity);
    }

    /// Route a per-frame input snapshot: mouse drag orbits (only while
    /// [`CameraInput::orbit_active`]), scroll zooms, pressed movement
    /// keys nudge.
    pub fn apply_input(&mut self, input: &CameraInput, delta_time: f32) {
        if input.orbit_active && input.mouse_delta != Vec2::ZERO {
            self.orbit(input.mouse_delta.x, input.mouse_delta.y);
        }

        if input.scroll_delta != 0.0 {
            log::trace!("scroll zoom: {}", input.scroll_delta);
            self.zoom(input.scroll_delta);
        }

        let keys = [
            (input.forward, Direction::Forward),
            (input.backward, Direction::Backward),
            (input.left, Direction::Left),
            (input.right, Direction::Right),
            (input.up, Direction::Up),
            (input.down, Direction::Down),
        ];
        for (pressed, direction) in keys {
            if pressed {
                log::trace!("keyboard move: {:?}", direction);
                self.process_keyboard(direction, delta_time);
            }
        }
    }

    /// Update the projection aspect ratio from the host's viewport
    /// size. A zero-sized viewport (minimized window) is ignored.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            log::warn!("ignoring degenerate viewport {}x{}", width, height);
            return;
        }
        self.projection.set_aspect(width / height);
    }

    /// View matrix looking from the camera position toward the origin.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, Vec3::ZERO, self.up)
    }

    /// Projection matrix for the current field of view and aspect ratio.
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix()
    }

    /// Build the camera uniform block for renderer upload.
    pub fn uniform_data(&self) -> CameraUniformData {
        let view = self.view_matrix();
        let proj = self.projection_matrix();
        CameraUniformData {
            view,
            proj,
            view_proj: proj * view,
            position: self.position.extend(1.0),
        }
    }

    /// Wrap azimuth into `[0, 360)` and clamp elevation.
    ///
    /// The wrap is by repeated ±360 adjustment rather than a truncating
    /// modulo, so values just past either boundary land symmetrically.
    fn normalize_angles(&mut self) {
        while self.azimuth >= 360.0 {
            self.azimuth -= 360.0;
        }
        while self.azimuth < 0.0 {
            self.azimuth += 360.0;
        }
        self.elevation = self.elevation.clamp(-ELEVATION_LIMIT, ELEVATION_LIMIT);
    }

    /// Rebuild position and basis vectors from the orbital parameters.
    ///
    /// The basis is re-orthogonalized from scratch on every call; no
    /// vector survives from the previous state, so floating-point drift
    /// cannot accumulate.
    fn recompute(&mut self) {
        let (azimuth_sin, azimuth_cos) = self.azimuth.to_radians().sin_cos();
        let (elevation_sin, elevation_cos) = self.elevation.to_radians().sin_cos();

        self.position = Vec3::new(
            azimuth_cos * elevation_cos,
            elevation_sin,
            azimuth_sin * elevation_cos,
        ) * self.distance;

        self.front = -self.position.normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}
