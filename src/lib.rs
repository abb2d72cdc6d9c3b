//! Orbit camera controller for interactive 3D model viewers.
//!
//! The camera orbits a fixed target at the origin, driven by pointer
//! deltas from the host windowing layer:
//! - [`OrbitCamera`] holds azimuth/elevation/distance plus tunables and
//!   derives an always-orthonormal view basis from them
//! - [`CameraInput`] is the per-frame input snapshot the host's event
//!   callbacks fill in, routed by [`OrbitCamera::apply_input`]
//! - [`Projection`] and [`CameraUniformData`] cover the projection side
//!   and the GPU-ready matrix block
//!
//! Window creation, GPU setup, and event-loop plumbing stay in the
//! host; this crate is pure math over the deltas it is handed. All
//! access is expected on a single thread (the render loop's). If a
//! platform delivers input callbacks elsewhere, the host must
//! synchronize or marshal the events itself.

pub mod camera;
pub mod camera_controller;

pub use camera::{CameraUniformData, Projection};
pub use camera_controller::{CameraInput, Direction, OrbitCamera};
