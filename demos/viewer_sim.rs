//! Headless camera session: replays a scripted drag/zoom/keyboard
//! sequence and logs the resulting camera state.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example viewer_sim

use glam::Vec2;
use orbit_camera::{CameraInput, OrbitCamera};

fn main() {
    env_logger::init();

    let mut camera = OrbitCamera::new();
    camera.set_viewport(1280.0, 720.0);

    let mut input = CameraInput::new();
    let dt = 1.0 / 60.0;

    // A slow drag to the left while zooming in, then a vertical nudge.
    for frame in 0..120 {
        input.orbit_active = frame < 90;
        input.mouse_delta = if input.orbit_active {
            Vec2::new(-4.0, 1.5)
        } else {
            Vec2::ZERO
        };
        input.scroll_delta = if frame % 10 == 0 { 1.0 } else { 0.0 };
        input.up = frame >= 90;

        camera.apply_input(&input, dt);
        input.reset_deltas();

        if frame % 30 == 0 {
            log::info!(
                "frame {frame}: azimuth {:.1}° elevation {:.1}° distance {:.2} position {:?}",
                camera.azimuth(),
                camera.elevation(),
                camera.distance(),
                camera.position()
            );
        }
    }

    let uniform = camera.uniform_data();
    log::info!("final view matrix: {:?}", uniform.view);
    log::info!("final view-projection: {:?}", uniform.view_proj);
}
