/*
By: <Draydon Levesque>
Date: 2026-10-19
Program Details: <Physics sandbox: spawn shapes with the keyboard and watch them fall>
*/

use macroquad::prelude::*;
use physics_sandbox::modules::scale::{screen_to_virtual, use_virtual_resolution};
use physics_sandbox::{FrameInput, Module, ModulePhysics, PhysicsConfig, ScreenRenderer, UpdateStatus};

/// Set up window settings before the app runs
fn window_conf() -> Conf {
    let config = PhysicsConfig::default();
    Conf {
        window_title: "physics_sandbox".to_string(),
        window_width: config.screen_width,
        window_height: config.screen_height,
        fullscreen: false,
        high_dpi: true,
        window_resizable: true,
        sample_count: 4, // MSAA
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // RUST_LOG=debug shows every spawn
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut physics = ModulePhysics::new(PhysicsConfig::default());
    let virtual_w = physics.config().screen_width as f32;
    let virtual_h = physics.config().screen_height as f32;

    if let Err(err) = physics.start() {
        log::error!("Physics module failed to start: {err}");
        return;
    }

    let mut renderer = ScreenRenderer::default();

    loop {
        // ---- Step the world ----
        if physics.pre_update() != UpdateStatus::Continue {
            break;
        }

        let letterbox = use_virtual_resolution(virtual_w, virtual_h);
        clear_background(BLACK);

        // ---- Spawn, toggle the overlay and draw it ----
        let mouse = screen_to_virtual(&letterbox, mouse_position());
        let input = FrameInput::poll(mouse);
        match physics.post_update(&input, &mut renderer) {
            UpdateStatus::Continue => {}
            UpdateStatus::Stop => break,
            UpdateStatus::Error => {
                log::error!("Physics module stopped with an error");
                break;
            }
        }

        set_default_camera();
        draw_text("1 circle  2 box  3 loop  4 chain  5 edge  F1 debug  Esc quit", 10.0, 20.0, 20.0, GRAY);

        next_frame().await;
    }

    if let Err(err) = physics.clean_up() {
        log::error!("Physics module failed to clean up: {err}");
    }
}
