//! Window demo
//!
//! Opens a GLFW window, captures the cursor and logs movement keys and mouse
//! deltas each frame. Escape closes the window. Settings are read from
//! `window.toml` in the working directory when present.

use gl_window::foundation::logging;
use gl_window::prelude::*;
use glfw::Key;
use thiserror::Error;

const CONFIG_PATH: &str = "window.toml";

#[derive(Error, Debug)]
enum DemoError {
    #[error("Window error: {0}")]
    Window(#[from] WindowError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

fn main() {
    logging::init_with_level("debug");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), DemoError> {
    let config = WindowConfig::load_or_default(CONFIG_PATH)?;
    let mut system = GlfwSystem::init()?;
    let mut window = Window::from_config(config);
    window.initialise(&mut system)?;

    log::info!(
        "Framebuffer {}x{} (aspect {:.3})",
        window.buffer_width(),
        window.buffer_height(),
        window.aspect_ratio()
    );

    let mut frame: u64 = 0;
    while !window.should_close() {
        window.poll_events();

        if window.is_key_down(Key::Escape) {
            window.set_should_close(true);
        }

        let held: Vec<Key> = [Key::W, Key::A, Key::S, Key::D]
            .into_iter()
            .filter(|&key| window.is_key_down(key))
            .collect();
        let (dx, dy) = window.mouse_delta();
        if !held.is_empty() || dx.abs() > f32::EPSILON || dy.abs() > f32::EPSILON {
            log::debug!("frame {frame}: keys {held:?}, mouse ({dx:+.1}, {dy:+.1})");
        }

        window.swap_buffers();
        frame += 1;
    }

    log::info!("Closed after {frame} frames");
    Ok(())
}
