//! # GL Window
//!
//! A thin GLFW window and OpenGL context wrapper that surfaces the minimal
//! polling API a render loop needs each frame.
//!
//! ## Features
//!
//! - **Explicit Library Lifetime**: GLFW initialisation is a value (`GlfwSystem`) the host owns
//! - **Bounded Input State**: fixed-capacity key array and read-and-clear mouse deltas
//! - **Swappable Backends**: GLFW for real windows, headless for tests and CI
//! - **File Configuration**: window settings from TOML or RON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_window::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut system = GlfwSystem::init()?;
//!     let mut window = Window::with_size(1280, 720);
//!     window.initialise(&mut system)?;
//!
//!     while !window.should_close() {
//!         window.poll_events();
//!         let (dx, dy) = window.mouse_delta();
//!         // Update camera, render ...
//!         window.swap_buffers();
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod core;
pub mod config;
pub mod foundation;
pub mod input;
pub mod window;
pub mod backend;

pub use window::{Window, WindowError, WindowResult};

/// Common imports for window users
pub mod prelude {
    pub use crate::{
        Window, WindowError, WindowResult,
        window::{WindowBackend, WindowSystem},
        backend::{GlfwSystem, HeadlessControl, HeadlessSystem},
        input::{KeyAction, KeyStates, MouseTracker, NativeEvent, MAX_KEYS},
        core::config::{ContextVersion, CursorCapture, WindowConfig},
        config::{Config, ConfigError},
    };
}
