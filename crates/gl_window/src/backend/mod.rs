//! Window system implementations
//!
//! - [`GlfwSystem`]: real GLFW windows with an OpenGL context
//! - [`HeadlessSystem`]: scripted windows for tests and display-less hosts

pub mod headless;
pub mod opengl;

pub use headless::{HeadlessControl, HeadlessSystem, HeadlessWindow};
pub use opengl::{GlfwSystem, GlfwWindow};
