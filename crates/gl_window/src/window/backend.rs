//! Backend-agnostic window traits
//!
//! [`WindowSystem`] stands for the once-per-process windowing library. The
//! host creates one, keeps it alive for as long as it has windows, and hands
//! it to [`crate::Window::initialise`]. Each window it creates is a
//! [`WindowBackend`] owned exclusively by one [`crate::Window`].

use super::error::WindowResult;
use crate::core::config::{CursorCapture, WindowConfig};
use crate::input::NativeEvent;

/// Process-wide windowing library capability
///
/// Not `Send`: GLFW must be driven from the thread that initialised it.
pub trait WindowSystem {
    /// Create a native window and make its rendering context current
    ///
    /// Implementations must either return a fully usable backend or an
    /// error, never a half-built window.
    fn create_window(&mut self, config: &WindowConfig) -> WindowResult<Box<dyn WindowBackend>>;

    /// Short name used in log output
    fn name(&self) -> &'static str;
}

/// One native window with its rendering context
///
/// Dropping the backend releases the native handle.
pub trait WindowBackend {
    /// Whether the user or the application asked the window to close
    fn should_close(&self) -> bool;

    /// Raise or clear the close request
    fn set_should_close(&mut self, should_close: bool);

    /// Drawable surface size in pixels
    ///
    /// On high-DPI displays this differs from the requested window size.
    fn framebuffer_size(&self) -> (u32, u32);

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Change how the cursor behaves over the window
    fn set_cursor_capture(&mut self, capture: CursorCapture);

    /// Process pending native events and return the ones the window tracks
    ///
    /// Events come back in the order the native layer delivered them.
    fn pump_events(&mut self) -> Vec<NativeEvent>;
}
