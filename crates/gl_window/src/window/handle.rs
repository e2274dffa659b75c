//! The application-facing window
//!
//! [`Window`] owns one native window and its context, and keeps the input
//! state a render loop samples each frame.
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialised --initialise()--> Initialised --close request--> Closing --drop--> Destroyed
//! ```
//!
//! A failed `initialise` leaves the window uninitialised and may be retried.
//! Calling `initialise` on an initialised window returns
//! [`WindowError::AlreadyInitialised`] and changes nothing.
//!
//! Before a successful `initialise` every accessor returns a safe default:
//! a `0x0` buffer, `should_close() == true`, all keys up and zero mouse
//! deltas. `poll_events` and `swap_buffers` do nothing.

use super::backend::{WindowBackend, WindowSystem};
use super::error::{WindowError, WindowResult};
use crate::core::config::WindowConfig;
use crate::input::{KeyStates, MouseTracker, NativeEvent};

/// A GLFW-style window with per-frame input polling
pub struct Window {
    config: WindowConfig,
    backend: Option<Box<dyn WindowBackend>>,
    buffer_width: u32,
    buffer_height: u32,
    keys: KeyStates,
    mouse: MouseTracker,
}

impl Window {
    /// Window with the default 800x600 size; nothing is created yet
    pub fn new() -> Self {
        Self::from_config(WindowConfig::default())
    }

    /// Window with a requested size; nothing is created yet
    pub fn with_size(width: u32, height: u32) -> Self {
        Self::from_config(WindowConfig::new(width, height))
    }

    /// Window with full settings; nothing is created yet
    pub fn from_config(config: WindowConfig) -> Self {
        Self {
            config,
            backend: None,
            buffer_width: 0,
            buffer_height: 0,
            keys: KeyStates::new(),
            mouse: MouseTracker::new(),
        }
    }

    /// Create the native window and context through `system`
    ///
    /// Queries the framebuffer size, applies the configured cursor mode and
    /// starts input tracking from a clean slate. On error no native handle
    /// is kept.
    pub fn initialise(&mut self, system: &mut dyn WindowSystem) -> WindowResult<()> {
        if self.backend.is_some() {
            log::warn!("initialise called on a window that is already initialised");
            return Err(WindowError::AlreadyInitialised);
        }

        self.config.validate().map_err(WindowError::InitFailure)?;

        let mut backend = system.create_window(&self.config)?;
        let (width, height) = backend.framebuffer_size();
        backend.set_cursor_capture(self.config.cursor);

        self.buffer_width = width;
        self.buffer_height = height;
        self.keys.clear();
        self.mouse.reset();
        self.backend = Some(backend);

        log::info!(
            "Created {} window '{}': requested {}x{}, framebuffer {}x{}",
            system.name(),
            self.config.title,
            self.config.width,
            self.config.height,
            width,
            height
        );
        Ok(())
    }

    /// Whether a native window is currently owned
    pub fn is_initialised(&self) -> bool {
        self.backend.is_some()
    }

    /// Settings this window was built with
    pub const fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Size asked for at construction, in screen coordinates
    pub const fn requested_size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Framebuffer width in pixels
    pub const fn buffer_width(&self) -> u32 {
        self.buffer_width
    }

    /// Framebuffer height in pixels
    pub const fn buffer_height(&self) -> u32 {
        self.buffer_height
    }

    /// Framebuffer size in pixels
    pub const fn buffer_size(&self) -> (u32, u32) {
        (self.buffer_width, self.buffer_height)
    }

    /// Framebuffer width over height, or `0.0` while there is no framebuffer
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect_ratio(&self) -> f32 {
        if self.buffer_height == 0 {
            0.0
        } else {
            self.buffer_width as f32 / self.buffer_height as f32
        }
    }

    /// Whether the window has been asked to close
    pub fn should_close(&self) -> bool {
        self.backend.as_ref().map_or(true, |backend| backend.should_close())
    }

    /// Raise or clear the close request
    pub fn set_should_close(&mut self, should_close: bool) {
        if let Some(backend) = self.backend.as_mut() {
            backend.set_should_close(should_close);
        }
    }

    /// Current key-down flags, indexed by raw key code
    pub const fn keys(&self) -> &KeyStates {
        &self.keys
    }

    /// Whether a GLFW key is currently held
    pub fn is_key_down(&self, key: glfw::Key) -> bool {
        self.keys.is_key_down(key)
    }

    /// Horizontal mouse movement since the previous call; resets it to zero
    pub fn x_change(&mut self) -> f32 {
        self.mouse.take_x_change()
    }

    /// Vertical mouse movement since the previous call (up is positive); resets it to zero
    pub fn y_change(&mut self) -> f32 {
        self.mouse.take_y_change()
    }

    /// Both mouse deltas at once; resets them to zero
    pub fn mouse_delta(&mut self) -> (f32, f32) {
        (self.x_change(), self.y_change())
    }

    /// Forget pending mouse movement; the next cursor event becomes the new baseline
    pub fn reset_mouse(&mut self) {
        self.mouse.reset();
    }

    /// Pump native events and apply them to the input state
    ///
    /// Call once per frame before sampling keys or mouse deltas.
    pub fn poll_events(&mut self) {
        let events = match self.backend.as_mut() {
            Some(backend) => backend.pump_events(),
            None => return,
        };

        for event in events {
            self.dispatch(event);
        }
    }

    /// Present the rendered frame
    pub fn swap_buffers(&mut self) {
        if let Some(backend) = self.backend.as_mut() {
            backend.swap_buffers();
        }
    }

    fn dispatch(&mut self, event: NativeEvent) {
        match event {
            NativeEvent::Key { code, action } => {
                self.keys.apply(code, action);
            }
            NativeEvent::CursorPos { x, y } => self.mouse.on_cursor_pos(x, y),
            NativeEvent::FramebufferResized { width, height } => {
                log::debug!("Framebuffer resized to {width}x{height}");
                self.buffer_width = width;
                self.buffer_height = height;
            }
            NativeEvent::CloseRequested => log::debug!("Close requested for '{}'", self.config.title),
        }
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        if self.backend.take().is_some() {
            log::debug!("Destroyed window '{}'", self.config.title);
        }
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("config", &self.config)
            .field("initialised", &self.is_initialised())
            .field("buffer_size", &self.buffer_size())
            .field("keys", &self.keys)
            .field("mouse", &self.mouse)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::HeadlessSystem;
    use crate::core::config::CursorCapture;
    use crate::input::{KeyAction, MAX_KEYS};
    use approx::assert_relative_eq;

    fn initialised(system: &mut HeadlessSystem) -> Window {
        let mut window = Window::new();
        window.initialise(system).unwrap();
        window
    }

    #[test]
    fn test_construction_does_not_touch_system() {
        let system = HeadlessSystem::new();
        let window = Window::with_size(1024, 768);

        assert_eq!(window.requested_size(), (1024, 768));
        assert!(!window.is_initialised());
        assert_eq!(system.control().windows_created(), 0);
    }

    #[test]
    fn test_default_size() {
        assert_eq!(Window::new().requested_size(), (800, 600));
    }

    #[test]
    fn test_buffer_size_matches_backend_not_request() {
        let mut system = HeadlessSystem::new().with_scale(2.0);
        let mut window = Window::with_size(800, 600);
        window.initialise(&mut system).unwrap();

        assert_eq!(window.buffer_width(), 1600);
        assert_eq!(window.buffer_height(), 1200);
        assert_eq!(window.requested_size(), (800, 600));
        assert_relative_eq!(window.aspect_ratio(), 4.0 / 3.0);
    }

    #[test]
    fn test_should_close_follows_backend() {
        let mut system = HeadlessSystem::new();
        let control = system.control();
        let mut window = initialised(&mut system);

        assert!(!window.should_close());

        control.request_close();
        window.poll_events();
        assert!(window.should_close());

        window.set_should_close(false);
        assert!(!window.should_close());
    }

    #[test]
    fn test_key_events_reach_key_array() {
        let mut system = HeadlessSystem::new();
        let control = system.control();
        let mut window = initialised(&mut system);

        control.push_key(glfw::Key::W as i32, KeyAction::Press);
        control.push_key(glfw::Key::A as i32, KeyAction::Press);
        control.push_key(glfw::Key::A as i32, KeyAction::Release);
        window.poll_events();

        assert!(window.is_key_down(glfw::Key::W));
        assert!(!window.is_key_down(glfw::Key::A));
        assert!(window.keys().as_array()[glfw::Key::W as usize]);
    }

    #[test]
    fn test_out_of_range_key_events_are_ignored() {
        let mut system = HeadlessSystem::new();
        let control = system.control();
        let mut window = initialised(&mut system);

        for code in [-1, MAX_KEYS as i32, i32::MAX, i32::MIN] {
            control.push_key(code, KeyAction::Press);
        }
        window.poll_events();

        assert_eq!(window.keys().pressed_count(), 0);
    }

    #[test]
    fn test_first_cursor_event_produces_no_delta() {
        let mut system = HeadlessSystem::new();
        let control = system.control();
        let mut window = initialised(&mut system);

        control.push_cursor(512.0, 384.0);
        window.poll_events();

        assert_relative_eq!(window.x_change(), 0.0);
        assert_relative_eq!(window.y_change(), 0.0);
    }

    #[test]
    fn test_mouse_delta_is_read_and_clear() {
        let mut system = HeadlessSystem::new();
        let control = system.control();
        let mut window = initialised(&mut system);

        control.push_cursor(100.0, 100.0);
        control.push_cursor(104.0, 90.0);
        control.push_cursor(110.0, 80.0);
        window.poll_events();

        assert_relative_eq!(window.x_change(), 10.0);
        assert_relative_eq!(window.x_change(), 0.0);
        assert_relative_eq!(window.y_change(), 20.0);
        assert_relative_eq!(window.y_change(), 0.0);

        control.push_cursor(111.0, 81.0);
        window.poll_events();
        assert_eq!(window.mouse_delta(), (1.0, -1.0));
        assert_eq!(window.mouse_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_reset_mouse_rebaselines() {
        let mut system = HeadlessSystem::new();
        let control = system.control();
        let mut window = initialised(&mut system);

        control.push_cursor(0.0, 0.0);
        control.push_cursor(30.0, 30.0);
        window.poll_events();
        window.reset_mouse();

        control.push_cursor(500.0, 500.0);
        window.poll_events();

        assert_eq!(window.mouse_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_framebuffer_resize_is_tracked() {
        let mut system = HeadlessSystem::new();
        let control = system.control();
        let mut window = initialised(&mut system);

        control.resize(1920, 1080);
        window.poll_events();

        assert_eq!(window.buffer_size(), (1920, 1080));
    }

    #[test]
    fn test_initialise_applies_cursor_capture() {
        let mut system = HeadlessSystem::new();
        let control = system.control();
        let mut window = Window::from_config(WindowConfig::default().with_cursor(CursorCapture::Hidden));
        window.initialise(&mut system).unwrap();

        assert_eq!(control.cursor_capture(), Some(CursorCapture::Hidden));
    }

    #[test]
    fn test_swap_buffers_presents() {
        let mut system = HeadlessSystem::new();
        let control = system.control();
        let mut window = initialised(&mut system);

        window.swap_buffers();
        window.swap_buffers();

        assert_eq!(control.swap_count(), 2);
    }

    #[test]
    fn test_init_failure_leaves_no_handle() {
        let mut system = HeadlessSystem::failing("no compatible GL context");
        let control = system.control();
        let mut window = Window::new();

        let result = window.initialise(&mut system);

        assert!(matches!(result, Err(WindowError::InitFailure(_))));
        assert!(!window.is_initialised());
        assert!(!control.is_alive());
        assert_eq!(window.buffer_size(), (0, 0));
        drop(window);
    }

    #[test]
    fn test_retry_after_failure() {
        let mut failing = HeadlessSystem::failing("no display");
        let mut working = HeadlessSystem::new();
        let mut window = Window::new();

        assert!(window.initialise(&mut failing).is_err());
        window.initialise(&mut working).unwrap();

        assert!(window.is_initialised());
    }

    #[test]
    fn test_invalid_config_fails_before_creating() {
        let mut system = HeadlessSystem::new();
        let control = system.control();
        let mut window = Window::with_size(0, 600);

        assert!(matches!(window.initialise(&mut system), Err(WindowError::InitFailure(_))));
        assert_eq!(control.windows_created(), 0);
    }

    #[test]
    fn test_second_initialise_is_rejected() {
        let mut system = HeadlessSystem::new();
        let control = system.control();
        let mut window = initialised(&mut system);

        assert!(matches!(
            window.initialise(&mut system),
            Err(WindowError::AlreadyInitialised)
        ));
        assert!(window.is_initialised());
        assert_eq!(control.windows_created(), 1);
    }

    #[test]
    fn test_accessors_before_initialise_are_safe() {
        let mut window = Window::new();

        window.poll_events();
        window.swap_buffers();
        window.set_should_close(false);

        assert!(window.should_close());
        assert_eq!(window.buffer_size(), (0, 0));
        assert_relative_eq!(window.aspect_ratio(), 0.0);
        assert_eq!(window.keys().pressed_count(), 0);
        assert_eq!(window.mouse_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_drop_releases_native_handle() {
        let mut system = HeadlessSystem::new();
        let control = system.control();
        let window = initialised(&mut system);

        assert!(control.is_alive());
        drop(window);
        assert!(!control.is_alive());
    }
}
