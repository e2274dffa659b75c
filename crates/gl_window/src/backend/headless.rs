//! In-process window backend with no display
//!
//! [`HeadlessSystem`] hands out windows whose native side is driven by a
//! shared [`HeadlessControl`]. Whoever holds the control plays the part of the
//! operating system: queue input, raise close requests, resize the
//! framebuffer, or make window creation fail. Tests and display-less CI
//! hosts use it in place of GLFW.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::core::config::{CursorCapture, WindowConfig};
use crate::input::{KeyAction, NativeEvent};
use crate::window::{WindowBackend, WindowError, WindowResult, WindowSystem};

type SharedState = Rc<RefCell<HeadlessState>>;

#[derive(Debug, Default)]
struct HeadlessState {
    alive: bool,
    should_close: bool,
    framebuffer: (u32, u32),
    queued: VecDeque<NativeEvent>,
    cursor: Option<CursorCapture>,
    swaps: u64,
}

#[derive(Debug, Default)]
struct Registry {
    windows_created: usize,
    latest: Option<SharedState>,
}

/// Shared handle that drives headless windows from the outside
///
/// Every window keeps its own state; the control acts on the most recently
/// created one. Before any window exists, queued input is dropped.
#[derive(Debug, Clone, Default)]
pub struct HeadlessControl {
    registry: Rc<RefCell<Registry>>,
}

impl HeadlessControl {
    /// Queue a key event for the next pump
    pub fn push_key(&self, code: i32, action: KeyAction) {
        self.push(NativeEvent::Key { code, action });
    }

    /// Queue a cursor move for the next pump
    pub fn push_cursor(&self, x: f64, y: f64) {
        self.push(NativeEvent::CursorPos { x, y });
    }

    /// Simulate the user closing the window
    pub fn request_close(&self) {
        self.with_latest(|state| {
            state.should_close = true;
            state.queued.push_back(NativeEvent::CloseRequested);
        });
    }

    /// Simulate a framebuffer resize
    pub fn resize(&self, width: u32, height: u32) {
        self.with_latest(|state| {
            state.framebuffer = (width, height);
            state.queued.push_back(NativeEvent::FramebufferResized { width, height });
        });
    }

    /// Whether the most recent window still exists
    pub fn is_alive(&self) -> bool {
        self.read_latest(|state| state.alive).unwrap_or(false)
    }

    /// Number of windows created so far
    pub fn windows_created(&self) -> usize {
        self.registry.borrow().windows_created
    }

    /// Number of buffer swaps presented by the most recent window
    pub fn swap_count(&self) -> u64 {
        self.read_latest(|state| state.swaps).unwrap_or(0)
    }

    /// Cursor mode last set on the most recent window
    pub fn cursor_capture(&self) -> Option<CursorCapture> {
        self.read_latest(|state| state.cursor).flatten()
    }

    fn push(&self, event: NativeEvent) {
        self.with_latest(|state| state.queued.push_back(event));
    }

    fn with_latest(&self, f: impl FnOnce(&mut HeadlessState)) {
        match &self.registry.borrow().latest {
            Some(state) => f(&mut state.borrow_mut()),
            None => log::trace!("No headless window to receive input"),
        }
    }

    fn read_latest<T>(&self, f: impl FnOnce(&HeadlessState) -> T) -> Option<T> {
        self.registry.borrow().latest.as_ref().map(|state| f(&state.borrow()))
    }

    fn register(&self, state: SharedState) {
        let mut registry = self.registry.borrow_mut();
        registry.windows_created += 1;
        registry.latest = Some(state);
    }
}

/// Window system that creates [`HeadlessWindow`]s
#[derive(Debug)]
pub struct HeadlessSystem {
    control: HeadlessControl,
    scale: f32,
    failure: Option<String>,
}

impl HeadlessSystem {
    /// A system whose framebuffers match the requested size
    pub fn new() -> Self {
        Self {
            control: HeadlessControl::default(),
            scale: 1.0,
            failure: None,
        }
    }

    /// A system whose window creation always fails with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::new()
        }
    }

    /// Scale framebuffers like a high-DPI display would
    pub const fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Control handle for the windows this system creates
    pub fn control(&self) -> HeadlessControl {
        self.control.clone()
    }
}

impl Default for HeadlessSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowSystem for HeadlessSystem {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn create_window(&mut self, config: &WindowConfig) -> WindowResult<Box<dyn WindowBackend>> {
        if let Some(reason) = &self.failure {
            return Err(WindowError::InitFailure(reason.clone()));
        }

        let scaled = |size: u32| (size as f32 * self.scale).round() as u32;
        let state = Rc::new(RefCell::new(HeadlessState {
            alive: true,
            framebuffer: (scaled(config.width), scaled(config.height)),
            ..HeadlessState::default()
        }));
        self.control.register(Rc::clone(&state));

        Ok(Box::new(HeadlessWindow { state }))
    }

    fn name(&self) -> &'static str {
        "headless"
    }
}

/// Window driven through a [`HeadlessControl`]
#[derive(Debug)]
pub struct HeadlessWindow {
    state: SharedState,
}

impl WindowBackend for HeadlessWindow {
    fn should_close(&self) -> bool {
        self.state.borrow().should_close
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.state.borrow_mut().should_close = should_close;
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        self.state.borrow().framebuffer
    }

    fn swap_buffers(&mut self) {
        self.state.borrow_mut().swaps += 1;
    }

    fn set_cursor_capture(&mut self, capture: CursorCapture) {
        self.state.borrow_mut().cursor = Some(capture);
    }

    fn pump_events(&mut self) -> Vec<NativeEvent> {
        self.state.borrow_mut().queued.drain(..).collect()
    }
}

impl Drop for HeadlessWindow {
    fn drop(&mut self) {
        let mut state = self.state.borrow_mut();
        state.alive = false;
        state.queued.clear();
    }
}
