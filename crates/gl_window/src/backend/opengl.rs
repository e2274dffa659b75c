//! GLFW window backend with an OpenGL context
//!
//! [`GlfwSystem`] owns the process-wide GLFW library handle. Each window it
//! creates gets a core-profile context, is made current on the calling
//! thread, and starts with depth testing enabled and a viewport covering
//! the framebuffer.

use glfw::Context;
use glow::HasContext;

use crate::core::config::{CursorCapture, WindowConfig};
use crate::input::NativeEvent;
use crate::window::{WindowBackend, WindowError, WindowResult, WindowSystem};

/// The initialised GLFW library
///
/// Create exactly one per process, on the main thread, before any window.
/// GLFW terminates once this and every window created from it are dropped.
pub struct GlfwSystem {
    glfw: glfw::Glfw,
}

impl GlfwSystem {
    /// Initialise GLFW
    pub fn init() -> WindowResult<Self> {
        let glfw = glfw::init(log_glfw_error)
            .map_err(|e| WindowError::LibraryInit(format!("{e:?}")))?;

        log::debug!("GLFW {} initialized", glfw::get_version_string());
        Ok(Self { glfw })
    }
}

/// GLFW error callback; failures surface through the return values of
/// `glfwInit` and `glfwCreateWindow`, so the callback only logs
#[allow(clippy::needless_pass_by_value)]
fn log_glfw_error(error: glfw::Error, description: String) {
    log::error!("GLFW error {error:?}: {description}");
}

impl WindowSystem for GlfwSystem {
    fn create_window(&mut self, config: &WindowConfig) -> WindowResult<Box<dyn WindowBackend>> {
        let version = config.context_version;

        self.glfw.default_window_hints();
        self.glfw.window_hint(glfw::WindowHint::ContextVersion(version.major, version.minor));
        self.glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
        self.glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
        self.glfw.window_hint(glfw::WindowHint::Resizable(config.resizable));

        let (mut window, events) = self
            .glfw
            .create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
            .ok_or_else(|| {
                WindowError::InitFailure(format!(
                    "no OpenGL {}.{} core context available",
                    version.major, version.minor
                ))
            })?;

        window.make_current();
        self.glfw.set_swap_interval(if config.vsync {
            glfw::SwapInterval::Sync(1)
        } else {
            glfw::SwapInterval::None
        });

        window.set_key_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_close_polling(true);
        window.set_framebuffer_size_polling(true);

        let gl = load_gl(&mut window);
        let (width, height) = window.get_framebuffer_size();
        // SAFETY: the context was made current on this thread above
        unsafe {
            gl.enable(glow::DEPTH_TEST);
            gl.viewport(0, 0, width, height);
        }

        Ok(Box::new(GlfwWindow { window, events, gl }))
    }

    fn name(&self) -> &'static str {
        "GLFW"
    }
}

fn load_gl(window: &mut glfw::PWindow) -> glow::Context {
    // SAFETY: GLFW returns entry points for the context current on this thread
    unsafe { glow::Context::from_loader_function(|symbol| window.get_proc_address(symbol) as *const _) }
}

impl From<CursorCapture> for glfw::CursorMode {
    fn from(capture: CursorCapture) -> Self {
        match capture {
            CursorCapture::Normal => Self::Normal,
            CursorCapture::Hidden => Self::Hidden,
            CursorCapture::Disabled => Self::Disabled,
        }
    }
}

/// GLFW window wrapper with proper resource management
pub struct GlfwWindow {
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
    gl: glow::Context,
}

impl WindowBackend for GlfwWindow {
    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_framebuffer_size();
        (u32::try_from(width).unwrap_or(0), u32::try_from(height).unwrap_or(0))
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn set_cursor_capture(&mut self, capture: CursorCapture) {
        self.window.set_cursor_mode(capture.into());
    }

    fn pump_events(&mut self) -> Vec<NativeEvent> {
        self.window.glfw.poll_events();

        let mut tracked = Vec::new();
        for (_, event) in glfw::flush_messages(&self.events) {
            if let glfw::WindowEvent::FramebufferSize(width, height) = event {
                // SAFETY: this window's context stays current on the polling thread
                unsafe { self.gl.viewport(0, 0, width, height) };
            }
            tracked.extend(NativeEvent::from_glfw(&event));
        }
        tracked
    }
}
