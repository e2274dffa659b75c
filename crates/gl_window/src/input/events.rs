//! Backend-neutral input and window events
//!
//! Backends translate their native events into [`NativeEvent`] so the
//! window's input state never depends on a particular windowing library.

/// State change reported for a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Key went down
    Press,
    /// Key came up
    Release,
    /// Key is held and the OS generated a repeat
    Repeat,
}

impl From<glfw::Action> for KeyAction {
    fn from(action: glfw::Action) -> Self {
        match action {
            glfw::Action::Press => Self::Press,
            glfw::Action::Release => Self::Release,
            glfw::Action::Repeat => Self::Repeat,
        }
    }
}

/// Event delivered by a backend during an event pump
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NativeEvent {
    /// Keyboard key changed state; `code` is the raw key code and may be out of range
    Key {
        /// Raw key code (GLFW numbering)
        code: i32,
        /// What happened to the key
        action: KeyAction,
    },
    /// Cursor moved to a new position in window coordinates
    CursorPos {
        /// Horizontal position
        x: f64,
        /// Vertical position, growing downward
        y: f64,
    },
    /// Drawable surface changed size in pixels
    FramebufferResized {
        /// New width in pixels
        width: u32,
        /// New height in pixels
        height: u32,
    },
    /// User asked the window to close
    CloseRequested,
}

impl NativeEvent {
    /// Translate a GLFW event, dropping kinds this crate does not track
    pub fn from_glfw(event: &glfw::WindowEvent) -> Option<Self> {
        match *event {
            glfw::WindowEvent::Key(key, _, action, _) => Some(Self::Key {
                code: key as i32,
                action: action.into(),
            }),
            glfw::WindowEvent::CursorPos(x, y) => Some(Self::CursorPos { x, y }),
            glfw::WindowEvent::FramebufferSize(width, height) => Some(Self::FramebufferResized {
                width: u32::try_from(width).unwrap_or(0),
                height: u32::try_from(height).unwrap_or(0),
            }),
            glfw::WindowEvent::Close => Some(Self::CloseRequested),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glfw_key_translation() {
        let event = glfw::WindowEvent::Key(
            glfw::Key::W,
            17,
            glfw::Action::Press,
            glfw::Modifiers::empty(),
        );

        assert_eq!(
            NativeEvent::from_glfw(&event),
            Some(NativeEvent::Key { code: 87, action: KeyAction::Press })
        );
    }

    #[test]
    fn test_unknown_key_keeps_negative_code() {
        let event = glfw::WindowEvent::Key(
            glfw::Key::Unknown,
            0,
            glfw::Action::Release,
            glfw::Modifiers::empty(),
        );

        assert_eq!(
            NativeEvent::from_glfw(&event),
            Some(NativeEvent::Key { code: -1, action: KeyAction::Release })
        );
    }

    #[test]
    fn test_untracked_events_are_dropped() {
        assert_eq!(NativeEvent::from_glfw(&glfw::WindowEvent::Focus(true)), None);
        assert_eq!(
            NativeEvent::from_glfw(&glfw::WindowEvent::FramebufferSize(1600, 1200)),
            Some(NativeEvent::FramebufferResized { width: 1600, height: 1200 })
        );
    }
}
