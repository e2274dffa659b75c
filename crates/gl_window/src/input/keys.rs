//! Bounded key-down state

use super::events::KeyAction;

/// Number of key slots tracked; GLFW key codes top out at 348
pub const MAX_KEYS: usize = 1024;

/// Fixed-capacity key-down array indexed by raw key code
///
/// Codes outside `0..MAX_KEYS` are ignored on write and report "up" on read.
#[derive(Clone)]
pub struct KeyStates {
    down: [bool; MAX_KEYS],
}

impl KeyStates {
    /// All keys up
    pub const fn new() -> Self {
        Self { down: [false; MAX_KEYS] }
    }

    fn slot(code: i32) -> Option<usize> {
        usize::try_from(code).ok().filter(|&index| index < MAX_KEYS)
    }

    /// Apply a key event. Returns `false` when the code was out of range and dropped.
    pub fn apply(&mut self, code: i32, action: KeyAction) -> bool {
        let Some(index) = Self::slot(code) else {
            log::trace!("Ignoring out-of-range key code {code}");
            return false;
        };

        match action {
            KeyAction::Press => self.down[index] = true,
            KeyAction::Release => self.down[index] = false,
            KeyAction::Repeat => {}
        }
        true
    }

    /// Whether the key with this raw code is currently held
    pub fn is_down(&self, code: i32) -> bool {
        Self::slot(code).is_some_and(|index| self.down[index])
    }

    /// Whether a GLFW key is currently held
    pub fn is_key_down(&self, key: glfw::Key) -> bool {
        self.is_down(key as i32)
    }

    /// The raw array, one flag per key code
    pub const fn as_array(&self) -> &[bool; MAX_KEYS] {
        &self.down
    }

    /// Number of keys currently held
    pub fn pressed_count(&self) -> usize {
        self.down.iter().filter(|&&down| down).count()
    }

    /// Release every key
    pub fn clear(&mut self) {
        self.down = [false; MAX_KEYS];
    }
}

impl Default for KeyStates {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for KeyStates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let held: Vec<usize> = (0..MAX_KEYS).filter(|&index| self.down[index]).collect();
        f.debug_struct("KeyStates").field("held", &held).finish()
    }
}
