//! Cursor movement tracking with read-and-clear deltas

/// Accumulates cursor movement between reads
///
/// The first position seen after construction or [`MouseTracker::reset`]
/// only sets the baseline, so a cursor that starts somewhere arbitrary does
/// not produce a jump. Y deltas are inverted (`last_y - y`) so moving the
/// cursor up yields a positive change.
#[derive(Debug, Clone, PartialEq)]
pub struct MouseTracker {
    last_x: f64,
    last_y: f64,
    x_change: f32,
    y_change: f32,
    first_move: bool,
}

impl MouseTracker {
    /// Tracker waiting for its first position
    pub const fn new() -> Self {
        Self {
            last_x: 0.0,
            last_y: 0.0,
            x_change: 0.0,
            y_change: 0.0,
            first_move: true,
        }
    }

    /// Record a cursor position
    #[allow(clippy::cast_possible_truncation)]
    pub fn on_cursor_pos(&mut self, x: f64, y: f64) {
        if self.first_move {
            self.last_x = x;
            self.last_y = y;
            self.first_move = false;
            return;
        }

        self.x_change += (x - self.last_x) as f32;
        self.y_change += (self.last_y - y) as f32;
        self.last_x = x;
        self.last_y = y;
    }

    /// Horizontal movement since the last read; clears it
    pub fn take_x_change(&mut self) -> f32 {
        std::mem::take(&mut self.x_change)
    }

    /// Vertical movement since the last read; clears it
    pub fn take_y_change(&mut self) -> f32 {
        std::mem::take(&mut self.y_change)
    }

    /// Last cursor position seen, if any
    pub const fn last_position(&self) -> Option<(f64, f64)> {
        if self.first_move {
            None
        } else {
            Some((self.last_x, self.last_y))
        }
    }

    /// Drop pending deltas and wait for a new baseline
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for MouseTracker {
    fn default() -> Self {
        Self::new()
    }
}
