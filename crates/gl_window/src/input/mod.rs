//! Input state driven by window events
//!
//! Backends report [`NativeEvent`]s; the window feeds them into a
//! [`KeyStates`] array and a [`MouseTracker`] during its event pump.

pub mod events;
pub mod keys;
pub mod mouse;

pub use events::{KeyAction, NativeEvent};
pub use keys::{KeyStates, MAX_KEYS};
pub use mouse::MouseTracker;
