//! # Core Module
//!
//! Shared settings types used by the window and its backends.

pub mod config;

pub use config::{ContextVersion, CursorCapture, WindowConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH};
