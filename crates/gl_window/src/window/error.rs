//! Window management errors

use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// The windowing library itself could not start (no display, missing driver)
    #[error("GLFW initialization failed: {0}")]
    LibraryInit(String),

    /// The native window or its rendering context could not be created
    #[error("Window creation failed: {0}")]
    InitFailure(String),

    /// `initialise` was called on a window that already owns a native handle
    #[error("Window is already initialised")]
    AlreadyInitialised,
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;
