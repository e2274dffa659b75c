//! Window management
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │     Application Code            │
//! └─────────────┬───────────────────┘
//!               │ Uses
//!         ┌─────▼─────┐
//!         │  Window   │ ← Public API, owns input state (handle.rs)
//!         └─────┬─────┘
//!               │ Owns
//!      ┌────────▼────────┐
//!      │ WindowBackend   │ ← One native window (backend.rs)
//!      └────────┬────────┘
//!               │ Created by
//!      ┌────────▼────────┐
//!      │ WindowSystem    │ ← Process-wide library, owned by the host
//!      └────────┬────────┘
//!               │ Implemented by
//!   ┌───────────▼───────────┐
//!   │ backend::GlfwSystem   │
//!   │ backend::HeadlessSystem│
//!   └───────────────────────┘
//! ```

pub mod backend;
pub mod error;
pub mod handle;

pub use backend::{WindowBackend, WindowSystem};
pub use error::{WindowError, WindowResult};
pub use handle::Window;
