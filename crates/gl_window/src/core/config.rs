//! # Window Configuration
//!
//! Settings consumed when the native window and its OpenGL context are
//! created. Every field has a default, so partial config files are fine.
//!
//! ```toml
//! width = 1280
//! height = 720
//! title = "Viewer"
//! cursor = "Normal"
//!
//! [context_version]
//! major = 4
//! minor = 1
//! ```

use serde::{Deserialize, Serialize};

pub use crate::config::{Config, ConfigError};

/// Default requested window width in screen coordinates
pub const DEFAULT_WIDTH: u32 = 800;
/// Default requested window height in screen coordinates
pub const DEFAULT_HEIGHT: u32 = 600;

/// How the cursor behaves while the window has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorCapture {
    /// Visible, free to leave the window
    Normal,
    /// Invisible over the window but not locked
    Hidden,
    /// Hidden and locked to the window; unbounded virtual motion for camera control
    #[default]
    Disabled,
}

/// Requested OpenGL context version (always a core, forward-compatible profile)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextVersion {
    /// Major version
    pub major: u32,
    /// Minor version
    pub minor: u32,
}

impl ContextVersion {
    /// Create a context version
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Core profiles only exist from 3.2 onwards
    pub const fn supports_core_profile(self) -> bool {
        self.major > 3 || (self.major == 3 && self.minor >= 2)
    }
}

impl Default for ContextVersion {
    fn default() -> Self {
        Self::new(3, 3)
    }
}

/// # Window Configuration
///
/// Requested size, title and context settings for a [`crate::Window`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Requested width in screen coordinates
    pub width: u32,
    /// Requested height in screen coordinates
    pub height: u32,
    /// Title bar text
    pub title: String,
    /// OpenGL context version
    pub context_version: ContextVersion,
    /// Cursor mode set during initialisation
    pub cursor: CursorCapture,
    /// Whether the user may resize the window
    pub resizable: bool,
    /// Wait for vertical sync on buffer swaps
    pub vsync: bool,
}

impl WindowConfig {
    /// Create a configuration with default settings and the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set window title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set OpenGL context version
    pub fn with_context_version(mut self, major: u32, minor: u32) -> Self {
        self.context_version = ContextVersion::new(major, minor);
        self
    }

    /// Set the cursor mode applied on initialisation
    pub fn with_cursor(mut self, cursor: CursorCapture) -> Self {
        self.cursor = cursor;
        self
    }

    /// Allow or forbid resizing
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Enable or disable vsync
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Window size must be non-zero, got {}x{}",
                self.width, self.height
            ));
        }

        if self.title.trim().is_empty() {
            return Err("Window title cannot be empty".to_string());
        }

        if !self.context_version.supports_core_profile() {
            return Err(format!(
                "OpenGL {}.{} has no core profile, need 3.2 or newer",
                self.context_version.major, self.context_version.minor
            ));
        }

        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: "Window".to_string(),
            context_version: ContextVersion::default(),
            cursor: CursorCapture::default(),
            resizable: true,
            vsync: true,
        }
    }
}

impl Config for WindowConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;

    #[test]
    fn test_defaults_are_valid() {
        let config = WindowConfig::default();

        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.context_version, ContextVersion::new(3, 3));
        assert_eq!(config.cursor, CursorCapture::Disabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_settings() {
        assert!(WindowConfig::new(0, 600).validate().is_err());
        assert!(WindowConfig::new(800, 0).validate().is_err());
        assert!(WindowConfig::default().with_title("   ").validate().is_err());
        assert!(WindowConfig::default().with_context_version(3, 1).validate().is_err());
        assert!(WindowConfig::default().with_context_version(4, 6).validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = WindowConfig::from_str_with(
            "width = 1280\ntitle = \"Viewer\"\ncursor = \"Normal\"\n",
            ConfigFormat::Toml,
        )
        .unwrap();

        assert_eq!(config.width, 1280);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.title, "Viewer");
        assert_eq!(config.cursor, CursorCapture::Normal);
        assert!(config.vsync);
    }

    #[test]
    fn test_ron_parse() {
        let config = WindowConfig::from_str_with(
            "(width: 640, height: 480, context_version: (major: 4, minor: 1), resizable: false)",
            ConfigFormat::Ron,
        )
        .unwrap();

        assert_eq!((config.width, config.height), (640, 480));
        assert_eq!(config.context_version, ContextVersion::new(4, 1));
        assert!(!config.resizable);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("window.toml");
        let config = WindowConfig::new(1024, 768)
            .with_title("Saved")
            .with_cursor(CursorCapture::Hidden);

        config.save_to_file(&path).unwrap();
        let loaded = WindowConfig::load_from_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("window.json");

        assert!(matches!(
            WindowConfig::default().save_to_file(&path),
            Err(ConfigError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            WindowConfig::load_from_file(&path),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = WindowConfig::load_or_default(dir.path().join("absent.ron")).unwrap();

        assert_eq!(config, WindowConfig::default());
    }
}
