//! Configuration management for Cosmic Welcome
//!
//! Handles loading and managing application configuration.
//! Configuration is organized into sections by concern; the current
//! phase ships with in-code defaults only (no on-disk settings), so the
//! selected language never outlives the session.

use crate::error::ConfigResult;
use serde::{Deserialize, Serialize};

/// Application identifier following reverse-DNS convention
pub const APP_ID: &str = "com.cosmic.Welcome";

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: u32 = 640;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: u32 = 360;

/// Minimum window width in pixels
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Minimum window height in pixels
pub const MIN_WINDOW_HEIGHT: u32 = 200;

/// Locale active on startup
pub const DEFAULT_LOCALE: &str = "en";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Localization configuration
    pub general: GeneralConfig,

    /// UI configuration
    pub ui: UiConfig,
}

impl Config {
    /// Load configuration or return defaults
    pub fn load() -> ConfigResult<Self> {
        // No settings file in this phase - defaults only
        Ok(Self::default())
    }
}

/// Localization configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Locale code active on startup
    pub default_locale: String,

    /// How translation lookups treat message keys absent from the
    /// active dictionary
    pub missing_key: MissingKeyBehavior,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            missing_key: MissingKeyBehavior::default(),
        }
    }
}

/// Behavior when a message key is absent from the active dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MissingKeyBehavior {
    /// Render the key itself as a visible placeholder (the permissive
    /// default of typical localization libraries)
    #[default]
    KeyPlaceholder,

    /// Treat an incomplete catalog as a startup configuration defect
    Fail,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Default window width
    pub window_width: u32,

    /// Default window height
    pub window_height: u32,

    /// Text size of the welcome heading
    pub heading_size: u16,

    /// Horizontal gap between the language-switch buttons
    pub button_spacing: u16,

    /// Vertical gap between the heading and the controls
    pub content_spacing: u16,

    /// Padding around the window content
    pub content_padding: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            heading_size: 24,
            button_spacing: 10,
            content_spacing: 16,
            content_padding: 20,
        }
    }
}
