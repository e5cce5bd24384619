//! Error types for Cosmic Welcome
//!
//! This module defines all custom error types used throughout the application.
//! Error types are organized by category for clear error handling and user-friendly messages.

use thiserror::Error;

/// Main application error type encompassing all error categories
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Localization errors
    #[error(transparent)]
    Locale(#[from] LocaleError),

    /// Generic unexpected error
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Configuration related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error loading configuration
    #[error("Could not load configuration: {0}")]
    LoadError(String),

    /// Invalid configuration value
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Localization related errors
#[derive(Error, Debug)]
pub enum LocaleError {
    /// The configured default locale is not in the catalog
    #[error("Default locale '{0}' is not a supported locale")]
    UnknownDefaultLocale(String),

    /// A locale's dictionary is missing a key another locale defines
    #[error("Locale '{locale}' is missing translation key '{key}'")]
    MissingKey { locale: String, key: String },

    /// The catalog contains no locales at all
    #[error("Translation catalog is empty")]
    EmptyCatalog,
}

/// Result type alias for operations that can fail with AppError
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for localization operations
pub type LocaleResult<T> = Result<T, LocaleError>;

impl LocaleError {
    /// Create a user-friendly error message suitable for display
    pub fn user_message(&self) -> String {
        match self {
            LocaleError::UnknownDefaultLocale(code) => {
                format!(
                    "The configured startup language '{}' is not available. \
                     Check the default_locale setting.",
                    code
                )
            }
            LocaleError::MissingKey { locale, key } => {
                format!(
                    "The '{}' translation is incomplete (missing '{}'). \
                     The translation table must define the same phrases for every language.",
                    locale, key
                )
            }
            LocaleError::EmptyCatalog => {
                "No languages are available. The translation table is empty.".to_string()
            }
        }
    }
}
