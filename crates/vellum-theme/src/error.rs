//! Error types for theme construction and persistence.
//!
//! [`ThemeError`] covers the fatal conditions. Accessibility and
//! completeness problems are not errors: they come back as data in
//! [`ThemeValidation`](crate::ThemeValidation) and
//! [`BrandKitValidation`](crate::BrandKitValidation).

use std::path::PathBuf;

use thiserror::Error;
use vellum_color::ColorError;

/// Errors that can occur while building, rendering or storing a theme.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// No predefined theme has the requested id.
    #[error("theme template not found: {0}")]
    TemplateNotFound(String),

    /// A font pairing was requested by name but is not in the catalog.
    #[error("unknown font pairing: {0}")]
    UnknownFontPairing(String),

    /// The palette generator returned no candidates.
    #[error("no color scheme generated for industry '{0}'")]
    NoColorScheme(String),

    /// Color parsing failed (malformed hex, unknown industry, ...).
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Theme id cannot be used as a file name.
    #[error("invalid theme id '{0}': ids must be non-empty and contain no path separators")]
    InvalidThemeId(String),

    /// Settings document could not be read or parsed.
    #[error("{}", settings_message(.path, .message))]
    Settings {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Description of what went wrong.
        message: String,
    },

    /// JSON or YAML (de)serialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The HTML document template failed to render.
    #[error("render error: {0}")]
    Render(String),

    /// I/O error while reading or writing theme files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn settings_message(path: &Option<PathBuf>, message: &str) -> String {
    match path {
        Some(p) => format!("failed to load theme settings {}: {}", p.display(), message),
        None => format!("failed to load theme settings: {}", message),
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(err: serde_json::Error) -> Self {
        ThemeError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for ThemeError {
    fn from(err: serde_yaml::Error) -> Self {
        ThemeError::Serialization(err.to_string())
    }
}

impl From<minijinja::Error> for ThemeError {
    fn from(err: minijinja::Error) -> Self {
        ThemeError::Render(err.to_string())
    }
}

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
