//! Error types for the color crate.

use thiserror::Error;

/// Errors that can occur when parsing or deriving colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// A color string is not a `#rgb` or `#rrggbb` hex code.
    #[error("invalid color format: '{0}' (expected #rgb or #rrggbb)")]
    InvalidColorFormat(String),

    /// Industry name is not part of the supported set.
    #[error("unknown industry: {0}")]
    UnknownIndustry(String),

    /// Personality name is not part of the supported set.
    #[error("unknown personality: {0}")]
    UnknownPersonality(String),
}

/// Result type for color operations.
pub type Result<T> = std::result::Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_color_display() {
        let err = ColorError::InvalidColorFormat("#zzz".to_string());
        let msg = err.to_string();
        assert!(msg.contains("invalid color format"));
        assert!(msg.contains("#zzz"));
    }

    #[test]
    fn test_unknown_industry_display() {
        let err = ColorError::UnknownIndustry("astrology".to_string());
        assert_eq!(err.to_string(), "unknown industry: astrology");
    }
}
