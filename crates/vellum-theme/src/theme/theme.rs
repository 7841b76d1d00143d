//! The [`ResumeTheme`] value and its design tokens.

use serde::{Deserialize, Serialize};
use vellum_color::{ColorPalette, Industry};

use crate::font::FontConfiguration;
use crate::mode::ColorMode;

/// Light and dark palettes of one theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub light: ColorPalette,
    pub dark: ColorPalette,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    pub xs: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            xs: "0.25rem".into(),
            sm: "0.5rem".into(),
            md: "1rem".into(),
            lg: "1.5rem".into(),
            xl: "2rem".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderRadius {
    pub sm: String,
    pub md: String,
    pub lg: String,
}

impl Default for BorderRadius {
    fn default() -> Self {
        Self {
            sm: "0.25rem".into(),
            md: "0.5rem".into(),
            lg: "0.75rem".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shadows {
    pub sm: String,
    pub md: String,
    pub lg: String,
}

impl Default for Shadows {
    fn default() -> Self {
        Self {
            sm: "0 1px 2px 0 rgb(0 0 0 / 0.05)".into(),
            md: "0 4px 6px -1px rgb(0 0 0 / 0.1)".into(),
            lg: "0 10px 15px -3px rgb(0 0 0 / 0.1)".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl HeaderAlignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderAlignment::Left => "left",
            HeaderAlignment::Center => "center",
            HeaderAlignment::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Layout {
    pub max_width: String,
    pub columns: u8,
    pub section_spacing: String,
    pub header_alignment: HeaderAlignment,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            max_width: "850px".into(),
            columns: 1,
            section_spacing: "2rem".into(),
            header_alignment: HeaderAlignment::Left,
        }
    }
}

/// A complete document theme.
///
/// Themes are plain values. Customizing one produces a new theme; nothing
/// in this crate mutates a theme it was handed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeTheme {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<Industry>,
    pub colors: ThemeColors,
    pub fonts: FontConfiguration,
    #[serde(default)]
    pub spacing: Spacing,
    #[serde(default)]
    pub border_radius: BorderRadius,
    #[serde(default)]
    pub shadows: Shadows,
    #[serde(default)]
    pub layout: Layout,
}

impl ResumeTheme {
    /// The palette used when rendering in `mode`.
    pub fn palette(&self, mode: ColorMode) -> &ColorPalette {
        match mode {
            ColorMode::Light => &self.colors.light,
            ColorMode::Dark => &self.colors.dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_deserializes_with_defaults() {
        let layout: Layout = serde_json::from_str(r#"{"headerAlignment":"center"}"#).unwrap();
        assert_eq!(layout.header_alignment, HeaderAlignment::Center);
        assert_eq!(layout.max_width, "850px");
        assert_eq!(layout.columns, 1);
    }

    #[test]
    fn test_token_defaults() {
        assert_eq!(Spacing::default().md, "1rem");
        assert_eq!(BorderRadius::default().lg, "0.75rem");
        assert!(Shadows::default().sm.starts_with("0 1px"));
    }
}
