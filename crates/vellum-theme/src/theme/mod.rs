//! Complete document themes: construction, validation and CSS output.
//!
//! A [`ResumeTheme`] bundles a light and a dark [`ColorPalette`], a
//! [`FontConfiguration`], and spacing, radius, shadow and layout tokens.
//!
//! ## Construction
//!
//! ```rust
//! use vellum_theme::theme::{create_custom_theme, create_from_template};
//! use vellum_color::{ColorSchemeRequest, Industry, Personality};
//!
//! let template = create_from_template("modern-professional", None).unwrap();
//! assert_eq!(template.name, "Modern Professional");
//!
//! let request = ColorSchemeRequest::new(Industry::Finance, Personality::Classic);
//! let custom = create_custom_theme(&request, Some("Executive")).unwrap();
//! assert_eq!(custom.fonts.heading.family, "Libre Baskerville");
//! ```
//!
//! ## Output
//!
//! [`generate_css`] emits one mode, [`generate_stylesheet`] emits light
//! colors on `:root` plus dark overrides under `[data-theme="dark"]`, and
//! [`apply_theme_to_html`] wraps a fragment in a full document.
//!
//! [`ColorPalette`]: vellum_color::ColorPalette
//! [`FontConfiguration`]: crate::font::FontConfiguration

mod css;
mod engine;
mod templates;
#[allow(clippy::module_inception)]
mod theme;

pub use css::{apply_theme_to_html, generate_css, generate_stylesheet};
pub use engine::{
    apply_customization, create_custom_theme, create_from_brand_kit, create_from_template,
    validate_theme, FontOverrides, PaletteOverrides, ThemeCustomization, ThemeValidation,
};
pub(crate) use engine::CUSTOM_SUFFIX;
pub use templates::{get_template, list_templates, DEFAULT_TEMPLATE};
pub use theme::{
    BorderRadius, HeaderAlignment, Layout, ResumeTheme, Shadows, Spacing, ThemeColors,
};
