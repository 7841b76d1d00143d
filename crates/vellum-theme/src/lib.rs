//! # Vellum Theme - themes for rendered documents
//!
//! `vellum-theme` turns a template id, an industry and personality, or a
//! small brand kit into a complete [`ResumeTheme`]: light and dark palettes,
//! a font configuration, and spacing, radius, shadow and layout tokens. It
//! validates themes for contrast and completeness and renders them as CSS or
//! as a full HTML document.
//!
//! Color science (HSL, WCAG contrast, palette generation) lives in
//! [`vellum_color`], re-exported here as [`color`].
//!
//! ## Quick Start
//!
//! ```rust
//! use vellum_theme::{create_from_template, generate_css, validate_theme, ColorMode};
//!
//! let theme = create_from_template("modern-professional", None).unwrap();
//! assert!(validate_theme(&theme).is_valid);
//!
//! let css = generate_css(&theme, ColorMode::Dark);
//! assert!(css.contains("--color-background: #0f172a;"));
//! ```
//!
//! ## Modules
//!
//! - [`font`]: the font pairing catalog, suggestions and typography CSS
//! - [`brand`]: brand kits and their validation
//! - [`theme`]: theme construction, validation, CSS and HTML
//! - [`mode`]: light/dark/auto resolution and palette adjustment
//! - [`settings`]: YAML settings that describe a theme
//! - [`store`]: saving and loading theme files
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber.
//! Construction paths log at `debug`, fallbacks at `warn`, file I/O at
//! `info`.

pub mod brand;
mod error;
pub mod font;
pub mod mode;
pub mod settings;
pub mod store;
pub mod theme;

pub use vellum_color as color;

pub use error::{Result, ThemeError};

pub use brand::{
    brand_profile, extract_logo_colors, generate_brand_theme, validate_brand_kit, BrandColors,
    BrandFonts, BrandKit, BrandKitValidation, BrandLogo, BrandProfile, BrandTheme, LogoPosition,
};
pub use font::{
    all_pairings, create_configuration, font_stack, get_pairing_by_name, google_fonts_url,
    is_safe_family, pairings_by_category, suggest_pairings, FontCategory, FontConfiguration,
    FontPairing, FontScale,
};
pub use mode::{
    adjust_palette_for_mode, darken_for_dark_mode, detect_color_mode, lighten_for_light_mode,
    resolve_mode, set_mode_detector, ColorMode, ThemeMode, ThemeModeState, MIN_DARK_CONTRAST,
};
pub use settings::ThemeSettings;
pub use store::{load_theme, save_theme};
pub use theme::{
    apply_customization, apply_theme_to_html, create_custom_theme, create_from_brand_kit,
    create_from_template, generate_css, generate_stylesheet, get_template, list_templates,
    validate_theme, FontOverrides, PaletteOverrides, ResumeTheme, ThemeCustomization,
    ThemeValidation,
};
