//! # Vellum Color - Accessible Palette Generation
//!
//! `vellum-color` is the color-science layer of the Vellum document theming
//! toolkit. It converts between hex, RGB and HSL, measures WCAG contrast, and
//! derives ranked, industry-appropriate palettes from a short request.
//!
//! The crate is pure computation: no I/O, no shared mutable state. The
//! industry and personality tables are `const` data.
//!
//! ## Core Concepts
//!
//! - [`Rgb`] / [`Hsl`]: parsed color values; every hex string is validated
//!   on the way in ([`ColorError::InvalidColorFormat`])
//! - [`contrast_ratio`] / [`check_accessibility`]: WCAG 2.x contrast and
//!   [`WcagLevel`] classification
//! - [`generate_color_scheme`]: three ranked [`GeneratedColorScheme`]s for a
//!   [`ColorSchemeRequest`]
//! - [`generate_color_variations`]: a lightness ramp around one color
//!
//! ## Quick Start
//!
//! ```rust
//! use vellum_color::{
//!     check_accessibility, generate_color_scheme, ColorSchemeRequest, Industry, Personality,
//!     WcagLevel,
//! };
//!
//! let request = ColorSchemeRequest::new(Industry::Healthcare, Personality::Modern);
//! let schemes = generate_color_scheme(&request).unwrap();
//!
//! let best = &schemes[0].palette;
//! let report = check_accessibility(&best.text.primary, &best.background).unwrap();
//! assert_ne!(report.level, WcagLevel::Fail);
//! ```

pub mod colorspace;
pub mod contrast;
mod error;
pub mod industry;
pub mod palette;

pub use error::{ColorError, Result};

pub use colorspace::{color_distance, hex_to_hsl, hsl_to_hex, is_valid_hex, normalize_hex, Hsl, Rgb};
pub use contrast::{
    check_accessibility, contrast_ratio, optimal_text_color, relative_luminance, rgb_contrast,
    AccessibilityReport, WcagLevel, AAA_THRESHOLD, AA_THRESHOLD,
};
pub use industry::{industry_colors, personality_base, Industry, Personality, PersonalityBase};
pub use palette::{
    generate_color_scheme, generate_color_variations, harmonize, ColorPalette, ColorPreferences,
    ColorSchemeRequest, GeneratedColorScheme, TextColors, ERROR_COLOR, SCHEME_COUNT,
    SUCCESS_COLOR, WARNING_COLOR,
};
