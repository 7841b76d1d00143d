//! Theme construction and validation.
//!
//! There are three ways to get a [`ResumeTheme`]:
//!
//! - [`create_from_template`] clones a predefined theme and optionally
//!   merges caller overrides into it.
//! - [`create_custom_theme`] runs the palette generator for an industry and
//!   personality and picks fonts from the catalog.
//! - [`create_from_brand_kit`] derives everything from a brand kit.
//!
//! The last two synthesize their dark palette with
//! [`adjust_palette_for_mode`]. Brand and semantic colors are darkened by
//! ×0.8, or lifted when darkening would drop them under 3:1 against the
//! dark background, and neutrals are replaced with dark slate tones. Callers
//! that relied on the dark palette reusing the light brand colors unchanged
//! will see different accents.

use serde::{Deserialize, Serialize};
use tracing::debug;
use vellum_color::{
    check_accessibility, contrast_ratio, generate_color_scheme, normalize_hex, ColorPalette,
    ColorSchemeRequest, Personality, WcagLevel,
};

use super::templates::get_template;
use super::theme::{ResumeTheme, ThemeColors};
use crate::brand::{generate_brand_theme, BrandKit};
use crate::error::{Result, ThemeError};
use crate::font::{
    create_configuration, get_pairing_by_name, is_safe_family, pairing_or_default,
    suggest_pairings, FontCategory, FontConfiguration, FontPairing, FontScale,
};
use crate::mode::{adjust_palette_for_mode, ColorMode};

/// Appended to the id of a customized theme.
pub(crate) const CUSTOM_SUFFIX: &str = "-custom";
const MIN_NON_TEXT_CONTRAST: f64 = 3.0;

// ─── Customization ──────────────────────────────────────────────────────────

/// Per-role color replacements. `None` keeps the theme's color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaletteOverrides {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
    pub background: Option<String>,
    pub surface: Option<String>,
    pub border: Option<String>,
    pub success: Option<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
    #[serde(alias = "text_primary")]
    pub text_primary: Option<String>,
    #[serde(alias = "text_secondary")]
    pub text_secondary: Option<String>,
    #[serde(alias = "text_muted")]
    pub text_muted: Option<String>,
}

impl PaletteOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn apply(&self, palette: &mut ColorPalette) -> Result<()> {
        let slots = [
            (&self.primary, &mut palette.primary),
            (&self.secondary, &mut palette.secondary),
            (&self.accent, &mut palette.accent),
            (&self.background, &mut palette.background),
            (&self.surface, &mut palette.surface),
            (&self.border, &mut palette.border),
            (&self.success, &mut palette.success),
            (&self.warning, &mut palette.warning),
            (&self.error, &mut palette.error),
            (&self.text_primary, &mut palette.text.primary),
            (&self.text_secondary, &mut palette.text.secondary),
            (&self.text_muted, &mut palette.text.muted),
        ];
        for (value, slot) in slots {
            if let Some(hex) = value {
                *slot = normalize_hex(hex)?;
            }
        }
        Ok(())
    }
}

/// Font family and scale replacements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontOverrides {
    pub heading: Option<String>,
    pub body: Option<String>,
    pub code: Option<String>,
    pub scale: Option<FontScale>,
}

impl FontOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn apply(&self, fonts: FontConfiguration) -> FontConfiguration {
        let mut fonts = match self.scale {
            Some(scale) => fonts.with_scale(scale),
            None => fonts,
        };
        let families = [
            (&self.heading, &mut fonts.heading.family),
            (&self.body, &mut fonts.body.family),
            (&self.code, &mut fonts.code.family),
        ];
        for (value, slot) in families {
            if let Some(family) = value.as_deref().map(str::trim).filter(|f| !f.is_empty()) {
                *slot = family.to_string();
            }
        }
        fonts
    }
}

/// Changes to apply on top of a theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeCustomization {
    pub name: Option<String>,
    pub colors: PaletteOverrides,
    pub fonts: FontOverrides,
}

impl ThemeCustomization {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.colors.is_empty() && self.fonts.is_empty()
    }
}

/// Returns `theme` with `customization` merged in.
///
/// Color overrides land in both the light and the dark palette. Fonts are
/// shared by both modes.
///
/// # Errors
///
/// Fails if an override color is not valid hex.
pub fn apply_customization(
    theme: &ResumeTheme,
    customization: &ThemeCustomization,
) -> Result<ResumeTheme> {
    let mut light = theme.colors.light.clone();
    let mut dark = theme.colors.dark.clone();
    customization.colors.apply(&mut light)?;
    customization.colors.apply(&mut dark)?;

    Ok(ResumeTheme {
        name: customization
            .name
            .clone()
            .unwrap_or_else(|| theme.name.clone()),
        colors: ThemeColors { light, dark },
        fonts: customization.fonts.apply(theme.fonts.clone()),
        ..theme.clone()
    })
}

// ─── Construction ───────────────────────────────────────────────────────────

/// Clones the predefined theme `id`, merging `customization` if given.
///
/// A non-empty customization appends `-custom` to the id.
///
/// # Errors
///
/// [`ThemeError::TemplateNotFound`] if no template has this id, or a color
/// error from an invalid override.
pub fn create_from_template(
    id: &str,
    customization: Option<&ThemeCustomization>,
) -> Result<ResumeTheme> {
    let template = get_template(id).ok_or_else(|| ThemeError::TemplateNotFound(id.to_string()))?;

    match customization.filter(|c| !c.is_empty()) {
        Some(customization) => {
            let mut theme = apply_customization(template, customization)?;
            theme.id = format!("{}{}", template.id, CUSTOM_SUFFIX);
            debug!(template = id, "created customized theme from template");
            Ok(theme)
        }
        None => {
            debug!(template = id, "created theme from template");
            Ok(template.clone())
        }
    }
}

/// Font category preferred for a personality when suggesting pairings.
fn preferred_style(personality: Personality) -> FontCategory {
    match personality {
        Personality::Professional | Personality::Modern => FontCategory::Modern,
        Personality::Creative | Personality::Bold => FontCategory::Creative,
        Personality::Classic => FontCategory::Classic,
    }
}

/// Builds a theme from the best palette generated for `request`.
///
/// With `font_pairing`, that catalog pairing is used. Without it, the first
/// pairing suggested for the industry and personality is used.
///
/// # Errors
///
/// [`ThemeError::UnknownFontPairing`] if `font_pairing` is not cataloged,
/// or a color error from invalid preference colors.
pub fn create_custom_theme(
    request: &ColorSchemeRequest,
    font_pairing: Option<&str>,
) -> Result<ResumeTheme> {
    let pairing: &FontPairing = match font_pairing {
        Some(name) => get_pairing_by_name(name)
            .ok_or_else(|| ThemeError::UnknownFontPairing(name.to_string()))?,
        None => suggest_pairings(request.industry, preferred_style(request.personality))
            .into_iter()
            .next()
            .unwrap_or_else(|| pairing_or_default("")),
    };

    let best = generate_color_scheme(request)?
        .into_iter()
        .next()
        .ok_or_else(|| ThemeError::NoColorScheme(request.industry.to_string()))?;
    let dark = adjust_palette_for_mode(&best.palette, ColorMode::Dark)?;

    debug!(
        industry = %request.industry,
        personality = %request.personality,
        scheme = %best.name,
        pairing = pairing.name,
        "created custom theme"
    );

    Ok(ResumeTheme {
        id: format!("custom-{}-{}", request.industry, request.personality),
        name: best.name,
        description: best.description,
        industry: Some(request.industry),
        colors: ThemeColors {
            light: best.palette,
            dark,
        },
        fonts: create_configuration(pairing, FontScale::Standard),
        spacing: Default::default(),
        border_radius: Default::default(),
        shadows: Default::default(),
        layout: Default::default(),
    })
}

/// Builds a theme from a brand kit. `personality` defaults to professional.
///
/// # Errors
///
/// A color error if any kit color is not valid hex.
pub fn create_from_brand_kit(
    kit: &BrandKit,
    personality: Option<Personality>,
) -> Result<ResumeTheme> {
    let personality = personality.unwrap_or_default();
    let brand = generate_brand_theme(kit, personality)?;
    let dark = adjust_palette_for_mode(&brand.colors, ColorMode::Dark)?;

    debug!(
        primary = %brand.colors.primary,
        personality = %personality,
        "created theme from brand kit"
    );

    Ok(ResumeTheme {
        id: format!("brand-{}", personality),
        name: format!("Brand ({})", brand.style),
        description: format!(
            "Derived from brand color {} with the {} pairing",
            brand.colors.primary, brand.pairing
        ),
        industry: None,
        colors: ThemeColors {
            light: brand.colors,
            dark,
        },
        fonts: brand.fonts,
        spacing: Default::default(),
        border_radius: Default::default(),
        shadows: Default::default(),
        layout: Default::default(),
    })
}

// ─── Validation ─────────────────────────────────────────────────────────────

/// Result of [`validate_theme`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

fn validate_palette(palette: &ColorPalette, mode: ColorMode, result: &mut ThemeValidation) {
    let invalid = palette.invalid_entries();
    if !invalid.is_empty() {
        for name in invalid {
            result
                .errors
                .push(format!("{} palette: '{}' is not a valid hex color", mode, name));
        }
        return;
    }

    for (role, text) in [
        ("primary", &palette.text.primary),
        ("secondary", &palette.text.secondary),
    ] {
        let Ok(report) = check_accessibility(text, &palette.background) else {
            continue;
        };
        match report.level {
            WcagLevel::Fail => result.errors.push(format!(
                "{} palette: {} text contrast {:.2}:1 fails WCAG AA",
                mode, role, report.contrast_ratio
            )),
            WcagLevel::Aa => result.warnings.push(format!(
                "{} palette: {} text contrast {:.2}:1 meets AA but not AAA",
                mode, role, report.contrast_ratio
            )),
            WcagLevel::Aaa => {}
        }
    }

    if let Ok(ratio) = contrast_ratio(&palette.text.muted, &palette.background) {
        if ratio < MIN_NON_TEXT_CONTRAST {
            result.suggestions.push(format!(
                "{} palette: muted text contrast is {:.2}:1; keep it for non-essential content",
                mode, ratio
            ));
        }
    }

    // links and rules are drawn in the primary color
    if let Ok(ratio) = contrast_ratio(&palette.primary, &palette.background) {
        if ratio < MIN_NON_TEXT_CONTRAST {
            result.warnings.push(format!(
                "{} palette: primary contrast {:.2}:1 is under 3:1; links are hard to read",
                mode, ratio
            ));
        }
    }
}

fn validate_fonts(fonts: &FontConfiguration, result: &mut ThemeValidation) {
    if fonts.heading.family.trim().is_empty() {
        result.errors.push("Heading font family is required".to_string());
    }
    if fonts.body.family.trim().is_empty() {
        result.errors.push("Body font family is required".to_string());
    }
    if fonts.code.family.trim().is_empty() {
        result
            .warnings
            .push("Code font family is empty; monospace will be used".to_string());
    }

    for (role, family) in [
        ("Heading", &fonts.heading.family),
        ("Body", &fonts.body.family),
        ("Code", &fonts.code.family),
    ] {
        if !is_safe_family(family) {
            result.errors.push(format!(
                "{} font family '{}' contains characters not allowed in a font name",
                role, family
            ));
        }
    }

    for (role, weight) in [
        ("heading", fonts.heading.weight),
        ("body", fonts.body.weight),
    ] {
        if !(300..=700).contains(&weight) || weight % 100 != 0 {
            result.warnings.push(format!(
                "{} font weight {} is outside the common web-font weights 300-700",
                role, weight
            ));
        }
    }
}

/// Checks a theme for accessibility and completeness.
///
/// Contrast failures and missing font families are errors. AA-only text
/// contrast is a warning. The theme is not modified.
pub fn validate_theme(theme: &ResumeTheme) -> ThemeValidation {
    let mut result = ThemeValidation::default();
    for mode in [ColorMode::Light, ColorMode::Dark] {
        validate_palette(theme.palette(mode), mode, &mut result);
    }
    validate_fonts(&theme.fonts, &mut result);

    result.is_valid = result.errors.is_empty();
    debug!(
        theme = %theme.id,
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "validated theme"
    );
    result
}
