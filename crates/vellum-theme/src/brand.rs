//! Brand kits: deriving a palette and typography from a few seed colors.
//!
//! A [`BrandKit`] carries one required primary color and optional
//! secondary/accent colors, logo and fonts. Missing colors are derived from
//! the primary with [`harmonize`], the same hue rotation the palette
//! generator uses, so a one-color kit still yields a complete palette.
//!
//! The kit is only ever borrowed. Every function here returns new values.

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;
use vellum_color::{
    contrast_ratio, harmonize, is_valid_hex, optimal_text_color, personality_base, ColorPalette,
    Personality, Rgb, AA_THRESHOLD,
};

use crate::error::Result;
use crate::font::{
    create_configuration, is_safe_family, pairing_or_default, FontConfiguration, FontScale,
};

/// Colors returned by [`extract_logo_colors`].
pub const LOGO_PLACEHOLDER_COLORS: [&str; 3] = ["#2563eb", "#1e40af", "#f59e0b"];

/// Seed colors. Only `primary` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandColors {
    pub primary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

/// Where a logo sits in the document header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogoPosition {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandLogo {
    pub url: String,
    #[serde(default)]
    pub position: LogoPosition,
}

/// Font families that replace the personality's pairing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandFonts {
    pub heading: Option<String>,
    pub body: Option<String>,
}

/// A minimal brand seed supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandKit {
    pub colors: BrandColors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<BrandLogo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts: Option<BrandFonts>,
}

impl BrandKit {
    /// A kit with only a primary color.
    pub fn from_primary(primary: impl Into<String>) -> Self {
        Self {
            colors: BrandColors {
                primary: primary.into(),
                secondary: None,
                accent: None,
            },
            logo: None,
            fonts: None,
        }
    }
}

/// How a personality shapes a brand theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandProfile {
    pub personality: Personality,
    /// Catalog name of the pairing this personality uses.
    pub font_pairing: &'static str,
    pub style: &'static str,
}

/// The personality table, read-only.
pub fn brand_profile(personality: Personality) -> BrandProfile {
    let (font_pairing, style) = match personality {
        Personality::Professional => ("Elegant Professional", "corporate"),
        Personality::Creative => ("Creative Bold", "expressive"),
        Personality::Modern => ("Modern Tech", "minimal"),
        Personality::Classic => ("Classic Serif", "traditional"),
        Personality::Bold => ("Startup Fresh", "vibrant"),
    };
    BrandProfile {
        personality,
        font_pairing,
        style,
    }
}

/// Palette and typography derived from a brand kit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandTheme {
    pub colors: ColorPalette,
    pub fonts: FontConfiguration,
    /// Black or white, whichever reads better on the primary color.
    pub on_primary: String,
    pub style: String,
    /// Name of the pairing the fonts started from.
    pub pairing: String,
}

fn parse_or(seed: Option<&str>, derived: Rgb) -> Result<Rgb> {
    match seed {
        Some(hex) => Ok(Rgb::from_hex(hex)?),
        None => Ok(derived),
    }
}

fn non_empty(family: Option<&String>) -> Option<&str> {
    family.map(|f| f.trim()).filter(|f| !f.is_empty())
}

/// Builds a palette and font configuration from `kit`.
///
/// # Errors
///
/// Returns [`ThemeError::Color`](crate::ThemeError::Color) if any kit color
/// is not valid hex.
pub fn generate_brand_theme(kit: &BrandKit, personality: Personality) -> Result<BrandTheme> {
    let primary = Rgb::from_hex(&kit.colors.primary)?;
    let (derived_secondary, derived_accent) = harmonize(primary);
    let secondary = parse_or(kit.colors.secondary.as_deref(), derived_secondary)?;
    let accent = parse_or(kit.colors.accent.as_deref(), derived_accent)?;

    let colors =
        ColorPalette::from_parts(primary, secondary, accent, &personality_base(personality));
    let on_primary = optimal_text_color(&colors.primary)?.to_string();

    let profile = brand_profile(personality);
    let pairing = pairing_or_default(profile.font_pairing);
    let mut fonts = create_configuration(pairing, FontScale::Standard);
    if let Some(kit_fonts) = &kit.fonts {
        if let Some(heading) = non_empty(kit_fonts.heading.as_ref()) {
            fonts.heading.family = heading.to_string();
        }
        if let Some(body) = non_empty(kit_fonts.body.as_ref()) {
            fonts.body.family = body.to_string();
        }
    }

    debug!(
        primary = %colors.primary,
        personality = %personality,
        pairing = pairing.name,
        derived_secondary = kit.colors.secondary.is_none(),
        derived_accent = kit.colors.accent.is_none(),
        "generated brand theme"
    );

    Ok(BrandTheme {
        colors,
        fonts,
        on_primary,
        style: profile.style.to_string(),
        pairing: pairing.name.to_string(),
    })
}

/// Result of [`validate_brand_kit`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandKitValidation {
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Checks a kit's colors, logo URL and font families.
///
/// Problems come back as data. This never fails and never panics.
pub fn validate_brand_kit(kit: &BrandKit) -> BrandKitValidation {
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    let seeds = [
        ("Primary", Some(&kit.colors.primary)),
        ("Secondary", kit.colors.secondary.as_ref()),
        ("Accent", kit.colors.accent.as_ref()),
    ];
    for (role, hex) in seeds {
        if let Some(hex) = hex {
            if !is_valid_hex(hex) {
                issues.push(format!("{} color '{}' is not a valid hex color", role, hex));
            }
        }
    }

    if let Ok(ratio) = contrast_ratio(&kit.colors.primary, "#ffffff") {
        if ratio < AA_THRESHOLD {
            suggestions.push(format!(
                "Primary color {} has a contrast ratio of {:.2} against white; \
                 consider a darker shade for headings and links",
                kit.colors.primary, ratio
            ));
        }
    }

    if kit.colors.secondary.is_none() || kit.colors.accent.is_none() {
        suggestions.push(
            "Missing secondary or accent colors will be derived from the primary color".to_string(),
        );
    }

    if let Some(logo) = &kit.logo {
        match Url::parse(logo.url.trim()) {
            Ok(url) => match url.scheme() {
                "https" => {}
                "http" => suggestions.push(format!(
                    "Logo URL '{}' uses http; serve it over https to avoid mixed-content warnings",
                    logo.url
                )),
                scheme => issues.push(format!(
                    "Logo URL '{}' has unsupported scheme '{}'",
                    logo.url, scheme
                )),
            },
            Err(err) => issues.push(format!("Logo URL '{}' is not valid: {}", logo.url, err)),
        }
    }

    if let Some(fonts) = &kit.fonts {
        for (role, family) in [("Heading", &fonts.heading), ("Body", &fonts.body)] {
            match family {
                Some(f) if f.trim().is_empty() => {
                    issues.push(format!("{} font family is empty", role));
                }
                Some(f) if !is_safe_family(f) => issues.push(format!(
                    "{} font family '{}' contains characters not allowed in a font name",
                    role, f
                )),
                _ => {}
            }
        }
    }

    BrandKitValidation {
        is_valid: issues.is_empty(),
        issues,
        suggestions,
    }
}

/// Returns fixed placeholder colors for a logo.
///
/// No image is fetched or analyzed.
pub fn extract_logo_colors(logo: &BrandLogo) -> Vec<String> {
    debug!(url = %logo.url, "returning placeholder logo colors");
    LOGO_PLACEHOLDER_COLORS.iter().map(|c| c.to_string()).collect()
}
