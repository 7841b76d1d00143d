//! Industry-aware palette generation.
//!
//! [`generate_color_scheme`] turns a [`ColorSchemeRequest`] into exactly
//! three ranked [`GeneratedColorScheme`] candidates:
//!
//! 1. The industry table supplies four primary candidates and the
//!    personality table supplies the neutral tones.
//! 2. Candidates within distance 50 of an avoided color are dropped. If that
//!    drops every candidate, the unfiltered list is used instead.
//! 3. Candidates within distance 30 of a favorite color are preferred. If
//!    none qualify, the filtered list stands.
//! 4. Scheme `i` takes candidate `i % len` as its primary, derives the
//!    secondary (complement) and accent (triad) by hue rotation, and scores
//!    the text/background contrast.
//! 5. Confidence starts at 0.7, gains 0.2 for AAA or 0.1 for AA, and 0.1
//!    more when the primary is within distance 50 of a favorite, capped at
//!    1.0. Results are sorted by descending confidence; ties keep
//!    generation order.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::colorspace::{hex_to_hsl, hsl_to_hex, rgb_distance, Hsl, Rgb};
use crate::contrast::{rgb_contrast, AccessibilityReport, WcagLevel};
use crate::error::Result;
use crate::industry::{industry_colors, personality_base, Industry, Personality, PersonalityBase};

/// Semantic color for positive states.
pub const SUCCESS_COLOR: &str = "#10b981";
/// Semantic color for cautionary states.
pub const WARNING_COLOR: &str = "#f59e0b";
/// Semantic color for error states.
pub const ERROR_COLOR: &str = "#ef4444";

/// Number of candidates [`generate_color_scheme`] returns.
pub const SCHEME_COUNT: usize = 3;

const AVOID_DISTANCE: f64 = 50.0;
const FAVORITE_DISTANCE: f64 = 30.0;
const FAVORITE_BONUS_DISTANCE: f64 = 50.0;

const VARIANT_NAMES: [&str; SCHEME_COUNT] = ["Signature", "Alternative", "Distinctive"];
const VARIATION_OFFSETS: [f64; 8] = [-40.0, -30.0, -20.0, -10.0, 10.0, 20.0, 30.0, 40.0];

// ─── Data types ─────────────────────────────────────────────────────────────

/// Text tones, from strongest to weakest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextColors {
    pub primary: String,
    pub secondary: String,
    pub muted: String,
}

/// A complete set of semantic colors, all `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub surface: String,
    pub border: String,
    pub success: String,
    pub warning: String,
    pub error: String,
    pub text: TextColors,
}

impl ColorPalette {
    /// Assembles a palette from brand colors and a personality's neutrals.
    pub fn from_parts(primary: Rgb, secondary: Rgb, accent: Rgb, base: &PersonalityBase) -> Self {
        Self {
            primary: primary.to_hex(),
            secondary: secondary.to_hex(),
            accent: accent.to_hex(),
            background: base.background.to_string(),
            surface: base.surface.to_string(),
            border: base.border.to_string(),
            success: SUCCESS_COLOR.to_string(),
            warning: WARNING_COLOR.to_string(),
            error: ERROR_COLOR.to_string(),
            text: TextColors {
                primary: base.text_primary.to_string(),
                secondary: base.text_secondary.to_string(),
                muted: base.text_muted.to_string(),
            },
        }
    }

    /// Every color paired with its kebab-case role name.
    ///
    /// The order is stable and is the order CSS custom properties are
    /// emitted in.
    pub fn entries(&self) -> [(&'static str, &str); 12] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("background", &self.background),
            ("surface", &self.surface),
            ("border", &self.border),
            ("success", &self.success),
            ("warning", &self.warning),
            ("error", &self.error),
            ("text-primary", &self.text.primary),
            ("text-secondary", &self.text.secondary),
            ("text-muted", &self.text.muted),
        ]
    }

    /// Names of the roles whose value is not a valid hex color.
    pub fn invalid_entries(&self) -> Vec<&'static str> {
        self.entries()
            .into_iter()
            .filter(|(_, hex)| Rgb::from_hex(hex).is_err())
            .map(|(name, _)| name)
            .collect()
    }
}

/// Optional color preferences attached to a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorPreferences {
    #[serde(alias = "favorite_colors")]
    pub favorite_colors: Vec<String>,
    #[serde(alias = "avoid_colors")]
    pub avoid_colors: Vec<String>,
    /// Break confidence ties in favor of the higher contrast ratio.
    pub accessibility: bool,
}

/// Input to [`generate_color_scheme`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSchemeRequest {
    pub industry: Industry,
    pub personality: Personality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<ColorPreferences>,
}

impl ColorSchemeRequest {
    /// Creates a request without preferences.
    pub fn new(industry: Industry, personality: Personality) -> Self {
        Self {
            industry,
            personality,
            preferences: None,
        }
    }

    /// Attaches color preferences.
    pub fn with_preferences(mut self, preferences: ColorPreferences) -> Self {
        self.preferences = Some(preferences);
        self
    }
}

/// One ranked palette candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedColorScheme {
    pub name: String,
    pub description: String,
    pub reasoning: String,
    pub palette: ColorPalette,
    /// In `[0, 1]`.
    pub confidence: f64,
    pub accessibility: AccessibilityReport,
}

// ─── Generation ─────────────────────────────────────────────────────────────

/// Derives the (secondary, accent) pair for a primary color.
///
/// The secondary is the complement (+180°) at 80% of the primary's
/// saturation. The accent is the first triad (+120°) with lightness raised
/// by 10 points, capped at 90.
pub fn harmonize(primary: Rgb) -> (Rgb, Rgb) {
    let hsl = primary.to_hsl();
    let secondary = Hsl {
        s: hsl.s * 0.8,
        ..hsl.rotate(180.0)
    };
    let accent = Hsl {
        l: (hsl.l + 10.0).min(90.0),
        ..hsl.rotate(120.0)
    };
    (secondary.to_rgb(), accent.to_rgb())
}

/// Produces three ranked palette candidates for a request.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`](crate::ColorError::InvalidColorFormat)
/// if a favorite or avoided color is not valid hex.
///
/// # Example
///
/// ```rust
/// use vellum_color::{generate_color_scheme, ColorSchemeRequest, Industry, Personality};
///
/// let request = ColorSchemeRequest::new(Industry::Technology, Personality::Professional);
/// let schemes = generate_color_scheme(&request).unwrap();
/// assert_eq!(schemes.len(), 3);
/// assert!(schemes[0].confidence >= schemes[1].confidence);
/// ```
pub fn generate_color_scheme(request: &ColorSchemeRequest) -> Result<Vec<GeneratedColorScheme>> {
    let preferences = request.preferences.clone().unwrap_or_default();
    let favorites = parse_all(&preferences.favorite_colors)?;
    let avoid = parse_all(&preferences.avoid_colors)?;
    let candidates = parse_all(industry_colors(request.industry))?;

    let pool = select_candidates(&candidates, &favorites, &avoid);
    debug!(
        industry = %request.industry,
        personality = %request.personality,
        candidates = pool.len(),
        "selected primary candidates"
    );

    let base = personality_base(request.personality);
    let mut schemes = (0..SCHEME_COUNT)
        .map(|i| build_scheme(i, pool[i % pool.len()], request, &base, &favorites))
        .collect::<Result<Vec<_>>>()?;

    schemes.sort_by(|a, b| {
        let by_confidence = b.confidence.total_cmp(&a.confidence);
        if preferences.accessibility {
            by_confidence.then_with(|| {
                b.accessibility
                    .contrast_ratio
                    .total_cmp(&a.accessibility.contrast_ratio)
            })
        } else {
            by_confidence
        }
    });

    Ok(schemes)
}

/// Eight lightness variations of `base`: -40 to +40 in steps of 10,
/// skipping 0, each clamped to `[0, 100]`.
pub fn generate_color_variations(base: &str) -> Result<Vec<String>> {
    let hsl = hex_to_hsl(base)?;
    Ok(VARIATION_OFFSETS
        .iter()
        .map(|offset| hsl_to_hex(hsl.h, hsl.s, (hsl.l + offset).clamp(0.0, 100.0)))
        .collect())
}

fn parse_all<I, S>(colors: I) -> Result<Vec<Rgb>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    colors
        .into_iter()
        .map(|c| Rgb::from_hex(c.as_ref()))
        .collect()
}

fn is_near(color: Rgb, others: &[Rgb], threshold: f64) -> bool {
    others.iter().any(|o| rgb_distance(color, *o) < threshold)
}

fn select_candidates(candidates: &[Rgb], favorites: &[Rgb], avoid: &[Rgb]) -> Vec<Rgb> {
    let mut filtered: Vec<Rgb> = candidates
        .iter()
        .copied()
        .filter(|c| !is_near(*c, avoid, AVOID_DISTANCE))
        .collect();

    if filtered.is_empty() {
        warn!("every industry candidate is on the avoid list, ignoring avoided colors");
        filtered = candidates.to_vec();
    }

    let preferred: Vec<Rgb> = filtered
        .iter()
        .copied()
        .filter(|c| is_near(*c, favorites, FAVORITE_DISTANCE))
        .collect();

    if preferred.is_empty() {
        filtered
    } else {
        preferred
    }
}

fn build_scheme(
    index: usize,
    primary: Rgb,
    request: &ColorSchemeRequest,
    base: &PersonalityBase,
    favorites: &[Rgb],
) -> Result<GeneratedColorScheme> {
    let (secondary, accent) = harmonize(primary);
    let palette = ColorPalette::from_parts(primary, secondary, accent, base);

    let background = Rgb::from_hex(&palette.background)?;
    let ratio = rgb_contrast(Rgb::from_hex(&palette.text.primary)?, background)
        .min(rgb_contrast(Rgb::from_hex(&palette.text.secondary)?, background));
    let accessibility = AccessibilityReport::from_ratio(ratio);

    let favorite_match = is_near(primary, favorites, FAVORITE_BONUS_DISTANCE);
    let confidence = score(accessibility.level, favorite_match);

    let family = hue_family(primary);
    let mut reasoning = format!(
        "{} roles are well served by {} tones such as {}. The secondary {} sits opposite it on \
         the color wheel and the accent {} completes a triad. Body text reaches {:.1}:1 against \
         the background (WCAG {}).",
        request.industry.label(),
        family,
        palette.primary,
        palette.secondary,
        palette.accent,
        ratio,
        accessibility.level
    );
    if favorite_match {
        reasoning.push_str(" The primary is close to one of your favorite colors.");
    }

    Ok(GeneratedColorScheme {
        name: format!("{} {}", request.industry.label(), VARIANT_NAMES[index]),
        description: format!(
            "A {} palette anchored on a {} primary ({})",
            request.personality, family, palette.primary
        ),
        reasoning,
        palette,
        confidence,
        accessibility,
    })
}

fn score(level: WcagLevel, favorite_match: bool) -> f64 {
    let mut confidence: f64 = 0.7;
    confidence += match level {
        WcagLevel::Aaa => 0.2,
        WcagLevel::Aa => 0.1,
        WcagLevel::Fail => 0.0,
    };
    if favorite_match {
        confidence += 0.1;
    }
    // two decimals keeps 0.7 + 0.2 + 0.1 from landing a hair under 1.0
    (confidence.min(1.0) * 100.0).round() / 100.0
}

fn hue_family(color: Rgb) -> &'static str {
    let hsl = color.to_hsl();
    if hsl.s < 10.0 {
        return "neutral";
    }
    match hsl.h {
        h if h < 15.0 => "red",
        h if h < 45.0 => "orange",
        h if h < 70.0 => "yellow",
        h if h < 160.0 => "green",
        h if h < 200.0 => "teal",
        h if h < 260.0 => "blue",
        h if h < 290.0 => "violet",
        h if h < 340.0 => "magenta",
        _ => "red",
    }
}
