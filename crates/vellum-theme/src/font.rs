//! Curated font pairings and typography configuration.
//!
//! The catalog is a fixed table of heading/body/code font combinations, each
//! tagged with a [`FontCategory`]. It is compiled into the binary and never
//! modified, so lookups hand out `&'static FontPairing` references.
//!
//! ## From pairing to CSS
//!
//! ```rust
//! use vellum_theme::font::{create_configuration, generate_css, get_pairing_by_name, FontScale};
//!
//! let pairing = get_pairing_by_name("modern tech").unwrap();
//! let config = create_configuration(pairing, FontScale::Standard);
//! assert_eq!(config.heading.family, "Inter");
//!
//! let css = generate_css(&config, true);
//! assert!(css.starts_with("@import url('https://fonts.googleapis.com/css2?family=Inter"));
//! ```
//!
//! ## Suggestions
//!
//! [`suggest_pairings`] maps an industry to one or two preferred categories,
//! keeps only pairings from those categories, then moves the requested style
//! to the front. The style reorders; it never filters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::form_urlencoded;
use vellum_color::Industry;

/// Code font used when a pairing does not name one.
pub const DEFAULT_CODE_FONT: &str = "JetBrains Mono";

const DEFAULT_HEADING_WEIGHT: u16 = 600;
const DEFAULT_BODY_WEIGHT: u16 = 400;
const DEFAULT_LINE_HEIGHT: f32 = 1.6;
const MAX_SUGGESTIONS: usize = 5;

const GOOGLE_FONTS_BASE: &str = "https://fonts.googleapis.com/css2";

/// Fonts every platform ships, which never go into a Google Fonts request.
const SYSTEM_FONTS: &[&str] = &[
    "arial",
    "helvetica",
    "georgia",
    "times new roman",
    "courier new",
    "verdana",
    "trebuchet ms",
    "system-ui",
    "-apple-system",
    "ui-monospace",
    "menlo",
    "consolas",
    "serif",
    "sans-serif",
    "monospace",
];

/// Characters a family name may not contain.
pub const FORBIDDEN_FAMILY_CHARS: &[char] = &['<', '>', ';', '{', '}', '\'', '"', '\\'];

const GENERIC_FAMILIES: &[&str] = &[
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "system-ui",
    "ui-monospace",
    "-apple-system",
];

// ─── Categories ─────────────────────────────────────────────────────────────

/// Stylistic family of a pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontCategory {
    Classic,
    Modern,
    Creative,
    Technical,
}

impl FontCategory {
    /// Returns the lower-case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            FontCategory::Classic => "classic",
            FontCategory::Modern => "modern",
            FontCategory::Creative => "creative",
            FontCategory::Technical => "technical",
        }
    }
}

impl fmt::Display for FontCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(FontCategory::Classic),
            "modern" => Ok(FontCategory::Modern),
            "creative" => Ok(FontCategory::Creative),
            "technical" => Ok(FontCategory::Technical),
            _ => Err(format!("unknown font category: {}", s)),
        }
    }
}

// ─── Catalog ────────────────────────────────────────────────────────────────

/// Fallback stacks for each role of a pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontFallbacks {
    pub heading: &'static [&'static str],
    pub body: &'static [&'static str],
    pub code: &'static [&'static str],
}

/// A curated heading/body/code font combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontPairing {
    pub name: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
    pub code: Option<&'static str>,
    pub category: FontCategory,
    pub description: &'static str,
    pub fallbacks: FontFallbacks,
    /// True when every non-system font is served by Google Fonts.
    pub google_fonts: bool,
}

const SERIF: &[&str] = &["Georgia", "Times New Roman", "serif"];
const SANS: &[&str] = &["-apple-system", "Helvetica", "Arial", "sans-serif"];
const MONO: &[&str] = &["Menlo", "Consolas", "monospace"];

const SANS_FALLBACKS: FontFallbacks = FontFallbacks {
    heading: SANS,
    body: SANS,
    code: MONO,
};
const SERIF_FALLBACKS: FontFallbacks = FontFallbacks {
    heading: SERIF,
    body: SANS,
    code: MONO,
};

static FONT_PAIRINGS: [FontPairing; 12] = [
    FontPairing {
        name: "Modern Tech",
        heading: "Inter",
        body: "Inter",
        code: Some("JetBrains Mono"),
        category: FontCategory::Modern,
        description: "Neutral, highly legible sans-serif built for screens",
        fallbacks: SANS_FALLBACKS,
        google_fonts: true,
    },
    FontPairing {
        name: "Classic Serif",
        heading: "Playfair Display",
        body: "Source Sans Pro",
        code: Some("Source Code Pro"),
        category: FontCategory::Classic,
        description: "High-contrast serif headings over a quiet sans body",
        fallbacks: SERIF_FALLBACKS,
        google_fonts: true,
    },
    FontPairing {
        name: "Elegant Professional",
        heading: "Merriweather",
        body: "Open Sans",
        code: None,
        category: FontCategory::Classic,
        description: "Sturdy serif headings with a friendly, readable body",
        fallbacks: SERIF_FALLBACKS,
        google_fonts: true,
    },
    FontPairing {
        name: "Clean Minimal",
        heading: "Montserrat",
        body: "Lato",
        code: None,
        category: FontCategory::Modern,
        description: "Geometric headings and an airy body for uncluttered layouts",
        fallbacks: SANS_FALLBACKS,
        google_fonts: true,
    },
    FontPairing {
        name: "Creative Bold",
        heading: "Poppins",
        body: "Nunito",
        code: None,
        category: FontCategory::Creative,
        description: "Rounded, confident shapes with personality",
        fallbacks: SANS_FALLBACKS,
        google_fonts: true,
    },
    FontPairing {
        name: "Developer Focus",
        heading: "Roboto",
        body: "Roboto",
        code: Some("Fira Code"),
        category: FontCategory::Technical,
        description: "Familiar UI sans with a ligature-rich code face",
        fallbacks: SANS_FALLBACKS,
        google_fonts: true,
    },
    FontPairing {
        name: "Editorial",
        heading: "Lora",
        body: "Roboto",
        code: None,
        category: FontCategory::Classic,
        description: "Calligraphic serif headings over a crisp sans body",
        fallbacks: SERIF_FALLBACKS,
        google_fonts: true,
    },
    FontPairing {
        name: "Startup Fresh",
        heading: "Raleway",
        body: "Open Sans",
        code: None,
        category: FontCategory::Creative,
        description: "Elegant display sans that stays approachable",
        fallbacks: SANS_FALLBACKS,
        google_fonts: true,
    },
    FontPairing {
        name: "Engineering Precision",
        heading: "IBM Plex Sans",
        body: "IBM Plex Sans",
        code: Some("IBM Plex Mono"),
        category: FontCategory::Technical,
        description: "One superfamily for text and code, engineered and exact",
        fallbacks: SANS_FALLBACKS,
        google_fonts: true,
    },
    FontPairing {
        name: "Executive",
        heading: "Libre Baskerville",
        body: "Source Sans Pro",
        code: None,
        category: FontCategory::Classic,
        description: "Traditional book serif for senior, formal documents",
        fallbacks: SERIF_FALLBACKS,
        google_fonts: true,
    },
    FontPairing {
        name: "Designer Portfolio",
        heading: "Space Grotesk",
        body: "DM Sans",
        code: Some("Space Mono"),
        category: FontCategory::Creative,
        description: "Quirky grotesque headings with a clean geometric body",
        fallbacks: SANS_FALLBACKS,
        google_fonts: true,
    },
    FontPairing {
        name: "Timeless Standard",
        heading: "Georgia",
        body: "Arial",
        code: Some("Courier New"),
        category: FontCategory::Classic,
        description: "System fonts only, renders identically everywhere offline",
        fallbacks: SERIF_FALLBACKS,
        google_fonts: false,
    },
];

/// Every cataloged pairing.
pub fn all_pairings() -> &'static [FontPairing] {
    &FONT_PAIRINGS
}

/// Pairings in one category, in catalog order.
pub fn pairings_by_category(category: FontCategory) -> Vec<&'static FontPairing> {
    FONT_PAIRINGS
        .iter()
        .filter(|p| p.category == category)
        .collect()
}

/// Case-insensitive lookup by pairing name.
pub fn get_pairing_by_name(name: &str) -> Option<&'static FontPairing> {
    let name = name.trim();
    FONT_PAIRINGS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Looks up a pairing, falling back to the first catalog entry.
pub(crate) fn pairing_or_default(name: &str) -> &'static FontPairing {
    get_pairing_by_name(name).unwrap_or(&FONT_PAIRINGS[0])
}

/// Preferred categories for an industry, strongest first.
pub fn industry_categories(industry: Industry) -> &'static [FontCategory] {
    use FontCategory::*;
    match industry {
        Industry::Technology => &[Technical, Modern],
        Industry::Finance => &[Classic, Modern],
        Industry::Healthcare => &[Modern, Classic],
        Industry::Education => &[Classic, Modern],
        Industry::Creative => &[Creative, Modern],
        Industry::Marketing => &[Creative, Modern],
        Industry::Legal => &[Classic],
        Industry::Consulting => &[Modern, Classic],
        Industry::Engineering => &[Technical, Modern],
        Industry::Sales => &[Modern, Creative],
        Industry::Nonprofit => &[Modern, Creative],
        Industry::Hospitality => &[Creative, Classic],
        Industry::Retail => &[Modern, Creative],
        Industry::Government => &[Classic],
    }
}

/// Up to five pairings suited to `industry`, with `style` pairings first.
pub fn suggest_pairings(industry: Industry, style: FontCategory) -> Vec<&'static FontPairing> {
    let categories = industry_categories(industry);
    let mut matches: Vec<&'static FontPairing> = FONT_PAIRINGS
        .iter()
        .filter(|p| categories.contains(&p.category))
        .collect();

    // stable: catalog order is kept inside each group
    matches.sort_by_key(|p| p.category != style);
    matches.truncate(MAX_SUGGESTIONS);

    debug!(
        industry = %industry,
        style = %style,
        suggestions = matches.len(),
        "suggested font pairings"
    );
    matches
}

// ─── Configuration ──────────────────────────────────────────────────────────

/// Type scale preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontScale {
    Compact,
    #[default]
    Standard,
    Large,
}

struct ScaleSizes {
    h1: &'static str,
    h2: &'static str,
    h3: &'static str,
    body: &'static str,
    code: &'static str,
}

impl FontScale {
    fn sizes(self) -> ScaleSizes {
        match self {
            FontScale::Compact => ScaleSizes {
                h1: "2rem",
                h2: "1.5rem",
                h3: "1.125rem",
                body: "0.875rem",
                code: "0.8rem",
            },
            FontScale::Standard => ScaleSizes {
                h1: "2.5rem",
                h2: "1.75rem",
                h3: "1.25rem",
                body: "1rem",
                code: "0.875rem",
            },
            FontScale::Large => ScaleSizes {
                h1: "3rem",
                h2: "2rem",
                h3: "1.5rem",
                body: "1.125rem",
                code: "1rem",
            },
        }
    }
}

/// Heading sizes, one token per level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingSizes {
    pub h1: String,
    pub h2: String,
    pub h3: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingFont {
    pub family: String,
    pub weight: u16,
    pub size: HeadingSizes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyFont {
    pub family: String,
    pub weight: u16,
    pub size: String,
    pub line_height: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeFont {
    pub family: String,
    pub size: String,
}

/// Fully resolved typography for a theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontConfiguration {
    pub heading: HeadingFont,
    pub body: BodyFont,
    pub code: CodeFont,
}

impl FontConfiguration {
    /// Returns a copy with every size token taken from `scale`.
    ///
    /// Families, weights and line height are kept.
    pub fn with_scale(mut self, scale: FontScale) -> Self {
        let sizes = scale.sizes();
        self.heading.size = HeadingSizes {
            h1: sizes.h1.to_string(),
            h2: sizes.h2.to_string(),
            h3: sizes.h3.to_string(),
        };
        self.body.size = sizes.body.to_string();
        self.code.size = sizes.code.to_string();
        self
    }

    /// Heading, body and code families, deduplicated in that order.
    pub fn families(&self) -> Vec<&str> {
        let mut families: Vec<&str> = Vec::with_capacity(3);
        for family in [
            self.heading.family.as_str(),
            self.body.family.as_str(),
            self.code.family.as_str(),
        ] {
            if !families.iter().any(|f| f.eq_ignore_ascii_case(family)) {
                families.push(family);
            }
        }
        families
    }
}

fn heading_weight(family: &str) -> u16 {
    match family {
        "Playfair Display" | "Merriweather" | "Libre Baskerville" | "Lora" | "Space Grotesk"
        | "Georgia" => 700,
        "Roboto" => 500,
        _ => DEFAULT_HEADING_WEIGHT,
    }
}

fn body_line_height(family: &str) -> f32 {
    match family {
        "Playfair Display" | "Merriweather" | "Libre Baskerville" | "Lora" => 1.7,
        "Nunito" => 1.65,
        "Roboto" | "IBM Plex Sans" => 1.5,
        _ => DEFAULT_LINE_HEIGHT,
    }
}

/// Expands a pairing into a full configuration at the given scale.
///
/// Heading weight depends on the heading font (default 600) and line height
/// on the body font (default 1.6). Body weight is always 400.
pub fn create_configuration(pairing: &FontPairing, scale: FontScale) -> FontConfiguration {
    let sizes = scale.sizes();

    FontConfiguration {
        heading: HeadingFont {
            family: pairing.heading.to_string(),
            weight: heading_weight(pairing.heading),
            size: HeadingSizes {
                h1: sizes.h1.to_string(),
                h2: sizes.h2.to_string(),
                h3: sizes.h3.to_string(),
            },
        },
        body: BodyFont {
            family: pairing.body.to_string(),
            weight: DEFAULT_BODY_WEIGHT,
            size: sizes.body.to_string(),
            line_height: body_line_height(pairing.body),
        },
        code: CodeFont {
            family: pairing.code.unwrap_or(DEFAULT_CODE_FONT).to_string(),
            size: sizes.code.to_string(),
        },
    }
}

// ─── CSS ────────────────────────────────────────────────────────────────────

/// True for fonts that ship with operating systems or are CSS generics.
pub fn is_system_font(family: &str) -> bool {
    let family = family.trim().to_ascii_lowercase();
    SYSTEM_FONTS.contains(&family.as_str())
}

fn google_font_weights(family: &str) -> &'static [u16] {
    match family {
        "Inter" | "Poppins" | "Montserrat" | "Raleway" | "IBM Plex Sans" | "Space Grotesk" => {
            &[400, 500, 600, 700]
        }
        "Roboto" | "Open Sans" | "Lato" | "Source Sans Pro" | "Nunito" | "DM Sans" => {
            &[300, 400, 500, 700]
        }
        "JetBrains Mono" | "Fira Code" | "Source Code Pro" | "IBM Plex Mono" | "Space Mono" => {
            &[400, 500]
        }
        _ => &[400, 700],
    }
}

/// Builds a Google Fonts CSS2 URL for the non-system fonts in `config`.
///
/// Returns `None` when every family is a system font.
pub fn google_fonts_url(config: &FontConfiguration) -> Option<String> {
    let families: Vec<String> = config
        .families()
        .into_iter()
        .filter(|f| !f.trim().is_empty() && !is_system_font(f))
        .map(|family| {
            let weights: Vec<String> = google_font_weights(family)
                .iter()
                .map(|w| w.to_string())
                .collect();
            let name: String = form_urlencoded::byte_serialize(family.trim().as_bytes()).collect();
            format!("family={}:wght@{}", name, weights.join(";"))
        })
        .collect();

    if families.is_empty() {
        return None;
    }

    Some(format!(
        "{}?{}&display=swap",
        GOOGLE_FONTS_BASE,
        families.join("&")
    ))
}

/// True if `family` has none of [`FORBIDDEN_FAMILY_CHARS`].
pub fn is_safe_family(family: &str) -> bool {
    !family.contains(FORBIDDEN_FAMILY_CHARS)
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Renders one entry of a `font-family` list.
///
/// Single-word names stay bare. Anything else is quoted, with every ASCII
/// character other than letters, digits, space, `-` and `_` written as a CSS
/// hex escape, so a name can neither end its string nor close a `<style>`
/// element.
fn quote_family(family: &str) -> String {
    let bare = family.chars().all(is_ident_char) && !family.starts_with(char::is_numeric);
    if GENERIC_FAMILIES.contains(&family) || bare {
        return family.to_string();
    }

    let mut quoted = String::with_capacity(family.len() + 2);
    quoted.push('\'');
    for c in family.chars() {
        if is_ident_char(c) || c == ' ' || !c.is_ascii() {
            quoted.push(c);
        } else {
            quoted.push_str(&format!("\\{:x} ", c as u32));
        }
    }
    quoted.push('\'');
    quoted
}

/// CSS `font-family` value for `family` followed by its fallbacks.
///
/// Fallbacks come from the catalog pairing that uses the family; unknown
/// families get a generic serif, sans-serif or monospace stack.
pub fn font_stack(family: &str) -> String {
    let family = family.trim();
    let fallbacks = FONT_PAIRINGS.iter().find_map(|p| {
        if p.heading == family {
            Some(p.fallbacks.heading)
        } else if p.body == family {
            Some(p.fallbacks.body)
        } else if p.code == Some(family) {
            Some(p.fallbacks.code)
        } else {
            None
        }
    });

    let fallbacks = fallbacks.unwrap_or_else(|| {
        let lower = family.to_ascii_lowercase();
        if lower.contains("mono") || lower.contains("code") || lower.contains("courier") {
            MONO
        } else if lower.contains("serif") && !lower.contains("sans") {
            SERIF
        } else {
            SANS
        }
    });

    std::iter::once(family)
        .chain(fallbacks.iter().copied().filter(|f| *f != family))
        .map(quote_family)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Custom properties describing `config`, in emission order.
pub(crate) fn custom_properties(config: &FontConfiguration) -> Vec<(&'static str, String)> {
    vec![
        ("font-heading", font_stack(&config.heading.family)),
        ("font-body", font_stack(&config.body.family)),
        ("font-code", font_stack(&config.code.family)),
        ("font-weight-heading", config.heading.weight.to_string()),
        ("font-weight-body", config.body.weight.to_string()),
        ("font-size-h1", config.heading.size.h1.clone()),
        ("font-size-h2", config.heading.size.h2.clone()),
        ("font-size-h3", config.heading.size.h3.clone()),
        ("font-size-body", config.body.size.clone()),
        ("font-size-code", config.code.size.clone()),
        ("line-height-body", config.body.line_height.to_string()),
    ]
}

/// Base typography rules that consume the custom properties.
pub(crate) const TYPOGRAPHY_RULES: &str = "\
h1, h2, h3 {
  font-family: var(--font-heading);
  font-weight: var(--font-weight-heading);
}

h1 { font-size: var(--font-size-h1); }
h2 { font-size: var(--font-size-h2); }
h3 { font-size: var(--font-size-h3); }

code, pre {
  font-family: var(--font-code);
  font-size: var(--font-size-code);
}
";

/// Emits a `:root` block of font custom properties plus base selectors.
///
/// With `include_import`, a Google Fonts `@import` line is prepended when the
/// configuration uses any non-system font.
pub fn generate_css(config: &FontConfiguration, include_import: bool) -> String {
    let mut css = String::with_capacity(1024);

    if include_import {
        if let Some(url) = google_fonts_url(config) {
            css.push_str(&format!("@import url('{}');\n\n", url));
        }
    }

    css.push_str(":root {\n");
    for (name, value) in custom_properties(config) {
        css.push_str(&format!("  --{}: {};\n", name, value));
    }
    css.push_str("}\n\n");

    css.push_str(
        "body {\n  font-family: var(--font-body);\n  font-size: var(--font-size-body);\n  \
         font-weight: var(--font-weight-body);\n  line-height: var(--line-height-body);\n}\n\n",
    );
    css.push_str(TYPOGRAPHY_RULES);
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    // =====================================================================
    // Catalog
    // =====================================================================

    #[test]
    fn test_catalog_has_at_least_ten_pairings() {
        assert!(all_pairings().len() >= 10);
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let mut names: Vec<String> = all_pairings()
            .iter()
            .map(|p| p.name.to_lowercase())
            .collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), all_pairings().len());
    }

    #[test]
    fn test_every_category_is_represented() {
        for category in [
            FontCategory::Classic,
            FontCategory::Modern,
            FontCategory::Creative,
            FontCategory::Technical,
        ] {
            assert!(!pairings_by_category(category).is_empty(), "{}", category);
        }
    }

    #[test]
    fn test_get_pairing_by_name_case_insensitive() {
        let pairing = get_pairing_by_name("modern tech").unwrap();
        assert_eq!(pairing.name, "Modern Tech");
        assert_eq!(get_pairing_by_name("  MODERN TECH ").unwrap().name, "Modern Tech");
    }

    #[test]
    fn test_get_pairing_by_name_unknown() {
        assert!(get_pairing_by_name("Comic Sans Extravaganza").is_none());
    }

    #[test]
    fn test_pairings_by_category_filters() {
        let technical = pairings_by_category(FontCategory::Technical);
        assert!(technical
            .iter()
            .all(|p| p.category == FontCategory::Technical));
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("Technical".parse::<FontCategory>().unwrap(), FontCategory::Technical);
        assert!("gothic".parse::<FontCategory>().is_err());
    }

    // =====================================================================
    // Suggestions
    // =====================================================================

    #[test]
    fn test_suggest_technology_modern() {
        let suggestions = suggest_pairings(Industry::Technology, FontCategory::Modern);
        assert!(!suggestions.is_empty());
        assert!(suggestions.len() <= 5);
        assert!(suggestions.iter().all(|p| matches!(
            p.category,
            FontCategory::Modern | FontCategory::Technical
        )));
        // requested style moves to the front
        assert_eq!(suggestions[0].category, FontCategory::Modern);
    }

    #[test]
    fn test_suggest_style_reorders_not_filters() {
        let suggestions = suggest_pairings(Industry::Creative, FontCategory::Modern);
        let categories: Vec<FontCategory> = suggestions.iter().map(|p| p.category).collect();
        let first_creative = categories
            .iter()
            .position(|c| *c == FontCategory::Creative)
            .unwrap();
        assert!(categories[..first_creative]
            .iter()
            .all(|c| *c == FontCategory::Modern));
    }

    #[test]
    fn test_suggest_style_outside_industry_keeps_catalog_order() {
        let suggestions = suggest_pairings(Industry::Legal, FontCategory::Technical);
        assert!(suggestions
            .iter()
            .all(|p| p.category == FontCategory::Classic));
        assert_eq!(suggestions[0].name, "Classic Serif");
        assert_eq!(suggestions.len(), 5);
    }

    // =====================================================================
    // Configuration
    // =====================================================================

    #[test]
    fn test_create_configuration_defaults() {
        let pairing = get_pairing_by_name("Modern Tech").unwrap();
        let config = create_configuration(pairing, FontScale::Standard);
        assert_eq!(config.heading.family, "Inter");
        assert_eq!(config.heading.weight, 600);
        assert_eq!(config.body.weight, 400);
        assert_eq!(config.body.line_height, 1.6);
        assert_eq!(config.code.family, "JetBrains Mono");
        assert_eq!(config.heading.size.h1, "2.5rem");
        assert_eq!(config.body.size, "1rem");
    }

    #[test]
    fn test_create_configuration_uses_family_defaults() {
        let pairing = get_pairing_by_name("Classic Serif").unwrap();
        let config = create_configuration(pairing, FontScale::Compact);
        assert_eq!(config.heading.weight, 700);
        assert_eq!(config.heading.size.h1, "2rem");
        assert_eq!(config.code.family, "Source Code Pro");
    }

    #[test]
    fn test_create_configuration_default_code_font() {
        let pairing = get_pairing_by_name("Creative Bold").unwrap();
        let config = create_configuration(pairing, FontScale::Large);
        assert_eq!(config.code.family, DEFAULT_CODE_FONT);
        assert_eq!(config.body.line_height, 1.65);
        assert_eq!(config.code.size, "1rem");
    }

    #[test]
    fn test_with_scale_keeps_families() {
        let pairing = get_pairing_by_name("Editorial").unwrap();
        let config =
            create_configuration(pairing, FontScale::Standard).with_scale(FontScale::Large);
        assert_eq!(config.heading.family, "Lora");
        assert_eq!(config.heading.size.h1, "3rem");
        assert_eq!(config.body.size, "1.125rem");
    }

    #[test]
    fn test_families_deduplicates() {
        let pairing = get_pairing_by_name("Modern Tech").unwrap();
        let config = create_configuration(pairing, FontScale::Standard);
        assert_eq!(config.families(), vec!["Inter", "JetBrains Mono"]);
    }

    #[test]
    fn test_configuration_serde_uses_camel_case() {
        let pairing = get_pairing_by_name("Modern Tech").unwrap();
        let config = create_configuration(pairing, FontScale::Standard);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["body"]["lineHeight"], serde_json::json!(1.6f32));
        assert_eq!(json["heading"]["size"]["h2"], "1.75rem");
    }

    // =====================================================================
    // CSS
    // =====================================================================

    #[test]
    fn test_google_fonts_url() {
        let pairing = get_pairing_by_name("Classic Serif").unwrap();
        let config = create_configuration(pairing, FontScale::Standard);
        let url = google_fonts_url(&config).unwrap();
        assert_eq!(
            url,
            "https://fonts.googleapis.com/css2?family=Playfair+Display:wght@400;700\
             &family=Source+Sans+Pro:wght@300;400;500;700\
             &family=Source+Code+Pro:wght@400;500&display=swap"
        );
    }

    #[test]
    fn test_google_fonts_url_skips_system_fonts() {
        let pairing = get_pairing_by_name("Timeless Standard").unwrap();
        let config = create_configuration(pairing, FontScale::Standard);
        assert!(google_fonts_url(&config).is_none());

        let mut mixed = config.clone();
        mixed.heading.family = "Lora".to_string();
        let url = google_fonts_url(&mixed).unwrap();
        assert!(url.contains("family=Lora"));
        assert!(!url.contains("Arial"));
        assert!(!url.contains("Courier"));
    }

    #[test]
    fn test_google_fonts_url_encodes_family_names() {
        let pairing = get_pairing_by_name("Modern Tech").unwrap();
        let mut config = create_configuration(pairing, FontScale::Standard);
        config.heading.family = "Acme & Co's Sans".to_string();
        config.body.family = "Evil</style>".to_string();

        let url = google_fonts_url(&config).unwrap();
        assert!(url.contains("family=Acme+%26+Co%27s+Sans:wght@400;700&"));
        assert!(url.contains("family=Evil%3C%2Fstyle%3E:wght@400;700&"));
        assert!(!url.contains('\''));
        assert!(!url.contains('<'));
        assert_eq!(url.matches("family=").count(), 3);
    }

    #[test]
    fn test_is_system_font() {
        assert!(is_system_font("Georgia"));
        assert!(is_system_font("times new roman"));
        assert!(!is_system_font("Inter"));
    }

    #[test]
    fn test_font_stack_quotes_multi_word_names() {
        assert_eq!(
            font_stack("Playfair Display"),
            "'Playfair Display', Georgia, 'Times New Roman', serif"
        );
        assert_eq!(
            font_stack("Inter"),
            "Inter, -apple-system, Helvetica, Arial, sans-serif"
        );
    }

    #[test]
    fn test_font_stack_unknown_family() {
        assert_eq!(font_stack("Hack Mono"), "'Hack Mono', Menlo, Consolas, monospace");
        assert_eq!(
            font_stack("Comfortaa"),
            "Comfortaa, -apple-system, Helvetica, Arial, sans-serif"
        );
    }

    #[test]
    fn test_font_stack_escapes_quotes_and_markup() {
        assert_eq!(
            font_stack("Acme & Co's Sans"),
            "'Acme \\26  Co\\27 s Sans', -apple-system, Helvetica, Arial, sans-serif"
        );

        let stack = font_stack("Evil</style><script>alert(1)</script>");
        assert!(stack.starts_with("'Evil\\3c \\2f style\\3e "));
        assert!(!stack.contains('<'));
        assert!(!stack.contains("</"));
        assert_eq!(stack.matches('\'').count(), 2);
    }

    #[test]
    fn test_font_stack_quotes_leading_digit() {
        assert!(font_stack("3Dumb").starts_with("'3Dumb', "));
    }

    #[test]
    fn test_is_safe_family() {
        assert!(is_safe_family("IBM Plex Sans"));
        assert!(is_safe_family("Noto Sans JP"));
        for bad in ["Co's", "a<b", "x;y", "{x}", "say \"hi\"", "back\\slash"] {
            assert!(!is_safe_family(bad), "{}", bad);
        }
    }

    #[test]
    fn test_font_stack_does_not_repeat_family() {
        assert_eq!(font_stack("Georgia"), "Georgia, 'Times New Roman', serif");
    }

    #[test]
    fn test_generate_css_with_import() {
        let pairing = get_pairing_by_name("Modern Tech").unwrap();
        let config = create_configuration(pairing, FontScale::Standard);
        let css = generate_css(&config, true);
        assert!(css.starts_with("@import url('https://fonts.googleapis.com/css2?"));
        assert!(css.contains(":root {"));
        assert!(css.contains("  --font-heading: Inter, -apple-system"));
        assert!(css.contains("  --font-size-h1: 2.5rem;"));
        assert!(css.contains("  --line-height-body: 1.6;"));
        assert!(css.contains("h1 { font-size: var(--font-size-h1); }"));
    }

    #[test]
    fn test_generate_css_without_import() {
        let pairing = get_pairing_by_name("Modern Tech").unwrap();
        let config = create_configuration(pairing, FontScale::Standard);
        let css = generate_css(&config, false);
        assert!(css.starts_with(":root {"));
        assert!(!css.contains("@import"));
    }
}
