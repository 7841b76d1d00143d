//! Predefined themes.
//!
//! The registry is built on first access and never written afterwards.

use once_cell::sync::Lazy;
use vellum_color::{ColorPalette, Industry, TextColors, ERROR_COLOR, SUCCESS_COLOR, WARNING_COLOR};

use super::theme::{
    BorderRadius, HeaderAlignment, Layout, ResumeTheme, Shadows, Spacing, ThemeColors,
};
use crate::font::{create_configuration, pairing_or_default, FontScale};

/// Id of the template used when nothing else is requested.
pub const DEFAULT_TEMPLATE: &str = "modern-professional";

const DARK_SUCCESS: &str = "#34d399";
const DARK_WARNING: &str = "#fbbf24";
const DARK_ERROR: &str = "#f87171";

/// `[primary, secondary, accent, background, surface, border, text, text-secondary, text-muted]`
type Tones = [&'static str; 9];

fn palette(tones: Tones, semantic: [&str; 3]) -> ColorPalette {
    ColorPalette {
        primary: tones[0].into(),
        secondary: tones[1].into(),
        accent: tones[2].into(),
        background: tones[3].into(),
        surface: tones[4].into(),
        border: tones[5].into(),
        success: semantic[0].into(),
        warning: semantic[1].into(),
        error: semantic[2].into(),
        text: TextColors {
            primary: tones[6].into(),
            secondary: tones[7].into(),
            muted: tones[8].into(),
        },
    }
}

struct TemplateDef {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    industry: Option<Industry>,
    light: Tones,
    dark: Tones,
    pairing: &'static str,
    layout: Layout,
    border_radius: BorderRadius,
}

impl TemplateDef {
    fn build(self) -> ResumeTheme {
        ResumeTheme {
            id: self.id.into(),
            name: self.name.into(),
            description: self.description.into(),
            industry: self.industry,
            colors: ThemeColors {
                light: palette(self.light, [SUCCESS_COLOR, WARNING_COLOR, ERROR_COLOR]),
                dark: palette(self.dark, [DARK_SUCCESS, DARK_WARNING, DARK_ERROR]),
            },
            fonts: create_configuration(pairing_or_default(self.pairing), FontScale::Standard),
            spacing: Spacing::default(),
            border_radius: self.border_radius,
            shadows: Shadows::default(),
            layout: self.layout,
        }
    }
}

static TEMPLATES: Lazy<Vec<ResumeTheme>> = Lazy::new(|| {
    vec![
        TemplateDef {
            id: "modern-professional",
            name: "Modern Professional",
            description: "Clean blue accents on white, suited to technology and business roles",
            industry: Some(Industry::Technology),
            light: [
                "#2563eb", "#64748b", "#0ea5e9", "#ffffff", "#f8fafc", "#e2e8f0", "#1e293b",
                "#475569", "#94a3b8",
            ],
            dark: [
                "#3b82f6", "#94a3b8", "#38bdf8", "#0f172a", "#1e293b", "#334155", "#f1f5f9",
                "#cbd5e1", "#64748b",
            ],
            pairing: "Modern Tech",
            layout: Layout::default(),
            border_radius: BorderRadius::default(),
        }
        .build(),
        TemplateDef {
            id: "classic-elegant",
            name: "Classic Elegant",
            description: "Navy and rust on warm paper with serif headings",
            industry: Some(Industry::Legal),
            light: [
                "#1e3a8a", "#7c2d12", "#b45309", "#fdfdf8", "#f5f5f0", "#d6d3d1", "#1c1917",
                "#44403c", "#78716c",
            ],
            dark: [
                "#93c5fd", "#fdba74", "#fbbf24", "#1c1917", "#292524", "#44403c", "#fafaf9",
                "#d6d3d1", "#a8a29e",
            ],
            pairing: "Classic Serif",
            layout: Layout {
                header_alignment: HeaderAlignment::Center,
                max_width: "800px".into(),
                ..Layout::default()
            },
            border_radius: BorderRadius {
                sm: "0".into(),
                md: "0.125rem".into(),
                lg: "0.25rem".into(),
            },
        }
        .build(),
        TemplateDef {
            id: "creative-bold",
            name: "Creative Bold",
            description: "Saturated pink and violet for design and marketing portfolios",
            industry: Some(Industry::Creative),
            light: [
                "#db2777", "#7c3aed", "#f59e0b", "#fffbf5", "#fef3e2", "#fde2c0", "#292524",
                "#57534e", "#a8a29e",
            ],
            dark: [
                "#f472b6", "#a78bfa", "#fbbf24", "#18181b", "#27272a", "#3f3f46", "#fafafa",
                "#d4d4d8", "#a1a1aa",
            ],
            pairing: "Creative Bold",
            layout: Layout {
                columns: 2,
                ..Layout::default()
            },
            border_radius: BorderRadius {
                sm: "0.375rem".into(),
                md: "0.75rem".into(),
                lg: "1rem".into(),
            },
        }
        .build(),
        TemplateDef {
            id: "minimal-clean",
            name: "Minimal Clean",
            description: "Near-monochrome layout with a single green accent",
            industry: None,
            light: [
                "#111827", "#6b7280", "#059669", "#ffffff", "#fafafa", "#e5e7eb", "#111827",
                "#4b5563", "#9ca3af",
            ],
            dark: [
                "#f9fafb", "#9ca3af", "#34d399", "#030712", "#111827", "#1f2937", "#f9fafb",
                "#d1d5db", "#6b7280",
            ],
            pairing: "Clean Minimal",
            layout: Layout {
                section_spacing: "2.5rem".into(),
                ..Layout::default()
            },
            border_radius: BorderRadius::default(),
        }
        .build(),
    ]
});

/// Every predefined theme, in registry order.
pub fn list_templates() -> &'static [ResumeTheme] {
    &TEMPLATES
}

/// Looks up a predefined theme by id.
pub fn get_template(id: &str) -> Option<&'static ResumeTheme> {
    TEMPLATES.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::ColorMode;
    use vellum_color::{check_accessibility, WcagLevel};

    #[test]
    fn test_registry_contents() {
        let ids: Vec<&str> = list_templates().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "modern-professional",
                "classic-elegant",
                "creative-bold",
                "minimal-clean",
            ]
        );
        assert!(get_template(DEFAULT_TEMPLATE).is_some());
        assert!(get_template("neon-dreams").is_none());
    }

    #[test]
    fn test_templates_are_complete_and_valid_hex() {
        for template in list_templates() {
            for mode in [ColorMode::Light, ColorMode::Dark] {
                assert!(
                    template.palette(mode).invalid_entries().is_empty(),
                    "{} {}",
                    template.id,
                    mode
                );
            }
            assert!(!template.fonts.heading.family.is_empty());
            assert!(!template.fonts.body.family.is_empty());
        }
    }

    #[test]
    fn test_template_text_reaches_aaa_in_both_modes() {
        for template in list_templates() {
            for mode in [ColorMode::Light, ColorMode::Dark] {
                let palette = template.palette(mode);
                for text in [&palette.text.primary, &palette.text.secondary] {
                    let report = check_accessibility(text, &palette.background).unwrap();
                    assert_eq!(report.level, WcagLevel::Aaa, "{} {} {}", template.id, mode, text);
                }
            }
        }
    }

    #[test]
    fn test_template_fonts_follow_pairing() {
        let classic = get_template("classic-elegant").unwrap();
        assert_eq!(classic.fonts.heading.family, "Playfair Display");
        assert_eq!(classic.layout.header_alignment, HeaderAlignment::Center);
    }
}
