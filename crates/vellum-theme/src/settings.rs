//! YAML theme settings.
//!
//! A settings document says which theme to build and how to adjust it:
//!
//! ```yaml
//! template: classic-elegant   # or `industry:` / `brand:`
//! personality: classic
//! font_pairing: Executive
//! font_scale: large
//! mode: auto
//! name: Jane Doe
//! colors:
//!   primary: "#7c2d12"
//! ```
//!
//! Every key is optional. [`ThemeSettings::build_theme`] picks the
//! construction path with this precedence:
//!
//! 1. `brand`: [`create_from_brand_kit`]
//! 2. `template`: [`create_from_template`]
//! 3. `industry`: [`create_custom_theme`], using `preferences`
//! 4. otherwise the `modern-professional` template
//!
//! `font_pairing`, `font_scale`, `colors` and `name` are then applied on
//! top, whatever the path.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use vellum_color::{ColorPreferences, ColorSchemeRequest, Industry, Personality};

use crate::brand::BrandKit;
use crate::error::{Result, ThemeError};
use crate::font::{create_configuration, get_pairing_by_name, FontPairing, FontScale};
use crate::mode::{resolve_mode, ColorMode, ThemeMode};
use crate::theme::{
    apply_customization, create_custom_theme, create_from_brand_kit, create_from_template,
    FontOverrides, PaletteOverrides, ResumeTheme, ThemeCustomization, CUSTOM_SUFFIX,
    DEFAULT_TEMPLATE,
};

/// Parsed theme settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeSettings {
    pub template: Option<String>,
    pub industry: Option<Industry>,
    pub personality: Personality,
    pub font_pairing: Option<String>,
    pub font_scale: FontScale,
    pub mode: ThemeMode,
    pub name: Option<String>,
    pub brand: Option<BrandKit>,
    pub colors: PaletteOverrides,
    pub preferences: Option<ColorPreferences>,
}

impl ThemeSettings {
    /// Parses settings from YAML. An empty document yields the defaults.
    ///
    /// # Errors
    ///
    /// [`ThemeError::Settings`] if the YAML is malformed or has unknown keys.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::parse(yaml, None)
    }

    /// Reads and parses a settings file. The path is kept in any error.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ThemeError::Settings {
            path: Some(path.to_path_buf()),
            message: format!("failed to read file: {}", e),
        })?;
        Self::parse(&content, Some(path))
    }

    fn parse(yaml: &str, path: Option<&Path>) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| ThemeError::Settings {
            path: path.map(Path::to_path_buf),
            message: e.to_string(),
        })
    }

    /// The configured pairing, if it is cataloged.
    fn pairing(&self) -> Option<&'static FontPairing> {
        let name = self.font_pairing.as_deref()?;
        let pairing = get_pairing_by_name(name);
        if pairing.is_none() {
            warn!(pairing = name, "unknown font pairing in settings, keeping theme fonts");
        }
        pairing
    }

    fn scheme_request(&self, industry: Industry) -> ColorSchemeRequest {
        let request = ColorSchemeRequest::new(industry, self.personality);
        match &self.preferences {
            Some(preferences) => request.with_preferences(preferences.clone()),
            None => request,
        }
    }

    /// Builds the theme these settings describe.
    ///
    /// # Errors
    ///
    /// [`ThemeError::TemplateNotFound`] for an unknown `template`, or a
    /// color error for malformed brand, override or preference colors.
    pub fn build_theme(&self) -> Result<ResumeTheme> {
        let pairing = self.pairing();

        let mut theme = if let Some(kit) = &self.brand {
            create_from_brand_kit(kit, Some(self.personality))?
        } else if let Some(id) = &self.template {
            create_from_template(id, None)?
        } else if let Some(industry) = self.industry {
            create_custom_theme(&self.scheme_request(industry), pairing.map(|p| p.name))?
        } else {
            create_from_template(DEFAULT_TEMPLATE, None)?
        };

        if let Some(pairing) = pairing {
            theme.fonts = create_configuration(pairing, self.font_scale);
        }

        let customization = ThemeCustomization {
            name: self.name.clone(),
            colors: self.colors.clone(),
            fonts: FontOverrides {
                scale: Some(self.font_scale),
                ..Default::default()
            },
        };
        let mut customized = apply_customization(&theme, &customization)?;
        if !self.colors.is_empty() {
            customized.id = format!("{}{}", theme.id, CUSTOM_SUFFIX);
        }

        debug!(id = %customized.id, mode = %self.mode, "built theme from settings");
        Ok(customized)
    }

    /// Resolves `mode` against the system color scheme.
    pub fn effective_mode(&self, system: Option<ColorMode>) -> ColorMode {
        resolve_mode(self.mode, system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_yaml_is_default() {
        let settings = ThemeSettings::from_yaml("  \n").unwrap();
        assert_eq!(settings, ThemeSettings::default());
        assert_eq!(settings.mode, ThemeMode::Auto);
        assert_eq!(settings.font_scale, FontScale::Standard);
    }

    #[test]
    fn test_parse_full_document() {
        let settings = ThemeSettings::from_yaml(
            r##"
template: classic-elegant
industry: legal
personality: classic
font_pairing: Executive
font_scale: large
mode: dark
name: Jane Doe
colors:
  primary: "#7c2d12"
  text_muted: "#57534e"
preferences:
  favorite_colors: ["#1e3a8a"]
  accessibility: true
"##,
        )
        .unwrap();
        assert_eq!(settings.template.as_deref(), Some("classic-elegant"));
        assert_eq!(settings.industry, Some(Industry::Legal));
        assert_eq!(settings.personality, Personality::Classic);
        assert_eq!(settings.font_scale, FontScale::Large);
        assert_eq!(settings.mode, ThemeMode::Dark);
        assert_eq!(settings.colors.text_muted.as_deref(), Some("#57534e"));
        let preferences = settings.preferences.unwrap();
        assert_eq!(preferences.favorite_colors, vec!["#1e3a8a".to_string()]);
        assert!(preferences.accessibility);
    }

    #[test]
    fn test_unknown_key_is_settings_error() {
        let err = ThemeSettings::from_yaml("colour_scheme: blue").unwrap_err();
        assert!(matches!(err, ThemeError::Settings { path: None, .. }));
    }

    #[test]
    fn test_from_file_records_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "mode: [not, a, mode]").unwrap();
        let err = ThemeSettings::from_file(file.path()).unwrap_err();
        match err {
            ThemeError::Settings { path, .. } => assert_eq!(path.as_deref(), Some(file.path())),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_from_file_missing() {
        let err = ThemeSettings::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }

    #[test]
    fn test_build_defaults_to_modern_professional() {
        let theme = ThemeSettings::default().build_theme().unwrap();
        assert_eq!(theme.id, "modern-professional");
    }

    #[test]
    fn test_build_precedence_brand_over_template() {
        let settings = ThemeSettings {
            template: Some("classic-elegant".into()),
            brand: Some(BrandKit::from_primary("#0d9488")),
            ..Default::default()
        };
        let theme = settings.build_theme().unwrap();
        assert_eq!(theme.id, "brand-professional");
    }

    #[test]
    fn test_build_precedence_template_over_industry() {
        let settings = ThemeSettings {
            template: Some("creative-bold".into()),
            industry: Some(Industry::Finance),
            ..Default::default()
        };
        assert_eq!(settings.build_theme().unwrap().id, "creative-bold");
    }

    #[test]
    fn test_build_from_industry() {
        let settings = ThemeSettings {
            industry: Some(Industry::Healthcare),
            personality: Personality::Modern,
            ..Default::default()
        };
        let theme = settings.build_theme().unwrap();
        assert_eq!(theme.id, "custom-healthcare-modern");
        assert_eq!(theme.colors.light.primary, "#0d9488");
    }

    #[test]
    fn test_build_applies_pairing_scale_and_colors() {
        let settings = ThemeSettings {
            template: Some("minimal-clean".into()),
            font_pairing: Some("editorial".into()),
            font_scale: FontScale::Compact,
            colors: PaletteOverrides {
                accent: Some("#DB2777".into()),
                ..Default::default()
            },
            name: Some("Jane Doe".into()),
            ..Default::default()
        };
        let theme = settings.build_theme().unwrap();
        assert_eq!(theme.id, "minimal-clean-custom");
        assert_eq!(theme.name, "Jane Doe");
        assert_eq!(theme.fonts.heading.family, "Lora");
        assert_eq!(theme.fonts.heading.size.h1, "2rem");
        assert_eq!(theme.colors.light.accent, "#db2777");
        assert_eq!(theme.colors.dark.accent, "#db2777");
    }

    #[test]
    fn test_build_ignores_unknown_pairing() {
        let settings = ThemeSettings {
            industry: Some(Industry::Technology),
            font_pairing: Some("Papyrus Party".into()),
            ..Default::default()
        };
        let theme = settings.build_theme().unwrap();
        assert_eq!(theme.fonts.heading.family, "Inter");
    }

    #[test]
    fn test_build_unknown_template() {
        let settings = ThemeSettings {
            template: Some("vaporwave".into()),
            ..Default::default()
        };
        assert!(matches!(
            settings.build_theme(),
            Err(ThemeError::TemplateNotFound(_))
        ));
    }

    #[test]
    fn test_effective_mode() {
        let settings = ThemeSettings::from_yaml("mode: auto").unwrap();
        assert_eq!(settings.effective_mode(Some(ColorMode::Dark)), ColorMode::Dark);
        assert_eq!(settings.effective_mode(None), ColorMode::Light);

        let settings = ThemeSettings::from_yaml("mode: light").unwrap();
        assert_eq!(settings.effective_mode(Some(ColorMode::Dark)), ColorMode::Light);
    }
}
