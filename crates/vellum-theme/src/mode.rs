//! Light/dark mode resolution and mode-specific palette adjustment.
//!
//! A [`ThemeMode`] is what the user asked for (`light`, `dark` or `auto`);
//! a [`ColorMode`] is what actually gets rendered. `auto` collapses to the
//! system signal when one is available and to light otherwise.
//!
//! # System detection
//!
//! [`detect_color_mode`] asks the OS through `dark-light`. Override the
//! detector with [`set_mode_detector`] in tests:
//!
//! ```rust
//! use vellum_theme::mode::{detect_color_mode, set_mode_detector, ColorMode};
//!
//! set_mode_detector(|| Some(ColorMode::Dark));
//! assert_eq!(detect_color_mode(), Some(ColorMode::Dark));
//! ```
//!
//! # Color adjustment
//!
//! [`darken_for_dark_mode`] and [`lighten_for_light_mode`] multiply every
//! RGB channel by a fixed factor (0.8 and 1.2). This is a coarse,
//! non-perceptual transform, not a color-space conversion.
//!
//! [`adjust_palette_for_mode`] builds dark palettes from that darkening, with
//! one floor: a brand or semantic color must keep at least 3:1 contrast
//! against the dark background. A color that would fall below the floor is
//! lifted instead, raising its HSL lightness in steps of 5 until it clears
//! 3:1. The theme engine synthesizes every generated dark palette this way.

use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};

use dark_light::{detect as detect_os_mode, Mode as OsMode};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use vellum_color::{rgb_contrast, ColorPalette, Rgb, TextColors};

use crate::error::Result;

/// Channel factor applied by [`darken_for_dark_mode`].
pub const DARKEN_FACTOR: f64 = 0.8;

/// Channel factor applied by [`lighten_for_light_mode`].
pub const LIGHTEN_FACTOR: f64 = 1.2;

/// Contrast a dark-mode brand color keeps against the dark background.
pub const MIN_DARK_CONTRAST: f64 = 3.0;

const LIFT_STEP: f64 = 5.0;

/// The mode a document is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            _ => Err(format!("unknown color mode: {}", s)),
        }
    }
}

/// The user's mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    Auto,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Auto => "auto",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "auto" => Ok(ThemeMode::Auto),
            _ => Err(format!("unknown theme mode: {}", s)),
        }
    }
}

impl From<ColorMode> for ThemeMode {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => ThemeMode::Light,
            ColorMode::Dark => ThemeMode::Dark,
        }
    }
}

// ─── Detection ──────────────────────────────────────────────────────────────

type ModeDetector = fn() -> Option<ColorMode>;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Replaces the function used to read the system color scheme.
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Reads the system color scheme, or `None` if it cannot be determined.
pub fn detect_color_mode() -> Option<ColorMode> {
    let detector = MODE_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

fn os_mode_detector() -> Option<ColorMode> {
    match detect_os_mode() {
        Ok(OsMode::Dark) => Some(ColorMode::Dark),
        Ok(OsMode::Light) => Some(ColorMode::Light),
        _ => None,
    }
}

// ─── Resolution ─────────────────────────────────────────────────────────────

/// Collapses a preference to a concrete mode.
///
/// `Auto` follows `system` and falls back to light when it is `None`.
pub fn resolve_mode(preference: ThemeMode, system: Option<ColorMode>) -> ColorMode {
    match preference {
        ThemeMode::Light => ColorMode::Light,
        ThemeMode::Dark => ColorMode::Dark,
        ThemeMode::Auto => match system {
            Some(mode) => mode,
            None => {
                warn!("system color scheme unavailable, using light mode");
                ColorMode::Light
            }
        },
    }
}

/// A mode preference that can be set and toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemeModeState {
    preference: ThemeMode,
}

impl ThemeModeState {
    pub fn new(preference: ThemeMode) -> Self {
        Self { preference }
    }

    pub fn preference(&self) -> ThemeMode {
        self.preference
    }

    pub fn set(&mut self, preference: ThemeMode) {
        self.preference = preference;
    }

    /// Flips the effective mode and stores it as an explicit preference.
    ///
    /// Toggling from `Auto` flips whatever `system` currently resolves to.
    pub fn toggle(&mut self, system: Option<ColorMode>) -> ColorMode {
        let next = self.effective(system).toggled();
        self.preference = next.into();
        debug!(mode = %next, "toggled theme mode");
        next
    }

    pub fn effective(&self, system: Option<ColorMode>) -> ColorMode {
        resolve_mode(self.preference, system)
    }

    /// [`effective`](Self::effective) against the detected system mode.
    pub fn effective_detected(&self) -> ColorMode {
        match self.preference {
            ThemeMode::Auto => self.effective(detect_color_mode()),
            _ => self.effective(None),
        }
    }
}

// ─── Adjustment ─────────────────────────────────────────────────────────────

/// Scales every channel of `hex` by 0.8.
pub fn darken_for_dark_mode(hex: &str) -> Result<String> {
    Ok(Rgb::from_hex(hex)?.scale(DARKEN_FACTOR).to_hex())
}

/// Scales every channel of `hex` by 1.2, saturating at 255.
pub fn lighten_for_light_mode(hex: &str) -> Result<String> {
    Ok(Rgb::from_hex(hex)?.scale(LIGHTEN_FACTOR).to_hex())
}

const DARK_BACKGROUND: Rgb = Rgb(0x0f, 0x17, 0x2a);
const DARK_SURFACE: &str = "#1e293b";
const DARK_BORDER: &str = "#334155";
const DARK_TEXT: [&str; 3] = ["#f1f5f9", "#cbd5e1", "#94a3b8"];

const LIGHT_BACKGROUND: &str = "#ffffff";
const LIGHT_SURFACE: &str = "#f8fafc";
const LIGHT_BORDER: &str = "#e2e8f0";
const LIGHT_TEXT: [&str; 3] = ["#1e293b", "#475569", "#94a3b8"];

/// Darkens `hex` for a dark background, or lifts it when darkening would
/// leave it under [`MIN_DARK_CONTRAST`].
fn dark_brand_color(hex: &str) -> Result<String> {
    let color = Rgb::from_hex(hex)?;
    let darkened = color.scale(DARKEN_FACTOR);
    if rgb_contrast(darkened, DARK_BACKGROUND) >= MIN_DARK_CONTRAST {
        return Ok(darkened.to_hex());
    }

    let mut hsl = color.to_hsl();
    let mut lifted = color;
    while hsl.l < 100.0 {
        hsl.l = (hsl.l + LIFT_STEP).min(100.0);
        lifted = hsl.to_rgb();
        if rgb_contrast(lifted, DARK_BACKGROUND) >= MIN_DARK_CONTRAST {
            break;
        }
    }
    debug!(color = hex, lifted = %lifted, "lifted brand color for dark mode");
    Ok(lifted.to_hex())
}

fn neutral_text(tones: [&str; 3]) -> TextColors {
    TextColors {
        primary: tones[0].to_string(),
        secondary: tones[1].to_string(),
        muted: tones[2].to_string(),
    }
}

/// Derives a palette for `mode` from `palette`.
///
/// For dark mode the brand and semantic colors are darkened (or lifted, see
/// the module docs) and the background, surface, border and text tones are
/// replaced with slate neutrals. For light mode the brand colors are kept and the neutrals are
/// reset to white and slate.
///
/// # Errors
///
/// Fails if any brand or semantic color in `palette` is not valid hex.
pub fn adjust_palette_for_mode(palette: &ColorPalette, mode: ColorMode) -> Result<ColorPalette> {
    let adjusted = match mode {
        ColorMode::Dark => ColorPalette {
            primary: dark_brand_color(&palette.primary)?,
            secondary: dark_brand_color(&palette.secondary)?,
            accent: dark_brand_color(&palette.accent)?,
            success: dark_brand_color(&palette.success)?,
            warning: dark_brand_color(&palette.warning)?,
            error: dark_brand_color(&palette.error)?,
            background: DARK_BACKGROUND.to_hex(),
            surface: DARK_SURFACE.to_string(),
            border: DARK_BORDER.to_string(),
            text: neutral_text(DARK_TEXT),
        },
        ColorMode::Light => ColorPalette {
            background: LIGHT_BACKGROUND.to_string(),
            surface: LIGHT_SURFACE.to_string(),
            border: LIGHT_BORDER.to_string(),
            text: neutral_text(LIGHT_TEXT),
            ..palette.clone()
        },
    };
    Ok(adjusted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use vellum_color::{check_accessibility, contrast_ratio, WcagLevel};

    fn sample_palette() -> ColorPalette {
        ColorPalette {
            primary: "#2563eb".into(),
            secondary: "#64748b".into(),
            accent: "#0ea5e9".into(),
            background: "#ffffff".into(),
            surface: "#f8fafc".into(),
            border: "#e2e8f0".into(),
            success: "#10b981".into(),
            warning: "#f59e0b".into(),
            error: "#ef4444".into(),
            text: TextColors {
                primary: "#1e293b".into(),
                secondary: "#475569".into(),
                muted: "#94a3b8".into(),
            },
        }
    }

    // =====================================================================
    // Resolution
    // =====================================================================

    #[test]
    fn test_resolve_explicit_modes_ignore_system() {
        assert_eq!(resolve_mode(ThemeMode::Light, Some(ColorMode::Dark)), ColorMode::Light);
        assert_eq!(resolve_mode(ThemeMode::Dark, Some(ColorMode::Light)), ColorMode::Dark);
    }

    #[test]
    fn test_resolve_auto() {
        assert_eq!(resolve_mode(ThemeMode::Auto, Some(ColorMode::Dark)), ColorMode::Dark);
        assert_eq!(resolve_mode(ThemeMode::Auto, None), ColorMode::Light);
    }

    #[test]
    fn test_toggle_from_auto_flips_system() {
        let mut state = ThemeModeState::default();
        assert_eq!(state.preference(), ThemeMode::Auto);
        assert_eq!(state.toggle(Some(ColorMode::Dark)), ColorMode::Light);
        assert_eq!(state.preference(), ThemeMode::Light);
        assert_eq!(state.toggle(None), ColorMode::Dark);
        assert_eq!(state.effective(Some(ColorMode::Light)), ColorMode::Dark);
    }

    #[test]
    fn test_set_overrides_preference() {
        let mut state = ThemeModeState::new(ThemeMode::Dark);
        state.set(ThemeMode::Auto);
        assert_eq!(state.effective(Some(ColorMode::Light)), ColorMode::Light);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("DARK".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!("auto".parse::<ThemeMode>().unwrap(), ThemeMode::Auto);
        assert!("dim".parse::<ThemeMode>().is_err());
        assert_eq!("light".parse::<ColorMode>().unwrap(), ColorMode::Light);
        assert!("auto".parse::<ColorMode>().is_err());
    }

    // =====================================================================
    // Detection (global detector, run serially)
    // =====================================================================

    #[test]
    #[serial]
    fn test_detect_color_mode_uses_override() {
        set_mode_detector(|| Some(ColorMode::Dark));
        assert_eq!(detect_color_mode(), Some(ColorMode::Dark));

        set_mode_detector(|| None);
        assert_eq!(detect_color_mode(), None);

        set_mode_detector(|| Some(ColorMode::Light));
    }

    #[test]
    #[serial]
    fn test_effective_detected_only_consults_detector_for_auto() {
        set_mode_detector(|| Some(ColorMode::Dark));
        assert_eq!(ThemeModeState::new(ThemeMode::Auto).effective_detected(), ColorMode::Dark);
        assert_eq!(ThemeModeState::new(ThemeMode::Light).effective_detected(), ColorMode::Light);

        set_mode_detector(|| Some(ColorMode::Light));
    }

    // =====================================================================
    // Adjustment
    // =====================================================================

    #[test]
    fn test_darken_scales_channels() {
        assert_eq!(darken_for_dark_mode("#ffffff").unwrap(), "#cccccc");
        assert_eq!(darken_for_dark_mode("#000000").unwrap(), "#000000");
        // 0x25 * 0.8 = 29.6, 0x63 * 0.8 = 79.2, 0xeb * 0.8 = 188
        assert_eq!(darken_for_dark_mode("#2563eb").unwrap(), "#1e4fbc");
    }

    #[test]
    fn test_lighten_saturates() {
        assert_eq!(lighten_for_light_mode("#ffffff").unwrap(), "#ffffff");
        assert_eq!(lighten_for_light_mode("#646464").unwrap(), "#787878");
    }

    #[test]
    fn test_adjust_rejects_invalid_hex() {
        assert!(darken_for_dark_mode("#ggg").is_err());
        let mut palette = sample_palette();
        palette.accent = "teal".into();
        assert!(adjust_palette_for_mode(&palette, ColorMode::Dark).is_err());
    }

    #[test]
    fn test_adjust_palette_for_dark() {
        let palette = sample_palette();
        let dark = adjust_palette_for_mode(&palette, ColorMode::Dark).unwrap();
        // #0ea5e9 and #10b981 still clear 3:1 after the plain channel scale
        assert_eq!(dark.accent, darken_for_dark_mode(&palette.accent).unwrap());
        assert_eq!(dark.success, darken_for_dark_mode(&palette.success).unwrap());
        assert_eq!(dark.background, "#0f172a");
        assert_eq!(dark.text.primary, "#f1f5f9");
        assert!(dark.invalid_entries().is_empty());

        for text in [&dark.text.primary, &dark.text.secondary] {
            let report = check_accessibility(text, &dark.background).unwrap();
            assert_eq!(report.level, WcagLevel::Aaa);
        }
    }

    #[test]
    fn test_dark_brand_colors_keep_non_text_contrast() {
        let mut palette = sample_palette();
        palette.primary = "#1e3a8a".into();
        palette.secondary = "#000000".into();
        let dark = adjust_palette_for_mode(&palette, ColorMode::Dark).unwrap();

        // plain darkening would leave navy at about 1.4:1 on slate
        let darkened = darken_for_dark_mode("#1e3a8a").unwrap();
        assert!(contrast_ratio(&darkened, &dark.background).unwrap() < MIN_DARK_CONTRAST);
        assert_ne!(dark.primary, darkened);

        for (role, hex) in dark.entries().into_iter().take(3) {
            let ratio = contrast_ratio(hex, &dark.background).unwrap();
            assert!(ratio >= MIN_DARK_CONTRAST, "{} {} is {:.2}:1", role, hex, ratio);
        }
        for (role, hex) in dark.entries().into_iter().skip(6).take(3) {
            let ratio = contrast_ratio(hex, &dark.background).unwrap();
            assert!(ratio >= MIN_DARK_CONTRAST, "{} {} is {:.2}:1", role, hex, ratio);
        }

        // lifting keeps the hue
        let before = Rgb::from_hex("#1e3a8a").unwrap().to_hsl();
        let after = Rgb::from_hex(&dark.primary).unwrap().to_hsl();
        assert!((before.h - after.h).abs() < 3.0, "{} -> {}", before.h, after.h);
        assert!(after.l > before.l);
    }

    #[test]
    fn test_adjust_palette_for_light_keeps_brand_colors() {
        let mut palette = sample_palette();
        palette.background = "#000000".into();
        let light = adjust_palette_for_mode(&palette, ColorMode::Light).unwrap();
        assert_eq!(light.primary, "#2563eb");
        assert_eq!(light.background, "#ffffff");
        assert_eq!(light.text.primary, "#1e293b");
    }
}
