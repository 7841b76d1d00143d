//! WCAG 2.x relative luminance and contrast classification.
//!
//! The luminance formula linearizes each sRGB channel with the WCAG
//! piecewise function (threshold `0.03928`), then weights the channels by
//! `0.2126 / 0.7152 / 0.0722`. The contrast ratio is
//! `(L_lighter + 0.05) / (L_darker + 0.05)`, which always lies in
//! `[1, 21]` and does not depend on argument order.
//!
//! | Ratio   | Level  |
//! |---------|--------|
//! | ≥ 7.0   | AAA    |
//! | ≥ 4.5   | AA     |
//! | < 4.5   | fail   |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::colorspace::Rgb;
use crate::error::Result;

/// Minimum ratio for WCAG AA body text.
pub const AA_THRESHOLD: f64 = 4.5;

/// Minimum ratio for WCAG AAA body text.
pub const AAA_THRESHOLD: f64 = 7.0;

/// WCAG conformance level for a text/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    /// Below 4.5:1.
    #[serde(rename = "fail")]
    Fail,
    /// At least 4.5:1.
    #[serde(rename = "AA")]
    Aa,
    /// At least 7:1.
    #[serde(rename = "AAA")]
    Aaa,
}

impl WcagLevel {
    /// Classifies a contrast ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= AAA_THRESHOLD {
            WcagLevel::Aaa
        } else if ratio >= AA_THRESHOLD {
            WcagLevel::Aa
        } else {
            WcagLevel::Fail
        }
    }

    /// Returns the level as it is written in the WCAG documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            WcagLevel::Fail => "fail",
            WcagLevel::Aa => "AA",
            WcagLevel::Aaa => "AAA",
        }
    }

    /// True for AA and AAA.
    pub fn passes(&self) -> bool {
        !matches!(self, WcagLevel::Fail)
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contrast ratio together with its WCAG classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityReport {
    /// Ratio in `[1, 21]`.
    pub contrast_ratio: f64,
    /// Level derived from the ratio.
    pub level: WcagLevel,
}

impl AccessibilityReport {
    /// Builds a report from a raw ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            contrast_ratio: ratio,
            level: WcagLevel::from_ratio(ratio),
        }
    }
}

/// WCAG channel linearization.
fn linearize(c: u8) -> f64 {
    let c = c as f64 / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub(crate) fn rgb_luminance(rgb: Rgb) -> f64 {
    0.2126 * linearize(rgb.0) + 0.7152 * linearize(rgb.1) + 0.0722 * linearize(rgb.2)
}

/// [`contrast_ratio`] for already parsed colors.
pub fn rgb_contrast(a: Rgb, b: Rgb) -> f64 {
    let la = rgb_luminance(a);
    let lb = rgb_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Relative luminance of a hex color, in `[0, 1]`.
pub fn relative_luminance(hex: &str) -> Result<f64> {
    Ok(rgb_luminance(Rgb::from_hex(hex)?))
}

/// WCAG contrast ratio between two hex colors.
///
/// ```rust
/// use vellum_color::contrast_ratio;
///
/// let ratio = contrast_ratio("#000000", "#ffffff").unwrap();
/// assert!((ratio - 21.0).abs() < 1e-9);
/// ```
pub fn contrast_ratio(fg: &str, bg: &str) -> Result<f64> {
    Ok(rgb_contrast(Rgb::from_hex(fg)?, Rgb::from_hex(bg)?))
}

/// Classifies a foreground/background pair.
pub fn check_accessibility(fg: &str, bg: &str) -> Result<AccessibilityReport> {
    contrast_ratio(fg, bg).map(AccessibilityReport::from_ratio)
}

/// Picks black or white text, whichever contrasts more with `bg`.
///
/// Ties go to black.
pub fn optimal_text_color(bg: &str) -> Result<&'static str> {
    let bg = Rgb::from_hex(bg)?;
    let on_black = rgb_contrast(Rgb(0, 0, 0), bg);
    let on_white = rgb_contrast(Rgb(255, 255, 255), bg);
    Ok(if on_black >= on_white {
        "#000000"
    } else {
        "#ffffff"
    })
}
