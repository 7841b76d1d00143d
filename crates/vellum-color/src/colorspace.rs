//! Hex, RGB and HSL conversions for palette derivation.
//!
//! Every color that enters the crate is a CSS hex string. It is parsed once
//! into an [`Rgb`] triplet at the boundary, and all math happens on parsed
//! values, so malformed input is rejected with
//! [`ColorError::InvalidColorFormat`] instead of leaking `NaN` into the
//! results.
//!
//! # Accepted formats
//!
//! | Input       | Meaning                          |
//! |-------------|----------------------------------|
//! | `#rrggbb`   | 6-digit hex, either case         |
//! | `#rgb`      | shorthand, each digit doubled    |
//!
//! Output is always lower-case `#rrggbb`.
//!
//! # Round-trip precision
//!
//! HSL is computed in `f64`, but hex is 8 bits per channel. Converting
//! `hex → HSL → hex` lands within one unit per channel of the input; exact
//! equality is not promised. Colors that survive the trip bit-exactly do so
//! because the rounding happens to line up, not because the conversion is
//! lossless.
//!
//! # Example
//!
//! ```rust
//! use vellum_color::{hex_to_hsl, hsl_to_hex};
//!
//! let hsl = hex_to_hsl("#ff0000").unwrap();
//! assert_eq!(hsl.h, 0.0);
//! assert_eq!(hsl.s, 100.0);
//! assert_eq!(hsl.l, 50.0);
//!
//! assert_eq!(hsl_to_hex(120.0, 100.0, 50.0), "#00ff00");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{ColorError, Result};

// ─── RGB type ───────────────────────────────────────────────────────────────

/// A simple sRGB color triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses a `#rgb` or `#rrggbb` hex code.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || ColorError::InvalidColorFormat(hex.to_string());
        let digits = hex.trim().strip_prefix('#').ok_or_else(invalid)?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            // 3-digit hex: #rgb -> #rrggbb
            3 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&digits[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(Rgb(channel(0)?, channel(1)?, channel(2)?))
            }
            6 => {
                let channel =
                    |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
                Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
            }
            _ => Err(invalid()),
        }
    }

    /// Formats this color as lower-case `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Converts to HSL (hue in degrees, saturation and lightness in percent).
    pub fn to_hsl(self) -> Hsl {
        let r = self.0 as f64 / 255.0;
        let g = self.1 as f64 / 255.0;
        let b = self.2 as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let d = max - min;

        if d == 0.0 {
            return Hsl {
                h: 0.0,
                s: 0.0,
                l: l * 100.0,
            };
        }

        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl {
            h: normalize_hue(h * 60.0),
            s: s * 100.0,
            l: l * 100.0,
        }
    }

    /// Scales every channel by `factor`, clamping to `0..=255`.
    ///
    /// This is a plain per-channel multiply, not a perceptual operation.
    pub fn scale(self, factor: f64) -> Self {
        let apply = |c: u8| (c as f64 * factor).round().clamp(0.0, 255.0) as u8;
        Rgb(apply(self.0), apply(self.1), apply(self.2))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

// ─── HSL type ───────────────────────────────────────────────────────────────

/// An HSL color: `h` in `[0, 360)`, `s` and `l` in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation in percent.
    pub s: f64,
    /// Lightness in percent.
    pub l: f64,
}

impl Hsl {
    /// Converts back to an sRGB triplet.
    ///
    /// Hue wraps around the color wheel; saturation and lightness are
    /// clamped to `[0, 100]` first.
    pub fn to_rgb(self) -> Rgb {
        let h = normalize_hue(self.h);
        let s = self.s.clamp(0.0, 100.0) / 100.0;
        let l = self.l.clamp(0.0, 100.0) / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let hp = h / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb(channel(r), channel(g), channel(b))
    }

    /// Returns the same color with the hue rotated by `degrees`.
    pub fn rotate(self, degrees: f64) -> Self {
        Hsl {
            h: normalize_hue(self.h + degrees),
            ..self
        }
    }
}

/// Wraps a hue into `[0, 360)`.
fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

// ─── String-level helpers ──────────────────────────────────────────────────

/// Returns true if `hex` is a valid `#rgb` or `#rrggbb` color.
pub fn is_valid_hex(hex: &str) -> bool {
    Rgb::from_hex(hex).is_ok()
}

/// Normalizes a hex color to lower-case `#rrggbb`.
pub fn normalize_hex(hex: &str) -> Result<String> {
    Rgb::from_hex(hex).map(Rgb::to_hex)
}

/// Converts a hex color to HSL.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    Rgb::from_hex(hex).map(Rgb::to_hsl)
}

/// Converts HSL components to a `#rrggbb` hex string.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    Hsl { h, s, l }.to_rgb().to_hex()
}

/// Euclidean distance between two colors in raw 0–255 RGB space.
///
/// Not perceptually uniform. It is only used for coarse "same color"
/// filtering against fixed thresholds.
pub fn color_distance(a: &str, b: &str) -> Result<f64> {
    Ok(rgb_distance(Rgb::from_hex(a)?, Rgb::from_hex(b)?))
}

pub(crate) fn rgb_distance(a: Rgb, b: Rgb) -> f64 {
    let dr = a.0 as f64 - b.0 as f64;
    let dg = a.1 as f64 - b.1 as f64;
    let db = a.2 as f64 - b.2 as f64;
    (dr * dr + dg * dg + db * db).sqrt()
}

// ─── Tests ──────────────────────────────────────────────────────────────────
