//! Industry and personality vocabularies, and the static color tables keyed
//! by them.
//!
//! Both tables are plain `const` data. Nothing writes to them after
//! compilation, so any number of callers can read them concurrently.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// The industries a theme can be tuned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Technology,
    Finance,
    Healthcare,
    Education,
    Creative,
    Marketing,
    Legal,
    Consulting,
    Engineering,
    Sales,
    Nonprofit,
    Hospitality,
    Retail,
    Government,
}

impl Industry {
    /// Every industry, in declaration order.
    pub const ALL: [Industry; 14] = [
        Industry::Technology,
        Industry::Finance,
        Industry::Healthcare,
        Industry::Education,
        Industry::Creative,
        Industry::Marketing,
        Industry::Legal,
        Industry::Consulting,
        Industry::Engineering,
        Industry::Sales,
        Industry::Nonprofit,
        Industry::Hospitality,
        Industry::Retail,
        Industry::Government,
    ];

    /// Returns the lower-case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Technology => "technology",
            Industry::Finance => "finance",
            Industry::Healthcare => "healthcare",
            Industry::Education => "education",
            Industry::Creative => "creative",
            Industry::Marketing => "marketing",
            Industry::Legal => "legal",
            Industry::Consulting => "consulting",
            Industry::Engineering => "engineering",
            Industry::Sales => "sales",
            Industry::Nonprofit => "nonprofit",
            Industry::Hospitality => "hospitality",
            Industry::Retail => "retail",
            Industry::Government => "government",
        }
    }

    /// Returns a capitalized label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Industry::Technology => "Technology",
            Industry::Finance => "Finance",
            Industry::Healthcare => "Healthcare",
            Industry::Education => "Education",
            Industry::Creative => "Creative",
            Industry::Marketing => "Marketing",
            Industry::Legal => "Legal",
            Industry::Consulting => "Consulting",
            Industry::Engineering => "Engineering",
            Industry::Sales => "Sales",
            Industry::Nonprofit => "Nonprofit",
            Industry::Hospitality => "Hospitality",
            Industry::Retail => "Retail",
            Industry::Government => "Government",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Industry {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Industry::ALL
            .into_iter()
            .find(|i| i.as_str() == needle)
            .ok_or_else(|| ColorError::UnknownIndustry(s.to_string()))
    }
}

/// The overall tone a theme should convey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    #[default]
    Professional,
    Creative,
    Modern,
    Classic,
    Bold,
}

impl Personality {
    /// Every personality, in declaration order.
    pub const ALL: [Personality; 5] = [
        Personality::Professional,
        Personality::Creative,
        Personality::Modern,
        Personality::Classic,
        Personality::Bold,
    ];

    /// Returns the lower-case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Personality::Professional => "professional",
            Personality::Creative => "creative",
            Personality::Modern => "modern",
            Personality::Classic => "classic",
            Personality::Bold => "bold",
        }
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Personality {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Personality::ALL
            .into_iter()
            .find(|p| p.as_str() == needle)
            .ok_or_else(|| ColorError::UnknownPersonality(s.to_string()))
    }
}

// ─── Tables ─────────────────────────────────────────────────────────────────

/// Neutral tones a personality contributes to every palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalityBase {
    pub background: &'static str,
    pub surface: &'static str,
    pub border: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
}

/// Candidate primary colors for an industry, best fit first.
pub fn industry_colors(industry: Industry) -> &'static [&'static str; 4] {
    match industry {
        Industry::Technology => &["#2563eb", "#0891b2", "#7c3aed", "#0f766e"],
        Industry::Finance => &["#1e3a8a", "#065f46", "#1f2937", "#0e7490"],
        Industry::Healthcare => &["#0d9488", "#0284c7", "#059669", "#4f46e5"],
        Industry::Education => &["#1d4ed8", "#b45309", "#15803d", "#7e22ce"],
        Industry::Creative => &["#db2777", "#9333ea", "#ea580c", "#0891b2"],
        Industry::Marketing => &["#e11d48", "#f97316", "#8b5cf6", "#0ea5e9"],
        Industry::Legal => &["#1e293b", "#7f1d1d", "#1e3a8a", "#374151"],
        Industry::Consulting => &["#0f172a", "#1d4ed8", "#047857", "#6d28d9"],
        Industry::Engineering => &["#ea580c", "#2563eb", "#475569", "#ca8a04"],
        Industry::Sales => &["#dc2626", "#2563eb", "#16a34a", "#d97706"],
        Industry::Nonprofit => &["#16a34a", "#0369a1", "#c2410c", "#9333ea"],
        Industry::Hospitality => &["#b45309", "#be123c", "#0f766e", "#7c2d12"],
        Industry::Retail => &["#c026d3", "#ea580c", "#0284c7", "#65a30d"],
        Industry::Government => &["#1e3a8a", "#991b1b", "#334155", "#166534"],
    }
}

/// Background, surface, border and text tones for a personality.
pub fn personality_base(personality: Personality) -> PersonalityBase {
    match personality {
        Personality::Professional => PersonalityBase {
            background: "#ffffff",
            surface: "#f8fafc",
            border: "#e2e8f0",
            text_primary: "#1e293b",
            text_secondary: "#475569",
            text_muted: "#94a3b8",
        },
        Personality::Creative => PersonalityBase {
            background: "#fffbf5",
            surface: "#fef3e2",
            border: "#fde2c0",
            text_primary: "#292524",
            text_secondary: "#57534e",
            text_muted: "#a8a29e",
        },
        Personality::Modern => PersonalityBase {
            background: "#ffffff",
            surface: "#f9fafb",
            border: "#e5e7eb",
            text_primary: "#111827",
            text_secondary: "#4b5563",
            text_muted: "#9ca3af",
        },
        Personality::Classic => PersonalityBase {
            background: "#fdfdf8",
            surface: "#f5f5f0",
            border: "#d6d3d1",
            text_primary: "#1c1917",
            text_secondary: "#44403c",
            text_muted: "#78716c",
        },
        Personality::Bold => PersonalityBase {
            background: "#ffffff",
            surface: "#f4f4f5",
            border: "#d4d4d8",
            text_primary: "#09090b",
            text_secondary: "#3f3f46",
            text_muted: "#71717a",
        },
    }
}
