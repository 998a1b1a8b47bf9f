//! Token Document Model — the canonical nested token structure
//!
//! Everything in the compiler operates on [`TokenDocument`]: emitters walk
//! it, the validator checks it, and callers own and mutate it. The compiler
//! itself treats the document as read-only input and holds no state between
//! invocations.
//!
//! Emission order is a first-class artifact: every keyed section has an
//! explicit ordered key constant (`COLOR_STOPS`, `SPACING_KEYS`, ...) that
//! the emitters iterate, so output ordering never depends on map iteration
//! order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

// ── Ordered key tables ─────────────────────────────────────

/// The 11 fixed stops of a color scale; `500` is the canonical base stop.
pub const COLOR_STOPS: [&str; 11] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

pub const FONT_SIZE_KEYS: [&str; 13] = [
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

pub const FONT_WEIGHT_KEYS: [&str; 9] = [
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

pub const LINE_HEIGHT_KEYS: [&str; 6] = ["none", "tight", "snug", "normal", "relaxed", "loose"];

pub const LETTER_SPACING_KEYS: [&str; 6] =
    ["tighter", "tight", "normal", "wide", "wider", "widest"];

pub const SPACING_KEYS: [&str; 35] = [
    "0", "px", "0.5", "1", "1.5", "2", "2.5", "3", "3.5", "4", "5", "6", "7", "8", "9", "10",
    "11", "12", "14", "16", "20", "24", "28", "32", "36", "40", "44", "48", "52", "56", "60",
    "64", "72", "80", "96",
];

pub const RADIUS_KEYS: [&str; 9] = [
    "none", "sm", "base", "md", "lg", "xl", "2xl", "3xl", "full",
];

pub const SHADOW_KEYS: [&str; 8] = ["sm", "base", "md", "lg", "xl", "2xl", "inner", "none"];

pub const Z_INDEX_KEYS: [&str; 7] = ["0", "10", "20", "30", "40", "50", "auto"];

// ── Color scale ────────────────────────────────────────────

/// An 11-stop tonal scale keyed `50`–`950`.
///
/// Stored as a map so documents with missing stops still load; the
/// validator reports incomplete scales, and the emitters render absent
/// stops as empty values rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorScale(pub BTreeMap<String, String>);

impl ColorScale {
    /// Build a scale from stop/value pairs.
    pub fn from_pairs(pairs: [(&str, &str); 11]) -> Self {
        ColorScale(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    pub fn get(&self, stop: &str) -> Option<&str> {
        self.0.get(stop).map(String::as_str)
    }

    pub fn set(&mut self, stop: &str, value: &str) {
        self.0.insert(stop.to_string(), value.to_string());
    }

    pub fn remove(&mut self, stop: &str) -> Option<String> {
        self.0.remove(stop)
    }

    /// Stops from [`COLOR_STOPS`] that are absent from this scale.
    pub fn missing_stops(&self) -> Vec<&'static str> {
        COLOR_STOPS
            .iter()
            .copied()
            .filter(|stop| !self.0.contains_key(*stop))
            .collect()
    }

    /// Iterate the canonical stop order, pairing each stop with its value
    /// (or `None` when the stop is missing).
    pub fn stops(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> + '_ {
        COLOR_STOPS.iter().map(|stop| (*stop, self.get(stop)))
    }
}

// ── Colors ─────────────────────────────────────────────────

/// Brand, gray, and semantic scales plus flat surface/border colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Colors {
    pub primary: ColorScale,
    pub secondary: ColorScale,
    pub accent: ColorScale,
    pub gray: ColorScale,
    pub success: ColorScale,
    pub warning: ColorScale,
    pub error: ColorScale,
    pub info: ColorScale,

    pub background: String,
    pub foreground: String,
    pub card: String,
    pub card_foreground: String,
    pub popover: String,
    pub popover_foreground: String,
    pub muted: String,
    pub muted_foreground: String,
    pub border: String,
    pub input: String,
    pub ring: String,
}

impl Colors {
    /// All eight scales in emission order: brand, gray, semantic.
    pub fn scale_entries(&self) -> [(&'static str, &ColorScale); 8] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("gray", &self.gray),
            ("success", &self.success),
            ("warning", &self.warning),
            ("error", &self.error),
            ("info", &self.info),
        ]
    }

    /// The seven `ColorScale` fields subject to the completeness rule.
    /// The gray scale is a distinct `GrayScale` concept and is not checked.
    pub fn checked_scales(&self) -> [(&'static str, &ColorScale); 7] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("success", &self.success),
            ("warning", &self.warning),
            ("error", &self.error),
            ("info", &self.info),
        ]
    }

    /// Flat surface/border colors in emission order. Keys are the
    /// document's camelCase field names; the CSS emitter kebab-cases them.
    pub fn surface_entries(&self) -> [(&'static str, &str); 11] {
        [
            ("background", self.background.as_str()),
            ("foreground", self.foreground.as_str()),
            ("card", self.card.as_str()),
            ("cardForeground", self.card_foreground.as_str()),
            ("popover", self.popover.as_str()),
            ("popoverForeground", self.popover_foreground.as_str()),
            ("muted", self.muted.as_str()),
            ("mutedForeground", self.muted_foreground.as_str()),
            ("border", self.border.as_str()),
            ("input", self.input.as_str()),
            ("ring", self.ring.as_str()),
        ]
    }
}

// ── Typography ─────────────────────────────────────────────

/// Ordered font fallback chains for the three family slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFamily {
    pub sans: Vec<String>,
    pub serif: Vec<String>,
    pub mono: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: FontFamily,
    pub font_size: BTreeMap<String, String>,
    pub font_weight: BTreeMap<String, String>,
    pub line_height: BTreeMap<String, String>,
    pub letter_spacing: BTreeMap<String, String>,
}

// ── Animation ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durations {
    pub fast: String,
    pub normal: String,
    pub slow: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Easings {
    pub linear: String,
    #[serde(rename = "in")]
    pub ease_in: String,
    #[serde(rename = "out")]
    pub ease_out: String,
    #[serde(rename = "inOut")]
    pub ease_in_out: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animation {
    pub duration: Durations,
    pub easing: Easings,
}

// ── Component tokens ───────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonTokens {
    pub padding_x: String,
    pub padding_y: String,
    pub radius: String,
    pub font_weight: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputTokens {
    pub height: String,
    pub padding_x: String,
    pub radius: String,
    pub border_width: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTokens {
    pub padding: String,
    pub radius: String,
    pub border_width: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalTokens {
    pub max_width: String,
    pub padding: String,
    pub radius: String,
}

/// Per-component defaults layered on top of the base scales,
/// independently overridable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentTokens {
    pub button: ButtonTokens,
    pub input: InputTokens,
    pub card: CardTokens,
    pub modal: ModalTokens,
}

// ── Token document ─────────────────────────────────────────

/// The complete token document — the single input to every compiler
/// operation. Metadata fields are informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDocument {
    pub name: String,
    pub version: String,
    pub created_at: String,
    pub updated_at: String,
    pub colors: Colors,
    pub typography: Typography,
    pub spacing: BTreeMap<String, String>,
    pub border_radius: BTreeMap<String, String>,
    pub box_shadow: BTreeMap<String, String>,
    pub animation: Animation,
    pub z_index: BTreeMap<String, String>,
    pub components: ComponentTokens,
}

impl TokenDocument {
    /// Load a document from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize the document as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn string_map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn families(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

impl Default for TokenDocument {
    /// The default design system the editor starts from.
    fn default() -> Self {
        TokenDocument {
            name: "Default Design System".to_string(),
            version: "1.0.0".to_string(),
            created_at: "2025-01-01T00:00:00Z".to_string(),
            updated_at: "2025-01-01T00:00:00Z".to_string(),
            colors: Colors {
                primary: ColorScale::from_pairs([
                    ("50", "#eff6ff"),
                    ("100", "#dbeafe"),
                    ("200", "#bfdbfe"),
                    ("300", "#93c5fd"),
                    ("400", "#60a5fa"),
                    ("500", "#3b82f6"),
                    ("600", "#2563eb"),
                    ("700", "#1d4ed8"),
                    ("800", "#1e40af"),
                    ("900", "#1e3a8a"),
                    ("950", "#172554"),
                ]),
                secondary: ColorScale::from_pairs([
                    ("50", "#f8fafc"),
                    ("100", "#f1f5f9"),
                    ("200", "#e2e8f0"),
                    ("300", "#cbd5e1"),
                    ("400", "#94a3b8"),
                    ("500", "#64748b"),
                    ("600", "#475569"),
                    ("700", "#334155"),
                    ("800", "#1e293b"),
                    ("900", "#0f172a"),
                    ("950", "#020617"),
                ]),
                accent: ColorScale::from_pairs([
                    ("50", "#f5f3ff"),
                    ("100", "#ede9fe"),
                    ("200", "#ddd6fe"),
                    ("300", "#c4b5fd"),
                    ("400", "#a78bfa"),
                    ("500", "#8b5cf6"),
                    ("600", "#7c3aed"),
                    ("700", "#6d28d9"),
                    ("800", "#5b21b6"),
                    ("900", "#4c1d95"),
                    ("950", "#2e1065"),
                ]),
                gray: ColorScale::from_pairs([
                    ("50", "#f9fafb"),
                    ("100", "#f3f4f6"),
                    ("200", "#e5e7eb"),
                    ("300", "#d1d5db"),
                    ("400", "#9ca3af"),
                    ("500", "#6b7280"),
                    ("600", "#4b5563"),
                    ("700", "#374151"),
                    ("800", "#1f2937"),
                    ("900", "#111827"),
                    ("950", "#030712"),
                ]),
                success: ColorScale::from_pairs([
                    ("50", "#f0fdf4"),
                    ("100", "#dcfce7"),
                    ("200", "#bbf7d0"),
                    ("300", "#86efac"),
                    ("400", "#4ade80"),
                    ("500", "#22c55e"),
                    ("600", "#16a34a"),
                    ("700", "#15803d"),
                    ("800", "#166534"),
                    ("900", "#14532d"),
                    ("950", "#052e16"),
                ]),
                warning: ColorScale::from_pairs([
                    ("50", "#fffbeb"),
                    ("100", "#fef3c7"),
                    ("200", "#fde68a"),
                    ("300", "#fcd34d"),
                    ("400", "#fbbf24"),
                    ("500", "#f59e0b"),
                    ("600", "#d97706"),
                    ("700", "#b45309"),
                    ("800", "#92400e"),
                    ("900", "#78350f"),
                    ("950", "#451a03"),
                ]),
                error: ColorScale::from_pairs([
                    ("50", "#fef2f2"),
                    ("100", "#fee2e2"),
                    ("200", "#fecaca"),
                    ("300", "#fca5a5"),
                    ("400", "#f87171"),
                    ("500", "#ef4444"),
                    ("600", "#dc2626"),
                    ("700", "#b91c1c"),
                    ("800", "#991b1b"),
                    ("900", "#7f1d1d"),
                    ("950", "#450a0a"),
                ]),
                info: ColorScale::from_pairs([
                    ("50", "#f0f9ff"),
                    ("100", "#e0f2fe"),
                    ("200", "#bae6fd"),
                    ("300", "#7dd3fc"),
                    ("400", "#38bdf8"),
                    ("500", "#0ea5e9"),
                    ("600", "#0284c7"),
                    ("700", "#0369a1"),
                    ("800", "#075985"),
                    ("900", "#0c4a6e"),
                    ("950", "#082f49"),
                ]),
                background: "#ffffff".to_string(),
                foreground: "#0f172a".to_string(),
                card: "#ffffff".to_string(),
                card_foreground: "#0f172a".to_string(),
                popover: "#ffffff".to_string(),
                popover_foreground: "#0f172a".to_string(),
                muted: "#f1f5f9".to_string(),
                muted_foreground: "#64748b".to_string(),
                border: "#e2e8f0".to_string(),
                input: "#e2e8f0".to_string(),
                ring: "#3b82f6".to_string(),
            },
            typography: Typography {
                font_family: FontFamily {
                    sans: families(&["Inter", "system-ui", "sans-serif"]),
                    serif: families(&["Georgia", "Cambria", "serif"]),
                    mono: families(&["JetBrains Mono", "Menlo", "monospace"]),
                },
                font_size: string_map(&[
                    ("xs", "0.75rem"),
                    ("sm", "0.875rem"),
                    ("base", "1rem"),
                    ("lg", "1.125rem"),
                    ("xl", "1.25rem"),
                    ("2xl", "1.5rem"),
                    ("3xl", "1.875rem"),
                    ("4xl", "2.25rem"),
                    ("5xl", "3rem"),
                    ("6xl", "3.75rem"),
                    ("7xl", "4.5rem"),
                    ("8xl", "6rem"),
                    ("9xl", "8rem"),
                ]),
                font_weight: string_map(&[
                    ("thin", "100"),
                    ("extralight", "200"),
                    ("light", "300"),
                    ("normal", "400"),
                    ("medium", "500"),
                    ("semibold", "600"),
                    ("bold", "700"),
                    ("extrabold", "800"),
                    ("black", "900"),
                ]),
                line_height: string_map(&[
                    ("none", "1"),
                    ("tight", "1.25"),
                    ("snug", "1.375"),
                    ("normal", "1.5"),
                    ("relaxed", "1.625"),
                    ("loose", "2"),
                ]),
                letter_spacing: string_map(&[
                    ("tighter", "-0.05em"),
                    ("tight", "-0.025em"),
                    ("normal", "0em"),
                    ("wide", "0.025em"),
                    ("wider", "0.05em"),
                    ("widest", "0.1em"),
                ]),
            },
            spacing: string_map(&[
                ("0", "0"),
                ("px", "1px"),
                ("0.5", "0.125rem"),
                ("1", "0.25rem"),
                ("1.5", "0.375rem"),
                ("2", "0.5rem"),
                ("2.5", "0.625rem"),
                ("3", "0.75rem"),
                ("3.5", "0.875rem"),
                ("4", "1rem"),
                ("5", "1.25rem"),
                ("6", "1.5rem"),
                ("7", "1.75rem"),
                ("8", "2rem"),
                ("9", "2.25rem"),
                ("10", "2.5rem"),
                ("11", "2.75rem"),
                ("12", "3rem"),
                ("14", "3.5rem"),
                ("16", "4rem"),
                ("20", "5rem"),
                ("24", "6rem"),
                ("28", "7rem"),
                ("32", "8rem"),
                ("36", "9rem"),
                ("40", "10rem"),
                ("44", "11rem"),
                ("48", "12rem"),
                ("52", "13rem"),
                ("56", "14rem"),
                ("60", "15rem"),
                ("64", "16rem"),
                ("72", "18rem"),
                ("80", "20rem"),
                ("96", "24rem"),
            ]),
            border_radius: string_map(&[
                ("none", "0px"),
                ("sm", "0.125rem"),
                ("base", "0.25rem"),
                ("md", "0.375rem"),
                ("lg", "0.5rem"),
                ("xl", "0.75rem"),
                ("2xl", "1rem"),
                ("3xl", "1.5rem"),
                ("full", "9999px"),
            ]),
            box_shadow: string_map(&[
                ("sm", "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
                ("base", "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)"),
                ("md", "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)"),
                ("lg", "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)"),
                ("xl", "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)"),
                ("2xl", "0 25px 50px -12px rgb(0 0 0 / 0.25)"),
                ("inner", "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)"),
                ("none", "none"),
            ]),
            animation: Animation {
                duration: Durations {
                    fast: "150ms".to_string(),
                    normal: "300ms".to_string(),
                    slow: "500ms".to_string(),
                },
                easing: Easings {
                    linear: "linear".to_string(),
                    ease_in: "cubic-bezier(0.4, 0, 1, 1)".to_string(),
                    ease_out: "cubic-bezier(0, 0, 0.2, 1)".to_string(),
                    ease_in_out: "cubic-bezier(0.4, 0, 0.2, 1)".to_string(),
                },
            },
            z_index: string_map(&[
                ("0", "0"),
                ("10", "10"),
                ("20", "20"),
                ("30", "30"),
                ("40", "40"),
                ("50", "50"),
                ("auto", "auto"),
            ]),
            components: ComponentTokens {
                button: ButtonTokens {
                    padding_x: "1rem".to_string(),
                    padding_y: "0.5rem".to_string(),
                    radius: "0.375rem".to_string(),
                    font_weight: "500".to_string(),
                },
                input: InputTokens {
                    height: "2.5rem".to_string(),
                    padding_x: "0.75rem".to_string(),
                    radius: "0.375rem".to_string(),
                    border_width: "1px".to_string(),
                },
                card: CardTokens {
                    padding: "1.5rem".to_string(),
                    radius: "0.5rem".to_string(),
                    border_width: "1px".to_string(),
                },
                modal: ModalTokens {
                    max_width: "32rem".to_string(),
                    padding: "1.5rem".to_string(),
                    radius: "0.75rem".to_string(),
                },
            },
        }
    }
}
