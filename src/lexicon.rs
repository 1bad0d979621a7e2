use clap::ValueEnum;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven lexical categories of the interesting-words chart. The wire keys
/// are a stable contract with the upstream exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum LexicalCategory {
    NegativeNomen,
    NegativeVerben,
    NegativeAdjektive,
    PositiveNomen,
    PositiveVerben,
    PositiveAdjektive,
    Sonstiges,
}

impl LexicalCategory {
    pub const ALL: [LexicalCategory; 7] = [
        LexicalCategory::NegativeNomen,
        LexicalCategory::NegativeVerben,
        LexicalCategory::NegativeAdjektive,
        LexicalCategory::PositiveNomen,
        LexicalCategory::PositiveVerben,
        LexicalCategory::PositiveAdjektive,
        LexicalCategory::Sonstiges,
    ];

    /// The exact wire key, as used by the upstream exporter.
    pub fn key(self) -> &'static str {
        match self {
            LexicalCategory::NegativeNomen => "negative_nomen",
            LexicalCategory::NegativeVerben => "negative_verben",
            LexicalCategory::NegativeAdjektive => "negative_adjektive",
            LexicalCategory::PositiveNomen => "positive_nomen",
            LexicalCategory::PositiveVerben => "positive_verben",
            LexicalCategory::PositiveAdjektive => "positive_adjektive",
            LexicalCategory::Sonstiges => "sonstiges",
        }
    }
}

impl fmt::Display for LexicalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/* -------------------------------------------------------------------------- */
/* Word table                                                                 */
/* -------------------------------------------------------------------------- */

static NEGATIVE_NOMEN: &[&str] = &[
    "krise", "angst", "arbeitslosigkeit", "inflation", "krieg", "armut", "gefahr", "verlust",
];
static NEGATIVE_VERBEN: &[&str] = &[
    "scheitern", "verlieren", "bedrohen", "gefährden", "verhindern", "belasten",
];
static NEGATIVE_ADJEKTIVE: &[&str] = &[
    "schlecht", "unsicher", "teuer", "gefährlich", "ungerecht", "marode",
];
static POSITIVE_NOMEN: &[&str] = &[
    "chance", "zukunft", "sicherheit", "wohlstand", "freiheit", "gerechtigkeit", "fortschritt",
];
static POSITIVE_VERBEN: &[&str] = &[
    "stärken", "fördern", "schützen", "verbessern", "unterstützen", "investieren", "entlasten",
];
static POSITIVE_ADJEKTIVE: &[&str] = &[
    "gut", "stark", "modern", "nachhaltig", "gerecht", "innovativ", "bezahlbar",
];
static SONSTIGES: &[&str] = &[
    "digitalisierung", "europa", "migration", "klimaschutz", "energie", "demokratie",
];

/// Fixed mapping from category to its ordered lexicon word list. Static
/// configuration, not derived data; word order defines field order in the
/// lexical chart rows.
#[derive(Debug, Clone)]
pub struct CategoryTable([Vec<String>; 7]);

impl CategoryTable {
    /// The built-in German lexicon.
    pub fn standard() -> Self {
        let to_vec = |ws: &[&str]| ws.iter().map(|w| w.to_string()).collect();
        CategoryTable([
            to_vec(NEGATIVE_NOMEN),
            to_vec(NEGATIVE_VERBEN),
            to_vec(NEGATIVE_ADJEKTIVE),
            to_vec(POSITIVE_NOMEN),
            to_vec(POSITIVE_VERBEN),
            to_vec(POSITIVE_ADJEKTIVE),
            to_vec(SONSTIGES),
        ])
    }

    pub fn words(&self, category: LexicalCategory) -> &[String] {
        &self.0[category as usize]
    }
}

pub static STANDARD_TABLE: Lazy<CategoryTable> = Lazy::new(CategoryTable::standard);

/* -------------------------------------------------------------------------- */
/* Selector                                                                   */
/* -------------------------------------------------------------------------- */

/// The single piece of UI state: which lexical category the view shows.
/// Always holds one of the seven keys; passed by value into the projection,
/// never shared as ambient mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySelector {
    current: LexicalCategory,
}

impl CategorySelector {
    pub fn new() -> Self {
        CategorySelector {
            current: LexicalCategory::NegativeNomen,
        }
    }

    pub fn set(&mut self, category: LexicalCategory) {
        self.current = category;
    }

    pub fn current(&self) -> LexicalCategory {
        self.current
    }
}

impl Default for CategorySelector {
    fn default() -> Self {
        Self::new()
    }
}
