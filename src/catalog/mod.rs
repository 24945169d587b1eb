// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Reference catalogs of progressions and keys.
//!
//! The tables are fixed library data: loaded once at startup, validated
//! up front, and exposed read-only for the selection UI to populate its
//! drop-downs from.

use anyhow::{anyhow, Context, Result};

use crate::music::chord::RomanNumeral;
use crate::music::pitch::PitchClass;
use crate::music::scale::Mode;

/// A named chord progression from the builtin library
#[derive(Debug, Clone)]
pub struct ProgressionDef {
    /// Display name shown in the progression selector
    pub name: String,
    /// Genre grouping, e.g. "Jazz"
    pub category: String,
    /// Chord symbols in playing order
    pub numerals: Vec<RomanNumeral>,
}

/// A key's catalog entry
#[derive(Debug, Clone)]
pub struct KeyDef {
    /// Display name shown in the key selector, e.g. "Bb Major"
    pub name: String,
    /// Root pitch name the scale is resolved from
    pub root: PitchClass,
    pub mode: Mode,
    /// Signed key-signature accidental count (sharps positive, flats negative)
    pub accidentals: i8,
    /// Short display symbol, e.g. "Bb" or "Em"
    pub symbol: String,
}

/// Raw progression table: (category, display name, numeral symbols)
const PROGRESSIONS: &[(&str, &str, &[&str])] = &[
    (
        "Pop & Rock",
        "I – V – vi – IV ('Axis of Awesome')",
        &["I", "V", "vi", "IV"],
    ),
    (
        "Pop & Rock",
        "I – vi – IV – V ('50s Progression')",
        &["I", "vi", "IV", "V"],
    ),
    (
        "Pop & Rock",
        "vi – IV – I – V ('Sensitive Female')",
        &["vi", "IV", "I", "V"],
    ),
    (
        "Pop & Rock",
        "I – IV – V – I ('Basic Rock')",
        &["I", "IV", "V", "I"],
    ),
    (
        "Pop & Rock",
        "I – V – vi – iii – IV – I – IV – V ('Pachelbel's Canon')",
        &["I", "V", "vi", "iii", "IV", "I", "IV", "V"],
    ),
    (
        "Pop & Rock",
        "i – VII – VI – V ('Andalusian Cadence')",
        &["i", "VII", "VI", "V"],
    ),
    ("Jazz", "ii – V – I ('The 2-5-1')", &["ii", "V", "I"]),
    (
        "Jazz",
        "I – vi – ii – V ('Rhythm Changes')",
        &["I", "vi", "ii", "V"],
    ),
    ("Jazz", "ii° – V – i ('Minor 2-5-1')", &["ii°", "V", "i"]),
    (
        "Blues",
        "12-Bar Blues",
        &["I", "I", "I", "I", "IV", "IV", "I", "I", "V", "IV", "I", "I"],
    ),
    (
        "Blues",
        "Minor Blues",
        &["i", "i", "i", "i", "iv", "iv", "i", "i", "v", "iv", "i", "i"],
    ),
    (
        "Cinematic",
        "i – VI – III – VII ('Epic Progression')",
        &["i", "VI", "III", "VII"],
    ),
    (
        "Cinematic",
        "IV – I – V – vi ('Nostalgic')",
        &["IV", "I", "V", "vi"],
    ),
];

/// Raw key table: (display name, root, mode, accidentals, symbol)
const KEYS: &[(&str, &str, Mode, i8, &str)] = &[
    ("C Major", "C", Mode::Major, 0, "C"),
    ("G Major", "G", Mode::Major, 1, "G"),
    ("D Major", "D", Mode::Major, 2, "D"),
    ("A Major", "A", Mode::Major, 3, "A"),
    ("E Major", "E", Mode::Major, 4, "E"),
    ("B Major", "B", Mode::Major, 5, "B"),
    ("F# Major", "F#", Mode::Major, 6, "F#"),
    ("C# Major", "C#", Mode::Major, 7, "C#"),
    ("F Major", "F", Mode::Major, -1, "F"),
    ("Bb Major", "Bb", Mode::Major, -2, "Bb"),
    ("Eb Major", "Eb", Mode::Major, -3, "Eb"),
    ("Ab Major", "Ab", Mode::Major, -4, "Ab"),
    ("Db Major", "Db", Mode::Major, -5, "Db"),
    ("Gb Major", "Gb", Mode::Major, -6, "Gb"),
    ("Cb Major", "Cb", Mode::Major, -7, "Cb"),
    ("A Minor", "A", Mode::Minor, 0, "Am"),
    ("E Minor", "E", Mode::Minor, 1, "Em"),
    ("B Minor", "B", Mode::Minor, 2, "Bm"),
    ("F# Minor", "F#", Mode::Minor, 3, "F#m"),
    ("C# Minor", "C#", Mode::Minor, 4, "C#m"),
    ("G# Minor", "G#", Mode::Minor, 5, "G#m"),
    ("D# Minor", "D#", Mode::Minor, 6, "D#m"),
    ("A# Minor", "A#", Mode::Minor, 7, "A#m"),
    ("D Minor", "D", Mode::Minor, -1, "Dm"),
    ("G Minor", "G", Mode::Minor, -2, "Gm"),
    ("C Minor", "C", Mode::Minor, -3, "Cm"),
    ("F Minor", "F", Mode::Minor, -4, "Fm"),
    ("Bb Minor", "Bb", Mode::Minor, -5, "Bbm"),
    ("Eb Minor", "Eb", Mode::Minor, -6, "Ebm"),
    ("Ab Minor", "Ab", Mode::Minor, -7, "Abm"),
];

/// Immutable progression and key tables, loaded once at startup
#[derive(Debug, Clone)]
pub struct Catalog {
    progressions: Vec<ProgressionDef>,
    keys: Vec<KeyDef>,
}

impl Catalog {
    /// Load the builtin tables.
    ///
    /// Every numeral and key root is parsed here so that a bad table
    /// entry fails at startup rather than mid-render.
    pub fn builtin() -> Result<Self> {
        let mut progressions = Vec::with_capacity(PROGRESSIONS.len());
        for &(category, name, symbols) in PROGRESSIONS {
            let numerals = symbols
                .iter()
                .map(|&symbol| RomanNumeral::parse(symbol))
                .collect::<Result<Vec<_>, _>>()
                .with_context(|| format!("progression {:?}", name))?;
            progressions.push(ProgressionDef {
                name: name.to_string(),
                category: category.to_string(),
                numerals,
            });
        }

        let mut keys = Vec::with_capacity(KEYS.len());
        for &(name, root, mode, accidentals, symbol) in KEYS {
            let root = PitchClass::from_str(root)
                .ok_or_else(|| anyhow!("key {:?}: unrecognized root {:?}", name, root))?;
            keys.push(KeyDef {
                name: name.to_string(),
                root,
                mode,
                accidentals,
                symbol: symbol.to_string(),
            });
        }

        Ok(Self { progressions, keys })
    }

    /// Category names in table order
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for def in &self.progressions {
            if !categories.contains(&def.category.as_str()) {
                categories.push(&def.category);
            }
        }
        categories
    }

    /// Progression names within a category, in table order
    pub fn progression_names(&self, category: &str) -> Vec<&str> {
        self.progressions
            .iter()
            .filter(|def| def.category == category)
            .map(|def| def.name.as_str())
            .collect()
    }

    /// Look up a progression by display name across all categories
    pub fn progression(&self, name: &str) -> Option<&ProgressionDef> {
        self.progressions.iter().find(|def| def.name == name)
    }

    /// All key names in table order
    pub fn key_names(&self) -> Vec<&str> {
        self.keys.iter().map(|def| def.name.as_str()).collect()
    }

    /// Look up a key by display name
    pub fn key(&self, name: &str) -> Option<&KeyDef> {
        self.keys.iter().find(|def| def.name == name)
    }

    /// All progression definitions
    pub fn progressions(&self) -> &[ProgressionDef] {
        &self.progressions
    }

    /// All key definitions
    pub fn keys(&self) -> &[KeyDef] {
        &self.keys
    }
}
