// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Roman-numeral chord symbols and triad construction.
//!
//! Numeral symbols are parsed once, when the catalog loads, into a degree
//! and a triad quality; chord construction then works purely from the
//! parsed form and a resolved scale.

use std::fmt;

use thiserror::Error;

use super::pitch::{Pitch, PitchClass};
use super::scale::Scale;

/// Octave used for all notated chord tones
pub const REFERENCE_OCTAVE: i8 = 4;

/// Marker decorating a diminished numeral
const DIMINISHED_MARK: char = '°';

/// Degree names in scale order
const DEGREE_NAMES: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// Triad quality encoded by a numeral's case and decoration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Major,
    Minor,
    Diminished,
}

impl Quality {
    /// Suffix appended to the chord display name
    pub fn suffix(self) -> &'static str {
        match self {
            Quality::Major => "",
            Quality::Minor => "m",
            Quality::Diminished => "°",
        }
    }

    /// Get a human-readable name for this quality
    pub fn name(self) -> &'static str {
        match self {
            Quality::Major => "major",
            Quality::Minor => "minor",
            Quality::Diminished => "diminished",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error for a symbol that does not name a scale degree.
///
/// Numerals only come from the static catalog tables, so hitting this at
/// load time means the table itself is wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid roman numeral: {0:?}")]
pub struct InvalidNumeral(pub String);

/// A parsed roman-numeral chord symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RomanNumeral {
    degree: usize,
    quality: Quality,
}

impl RomanNumeral {
    /// Parse a symbol such as "IV", "vi" or "ii°".
    ///
    /// The diminished marker decides quality before the case test, so a
    /// lowercase numeral carrying the marker is diminished, not minor.
    pub fn parse(symbol: &str) -> Result<Self, InvalidNumeral> {
        let diminished = symbol.contains(DIMINISHED_MARK);
        let stripped: String = symbol.chars().filter(|&c| c != DIMINISHED_MARK).collect();

        let upper = stripped.to_uppercase();
        let degree = DEGREE_NAMES
            .iter()
            .position(|&name| name == upper)
            .ok_or_else(|| InvalidNumeral(symbol.to_string()))?;

        let quality = if diminished {
            Quality::Diminished
        } else if stripped == stripped.to_lowercase() {
            Quality::Minor
        } else {
            Quality::Major
        };

        Ok(Self { degree, quality })
    }

    /// 0-based scale degree (0 = tonic)
    pub fn degree(self) -> usize {
        self.degree
    }

    /// Triad quality encoded by the symbol
    pub fn quality(self) -> Quality {
        self.quality
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = DEGREE_NAMES[self.degree];
        match self.quality {
            Quality::Major => write!(f, "{}", name),
            Quality::Minor => write!(f, "{}", name.to_lowercase()),
            Quality::Diminished => write!(f, "{}{}", name.to_lowercase(), DIMINISHED_MARK),
        }
    }
}

/// A concrete triad placed at the notation reference octave
#[derive(Debug, Clone, PartialEq)]
pub struct Chord {
    pub root: Pitch,
    pub third: Pitch,
    pub fifth: Pitch,
    /// Display name drawn under the staff, e.g. "Am" or "B°"
    pub name: String,
    pub quality: Quality,
}

impl Chord {
    /// Build the triad for a numeral against a resolved scale.
    ///
    /// Major triads stack diatonic thirds within the scale. Minor triads
    /// force the third three semitones above the root's natural letter,
    /// overriding whatever the scale would supply, and keep the diatonic
    /// fifth. Diminished triads force both the third and the fifth
    /// chromatically. Forced tones come straight from the chromatic table,
    /// so their spelling can disagree with the scale's flat bias.
    pub fn build(numeral: RomanNumeral, scale: &Scale) -> Self {
        let degree = numeral.degree();
        let root = scale.degree(degree);
        let root_index = root.letter().chromatic_index();

        let (third, fifth) = match numeral.quality() {
            Quality::Major => (scale.degree(degree + 2), scale.degree(degree + 4)),
            Quality::Minor => (
                PitchClass::CHROMATIC[(root_index + 3) % 12],
                scale.degree(degree + 4),
            ),
            Quality::Diminished => (
                PitchClass::CHROMATIC[(root_index + 3) % 12],
                PitchClass::CHROMATIC[(root_index + 6) % 12],
            ),
        };

        let name = format!("{}{}", root, numeral.quality().suffix());

        Self {
            root: Pitch::new(root, REFERENCE_OCTAVE),
            third: Pitch::new(third, REFERENCE_OCTAVE),
            fifth: Pitch::new(fifth, REFERENCE_OCTAVE),
            name,
            quality: numeral.quality(),
        }
    }

    /// Chord tones in root, third, fifth order
    pub fn tones(&self) -> [Pitch; 3] {
        [self.root, self.third, self.fifth]
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
