// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Diatonic scale resolution.
//!
//! Resolves the seven-degree scale for a key root and mode, with the
//! sharp/flat respelling bias taken from the root's own accidental.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::pitch::PitchClass;

/// Key mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Major,
    Minor,
}

impl Mode {
    /// Semitone offsets of the seven scale degrees from the tonic
    pub fn intervals(self) -> [usize; 7] {
        match self {
            Mode::Major => [0, 2, 4, 5, 7, 9, 11],
            Mode::Minor => [0, 2, 3, 5, 7, 8, 10], // Natural minor
        }
    }

    /// Parse a mode from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "major" => Some(Mode::Major),
            "minor" => Some(Mode::Minor),
            _ => None,
        }
    }

    /// Get a human-readable name for this mode
    pub fn name(self) -> &'static str {
        match self {
            Mode::Major => "Major",
            Mode::Minor => "Minor",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A seven-degree diatonic scale with key-biased spelling
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    root: PitchClass,
    mode: Mode,
    degrees: [PitchClass; 7],
}

impl Scale {
    /// Resolve the scale for a key root and mode.
    ///
    /// The chromatic walk is anchored at the root's natural letter; the
    /// root's own accidental is ignored for indexing. A sharp root then
    /// sharpens every degree not already sharp, and a flat root respells
    /// every sharp degree one chromatic step down with a flat marker.
    /// The rule is a simplification of key-signature spelling and names
    /// some degrees musically wrong (see the scale tests).
    pub fn resolve(root: PitchClass, mode: Mode) -> Self {
        let start = root.letter().chromatic_index();
        let mut degrees = mode
            .intervals()
            .map(|offset| PitchClass::CHROMATIC[(start + offset) % 12]);

        if root.is_sharp() {
            degrees = degrees.map(PitchClass::sharpened);
        } else if root.is_flat() {
            degrees = degrees.map(PitchClass::flat_respelled);
        }

        Self { root, mode, degrees }
    }

    /// Get the requested root name
    pub fn root(&self) -> PitchClass {
        self.root
    }

    /// Get the mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Get all seven degrees, tonic first
    pub fn degrees(&self) -> &[PitchClass; 7] {
        &self.degrees
    }

    /// Pitch at a 0-based scale degree, wrapping past the octave
    pub fn degree(&self, index: usize) -> PitchClass {
        self.degrees[index % 7]
    }

    /// The first scale degree
    pub fn tonic(&self) -> PitchClass {
        self.degrees[0]
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root, self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(scale: &Scale) -> Vec<String> {
        scale.degrees().iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_mode_intervals() {
        assert_eq!(Mode::Major.intervals(), [0, 2, 4, 5, 7, 9, 11]);
        assert_eq!(Mode::Minor.intervals(), [0, 2, 3, 5, 7, 8, 10]);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!(Mode::from_str("major"), Some(Mode::Major));
        assert_eq!(Mode::from_str("Minor"), Some(Mode::Minor));
        assert_eq!(Mode::from_str("dorian"), None);
    }

    #[test]
    fn test_c_major() {
        let scale = Scale::resolve(PitchClass::from_str("C").unwrap(), Mode::Major);
        assert_eq!(names(&scale), ["C", "D", "E", "F", "G", "A", "B"]);
    }

    #[test]
    fn test_a_minor() {
        let scale = Scale::resolve(PitchClass::from_str("A").unwrap(), Mode::Minor);
        assert_eq!(names(&scale), ["A", "B", "C", "D", "E", "F", "G"]);
    }

    #[test]
    fn test_scale_always_seven_degrees() {
        for root in ["C", "F#", "Bb", "Cb", "G", "Eb"] {
            for mode in [Mode::Major, Mode::Minor] {
                let scale = Scale::resolve(PitchClass::from_str(root).unwrap(), mode);
                assert_eq!(scale.degrees().len(), 7);
            }
        }
    }

    #[test]
    fn test_tonic_keeps_root_letter() {
        // Indexing ignores the root's accidental, so the tonic always has
        // the root's natural letter even when its accidental differs.
        let scale = Scale::resolve(PitchClass::from_str("Bb").unwrap(), Mode::Major);
        assert_eq!(scale.tonic().to_string(), "B");

        let scale = Scale::resolve(PitchClass::from_str("F#").unwrap(), Mode::Major);
        assert_eq!(scale.tonic().to_string(), "F#");
    }

    #[test]
    fn test_f_sharp_major_sharpening() {
        // Sharp keys append a sharp to every non-sharp degree. The fourth
        // degree lands on A# in the chromatic table, so the scale repeats
        // A# rather than spelling B.
        let scale = Scale::resolve(PitchClass::from_str("F#").unwrap(), Mode::Major);
        assert_eq!(names(&scale), ["F#", "G#", "A#", "A#", "C#", "D#", "E#"]);
    }

    #[test]
    fn test_b_flat_major_respelling() {
        // Flat keys respell chromatic sharps one table entry down with a
        // flat appended, yielding letter-plus-flat names like Cb.
        let scale = Scale::resolve(PitchClass::from_str("Bb").unwrap(), Mode::Major);
        assert_eq!(names(&scale), ["B", "Cb", "Db", "E", "Fb", "Gb", "Ab"]);
    }

    #[test]
    fn test_d_flat_major_respelling() {
        let scale = Scale::resolve(PitchClass::from_str("Db").unwrap(), Mode::Major);
        assert_eq!(names(&scale), ["D", "E", "Fb", "G", "A", "B", "Cb"]);
    }

    #[test]
    fn test_scale_resolution_is_pure() {
        let root = PitchClass::from_str("Eb").unwrap();
        let first = Scale::resolve(root, Mode::Minor);
        let second = Scale::resolve(root, Mode::Minor);
        assert_eq!(first, second);
    }

    #[test]
    fn test_scale_display() {
        let scale = Scale::resolve(PitchClass::from_str("F#").unwrap(), Mode::Major);
        assert_eq!(scale.to_string(), "F# Major");
    }
}
