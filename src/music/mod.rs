// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory types for CHORDSHEET.
//!
//! This module provides pitch spelling, diatonic scale resolution, and
//! roman-numeral triad construction.

pub mod chord;
pub mod pitch;
pub mod scale;

pub use chord::{Chord, InvalidNumeral, Quality, RomanNumeral, REFERENCE_OCTAVE};
pub use pitch::{Accidental, Letter, Pitch, PitchClass};
pub use scale::{Mode, Scale};
