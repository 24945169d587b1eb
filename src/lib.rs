// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! CHORDSHEET - chord progression practice sheets.
//!
//! The crate derives diatonic scales for a key, builds roman-numeral
//! triads, and lays out notated practice exercises (events, labels, beam
//! groups) for an external sheet renderer to draw.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod layout;
pub mod music;

pub use catalog::Catalog;
pub use engine::{Engine, Score};
pub use layout::Rhythm;
