// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Render boundary of the practice engine.
//!
//! The engine owns the immutable catalogs and turns a (progression, key,
//! rhythm) selection into the ordered event list and beam groups that
//! the sheet renderer draws. Every render rebuilds from scratch; there
//! is no cached per-render state.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::layout::{self, BeamGroup, RenderEvent, Rhythm};
use crate::music::chord::Chord;
use crate::music::scale::Scale;

/// Ordered events and beam groups for one rendered exercise
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Score {
    pub events: Vec<RenderEvent>,
    pub beams: Vec<BeamGroup>,
}

/// The music-theory engine behind the selection UI
#[derive(Debug, Clone)]
pub struct Engine {
    catalog: Catalog,
}

impl Engine {
    /// Create an engine over the builtin catalogs
    pub fn new() -> Result<Self> {
        let catalog = Catalog::builtin()?;
        info!(
            "catalog loaded: {} progressions in {} categories, {} keys",
            catalog.progressions().len(),
            catalog.categories().len(),
            catalog.keys().len()
        );
        Ok(Self { catalog })
    }

    /// Create an engine over a caller-supplied catalog
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Get the loaded catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Render one progression in one key with one rhythm style.
    ///
    /// Returns `None` when either name is absent from the catalog; an
    /// unknown selection is a no-op render, not an error.
    pub fn render(&self, progression: &str, key: &str, rhythm: Rhythm) -> Option<Score> {
        let def = match self.catalog.progression(progression) {
            Some(def) => def,
            None => {
                debug!("unknown progression {:?}, skipping render", progression);
                return None;
            }
        };
        let key_def = match self.catalog.key(key) {
            Some(key_def) => key_def,
            None => {
                debug!("unknown key {:?}, skipping render", key);
                return None;
            }
        };

        let scale = Scale::resolve(key_def.root, key_def.mode);
        let chords: Vec<Chord> = def
            .numerals
            .iter()
            .map(|&numeral| Chord::build(numeral, &scale))
            .collect();

        let (events, beams) = layout::layout(&chords, rhythm);
        debug!(
            "rendered {:?} in {:?} as {}: {} events, {} beams",
            progression,
            key,
            rhythm,
            events.len(),
            beams.len()
        );

        Some(Score { events, beams })
    }
}
