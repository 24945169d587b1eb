// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Notated event layout.
//!
//! Turns a chord sequence plus a rhythm style into the ordered event
//! list, per-group annotation labels, and beam groupings consumed by the
//! sheet renderer. Each rhythm is a pure strategy function selected
//! through the `Rhythm` enum.

use std::fmt;

use serde::Serialize;

use crate::music::chord::Chord;
use crate::music::pitch::Pitch;

/// Notated duration of a single event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteDuration {
    Whole,
    Eighth,
}

impl NoteDuration {
    /// Duration code in the sheet renderer's shorthand
    pub fn code(self) -> &'static str {
        match self {
            NoteDuration::Whole => "w",
            NoteDuration::Eighth => "8",
        }
    }
}

/// One notated event: pitches sounding together for one duration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderEvent {
    /// Pitches struck simultaneously
    pub pitches: Vec<Pitch>,
    pub duration: NoteDuration,
    /// Chord label drawn at the first event of each group
    pub label: Option<String>,
}

/// Half-open range of consecutive events joined under one beam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BeamGroup {
    pub start: usize,
    pub end: usize,
}

impl BeamGroup {
    /// Number of events in the group
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check whether the group spans no events
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Rhythm style selecting one layout strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rhythm {
    /// One whole-note chord per symbol
    Block,
    /// Root, third, fifth as eighth notes
    ArpUp,
    /// Fifth, third, root as eighth notes
    ArpDown,
    /// Root, third, fifth, third as eighth notes
    ArpUpDown,
}

impl Rhythm {
    /// All rhythms in selector order
    pub const ALL: [Rhythm; 4] = [
        Rhythm::Block,
        Rhythm::ArpUp,
        Rhythm::ArpDown,
        Rhythm::ArpUpDown,
    ];

    /// Parse a selector value such as "block" or "arp-up"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "block" | "chords" => Some(Rhythm::Block),
            "arp-up" | "arpeggio-up" => Some(Rhythm::ArpUp),
            "arp-down" | "arpeggio-down" => Some(Rhythm::ArpDown),
            "arp-up-down" | "arpeggio-updown" => Some(Rhythm::ArpUpDown),
            _ => None,
        }
    }

    /// Get the canonical selector name for this rhythm
    pub fn name(self) -> &'static str {
        match self {
            Rhythm::Block => "block",
            Rhythm::ArpUp => "arp-up",
            Rhythm::ArpDown => "arp-down",
            Rhythm::ArpUpDown => "arp-up-down",
        }
    }

    /// Number of events emitted per chord
    pub fn events_per_chord(self) -> usize {
        match self {
            Rhythm::Block => 1,
            Rhythm::ArpUp | Rhythm::ArpDown => 3,
            Rhythm::ArpUpDown => 4,
        }
    }

    /// Whether events are beamed into per-chord groups
    pub fn beamed(self) -> bool {
        !matches!(self, Rhythm::Block)
    }

    /// The layout strategy for this rhythm
    fn strategy(self) -> LayoutFn {
        match self {
            Rhythm::Block => layout_block,
            Rhythm::ArpUp => layout_arp_up,
            Rhythm::ArpDown => layout_arp_down,
            Rhythm::ArpUpDown => layout_arp_up_down,
        }
    }
}

impl fmt::Display for Rhythm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A pure per-rhythm layout strategy
type LayoutFn = fn(&[Chord]) -> (Vec<RenderEvent>, Vec<BeamGroup>);

/// Lay out a chord sequence in the given rhythm.
///
/// Emits `chords.len() * rhythm.events_per_chord()` events in chord
/// order, with each chord's label on the first event of its group, and
/// one beam group per chord for the eighth-note rhythms.
pub fn layout(chords: &[Chord], rhythm: Rhythm) -> (Vec<RenderEvent>, Vec<BeamGroup>) {
    (rhythm.strategy())(chords)
}

fn layout_block(chords: &[Chord]) -> (Vec<RenderEvent>, Vec<BeamGroup>) {
    let events = chords
        .iter()
        .map(|chord| RenderEvent {
            pitches: chord.tones().to_vec(),
            duration: NoteDuration::Whole,
            label: Some(chord.name.clone()),
        })
        .collect();
    (events, Vec::new())
}

fn layout_arp_up(chords: &[Chord]) -> (Vec<RenderEvent>, Vec<BeamGroup>) {
    arpeggiate(chords, |chord| vec![chord.root, chord.third, chord.fifth])
}

fn layout_arp_down(chords: &[Chord]) -> (Vec<RenderEvent>, Vec<BeamGroup>) {
    arpeggiate(chords, |chord| vec![chord.fifth, chord.third, chord.root])
}

fn layout_arp_up_down(chords: &[Chord]) -> (Vec<RenderEvent>, Vec<BeamGroup>) {
    arpeggiate(chords, |chord| {
        vec![chord.root, chord.third, chord.fifth, chord.third]
    })
}

/// Emit one eighth-note event per tone and one beam group per chord
fn arpeggiate(
    chords: &[Chord],
    tones: fn(&Chord) -> Vec<Pitch>,
) -> (Vec<RenderEvent>, Vec<BeamGroup>) {
    let mut events = Vec::new();
    let mut beams = Vec::with_capacity(chords.len());

    for chord in chords {
        let start = events.len();
        for (index, pitch) in tones(chord).into_iter().enumerate() {
            let label = if index == 0 {
                Some(chord.name.clone())
            } else {
                None
            };
            events.push(RenderEvent {
                pitches: vec![pitch],
                duration: NoteDuration::Eighth,
                label,
            });
        }
        beams.push(BeamGroup {
            start,
            end: events.len(),
        });
    }

    (events, beams)
}
