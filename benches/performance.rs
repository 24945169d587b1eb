// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for CHORDSHEET
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Scale resolution and chord building
//! - Layout throughput per rhythm
//! - The full render pipeline as the UI drives it

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chordsheet::music::chord::{Chord, RomanNumeral};
use chordsheet::music::pitch::PitchClass;
use chordsheet::music::scale::{Mode, Scale};
use chordsheet::{layout, Engine, Rhythm};

/// Benchmark scale resolution across spelling biases
fn bench_scale_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale_resolution");

    for root in ["C", "F#", "Bb"] {
        let pitch = PitchClass::from_str(root).unwrap();
        group.bench_with_input(BenchmarkId::new("major", root), &pitch, |b, &pitch| {
            b.iter(|| Scale::resolve(black_box(pitch), Mode::Major))
        });
    }

    group.finish();
}

/// Benchmark triad construction for each quality
fn bench_chord_building(c: &mut Criterion) {
    let scale = Scale::resolve(PitchClass::from_str("C").unwrap(), Mode::Major);
    let mut group = c.benchmark_group("chord_building");

    for symbol in ["I", "vi", "ii°"] {
        let numeral = RomanNumeral::parse(symbol).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(symbol), &numeral, |b, &n| {
            b.iter(|| Chord::build(black_box(n), black_box(&scale)))
        });
    }

    group.finish();
}

/// Benchmark event layout per rhythm over a 12-chord sequence
fn bench_layout(c: &mut Criterion) {
    let scale = Scale::resolve(PitchClass::from_str("C").unwrap(), Mode::Major);
    let symbols = ["I", "I", "I", "I", "IV", "IV", "I", "I", "V", "IV", "I", "I"];
    let chords: Vec<Chord> = symbols
        .iter()
        .map(|s| Chord::build(RomanNumeral::parse(s).unwrap(), &scale))
        .collect();

    let mut group = c.benchmark_group("layout");

    for rhythm in Rhythm::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(rhythm.name()),
            &rhythm,
            |b, &rhythm| b.iter(|| layout::layout(black_box(&chords), rhythm)),
        );
    }

    group.finish();
}

/// Benchmark the full render boundary call
fn bench_render_pipeline(c: &mut Criterion) {
    let engine = Engine::new().unwrap();

    c.bench_function("render_axis_arp_up", |b| {
        b.iter(|| {
            engine.render(
                black_box("I – V – vi – IV ('Axis of Awesome')"),
                black_box("F# Major"),
                Rhythm::ArpUp,
            )
        })
    });
}

criterion_group!(
    benches,
    bench_scale_resolution,
    bench_chord_building,
    bench_layout,
    bench_render_pipeline
);
criterion_main!(benches);
