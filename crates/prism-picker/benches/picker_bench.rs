//! Benchmarks for the boundary tracer and slider gradients.
//!
//! Run with: cargo bench -p prism-picker

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use prism_color::Color;
use prism_color::spaces::{HSL, OKLCH};
use prism_picker::{ColorPicker, ContrastLines, GradientOptions};
use std::hint::black_box;

// =============================================================================
// Boundary tracer
// =============================================================================

fn bench_hue_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("contrast_lines/hue_lines");
    for grid_steps in [10usize, 20, 40] {
        let tracer = ContrastLines {
            source: &OKLCH,
            grid_steps,
            ..ContrastLines::default()
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(grid_steps),
            &tracer,
            |b, tracer| b.iter(|| black_box(tracer.hue_lines())),
        );
    }
    group.finish();
}

// =============================================================================
// Gradients
// =============================================================================

fn bench_gradient_stops(c: &mut Criterion) {
    let mut group = c.benchmark_group("picker/gradient_stops");
    for (name, color) in [
        ("hsl", Color::in_space(&HSL, [200.0, 60.0, 40.0], 1.0)),
        ("oklch", Color::in_space(&OKLCH, [0.7, 0.15, 250.0], 0.8)),
    ] {
        let picker = ColorPicker::new(color);
        for steps in [10usize, 50] {
            let options = GradientOptions { steps };
            group.bench_with_input(
                BenchmarkId::new(name, steps),
                &options,
                |b, options| b.iter(|| black_box(picker.gradient_stops(options))),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_hue_lines, bench_gradient_stops);
criterion_main!(benches);
