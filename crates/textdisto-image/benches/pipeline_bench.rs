// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the distortion pipeline in the textdisto-image
// crate. Runs the default pipeline and each operator kind on a 256x80
// synthetic raster, the default CLI canvas size.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use textdisto_core::Raster;
use textdisto_image::{Pipeline, parse_command};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// 256x80 raster with a white bar across the middle, roughly what rendered
/// text looks like to the operators.
fn synthetic_raster() -> Raster {
    let (width, height) = (256u32, 80u32);
    let mut raster = Raster::new(width, height).expect("non-zero dimensions");
    for y in 25..55 {
        for x in 20..236 {
            raster.set(x, y, 240);
        }
    }
    raster
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_default_pipeline(c: &mut Criterion) {
    let raster = synthetic_raster();
    let pipeline = Pipeline::default_sequence(true);

    c.bench_function("default pipeline (256x80)", |b| {
        b.iter(|| black_box(pipeline.run(black_box(raster.clone()))));
    });
}

fn bench_operators(c: &mut Criterion) {
    let raster = synthetic_raster();
    let mut group = c.benchmark_group("operator (256x80)");
    for command in ["cosh,0.07,6", "tanv,0.12,6", "blky,32,16", "inv"] {
        let op = parse_command(command).expect("valid benchmark command");
        group.bench_function(command, |b| {
            b.iter(|| black_box(op.apply(black_box(&raster))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_default_pipeline, bench_operators);
criterion_main!(benches);
