//! Benchmarks for the three signature rendering strategies.
//!
//! Regenerates a descriptor fixture, rebuilds one callable per parameter count from
//! 1 to 15, and measures every rendering strategy against every callable:
//! - `concat` - plain string concatenation
//! - `buffered_char` - mutable buffer, `char` delimiters
//! - `buffered_str` - mutable buffer, one-character `&str` delimiters

extern crate sigbench;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sigbench::prelude::*;
use std::hint::black_box;

/// Fixture location shared by all benchmark runs.
fn fixture_path() -> std::path::PathBuf {
    std::env::temp_dir().join("sigbench_rendering_fixture.json")
}

/// Regenerate the fixture and rebuild one callable per parameter count.
fn setup_callables() -> Vec<CallableHandle> {
    let path = fixture_path();
    let mut generator = DescriptorGenerator::new();
    generator
        .generate_and_save(PARAM_COUNT_START, PARAM_COUNT_END, &path)
        .expect("failed to write benchmark fixture");

    let mut callables = Vec::with_capacity(PARAM_COUNT_END - PARAM_COUNT_START + 1);
    for count in PARAM_COUNT_START..=PARAM_COUNT_END {
        let handle =
            rebuild_from_json(&path, &method_name(count)).expect("failed to rebuild callable");
        println!("Generated Method: {}", render_concat(&handle));
        callables.push(handle);
    }

    callables
}

/// Benchmark every rendering strategy against every generated callable.
fn bench_render_strategies(c: &mut Criterion) {
    let callables = setup_callables();

    let mut group = c.benchmark_group("render");
    for handle in &callables {
        for (strategy, render) in STRATEGIES {
            group.bench_with_input(
                BenchmarkId::new(*strategy, handle.param_count()),
                handle,
                |b, handle| {
                    b.iter(|| black_box(render(black_box(handle))));
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_render_strategies);
criterion_main!(benches);
