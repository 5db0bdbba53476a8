//! Criterion benchmarks for the argument builder.
//!
//! Measures `build_arguments` and `plan_launch` over stores with a growing
//! number of registered IWADs and extra files, since both scale with the
//! section scans.
//!
//! Run with:
//! ```bash
//! cargo bench --package zdl-core --bench builder_bench
//! ```

use std::path::Path;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use zdl_core::domain::sections;
use zdl_core::{build_arguments, plan_launch, ConfigDocument};

// ── Store fixture builders ────────────────────────────────────────────────────

/// Creates a store with `n` registered IWADs, `n` ports and `n` extra files.
///
/// The selected IWAD and port are the last ones registered, so resolution
/// has to scan every row.
fn build_store(n: usize) -> ConfigDocument {
    let mut doc = ConfigDocument::new();
    for i in 0..n {
        doc.push_value(sections::IWADS, format!("i{i}n"), format!("iwad-{i}"));
        doc.push_value(sections::IWADS, format!("i{i}f"), format!("/iwads/iwad-{i}.wad"));
        doc.push_value(sections::PORTS, format!("p{i}n"), format!("port-{i}"));
        doc.push_value(sections::PORTS, format!("p{i}f"), format!("/ports/port-{i}"));
        let file = if i % 4 == 0 {
            format!("/wads/patch {i}.deh")
        } else {
            format!("/wads/map{i}.wad")
        };
        doc.push_value(sections::SAVE, format!("file{i}"), file);
    }
    let last = n.saturating_sub(1);
    doc.push_value(sections::SAVE, "iwad", format!("iwad-{last}"));
    doc.push_value(sections::SAVE, "port", format!("port-{last}"));
    doc.push_value(sections::SAVE, "gametype", "2");
    doc.push_value(sections::SAVE, "players", "4");
    doc.push_value(sections::NET, "advenabled", "enabled");
    doc.push_value(sections::NET, "netmode", "2");
    doc
}

// ── Benchmarks ────────────────────────────────────────────────────────────────

fn bench_build_arguments(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_arguments");
    for n in [1usize, 16, 128] {
        let store = build_store(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &store, |b, store| {
            b.iter(|| build_arguments(black_box(store)))
        });
    }
    group.finish();
}

fn bench_plan_launch(c: &mut Criterion) {
    let store = build_store(32);
    c.bench_function("plan_launch_32_entries", |b| {
        b.iter(|| plan_launch(black_box(&store), Path::new("/home/player")))
    });
}

criterion_group!(benches, bench_build_arguments, bench_plan_launch);
criterion_main!(benches);
