use chrono::NaiveTime;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wintop::system::sampler::top_by_cpu;
use wintop::system::snapshot::{MemoryStats, ProcessEntry, SystemSnapshot};
use wintop::ui::LayoutEngine;

fn make_processes(n: usize) -> Vec<ProcessEntry> {
    (0..n)
        .map(|i| ProcessEntry {
            pid: i as u32 + 1,
            name: format!("proc_{i}_with_a_fairly_long_executable_name"),
            cpu_percent: ((i * 37) % 400) as f64 / 3.0,
            mem_percent: (i % 100) as f64,
        })
        .collect()
}

fn make_snapshot(cores: usize) -> SystemSnapshot {
    SystemSnapshot {
        cpu_percent: (0..cores).map(|i| (i * 7 % 100) as f64).collect(),
        memory: MemoryStats::from_bytes(64 << 30, 40 << 30),
        swap: MemoryStats::from_bytes(8 << 30, 1 << 30),
        processes: top_by_cpu(make_processes(500), 10),
    }
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_4_16_64_cores");
    let engine = LayoutEngine::default();
    let now = NaiveTime::from_hms_opt(12, 0, 0).unwrap();

    for cores in [4usize, 16, 64] {
        let snapshot = make_snapshot(cores);
        group.bench_with_input(BenchmarkId::from_parameter(cores), &snapshot, |b, s| {
            b.iter(|| engine.render_at(black_box(s), 160, now));
        });
    }
    group.finish();
}

fn bench_top_by_cpu(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_by_cpu_500_1000_2000");
    for n in [500usize, 1000, 2000] {
        let processes = make_processes(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &processes, |b, p| {
            b.iter(|| top_by_cpu(black_box(p.clone()), 10));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render, bench_top_by_cpu);
criterion_main!(benches);
