use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use csimlib::simulator::Simulator;
use csimlib::util::get_cases;
use std::fs;

/// Replays every fixture trace under its fixture configuration
pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Fixture traces");

    get_cases().unwrap().iter().for_each(|case| {
        // For the purposes of this we aren't interested in IO effects, the
        // fixture traces easily fit into memory
        let buf = fs::read(&case.trace).unwrap();
        let name = case.trace.file_name().unwrap().to_string_lossy().into_owned();
        group.bench_with_input(
            BenchmarkId::new("Trace: ", name),
            &(case.config, buf),
            |bench, (config, buf)| {
                bench.iter(|| {
                    Simulator::new(config).simulate(buf);
                });
            },
        );
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().significance_level(0.1).sample_size(10);
    targets = criterion_benchmark
);
criterion_main!(benches);
