// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use nashwap_engine::{
    config::EngineConfig, engine::NashSwapEngine, monitor::no_op::NoOpMonitor,
};
use nashwap_instance::generator::{self, InstanceConfig};
use nashwap_model::{allocation::Allocation, preferences::Preferences};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

/// Deterministic instance for a given size; the skewed start gives the
/// engine real work to do.
fn make_instance(num_agents: usize, num_items: usize, seed: u64) -> (Preferences, Allocation) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let config = InstanceConfig {
        num_agents,
        num_items,
        liking_probability: 0.5,
    };
    let preferences = generator::generate_preferences(&config, &mut rng);
    let allocation = generator::skewed_allocation(&preferences, &mut rng);
    (preferences, allocation)
}

fn bench_engine_runs(c: &mut Criterion) {
    let sizes = [(5usize, 10usize), (10, 25), (20, 60), (40, 120)];

    let mut group = c.benchmark_group("engine_benchmark");

    for &(num_agents, num_items) in &sizes {
        let (preferences, allocation) = make_instance(num_agents, num_items, 7);
        let mut engine = NashSwapEngine::<f64>::new();
        let config = EngineConfig::new();
        let size_label = format!("{}x{}", num_agents, num_items);

        group.throughput(Throughput::Elements(num_items as u64));

        group.bench_with_input(
            BenchmarkId::new("run_to_convergence", &size_label),
            &size_label,
            |b, _| {
                b.iter_batched(
                    || allocation.clone(),
                    |start| {
                        let mut monitor = NoOpMonitor::new();
                        let outcome = engine
                            .run(
                                black_box(&preferences),
                                start,
                                black_box(&config),
                                &mut monitor,
                            )
                            .expect("generated instances have backed envy edges");
                        black_box(outcome)
                    },
                    BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_engine_runs);
criterion_main!(benches);
