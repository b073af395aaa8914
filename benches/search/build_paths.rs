use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hub_core::{prelude::*, util::test_graphs::grid_network};
use rand::prelude::*;

criterion_group!(benches, grid_sizes, random_sources);
criterion_main!(benches);

fn build(network: &HubNetwork, start: &str, strategy: FrontierStrategy) -> HubMap {
    let (hubs, links) = network.clone().into_parts();
    HubMap::with_strategy(hubs, links, start, strategy).unwrap()
}

pub fn grid_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_paths");
    for size in [10, 20, 40, 80].iter() {
        let network = grid_network(*size, *size, 10);

        for strategy in [FrontierStrategy::LinearScan, FrontierStrategy::BinaryHeap] {
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), size * size),
                &network,
                |b, network| b.iter(|| build(black_box(network), "0:0", strategy)),
            );
        }
    }
    group.finish();
}

fn random_sources(c: &mut Criterion) {
    let network = grid_network(40, 40, 10);
    let mut rng = StdRng::seed_from_u64(42);
    let starts: Vec<String> = network
        .get_hubs()
        .choose_multiple(&mut rng, 16)
        .map(|hub| hub.name.clone())
        .collect();

    c.bench_function("build_paths_random_sources", |b| {
        b.iter(|| {
            for start in starts.iter() {
                build(&network, start, FrontierStrategy::BinaryHeap);
            }
        })
    });
}
