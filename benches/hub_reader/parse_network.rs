use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hub_core::util::test_graphs::grid_network;
use hub_reader::HubNetwork;

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = parse_grid
}
criterion_main!(benches);

fn parse_grid(c: &mut Criterion) {
    let mut text = Vec::new();
    grid_network(100, 100, 10).write(&mut text).unwrap();
    let text = String::from_utf8(text).unwrap();

    c.bench_function("parse_grid_100x100", |b| {
        b.iter(|| {
            let _ = black_box(&text).parse::<HubNetwork>();
        })
    });
}
