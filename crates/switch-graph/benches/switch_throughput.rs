use criterion::{black_box, criterion_group, criterion_main, Criterion};
use switch_core::RngHandle;
use switch_graph::{BipartiteGraph, MultiHypergraph, SimpleGraph, SwitchGraph};

fn switch_bench(c: &mut Criterion) {
    c.bench_function("bipartite_switch_10k", |b| {
        let mut graph = BipartiteGraph::from_degree_sequence(&[5; 120], &[3; 200]).unwrap();
        let mut rng = RngHandle::from_seed(42);
        b.iter(|| {
            for _ in 0..10_000 {
                black_box(graph.switch(&mut rng).unwrap());
            }
        });
    });
    c.bench_function("simple_switch_10k", |b| {
        let mut graph = SimpleGraph::from_degree_sequence(&[4; 200]).unwrap();
        let mut rng = RngHandle::from_seed(42);
        b.iter(|| {
            for _ in 0..10_000 {
                black_box(graph.switch(&mut rng).unwrap());
            }
        });
    });
    c.bench_function("hypergraph_switch_10k", |b| {
        let mut graph = MultiHypergraph::from_degree_sequence(&[3; 100], &[3; 100]).unwrap();
        let mut rng = RngHandle::from_seed(42);
        b.iter(|| {
            for _ in 0..10_000 {
                black_box(graph.switch(&mut rng).unwrap());
            }
        });
    });
}

criterion_group!(benches, switch_bench);
criterion_main!(benches);
