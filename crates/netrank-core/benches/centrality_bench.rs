use criterion::{black_box, criterion_group, criterion_main, Criterion};
use netrank_core::algo::centrality::{betweenness_centrality, BetweennessConfig};
use netrank_core::algo::pagerank::{pagerank, PageRankConfig};
use netrank_core::{Graph, GraphKind};

/// Ring of `n` nodes with a chord every tenth node.
fn ring_with_chords(kind: GraphKind, n: usize) -> Graph {
    let mut g = Graph::new(kind);
    for i in 0..n {
        let s = format!("node_{}", i);
        g.add_edge(s.as_str(), format!("node_{}", (i + 1) % n)).unwrap();
        if i % 10 == 0 {
            g.add_edge(s.as_str(), format!("node_{}", (i + n / 2) % n))
                .unwrap();
        }
    }
    g
}

fn bench_betweenness(c: &mut Criterion) {
    let g = ring_with_chords(GraphKind::Undirected, 500);
    c.bench_function("betweenness_500_nodes", |b| {
        b.iter(|| betweenness_centrality(black_box(&g), black_box(BetweennessConfig::default())))
    });
}

fn bench_pagerank(c: &mut Criterion) {
    let directed = ring_with_chords(GraphKind::Directed, 1000);
    c.bench_function("pagerank_directed_1000_nodes", |b| {
        b.iter(|| pagerank(black_box(&directed), black_box(PageRankConfig::default())))
    });

    let undirected = ring_with_chords(GraphKind::Undirected, 1000);
    c.bench_function("pagerank_undirected_1000_nodes", |b| {
        b.iter(|| pagerank(black_box(&undirected), black_box(PageRankConfig::default())))
    });
}

criterion_group!(benches, bench_betweenness, bench_pagerank);
criterion_main!(benches);
