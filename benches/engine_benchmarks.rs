//! Benchmarks for search engine performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use mailbox_engine::{Position, Searcher, Side, STANDARD};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R";

fn white(layout: &str, castling: &str) -> Position {
    Position::new(layout, Side::White, castling, "-", &STANDARD).unwrap()
}

/// Count leaf nodes of the pseudo-legal move tree.
fn walk(pos: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    pos.gen_moves()
        .iter()
        .map(|&mv| walk(&pos.make_move(mv, &STANDARD), depth - 1))
        .sum()
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");

    let startpos = Position::initial(&STANDARD);
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| walk(&startpos, black_box(depth)))
        });
    }

    let kiwipete = white(KIWIPETE, "KQkq");
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| walk(&kiwipete, black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let positions = [
        ("startpos", Position::initial(&STANDARD)),
        ("middlegame", white(MIDDLEGAME, "KQkq")),
        ("kiwipete", white(KIWIPETE, "KQkq")),
    ];
    for (name, pos) in &positions {
        group.bench_function(*name, |b| b.iter(|| black_box(pos.gen_moves())));
    }

    group.finish();
}

fn bench_delta(c: &mut Criterion) {
    let mut group = c.benchmark_group("delta");

    let kiwipete = white(KIWIPETE, "KQkq");
    let moves = kiwipete.gen_moves();
    group.bench_function("kiwipete_all_moves", |b| {
        b.iter(|| {
            moves
                .iter()
                .map(|&mv| STANDARD.delta(black_box(&kiwipete), mv))
                .sum::<i32>()
        })
    });

    group.finish();
}

fn bench_bound(c: &mut Criterion) {
    let mut group = c.benchmark_group("bound");
    group.sample_size(10); // Fewer samples for slower benchmarks

    let kiwipete = white(KIWIPETE, "KQkq");
    for depth in [2, 3, 4] {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| Searcher::default().bound(&kiwipete, black_box(0), depth, false))
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // Fewer samples for slower benchmarks

    let startpos = Position::initial(&STANDARD);
    for depth in [3, 4, 5] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            let mut searcher = Searcher::default();
            b.iter(|| searcher.search(&startpos, Some(depth)).last())
        });
    }

    // Tactical position: Black to move after Qxf7+
    let tactical = Position::new(
        "r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR",
        Side::Black,
        "KQkq",
        "-",
        &STANDARD,
    )
    .unwrap();
    for depth in [3, 4] {
        group.bench_with_input(BenchmarkId::new("tactical", depth), &depth, |b, &depth| {
            let mut searcher = Searcher::default();
            b.iter(|| searcher.search(&tactical, Some(depth)).last())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_walk,
    bench_movegen,
    bench_delta,
    bench_bound,
    bench_search
);
criterion_main!(benches);
