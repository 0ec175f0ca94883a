use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use plum_rules::game_state::chess_rules::STARTING_POSITION_FEN;
use plum_rules::move_generation::legal_move_generator::LegalMoveGenerator;
use plum_rules::move_generation::move_generator::MoveGenerator;
use plum_rules::move_generation::perft::perft;
use plum_rules::utils::fen_parser::parse_fen;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [usize],
}

// Positions whose published counts involve neither castling nor promotion.
const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        fen: STARTING_POSITION_FEN,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "position_3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        expected_nodes: &[14, 191, 2812],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        fen: STARTING_POSITION_FEN,
        expected_nodes: &[20, 400, 8902, 197_281],
    },
    BenchCase {
        name: "position_3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        expected_nodes: &[14, 191, 2812, 43_238],
    },
];

const GENERATION_FENS: &[(&str, &str)] = &[
    ("startpos", STARTING_POSITION_FEN),
    (
        "kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ),
    ("en_passant", "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1"),
];

fn suite_name() -> &'static str {
    match std::env::var("PLUM_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    }
}

fn selected_cases() -> &'static [BenchCase] {
    match suite_name() {
        "standard" => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn bench_perft(c: &mut Criterion) {
    let generator = LegalMoveGenerator::new();
    let mut group = c.benchmark_group(format!("perft_{}", suite_name()));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let parsed = parse_fen(case.fen).expect("benchmark FEN should parse");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&generator, &parsed.board, parsed.side_to_move, depth)
                .expect("perft should run");
            assert_eq!(
                warmup.nodes, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes as u64));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{}_d{}", case.name, depth)),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(
                            &generator,
                            black_box(&parsed.board),
                            parsed.side_to_move,
                            black_box(depth),
                        )
                        .expect("perft benchmark run should succeed");
                        assert_eq!(count.nodes, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_generation(c: &mut Criterion) {
    let generator = LegalMoveGenerator::new();
    let mut group = c.benchmark_group("generate_legal_moves");

    for (name, fen) in GENERATION_FENS {
        let parsed = parse_fen(fen).expect("benchmark FEN should parse");
        group.bench_function(*name, |b| {
            b.iter(|| {
                let moves = generator
                    .generate_legal_moves(black_box(&parsed.board), parsed.side_to_move)
                    .expect("generation should succeed");
                black_box(moves.len())
            });
        });
    }

    group.finish();
}

criterion_group!(legal_move_benches, bench_perft, bench_generation);
criterion_main!(legal_move_benches);
