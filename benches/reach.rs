//! Benchmarks for reach generation and shield recomputation.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rust_tactics::board::Board;
use rust_tactics::core::{MovementType, Tile, WeaponType};
use rust_tactics::units::Unit;

/// A crowded 8x8 board with a queen in the middle.
fn crowded_board() -> Board {
    let mut board = Board::default();
    board.add_unit(
        Unit::player("queen", MovementType::Queen).with_attack(WeaponType::Physical),
        Tile::new(3, 3),
    );
    let foes = [(0, 0), (0, 3), (1, 6), (5, 1), (6, 6), (7, 3)];
    for (i, &(row, col)) in foes.iter().enumerate() {
        let mut foe = Unit::enemy("foe", MovementType::King);
        if i % 2 == 0 {
            foe = foe.with_defense(WeaponType::Magical);
        }
        board.add_unit(foe, Tile::new(row, col));
    }
    board
}

fn bench_reach(c: &mut Criterion) {
    let board = crowded_board();

    c.bench_function("queen_reach_8x8", |b| {
        b.iter(|| black_box(board.compute_reachable(black_box(Tile::new(3, 3)))));
    });
}

fn bench_shields(c: &mut Criterion) {
    let mut board = crowded_board();

    c.bench_function("recompute_shields_8x8", |b| {
        b.iter(|| {
            board.recompute_shields();
            black_box(board.terrain(Tile::new(0, 1)))
        });
    });
}

criterion_group!(benches, bench_reach, bench_shields);
criterion_main!(benches);
