//! Criterion micro-benchmarks for the route pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hedge_core::{Direction, Position};
use hedge_maze::Maze;
use hedge_route::{compact, explore, shortest_path, Runner};

/// A serpentine maze: one corridor snaking through every cell.
fn serpentine(size: u32) -> Maze {
    let mut maze = Maze::new(size, size).expect("valid bench maze");
    for line in 1..size as i32 {
        if line % 2 == 0 {
            for y in 1..size as i32 {
                maze.add_vertical_wall(y, line).expect("valid wall");
            }
        } else {
            for y in 0..size as i32 - 1 {
                maze.add_vertical_wall(y, line).expect("valid wall");
            }
        }
    }
    maze
}

/// Benchmark: explore a 32x32 serpentine corridor end to end.
fn bench_explore_serpentine_32(c: &mut Criterion) {
    let maze = serpentine(32);
    let start = Runner::new(Position::new(0, 0), Direction::North);

    c.bench_function("explore_serpentine_32", |b| {
        b.iter(|| {
            let trace = explore(black_box(start), &maze, None).unwrap();
            black_box(trace)
        });
    });
}

/// Benchmark: compact a serpentine trace (long, loop-free input).
fn bench_compact_serpentine_32(c: &mut Criterion) {
    let maze = serpentine(32);
    let start = Position::new(0, 0);
    let trace = explore(Runner::new(start, Direction::North), &maze, None).unwrap();

    c.bench_function("compact_serpentine_32", |b| {
        b.iter(|| black_box(compact(black_box(start), &trace)));
    });
}

/// Benchmark: the full pipeline on a maze with backtracking detours.
fn bench_shortest_path_walled_11x5(c: &mut Criterion) {
    let mut maze = Maze::new(11, 5).expect("valid bench maze");
    maze.add_horizontal_wall(0, 1).expect("valid wall");
    maze.add_vertical_wall(1, 1).expect("valid wall");

    c.bench_function("shortest_path_walled_11x5", |b| {
        b.iter(|| {
            let route = shortest_path(&maze, None, None, Direction::North).unwrap();
            black_box(route)
        });
    });
}

criterion_group!(
    benches,
    bench_explore_serpentine_32,
    bench_compact_serpentine_32,
    bench_shortest_path_walled_11x5
);
criterion_main!(benches);
