//! End-to-end scenarios: decode a grid, then evolve it.
//!
//! Run with: cargo test scenarios

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use asciigol::config;
use asciigol::{Coord, Engine, Grid, StepResult, count_live_neighbors, step};

fn grid(doc: &str) -> Grid {
    config::parse(doc.as_bytes()).unwrap()
}

fn live_cells(grid: &Grid) -> Vec<Coord> {
    let mut cells = Vec::new();
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let coord = Coord::new(row, col);
            if grid.is_alive(coord) {
                cells.push(coord);
            }
        }
    }
    cells
}

#[test]
fn test_block_in_corner_is_still_life() {
    let block = grid("asciigol\n3,3\n000\n011\n011\n");
    let mut next = Grid::new(3, 3).unwrap();

    assert_eq!(step(&block, &mut next, false), StepResult::Converged);
    assert_eq!(next, block);

    let mut engine = Engine::new(block.clone(), false);
    assert_eq!(engine.step(), StepResult::Converged);
    assert_eq!(engine.current(), &block);
}

#[test]
fn test_blinker_never_converges() {
    let blinker = grid("asciigol\n5,5\n00000\n00000\n01110\n00000\n00000\n");
    let vertical = grid("asciigol\n5,5\n00000\n00100\n00100\n00100\n00000\n");
    let mut engine = Engine::new(blinker.clone(), false);

    assert_eq!(engine.step(), StepResult::Ongoing);
    assert_eq!(engine.current(), &vertical);

    for _ in 0..20 {
        assert_eq!(engine.step(), StepResult::Ongoing);
    }
    // period two: an odd number of steps later it is vertical again
    assert_eq!(engine.current(), &vertical);
}

#[test]
fn test_glider_keeps_population_on_torus() {
    let mut doc = String::from("asciigol\n10,10\n");
    doc.push_str("0100000000\n0010000000\n1110000000\n");
    for _ in 0..7 {
        doc.push_str("0000000000\n");
    }
    let start = grid(&doc);
    let mut engine = Engine::new(start.clone(), true);

    for _ in 0..4 {
        assert_eq!(engine.step(), StepResult::Ongoing);
        assert_eq!(engine.current().population(), 5);
    }

    // after one period the glider has moved one cell down and right
    let moved: Vec<Coord> = live_cells(&start)
        .into_iter()
        .map(|c| Coord::new(c.row + 1, c.col + 1))
        .collect();
    assert_eq!(live_cells(engine.current()), moved);
}

#[test]
fn test_glider_wraps_across_edges() {
    let mut doc = String::from("asciigol\n8,8\n");
    for _ in 0..5 {
        doc.push_str("00000000\n");
    }
    doc.push_str("00000010\n00000001\n00000111\n");
    let start = grid(&doc);
    let mut engine = Engine::new(start, true);

    // 32 steps move the glider 8 cells diagonally: a full lap of the torus
    for _ in 0..32 {
        engine.step();
        assert_eq!(engine.current().population(), 5);
    }
    assert_eq!(engine.current(), &grid(&doc));
}

#[test]
fn test_neighbor_counts_on_full_grid() {
    let full = Grid::filled(6, 4, true).unwrap();
    for row in 0..4 {
        for col in 0..6 {
            let on_row_edge = row == 0 || row == 3;
            let on_col_edge = col == 0 || col == 5;
            let expected = match (on_row_edge, on_col_edge) {
                (true, true) => 3,
                (true, false) | (false, true) => 5,
                (false, false) => 8,
            };
            assert_eq!(count_live_neighbors(&full, row, col, false), expected, "({row}, {col})");
            assert_eq!(count_live_neighbors(&full, row, col, true), 8, "({row}, {col})");
        }
    }
}

#[test]
fn test_lone_cells_die_and_grid_converges() {
    let sparse = grid("asciigol\n5,3\n10001\n00000\n10001\n");
    let mut engine = Engine::new(sparse, false);
    assert_eq!(engine.step(), StepResult::Ongoing);
    assert_eq!(engine.current().population(), 0);
    assert_eq!(engine.step(), StepResult::Converged);
}
