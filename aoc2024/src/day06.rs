//! Day 6: Guard Gallivant

use anyhow::Context;
use aoc_common::grid::Pos;
use aoc_common::{check_part, Answer, Grid};
use bitvec::prelude::*;

const DIRS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// Cells the guard visits before leaving the map, `None` if the walk loops.
fn patrol(grid: &Grid<u8>, start: Pos, obstacle: Option<Pos>) -> Option<BitVec> {
    let cols = grid.cols();
    let mut seen = bitvec![0; grid.rows() * cols * 4];
    let mut visited = bitvec![0; grid.rows() * cols];
    let (mut pos, mut dir) = (start, 0);
    loop {
        visited.set(pos.0 * cols + pos.1, true);
        let state = (pos.0 * cols + pos.1) * 4 + dir;
        if seen.replace(state, true) {
            return None;
        }
        let Some(next) = grid.step(pos, DIRS[dir], 1) else { return Some(visited) };
        if grid[next] == b'#' || Some(next) == obstacle {
            dir = (dir + 1) % 4;
        } else {
            pos = next;
        }
    }
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let grid = Grid::from_bytes(input)?;
    let start = grid.position(|&cell| cell == b'^').context("no guard on the map")?;
    let visited = patrol(&grid, start, None).context("the guard never leaves the map")?;

    Ok(if part == 1 {
        visited.count_ones()
    } else {
        // only cells on the original route can change it
        visited
            .iter_ones()
            .map(|i| (i / grid.cols(), i % grid.cols()))
            .filter(|&pos| pos != start && patrol(&grid, start, Some(pos)).is_none())
            .count()
    }
    .to_string())
}
