//! Day 15: Chiton

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use anyhow::{bail, ensure};
use aoc_common::{check_part, Answer, Grid};

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let tile = Grid::digits(input)?;
    ensure!(tile.rows() > 0 && tile.cols() > 0, "empty map");
    let grid = if part == 1 {
        tile
    } else {
        let (rows, cols) = (tile.rows(), tile.cols());
        let mut full = Grid::new(rows * 5, cols * 5, 0u8);
        for pos @ (r, c) in full.positions().collect::<Vec<_>>() {
            let risk = tile[(r % rows, c % cols)] + (r / rows + c / cols) as u8;
            full[pos] = (risk - 1) % 9 + 1;
        }
        full
    };

    let goal = (grid.rows() - 1, grid.cols() - 1);
    let mut best = Grid::new(grid.rows(), grid.cols(), u32::MAX);
    best[(0, 0)] = 0;
    let mut queue = BinaryHeap::from([Reverse((0u32, (0, 0)))]);
    while let Some(Reverse((risk, pos))) = queue.pop() {
        if pos == goal {
            return Ok(risk.to_string());
        }
        if risk > best[pos] {
            continue;
        }
        for next in grid.neighbours4(pos) {
            let total = risk + grid[next] as u32;
            if total < best[next] {
                best[next] = total;
                queue.push(Reverse((total, next)));
            }
        }
    }
    bail!("no path to the bottom right")
}
