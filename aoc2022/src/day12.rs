//! Day 12: Hill Climbing Algorithm

use std::collections::VecDeque;

use anyhow::Context;
use aoc_common::{check_part, Answer, Grid};

fn height(cell: u8) -> u8 {
    match cell {
        b'S' => b'a',
        b'E' => b'z',
        _ => cell,
    }
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let grid = Grid::from_bytes(input)?;
    let end = grid.position(|&cell| cell == b'E').context("no best signal location")?;

    // walk downhill from the end: a step back may drop at most one level
    let mut dist: Grid<Option<usize>> = Grid::new(grid.rows(), grid.cols(), None);
    dist[end] = Some(0);
    let mut queue = VecDeque::from([end]);
    while let Some(pos) = queue.pop_front() {
        let d = dist[pos].unwrap_or_default();
        if grid[pos] == b'S' || part == 2 && height(grid[pos]) == b'a' {
            return Ok(d.to_string());
        }
        for next in grid.neighbours4(pos) {
            if dist[next].is_none() && height(grid[pos]) <= height(grid[next]) + 1 {
                dist[next] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    anyhow::bail!("no route to the best signal location")
}
