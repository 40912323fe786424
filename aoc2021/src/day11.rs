//! Day 11: Dumbo Octopus

use aoc_common::{check_part, Answer, Grid};

/// Advances one step; returns the number of flashes.
fn step(grid: &mut Grid<u8>) -> usize {
    let positions: Vec<_> = grid.positions().collect();
    let mut flashing = positions.clone();
    let mut flashes = 0;
    while let Some(pos) = flashing.pop() {
        grid[pos] += 1;
        if grid[pos] == 10 {
            flashes += 1;
            flashing.extend(grid.neighbours8(pos));
        }
    }
    for pos in positions {
        if grid[pos] > 9 {
            grid[pos] = 0;
        }
    }
    flashes
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut grid = Grid::digits(input)?;
    if part == 1 {
        return Ok((0..100).map(|_| step(&mut grid)).sum::<usize>().to_string());
    }
    let everyone = grid.rows() * grid.cols();
    let mut steps = 1;
    while step(&mut grid) != everyone {
        steps += 1;
    }
    Ok(steps.to_string())
}
