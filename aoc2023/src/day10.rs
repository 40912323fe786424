//! Day 10: Pipe Maze

use anyhow::{bail, Context};
use aoc_common::grid::Pos;
use aoc_common::{check_part, Answer, Grid};

const NORTH: (isize, isize) = (-1, 0);
const EAST: (isize, isize) = (0, 1);
const SOUTH: (isize, isize) = (1, 0);
const WEST: (isize, isize) = (0, -1);

fn connections(pipe: u8) -> &'static [(isize, isize)] {
    match pipe {
        b'|' => &[NORTH, SOUTH],
        b'-' => &[EAST, WEST],
        b'L' => &[NORTH, EAST],
        b'J' => &[NORTH, WEST],
        b'7' => &[SOUTH, WEST],
        b'F' => &[SOUTH, EAST],
        _ => &[],
    }
}

/// The cells of the loop through `S`, in walking order.
fn main_loop(grid: &Grid<u8>) -> anyhow::Result<Vec<Pos>> {
    let start = grid.position(|&cell| cell == b'S').context("no start tile")?;
    let mut dir = [NORTH, EAST, SOUTH, WEST]
        .into_iter()
        .find(|&dir| {
            grid.step(start, dir, 1)
                .is_some_and(|next| connections(grid[next]).contains(&(-dir.0, -dir.1)))
        })
        .context("nothing connects to the start tile")?;

    let mut path = vec![start];
    let mut pos = start;
    loop {
        pos = grid.step(pos, dir, 1).context("the loop runs off the map")?;
        if pos == start {
            return Ok(path);
        }
        path.push(pos);
        let came_from = (-dir.0, -dir.1);
        dir = match connections(grid[pos]).iter().find(|&&d| d != came_from) {
            Some(&d) if connections(grid[pos]).contains(&came_from) => d,
            _ => bail!("pipe at {:?} does not continue the loop", pos),
        };
    }
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let grid = Grid::from_bytes(input)?;
    let path = main_loop(&grid)?;

    Ok(if part == 1 {
        path.len() / 2
    } else {
        // shoelace area, then Pick's theorem for the lattice points inside
        let twice_area = path
            .iter()
            .zip(path.iter().cycle().skip(1))
            .map(|(&(r1, c1), &(r2, c2))| r1 as isize * c2 as isize - r2 as isize * c1 as isize)
            .sum::<isize>()
            .unsigned_abs();
        (twice_area + 2 - path.len()) / 2
    }
    .to_string())
}
