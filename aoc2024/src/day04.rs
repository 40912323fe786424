//! Day 4: Ceres Search

use aoc_common::grid::Pos;
use aoc_common::{check_part, Answer, Grid};

const DIRS: [(isize, isize); 8] = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let grid = Grid::from_bytes(input)?;
    let at = |pos: Pos, dir: (isize, isize), n: isize| grid.step(pos, dir, n).map(|p| grid[p]);

    Ok(if part == 1 {
        grid.positions()
            .filter(|&pos| grid[pos] == b'X')
            .map(|pos| {
                DIRS.iter()
                    .filter(|&&dir| (1..4).all(|n| at(pos, dir, n) == Some(b"XMAS"[n as usize])))
                    .count()
            })
            .sum::<usize>()
    } else {
        let mas = |a: Option<u8>, b: Option<u8>| matches!((a, b), (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M')));
        grid.positions()
            .filter(|&pos| {
                grid[pos] == b'A'
                    && mas(at(pos, (-1, -1), 1), at(pos, (1, 1), 1))
                    && mas(at(pos, (-1, 1), 1), at(pos, (1, -1), 1))
            })
            .count()
    }
    .to_string())
}
