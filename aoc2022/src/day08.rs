//! Day 8: Treetop Tree House

use aoc_common::grid::Pos;
use aoc_common::{check_part, Answer, Grid};

const DIRS: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let grid = &Grid::digits(input)?;
    // trees from `pos` outwards in `dir`, nearest first
    let line_of_sight =
        |pos: Pos, dir: (isize, isize)| (1..).map_while(move |n| grid.step(pos, dir, n)).map(move |p| grid[p]);

    Ok(if part == 1 {
        grid.positions()
            .filter(|&pos| DIRS.iter().any(|&dir| line_of_sight(pos, dir).all(|tree| tree < grid[pos])))
            .count()
    } else {
        grid.positions()
            .map(|pos| {
                DIRS.iter()
                    .map(|&dir| {
                        let mut seen = 0;
                        for tree in line_of_sight(pos, dir) {
                            seen += 1;
                            if tree >= grid[pos] {
                                break;
                            }
                        }
                        seen
                    })
                    .product::<usize>()
            })
            .max()
            .unwrap_or(0)
    }
    .to_string())
}
