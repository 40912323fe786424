//! Day 10: Hoof It

use aoc_common::{check_part, Answer, Grid};
use rustc_hash::FxHashSet;

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let grid = Grid::digits(input)?;

    // trails[pos]: number of distinct ways up to a summit
    let mut trails = Grid::new(grid.rows(), grid.cols(), 0usize);
    let mut summits: Grid<FxHashSet<(usize, usize)>> = Grid::new(grid.rows(), grid.cols(), FxHashSet::default());
    for height in (0..=9).rev() {
        for pos in grid.positions().filter(|&pos| grid[pos] == height) {
            if height == 9 {
                trails[pos] = 1;
                summits[pos].insert(pos);
                continue;
            }
            for next in grid.neighbours4(pos).filter(|&next| grid[next] == height + 1) {
                let ways = trails[next];
                trails[pos] += ways;
                let reachable = summits[next].clone();
                summits[pos].extend(reachable);
            }
        }
    }

    let trailheads = grid.positions().filter(|&pos| grid[pos] == 0);
    Ok(if part == 1 {
        trailheads.map(|pos| summits[pos].len()).sum::<usize>()
    } else {
        trailheads.map(|pos| trails[pos]).sum::<usize>()
    }
    .to_string())
}
