//! Day 8: Resonant Collinearity

use aoc_common::{check_part, Answer, Grid};
use itertools::Itertools;
use rustc_hash::FxHashMap;

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let grid = Grid::from_bytes(input)?;
    let mut freqs: FxHashMap<u8, Vec<(usize, usize)>> = FxHashMap::default();
    for pos in grid.positions().filter(|&pos| grid[pos].is_ascii_alphanumeric()) {
        freqs.entry(grid[pos]).or_default().push(pos);
    }

    let grid = &grid;
    Ok(freqs
        .values()
        .flat_map(|antennas| antennas.iter().permutations(2))
        .flat_map(move |pair| {
            let (a, b) = (*pair[0], *pair[1]);
            let delta = (a.0 as isize - b.0 as isize, a.1 as isize - b.1 as isize);
            let harmonics = if part == 1 { 1..2 } else { 0..isize::MAX };
            harmonics.map_while(move |n| grid.step(a, delta, n))
        })
        .unique()
        .count()
        .to_string())
}
