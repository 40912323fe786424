//! Day 3: Gear Ratios

use aoc_common::{check_part, Answer, Grid};
use rustc_hash::FxHashMap;

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let grid = Grid::from_bytes(input)?;
    let is_symbol = |b: u8| b != b'.' && !b.is_ascii_digit();

    let mut part_numbers = 0;
    let mut gears: FxHashMap<(usize, usize), Vec<u32>> = FxHashMap::default();
    for ri in 0..grid.rows() {
        let row = grid.row(ri);
        let mut ci = 0;
        while ci < row.len() {
            if !row[ci].is_ascii_digit() {
                ci += 1;
                continue;
            }
            let start = ci;
            let mut number = 0;
            while ci < row.len() && row[ci].is_ascii_digit() {
                number = number * 10 + (row[ci] - b'0') as u32;
                ci += 1;
            }

            let mut symbols: Vec<(usize, usize)> = (start..ci)
                .flat_map(|c| grid.neighbours8((ri, c)))
                .filter(|&pos| is_symbol(grid[pos]))
                .collect();
            symbols.sort_unstable();
            symbols.dedup();
            if !symbols.is_empty() {
                part_numbers += number;
            }
            for pos in symbols.into_iter().filter(|&pos| grid[pos] == b'*') {
                gears.entry(pos).or_default().push(number);
            }
        }
    }

    Ok(if part == 1 {
        part_numbers
    } else {
        gears.values().filter(|numbers| numbers.len() == 2).map(|numbers| numbers[0] * numbers[1]).sum::<u32>()
    }
    .to_string())
}
