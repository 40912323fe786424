//! Day 1: Calorie Counting

use aoc_common::{check_part, parse, Answer};

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut elves = parse::blocks(input)
        .map(|block| block.lines().map(|line| line.trim().parse::<u64>()).sum::<Result<u64, _>>())
        .collect::<Result<Vec<_>, _>>()?;
    elves.sort_unstable_by(|a, b| b.cmp(a));
    let top = if part == 1 { 1 } else { 3 };
    Ok(elves.iter().take(top).sum::<u64>().to_string())
}
