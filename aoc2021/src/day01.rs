//! Day 1: Sonar Sweep

use aoc_common::{check_part, parse::numbers, Answer};

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let depths: Vec<u32> = numbers(input)?;
    // sliding sums share all but their outer terms
    let gap = if part == 1 { 1 } else { 3 };
    let increases = depths.iter().zip(depths.iter().skip(gap)).filter(|(before, after)| after > before).count();
    Ok(increases.to_string())
}
