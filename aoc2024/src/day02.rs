//! Day 2: Red-Nosed Reports

use aoc_common::{check_part, parse::numbers, Answer};
use itertools::Itertools;

fn safe(levels: &[i32]) -> bool {
    let diffs: Vec<i32> = levels.iter().tuple_windows().map(|(x, y)| y - x).collect();
    diffs.iter().all(|d| (1..=3).contains(d)) || diffs.iter().all(|d| (-3..=-1).contains(d))
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let reports: Vec<Vec<i32>> = input.trim().lines().map(numbers::<i32>).collect::<Result<_, _>>()?;

    Ok(reports
        .iter()
        .filter(|levels| {
            safe(levels)
                || part == 2
                    && (0..levels.len()).any(|skip| {
                        let dampened: Vec<i32> =
                            levels.iter().enumerate().filter(|&(i, _)| i != skip).map(|(_, &x)| x).collect();
                        safe(&dampened)
                    })
        })
        .count()
        .to_string())
}
