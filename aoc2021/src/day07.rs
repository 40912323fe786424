//! Day 7: The Treachery of Whales

use anyhow::Context;
use aoc_common::{check_part, parse::numbers, Answer};

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut crabs: Vec<i64> = numbers(input)?;
    crabs.sort_unstable();
    let (&lo, &hi) = crabs.first().zip(crabs.last()).context("no crabs")?;

    let fuel = |target: i64| -> i64 {
        crabs
            .iter()
            .map(|crab| {
                let d = (crab - target).abs();
                if part == 1 { d } else { d * (d + 1) / 2 }
            })
            .sum()
    };
    let best = if part == 1 { fuel(crabs[crabs.len() / 2]) } else { (lo..=hi).map(fuel).min().unwrap_or(0) };
    Ok(best.to_string())
}
