//! Day 4: Scratchcards

use anyhow::Context;
use aoc_common::{check_part, parse::numbers, Answer};

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut matches = vec![];
    for line in input.trim().lines() {
        let (_, card) = line.split_once(':').with_context(|| format!("cannot parse {:?}", line))?;
        let (winning, have) = card.split_once('|').with_context(|| format!("cannot parse {:?}", line))?;
        let winning: Vec<u32> = numbers(winning)?;
        let have: Vec<u32> = numbers(have)?;
        matches.push(have.iter().filter(|n| winning.contains(*n)).count());
    }

    Ok(if part == 1 {
        matches.iter().filter(|&&n| n > 0).map(|&n| 1 << (n - 1)).sum::<usize>()
    } else {
        let mut copies = vec![1; matches.len()];
        for (card, &n) in matches.iter().enumerate() {
            for next in card + 1..(card + 1 + n).min(matches.len()) {
                copies[next] += copies[card];
            }
        }
        copies.iter().sum::<usize>()
    }
    .to_string())
}
