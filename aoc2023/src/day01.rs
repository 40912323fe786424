//! Day 1: Trebuchet?!

use anyhow::Context;
use aoc_common::{check_part, Answer};

const WORDS: [&str; 9] = ["one", "two", "three", "four", "five", "six", "seven", "eight", "nine"];

/// Digit starting at the beginning of `s`, spelled-out ones only in part two.
fn digit_at(part: u8, s: &str) -> Option<u32> {
    let first = s.chars().next()?;
    first.to_digit(10).or_else(|| {
        (part == 2).then(|| WORDS.iter().position(|&word| s.starts_with(word)))?.map(|i| i as u32 + 1)
    })
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut total = 0;
    for line in input.trim().lines() {
        let mut digits = (0..line.len()).filter_map(|i| line.get(i..).and_then(|rest| digit_at(part, rest)));
        let first = digits.next().with_context(|| format!("no digit in {:?}", line))?;
        let last = digits.last().unwrap_or(first);
        total += 10 * first + last;
    }
    Ok(total.to_string())
}
