//! Day 6: Tuning Trouble

use anyhow::Context;
use aoc_common::{check_part, Answer};

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let size = if part == 1 { 4 } else { 14 };
    let marker = input
        .trim()
        .as_bytes()
        .windows(size)
        .position(|window| window.iter().fold(0u32, |set, b| set | 1 << (b & 31)).count_ones() as usize == size)
        .context("no marker in the datastream")?;
    Ok((marker + size).to_string())
}
