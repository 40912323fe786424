//! Day 6: Lanternfish

use anyhow::ensure;
use aoc_common::{check_part, parse::numbers, Answer};

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut timers = [0u64; 9];
    for timer in numbers::<usize>(input)? {
        ensure!(timer < 9, "timer {} out of range", timer);
        timers[timer] += 1;
    }
    let days = if part == 1 { 80 } else { 256 };
    for _ in 0..days {
        // parents restart at 6, newborns start at 8
        timers.rotate_left(1);
        timers[6] += timers[8];
    }
    Ok(timers.iter().sum::<u64>().to_string())
}
