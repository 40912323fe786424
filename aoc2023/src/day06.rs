//! Day 6: Wait For It

use anyhow::{ensure, Context};
use aoc_common::{check_part, parse::numbers, Answer};

/// Hold times `t` with `t * (time - t) > record`. The distance is symmetric
/// around `time / 2`, so it is enough to find the shortest winning hold.
fn ways_to_win(time: u64, record: u64) -> u64 {
    let (mut lo, mut hi) = (0, time / 2 + 1);
    while lo < hi {
        let mid = (lo + hi) / 2;
        if mid * (time - mid) > record { hi = mid } else { lo = mid + 1 }
    }
    if lo > time / 2 { 0 } else { time - 2 * lo + 1 }
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut lines = input.trim().lines();
    let (times, records) = (lines.next().context("no times")?, lines.next().context("no distances")?);

    Ok(if part == 1 {
        let times: Vec<u64> = numbers(times)?;
        let records: Vec<u64> = numbers(records)?;
        ensure!(times.len() == records.len(), "{} times but {} distances", times.len(), records.len());
        times.iter().zip(&records).map(|(&time, &record)| ways_to_win(time, record)).product::<u64>()
    } else {
        // the kerning was wrong: one race
        let joined = |line: &str| line.chars().filter(char::is_ascii_digit).collect::<String>().parse::<u64>();
        ways_to_win(joined(times)?, joined(records)?)
    }
    .to_string())
}
