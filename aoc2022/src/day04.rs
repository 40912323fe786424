//! Day 4: Camp Cleanup

use aoc_common::{check_part, parse::numbers_n, Answer};

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut count = 0;
    for line in input.trim().lines() {
        // no negatives here, so the dashes are separators
        let [a, b, c, d] = numbers_n::<u32, 4>(&line.replace('-', " "))?;
        let hit = if part == 1 { a <= c && d <= b || c <= a && b <= d } else { a <= d && c <= b };
        count += hit as u32;
    }
    Ok(count.to_string())
}
