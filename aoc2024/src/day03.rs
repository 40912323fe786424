//! Day 3: Mull It Over

use aoc_common::{check_part, Answer};
use regex::Regex;

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut enabled = true;
    let mut total = 0u64;
    for m in Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)")?.captures_iter(input) {
        match &m[0] {
            "do()" => enabled = true,
            "don't()" => enabled = part == 1,
            _ if enabled => total += m[1].parse::<u64>()? * m[2].parse::<u64>()?,
            _ => (),
        }
    }
    Ok(total.to_string())
}
