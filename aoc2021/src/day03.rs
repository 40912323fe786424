//! Day 3: Binary Diagnostic

use anyhow::{bail, ensure};
use aoc_common::{check_part, Answer};

/// Keeps the numbers matching the most (or least) common bit, one position
/// at a time, until one is left.
fn rating(mut numbers: Vec<&str>, most_common: bool) -> anyhow::Result<u64> {
    let width = numbers.first().map_or(0, |n| n.len());
    for ix in 0..width {
        if numbers.len() == 1 {
            break;
        }
        let ones = numbers.iter().filter(|n| n.as_bytes()[ix] == b'1').count();
        let keep = if (2 * ones >= numbers.len()) == most_common { b'1' } else { b'0' };
        numbers.retain(|n| n.as_bytes()[ix] == keep);
    }
    match numbers[..] {
        [number] => Ok(u64::from_str_radix(number, 2)?),
        _ => bail!("{} numbers left after filtering", numbers.len()),
    }
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let numbers: Vec<&str> = input.trim().lines().map(str::trim).collect();
    let width = numbers.first().map_or(0, |n| n.len());
    ensure!(width > 0 && width < 64, "report lines must be 1 to 63 bits");
    ensure!(
        numbers.iter().all(|n| n.len() == width && n.bytes().all(|b| b == b'0' || b == b'1')),
        "report lines must be binary numbers of equal width"
    );

    if part == 1 {
        let gamma = (0..width).fold(0u64, |gamma, ix| {
            let ones = numbers.iter().filter(|n| n.as_bytes()[ix] == b'1').count();
            2 * gamma + (2 * ones >= numbers.len()) as u64
        });
        let epsilon = (1 << width) - 1 - gamma;
        return Ok((gamma * epsilon).to_string());
    }
    Ok((rating(numbers.clone(), true)? * rating(numbers, false)?).to_string())
}
