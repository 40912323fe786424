//! Day 3: Rucksack Reorganization

use anyhow::{bail, ensure};
use aoc_common::{check_part, Answer};
use itertools::Itertools;

/// Bit `p` set for every item of priority `p`.
fn items(s: &str) -> anyhow::Result<u64> {
    s.bytes().try_fold(0, |set, b| {
        let priority = match b {
            b'a'..=b'z' => b - b'a' + 1,
            b'A'..=b'Z' => b - b'A' + 27,
            _ => bail!("unexpected item {:?}", b as char),
        };
        Ok(set | 1 << priority)
    })
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let lines: Vec<&str> = input.trim().lines().map(str::trim).collect();
    let shared: Vec<u64> = if part == 1 {
        lines
            .iter()
            .map(|line| -> anyhow::Result<u64> {
                let (left, right) = line.split_at(line.len() / 2);
                Ok(items(left)? & items(right)?)
            })
            .collect::<anyhow::Result<_>>()?
    } else {
        ensure!(lines.len() % 3 == 0, "{} rucksacks do not split into groups of three", lines.len());
        lines
            .iter()
            .tuples()
            .map(|(a, b, c)| -> anyhow::Result<u64> { Ok(items(a)? & items(b)? & items(c)?) })
            .collect::<anyhow::Result<_>>()?
    };
    Ok(shared.iter().map(|set| set.trailing_zeros() % 64).sum::<u32>().to_string())
}
