//! Day 1: Historian Hysteria

use std::iter::zip;

use anyhow::Context;
use aoc_common::{check_part, Answer};
use rustc_hash::FxHashMap;

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut lefts: Vec<i64> = vec![];
    let mut rights: Vec<i64> = vec![];
    for line in input.trim().lines() {
        let Some((left, right)) = line.split_once(char::is_whitespace) else {
            anyhow::bail!("cannot parse {:?} as two numbers", line)
        };
        lefts.push(left.parse().with_context(|| format!("bad number in {:?}", line))?);
        rights.push(right.trim().parse().with_context(|| format!("bad number in {:?}", line))?);
    }

    Ok(if part == 1 {
        lefts.sort_unstable();
        rights.sort_unstable();
        zip(lefts, rights).map(|(left, right)| (left - right).abs()).sum::<i64>()
    } else {
        let mut counts: FxHashMap<i64, i64> = FxHashMap::default();
        for right in rights {
            *counts.entry(right).or_default() += 1;
        }
        lefts.iter().map(|left| left * counts.get(left).unwrap_or(&0)).sum::<i64>()
    }
    .to_string())
}
