//! Day 14: Extended Polymerization

use anyhow::{bail, Context};
use aoc_common::{check_part, Answer};
use rustc_hash::FxHashMap;

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut lines = input.trim().lines();
    let template = lines.next().context("no template")?.trim().as_bytes();
    let mut rules: FxHashMap<(u8, u8), u8> = FxHashMap::default();
    for line in lines.map(str::trim).filter(|line| !line.is_empty()) {
        let &[a, b, b' ', b'-', b'>', b' ', c] = line.as_bytes() else { bail!("cannot parse rule {:?}", line) };
        rules.insert((a, b), c);
    }

    // only the pair counts matter, not their order
    let mut pairs: FxHashMap<(u8, u8), u64> = FxHashMap::default();
    for pair in template.windows(2) {
        *pairs.entry((pair[0], pair[1])).or_default() += 1;
    }
    let steps = if part == 1 { 10 } else { 40 };
    for _ in 0..steps {
        let mut next = FxHashMap::default();
        for (&(a, b), &n) in &pairs {
            match rules.get(&(a, b)) {
                Some(&c) => {
                    *next.entry((a, c)).or_default() += n;
                    *next.entry((c, b)).or_default() += n;
                }
                None => *next.entry((a, b)).or_default() += n,
            }
        }
        pairs = next;
    }

    // each element is the second of a pair, except the fixed first one
    let mut counts: FxHashMap<u8, u64> = FxHashMap::default();
    counts.insert(*template.first().context("empty template")?, 1);
    for (&(_, b), &n) in &pairs {
        *counts.entry(b).or_default() += n;
    }
    let most = counts.values().max().copied().unwrap_or(0);
    let least = counts.values().min().copied().unwrap_or(0);
    Ok((most - least).to_string())
}
