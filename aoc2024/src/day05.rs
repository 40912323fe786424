//! Day 5: Print Queue

use anyhow::{bail, Context};
use aoc_common::{check_part, Answer};
use bitvec::prelude::*;

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut lines = input.trim().lines();
    // rules[100 * x + y]: x must be printed before y
    let mut rules = bitarr![0; 10000];
    for line in lines.by_ref().take_while(|line| !line.trim().is_empty()) {
        let Some((x, y)) = line.split_once('|') else { bail!("cannot parse rule {:?}", line) };
        let (x, y): (usize, usize) = (x.parse()?, y.parse()?);
        if x >= 100 || y >= 100 {
            bail!("page number out of range in {:?}", line);
        }
        rules.set(100 * x + y, true);
    }

    let mut total = 0;
    for line in lines {
        let update = line
            .split(',')
            .map(|s| s.parse::<usize>().ok().filter(|&page| page < 100))
            .collect::<Option<Vec<_>>>()
            .with_context(|| format!("cannot parse update {:?}", line))?;
        let ordered = (0..update.len()).all(|x| (x + 1..update.len()).all(|y| !rules[100 * update[y] + update[x]]));

        if part == 1 && ordered {
            total += update[update.len() / 2];
        } else if part == 2 && !ordered {
            let mut unsorted = update.clone();
            let mut sorted = Vec::with_capacity(unsorted.len());
            while !unsorted.is_empty() {
                let first = unsorted
                    .iter()
                    .position(|&x| unsorted.iter().all(|&y| !rules[100 * y + x]))
                    .with_context(|| format!("rules for {:?} contain a cycle", line))?;
                sorted.push(unsorted.swap_remove(first));
            }
            total += sorted[sorted.len() / 2];
        }
    }
    Ok(total.to_string())
}
