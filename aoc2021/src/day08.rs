//! Day 8: Seven Segment Search
//!
//! Across the ten patterns each segment lights a fixed number of times, so
//! summing those counts over a digit's segments identifies the digit.

use anyhow::{ensure, Context};
use aoc_common::{check_part, Answer};

/// Digit for each segment-count signature.
const SIGNATURES: [(u32, u32); 10] =
    [(42, 0), (17, 1), (34, 2), (39, 3), (30, 4), (37, 5), (41, 6), (25, 7), (49, 8), (45, 9)];

fn segments(word: &str) -> impl Iterator<Item = usize> + '_ {
    word.bytes().map(|b| (b - b'a') as usize)
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut total = 0;
    for line in input.trim().lines() {
        let (patterns, output) = line.split_once(" | ").with_context(|| format!("cannot parse {:?}", line))?;
        ensure!(
            line.bytes().all(|b| matches!(b, b'a'..=b'g' | b' ' | b'|')),
            "unexpected segment in {:?}",
            line
        );
        if part == 1 {
            total += output.split_whitespace().filter(|word| matches!(word.len(), 2 | 3 | 4 | 7)).count() as u32;
            continue;
        }

        let mut lit = [0u32; 7];
        patterns.split_whitespace().flat_map(segments).for_each(|seg| lit[seg] += 1);
        let mut value = 0;
        for word in output.split_whitespace() {
            let signature: u32 = segments(word).map(|seg| lit[seg]).sum();
            let &(_, digit) =
                SIGNATURES.iter().find(|&&(sig, _)| sig == signature).with_context(|| format!("cannot read {:?}", word))?;
            value = value * 10 + digit;
        }
        total += value;
    }
    Ok(total.to_string())
}
