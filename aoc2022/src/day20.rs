//! Day 20: Grove Positioning System

use anyhow::{ensure, Context};
use aoc_common::{check_part, parse::numbers, Answer};

const DECRYPTION_KEY: i64 = 811_589_153;

/// Mixes `values` and sums the grove coordinates.
fn mix(values: &[i64], rounds: usize) -> anyhow::Result<i64> {
    let len = values.len();
    // order[pos] is the original index of the number now at pos
    let mut order: Vec<usize> = (0..len).collect();
    for _ in 0..rounds {
        for (i, &value) in values.iter().enumerate() {
            let at = order.iter().position(|&j| j == i).context("lost a number")?;
            order.remove(at);
            let to = (at as i64 + value).rem_euclid(len as i64 - 1) as usize;
            order.insert(to, i);
        }
    }
    let zero = values.iter().position(|&v| v == 0).context("no zero in the file")?;
    let at = order.iter().position(|&j| j == zero).context("lost the zero")?;
    Ok([1000, 2000, 3000].iter().map(|offset| values[order[(at + offset) % len]]).sum())
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut values: Vec<i64> = numbers(input)?;
    ensure!(values.len() >= 2, "nothing to mix");
    let rounds = if part == 1 {
        1
    } else {
        values.iter_mut().for_each(|v| *v *= DECRYPTION_KEY);
        10
    };
    Ok(mix(&values, rounds)?.to_string())
}
