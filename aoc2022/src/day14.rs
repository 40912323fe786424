//! Day 14: Regolith Reservoir

use anyhow::{bail, Context};
use aoc_common::{check_part, parse::numbers, Answer};
use bitvec::prelude::*;
use itertools::Itertools;

const WIDTH: usize = 1000;

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut paths = vec![];
    for line in input.trim().lines() {
        let points: Vec<usize> = numbers(line)?;
        if points.len() < 2 || points.len() % 2 != 0 || points.iter().step_by(2).any(|&x| x >= WIDTH) {
            bail!("cannot parse path {:?}", line);
        }
        paths.push(points);
    }
    let lowest = paths.iter().flat_map(|points| points.iter().skip(1).step_by(2)).max().copied().context("no rock")?;
    let floor = lowest + 2;

    let mut blocked = bitvec![0; WIDTH * (floor + 1)];
    for points in &paths {
        for ((x1, y1), (x2, y2)) in points.iter().copied().tuples().tuple_windows() {
            for x in x1.min(x2)..=x1.max(x2) {
                for y in y1.min(y2)..=y1.max(y2) {
                    blocked.set(y * WIDTH + x, true);
                }
            }
        }
    }
    if part == 2 {
        blocked[floor * WIDTH..].fill(true);
    }

    let mut resting = 0;
    // the path of the previous grain, reused so each grain starts where the last one diverged
    let mut trail = vec![(500, 0)];
    while let Some(&(mut x, mut y)) = trail.last() {
        if blocked[y * WIDTH + x] {
            trail.pop();
            continue;
        }
        loop {
            if y == lowest + 1 && part == 1 {
                return Ok(resting.to_string());
            }
            let Some(next) = [x, x.wrapping_sub(1), x + 1]
                .into_iter()
                .find(|&nx| nx < WIDTH && !blocked[(y + 1) * WIDTH + nx])
            else {
                break;
            };
            trail.push((next, y + 1));
            (x, y) = (next, y + 1);
        }
        blocked.set(y * WIDTH + x, true);
        trail.pop();
        resting += 1;
    }
    Ok(resting.to_string())
}
