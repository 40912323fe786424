//! Day 9: Rope Bridge

use anyhow::{bail, Context};
use aoc_common::{check_part, Answer};
use rustc_hash::FxHashSet;

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut rope = vec![(0i32, 0i32); if part == 1 { 2 } else { 10 }];
    let mut visited = FxHashSet::default();
    visited.insert((0, 0));

    for line in input.trim().lines() {
        let (dir, steps) = line.split_once(' ').with_context(|| format!("cannot parse {:?}", line))?;
        let (dx, dy) = match dir {
            "R" => (1, 0),
            "L" => (-1, 0),
            "U" => (0, 1),
            "D" => (0, -1),
            _ => bail!("unknown direction in {:?}", line),
        };
        for _ in 0..steps.trim().parse::<u32>()? {
            rope[0].0 += dx;
            rope[0].1 += dy;
            for i in 1..rope.len() {
                let (hx, hy) = rope[i - 1];
                let knot = &mut rope[i];
                if (hx - knot.0).abs() > 1 || (hy - knot.1).abs() > 1 {
                    knot.0 += (hx - knot.0).signum();
                    knot.1 += (hy - knot.1).signum();
                }
            }
            if let Some(&tail) = rope.last() {
                visited.insert(tail);
            }
        }
    }
    Ok(visited.len().to_string())
}
