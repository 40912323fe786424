//! Day 22: Reactor Reboot
//!
//! The reactor is kept as a list of signed cuboids: turning a cuboid on or
//! off first cancels its overlap with every cuboid already counted.

use anyhow::{bail, Context};
use aoc_common::{check_part, parse::numbers_n, Answer};
use rustc_hash::FxHashMap;

/// Inclusive `[x1, x2, y1, y2, z1, z2]`.
type Cuboid = [i64; 6];

fn intersect(a: &Cuboid, b: &Cuboid) -> Option<Cuboid> {
    let mut out = [0; 6];
    for axis in 0..3 {
        out[2 * axis] = a[2 * axis].max(b[2 * axis]);
        out[2 * axis + 1] = a[2 * axis + 1].min(b[2 * axis + 1]);
        if out[2 * axis] > out[2 * axis + 1] {
            return None;
        }
    }
    Some(out)
}

fn volume(c: &Cuboid) -> i64 {
    (0..3).map(|axis| c[2 * axis + 1] - c[2 * axis] + 1).product()
}

const INITIALIZATION: Cuboid = [-50, 50, -50, 50, -50, 50];

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut counted: FxHashMap<Cuboid, i64> = FxHashMap::default();
    for line in input.trim().lines() {
        let (state, ranges) = line.split_once(' ').with_context(|| format!("cannot parse {:?}", line))?;
        let on = match state {
            "on" => true,
            "off" => false,
            _ => bail!("cannot parse {:?}", line),
        };
        let mut cuboid = numbers_n::<i64, 6>(ranges)?;
        if part == 1 {
            match intersect(&cuboid, &INITIALIZATION) {
                Some(inside) => cuboid = inside,
                None => continue,
            }
        }

        let mut updates: FxHashMap<Cuboid, i64> = FxHashMap::default();
        for (other, &sign) in &counted {
            if let Some(overlap) = intersect(&cuboid, other) {
                *updates.entry(overlap).or_default() -= sign;
            }
        }
        if on {
            *updates.entry(cuboid).or_default() += 1;
        }
        for (c, sign) in updates {
            *counted.entry(c).or_default() += sign;
        }
        counted.retain(|_, sign| *sign != 0);
    }
    Ok(counted.iter().map(|(c, sign)| sign * volume(c)).sum::<i64>().to_string())
}
