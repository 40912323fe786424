//! Day 23: Unstable Diffusion

use anyhow::{bail, Context};
use aoc_common::{check_part, Answer};
use rustc_hash::{FxHashMap, FxHashSet};

type Pos = (i32, i32);

/// North, south, west, east: the cell moved to and the three that must be empty.
static PROPOSALS: [[Pos; 3]; 4] = [
    [(-1, 0), (-1, -1), (-1, 1)],
    [(1, 0), (1, -1), (1, 1)],
    [(0, -1), (-1, -1), (1, -1)],
    [(0, 1), (-1, 1), (1, 1)],
];

const AROUND: [Pos; 8] = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

/// Plays one round; returns whether any elf moved.
fn round(elves: &mut FxHashSet<Pos>, first: usize) -> bool {
    let free = |(r, c): Pos, (dr, dc): Pos| !elves.contains(&(r + dr, c + dc));
    let mut targets: FxHashMap<Pos, Vec<Pos>> = FxHashMap::default();
    for &elf in elves.iter() {
        if AROUND.iter().all(|&d| free(elf, d)) {
            continue;
        }
        let proposal = (0..4)
            .map(|i| &PROPOSALS[(first + i) % 4])
            .find(|checks| checks.iter().all(|&d| free(elf, d)));
        if let Some(&[(dr, dc), ..]) = proposal {
            targets.entry((elf.0 + dr, elf.1 + dc)).or_default().push(elf);
        }
    }

    let mut moved = false;
    for (target, from) in targets {
        if let [elf] = from[..] {
            elves.remove(&elf);
            elves.insert(target);
            moved = true;
        }
    }
    moved
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut elves = FxHashSet::default();
    for (r, line) in input.trim().lines().enumerate() {
        for (c, b) in line.trim().bytes().enumerate() {
            match b {
                b'#' => {
                    elves.insert((r as i32, c as i32));
                }
                b'.' => (),
                _ => bail!("unexpected {:?} in the grove", b as char),
            }
        }
    }

    if part == 1 {
        for first in 0..10 {
            round(&mut elves, first % 4);
        }
        let rows = elves.iter().map(|e| e.0).max().context("no elves")? - elves.iter().map(|e| e.0).min().context("no elves")? + 1;
        let cols = elves.iter().map(|e| e.1).max().context("no elves")? - elves.iter().map(|e| e.1).min().context("no elves")? + 1;
        return Ok((rows * cols - elves.len() as i32).to_string());
    }

    let mut rounds = 1;
    while round(&mut elves, (rounds - 1) % 4) {
        rounds += 1;
    }
    Ok(rounds.to_string())
}
