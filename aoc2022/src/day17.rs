//! Day 17: Pyroclastic Flow

use anyhow::bail;
use aoc_common::{check_part, Answer};
use rustc_hash::FxHashMap;

/// Rows bottom first, bit 6 is the left wall side, spawned two from the left.
const ROCKS: [&[u8]; 5] = [
    &[0b0011110],
    &[0b0001000, 0b0011100, 0b0001000],
    &[0b0011100, 0b0000100, 0b0000100],
    &[0b0010000, 0b0010000, 0b0010000, 0b0010000],
    &[0b0011000, 0b0011000],
];

/// Rows of the surface used to recognise a repeating state.
const SURFACE: usize = 32;

fn fits(chamber: &[u8], rock: &[u8], y: usize) -> bool {
    rock.iter().enumerate().all(|(i, row)| chamber.get(y + i).map_or(true, |filled| filled & row == 0))
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let jets = input.trim().as_bytes();
    if jets.is_empty() || jets.iter().any(|jet| !matches!(jet, b'<' | b'>')) {
        bail!("jet pattern must be made of < and >");
    }
    let total: u64 = if part == 1 { 2022 } else { 1_000_000_000_000 };

    let mut chamber: Vec<u8> = vec![];
    let mut seen: FxHashMap<(usize, usize, Vec<u8>), (u64, usize)> = FxHashMap::default();
    let mut jet = 0;
    let mut skipped_height = 0;
    let mut dropped = 0;
    while dropped < total {
        let mut rock = ROCKS[(dropped % 5) as usize].to_vec();
        let mut y = chamber.len() + 3;
        loop {
            let shifted: Vec<u8> = match jets[jet] {
                b'<' if rock.iter().all(|row| row & 0b1000000 == 0) => rock.iter().map(|row| row << 1).collect(),
                b'>' if rock.iter().all(|row| row & 1 == 0) => rock.iter().map(|row| row >> 1).collect(),
                _ => rock.clone(),
            };
            jet = (jet + 1) % jets.len();
            if fits(&chamber, &shifted, y) {
                rock = shifted;
            }
            if y == 0 || !fits(&chamber, &rock, y - 1) {
                break;
            }
            y -= 1;
        }
        for (i, row) in rock.iter().enumerate() {
            if y + i >= chamber.len() {
                chamber.resize(y + i + 1, 0);
            }
            chamber[y + i] |= row;
        }
        dropped += 1;

        if skipped_height == 0 && chamber.len() >= SURFACE {
            let key = ((dropped % 5) as usize, jet, chamber[chamber.len() - SURFACE..].to_vec());
            if let Some(&(then_dropped, then_height)) = seen.get(&key) {
                let cycle = dropped - then_dropped;
                let repeats = (total - dropped) / cycle;
                skipped_height = repeats * (chamber.len() - then_height) as u64;
                dropped += repeats * cycle;
            } else {
                seen.insert(key, (dropped, chamber.len()));
            }
        }
    }
    Ok((chamber.len() as u64 + skipped_height).to_string())
}
