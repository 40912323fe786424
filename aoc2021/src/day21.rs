//! Day 21: Dirac Dice

use anyhow::bail;
use aoc_common::{check_part, parse::numbers, Answer};
use rustc_hash::FxHashMap;

/// Ways three Dirac dice can sum to 3..=9.
const SPLITS: [(u32, u64); 7] = [(3, 1), (4, 3), (5, 6), (6, 7), (7, 6), (8, 3), (9, 1)];

fn advance(pos: u32, by: u32) -> u32 {
    (pos + by - 1) % 10 + 1
}

fn practice(mut pos: [u32; 2]) -> u64 {
    let mut score = [0; 2];
    let mut rolls = 0;
    let mut player = 0;
    loop {
        let moved = (0..3).map(|i| (rolls + i) % 100 + 1).sum::<u32>();
        rolls += 3;
        pos[player] = advance(pos[player], moved);
        score[player] += pos[player];
        if score[player] >= 1000 {
            return score[1 - player] as u64 * rolls as u64;
        }
        player = 1 - player;
    }
}

/// Universes in which the player about to move, and the other, win.
fn wins(state: (u32, u32, u32, u32), memo: &mut FxHashMap<(u32, u32, u32, u32), (u64, u64)>) -> (u64, u64) {
    if let Some(&known) = memo.get(&state) {
        return known;
    }
    let (pos, score, other_pos, other_score) = state;
    let mut total = (0, 0);
    for (moved, ways) in SPLITS {
        let pos = advance(pos, moved);
        if score + pos >= 21 {
            total.0 += ways;
        } else {
            let (theirs, mine) = wins((other_pos, other_score, pos, score + pos), memo);
            total.0 += ways * mine;
            total.1 += ways * theirs;
        }
    }
    memo.insert(state, total);
    total
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut start = [0; 2];
    for (i, line) in input.trim().lines().enumerate() {
        match (i, &numbers::<u32>(line)?[..]) {
            (0 | 1, &[_, pos]) if (1..=10).contains(&pos) => start[i] = pos,
            _ => bail!("cannot parse {:?}", line),
        }
    }
    if part == 1 {
        return Ok(practice(start).to_string());
    }
    let (first, second) = wins((start[0], 0, start[1], 0), &mut FxHashMap::default());
    Ok(first.max(second).to_string())
}
