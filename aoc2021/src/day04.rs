//! Day 4: Giant Squid

use anyhow::{ensure, Context};
use aoc_common::{check_part, parse, Answer};

/// Marked-cell masks of every row and column of a 5x5 board.
const LINES: [u32; 10] = [
    0b_00000_00000_00000_00000_11111,
    0b_00000_00000_00000_11111_00000,
    0b_00000_00000_11111_00000_00000,
    0b_00000_11111_00000_00000_00000,
    0b_11111_00000_00000_00000_00000,
    0b_00001_00001_00001_00001_00001,
    0b_00010_00010_00010_00010_00010,
    0b_00100_00100_00100_00100_00100,
    0b_01000_01000_01000_01000_01000,
    0b_10000_10000_10000_10000_10000,
];

/// Draw index at which `board` wins and its score then.
fn play(board: &[u32], draws: &[u32]) -> Option<(usize, u32)> {
    let mut marked = 0u32;
    for (t, &draw) in draws.iter().enumerate() {
        let Some(ix) = board.iter().position(|&b| b == draw) else { continue };
        marked |= 1 << ix;
        if LINES.iter().any(|&line| marked & line == line) {
            let unmarked: u32 = (0..25).filter(|ix| marked & 1 << ix == 0).map(|ix| board[ix]).sum();
            return Some((t, unmarked * draw));
        }
    }
    None
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut blocks = parse::blocks(input);
    let draws: Vec<u32> = parse::numbers(blocks.next().context("no draws")?)?;

    let mut wins = vec![];
    for block in blocks {
        let board: Vec<u32> = parse::numbers(block)?;
        ensure!(board.len() == 25, "boards must be 5 by 5");
        wins.extend(play(&board, &draws));
    }
    let (_, score) = if part == 1 { wins.iter().min() } else { wins.iter().max() }.context("no board ever wins")?;
    Ok(score.to_string())
}
