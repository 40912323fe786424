//! Day 2: Rock Paper Scissors

use anyhow::bail;
use aoc_common::{check_part, Answer};

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut score = 0;
    for line in input.trim().lines() {
        let &[them, b' ', col] = line.trim().as_bytes() else { bail!("cannot parse round {:?}", line) };
        if !(b'A'..=b'C').contains(&them) || !(b'X'..=b'Z').contains(&col) {
            bail!("cannot parse round {:?}", line);
        }
        // shapes 0..3, each beats the one before it
        let them = (them - b'A') as u32;
        let col = (col - b'X') as u32;
        let (mine, outcome) = if part == 1 {
            (col, (col + 4 - them) % 3)
        } else {
            ((them + col + 2) % 3, col)
        };
        score += mine + 1 + 3 * outcome;
    }
    Ok(score.to_string())
}
