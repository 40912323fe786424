//! Day 10: Syntax Scoring

use anyhow::bail;
use aoc_common::{check_part, Answer};

enum Line {
    Corrupted(u8),
    Incomplete(Vec<u8>),
}

fn closer(open: u8) -> Option<u8> {
    match open {
        b'(' => Some(b')'),
        b'[' => Some(b']'),
        b'{' => Some(b'}'),
        b'<' => Some(b'>'),
        _ => None,
    }
}

fn check(line: &str) -> anyhow::Result<Line> {
    let mut expected = vec![];
    for b in line.trim().bytes() {
        if let Some(close) = closer(b) {
            expected.push(close);
        } else if !matches!(b, b')' | b']' | b'}' | b'>') {
            bail!("unexpected {:?} in {:?}", b as char, line);
        } else if expected.pop() != Some(b) {
            return Ok(Line::Corrupted(b));
        }
    }
    expected.reverse();
    Ok(Line::Incomplete(expected))
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut error_score = 0;
    let mut completions = vec![];
    for line in input.trim().lines() {
        match check(line)? {
            Line::Corrupted(b) => {
                error_score += match b {
                    b')' => 3,
                    b']' => 57,
                    b'}' => 1197,
                    _ => 25137,
                }
            }
            Line::Incomplete(missing) if !missing.is_empty() => {
                completions.push(missing.iter().fold(0u64, |score, b| 5 * score + b" )]}>".iter().position(|c| c == b).unwrap_or(0) as u64));
            }
            Line::Incomplete(_) => (),
        }
    }
    if part == 1 {
        return Ok(error_score.to_string());
    }
    completions.sort_unstable();
    match completions.get(completions.len() / 2) {
        Some(middle) => Ok(middle.to_string()),
        None => bail!("no incomplete lines"),
    }
}
