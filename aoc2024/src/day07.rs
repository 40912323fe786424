//! Day 7: Bridge Repair

use anyhow::Context;
use aoc_common::{check_part, Answer};

fn concat(left: u64, right: u64) -> u64 {
    let mut decade = 10;
    while decade <= right {
        decade *= 10;
    }
    left * decade + right
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut bfs = Vec::new();
    let mut new_bfs = Vec::new();
    let mut total = 0;
    for line in input.trim().lines() {
        let (goal, terms) = line.split_once(": ").with_context(|| format!("cannot parse {:?}", line))?;
        let goal: u64 = goal.parse()?;
        let terms = terms.split_whitespace().map(str::parse::<u64>).collect::<Result<Vec<_>, _>>()?;
        let Some((&first, rest)) = terms.split_first() else { continue };

        bfs.clear();
        bfs.push(first);
        for &term in rest {
            new_bfs.clear();
            for &r in &bfs {
                // operators never shrink the value, so anything past the goal is dead
                for next in [r + term, r * term] {
                    if next <= goal {
                        new_bfs.push(next);
                    }
                }
                if part == 2 && concat(r, term) <= goal {
                    new_bfs.push(concat(r, term));
                }
            }
            std::mem::swap(&mut new_bfs, &mut bfs);
        }
        if bfs.contains(&goal) {
            total += goal;
        }
    }
    Ok(total.to_string())
}
