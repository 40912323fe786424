//! Day 10: Cathode-Ray Tube
//!
//! Part two draws letters; the answer is the six rendered screen rows.

use anyhow::bail;
use aoc_common::{check_part, Answer};

/// Value of X during each cycle, in order.
fn register(input: &str) -> anyhow::Result<Vec<i64>> {
    let mut x = 1;
    let mut during = vec![];
    for line in input.trim().lines() {
        match line.split_whitespace().collect::<Vec<_>>()[..] {
            ["noop"] => during.push(x),
            ["addx", n] => {
                during.extend([x, x]);
                x += n.parse::<i64>()?;
            }
            _ => bail!("unknown instruction {:?}", line),
        }
    }
    Ok(during)
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let during = register(input)?;
    if part == 1 {
        let strength: i64 = (20..=220)
            .step_by(40)
            .filter_map(|cycle| during.get(cycle as usize - 1).map(|x| cycle * x))
            .sum();
        return Ok(strength.to_string());
    }

    let rows: Vec<String> = during
        .chunks(40)
        .take(6)
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(col, x)| if (col as i64 - x).abs() <= 1 { '#' } else { '.' })
                .collect()
        })
        .collect();
    Ok(rows.join("\n"))
}
