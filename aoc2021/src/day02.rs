//! Day 2: Dive!

use anyhow::{bail, Context};
use aoc_common::{check_part, Answer};

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let (mut x, mut y, mut aim) = (0i64, 0i64, 0i64);
    for line in input.trim().lines() {
        let (word, num) = line.split_once(' ').with_context(|| format!("cannot parse {:?}", line))?;
        let num: i64 = num.parse()?;
        match (part, word) {
            (1, "forward") => x += num,
            (1, "down") => y += num,
            (1, "up") => y -= num,
            (_, "forward") => {
                x += num;
                y += num * aim;
            }
            (_, "down") => aim += num,
            (_, "up") => aim -= num,
            _ => bail!("unknown command {:?}", word),
        }
    }
    Ok((x * y).to_string())
}
