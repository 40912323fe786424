//! Day 7: No Space Left On Device

use anyhow::{bail, Context};
use aoc_common::{check_part, Answer};

const DISK: u64 = 70_000_000;
const NEEDED: u64 = 30_000_000;

/// Sizes of every directory, the root last.
fn directory_sizes(input: &str) -> anyhow::Result<Vec<u64>> {
    let mut sizes = vec![];
    // sizes of the directories from the root down to the current one
    let mut path: Vec<u64> = vec![];
    for line in input.trim().lines() {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words[..] {
            ["$", "cd", "/"] => {
                while path.len() > 1 {
                    close(&mut path, &mut sizes);
                }
                if path.is_empty() {
                    path.push(0);
                }
            }
            ["$", "cd", ".."] => {
                if path.len() < 2 {
                    bail!("cd .. above the root");
                }
                close(&mut path, &mut sizes);
            }
            ["$", "cd", _] => path.push(0),
            ["$", "ls"] | ["dir", _] => (),
            [size, _] => {
                let size: u64 = size.parse().with_context(|| format!("cannot parse {:?}", line))?;
                *path.last_mut().context("listing before cd /")? += size;
            }
            _ => bail!("cannot parse {:?}", line),
        }
    }
    while !path.is_empty() {
        close(&mut path, &mut sizes);
    }
    Ok(sizes)
}

fn close(path: &mut Vec<u64>, sizes: &mut Vec<u64>) {
    if let Some(size) = path.pop() {
        sizes.push(size);
        if let Some(parent) = path.last_mut() {
            *parent += size;
        }
    }
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let sizes = directory_sizes(input)?;
    let &root = sizes.last().context("no directories")?;
    Ok(if part == 1 {
        sizes.iter().filter(|&&size| size <= 100_000).sum::<u64>()
    } else {
        let missing = (NEEDED + root).saturating_sub(DISK);
        *sizes.iter().filter(|&&size| size >= missing).min().context("no directory frees enough")?
    }
    .to_string())
}
