//! Day 13: Transparent Origami
//!
//! Part two prints the folded paper as rows of `#` and `.`.

use anyhow::{bail, Context};
use aoc_common::{check_part, parse, Answer};
use itertools::Itertools;
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Copy)]
enum Fold {
    X(u32),
    Y(u32),
}

impl Fold {
    fn apply(self, (x, y): (u32, u32)) -> (u32, u32) {
        let mirror = |v: u32, at: u32| if v > at { 2 * at - v } else { v };
        match self {
            Fold::X(at) => (mirror(x, at), y),
            Fold::Y(at) => (x, mirror(y, at)),
        }
    }
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut dots = FxHashSet::default();
    let mut folds = vec![];
    for line in input.trim().lines().map(str::trim).filter(|line| !line.is_empty()) {
        if let Some(fold) = line.strip_prefix("fold along ") {
            folds.push(match fold.split_once('=') {
                Some(("x", at)) => Fold::X(at.parse()?),
                Some(("y", at)) => Fold::Y(at.parse()?),
                _ => bail!("cannot parse {:?}", line),
            });
        } else {
            let [x, y] = parse::numbers_n::<u32, 2>(line)?;
            dots.insert((x, y));
        }
    }
    let first = *folds.first().context("no folds")?;

    if part == 1 {
        return Ok(dots.iter().map(|&dot| first.apply(dot)).unique().count().to_string());
    }
    let dots: FxHashSet<_> = dots.into_iter().map(|dot| folds.iter().fold(dot, |dot, fold| fold.apply(dot))).collect();

    // the last fold along each axis sets the paper size
    let width = folds.iter().rev().find_map(|f| if let Fold::X(at) = f { Some(*at) } else { None });
    let height = folds.iter().rev().find_map(|f| if let Fold::Y(at) = f { Some(*at) } else { None });
    let width = width.unwrap_or_else(|| dots.iter().map(|d| d.0 + 1).max().unwrap_or(0));
    let height = height.unwrap_or_else(|| dots.iter().map(|d| d.1 + 1).max().unwrap_or(0));
    Ok((0..height)
        .map(|y| (0..width).map(|x| if dots.contains(&(x, y)) { '#' } else { '.' }).collect::<String>())
        .join("\n"))
}
