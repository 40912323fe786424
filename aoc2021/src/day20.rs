//! Day 20: Trench Map

use anyhow::{ensure, Context};
use aoc_common::{check_part, parse, Answer, Grid};
use bitvec::prelude::*;

struct Image {
    lit: Grid<bool>,
    /// State of every pixel beyond the grid, which flips when rule 0 lights pixels.
    background: bool,
}

impl Image {
    fn pixel(&self, r: isize, c: isize) -> bool {
        if r < 0 || c < 0 {
            return self.background;
        }
        self.lit.get((r as usize, c as usize)).copied().unwrap_or(self.background)
    }

    fn enhance(&self, rules: &BitSlice) -> Image {
        let mut lit = Grid::new(self.lit.rows() + 2, self.lit.cols() + 2, false);
        for pos @ (r, c) in lit.positions().collect::<Vec<_>>() {
            let (r, c) = (r as isize - 1, c as isize - 1);
            let index = (-1..=1)
                .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
                .fold(0, |index, (dr, dc)| index << 1 | self.pixel(r + dr, c + dc) as usize);
            lit[pos] = rules[index];
        }
        let background = rules[if self.background { 511 } else { 0 }];
        Image { lit, background }
    }
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut blocks = parse::blocks(input);
    let rules: BitVec = blocks.next().context("no enhancement rules")?.trim().bytes().map(|b| b == b'#').collect();
    ensure!(rules.len() == 512, "expected 512 enhancement rules, found {}", rules.len());
    let lit = Grid::parse(blocks.next().context("no image")?, |b| Ok(b == b'#'))?;

    let mut image = Image { lit, background: false };
    let steps = if part == 1 { 2 } else { 50 };
    for _ in 0..steps {
        image = image.enhance(&rules);
    }
    ensure!(!image.background, "infinitely many pixels are lit");
    Ok(image.lit.iter().filter(|&&px| px).count().to_string())
}
