//! Day 24: Blizzard Basin

use anyhow::{bail, ensure, Context};
use aoc_common::{check_part, Answer, Grid};
use rustc_hash::FxHashSet;

type Pos = (usize, usize);

struct Valley {
    grid: Grid<u8>,
    start: Pos,
    end: Pos,
}

impl Valley {
    fn parse(input: &str) -> anyhow::Result<Self> {
        let grid = Grid::from_bytes(input)?;
        ensure!(grid.rows() >= 3 && grid.cols() >= 3, "valley too small");
        if let Some(bad) = grid.iter().find(|&&b| !matches!(b, b'#' | b'.' | b'<' | b'>' | b'^' | b'v')) {
            bail!("unexpected {:?} in the valley", *bad as char);
        }
        let gap = |ri: usize| grid.row(ri).iter().position(|&b| b == b'.').map(|ci| (ri, ci));
        let start = gap(0).context("no entrance")?;
        let end = gap(grid.rows() - 1).context("no exit")?;
        Ok(Valley { grid, start, end })
    }

    /// Whether a blizzard covers the inner cell `(r, c)` after `t` minutes.
    fn stormy(&self, (r, c): Pos, t: usize) -> bool {
        let (h, w) = (self.grid.rows() - 2, self.grid.cols() - 2);
        let (r, c) = (r - 1, c - 1);
        let (tr, tc) = (t % h, t % w);
        self.grid[(1 + (r + tr) % h, 1 + c)] == b'^'
            || self.grid[(1 + (r + h - tr) % h, 1 + c)] == b'v'
            || self.grid[(1 + r, 1 + (c + tc) % w)] == b'<'
            || self.grid[(1 + r, 1 + (c + w - tc) % w)] == b'>'
    }

    fn open(&self, pos: Pos, t: usize) -> bool {
        pos == self.start
            || pos == self.end
            || (1..self.grid.rows() - 1).contains(&pos.0) && (1..self.grid.cols() - 1).contains(&pos.1) && !self.stormy(pos, t)
    }

    /// Minute of arrival at `to` leaving `from` at minute `t`.
    fn cross(&self, from: Pos, to: Pos, mut t: usize) -> anyhow::Result<usize> {
        let mut reachable = FxHashSet::from_iter([from]);
        while !reachable.contains(&to) {
            ensure!(!reachable.is_empty(), "the blizzards leave no way through");
            t += 1;
            reachable = reachable
                .iter()
                .flat_map(|&pos| std::iter::once(pos).chain(self.grid.neighbours4(pos)))
                .filter(|&pos| self.open(pos, t))
                .collect();
        }
        Ok(t)
    }
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let valley = Valley::parse(input)?;
    let there = valley.cross(valley.start, valley.end, 0)?;
    if part == 1 {
        return Ok(there.to_string());
    }
    let back = valley.cross(valley.end, valley.start, there)?;
    Ok(valley.cross(valley.start, valley.end, back)?.to_string())
}
