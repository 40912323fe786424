//! Day 12: Passage Pathing

use anyhow::{ensure, Context};
use aoc_common::{check_part, Answer};
use rustc_hash::FxHashMap;

struct Caves {
    links: Vec<Vec<usize>>,
    small: Vec<bool>,
    start: usize,
    end: usize,
}

impl Caves {
    fn parse(input: &str) -> anyhow::Result<Self> {
        let mut ids: FxHashMap<&str, usize> = FxHashMap::default();
        let mut caves = Caves { links: vec![], small: vec![], start: 0, end: 0 };
        for line in input.trim().lines() {
            let (a, b) = line.trim().split_once('-').with_context(|| format!("cannot parse {:?}", line))?;
            let [a, b] = [a, b].map(|name| {
                *ids.entry(name).or_insert_with(|| {
                    caves.links.push(vec![]);
                    caves.small.push(name.bytes().all(|b| b.is_ascii_lowercase()));
                    caves.links.len() - 1
                })
            });
            caves.links[a].push(b);
            caves.links[b].push(a);
        }
        caves.start = *ids.get("start").context("no start cave")?;
        caves.end = *ids.get("end").context("no end cave")?;
        ensure!(
            (0..caves.links.len()).all(|i| caves.small[i] || caves.links[i].iter().all(|&j| caves.small[j])),
            "two big caves are linked; the paths never end"
        );
        Ok(caves)
    }

    /// Paths from `at` to the end, not revisiting the small caves in
    /// `visited` unless a repeat is still allowed.
    fn paths(&self, at: usize, visited: u64, repeat: bool) -> u64 {
        if at == self.end {
            return 1;
        }
        self.links[at]
            .iter()
            .map(|&next| {
                if next == self.start {
                    0
                } else if !self.small[next] {
                    self.paths(next, visited, repeat)
                } else if visited & 1 << next == 0 {
                    self.paths(next, visited | 1 << next, repeat)
                } else if repeat {
                    self.paths(next, visited, false)
                } else {
                    0
                }
            })
            .sum()
    }
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let caves = Caves::parse(input)?;
    ensure!(caves.links.len() <= 64, "too many caves");
    Ok(caves.paths(caves.start, 1 << caves.start, part == 2).to_string())
}
