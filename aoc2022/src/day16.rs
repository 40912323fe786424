//! Day 16: Proboscidea Volcanium

use std::collections::VecDeque;

use anyhow::{ensure, Context};
use aoc_common::{check_part, Answer};
use regex::Regex;
use rustc_hash::FxHashMap;

struct Cave {
    flows: Vec<u32>,
    /// `dist[i][j]` between useful valves; the start valve is last.
    dist: Vec<Vec<u32>>,
}

impl Cave {
    fn parse(input: &str) -> anyhow::Result<Self> {
        let re = Regex::new(r"^Valve (\w+) has flow rate=(\d+); tunnels? leads? to valves? (.*)$")?;
        let mut valves: FxHashMap<&str, (u32, Vec<&str>)> = FxHashMap::default();
        for line in input.trim().lines() {
            let caps = re.captures(line.trim()).with_context(|| format!("cannot parse {:?}", line))?;
            let (_, [name, flow, tunnels]) = caps.extract();
            valves.insert(name, (flow.parse()?, tunnels.split(", ").collect()));
        }
        ensure!(valves.contains_key("AA"), "no valve AA");

        let mut useful: Vec<&str> = valves.iter().filter(|(_, (flow, _))| *flow > 0).map(|(&name, _)| name).collect();
        useful.sort_unstable();
        ensure!(useful.len() < 16, "{} valves with flow are too many to track", useful.len());
        let mut nodes = useful.clone();
        nodes.push("AA");

        let mut dist = vec![];
        for &from in &nodes {
            let mut steps: FxHashMap<&str, u32> = FxHashMap::from_iter([(from, 0)]);
            let mut queue = VecDeque::from([from]);
            while let Some(valve) = queue.pop_front() {
                let d = steps[valve];
                for &next in valves.get(valve).map(|(_, tunnels)| tunnels.as_slice()).unwrap_or_default() {
                    if !steps.contains_key(next) {
                        steps.insert(next, d + 1);
                        queue.push_back(next);
                    }
                }
            }
            dist.push(nodes.iter().map(|to| steps.get(to).copied().unwrap_or(u32::MAX / 2)).collect());
        }
        Ok(Cave { flows: useful.iter().map(|name| valves[name].0).collect(), dist })
    }

    /// Most pressure releasable for every set of opened valves.
    fn best_by_set(&self, minutes: u32) -> Vec<u32> {
        let mut best = vec![0; 1 << self.flows.len()];
        self.explore(self.flows.len(), minutes, 0, 0, &mut best);
        best
    }

    fn explore(&self, at: usize, left: u32, opened: usize, released: u32, best: &mut [u32]) {
        best[opened] = best[opened].max(released);
        for (next, &flow) in self.flows.iter().enumerate() {
            let cost = self.dist[at][next] + 1;
            if opened & 1 << next != 0 || cost >= left {
                continue;
            }
            let left = left - cost;
            self.explore(next, left, opened | 1 << next, released + left * flow, best);
        }
    }
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let cave = Cave::parse(input)?;
    if part == 1 {
        return Ok(cave.best_by_set(30).iter().max().copied().unwrap_or(0).to_string());
    }

    let best = cave.best_by_set(26);
    // best over every subset of each set
    let mut within = best.clone();
    for bit in 0..cave.flows.len() {
        for set in 0..within.len() {
            if set & 1 << bit != 0 {
                within[set] = within[set].max(within[set ^ 1 << bit]);
            }
        }
    }
    let all = within.len() - 1;
    Ok((0..=all).map(|mine| best[mine] + within[all ^ mine]).max().unwrap_or(0).to_string())
}
