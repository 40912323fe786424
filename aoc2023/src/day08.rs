//! Day 8: Haunted Wasteland

use anyhow::{bail, Context};
use aoc_common::{check_part, lcm, parse, Answer};
use regex::Regex;
use rustc_hash::FxHashMap;

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut blocks = parse::blocks(input);
    let turns = blocks.next().context("no instructions")?.trim().as_bytes();
    let node_re = Regex::new(r"^(\w+) = \((\w+), (\w+)\)$")?;
    let mut network: FxHashMap<&str, (&str, &str)> = FxHashMap::default();
    for line in blocks.flat_map(str::lines) {
        let caps = node_re.captures(line.trim()).with_context(|| format!("cannot parse node {:?}", line))?;
        let (_, [node, left, right]) = caps.extract();
        network.insert(node, (left, right));
    }

    let steps = |start: &str, done: fn(&str) -> bool| -> anyhow::Result<u64> {
        let mut node = start;
        for (step, turn) in turns.iter().cycle().enumerate() {
            if done(node) {
                return Ok(step as u64);
            }
            let &(left, right) = network.get(node).with_context(|| format!("unknown node {}", node))?;
            node = match turn {
                b'L' => left,
                b'R' => right,
                _ => bail!("unknown turn {:?}", *turn as char),
            };
        }
        bail!("no instructions")
    };

    Ok(if part == 1 {
        steps("AAA", |node| node == "ZZZ")?
    } else {
        // every ghost runs a loop from its first Z back to the same Z
        network
            .keys()
            .filter(|node| node.ends_with('A'))
            .map(|node| steps(node, |node| node.ends_with('Z')))
            .try_fold(1, |acc, n| n.map(|n| lcm(acc, n)))?
    }
    .to_string())
}
