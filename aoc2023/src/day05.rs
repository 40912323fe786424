//! Day 5: If You Give A Seed A Fertilizer

use std::ops::Range;

use anyhow::Context;
use aoc_common::{check_part, parse, Answer};

/// `(source, destination offset)` rules of one almanac map.
type Map = Vec<(Range<i64>, i64)>;

fn parse_map(block: &str) -> anyhow::Result<Map> {
    block
        .lines()
        .skip(1)
        .map(|line| -> anyhow::Result<_> {
            let [dest, source, len] = parse::numbers_n::<i64, 3>(line)?;
            Ok((source..source + len, dest - source))
        })
        .collect()
}

/// Pushes ranges through one map, splitting them where rules start or end.
fn apply(map: &Map, ranges: Vec<Range<i64>>) -> Vec<Range<i64>> {
    let mut mapped = vec![];
    let mut pending = ranges;
    for (source, offset) in map {
        let mut unmatched = vec![];
        for range in pending {
            let (start, end) = (range.start.max(source.start), range.end.min(source.end));
            if start >= end {
                unmatched.push(range);
                continue;
            }
            mapped.push(start + offset..end + offset);
            if range.start < start {
                unmatched.push(range.start..start);
            }
            if end < range.end {
                unmatched.push(end..range.end);
            }
        }
        pending = unmatched;
    }
    mapped.extend(pending);
    mapped
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut blocks = parse::blocks(input);
    let seeds: Vec<i64> = parse::numbers(blocks.next().context("no seeds")?)?;
    let maps = blocks.map(parse_map).collect::<anyhow::Result<Vec<_>>>()?;

    let mut ranges: Vec<Range<i64>> = if part == 1 {
        seeds.iter().map(|&seed| seed..seed + 1).collect()
    } else {
        seeds.chunks_exact(2).map(|pair| pair[0]..pair[0] + pair[1]).collect()
    };
    for map in &maps {
        ranges = apply(map, ranges);
    }
    let lowest = ranges.iter().map(|range| range.start).min().context("no seeds")?;
    Ok(lowest.to_string())
}
