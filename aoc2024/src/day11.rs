//! Day 11: Plutonian Pebbles

use aoc_common::{check_part, parse::numbers, Answer};
use rustc_hash::FxHashMap;

fn blink(stone: u64) -> (u64, Option<u64>) {
    if stone == 0 {
        return (1, None);
    }
    let digits = stone.ilog10() + 1;
    if digits % 2 == 0 {
        let half = 10u64.pow(digits / 2);
        (stone / half, Some(stone % half))
    } else {
        (stone * 2024, None)
    }
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    // stones never interact, so equal engravings are counted once
    let mut stones: FxHashMap<u64, u64> = FxHashMap::default();
    for stone in numbers::<u64>(input)? {
        *stones.entry(stone).or_default() += 1;
    }

    let blinks = if part == 1 { 25 } else { 75 };
    for _ in 0..blinks {
        let mut next: FxHashMap<u64, u64> = FxHashMap::default();
        for (stone, count) in stones {
            let (left, right) = blink(stone);
            *next.entry(left).or_default() += count;
            if let Some(right) = right {
                *next.entry(right).or_default() += count;
            }
        }
        stones = next;
    }
    Ok(stones.values().sum::<u64>().to_string())
}
