//! Day 5: Hydrothermal Venture

use aoc_common::{check_part, parse::numbers_n, Answer};
use rustc_hash::FxHashMap;

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut vents: FxHashMap<(i32, i32), u32> = FxHashMap::default();
    for line in input.trim().lines() {
        let [x1, y1, x2, y2] = numbers_n::<i32, 4>(line)?;
        let (dx, dy) = ((x2 - x1).signum(), (y2 - y1).signum());
        if part == 1 && dx != 0 && dy != 0 {
            continue;
        }
        let len = (x2 - x1).abs().max((y2 - y1).abs());
        for i in 0..=len {
            *vents.entry((x1 + i * dx, y1 + i * dy)).or_default() += 1;
        }
    }
    Ok(vents.values().filter(|&&n| n > 1).count().to_string())
}
