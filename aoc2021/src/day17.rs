//! Day 17: Trick Shot

use anyhow::ensure;
use aoc_common::{check_part, parse::numbers_n, Answer};

/// Highest point of the probe if launched at `(vx, vy)` ends up in the
/// target, else `None`.
fn launch((mut vx, mut vy): (i32, i32), [x1, x2, y1, y2]: [i32; 4]) -> Option<i32> {
    let (mut x, mut y, mut top) = (0, 0, 0);
    while x <= x2 && y >= y1 {
        x += vx;
        y += vy;
        vx -= vx.signum();
        vy -= 1;
        top = top.max(y);
        if (x1..=x2).contains(&x) && (y1..=y2).contains(&y) {
            return Some(top);
        }
    }
    None
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let target @ [x1, x2, y1, y2] = numbers_n::<i32, 4>(input)?;
    ensure!(0 < x1 && x1 <= x2 && y1 <= y2 && y2 < 0, "target must be below and to the right of the launcher");

    // any faster and the probe overshoots on the first step, or on the way down
    let hits = (0..=x2).flat_map(|vx| (y1..=-y1).filter_map(move |vy| launch((vx, vy), target)));
    Ok(if part == 1 { hits.max().unwrap_or(0) as usize } else { hits.count() }.to_string())
}
