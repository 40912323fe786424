//! Day 18: Boiling Boulders

use anyhow::bail;
use aoc_common::{check_part, parse::numbers_n, Answer};
use rustc_hash::FxHashSet;

const SIDES: [(i32, i32, i32); 6] = [(1, 0, 0), (-1, 0, 0), (0, 1, 0), (0, -1, 0), (0, 0, 1), (0, 0, -1)];

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let cubes: FxHashSet<(i32, i32, i32)> = input
        .trim()
        .lines()
        .map(|line| numbers_n::<i32, 3>(line).map(|[x, y, z]| (x, y, z)))
        .collect::<anyhow::Result<_>>()?;
    let neighbours = |(x, y, z): (i32, i32, i32)| SIDES.into_iter().map(move |(dx, dy, dz)| (x + dx, y + dy, z + dz));

    if part == 1 {
        let open = cubes.iter().flat_map(|&cube| neighbours(cube)).filter(|side| !cubes.contains(side)).count();
        return Ok(open.to_string());
    }

    // flood the box around the droplet from outside; every face the water touches counts
    let lo = cubes.iter().map(|&(x, y, z)| x.min(y).min(z)).min().unwrap_or(0) - 1;
    let hi = cubes.iter().map(|&(x, y, z)| x.max(y).max(z)).max().unwrap_or(0) + 1;
    if hi - lo > 200 {
        bail!("droplet spans {} cubes, too large to flood", hi - lo);
    }
    let inside = |&(x, y, z): &(i32, i32, i32)| [x, y, z].iter().all(|c| (lo..=hi).contains(c));

    let mut water = FxHashSet::from_iter([(lo, lo, lo)]);
    let mut stack = vec![(lo, lo, lo)];
    let mut faces = 0;
    while let Some(cell) = stack.pop() {
        for next in neighbours(cell).filter(&inside) {
            if cubes.contains(&next) {
                faces += 1;
            } else if water.insert(next) {
                stack.push(next);
            }
        }
    }
    Ok(faces.to_string())
}
