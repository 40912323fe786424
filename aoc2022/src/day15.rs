//! Day 15: Beacon Exclusion Zone

use anyhow::Context;
use aoc_common::{check_part, parse::numbers_n, Answer};
use itertools::Itertools;

#[derive(Debug, Clone, Copy)]
struct Sensor {
    x: i64,
    y: i64,
    beacon: (i64, i64),
    radius: i64,
}

impl Sensor {
    fn covers(&self, x: i64, y: i64) -> bool {
        (self.x - x).abs() + (self.y - y).abs() <= self.radius
    }
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut sensors = vec![];
    for line in input.trim().lines() {
        let [x, y, bx, by] = numbers_n::<i64, 4>(line)?;
        sensors.push(Sensor { x, y, beacon: (bx, by), radius: (x - bx).abs() + (y - by).abs() });
    }
    // the example asks about row 10 and a 20 by 20 area
    let small = sensors.iter().all(|s| s.x <= 20 && s.y <= 20);
    let (row, limit) = if small { (10, 20) } else { (2_000_000, 4_000_000) };

    if part == 1 {
        let mut ranges: Vec<(i64, i64)> = sensors
            .iter()
            .filter_map(|s| {
                let reach = s.radius - (s.y - row).abs();
                (reach >= 0).then_some((s.x - reach, s.x + reach))
            })
            .collect();
        ranges.sort_unstable();
        let mut covered = 0;
        let mut end = i64::MIN;
        for (lo, hi) in ranges {
            if hi > end {
                covered += hi - lo.max(end + 1) + 1;
                end = hi;
            }
        }
        let beacons = sensors.iter().map(|s| s.beacon).filter(|&(_, by)| by == row).unique().count() as i64;
        return Ok((covered - beacons).to_string());
    }

    // the lone gap sits just outside two sensors along each diagonal, so it
    // lies on a crossing of their `radius + 1` boundary lines
    let rising: Vec<i64> = sensors.iter().flat_map(|s| [s.y - s.x + s.radius + 1, s.y - s.x - s.radius - 1]).collect();
    let falling: Vec<i64> = sensors.iter().flat_map(|s| [s.y + s.x + s.radius + 1, s.y + s.x - s.radius - 1]).collect();
    let corners = [(0, 0), (0, limit), (limit, 0), (limit, limit)];
    let (x, y) = rising
        .iter()
        .cartesian_product(&falling)
        .filter(|&(a, b)| (b - a) % 2 == 0)
        .map(|(a, b)| ((b - a) / 2, (a + b) / 2))
        .chain(corners)
        .find(|&(x, y)| (0..=limit).contains(&x) && (0..=limit).contains(&y) && sensors.iter().all(|s| !s.covers(x, y)))
        .context("every position is covered")?;
    Ok((x * 4_000_000 + y).to_string())
}
