//! Day 19: Not Enough Minerals

use anyhow::bail;
use aoc_common::{check_part, parse::numbers, Answer};

#[derive(Debug, Clone, Copy)]
struct Blueprint {
    id: u32,
    ore: u32,
    clay: u32,
    obsidian: (u32, u32),
    geode: (u32, u32),
}

/// Stock and robots, indexed ore, clay, obsidian, geode.
#[derive(Debug, Clone, Copy)]
struct State {
    left: u32,
    stock: [u32; 4],
    robots: [u32; 4],
}

impl Blueprint {
    fn cost(&self, robot: usize) -> [u32; 3] {
        match robot {
            0 => [self.ore, 0, 0],
            1 => [self.clay, 0, 0],
            2 => [self.obsidian.0, self.obsidian.1, 0],
            _ => [self.geode.0, 0, self.geode.1],
        }
    }

    fn max_geodes(&self, minutes: u32) -> u32 {
        let mut best = 0;
        self.search(State { left: minutes, stock: [0; 4], robots: [1, 0, 0, 0] }, &mut best);
        best
    }

    /// Branches on which robot to build next, waiting as long as needed.
    fn search(&self, state: State, best: &mut u32) {
        let State { left, stock, robots } = state;
        *best = (*best).max(stock[3] + robots[3] * left);
        // even a new geode robot every minute would not beat the best
        if stock[3] + robots[3] * left + left * left.saturating_sub(1) / 2 <= *best {
            return;
        }
        // no point holding more robots than can be spent per minute
        let limits = [self.ore.max(self.clay).max(self.obsidian.0).max(self.geode.0), self.obsidian.1, self.geode.1, u32::MAX];

        for robot in (0..4).rev() {
            if robots[robot] >= limits[robot] {
                continue;
            }
            let cost = self.cost(robot);
            let mut wait = 0;
            let mut possible = true;
            for kind in 0..3 {
                if cost[kind] > stock[kind] {
                    if robots[kind] == 0 {
                        possible = false;
                        break;
                    }
                    wait = wait.max((cost[kind] - stock[kind]).div_ceil(robots[kind]));
                }
            }
            if !possible || wait + 1 >= left {
                continue;
            }
            let elapsed = wait + 1;
            let mut next = State { left: left - elapsed, stock, robots };
            for kind in 0..4 {
                next.stock[kind] += robots[kind] * elapsed;
            }
            for kind in 0..3 {
                next.stock[kind] -= cost[kind];
            }
            next.robots[robot] += 1;
            self.search(next, best);
        }
    }
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut blueprints = vec![];
    for line in input.trim().lines() {
        let &[id, ore, clay, obsidian_ore, obsidian_clay, geode_ore, geode_obsidian] = &numbers::<u32>(line)?[..] else {
            bail!("cannot parse blueprint {:?}", line)
        };
        blueprints.push(Blueprint {
            id,
            ore,
            clay,
            obsidian: (obsidian_ore, obsidian_clay),
            geode: (geode_ore, geode_obsidian),
        });
    }

    Ok(if part == 1 {
        blueprints.iter().map(|bp| bp.id * bp.max_geodes(24)).sum::<u32>()
    } else {
        blueprints.iter().take(3).map(|bp| bp.max_geodes(32)).product::<u32>()
    }
    .to_string())
}
