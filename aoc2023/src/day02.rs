//! Day 2: Cube Conundrum

use anyhow::{bail, Context};
use aoc_common::{check_part, Answer};

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut total = 0;
    for line in input.trim().lines() {
        let (game, draws) = line.split_once(": ").with_context(|| format!("cannot parse {:?}", line))?;
        let id: u32 = game.trim_start_matches("Game ").parse()?;

        // fewest cubes of each colour that make the game possible
        let mut max = [0u32; 3];
        for cubes in draws.split(|c: char| c == ';' || c == ',') {
            let (count, colour) = cubes.trim().split_once(' ').with_context(|| format!("cannot parse {:?}", cubes))?;
            let slot = match colour {
                "red" => 0,
                "green" => 1,
                "blue" => 2,
                _ => bail!("unknown colour {:?}", colour),
            };
            max[slot] = max[slot].max(count.parse()?);
        }

        total += if part == 1 {
            if max[0] <= 12 && max[1] <= 13 && max[2] <= 14 { id } else { 0 }
        } else {
            max.iter().product::<u32>()
        };
    }
    Ok(total.to_string())
}
