//! Day 9: Smoke Basin

use aoc_common::{check_part, Answer, Grid};

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let grid = Grid::digits(input)?;
    let low_points: Vec<_> =
        grid.positions().filter(|&pos| grid.neighbours4(pos).all(|next| grid[next] > grid[pos])).collect();
    if part == 1 {
        return Ok(low_points.iter().map(|&pos| grid[pos] as u32 + 1).sum::<u32>().to_string());
    }

    // every non-9 cell drains to exactly one low point
    let mut seen = Grid::new(grid.rows(), grid.cols(), false);
    let mut sizes: Vec<usize> = low_points
        .iter()
        .map(|&low| {
            let mut stack = vec![low];
            seen[low] = true;
            let mut size = 0;
            while let Some(pos) = stack.pop() {
                size += 1;
                for next in grid.neighbours4(pos) {
                    if grid[next] != 9 && !seen[next] {
                        seen[next] = true;
                        stack.push(next);
                    }
                }
            }
            size
        })
        .collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    Ok(sizes.iter().take(3).product::<usize>().to_string())
}
