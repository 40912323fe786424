//! Day 5: Supply Stacks

use anyhow::{bail, Context};
use aoc_common::{check_part, parse, Answer};

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let input = parse::normalize(input);
    let (drawing, moves) = input.split_once("\n\n").context("no blank line after the drawing")?;

    let mut rows: Vec<&[u8]> = drawing.lines().map(str::as_bytes).collect();
    let labels = rows.pop().context("empty drawing")?;
    let count = labels.split(|b| b.is_ascii_whitespace()).filter(|s| !s.is_empty()).count();
    let mut stacks: Vec<Vec<u8>> = vec![vec![]; count];
    for row in rows.iter().rev() {
        for (i, stack) in stacks.iter_mut().enumerate() {
            match row.get(1 + 4 * i) {
                Some(b' ') | None => (),
                Some(&krate) => stack.push(krate),
            }
        }
    }

    for line in moves.lines() {
        let [n, from, to] = parse::numbers_n::<usize, 3>(line)?;
        if from == 0 || to == 0 || from > count || to > count {
            bail!("no such stack in {:?}", line);
        }
        let source = &mut stacks[from - 1];
        let at = source.len().checked_sub(n).with_context(|| format!("not enough crates for {:?}", line))?;
        let mut lifted = source.split_off(at);
        if part == 1 {
            lifted.reverse();
        }
        stacks[to - 1].extend(lifted);
    }
    Ok(stacks.iter().filter_map(|stack| stack.last().map(|&b| b as char)).collect())
}
