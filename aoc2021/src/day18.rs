//! Day 18: Snailfish
//!
//! A number is kept flat: each regular number with the count of pairs it
//! is nested in.

use anyhow::{bail, ensure, Context};
use aoc_common::{check_part, Answer};
use itertools::Itertools;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Regular {
    value: u32,
    depth: u32,
}

type Number = Vec<Regular>;

fn parse_number(line: &str) -> anyhow::Result<Number> {
    let mut number = vec![];
    let mut depth = 0;
    let mut digits: Option<u32> = None;
    for b in line.trim().bytes() {
        if b.is_ascii_digit() {
            digits = Some(digits.unwrap_or(0) * 10 + (b - b'0') as u32);
            continue;
        }
        if let Some(value) = digits.take() {
            number.push(Regular { value, depth });
        }
        match b {
            b'[' => depth += 1,
            b']' => depth = u32::checked_sub(depth, 1).with_context(|| format!("unbalanced {:?}", line))?,
            b',' => (),
            _ => bail!("unexpected {:?} in {:?}", b as char, line),
        }
    }
    ensure!(depth == 0 && !number.is_empty() && digits.is_none(), "cannot parse {:?}", line);
    Ok(number)
}

/// Explodes the leftmost pair nested inside four others.
fn explode(number: &mut Number) -> bool {
    let Some(i) = number.iter().position(|r| r.depth > 4) else { return false };
    let (left, Some(&right)) = (number[i], number.get(i + 1)) else { return false };
    if i > 0 {
        number[i - 1].value += left.value;
    }
    if let Some(next) = number.get_mut(i + 2) {
        next.value += right.value;
    }
    number[i] = Regular { value: 0, depth: left.depth - 1 };
    number.remove(i + 1);
    true
}

/// Splits the leftmost regular number of 10 or more.
fn split(number: &mut Number) -> bool {
    let Some(i) = number.iter().position(|r| r.value >= 10) else { return false };
    let Regular { value, depth } = number[i];
    number[i] = Regular { value: value / 2, depth: depth + 1 };
    number.insert(i + 1, Regular { value: (value + 1) / 2, depth: depth + 1 });
    true
}

fn add(a: &Number, b: &Number) -> Number {
    let mut sum: Number = a.iter().chain(b).map(|r| Regular { depth: r.depth + 1, ..*r }).collect();
    while explode(&mut sum) || split(&mut sum) {}
    sum
}

fn magnitude(number: &Number) -> u32 {
    let mut number = number.clone();
    // the leftmost of the deepest regular numbers is always a left element
    while let Some(deepest) = number.iter().map(|r| r.depth).max().filter(|&d| d > 0) {
        let Some(i) = number.iter().position(|r| r.depth == deepest) else { break };
        let Some(&right) = number.get(i + 1) else { break };
        number[i] = Regular { value: 3 * number[i].value + 2 * right.value, depth: deepest - 1 };
        number.remove(i + 1);
    }
    number.first().map_or(0, |r| r.value)
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let numbers = input.trim().lines().map(parse_number).collect::<anyhow::Result<Vec<_>>>()?;
    if part == 1 {
        let total = numbers.iter().skip(1).fold(numbers.first().cloned().context("no numbers")?, |sum, n| add(&sum, n));
        return Ok(magnitude(&total).to_string());
    }
    let best = numbers.iter().permutations(2).map(|pair| magnitude(&add(pair[0], pair[1]))).max().unwrap_or(0);
    Ok(best.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduced(line: &str) -> Number {
        let mut number = parse_number(line).unwrap();
        while explode(&mut number) || split(&mut number) {}
        number
    }

    #[test]
    fn explodes_the_leftmost_pair() {
        assert_eq!(reduced("[[[[[9,8],1],2],3],4]"), parse_number("[[[[0,9],2],3],4]").unwrap());
        assert_eq!(reduced("[7,[6,[5,[4,[3,2]]]]]"), parse_number("[7,[6,[5,[7,0]]]]").unwrap());
    }

    #[test]
    fn addition_reduces() {
        let a = parse_number("[[[[4,3],4],4],[7,[[8,4],9]]]").unwrap();
        let b = parse_number("[1,1]").unwrap();
        assert_eq!(add(&a, &b), parse_number("[[[[0,7],4],[[7,8],[6,0]]],[8,1]]").unwrap());
    }

    #[test]
    fn magnitudes() {
        assert_eq!(magnitude(&parse_number("[[1,2],[[3,4],5]]").unwrap()), 143);
        assert_eq!(magnitude(&parse_number("[[[[0,7],4],[[7,8],[6,0]]],[8,1]]").unwrap()), 1384);
    }
}
