//! Day 13: Distress Signal

use std::cmp::Ordering;

use anyhow::{bail, Context};
use aoc_common::{check_part, Answer};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Packet {
    Int(u32),
    List(Vec<Packet>),
}

impl Ord for Packet {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Packet::Int(a), Packet::Int(b)) => a.cmp(b),
            (Packet::List(a), Packet::List(b)) => a.cmp(b),
            (Packet::Int(a), Packet::List(b)) => [Packet::Int(*a)][..].cmp(&b[..]),
            (Packet::List(a), Packet::Int(b)) => a[..].cmp(&[Packet::Int(*b)][..]),
        }
    }
}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn parse_packet(line: &str) -> anyhow::Result<Packet> {
    let mut stack: Vec<Vec<Packet>> = vec![];
    let mut number: Option<u32> = None;
    let mut done = None;
    for b in line.trim().bytes() {
        if done.is_some() {
            bail!("trailing text after packet {:?}", line);
        }
        if b.is_ascii_digit() {
            number = Some(number.unwrap_or(0) * 10 + (b - b'0') as u32);
            continue;
        }
        if let Some(n) = number.take() {
            stack.last_mut().context("number outside a list")?.push(Packet::Int(n));
        }
        match b {
            b'[' => stack.push(vec![]),
            b']' => {
                let list = Packet::List(stack.pop().context("unbalanced ]")?);
                match stack.last_mut() {
                    Some(parent) => parent.push(list),
                    None => done = Some(list),
                }
            }
            b',' => (),
            _ => bail!("unexpected {:?} in packet {:?}", b as char, line),
        }
    }
    done.with_context(|| format!("unterminated packet {:?}", line))
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let packets = input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_packet)
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(if part == 1 {
        packets.chunks(2).zip(1..).filter(|(pair, _)| pair.len() == 2 && pair[0] < pair[1]).map(|(_, i)| i).sum::<usize>()
    } else {
        // positions of the dividers once sorted, without sorting
        let dividers = [parse_packet("[[2]]")?, parse_packet("[[6]]")?];
        let before = |divider: &Packet| packets.iter().filter(|&packet| packet < divider).count();
        (before(&dividers[0]) + 1) * (before(&dividers[1]) + 2)
    }
    .to_string())
}
