//! Day 7: Camel Cards

use anyhow::{bail, Context};
use aoc_common::{check_part, Answer};
use arrayvec::ArrayVec;

/// Sort key: hand type first, then card strengths in order.
fn strength(part: u8, hand: &str) -> anyhow::Result<(u8, [u8; 5])> {
    let order: &[u8] = if part == 1 { b"23456789TJQKA" } else { b"J23456789TQKA" };
    let mut cards = [0u8; 5];
    let mut counts = [0u8; 13];
    if hand.len() != 5 {
        bail!("hand {:?} does not have five cards", hand);
    }
    for (i, card) in hand.bytes().enumerate() {
        let rank = order.iter().position(|&c| c == card).with_context(|| format!("unknown card in {:?}", hand))?;
        cards[i] = rank as u8;
        counts[rank] += 1;
    }

    let jokers = if part == 2 { std::mem::take(&mut counts[0]) } else { 0 };
    let mut groups: ArrayVec<u8, 13> = counts.iter().copied().filter(|&n| n > 0).collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));
    // jokers join the largest group
    match groups.first_mut() {
        Some(largest) => *largest += jokers,
        None => groups.push(jokers),
    }
    let kind = match groups[..] {
        [5] => 6,
        [4, ..] => 5,
        [3, 2] => 4,
        [3, ..] => 3,
        [2, 2, ..] => 2,
        [2, ..] => 1,
        _ => 0,
    };
    Ok((kind, cards))
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut hands = vec![];
    for line in input.trim().lines() {
        let (hand, bid) = line.split_once(' ').with_context(|| format!("cannot parse {:?}", line))?;
        hands.push((strength(part, hand)?, bid.trim().parse::<u64>()?));
    }
    hands.sort_unstable();
    Ok(hands.iter().zip(1..).map(|(&(_, bid), rank)| bid * rank).sum::<u64>().to_string())
}
