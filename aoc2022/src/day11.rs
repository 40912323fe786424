//! Day 11: Monkey in the Middle

use anyhow::{bail, Context};
use aoc_common::{check_part, parse, Answer};

#[derive(Debug, Clone, Copy)]
enum Operation {
    Add(u64),
    Mul(u64),
    Square,
}

#[derive(Debug, Clone)]
struct Monkey {
    items: Vec<u64>,
    operation: Operation,
    divisor: u64,
    if_true: usize,
    if_false: usize,
    inspected: u64,
}

fn last_number(line: Option<&str>) -> anyhow::Result<u64> {
    let line = line.context("monkey description ends early")?;
    let number = line.split_whitespace().last().unwrap_or_default();
    number.parse().with_context(|| format!("cannot parse {:?}", line))
}

fn parse_monkey(block: &str) -> anyhow::Result<Monkey> {
    let mut lines = block.lines().skip(1);
    let items = parse::numbers(lines.next().context("no starting items")?)?;
    let operation = match lines.next().and_then(|line| line.split_once("new = old ")) {
        Some((_, "* old")) => Operation::Square,
        Some((_, op)) => match op.split_once(' ') {
            Some(("*", n)) => Operation::Mul(n.parse()?),
            Some(("+", n)) => Operation::Add(n.parse()?),
            _ => bail!("unknown operation {:?}", op),
        },
        None => bail!("no operation in {:?}", block),
    };
    Ok(Monkey {
        items,
        operation,
        divisor: last_number(lines.next())?,
        if_true: last_number(lines.next())? as usize,
        if_false: last_number(lines.next())? as usize,
        inspected: 0,
    })
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let mut monkeys = parse::blocks(input).map(parse_monkey).collect::<anyhow::Result<Vec<_>>>()?;
    if monkeys.iter().any(|monkey| monkey.if_true >= monkeys.len() || monkey.if_false >= monkeys.len()) {
        bail!("a monkey throws to a monkey that does not exist");
    }
    // worry levels only matter modulo the divisors
    let modulus: u64 = monkeys.iter().map(|monkey| monkey.divisor).product();
    let rounds = if part == 1 { 20 } else { 10_000 };

    for _ in 0..rounds {
        for i in 0..monkeys.len() {
            let items = std::mem::take(&mut monkeys[i].items);
            monkeys[i].inspected += items.len() as u64;
            let Monkey { operation, divisor, if_true, if_false, .. } = monkeys[i];
            for item in items {
                let worry = match operation {
                    Operation::Add(n) => item + n,
                    Operation::Mul(n) => item * n,
                    Operation::Square => item * item,
                };
                let worry = if part == 1 { worry / 3 } else { worry % modulus };
                let target = if worry % divisor == 0 { if_true } else { if_false };
                monkeys[target].items.push(worry);
            }
        }
    }

    let mut inspected: Vec<u64> = monkeys.iter().map(|monkey| monkey.inspected).collect();
    inspected.sort_unstable_by(|a, b| b.cmp(a));
    Ok(inspected.iter().take(2).product::<u64>().to_string())
}
