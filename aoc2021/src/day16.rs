//! Day 16: Packet Decoder

use anyhow::{bail, ensure, Context};
use aoc_common::{check_part, Answer};
use bitvec::prelude::*;

#[derive(Debug)]
struct Packet {
    version: u64,
    type_id: u64,
    value: u64,
    children: Vec<Packet>,
}

impl Packet {
    fn version_sum(&self) -> u64 {
        self.version + self.children.iter().map(Packet::version_sum).sum::<u64>()
    }

    fn eval(&self) -> anyhow::Result<u64> {
        let values = self.children.iter().map(Packet::eval).collect::<anyhow::Result<Vec<_>>>()?;
        let compare = |op: fn(&u64, &u64) -> bool| -> anyhow::Result<u64> {
            match values[..] {
                [a, b] => Ok(op(&a, &b) as u64),
                _ => bail!("comparison needs two operands, found {}", values.len()),
            }
        };
        Ok(match self.type_id {
            0 => values.iter().sum::<u64>(),
            1 => values.iter().product::<u64>(),
            2 => values.iter().min().copied().context("min of nothing")?,
            3 => values.iter().max().copied().context("max of nothing")?,
            4 => self.value,
            5 => compare(u64::gt)?,
            6 => compare(u64::lt)?,
            _ => compare(u64::eq)?,
        })
    }
}

struct Reader<'a> {
    bits: &'a BitSlice<u8, Msb0>,
    at: usize,
}

impl Reader<'_> {
    fn take(&mut self, n: usize) -> anyhow::Result<u64> {
        ensure!(self.at + n <= self.bits.len(), "transmission ends mid-packet");
        let value = self.bits[self.at..self.at + n].load_be::<u64>();
        self.at += n;
        Ok(value)
    }

    fn packet(&mut self) -> anyhow::Result<Packet> {
        let version = self.take(3)?;
        let type_id = self.take(3)?;
        let mut packet = Packet { version, type_id, value: 0, children: vec![] };
        if type_id == 4 {
            loop {
                let group = self.take(5)?;
                packet.value = packet.value << 4 | group & 0xF;
                if group & 0x10 == 0 {
                    break;
                }
            }
        } else if self.take(1)? == 0 {
            let len = self.take(15)? as usize;
            let end = self.at + len;
            while self.at < end {
                packet.children.push(self.packet()?);
            }
        } else {
            for _ in 0..self.take(11)? {
                packet.children.push(self.packet()?);
            }
        }
        Ok(packet)
    }
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    let hex = input.trim();
    ensure!(hex.is_ascii() && hex.len() % 2 == 0, "expected an even number of hex digits");
    let bytes = (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).with_context(|| format!("bad hex at {}", i)))
        .collect::<anyhow::Result<Vec<u8>>>()?;
    let packet = Reader { bits: bytes.view_bits::<Msb0>(), at: 0 }.packet()?;
    Ok(if part == 1 { packet.version_sum() } else { packet.eval()? }.to_string())
}
