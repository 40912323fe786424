//! Day 25: Full of Hot Air
//!
//! There is no second puzzle on the last day; part two answers "0".

use anyhow::bail;
use aoc_common::{check_part, Answer};

fn from_snafu(s: &str) -> anyhow::Result<i64> {
    s.bytes().try_fold(0, |n, b| {
        let digit = match b {
            b'2' => 2,
            b'1' => 1,
            b'0' => 0,
            b'-' => -1,
            b'=' => -2,
            _ => bail!("{:?} is not a SNAFU digit", b as char),
        };
        Ok(n * 5 + digit)
    })
}

fn to_snafu(mut n: i64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = vec![];
    while n != 0 {
        let (digit, carry) = match n.rem_euclid(5) {
            0 => ('0', 0),
            1 => ('1', 0),
            2 => ('2', 0),
            3 => ('=', 1),
            _ => ('-', 1),
        };
        digits.push(digit);
        n = n.div_euclid(5) + carry;
    }
    digits.iter().rev().collect()
}

pub fn solve(part: u8, input: &str) -> Answer {
    check_part(part)?;
    if part == 2 {
        return Ok("0".to_string());
    }
    let total = input.trim().lines().map(|line| from_snafu(line.trim())).sum::<anyhow::Result<i64>>()?;
    Ok(to_snafu(total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snafu_digits() {
        for (decimal, snafu) in [(1, "1"), (3, "1="), (2022, "1=11-2"), (314159265, "1121-1110-1=0")] {
            assert_eq!(to_snafu(decimal), snafu);
            assert_eq!(from_snafu(snafu).unwrap(), decimal);
        }
    }
}
