//! Small parsing helpers for puzzle text.

use std::fmt::Debug;
use std::str::FromStr;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use regex::Regex;

fn number_regex() -> &'static Regex {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    NUMBER.get_or_init(|| Regex::new(r"-?\d+").expect("valid number regex"))
}

/// Every (optionally negative) integer in `s`, in order of appearance.
pub fn numbers<T>(s: &str) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    number_regex()
        .find_iter(s)
        .map(|m| m.as_str().parse::<T>().with_context(|| format!("cannot parse {:?}", m.as_str())))
        .collect()
}

/// Exactly `N` integers from `s`, e.g. the four bounds of `x=1..2, y=3..4`.
pub fn numbers_n<T, const N: usize>(s: &str) -> Result<[T; N]>
where
    T: FromStr + Debug,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let found = numbers::<T>(s)?;
    let count = found.len();
    found
        .try_into()
        .map_err(|_| anyhow::anyhow!("expected {} numbers in {:?}, found {}", N, s, count))
}

/// Paragraphs separated by a blank line.
pub fn blocks(input: &str) -> impl Iterator<Item = &str> {
    input
        .split("\n\n")
        .map(|block| block.trim_matches('\n'))
        .filter(|block| !block.is_empty())
}

/// Normalizes Windows line endings and strips surrounding blank lines
/// while keeping leading spaces, which some inputs (crate stacks) need.
pub fn normalize(input: &str) -> String {
    input.replace("\r\n", "\n").trim_matches('\n').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_include_negatives() {
        let found: Vec<i64> = numbers("target area: x=20..30, y=-10..-5").unwrap();
        assert_eq!(found, vec![20, 30, -10, -5]);
    }

    #[test]
    fn numbers_n_checks_the_count() {
        let [a, b]: [u32; 2] = numbers_n("move 3 to 4").unwrap();
        assert_eq!((a, b), (3, 4));
        assert!(numbers_n::<u32, 3>("1 2").is_err());
    }

    #[test]
    fn blocks_split_on_blank_lines() {
        let found: Vec<&str> = blocks("1\n2\n\n3\n\n\n4\n").collect();
        assert_eq!(found, vec!["1\n2", "3", "4"]);
    }

    #[test]
    fn normalize_keeps_leading_spaces() {
        assert_eq!(normalize("\r\n    [D]\r\n[N] [C]\r\n"), "    [D]\n[N] [C]");
    }
}
