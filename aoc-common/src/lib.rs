//! Glue shared by the per-year solution crates.
//!
//! Every puzzle day exposes `pub fn solve(part: u8, input: &str) -> Answer`;
//! a year crate lists its days with [`days!`] and hands the resulting lookup
//! to [`runner::main`].

pub mod config;
pub mod error;
pub mod grid;
pub mod logging;
pub mod parse;
pub mod runner;

pub use error::{AocError, AocResult};
pub use grid::Grid;

/// The answer to one part of a puzzle, rendered as text.
pub type Answer = anyhow::Result<String>;

/// Entry point of a puzzle day: `(part, input) -> answer`.
pub type Solver = fn(u8, &str) -> Answer;

/// Builds the day table of a year crate.
///
/// ```ignore
/// pub mod day01;
/// pub mod day02;
///
/// aoc_common::days! {
///     1 => day01,
///     2 => day02,
/// }
/// ```
///
/// expands to `pub const DAYS: &[u8]` and `pub fn solver(day) -> Option<Solver>`.
#[macro_export]
macro_rules! days {
    ($( $day:literal => $module:ident ),* $(,)?) => {
        pub const DAYS: &[u8] = &[$( $day ),*];

        pub fn solver(day: u8) -> Option<$crate::Solver> {
            match day {
                $( $day => Some($module::solve as $crate::Solver), )*
                _ => None,
            }
        }
    };
}

/// Rejects anything but part 1 or 2.
pub fn check_part(part: u8) -> AocResult<()> {
    match part {
        1 | 2 => Ok(()),
        _ => Err(AocError::InvalidPart(part)),
    }
}

pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

pub fn lcm(a: u64, b: u64) -> u64 {
    a / gcd(a, b) * b
}
