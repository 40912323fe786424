use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::{AocError, AocResult};
use crate::logging::setup_logging;
use crate::{check_part, Solver};

#[derive(Parser, Debug)]
#[command(about = "Run one puzzle day against its input file", long_about = None)]
pub struct RunArgs {
    /// Puzzle day, 1-25
    pub day: u8,

    /// Only run this part (1 or 2); both parts run when omitted
    pub part: Option<u8>,

    /// Read the puzzle input from this file instead of the data directory
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl RunArgs {
    pub fn parts(&self) -> AocResult<Vec<u8>> {
        match self.part {
            Some(part) => {
                check_part(part)?;
                Ok(vec![part])
            }
            None => Ok(vec![1, 2]),
        }
    }
}

/// Entry point shared by the year binaries; `days` and `lookup` are the
/// table built by [`crate::days!`].
pub fn main(year: u16, days: &[u8], lookup: fn(u8) -> Option<Solver>) -> Result<()> {
    let args = RunArgs::parse();
    setup_logging(args.verbose);

    let settings = Settings::load()?;
    let path = args.input.clone().unwrap_or_else(|| settings.input_path(year, args.day));
    let solve = find_solver(year, args.day, days, lookup)?;
    let input = read_input(&path)?;

    let time = Instant::now();
    for part in args.parts()? {
        let answer = solve(part, &input)?;
        println!("Part {}: {}", part_name(part), answer);
        info!("{} day {} part {} done after {:.3} seconds", year, args.day, part, time.elapsed().as_secs_f32());
    }
    println!("{:.3} seconds elapsed", time.elapsed().as_secs_f32());
    Ok(())
}

pub fn find_solver(year: u16, day: u8, days: &[u8], lookup: fn(u8) -> Option<Solver>) -> AocResult<Solver> {
    lookup(day).ok_or_else(|| AocError::UnknownDay {
        year,
        day,
        available: days.iter().map(u8::to_string).collect::<Vec<_>>().join(", "),
    })
}

pub fn read_input(path: &Path) -> AocResult<String> {
    debug!("reading input from {}", path.display());
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => AocError::InputMissing(path.to_path_buf()),
        _ => AocError::InputRead { path: path.to_path_buf(), source },
    })
}

fn part_name(part: u8) -> &'static str {
    if part == 1 { "one" } else { "two" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn verify_cli() {
        RunArgs::command().debug_assert();
    }

    #[test]
    fn day_alone_runs_both_parts() {
        let args = RunArgs::try_parse_from(["aoc2022", "5"]).unwrap();
        assert_eq!(args.day, 5);
        assert_eq!(args.parts().unwrap(), vec![1, 2]);
    }

    #[test]
    fn explicit_part_and_input() {
        let args = RunArgs::try_parse_from(["aoc2022", "5", "2", "--input", "example.txt", "-vv"]).unwrap();
        assert_eq!(args.parts().unwrap(), vec![2]);
        assert_eq!(args.input, Some(PathBuf::from("example.txt")));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn part_three_is_rejected() {
        let args = RunArgs::try_parse_from(["aoc2022", "5", "3"]).unwrap();
        assert!(matches!(args.parts(), Err(AocError::InvalidPart(3))));
    }

    fn lookup(day: u8) -> Option<Solver> {
        fn first(_: u8, _: &str) -> crate::Answer {
            Ok("1".to_string())
        }
        (day == 1).then_some(first as Solver)
    }

    #[test]
    fn unknown_day_lists_the_registered_ones() {
        assert!(find_solver(2023, 1, &[1, 3], lookup).is_ok());
        match find_solver(2023, 4, &[1, 3], lookup) {
            Err(e @ AocError::UnknownDay { .. }) => {
                assert_eq!(e.to_string(), "no solution registered for 2023 day 4; available days: 1, 3");
            }
            Err(other) => panic!("unexpected {:?}", other),
            Ok(_) => panic!("day 4 has no solver"),
        }
    }

    #[test]
    fn missing_input_names_the_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("day_1.txt");
        match read_input(&path) {
            Err(AocError::InputMissing(missing)) => assert_eq!(missing, path),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn reads_existing_input() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("day_1.txt");
        fs::write(&path, "199\n200\n").unwrap();
        assert_eq!(read_input(&path).unwrap(), "199\n200\n");
    }
}
