use std::process;

use aoc_cli::banner::{banner, TREE_LEVELS};
use aoc_cli::cli::{execute_command, Cli};
use aoc_common::logging::setup_logging;
use clap::Parser;
use colored::Colorize;

fn main() {
    let cli = Cli::parse();

    if !cli.no_banner {
        println!("{}", banner(TREE_LEVELS));
    }

    setup_logging(cli.verbose);

    if let Err(e) = execute_command(&cli) {
        eprintln!("{}", format!("Error: {}", e).red());
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_cli::cli::Commands;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn new_takes_optional_year_and_day() {
        let cli = Cli::try_parse_from(["aoc", "new", "-y", "2023", "-d", "7", "--no-banner"]).unwrap();
        assert!(cli.no_banner);
        match cli.command {
            Commands::New { year, day, force } => {
                assert_eq!((year, day, force), (Some(2023), Some(7), false));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn download_day_needs_a_year() {
        assert!(Cli::try_parse_from(["aoc", "download", "-d", "3"]).is_err());
        let cli = Cli::try_parse_from(["aoc", "-vv", "download", "--year", "2021"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Download { year: Some(2021), day: None }));
    }
}
