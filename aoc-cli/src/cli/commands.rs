use std::io;

use aoc_common::config::Settings;
use colored::Colorize;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::download::{download_all, download_day, download_year, AocClient};
use crate::event::{self, is_puzzle_day};
use crate::prompt::ask;
use crate::scaffold::{Outcome, Scaffold};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;
    debug!("settings: {:?}", Settings { session: settings.session.as_ref().map(|_| "***".into()), ..settings.clone() });

    match &cli.command {
        Commands::New { year, day, force } => _new(&settings, *year, *day, *force),
        Commands::Download { year, day } => _download(&settings, *year, *day),
    }
}

#[instrument(skip(settings))]
fn _new(settings: &Settings, year: Option<u16>, day: Option<u8>, force: bool) -> CliResult<()> {
    let today = event::today();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let year = match year {
        Some(year) => year,
        None => ask(&mut input, &mut output, "year", event::default_year(today))?,
    };
    let day = match day {
        Some(day) => day,
        None => ask(&mut input, &mut output, "day", event::default_day(today))?,
    };
    check_day(year, day)?;

    let report = Scaffold::new(&settings.workspace_root, year, day).write(force)?;
    if report.year_crate_created {
        println!("Created year crate aoc{}", year);
    }
    for outcome in &report.files {
        match outcome {
            Outcome::Written(path) => println!("Written template to {}", path.display()),
            Outcome::Skipped(path) => {
                println!("{}", format!("{} exists, left untouched (use --force to overwrite)", path.display()).yellow())
            }
        }
    }
    if report.registered {
        println!("Registered day {} in aoc{}/src/lib.rs", day, year);
    }

    // the skeletons are useful without the input, so a failed download is only reported
    if let Err(e) = AocClient::new(settings).and_then(|client| download_day(&client, settings, year, day)) {
        eprintln!("{}", "Unable to download file".red());
        eprintln!("{}", e.to_string().red());
    }
    Ok(())
}

#[instrument(skip(settings))]
fn _download(settings: &Settings, year: Option<u16>, day: Option<u8>) -> CliResult<()> {
    let client = AocClient::new(settings)?;
    match (year, day) {
        (Some(year), Some(day)) => {
            check_day(year, day)?;
            download_day(&client, settings, year, day)?;
        }
        (Some(year), None) => {
            check_day(year, 1)?;
            let count = download_year(&client, settings, year);
            println!("Downloaded {} input files for {}", count, year);
        }
        (None, None) => {
            let count = download_all(&client, settings, event::default_year(event::today()));
            println!("Downloaded {} input files", count);
        }
        (None, Some(_)) => return Err(CliError::Usage("--day needs --year".to_string())),
    }
    Ok(())
}

fn check_day(year: u16, day: u8) -> CliResult<()> {
    if is_puzzle_day(year, day) {
        Ok(())
    } else {
        Err(CliError::Usage(format!("{} day {} is not a puzzle day", year, day)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_day_rejects_days_outside_the_event() {
        assert!(check_day(2022, 25).is_ok());
        assert!(matches!(check_day(2025, 20), Err(CliError::Usage(_))));
        assert!(matches!(check_day(2010, 1), Err(CliError::Usage(_))));
    }
}
