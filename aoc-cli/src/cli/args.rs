//! CLI argument definitions using clap

use clap::{Parser, Subcommand};

/// Advent of Code helper: scaffold new challenges and download puzzle inputs
#[derive(Parser, Debug)]
#[command(name = "aoc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Skip the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start a new challenge: write the solution and test skeletons, then download the input
    New {
        /// Year of the event; prompted for when omitted
        #[arg(short, long)]
        year: Option<u16>,

        /// Puzzle day; prompted for when omitted
        #[arg(short, long)]
        day: Option<u8>,

        /// Overwrite skeletons that already exist
        #[arg(long)]
        force: bool,
    },

    /// Download input files: one day, a whole year, or every year
    Download {
        /// Year of the event; every year when omitted
        #[arg(short, long)]
        year: Option<u16>,

        /// Only download this day of the year
        #[arg(short, long, requires = "year")]
        day: Option<u8>,
    },
}
