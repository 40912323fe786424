use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AocError {
    #[error("no input at {0}; run `aoc download` first or pass --input")]
    InputMissing(PathBuf),

    #[error("failed to read {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no solution registered for {year} day {day}; available days: {available}")]
    UnknownDay { year: u16, day: u8, available: String },

    #[error("puzzles have parts 1 and 2, not {0}")]
    InvalidPart(u8),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type AocResult<T> = Result<T, AocError>;
