//! CLI-level errors (wraps the download, scaffold and settings errors)

use aoc_common::AocError;
use thiserror::Error;

use crate::download::DownloadError;
use crate::exitcode;
use crate::scaffold::ScaffoldError;
use crate::session::SessionError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Download(#[from] DownloadError),

    #[error(transparent)]
    Scaffold(#[from] ScaffoldError),

    #[error(transparent)]
    Settings(#[from] AocError),

    #[error("cannot read answer: {0}")]
    Prompt(#[from] std::io::Error),

    #[error("{0}")]
    Usage(String),
}

pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => exitcode::USAGE,
            CliError::Prompt(_) => exitcode::NOINPUT,
            CliError::Settings(_) => exitcode::CONFIG,
            CliError::Scaffold(_) => exitcode::CANTCREAT,
            CliError::Download(e) => match e {
                DownloadError::NotAuthenticated | DownloadError::Session(SessionError::Missing) => exitcode::NOPERM,
                DownloadError::Session(SessionError::Read { .. }) => exitcode::NOINPUT,
                DownloadError::Status { .. } | DownloadError::Http(_) => exitcode::UNAVAILABLE,
                DownloadError::Write { .. } => exitcode::CANTCREAT,
            },
        }
    }
}
