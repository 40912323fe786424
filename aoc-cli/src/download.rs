//! Puzzle input download.

use std::fs;
use std::path::PathBuf;

use aoc_common::config::{input_path, Settings};
use colored::Colorize;
use reqwest::blocking::Client;
use reqwest::header::{COOKIE, USER_AGENT};
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::event::{last_day, FIRST_YEAR};
use crate::session::{self, SessionError};

/// What the site answers instead of an input when the session is not valid.
pub const NOT_LOGGED_IN: &str = "Puzzle inputs differ by user.  Please log in to get your puzzle input.";

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("Not authenticated. Make sure to log in on a browser before running this command.")]
    NotAuthenticated,

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("{year} day {day}: server answered {status}")]
    Status { year: u16, day: u8, status: u16 },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Source of puzzle inputs.
pub trait InputFetcher {
    fn fetch(&self, year: u16, day: u8) -> Result<Vec<u8>, DownloadError>;
}

pub struct AocClient {
    client: Client,
    base_url: String,
    session: String,
    user_agent: String,
}

impl AocClient {
    pub fn new(settings: &Settings) -> Result<Self, DownloadError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            session: session::resolve(settings)?,
            user_agent: settings.user_agent.clone(),
        })
    }

    pub fn input_url(&self, year: u16, day: u8) -> String {
        format!("{}/{}/day/{}/input", self.base_url, year, day)
    }
}

impl InputFetcher for AocClient {
    #[instrument(skip(self))]
    fn fetch(&self, year: u16, day: u8) -> Result<Vec<u8>, DownloadError> {
        let url = self.input_url(year, day);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header(COOKIE, format!("{}={}", session::COOKIE_NAME, self.session))
            .header(USER_AGENT, &self.user_agent)
            .send()?;

        let status = response.status();
        let body = response.bytes()?.to_vec();
        check_response(year, day, status.as_u16(), body)
    }
}

/// Maps a raw response to an input body or the matching error.
pub fn check_response(year: u16, day: u8, status: u16, body: Vec<u8>) -> Result<Vec<u8>, DownloadError> {
    if String::from_utf8_lossy(&body).trim() == NOT_LOGGED_IN {
        return Err(DownloadError::NotAuthenticated);
    }
    if !(200..300).contains(&status) {
        return Err(DownloadError::Status { year, day, status });
    }
    Ok(body)
}

/// Fetches one day and stores it under the data directory.
pub fn download_day(fetcher: &dyn InputFetcher, settings: &Settings, year: u16, day: u8) -> Result<PathBuf, DownloadError> {
    let body = fetcher.fetch(year, day)?;
    let path = input_path(&settings.data_dir, year, day);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| DownloadError::Write { path: dir.to_path_buf(), source })?;
    }
    fs::write(&path, body).map_err(|source| DownloadError::Write { path: path.clone(), source })?;
    info!("wrote {}", path.display());
    eprintln!("{}", format!("Downloaded file for {} day {}", year, day).green());
    Ok(path)
}

/// Downloads the days of `year` in order, stopping at the first one that
/// fails (usually: not released yet). Returns the number of files written.
pub fn download_year(fetcher: &dyn InputFetcher, settings: &Settings, year: u16) -> usize {
    let mut downloaded = 0;
    for day in 1..=last_day(year) {
        match download_day(fetcher, settings, year, day) {
            Ok(_) => downloaded += 1,
            Err(e) => {
                debug!("stopping {} at day {}: {}", year, day, e);
                if matches!(e, DownloadError::NotAuthenticated | DownloadError::Session(_)) {
                    eprintln!("{}", e.to_string().red());
                }
                break;
            }
        }
    }
    downloaded
}

/// Every event from the first one up to `until`.
pub fn download_all(fetcher: &dyn InputFetcher, settings: &Settings, until: u16) -> usize {
    (FIRST_YEAR..=until).map(|year| download_year(fetcher, settings, year)).sum()
}
