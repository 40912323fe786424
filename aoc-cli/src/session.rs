//! Locating the adventofcode.com session cookie.

use std::fs;
use std::path::{Path, PathBuf};

use aoc_common::config::Settings;
use thiserror::Error;
use tracing::{debug, warn};

pub const COOKIE_DOMAIN: &str = "adventofcode.com";
pub const COOKIE_NAME: &str = "session";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("no session cookie found; log in on adventofcode.com in a browser, or set AOC_SESSION, a session file or a cookie_file export")]
    Missing,

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Resolves the session token: explicit setting, then the session file,
/// then the cookie export, then the browsers' own cookie stores.
pub fn resolve(settings: &Settings) -> Result<String, SessionError> {
    resolve_with(settings, browser_session)
}

/// [`resolve`] with the browser lookup supplied by the caller.
pub fn resolve_with(settings: &Settings, browser: impl FnOnce() -> Option<String>) -> Result<String, SessionError> {
    if let Some(token) = settings.session.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        debug!("session from settings");
        return Ok(token.to_string());
    }
    if let Some(path) = &settings.session_file {
        if let Some(token) = read_session_file(path)? {
            debug!("session from {}", path.display());
            return Ok(token);
        }
    }
    if let Some(path) = &settings.cookie_file {
        match read_optional(path)? {
            Some(text) => {
                if let Some(token) = find_session_cookie(&text) {
                    debug!("session from cookie export {}", path.display());
                    return Ok(token);
                }
                warn!("no {} cookie for {} in {}", COOKIE_NAME, COOKIE_DOMAIN, path.display());
            }
            None => warn!("cookie file {} does not exist", path.display()),
        }
    }
    browser().ok_or(SessionError::Missing)
}

/// Reads the session cookie straight from the installed browsers.
fn browser_session() -> Option<String> {
    match rookie::load(Some(vec![COOKIE_DOMAIN.to_string()])) {
        Ok(cookies) => {
            let token = pick_session(cookies.iter().map(|c| (c.domain.as_str(), c.name.as_str(), c.value.as_str())));
            match &token {
                Some(_) => debug!("session from browser cookie store"),
                None => debug!("no {} cookie for {} in any browser", COOKIE_NAME, COOKIE_DOMAIN),
            }
            token
        }
        Err(e) => {
            warn!("cannot read browser cookies: {}", e);
            None
        }
    }
}

/// Picks the session token among `(domain, name, value)` cookies.
pub fn pick_session<'a>(cookies: impl IntoIterator<Item = (&'a str, &'a str, &'a str)>) -> Option<String> {
    cookies.into_iter().find_map(|(domain, name, value)| {
        (domain.ends_with(COOKIE_DOMAIN) && name == COOKIE_NAME && !value.trim().is_empty())
            .then(|| value.trim().to_string())
    })
}

fn read_session_file(path: &Path) -> Result<Option<String>, SessionError> {
    Ok(read_optional(path)?
        .map(|text| text.trim().to_string())
        .filter(|token| !token.is_empty()))
}

fn read_optional(path: &Path) -> Result<Option<String>, SessionError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(SessionError::Read { path: path.to_path_buf(), source }),
    }
}

/// Finds the session cookie in a Netscape `cookies.txt` export.
///
/// Lines are `domain flag path secure expiry name value`, tab separated;
/// `#HttpOnly_` prefixed domains are cookies, other `#` lines are comments.
pub fn find_session_cookie(cookies_txt: &str) -> Option<String> {
    pick_session(cookies_txt.lines().filter_map(|line| {
        let line = line.strip_prefix("#HttpOnly_").unwrap_or(line);
        if line.starts_with('#') {
            return None;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        let [domain, _, _, _, _, name, value] = fields[..] else { return None };
        Some((domain, name, value))
    }))
}
