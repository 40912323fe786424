//! Settings with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/aoc/aoc.toml`
//! 3. Local config: `./aoc.toml`
//! 4. Environment variables: `AOC_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AocResult;

pub const LOCAL_CONFIG_FILE: &str = "aoc.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Root of the downloaded inputs, `<data_dir>/year_<year>/day_<day>.txt`
    pub data_dir: PathBuf,
    /// Cargo workspace the scaffolder writes year crates into
    pub workspace_root: PathBuf,
    pub base_url: String,
    pub user_agent: String,
    /// Session token; usually supplied as `AOC_SESSION`
    pub session: Option<String>,
    /// File holding the bare session token
    pub session_file: Option<PathBuf>,
    /// Browser cookie export in Netscape `cookies.txt` format
    pub cookie_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            workspace_root: PathBuf::from("."),
            base_url: "https://adventofcode.com".to_string(),
            user_agent: concat!("aoc-archive/", env!("CARGO_PKG_VERSION"), " (personal input downloader)")
                .to_string(),
            session: None,
            session_file: global_config_dir().map(|dir| dir.join("session")),
            cookie_file: None,
        }
    }
}

impl Settings {
    /// Loads all layers, starting the local lookup in the working directory.
    pub fn load() -> AocResult<Self> {
        Self::load_from(Path::new("."))
    }

    pub fn load_from(local_dir: &Path) -> AocResult<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Settings::default())?);

        if let Some(global) = global_config_dir().map(|dir| dir.join(LOCAL_CONFIG_FILE)) {
            debug!("global config: {}", global.display());
            builder = builder.add_source(File::from(global).required(false));
        }
        let local = local_dir.join(LOCAL_CONFIG_FILE);
        debug!("local config: {}", local.display());
        builder = builder
            .add_source(File::from(local).required(false))
            .add_source(Environment::with_prefix("AOC"));

        Ok(builder.build()?.try_deserialize()?)
    }

    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        input_path(&self.data_dir, year, day)
    }
}

pub fn input_path(data_dir: &Path, year: u16, day: u8) -> PathBuf {
    data_dir.join(format!("year_{}", year)).join(format!("day_{}.txt", day))
}

/// `$XDG_CONFIG_HOME/aoc` or the platform equivalent.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "aoc").map(|dirs| dirs.config_dir().to_path_buf())
}
