// src/config.rs

//! Run configuration
//!
//! Settings are layered: command-line flags override an optional TOML file,
//! which overrides the built-in defaults.
//!
//! ```toml
//! go_mod = "go.mod"
//! modules_txt = "vendor/modules.txt"
//! match_mode = "literal"
//! ```

use crate::error::{Error, Result};
use crate::gomod::DEFAULT_GO_MOD_PATH;
use crate::resolver::MatchMode;
use crate::vendor::DEFAULT_MODULES_TXT_PATH;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Contents of a config file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Manifest path
    #[serde(default)]
    pub go_mod: Option<PathBuf>,

    /// Lock file path
    #[serde(default)]
    pub modules_txt: Option<PathBuf>,

    /// Prefix resolution policy
    #[serde(default)]
    pub match_mode: Option<MatchMode>,
}

impl ConfigFile {
    /// Parse a config document; `path` is only used for error messages
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&content, path)
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub directory: Option<PathBuf>,
    pub go_mod: Option<PathBuf>,
    pub modules_txt: Option<PathBuf>,
    pub match_mode: Option<MatchMode>,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub go_mod: PathBuf,
    pub modules_txt: PathBuf,
    pub match_mode: MatchMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            go_mod: PathBuf::from(DEFAULT_GO_MOD_PATH),
            modules_txt: PathBuf::from(DEFAULT_MODULES_TXT_PATH),
            match_mode: MatchMode::default(),
        }
    }
}

impl Config {
    /// Merge overrides over the config file over the defaults
    ///
    /// Relative input paths are anchored at `overrides.directory` when given.
    pub fn resolve(file: ConfigFile, overrides: Overrides) -> Self {
        let defaults = Self::default();

        let go_mod = overrides.go_mod.or(file.go_mod).unwrap_or(defaults.go_mod);
        let modules_txt = overrides
            .modules_txt
            .or(file.modules_txt)
            .unwrap_or(defaults.modules_txt);
        let match_mode = overrides
            .match_mode
            .or(file.match_mode)
            .unwrap_or(defaults.match_mode);

        let (go_mod, modules_txt) = match overrides.directory {
            Some(dir) => (dir.join(go_mod), dir.join(modules_txt)),
            None => (go_mod, modules_txt),
        };

        Self {
            go_mod,
            modules_txt,
            match_mode,
        }
    }
}
