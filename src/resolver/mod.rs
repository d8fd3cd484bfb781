// src/resolver/mod.rs

//! Module lookup table and import path resolution
//!
//! A vendored package belongs to the module whose path prefixes its import
//! path. The table keeps modules in manifest order and resolution returns the
//! first qualifying module, not the longest one:
//!
//! ```text
//! modules: example.com/foo, example.com/foo/v2
//! example.com/foo/v2/bar -> example.com/foo    (first match wins)
//! ```

use crate::gomod::Requirement;
use crate::version::to_rpm_version;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// How a module path has to prefix an import path to own it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Plain string prefix; `example.com/foo` also owns `example.com/foobar`
    #[default]
    Literal,
    /// Prefix must end on a path segment boundary
    Segment,
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::Segment => "segment",
        }
    }

    /// Does `module` own `import_path` under this mode?
    pub fn matches(&self, module: &str, import_path: &str) -> bool {
        let Some(rest) = import_path.strip_prefix(module) else {
            return false;
        };
        match self {
            Self::Literal => true,
            Self::Segment => rest.is_empty() || rest.starts_with('/'),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "literal" => Ok(Self::Literal),
            "segment" => Ok(Self::Segment),
            other => Err(format!("unknown match mode '{}'", other)),
        }
    }
}

/// A module and the RPM version it is bundled at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleEntry {
    pub path: String,
    pub version: String,
}

/// Modules from go.mod, in manifest order, with normalized versions
///
/// Built once before any lookup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ModuleTable {
    entries: Vec<ModuleEntry>,
    index: HashMap<String, usize>,
}

impl ModuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table from raw requirements, normalizing each tag
    pub fn from_requirements(requirements: &[Requirement]) -> Self {
        let mut table = Self::new();
        for req in requirements {
            table.insert(&req.module, to_rpm_version(&req.version));
        }
        table
    }

    /// Add a module; a repeated path replaces the version but keeps its position
    pub fn insert(&mut self, path: &str, version: impl Into<String>) {
        let version = version.into();
        match self.index.get(path) {
            Some(&pos) => {
                debug!(
                    "Module {} listed twice, {} replaces {}",
                    path, version, self.entries[pos].version
                );
                self.entries[pos].version = version;
            }
            None => {
                self.index.insert(path.to_string(), self.entries.len());
                self.entries.push(ModuleEntry {
                    path: path.to_string(),
                    version,
                });
            }
        }
    }

    /// Normalized version for an exact module path
    pub fn get(&self, path: &str) -> Option<&str> {
        self.index
            .get(path)
            .map(|&pos| self.entries[pos].version.as_str())
    }

    /// First module, in manifest order, that owns `import_path`
    pub fn resolve(&self, import_path: &str, mode: MatchMode) -> Option<&ModuleEntry> {
        self.entries
            .iter()
            .find(|entry| mode.matches(&entry.path, import_path))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModuleEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for ModuleTable {
    /// Collect `(path, normalized version)` pairs without further normalization
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (path, version) in iter {
            table.insert(&path, version);
        }
        table
    }
}
