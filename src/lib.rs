// src/lib.rs

//! Bundled Go provides generator
//!
//! Turns a vendored Go project's `go.mod` and `vendor/modules.txt` into RPM
//! `Provides: bundled(golang(<package>)) = <version>` lines, one per vendored
//! package, so the built RPM advertises every third-party Go package it
//! carries.
//!
//! # Pipeline
//!
//! - [`gomod`]: read the require block into module → raw tag pairs
//! - [`version`]: fold each tag into an RPM-safe version
//! - [`resolver`]: ordered module table and import path ownership
//! - [`vendor`] + [`provides`]: stream modules.txt and emit declarations

pub mod config;
mod error;
pub mod gomod;
pub mod provides;
pub mod resolver;
pub mod vendor;
pub mod version;

pub use config::{Config, ConfigFile, Overrides};
pub use error::{Error, Result};
pub use gomod::Requirement;
pub use provides::BundledProvide;
pub use resolver::{MatchMode, ModuleEntry, ModuleTable};

use std::fs::File;
use std::io::{BufReader, Write};
use tracing::info;

/// Build the module table from the configured go.mod
pub fn load_modules(config: &Config) -> Result<ModuleTable> {
    let requirements = gomod::read_requirements(&config.go_mod)?;
    let modules = ModuleTable::from_requirements(&requirements);
    info!(
        "Loaded {} modules from {}",
        modules.len(),
        config.go_mod.display()
    );
    Ok(modules)
}

/// Write one declaration per resolvable vendored package to `out`
///
/// go.mod is read completely before modules.txt is opened. Returns the
/// number of declarations written.
pub fn generate<W: Write>(config: &Config, out: &mut W) -> Result<usize> {
    let modules = load_modules(config)?;

    let file = File::open(&config.modules_txt).map_err(|e| Error::read(&config.modules_txt, e))?;
    let packages = vendor::PackageReader::new(BufReader::new(file), &config.modules_txt);

    let mut count = 0;
    for provide in provides::provides_from_reader(&modules, packages, config.match_mode) {
        writeln!(out, "{}", provide?)?;
        count += 1;
    }
    out.flush()?;

    info!(
        "Wrote {} bundled provides ({} match mode)",
        count, config.match_mode
    );
    Ok(count)
}
