// src/provides.rs

//! `Provides: bundled(golang(...))` declarations for vendored packages
//!
//! Each vendored package whose owning module is in the [`ModuleTable`]
//! becomes one declaration carrying that module's normalized version.
//! Packages with no owner are most likely test-only dependencies and are
//! dropped without complaint.

use crate::error::Result;
use crate::resolver::{MatchMode, ModuleTable};
use crate::vendor::{self, PackageReader};
use std::fmt;
use std::io::BufRead;
use tracing::debug;

/// One bundled Go package declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundledProvide {
    /// Vendored package import path
    pub import_path: String,
    /// RPM version of the owning module
    pub version: String,
}

impl BundledProvide {
    pub fn new(import_path: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            import_path: import_path.into(),
            version: version.into(),
        }
    }

    /// The virtual capability, e.g. `bundled(golang(github.com/google/uuid))`
    pub fn capability(&self) -> String {
        format!("bundled(golang({}))", self.import_path)
    }
}

impl fmt::Display for BundledProvide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Provides: {} = {}", self.capability(), self.version)
    }
}

/// Resolve one import path against the table
pub fn provide_for(
    modules: &ModuleTable,
    import_path: &str,
    mode: MatchMode,
) -> Option<BundledProvide> {
    match modules.resolve(import_path, mode) {
        Some(module) => Some(BundledProvide::new(import_path, module.version.as_str())),
        None => {
            debug!("No module owns {}, assuming test-only", import_path);
            None
        }
    }
}

/// Declarations for an in-memory lock file, in line order
pub fn provides_from_str<'a>(
    modules: &'a ModuleTable,
    content: &'a str,
    mode: MatchMode,
) -> impl Iterator<Item = BundledProvide> + 'a {
    vendor::packages(content).filter_map(move |pkg| provide_for(modules, pkg, mode))
}

/// Declarations streamed from a lock file reader, in line order
///
/// The first read failure is yielded as an error and ends the sequence.
pub fn provides_from_reader<'a, R: BufRead + 'a>(
    modules: &'a ModuleTable,
    packages: PackageReader<R>,
    mode: MatchMode,
) -> impl Iterator<Item = Result<BundledProvide>> + 'a {
    packages.filter_map(move |pkg| match pkg {
        Ok(pkg) => provide_for(modules, &pkg, mode).map(Ok),
        Err(e) => Some(Err(e)),
    })
}
