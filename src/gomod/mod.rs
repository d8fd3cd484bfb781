// src/gomod/mod.rs

//! go.mod manifest reading
//!
//! Only the parenthesized require block is consulted:
//!
//! ```text
//! require (
//!     github.com/coreos/go-semver v0.3.0
//!     github.com/google/uuid v1.1.1 // indirect
//! )
//! ```
//!
//! Each entry maps a module path to the raw version tag pinned for it. Tags
//! are left untouched here; see [`crate::version`] for RPM normalization.

pub mod parser;

pub use parser::{parse_requirements, Requirement, REQUIRE_BLOCK_END, REQUIRE_BLOCK_START};

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Default manifest location, relative to the project root
pub const DEFAULT_GO_MOD_PATH: &str = "go.mod";

/// Read a go.mod file and return its require block entries in file order
pub fn read_requirements(path: &Path) -> Result<Vec<Requirement>> {
    let content = fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
    let requirements = parse_requirements(&content)?;
    debug!(
        "Read {} requirements from {}",
        requirements.len(),
        path.display()
    );
    Ok(requirements)
}
