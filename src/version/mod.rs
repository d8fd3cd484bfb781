// src/version/mod.rs

//! Conversion of Go module version tags into RPM-safe version strings
//!
//! go.mod pins each requirement to either a release tag (`v1.2.3`) or a
//! pseudo-version synthesized from a commit (`v0.0.0-20181031085051-9002847aa142`).
//! RPM rejects versions with more than one `-`, so pseudo-versions are folded
//! into a single release field:
//!
//! - `v1.2.3` → `1.2.3`
//! - `v2.3.4+incompatible` → `2.3.4`
//! - `v0.0.0-20181031085051-9002847aa142` → `0.0.0-20181031085051.git9002847aa142`
//!
//! See <https://golang.org/cmd/go/#hdr-Pseudo_versions> for the tag grammar.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Suffix Go appends to v2+ modules without a go.mod of their own
pub const INCOMPATIBLE_SUFFIX: &str = "+incompatible";

/// `<base>-<timestamp>-<12 hex commit>`, matched from the start of the tag.
///
/// The greedy base group makes the last `-digits-hex` run win, so anything
/// after the 12 commit characters is discarded.
static PSEUDO_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)-([0-9.]+)-([a-f0-9]{12})").unwrap());

/// The three components of a pseudo-version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PseudoVersion<'a> {
    /// Version the pseudo-version builds on (e.g. `0.0.0` or `1.2.4-0`)
    pub base: &'a str,
    /// Commit timestamp, possibly with a leading pre-release counter
    pub timestamp: &'a str,
    /// Abbreviated commit hash
    pub commit: &'a str,
}

impl<'a> PseudoVersion<'a> {
    /// Parse a pseudo-version from a tag with its `v` and `+incompatible` affixes removed
    ///
    /// This is a shape heuristic: a real release tag with a hyphenated
    /// pre-release that happens to end in `-<digits>-<12 hex>` is treated as
    /// a pseudo-version too.
    pub fn parse(tag: &'a str) -> Option<Self> {
        let caps = PSEUDO_VERSION_RE.captures(tag)?;
        Some(Self {
            base: caps.get(1)?.as_str(),
            timestamp: caps.get(2)?.as_str(),
            commit: caps.get(3)?.as_str(),
        })
    }
}

impl fmt::Display for PseudoVersion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}.git{}", self.base, self.timestamp, self.commit)
    }
}

/// Remove a trailing `+incompatible` and then a single leading `v`
pub fn strip_affixes(tag: &str) -> &str {
    let tag = tag.strip_suffix(INCOMPATIBLE_SUFFIX).unwrap_or(tag);
    tag.strip_prefix('v').unwrap_or(tag)
}

/// Convert a go.mod version tag into a version usable in an RPM `Provides:`
///
/// Never fails: tags that are neither release tags nor pseudo-versions come
/// back with only their affixes removed.
pub fn to_rpm_version(tag: &str) -> String {
    let tag = strip_affixes(tag);
    match PseudoVersion::parse(tag) {
        Some(pseudo) => pseudo.to_string(),
        None => tag.to_string(),
    }
}
