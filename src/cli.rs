// src/cli.rs
//! Command-line definitions
//!
//! Every flag is optional: run with no arguments from the root of a
//! vendored Go project to read `go.mod` and `vendor/modules.txt`.

use clap::Parser;
use go_bundled_provides::{MatchMode, Overrides};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "go-bundled-provides")]
#[command(author = "Conary Contributors")]
#[command(version)]
#[command(
    about = "Print RPM bundled(golang(...)) Provides for a vendored Go module",
    long_about = None
)]
pub struct Cli {
    /// Directory containing go.mod and vendor/ (default: current directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Path to the go.mod manifest (default: go.mod)
    #[arg(long, value_name = "PATH")]
    pub go_mod: Option<PathBuf>,

    /// Path to the vendoring lock file (default: vendor/modules.txt)
    #[arg(long, value_name = "PATH")]
    pub modules_txt: Option<PathBuf>,

    /// How module paths must prefix package import paths (default: literal)
    #[arg(long, value_enum)]
    pub match_mode: Option<MatchMode>,

    /// TOML config file with go_mod, modules_txt and match_mode keys
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            directory: self.directory.clone(),
            go_mod: self.go_mod.clone(),
            modules_txt: self.modules_txt.clone(),
            match_mode: self.match_mode,
        }
    }
}
