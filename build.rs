// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: an optional input path
fn path_arg(id: &'static str, long: &'static str, help: &'static str) -> Arg {
    Arg::new(id).long(long).value_name("PATH").help(help)
}

fn build_cli() -> Command {
    Command::new("go-bundled-provides")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Conary Contributors")
        .about("Print RPM bundled(golang(...)) Provides for a vendored Go module")
        .arg(
            Arg::new("directory")
                .short('C')
                .long("directory")
                .value_name("DIR")
                .help("Directory containing go.mod and vendor/ (default: current directory)"),
        )
        .arg(path_arg(
            "go_mod",
            "go-mod",
            "Path to the go.mod manifest (default: go.mod)",
        ))
        .arg(path_arg(
            "modules_txt",
            "modules-txt",
            "Path to the vendoring lock file (default: vendor/modules.txt)",
        ))
        .arg(
            Arg::new("match_mode")
                .long("match-mode")
                .value_parser(["literal", "segment"])
                .help("How module paths must prefix package import paths (default: literal)"),
        )
        .arg(path_arg(
            "config",
            "config",
            "TOML config file with go_mod, modules_txt and match_mode keys",
        ))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Create man directory - use CARGO_MANIFEST_DIR which is always set by cargo
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("go-bundled-provides.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
