// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use go_bundled_provides::Config;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// go.mod for a small vendored project (ignition-like).
pub const GO_MOD: &str = r#"module github.com/coreos/ignition/v2

go 1.15

require (
	cloud.google.com/go/storage v1.9.0
	github.com/aws/aws-sdk-go v1.30.28
	github.com/coreos/go-semver v0.3.0
	github.com/coreos/go-systemd/v22 v22.0.0
	github.com/google/uuid v1.1.1 // indirect
	github.com/pin/tftp v2.1.0+incompatible
	github.com/vincent-petithory/dataurl v0.0.0-20160330182126-9a301d65acbb
)

replace github.com/go-check/check => github.com/go-check/check v0.0.0-20180628173108-788fd7840127
"#;

/// Matching vendor/modules.txt, including a test-only package no module owns.
pub const MODULES_TXT: &str = r#"# cloud.google.com/go/storage v1.9.0
## explicit
cloud.google.com/go/storage
# github.com/aws/aws-sdk-go v1.30.28
## explicit
github.com/aws/aws-sdk-go/aws
github.com/aws/aws-sdk-go/aws/awserr
# github.com/coreos/go-semver v0.3.0
## explicit
github.com/coreos/go-semver/semver
# github.com/coreos/go-systemd/v22 v22.0.0
github.com/coreos/go-systemd/v22/dbus
# github.com/google/uuid v1.1.1
github.com/google/uuid
# github.com/pin/tftp v2.1.0+incompatible
github.com/pin/tftp
# github.com/stretchr/testify v1.5.1
github.com/stretchr/testify/assert
# github.com/vincent-petithory/dataurl v0.0.0-20160330182126-9a301d65acbb
github.com/vincent-petithory/dataurl
"#;

/// Expected stdout for [`GO_MOD`] + [`MODULES_TXT`].
pub const EXPECTED_PROVIDES: &str = "\
Provides: bundled(golang(cloud.google.com/go/storage)) = 1.9.0
Provides: bundled(golang(github.com/aws/aws-sdk-go/aws)) = 1.30.28
Provides: bundled(golang(github.com/aws/aws-sdk-go/aws/awserr)) = 1.30.28
Provides: bundled(golang(github.com/coreos/go-semver/semver)) = 0.3.0
Provides: bundled(golang(github.com/coreos/go-systemd/v22/dbus)) = 22.0.0
Provides: bundled(golang(github.com/google/uuid)) = 1.1.1
Provides: bundled(golang(github.com/pin/tftp)) = 2.1.0
Provides: bundled(golang(github.com/vincent-petithory/dataurl)) = 0.0.0-20160330182126.git9a301d65acbb
";

/// A temporary vendored Go project tree.
///
/// Keep the fixture alive for as long as its paths are used.
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    /// Empty project directory.
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Project with the given go.mod and vendor/modules.txt contents.
    pub fn with(go_mod: &str, modules_txt: &str) -> Self {
        let project = Self::empty();
        project.write_go_mod(go_mod);
        project.write_modules_txt(modules_txt);
        project
    }

    /// Project with the default fixture files.
    pub fn sample() -> Self {
        Self::with(GO_MOD, MODULES_TXT)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_go_mod(&self, content: &str) {
        fs::write(self.root().join("go.mod"), content).unwrap();
    }

    pub fn write_modules_txt(&self, content: &str) {
        let vendor = self.root().join("vendor");
        fs::create_dir_all(&vendor).unwrap();
        fs::write(vendor.join("modules.txt"), content).unwrap();
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    /// Config pointing at this project's default input locations.
    pub fn config(&self) -> Config {
        let defaults = Config::default();
        Config {
            go_mod: self.root().join(defaults.go_mod),
            modules_txt: self.root().join(defaults.modules_txt),
            match_mode: defaults.match_mode,
        }
    }
}
