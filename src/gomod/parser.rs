// src/gomod/parser.rs

//! Line scanner for the `require ( ... )` block of a go.mod file.

use crate::error::{Error, Result};

/// Line opening the parenthesized require block
pub const REQUIRE_BLOCK_START: &str = "require (";

/// Prefix of the line closing the block
pub const REQUIRE_BLOCK_END: &str = ")";

/// A single `<module> <version>` requirement, as written in go.mod
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Module import path
    pub module: String,
    /// Raw version tag (e.g. `v1.2.3`, `v0.0.0-20181031085051-9002847aa142`)
    pub version: String,
}

impl Requirement {
    pub fn new(module: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            version: version.into(),
        }
    }
}

/// Extract the requirements from the first require block, in file order
///
/// Single-line `require foo v1.0.0` directives and any later require block
/// are ignored. Blank and `//` comment lines inside the block are skipped.
pub fn parse_requirements(content: &str) -> Result<Vec<Requirement>> {
    let mut requirements = Vec::new();
    let mut in_block = false;

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();

        if !in_block {
            in_block = line == REQUIRE_BLOCK_START;
            continue;
        }
        if line.starts_with(REQUIRE_BLOCK_END) {
            return Ok(requirements);
        }
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next()) {
            (Some(module), Some(version)) => {
                requirements.push(Requirement::new(module, version));
            }
            _ => {
                return Err(Error::MalformedRequire {
                    line: idx + 1,
                    content: line.to_string(),
                });
            }
        }
    }

    Ok(requirements)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GO_MOD: &str = r#"module github.com/coreos/ignition/v2

go 1.15

require (
	cloud.google.com/go v0.58.0
	github.com/aws/aws-sdk-go v1.30.28
	github.com/coreos/go-semver v0.3.0
	github.com/google/uuid v1.1.1 // indirect
	github.com/vincent-petithory/dataurl v0.0.0-20160330182126-9a301d65acbb
)

require golang.org/x/sys v0.0.0-20200610111108-226ff32320da
"#;

    #[test]
    fn test_parse_require_block() {
        let reqs = parse_requirements(GO_MOD).unwrap();
        assert_eq!(reqs.len(), 5);
        assert_eq!(reqs[0], Requirement::new("cloud.google.com/go", "v0.58.0"));
        assert_eq!(
            reqs[4],
            Requirement::new(
                "github.com/vincent-petithory/dataurl",
                "v0.0.0-20160330182126-9a301d65acbb"
            )
        );
    }

    #[test]
    fn test_extra_fields_ignored() {
        let reqs = parse_requirements(GO_MOD).unwrap();
        assert_eq!(reqs[3], Requirement::new("github.com/google/uuid", "v1.1.1"));
    }

    #[test]
    fn test_single_line_require_outside_block_ignored() {
        let reqs = parse_requirements(GO_MOD).unwrap();
        assert!(!reqs.iter().any(|r| r.module == "golang.org/x/sys"));
    }

    #[test]
    fn test_no_block_yields_nothing() {
        let content = "module example.com/foo\n\nrequire example.com/bar v1.0.0\n";
        assert!(parse_requirements(content).unwrap().is_empty());
    }

    #[test]
    fn test_start_marker_must_match_exactly() {
        let content = "require(\n\texample.com/bar v1.0.0\n)\n";
        assert!(parse_requirements(content).unwrap().is_empty());
    }

    #[test]
    fn test_only_first_block_read() {
        let content = "require (\n\ta.com/x v1.0.0\n)\n\nrequire (\n\tb.com/y v2.0.0\n)\n";
        let reqs = parse_requirements(content).unwrap();
        assert_eq!(reqs, vec![Requirement::new("a.com/x", "v1.0.0")]);
    }

    #[test]
    fn test_close_paren_before_block_does_not_stop() {
        let content = "replace (\n\ta.com/x => ../x\n)\n\nrequire (\n\tb.com/y v2.0.0\n)\n";
        let reqs = parse_requirements(content).unwrap();
        assert_eq!(reqs, vec![Requirement::new("b.com/y", "v2.0.0")]);
    }

    #[test]
    fn test_blank_and_comment_lines_skipped() {
        let content = "require (\n\n\t// pinned for CVE fix\n\ta.com/x v1.0.0\n)\n";
        let reqs = parse_requirements(content).unwrap();
        assert_eq!(reqs, vec![Requirement::new("a.com/x", "v1.0.0")]);
    }

    #[test]
    fn test_unterminated_block_reads_to_end() {
        let content = "require (\n\ta.com/x v1.0.0\n\tb.com/y v2.0.0\n";
        assert_eq!(parse_requirements(content).unwrap().len(), 2);
    }

    #[test]
    fn test_single_token_line_is_error() {
        let content = "module m\n\nrequire (\n\ta.com/x v1.0.0\n\tb.com/y\n)\n";
        match parse_requirements(content) {
            Err(Error::MalformedRequire { line, content }) => {
                assert_eq!(line, 5);
                assert_eq!(content, "b.com/y");
            }
            other => panic!("expected MalformedRequire, got {:?}", other),
        }
    }
}
