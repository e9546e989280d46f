//! Architecture tag for the generated file's build-selector line.
//!
//! The tag uses Go's `GOARCH` spelling since the Go toolchain is the one
//! reading the `// +build` line.

use std::fmt;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::error::{GenError, Result};

/// Target architecture identifier, passed through to the output unchecked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArchTag(String);

impl ArchTag {
    /// Create a tag from an explicit identifier. Surrounding whitespace is
    /// dropped, nothing else is checked.
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self(tag.as_ref().trim().to_string())
    }

    /// Tag of the architecture this generator was compiled for.
    ///
    /// Architectures without a known Go name keep Rust's name.
    pub fn host() -> Self {
        let rust_arch = std::env::consts::ARCH;
        match go_arch(rust_arch, cfg!(target_endian = "little")) {
            Some(arch) => Self::new(arch),
            None => {
                warn!(
                    "No Go architecture name known for '{}', using it verbatim",
                    rust_arch
                );
                Self::new(rust_arch)
            }
        }
    }

    /// Run `program args...` and take its trimmed stdout as the tag.
    pub fn query(program: &str, args: &[String]) -> Result<Self> {
        let command = std::iter::once(program)
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");
        debug!("Querying architecture with `{}`", command);

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| GenError::ArchQuery {
                command: command.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = match stderr.trim() {
                "" => output.status.to_string(),
                msg => msg.to_string(),
            };
            return Err(GenError::ArchQuery { command, reason });
        }

        Ok(Self::new(String::from_utf8_lossy(&output.stdout)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArchTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the architecture tag comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchSource {
    /// Supplied by the build orchestration
    Explicit(String),
    /// Output of an external toolchain command
    Query { program: String, args: Vec<String> },
    /// The architecture this generator was compiled for
    Host,
}

impl ArchSource {
    /// `go env GOHOSTARCH`
    pub fn go_env() -> Self {
        Self::Query {
            program: "go".to_string(),
            args: vec!["env".to_string(), "GOHOSTARCH".to_string()],
        }
    }

    /// Resolve the tag. A failed query never aborts generation: it is
    /// reported and the host tag is used instead.
    pub fn resolve(&self) -> ArchTag {
        match self {
            ArchSource::Explicit(tag) => ArchTag::new(tag),
            ArchSource::Query { program, args } => match ArchTag::query(program, args) {
                Ok(tag) => tag,
                Err(e) => {
                    let host = ArchTag::host();
                    warn!("{}; falling back to host architecture '{}'", e, host);
                    host
                }
            },
            ArchSource::Host => ArchTag::host(),
        }
    }
}

/// Map a Rust `target_arch` name to Go's `GOARCH` name.
pub fn go_arch(rust_arch: &str, little_endian: bool) -> Option<&'static str> {
    let arch = match (rust_arch, little_endian) {
        ("x86", _) => "386",
        ("x86_64", _) => "amd64",
        ("arm", _) => "arm",
        ("aarch64", _) => "arm64",
        ("loongarch64", _) => "loong64",
        ("mips", true) => "mipsle",
        ("mips", false) => "mips",
        ("mips64", true) => "mips64le",
        ("mips64", false) => "mips64",
        ("powerpc64", true) => "ppc64le",
        ("powerpc64", false) => "ppc64",
        ("riscv64", _) => "riscv64",
        ("s390x", _) => "s390x",
        _ => return None,
    };
    Some(arch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_go_arch_names() {
        assert_eq!(go_arch("x86_64", true), Some("amd64"));
        assert_eq!(go_arch("aarch64", true), Some("arm64"));
        assert_eq!(go_arch("x86", true), Some("386"));
        assert_eq!(go_arch("arm", true), Some("arm"));
        assert_eq!(go_arch("mips", true), Some("mipsle"));
        assert_eq!(go_arch("mips", false), Some("mips"));
        assert_eq!(go_arch("powerpc64", true), Some("ppc64le"));
        assert_eq!(go_arch("sparc64", false), None);
    }

    #[test]
    fn test_explicit_tag_is_trimmed_only() {
        assert_eq!(ArchTag::new(" arm64\n").as_str(), "arm64");
        assert_eq!(ArchTag::new("not-an-arch").as_str(), "not-an-arch");
        let source = ArchSource::Explicit("riscv64".to_string());
        assert_eq!(source.resolve().as_str(), "riscv64");
    }

    #[test]
    fn test_query_takes_trimmed_stdout() {
        let tag = ArchTag::query("echo", &args(&["  arm64  "])).unwrap();
        assert_eq!(tag.as_str(), "arm64");
    }

    #[test]
    fn test_query_failure() {
        let err = ArchTag::query("false", &[]).unwrap_err();
        assert!(matches!(err, GenError::ArchQuery { .. }));

        let err = ArchTag::query("v4l2-offsets-no-such-command", &[]).unwrap_err();
        match err {
            GenError::ArchQuery { command, .. } => {
                assert_eq!(command, "v4l2-offsets-no-such-command")
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_failed_query_falls_back_to_host() {
        let source = ArchSource::Query {
            program: "false".to_string(),
            args: Vec::new(),
        };
        assert_eq!(source.resolve(), ArchTag::host());
    }

    #[test]
    fn test_host_tag() {
        #[cfg(target_arch = "x86_64")]
        assert_eq!(ArchTag::host().as_str(), "amd64");
        #[cfg(target_arch = "aarch64")]
        assert_eq!(ArchTag::host().as_str(), "arm64");
        assert!(!ArchTag::host().as_str().is_empty());
    }
}
