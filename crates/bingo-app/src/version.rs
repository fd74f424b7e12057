//! Build metadata embedded at compile time.

use std::fmt::{self, Display};

/// Version of the running build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    /// Crate version from `Cargo.toml`.
    pub pkg_version: &'static str,
    /// Short git commit hash, or `unknown` when built outside a git checkout.
    pub git_sha: &'static str,
}

impl BuildInfo {
    /// Returns the metadata of the current build.
    #[must_use]
    pub const fn current() -> Self {
        let git_sha = match option_env!("VERGEN_GIT_SHA") {
            Some(sha) => sha,
            None => "unknown",
        };
        Self {
            pkg_version: env!("CARGO_PKG_VERSION"),
            git_sha,
        }
    }
}

impl Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.pkg_version, self.git_sha)
    }
}

#[cfg(test)]
mod tests {
    use super::BuildInfo;

    #[test]
    fn display_includes_version_and_hash() {
        let info = BuildInfo {
            pkg_version: "1.2.3",
            git_sha: "abc1234",
        };
        assert_eq!(info.to_string(), "1.2.3 (abc1234)");
        assert_eq!(BuildInfo::current().pkg_version, env!("CARGO_PKG_VERSION"));
    }
}
