//! `[paths]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [paths]
//! routes = "src/routes.json"      # Route table (JSON array)
//! output = "src/importsMap.jsx"   # Generated artifact, overwritten each run
//! ```
//!
//! Relative paths resolve against the project root.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::ConfigDiagnostics;

/// Input and output locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Route table document.
    pub routes: PathBuf,

    /// Generated artifact.
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            routes: "src/routes.json".into(),
            output: "src/importsMap.jsx".into(),
        }
    }
}

impl PathsConfig {
    /// Resolve both paths against `root`. Absolute paths are kept as-is.
    pub fn resolve(&mut self, root: &Path) {
        self.routes = root.join(&self.routes);
        self.output = root.join(&self.output);
    }

    /// Check the paths as written, before [`resolve`](Self::resolve).
    pub fn validate(&self, root: &Path, diag: &mut ConfigDiagnostics) {
        if self.routes.as_os_str().is_empty() {
            diag.error("paths.routes", "must not be empty");
        }
        if self.output.as_os_str().is_empty() {
            diag.error("paths.output", "must not be empty");
        } else if self.output.file_name().is_none() {
            diag.error_with_hint(
                "paths.output",
                format!("`{}` does not name a file", self.output.display()),
                "point it at the .jsx file to generate",
            );
        } else if root.join(&self.routes) == root.join(&self.output) {
            diag.error_with_hint(
                "paths.output",
                "must differ from paths.routes",
                "the route table would be overwritten by the artifact",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let paths = PathsConfig::default();
        assert_eq!(paths.routes, PathBuf::from("src/routes.json"));
        assert_eq!(paths.output, PathBuf::from("src/importsMap.jsx"));
    }

    #[test]
    fn test_resolve_against_root() {
        let mut paths = PathsConfig {
            routes: "routes.json".into(),
            output: "/abs/out.jsx".into(),
        };
        paths.resolve(Path::new("/project"));
        assert_eq!(paths.routes, PathBuf::from("/project/routes.json"));
        assert_eq!(paths.output, PathBuf::from("/abs/out.jsx"));
    }

    fn rejected(routes: &str, output: &str) -> Vec<&'static str> {
        let paths = PathsConfig {
            routes: routes.into(),
            output: output.into(),
        };
        let mut diag = ConfigDiagnostics::new();
        paths.validate(Path::new("/project"), &mut diag);
        diag.errors().iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_validate_accepts_defaults() {
        let defaults = PathsConfig::default();
        let mut diag = ConfigDiagnostics::new();
        defaults.validate(Path::new("/project"), &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_validate_rejects_same_path() {
        assert_eq!(rejected("a.json", "a.json"), ["paths.output"]);
        assert_eq!(rejected("a.json", "/project/a.json"), ["paths.output"]);
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert_eq!(rejected("", ""), ["paths.routes", "paths.output"]);
        assert_eq!(rejected("routes.json", ""), ["paths.output"]);
    }

    #[test]
    fn test_validate_rejects_directory_output() {
        for output in [".", "..", "src/..", "/"] {
            assert_eq!(rejected("routes.json", output), ["paths.output"], "{output}");
        }
    }
}
