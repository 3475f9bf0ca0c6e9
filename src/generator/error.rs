//! Generation error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of one generation stage.
///
/// Every variant aborts the run. A route entry without a component is
/// not an error; it is skipped.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The route table cannot be located or read.
    #[error("failed to load route table `{}`", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The route table is not valid JSON, or not an array of route objects.
    #[error("failed to parse route table `{}`", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The artifact cannot be written.
    #[error("failed to write import map `{}`", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The existing artifact cannot be read back for comparison.
    #[error("failed to read import map `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenerateError {
    /// Name of the failing stage.
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::Load { .. } => "load",
            Self::Parse { .. } => "parse",
            Self::Write { .. } => "write",
            Self::Read { .. } => "read",
        }
    }
}
