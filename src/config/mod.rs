//! Generator configuration for `importmap.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/   # [paths] and [render]
//! ├── error      # ConfigError, ConfigDiagnostics
//! ├── util       # config file lookup, identifier check
//! └── mod.rs     # GeneratorConfig (this file)
//! ```
//!
//! The config file is optional. Without one, the project root is the
//! current directory and every setting takes its default.

mod error;
pub mod section;
mod util;

pub use error::{ConfigDiagnostics, ConfigError};
pub use section::{LoaderStyle, PathsConfig, RenderConfig};

use util::find_config_file;

use crate::{cli::Cli, warn};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name, searched upward from the current directory.
pub const DEFAULT_CONFIG: &str = "importmap.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Start-up configuration, resolved once and read-only afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Config file that was loaded, if any (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root: parent of the config file, or cwd (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Input/output locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Artifact shape
    #[serde(default)]
    pub render: RenderConfig,
}

impl GeneratorConfig {
    /// Load configuration from CLI arguments.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(cli, &cwd)
    }

    /// Load configuration, searching for the config file upward from `start`.
    pub fn load_from(cli: &Cli, start: &Path) -> Result<Self> {
        let name = cli
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));

        let found = find_config_file(start, &name);
        if found.is_none() && cli.config.is_some() {
            return Err(ConfigError::NotFound(name).into());
        }

        let mut config = match &found {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };

        let root = found
            .as_deref()
            .and_then(Path::parent)
            .map_or_else(|| start.to_path_buf(), Path::to_path_buf);

        config.config_path = found;
        config.finalize(cli, root);
        config.validate()?;
        config.paths.resolve(&config.root);
        Ok(config)
    }

    /// Apply CLI overrides and record the project root.
    ///
    /// Paths stay as written until validated: `root.join("")` is the root
    /// itself, so an empty path is only detectable before resolution.
    fn finalize(&mut self, cli: &Cli, root: PathBuf) {
        crate::logger::set_verbose(cli.verbose);

        Self::update_option(&mut self.paths.routes, cli.routes.as_ref());
        Self::update_option(&mut self.paths.output, cli.output.as_ref());

        self.root = root;
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let (config, _) = Self::parse_with_ignored(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        crate::debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        warn!("config"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.paths.validate(&self.root, &mut diag);
        self.render.validate(&mut diag);
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Get path relative to the project root, for display.
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }
}

// ============================================================================
// tests
// ============================================================================
