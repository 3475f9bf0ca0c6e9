//! Configuration errors and collected validation diagnostics.

use owo_colors::{Stream, Style};
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::logger::paint;

/// Failure to produce a usable configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{}`", .0.display())]
    Io(PathBuf, #[source] io::Error),

    #[error("invalid TOML in config file")]
    Toml(#[from] toml::de::Error),

    #[error("config file `{}` not found here or in any parent directory", .0.display())]
    NotFound(PathBuf),

    /// Rendered in full by `Display`, so it carries no `source`.
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// One rejected config value.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// Dotted key, e.g. `render.export_name`
    pub field: &'static str,
    pub message: String,
    pub hint: Option<String>,
}

/// Validation problems from every section, reported together.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: &'static str, message: impl Into<String>) {
        self.push(field, message.into(), None);
    }

    pub fn error_with_hint(
        &mut self,
        field: &'static str,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push(field, message.into(), Some(hint.into()));
    }

    fn push(&mut self, field: &'static str, message: String, hint: Option<String>) {
        self.errors.push(ConfigDiagnostic {
            field,
            message,
            hint,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    /// `Err(self)` if anything was collected.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

// Diagnostics end up on stderr through `logger::log_error`.
impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = paint(self.field, Style::new().cyan(), Stream::Stderr);
        write!(f, "  {field}: {}", self.message)?;
        if let Some(hint) = &self.hint {
            let label = paint("hint:", Style::new().yellow(), Stream::Stderr);
            write!(f, "\n    {label} {hint}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.errors.len();
        let noun = if count == 1 { "problem" } else { "problems" };
        let header = format!("invalid configuration ({count} {noun}):");
        write!(f, "{}", paint(&header, Style::new().red().bold(), Stream::Stderr))?;
        for err in &self.errors {
            write!(f, "\n{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("importmap.toml"),
            io::Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(io_err.to_string(), "cannot read config file `importmap.toml`");

        let missing = ConfigError::NotFound(PathBuf::from("custom.toml"));
        assert!(missing.to_string().contains("`custom.toml`"));
    }

    #[test]
    fn test_diagnostics_collect_and_render() {
        let mut diag = ConfigDiagnostics::new();
        assert!(diag.is_empty());

        diag.error("paths.routes", "must not be empty");
        diag.error_with_hint("render.export_name", "not an identifier", "use importsMap");
        assert_eq!(diag.errors().len(), 2);
        assert_eq!(diag.errors()[1].hint.as_deref(), Some("use importsMap"));

        let rendered = diag.to_string();
        assert!(rendered.contains("invalid configuration (2 problems):"));
        assert!(rendered.contains("paths.routes"));
        assert!(rendered.contains("must not be empty"));
        assert!(rendered.contains("use importsMap"));
        assert!(diag.into_result().is_err());
    }

    #[test]
    fn test_diagnostics_plain_without_color() {
        owo_colors::set_override(false);

        let mut diag = ConfigDiagnostics::new();
        diag.error_with_hint("paths.output", "must not be empty", "name a .jsx file");
        assert_eq!(
            diag.to_string(),
            "invalid configuration (1 problem):\n  paths.output: must not be empty\n    hint: name a .jsx file"
        );
    }
}
