//! `[render]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [render]
//! views_dir = "views"          # Leading segment rewritten to `./views`
//! loader = "react-lazy"        # react-lazy | dynamic-import
//! export_name = "importsMap"   # Name of the exported mapping
//! ```

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::util::{is_identifier, is_reserved_word};

/// Shape of the generated artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Directory-prefix token that becomes a relative import.
    pub views_dir: String,

    /// How each deferred-load reference is written.
    pub loader: LoaderStyle,

    /// Exported binding name of the mapping.
    pub export_name: String,
}

/// Deferred-load expression emitted per route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoaderStyle {
    /// `React.lazy(() => import('...'))`, with `import React from 'react'`
    #[default]
    ReactLazy,
    /// `() => import('...')`, no framework import
    DynamicImport,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            views_dir: "views".into(),
            loader: LoaderStyle::default(),
            export_name: "importsMap".into(),
        }
    }
}

impl RenderConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.views_dir.is_empty() {
            diag.error("render.views_dir", "must not be empty");
        } else if self.views_dir.contains(['/', '\\']) {
            diag.error_with_hint(
                "render.views_dir",
                format!("`{}` must be a single path segment", self.views_dir),
                "only the leading segment of a component path is rewritten",
            );
        }

        if !is_identifier(&self.export_name) {
            diag.error_with_hint(
                "render.export_name",
                format!("`{}` is not a valid identifier", self.export_name),
                "use letters, digits, `_` or `$`, not starting with a digit",
            );
        } else if is_reserved_word(&self.export_name) {
            diag.error_with_hint(
                "render.export_name",
                format!("`{}` is a reserved word", self.export_name),
                "pick a plain name such as `importsMap`",
            );
        } else if self.loader == LoaderStyle::ReactLazy && self.export_name == "React" {
            diag.error_with_hint(
                "render.export_name",
                "`React` is already bound by `import React from 'react'`",
                "pick another name, or set `loader = \"dynamic-import\"`",
            );
        }
    }
}
