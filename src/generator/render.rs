//! Import map rendering.
//!
//! # Output Format
//!
//! ```text
//! import React from 'react'
//! export const importsMap = {
//!   "/": React.lazy(() => import('./views/Home.jsx')),
//! }
//! export default importsMap
//! ```
//!
//! With `loader = "dynamic-import"` the first line is dropped and each value
//! is a bare `() => import('...')` thunk.

use std::borrow::Cow;

use super::normalize::normalize_component;
use crate::config::{LoaderStyle, RenderConfig};
use crate::route::RouteTable;

/// Rendered mapping, one entry per routable route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportMap {
    entries: Vec<MapEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEntry {
    /// Route path, verbatim
    pub key: String,
    /// Normalized import specifier
    pub specifier: String,
}

impl ImportMap {
    pub fn build(table: &RouteTable, config: &RenderConfig) -> Self {
        let entries = table
            .routable()
            .map(|(entry, component)| MapEntry {
                key: entry.key().to_owned(),
                specifier: normalize_component(component, &config.views_dir).into_owned(),
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[MapEntry] {
        &self.entries
    }

    pub fn into_source(self, config: &RenderConfig) -> String {
        let name = &config.export_name;
        let mut out = String::with_capacity(64 + self.entries.len() * 64);

        if config.loader == LoaderStyle::ReactLazy {
            out.push_str("import React from 'react'\n");
        }
        out.push_str("export const ");
        out.push_str(name);
        out.push_str(" = {\n");

        for entry in &self.entries {
            let key = escape_js(&entry.key, '"');
            let specifier = escape_js(&entry.specifier, '\'');
            let line = match config.loader {
                LoaderStyle::ReactLazy => {
                    format!("  \"{key}\": React.lazy(() => import('{specifier}')),\n")
                }
                LoaderStyle::DynamicImport => format!("  \"{key}\": () => import('{specifier}'),\n"),
            };
            out.push_str(&line);
        }

        out.push_str("}\nexport default ");
        out.push_str(name);
        out.push('\n');
        out
    }
}

/// Escape a string for a JS string literal delimited by `quote`.
fn escape_js(s: &str, quote: char) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(|c: char| c == quote || matches!(c, '\\' | '\n' | '\r' | '\u{2028}' | '\u{2029}'))
    {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            c if c == quote => {
                escaped.push('\\');
                escaped.push(c);
            }
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
