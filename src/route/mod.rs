//! Route table data model.
//!
//! A route table is the JSON array read from `routes.json`:
//!
//! ```json
//! [
//!   { "path": "/", "component": "views/Home.jsx" },
//!   { "path": "/about", "component": "views/About.jsx", "title": "About" },
//!   { "path": "/redirect" }
//! ]
//! ```
//!
//! Only `path` and `component` are read; other fields are ignored.
//! Entry order is preserved.

mod load;

pub use load::load_route_table;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// One route: a URL pattern and the view component rendered for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// URL pattern, used verbatim as the mapping key.
    #[serde(default)]
    pub path: Option<String>,

    /// Source file of the view, relative to the artifact's directory.
    #[serde(default)]
    pub component: Option<String>,
}

impl RouteEntry {
    /// Non-empty component reference, if any.
    pub fn component(&self) -> Option<&str> {
        self.component.as_deref().filter(|c| !c.is_empty())
    }

    /// Mapping key; a missing path becomes the empty string.
    pub fn key(&self) -> &str {
        self.path.as_deref().unwrap_or_default()
    }
}

/// Ordered route entries, loaded once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub const fn new(entries: Vec<RouteEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries that produce a mapping entry, in input order.
    pub fn routable(&self) -> impl Iterator<Item = (&RouteEntry, &str)> {
        self.entries
            .iter()
            .filter_map(|entry| entry.component().map(|component| (entry, component)))
    }

    /// Keys that appear more than once among routable entries, in order of
    /// their second occurrence. Each key is reported once.
    pub fn duplicate_keys(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        let mut reported = FxHashSet::default();
        let mut duplicates = Vec::new();

        for (entry, _) in self.routable() {
            let key = entry.key();
            if !seen.insert(key) && reported.insert(key) {
                duplicates.push(key);
            }
        }
        duplicates
    }
}
