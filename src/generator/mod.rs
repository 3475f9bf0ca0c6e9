//! Import map generation.
//!
//! One linear pass per run:
//!
//! ```text
//! routes.json ─→ RouteTable ─→ ImportMap ─→ source text ─→ importsMap.jsx
//!    load          build         render         write (atomic)
//! ```
//!
//! Load and parse failures happen before anything is written, so the
//! artifact on disk is left untouched.

mod error;
mod normalize;
mod render;
mod write;

pub use error::GenerateError;

use render::ImportMap;
use write::write_atomic;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::RenderConfig;
use crate::route::load_route_table;
use crate::{debug, warn};

/// Rendered artifact, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Full source text
    pub source: String,
    /// Mapping entries emitted
    pub routes: usize,
    /// Entries skipped for having no component
    pub skipped: usize,
}

/// Outcome of a successful `generate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub output: PathBuf,
    pub routes: usize,
    pub skipped: usize,
}

/// Result of comparing a fresh render with the artifact on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    UpToDate,
    Stale,
    Missing,
}

/// Load the route table at `routes` and render the artifact in memory.
pub fn prepare(routes: &Path, config: &RenderConfig) -> Result<Artifact, GenerateError> {
    let table = load_route_table(routes)?;

    for duplicate in table.duplicate_keys() {
        warn!("routes"; "duplicate path `{}`, the last entry wins", duplicate);
    }
    for (entry, component) in table.routable() {
        if entry.path.is_none() {
            warn!("routes"; "`{}` has no path, mapped under the empty key", component);
        }
    }

    let map = ImportMap::build(&table, config);
    let routes = map.entries().len();
    let skipped = table.len() - routes;
    debug!("render"; "{} routes, {} skipped", routes, skipped);

    Ok(Artifact {
        source: map.into_source(config),
        routes,
        skipped,
    })
}

/// Generate the import map: load `routes`, render, and write `output`.
///
/// `output` is overwritten. On any failure it is left as it was.
pub fn generate(
    routes: &Path,
    output: &Path,
    config: &RenderConfig,
) -> Result<GenerateReport, GenerateError> {
    let artifact = prepare(routes, config)?;

    write_atomic(output, artifact.source.as_bytes()).map_err(|source| GenerateError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(GenerateReport {
        output: output.to_path_buf(),
        routes: artifact.routes,
        skipped: artifact.skipped,
    })
}

/// Compare a fresh render of `routes` with the artifact at `output`.
pub fn check(
    routes: &Path,
    output: &Path,
    config: &RenderConfig,
) -> Result<Freshness, GenerateError> {
    let artifact = prepare(routes, config)?;

    match fs::read(output) {
        Ok(existing) if existing == artifact.source.as_bytes() => Ok(Freshness::UpToDate),
        Ok(_) => Ok(Freshness::Stale),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Freshness::Missing),
        Err(source) => Err(GenerateError::Read {
            path: output.to_path_buf(),
            source,
        }),
    }
}
