//! Route table loading.
//!
//! Loading is a two-step acquisition:
//!
//! 1. [`LoadStrategy::Stream`]: open the file and deserialize through a
//!    buffered reader.
//! 2. [`LoadStrategy::ReadAll`]: read the whole file into memory, then parse
//!    the bytes.
//!
//! The second strategy runs only when the first fails for an I/O reason.
//! Invalid content fails immediately: re-reading the same bytes cannot fix it.

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

use serde_json::error::Category;

use super::RouteTable;
use crate::generator::GenerateError;
use crate::{debug, warn};

/// How the route table document gets from disk into memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStrategy {
    /// Buffered streaming deserialization (primary)
    Stream,
    /// Whole-file read, then parse (fallback)
    ReadAll,
}

/// Load the route table, falling back to a whole-file read on I/O failure.
pub fn load_route_table(path: &Path) -> Result<RouteTable, GenerateError> {
    match load_with(path, LoadStrategy::Stream) {
        Ok(table) => Ok(table),
        Err(GenerateError::Load { source, .. }) => {
            warn!("load"; "streaming read of {} failed ({}), falling back to full read",
                path.display(), source);
            load_with(path, LoadStrategy::ReadAll)
        }
        Err(err) => Err(err),
    }
}

/// Load the route table with one specific strategy.
pub fn load_with(path: &Path, strategy: LoadStrategy) -> Result<RouteTable, GenerateError> {
    debug!("load"; "{:?} {}", strategy, path.display());

    let table: RouteTable = match strategy {
        LoadStrategy::Stream => {
            let file = File::open(path).map_err(|source| load_error(path, source))?;
            serde_json::from_reader(BufReader::new(file))
                .map_err(|source| classify(path, source))?
        }
        LoadStrategy::ReadAll => {
            let bytes = fs::read(path).map_err(|source| load_error(path, source))?;
            serde_json::from_slice(&bytes).map_err(|source| classify(path, source))?
        }
    };

    debug!("load"; "{} route entries", table.len());
    Ok(table)
}

fn load_error(path: &Path, source: io::Error) -> GenerateError {
    GenerateError::Load {
        path: path.to_path_buf(),
        source,
    }
}

/// Split a deserialization failure into an I/O failure or a content failure.
fn classify(path: &Path, source: serde_json::Error) -> GenerateError {
    match source.classify() {
        Category::Io => load_error(path, io::Error::from(source)),
        Category::Syntax | Category::Data | Category::Eof => GenerateError::Parse {
            path: path.to_path_buf(),
            source,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::RouteEntry;
    use tempfile::TempDir;

    fn write_routes(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("routes.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_preserves_order() {
        let dir = TempDir::new().unwrap();
        let path = write_routes(
            &dir,
            r#"[{"path":"/z","component":"views/Z.jsx"},{"path":"/a","component":"views/A.jsx"}]"#,
        );

        let table = load_route_table(&path).unwrap();
        let keys: Vec<_> = table.entries().iter().map(RouteEntry::key).collect();
        assert_eq!(keys, ["/z", "/a"]);
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let dir = TempDir::new().unwrap();
        let err = load_route_table(&dir.path().join("missing.json")).unwrap_err();
        match err {
            GenerateError::Load { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected load error, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_is_load_error() {
        let dir = TempDir::new().unwrap();
        let err = load_route_table(dir.path()).unwrap_err();
        assert_eq!(err.stage(), "load");
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        for content in [
            "[{\"path\": \"/\"",
            "not json",
            "",
            "{\"path\": \"/\"}",
            "[\"/\"]",
            "[] trailing",
        ] {
            let path = write_routes(&dir, content);
            for strategy in [LoadStrategy::Stream, LoadStrategy::ReadAll] {
                let err = load_with(&path, strategy).unwrap_err();
                assert_eq!(err.stage(), "parse", "{content:?} with {strategy:?}");
            }
        }
    }

    /// Both strategies must agree on every input, valid or not.
    #[test]
    fn test_strategies_agree() {
        let dir = TempDir::new().unwrap();
        let paths = ["/", "/a", "/a/:id", "/\"quoted\"", "/ünïcödé", ""];
        let components = [
            None,
            Some(""),
            Some("views/Home.jsx"),
            Some("views\\nested\\Page.jsx"),
            Some("components/Widget.jsx"),
        ];

        let mut documents = vec!["[]".to_string(), " \n[ ]\n".to_string()];
        for (i, path) in paths.iter().enumerate() {
            let mut entries = Vec::new();
            for (j, component) in components.iter().enumerate() {
                let mut object = serde_json::Map::new();
                if (i + j) % 3 != 0 {
                    object.insert("path".into(), (*path).into());
                }
                if let Some(component) = component {
                    object.insert("component".into(), (*component).into());
                }
                if j % 2 == 0 {
                    object.insert("exact".into(), true.into());
                }
                entries.push(serde_json::Value::Object(object));
                documents.push(serde_json::to_string(&entries).unwrap());
                documents.push(serde_json::to_string_pretty(&entries).unwrap());
            }
        }
        documents.push("[{\"path\": \"/\", \"component\": 1}]".into());
        documents.push("[{\"path\": \"/\"".into());

        for document in &documents {
            let path = write_routes(&dir, document);
            let streamed = load_with(&path, LoadStrategy::Stream);
            let read_all = load_with(&path, LoadStrategy::ReadAll);
            match (streamed, read_all) {
                (Ok(a), Ok(b)) => assert_eq!(a, b, "{document}"),
                (Err(a), Err(b)) => assert_eq!(a.stage(), b.stage(), "{document}"),
                (a, b) => panic!("strategies disagree on {document}: {a:?} vs {b:?}"),
            }
        }
    }
}
