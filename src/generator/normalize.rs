//! Component path normalization.
//!
//! Turns a route's `component` into an import specifier relative to the
//! generated artifact:
//!
//! ```text
//! views/Home.jsx         → ./views/Home.jsx
//! views\admin\Panel.jsx  → ./views/admin/Panel.jsx
//! ./views/Home.jsx       → ./views/Home.jsx
//! ```
//!
//! Output never depends on the host's separator convention.

use std::borrow::Cow;

/// Normalize a component path into an import specifier.
///
/// Backslashes become forward slashes. A leading `views_dir` segment gets a
/// `./` prefix so the import resolves relative to the artifact.
pub fn normalize_component<'a>(component: &'a str, views_dir: &str) -> Cow<'a, str> {
    let unix = to_forward_slashes(component);

    let rest = unix.strip_prefix(views_dir);
    let leads_with_views = matches!(rest, Some(r) if r.is_empty() || r.starts_with('/'));

    if leads_with_views {
        Cow::Owned(format!("./{unix}"))
    } else {
        unix
    }
}

/// Replace every `\` with `/`.
pub fn to_forward_slashes(path: &str) -> Cow<'_, str> {
    if path.contains('\\') {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views_prefix_becomes_relative() {
        assert_eq!(normalize_component("views/Home.jsx", "views"), "./views/Home.jsx");
        assert_eq!(normalize_component("views", "views"), "./views");
    }

    #[test]
    fn test_backslashes_converted() {
        assert_eq!(
            normalize_component("views\\admin\\Panel.jsx", "views"),
            "./views/admin/Panel.jsx"
        );
        assert_eq!(
            normalize_component("lib\\Widget.jsx", "views"),
            "lib/Widget.jsx"
        );
    }

    #[test]
    fn test_only_leading_segment_matches() {
        assert_eq!(normalize_component("viewsExtra/A.jsx", "views"), "viewsExtra/A.jsx");
        assert_eq!(normalize_component("src/views/A.jsx", "views"), "src/views/A.jsx");
        assert_eq!(normalize_component("./views/A.jsx", "views"), "./views/A.jsx");
    }

    #[test]
    fn test_custom_views_dir() {
        assert_eq!(normalize_component("pages/A.jsx", "pages"), "./pages/A.jsx");
        assert_eq!(normalize_component("views/A.jsx", "pages"), "views/A.jsx");
    }

    #[test]
    fn test_borrowed_when_untouched() {
        assert!(matches!(
            normalize_component("lib/A.jsx", "views"),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_idempotent() {
        for input in [
            "views/Home.jsx",
            "views\\a\\b.jsx",
            "lib\\x.jsx",
            "./views/A.jsx",
            "views",
            "",
        ] {
            let once = normalize_component(input, "views").into_owned();
            let twice = normalize_component(&once, "views").into_owned();
            assert_eq!(once, twice, "{input}");
            assert!(!once.contains('\\'));
        }
    }
}
