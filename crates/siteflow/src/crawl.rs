//! Content directory crawler

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{Result, SiteError};

/// Walk every file under `root`, invoking `visit` for each one
///
/// Traversal is iterative over an explicit work stack. Directories are
/// deduplicated by canonical path, which terminates symlink cycles
/// instead of looping. Entries are visited in path order within each
/// directory, so two crawls of unchanged content see the same order.
pub fn crawl_directory<F>(root: &Path, mut visit: F) -> Result<()>
where
    F: FnMut(&Path) -> Result<()>,
{
    let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];
    let mut visited: HashSet<PathBuf> = HashSet::new();

    while let Some(dir) = pending.pop() {
        let canonical = dir.canonicalize().map_err(|e| SiteError::Crawl {
            path: dir.clone(),
            message: format!("Failed to canonicalize path: {e}"),
        })?;
        if !visited.insert(canonical.clone()) {
            warn!(dir = %canonical.display(), "Directory already visited, skipping cycle");
            continue;
        }

        let entries = std::fs::read_dir(&dir).map_err(|e| SiteError::Crawl {
            path: dir.clone(),
            message: format!("Failed to read directory: {e}"),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SiteError::Crawl {
                path: dir.clone(),
                message: format!("Failed to read directory entry: {e}"),
            })?;
            paths.push(entry.path());
        }
        paths.sort();

        for path in paths {
            if path.is_dir() {
                pending.push(path);
            } else {
                visit(&path)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn collect_files(root: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();
        crawl_directory(root, |path| {
            files.push(path.to_path_buf());
            Ok(())
        })
        .unwrap();
        files.sort();
        files
    }

    #[test]
    fn test_empty_directory_yields_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(collect_files(temp_dir.path()).is_empty());
    }

    #[test]
    fn test_visits_nested_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("index.html"), "<html></html>").unwrap();
        fs::create_dir_all(root.join("img")).unwrap();
        fs::write(root.join("img/logo.png"), [0u8; 4]).unwrap();
        fs::create_dir_all(root.join("css/vendor")).unwrap();
        fs::write(root.join("css/vendor/reset.css"), "body {}").unwrap();

        let files = collect_files(root);
        assert_eq!(files.len(), 3);
        assert!(files.iter().any(|p| p.ends_with("index.html")));
        assert!(files.iter().any(|p| p.ends_with("img/logo.png")));
        assert!(files.iter().any(|p| p.ends_with("css/vendor/reset.css")));
    }

    #[test]
    fn test_missing_directory_is_a_crawl_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("gone");

        let err = crawl_directory(&missing, |_| Ok(())).unwrap_err();
        assert!(matches!(err, SiteError::Crawl { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_cycle_terminates() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join("a/b")).unwrap();
        fs::write(root.join("a/b/page.html"), "<html></html>").unwrap();
        // a/b/loop -> a, a cycle through the parent
        std::os::unix::fs::symlink(root.join("a"), root.join("a/b/loop")).unwrap();

        let files = collect_files(root);
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("page.html"));
    }
}
