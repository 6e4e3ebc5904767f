use crate::error::Error;
use anyhow::{Context, Result};
use log::debug;
use std::path::PathBuf;
use walkdir::WalkDir;

/// File scanner for collecting handler files below a routes root.
///
/// Every regular file is collected, whatever its name or extension: a stray
/// file under the routes root is treated as a route like any other.
///
/// # Example
///
/// ```no_run
/// use route_table_gen::scanner::FileScanner;
/// use std::path::PathBuf;
///
/// let scanner = FileScanner::new(PathBuf::from("src/routes"));
/// let files = scanner.scan().unwrap();
/// println!("Found {} handler files", files.len());
/// ```
pub struct FileScanner {
    root_path: PathBuf,
}

impl FileScanner {
    /// Creates a new `FileScanner` for the specified routes root.
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path }
    }

    /// Collects all regular files below the routes root.
    ///
    /// Paths are returned as strings with `\` normalized to `/`, each starting with the
    /// routes root exactly as it was given. The result is sorted so that the generated
    /// table does not depend on the platform's directory listing order.
    ///
    /// Symbolic links are followed, so a link to a file counts as a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RoutesRootNotFound`] if the root is missing or is not a directory.
    /// Any error hit during the traversal itself (permission denied, a broken link, an
    /// entry vanishing mid-scan, a symlink loop) is fatal and returned with context.
    pub fn scan(&self) -> Result<Vec<String>> {
        if !self.root_path.is_dir() {
            return Err(Error::RoutesRootNotFound {
                path: self.root_path.clone(),
            }
            .into());
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root_path).follow_links(true).min_depth(1) {
            let entry = entry.with_context(|| {
                format!("Failed to scan routes root: {}", self.root_path.display())
            })?;

            if entry.file_type().is_file() {
                let path = normalize_separators(&entry.path().to_string_lossy());
                debug!("Found handler file: {}", path);
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }
}

/// Rewrites Windows path separators to forward slashes.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
