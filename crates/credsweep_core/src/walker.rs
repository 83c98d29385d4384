//! Directory traversal with name-based exclusions.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};

use crate::error::ScanError;

/// Base names pruned or skipped during traversal.
///
/// Exclusion is purely name-based: a directory whose base name matches is
/// pruned entirely - never descended into, never opened - so its contents
/// can never contribute findings. A file whose base name matches is
/// skipped in any directory.
#[derive(Debug, Clone, Default)]
pub struct Exclusions {
    dir_names: HashSet<String>,
    file_names: HashSet<String>,
}

impl Exclusions {
    /// Creates an exclusion set from directory and file base names.
    #[must_use]
    pub fn new(
        dir_names: impl IntoIterator<Item = String>,
        file_names: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            dir_names: dir_names.into_iter().collect(),
            file_names: file_names.into_iter().collect(),
        }
    }

    /// Returns `true` if a directory with this base name is pruned.
    #[must_use]
    pub fn excludes_dir_name(&self, name: &str) -> bool {
        self.dir_names.contains(name)
    }

    /// Returns `true` if a file with this base name is skipped.
    #[must_use]
    pub fn excludes_file_name(&self, name: &str) -> bool {
        self.file_names.contains(name)
    }

    fn excludes_entry(&self, entry: &DirEntry) -> bool {
        let Some(name) = entry.file_name().to_str() else {
            return false;
        };
        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            self.excludes_dir_name(name)
        } else {
            self.excludes_file_name(name)
        }
    }
}

/// Walks `root` and returns every regular file to inspect.
///
/// Traversal order is whatever the underlying directory listing yields;
/// callers must not depend on it. Any directory-listing failure aborts
/// the walk immediately with an error - no partial file list is returned.
pub fn walk(root: &Path, exclusions: &Exclusions) -> Result<Vec<PathBuf>, ScanError> {
    let filter = exclusions.clone();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .filter_entry(move |entry| entry.depth() == 0 || !filter.excludes_entry(entry))
        .build();

    let mut files = Vec::new();
    for result in walker {
        let entry = result?;
        if entry.file_type().is_some_and(|ft| ft.is_file()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
