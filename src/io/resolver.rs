//! File resolution for querying many documents at once
//!
//! Explicit file arguments are always kept. Directories are walked and only
//! files with a document extension (JSON or YAML by default) are collected.

use crate::error::{JaxonError, Result};
use crate::io::DocumentFormat;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Configuration for file resolution
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Follow symbolic links
    pub follow_links: bool,
    /// Maximum recursion depth for directory traversal
    pub max_depth: Option<usize>,
    /// Include hidden files (starting with .)
    pub include_hidden: bool,
    /// File extensions collected from directories (case-insensitive)
    pub include_extensions: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            follow_links: false,
            max_depth: None,
            include_hidden: false,
            include_extensions: vec!["json".to_string(), "yaml".to_string(), "yml".to_string()],
        }
    }
}

/// A file selected for querying
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    path: PathBuf,
    format: DocumentFormat,
}

impl ResolvedFile {
    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decoder chosen from the file extension
    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    /// Get the filename
    pub fn filename(&self) -> Option<&str> {
        self.path.file_name().and_then(|s| s.to_str())
    }
}

/// File resolver for handling multiple files and directories
#[derive(Debug, Clone, Default)]
pub struct FileResolver {
    config: ResolverConfig,
}

impl FileResolver {
    /// Create a new resolver with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new resolver with custom configuration
    pub fn with_config(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Resolve paths to a sorted, de-duplicated list of files
    pub fn resolve_paths<P>(&self, paths: &[P]) -> Result<Vec<ResolvedFile>>
    where
        P: AsRef<Path>,
    {
        let mut seen = HashSet::new();
        let mut resolved = Vec::new();

        for path in paths {
            for file in self.resolve_single_path(path.as_ref())? {
                if seen.insert(file.clone()) {
                    resolved.push(ResolvedFile {
                        format: DocumentFormat::Auto.for_path(&file),
                        path: file,
                    });
                }
            }
        }

        resolved.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(resolved)
    }

    fn resolve_single_path(&self, path: &Path) -> Result<Vec<PathBuf>> {
        if path.is_file() {
            Ok(vec![path.to_path_buf()])
        } else if path.is_dir() {
            self.traverse_directory(path)
        } else {
            Err(JaxonError::file_not_found(path))
        }
    }

    fn traverse_directory(&self, dir_path: &Path) -> Result<Vec<PathBuf>> {
        let walker = WalkDir::new(dir_path)
            .follow_links(self.config.follow_links)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX));

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| {
                JaxonError::path_resolution(format!("Error traversing directory: {}", e))
            })?;

            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }
            if !self.config.include_hidden && is_hidden_file(path) {
                continue;
            }
            if !self.has_included_extension(path) {
                continue;
            }
            files.push(path.to_path_buf());
        }

        Ok(files)
    }

    fn has_included_extension(&self, path: &Path) -> bool {
        if self.config.include_extensions.is_empty() {
            return true;
        }
        let ext = path.extension().and_then(|s| s.to_str()).unwrap_or_default();
        self.config
            .include_extensions
            .iter()
            .any(|included| included.eq_ignore_ascii_case(ext))
    }
}

fn is_hidden_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
