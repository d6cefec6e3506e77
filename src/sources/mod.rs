//! Where catalog URLs come from.
//!
//! Sitemap discovery and parsing live outside this crate; they hand over a flat
//! list of URLs through [`UrlSource`].

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{LinkerError, LinkerResult};

/// Supplier of the flat, ordered URL list the catalog is built from
pub trait UrlSource {
    fn urls(&self) -> LinkerResult<Vec<String>>;
}

/// Plain-text URL list: one URL per line, blank lines and `#` comments ignored.
#[derive(Debug, Clone)]
pub struct UrlListFile {
    path: PathBuf,
}

impl UrlListFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl UrlSource for UrlListFile {
    fn urls(&self) -> LinkerResult<Vec<String>> {
        let raw = fs::read_to_string(&self.path).map_err(|source| LinkerError::UrlSource {
            path: self.path.clone(),
            source,
        })?;

        let urls: Vec<String> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();

        log::debug!("Read {} URLs from {}", urls.len(), self.path.display());
        Ok(urls)
    }
}

impl UrlSource for Vec<String> {
    fn urls(&self) -> LinkerResult<Vec<String>> {
        Ok(self.clone())
    }
}

impl UrlSource for [&str] {
    fn urls(&self) -> LinkerResult<Vec<String>> {
        Ok(self.iter().map(|u| (*u).to_string()).collect())
    }
}
