// src/storage.rs
//! Flat-file state: the listings snapshot and the seen-URL set.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::OutputConfig;
use crate::error::{LiaError, Result};
use crate::ranking::ScoredListing;

/// URLs observed in every previous run. Kept sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeenSet {
    urls: BTreeSet<String>,
}

impl SeenSet {
    /// Absent or malformed files yield an empty set.
    pub fn load(path: &Path) -> Self {
        let raw = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(path = %path.display(), error = %e, "seen-set unreadable; starting empty");
                }
                return Self::default();
            }
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(urls) => Self {
                urls: urls.into_iter().collect(),
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "seen-set malformed; starting empty");
                Self::default()
            }
        }
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }

    /// Current listings not present in this (previously loaded) set.
    pub fn new_since<'a>(&self, current: &'a [ScoredListing]) -> Vec<&'a ScoredListing> {
        current.iter().filter(|s| !self.contains(s.url())).collect()
    }

    /// This set plus every URL of the current run.
    pub fn merged_with(&self, current: &[ScoredListing]) -> Self {
        let mut urls = self.urls.clone();
        urls.extend(current.iter().map(|s| s.url().to_string()));
        Self { urls }
    }

    /// Overwrite `path` with the sorted set as a pretty JSON array.
    pub fn save(&self, path: &Path) -> Result<()> {
        let urls: Vec<&str> = self.iter().collect();
        write_json_pretty(path, &urls)
    }
}

fn write_json_pretty<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| LiaError::io(parent, e))?;
    }
    let body = serde_json::to_string_pretty(value)?;
    fs::write(path, body).map_err(|e| LiaError::io(path, e))
}

pub fn ensure_dirs(out: &OutputConfig) -> Result<()> {
    for d in [&out.data_dir, &out.applications_dir] {
        fs::create_dir_all(d).map_err(|e| LiaError::io(d, e))?;
    }
    Ok(())
}

pub fn save_listings_json(out: &OutputConfig, listings: &[ScoredListing]) -> Result<PathBuf> {
    let path = out.listings_path();
    write_json_pretty(&path, listings)?;
    Ok(path)
}
