//! Directory scanner that turns a folder of images into the grid's photo list.
//!
//! - Directory walking using walkdir (optionally recursive)
//! - Image detection by file extension
//! - Stable ordering by path, ids assigned in that order

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::models::{PhotoIdentity, PhotoLibrary};

/// Configuration for the directory scanner.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Whether to descend into subdirectories.
    pub recursive: bool,
    /// Whether to follow symbolic links.
    pub follow_symlinks: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            recursive: false,
            follow_symlinks: false,
        }
    }
}

/// A discovered photo and the file it came from.
#[derive(Debug, Clone)]
pub struct PhotoSource {
    pub identity: PhotoIdentity,
    pub path: PathBuf,
}

/// Result of a completed scan.
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub library: PhotoLibrary,
    pub sources: Vec<PhotoSource>,
}

impl ScanResult {
    pub fn path_of(&self, id: i64) -> Option<&Path> {
        self.sources
            .iter()
            .find(|s| s.identity.id == id)
            .map(|s| s.path.as_path())
    }
}

pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            matches!(
                e.to_ascii_lowercase().as_str(),
                "jpg" | "jpeg" | "png" | "webp" | "gif" | "bmp" | "tiff" | "tif"
            )
        })
        .unwrap_or(false)
}

fn title_for(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Scan `dir` for images and build the photo library.
pub fn scan_photos(dir: &Path, config: &ScanConfig) -> Result<ScanResult> {
    if !dir.is_dir() {
        anyhow::bail!("Not a directory: {:?}", dir);
    }

    let paths = discover_files(dir, config);
    let sources: Vec<PhotoSource> = paths
        .into_iter()
        .zip(1i64..)
        .map(|(path, id)| PhotoSource {
            identity: PhotoIdentity::new(id, title_for(&path)),
            path,
        })
        .collect();

    let library = PhotoLibrary::new(sources.iter().map(|s| s.identity.clone()).collect())
        .context("Failed to build photo library")?;

    info!(?dir, count = library.len(), "Scan complete");
    Ok(ScanResult { library, sources })
}

fn discover_files(dir: &Path, config: &ScanConfig) -> Vec<PathBuf> {
    let mut walker = WalkDir::new(dir).follow_links(config.follow_symlinks);
    if !config.recursive {
        walker = walker.max_depth(1);
    }

    let mut paths = Vec::new();
    for entry in walker.into_iter() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }
        if is_image_path(entry.path()) {
            paths.push(entry.into_path());
        } else {
            debug!(path = ?entry.path(), "Skipping non-image file");
        }
    }

    // Sort by path for consistent ordering
    paths.sort();
    paths
}
