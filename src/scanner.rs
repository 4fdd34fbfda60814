use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::ExtensionSet;

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Failed to read directory: {0}")]
    IoError(#[from] std::io::Error),
}

/// A directory whose files make up one season
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonFolder {
    pub name: String,
    pub path: PathBuf,
    /// True when no season subdirectories exist and the series root stands in
    pub is_root: bool,
}

impl SeasonFolder {
    pub fn new(name: String, path: PathBuf) -> Self {
        Self {
            name,
            path,
            is_root: false,
        }
    }

    pub fn root(path: &Path) -> Self {
        Self {
            name: display_name(path),
            path: path.to_path_buf(),
            is_root: true,
        }
    }
}

/// A candidate media file inside a season folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub name: String,
    pub path: PathBuf,
    /// Lowercase, dot-prefixed extension
    pub extension: String,
}

/// Find the season subdirectories of a series root.
///
/// Subdirectories whose name contains "season" (any case) are returned sorted
/// by name. When there are none, the root itself is returned as the only
/// season folder, so the result is never empty.
pub fn locate_season_folders(root: &Path) -> Result<Vec<SeasonFolder>, ScannerError> {
    debug!(path = ?root, "Locating season folders");

    let mut seasons: Vec<SeasonFolder> = read_entries(root)?
        .into_iter()
        .filter(|path| path.is_dir())
        .filter_map(|path| {
            let name = path.file_name()?.to_string_lossy().to_string();
            if name.to_lowercase().contains("season") {
                debug!(name = %name, "Found season folder");
                Some(SeasonFolder::new(name, path))
            } else {
                trace!(name = %name, "Skipping non-season directory");
                None
            }
        })
        .collect();

    if seasons.is_empty() {
        debug!("No season folders, using root as the only season");
        return Ok(vec![SeasonFolder::root(root)]);
    }

    seasons.sort_by(|a, b| a.name.cmp(&b.name));

    debug!(count = seasons.len(), "Season folders located");

    Ok(seasons)
}

/// List the regular files directly inside `folder` whose extension is allowed.
///
/// Files without an extension, or with one outside the set, are skipped
/// silently. The result is in directory order.
pub fn list_media_files(
    folder: &Path,
    extensions: &ExtensionSet,
) -> Result<Vec<MediaFile>, ScannerError> {
    let mut files = Vec::new();

    for path in read_entries(folder)? {
        if !path.is_file() {
            continue;
        }

        let extension = match path.extension() {
            Some(ext) => format!(".{}", ext.to_string_lossy().to_lowercase()),
            None => continue,
        };

        if !extensions.contains(&extension) {
            trace!(path = ?path, "Skipping file with unlisted extension");
            continue;
        }

        let name = match path.file_name() {
            Some(n) => n.to_string_lossy().to_string(),
            None => continue,
        };

        files.push(MediaFile {
            name,
            path,
            extension,
        });
    }

    debug!(folder = ?folder, count = files.len(), "Listed media files");

    Ok(files)
}

fn read_entries(target: &Path) -> Result<Vec<PathBuf>, ScannerError> {
    if !target.exists() {
        return Err(ScannerError::PathNotFound(target.to_path_buf()));
    }

    if !target.is_dir() {
        return Err(ScannerError::NotADirectory(target.to_path_buf()));
    }

    let read_dir = fs::read_dir(target).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            ScannerError::PermissionDenied(target.to_path_buf())
        } else {
            ScannerError::IoError(e)
        }
    })?;

    let mut paths = Vec::new();
    for entry in read_dir {
        paths.push(entry?.path());
    }

    Ok(paths)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
