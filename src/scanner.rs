use crate::asset::is_asset_file;
use crate::config::SourceConfig;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::SourceNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() || !is_asset_file(path) {
            continue;
        }

        // Skip hidden directories such as .git
        if path
            .strip_prefix(dir)
            .map(|rel| {
                rel.components()
                    .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
            })
            .unwrap_or(false)
        {
            continue;
        }

        files.push(path.to_path_buf());
    }

    Ok(files)
}

pub fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern).map_err(|source| Error::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    Ok(paths
        .filter_map(|p| p.ok())
        .filter(|p| p.is_file() && is_asset_file(p))
        .collect())
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Collect the asset files named by `sources`, sorted and deduplicated.
/// Relative paths and patterns are taken relative to `root`.
pub fn collect_sources(root: &Path, sources: &[SourceConfig]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for source in sources {
        match source {
            SourceConfig::Directory { path } => {
                files.extend(scan_directory(&resolve(root, path))?);
            }
            SourceConfig::File { path } => {
                let resolved = resolve(root, path);
                if !resolved.is_file() {
                    return Err(Error::SourceNotFound { path: resolved });
                }
                files.push(resolved);
            }
            SourceConfig::Glob { pattern } => {
                let resolved = resolve(root, Path::new(pattern));
                files.extend(expand_glob(&resolved.to_string_lossy())?);
            }
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}
