//! Where generated code goes. The core never touches storage; hosts plug in
//! an `OutputSink`.

use crate::error::{Error, Result};
use crate::generator::EnumGenerator;
use crate::spec::{EnumSpecification, ValueName};
use crate::validator::Validated;
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_EXTENSION: &str = "cs";

pub trait OutputSink {
    /// Target file for `spec`, or `None` if the host cannot place it yet
    fn resolve_output_path<V>(&self, spec: &EnumSpecification<V>) -> Option<PathBuf>;

    fn persist(&self, path: &Path, text: &str) -> Result<()>;

    /// Whether persisting `spec` would replace an existing file
    fn will_overwrite<V>(&self, spec: &EnumSpecification<V>) -> bool;
}

/// Writes `<file_name>.<extension>` into the directory holding the enum asset
#[derive(Debug, Clone)]
pub struct AssetDirSink {
    asset_path: PathBuf,
    extension: String,
}

impl AssetDirSink {
    pub fn new(asset_path: impl Into<PathBuf>) -> Self {
        Self::with_extension(asset_path, DEFAULT_EXTENSION)
    }

    pub fn with_extension(asset_path: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            asset_path: asset_path.into(),
            extension: extension.into(),
        }
    }

    pub fn asset_path(&self) -> &Path {
        &self.asset_path
    }
}

impl OutputSink for AssetDirSink {
    fn resolve_output_path<V>(&self, spec: &EnumSpecification<V>) -> Option<PathBuf> {
        let directory = self.asset_path.parent()?;
        Some(directory.join(format!("{}.{}", spec.file_name, self.extension)))
    }

    fn persist(&self, path: &Path, text: &str) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| Error::Persist {
                path: path.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, text).map_err(|source| Error::Persist {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Wrote file {}", path.display());
        Ok(())
    }

    fn will_overwrite<V>(&self, spec: &EnumSpecification<V>) -> bool {
        self.resolve_output_path(spec)
            .map(|path| path.exists())
            .unwrap_or(false)
    }
}

/// Generate the code for a checked spec and hand it to `sink`.
/// Returns the path that was written.
pub fn write_enum<V: ValueName, S: OutputSink>(
    sink: &S,
    generator: &EnumGenerator,
    spec: &Validated<'_, V>,
) -> Result<PathBuf> {
    let path = sink
        .resolve_output_path(spec.spec())
        .ok_or_else(|| Error::NoOutputPath {
            file_name: spec.file_name.clone(),
        })?;
    let code = generator.generate(spec);
    sink.persist(&path, &code)?;
    Ok(path)
}

/// How many of a selection of enums already have generated files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateAmount {
    /// Every output exists, so everything is updated in place
    Update,
    UpdateAndGenerate,
    /// Nothing has been generated yet
    Generate,
}

impl GenerateAmount {
    pub fn from_overwrites(overwrites: impl IntoIterator<Item = bool>) -> Self {
        let (mut total, mut existing) = (0usize, 0usize);
        for overwrite in overwrites {
            total += 1;
            if overwrite {
                existing += 1;
            }
        }

        if existing == total {
            GenerateAmount::Update
        } else if existing == 0 {
            GenerateAmount::Generate
        } else {
            GenerateAmount::UpdateAndGenerate
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GenerateAmount::Update => "Update",
            GenerateAmount::UpdateAndGenerate => "Update and Generate",
            GenerateAmount::Generate => "Generate",
        }
    }
}

impl fmt::Display for GenerateAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
