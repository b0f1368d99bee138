//! Catalog loading and validation.
//!
//! The gallery keeps one small `README.metadata.json` beside each sample's
//! source; a flat JSON manifest (an array of the same objects) works too.
//! Either way the result is an explicit [`Catalog`] value handed to callers
//! — the matcher never reads ambient global state.

use crate::model::types::Sample;
use itertools::Itertools;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Per-sample metadata file name, as shipped in the gallery tree.
pub const METADATA_FILE: &str = "README.metadata.json";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog path not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("reading {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("scanning {}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("duplicate sample name {0:?}")]
    DuplicateName(String),
    #[error("sample has an empty name")]
    EmptyName,
}

/// An ordered, validated set of samples.
///
/// Order is load order and doubles as display/tie-break order downstream.
/// Names are guaranteed unique — they are the identity the matcher
/// de-duplicates on.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    samples: Vec<Sample>,
}

impl Catalog {
    /// Build a catalog from samples already in memory, enforcing the
    /// identity invariant.
    pub fn from_samples(samples: Vec<Sample>) -> Result<Self, CatalogError> {
        let mut names: HashSet<&str> = HashSet::new();
        for sample in &samples {
            if sample.name.is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if !names.insert(sample.name.as_str()) {
                return Err(CatalogError::DuplicateName(sample.name.clone()));
            }
        }
        Ok(Self { samples })
    }

    /// Load from either a manifest file or a sample tree.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        if path.is_dir() {
            Self::load_dir(path)
        } else if path.is_file() {
            Self::load_manifest(path)
        } else {
            Err(CatalogError::NotFound(path.to_path_buf()))
        }
    }

    /// Load a single JSON manifest holding an array of sample objects.
    pub fn load_manifest(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let samples: Vec<Sample> =
            serde_json::from_str(&text).map_err(|source| CatalogError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::from_samples(samples)?;
        tracing::info!(
            manifest = %path.display(),
            samples = catalog.len(),
            "catalog_loaded"
        );
        Ok(catalog)
    }

    /// Walk a gallery tree collecting every `README.metadata.json`.
    ///
    /// Paths are sorted before parsing so load order (and therefore display
    /// order) is deterministic across platforms.
    pub fn load_dir(root: &Path) -> Result<Self, CatalogError> {
        let mut metadata_paths: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(root) {
            let entry = entry.map_err(|source| CatalogError::Walk {
                path: root.to_path_buf(),
                source,
            })?;
            if entry.file_type().is_file() && entry.file_name().to_str() == Some(METADATA_FILE) {
                metadata_paths.push(entry.into_path());
            }
        }
        metadata_paths.sort();

        let mut samples = Vec::with_capacity(metadata_paths.len());
        for path in metadata_paths {
            let text = fs::read_to_string(&path).map_err(|source| CatalogError::Io {
                path: path.clone(),
                source,
            })?;
            let mut sample: Sample =
                serde_json::from_str(&text).map_err(|source| CatalogError::Json {
                    path: path.clone(),
                    source,
                })?;
            sample.source_path = path.parent().map(Path::to_path_buf);
            samples.push(sample);
        }

        let catalog = Self::from_samples(samples)?;
        tracing::info!(
            root = %root.display(),
            samples = catalog.len(),
            "catalog_loaded"
        );
        Ok(catalog)
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples filed under `category`, case-insensitively, catalog order.
    pub fn in_category(&self, category: &str) -> Vec<&Sample> {
        let wanted = category.to_lowercase();
        self.samples
            .iter()
            .filter(|s| s.category.to_lowercase() == wanted)
            .collect()
    }

    /// Unique categories with sample counts, sorted by category name.
    pub fn categories(&self) -> Vec<(String, usize)> {
        self.samples
            .iter()
            .map(|s| s.category.clone())
            .counts()
            .into_iter()
            .sorted()
            .collect()
    }

    /// Every distinct tag across the catalog, sorted.
    pub fn tags(&self) -> Vec<String> {
        self.samples
            .iter()
            .flat_map(|s| s.tags.iter().cloned())
            .sorted()
            .dedup()
            .collect()
    }
}
