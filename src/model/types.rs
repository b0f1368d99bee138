//! Catalog entity structs.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One demonstration screen in the gallery.
///
/// Mirrors the shape of the per-sample `README.metadata.json` files the
/// gallery ships: `title` and `keywords` are renamed onto `name` and `tags`.
/// The `name` is the sample's identity — unique within one catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sample {
    #[serde(rename = "title")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Gallery section this sample is filed under (e.g. "Layers", "Routing").
    #[serde(default)]
    pub category: String,
    /// Ordered keyword list. May repeat; repeats are harmless.
    #[serde(rename = "keywords", default)]
    pub tags: Vec<String>,
    /// Directory the sample's metadata was loaded from, when known.
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Sample {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            category: String::new(),
            tags: Vec::new(),
            source_path: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Case-insensitive whole-token tag check (Unicode folding, not ASCII).
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }
}
