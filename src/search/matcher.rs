//! Multi-field sample matching.
//!
//! Partitions a catalog into three disjoint buckets for one query: samples
//! matched by name, by description, and by tag, in that precedence order.
//! Names and descriptions match on case-insensitive substring containment;
//! tags match only on case-insensitive whole-token equality. A sample never
//! appears in more than one bucket, and every bucket preserves catalog
//! order. Pure and total: any catalog and any query (including empty or
//! pathological strings) produce a valid result, never an error.

use crate::model::types::Sample;
use serde::Serialize;
use std::collections::HashSet;

/// Bucketed outcome of one query evaluation.
///
/// Rebuilt wholesale on every query change; buckets borrow from the catalog
/// they were computed over.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult<'a> {
    /// Samples whose name contains the query, catalog order.
    pub name_matches: Vec<&'a Sample>,
    /// Samples whose description contains the query and that did not
    /// already match by name.
    pub description_matches: Vec<&'a Sample>,
    /// Samples with a tag equal to the query and no earlier match.
    pub tag_matches: Vec<&'a Sample>,
}

impl SearchResult<'_> {
    /// Total samples across all three buckets.
    pub fn len(&self) -> usize {
        self.name_matches.len() + self.description_matches.len() + self.tag_matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_matches.is_empty()
            && self.description_matches.is_empty()
            && self.tag_matches.is_empty()
    }
}

/// Match `query` against every sample in `catalog`.
///
/// The empty query is the browse-everything state: the whole catalog comes
/// back under `name_matches` so a single list can render without section
/// headers. The query is deliberately not trimmed — a whitespace-only query
/// is a real (usually fruitless) substring search, not a browse.
///
/// Case-insensitivity uses Unicode case folding via [`str::to_lowercase`],
/// not ASCII-only folding, so non-ASCII sample names and tags compare the
/// way users expect. Tag matching is whole-token equality on purpose: the
/// query `"survey"` does not hit the tag `"surveying"`, even though it
/// would hit that word in a name or description.
pub fn search<'a>(catalog: &'a [Sample], query: &str) -> SearchResult<'a> {
    if query.is_empty() {
        return SearchResult {
            name_matches: catalog.iter().collect(),
            description_matches: Vec::new(),
            tag_matches: Vec::new(),
        };
    }

    let q = query.to_lowercase();
    let mut seen: HashSet<&str> = HashSet::new();

    let name_matches: Vec<&Sample> = catalog
        .iter()
        .filter(|s| s.name.to_lowercase().contains(&q))
        .collect();
    seen.extend(name_matches.iter().map(|s| s.name.as_str()));

    let description_matches: Vec<&Sample> = catalog
        .iter()
        .filter(|s| !seen.contains(s.name.as_str()) && s.description.to_lowercase().contains(&q))
        .collect();
    seen.extend(description_matches.iter().map(|s| s.name.as_str()));

    let tag_matches: Vec<&Sample> = catalog
        .iter()
        .filter(|s| {
            !seen.contains(s.name.as_str()) && s.tags.iter().any(|t| t.to_lowercase() == q)
        })
        .collect();

    tracing::debug!(
        query,
        catalog = catalog.len(),
        names = name_matches.len(),
        descriptions = description_matches.len(),
        tags = tag_matches.len(),
        "search"
    );

    SearchResult {
        name_matches,
        description_matches,
        tag_matches,
    }
}
