//! Search layer.
//!
//! One shared matcher serves every search surface (the full-gallery search
//! and the per-category search both pass their own catalog slice in). The
//! catalog is always an explicit argument — nothing here reads global state.

pub mod matcher;

pub use matcher::{SearchResult, search};
