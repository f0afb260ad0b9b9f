//! # Stockpile Data
//!
//! The boundary where exported game data enters the planner.
//!
//! This crate provides:
//! - Raw serde document types mirroring the recipes, items, and drops JSON
//! - Ingestion that applies defaulting rules, skips unusable rows with
//!   warnings, and keeps the first of any duplicates
//! - [`GameData`], the bundle of catalog, item index, and drop index
//!
//! Documents arrive as in-memory strings; fetching them (file, network,
//! `localStorage`, whatever the host has) is the caller's problem.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod documents;
pub mod ingest;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::documents::*;
    pub use crate::ingest::*;
}

pub use prelude::*;
