//! # Stockpile Common
//!
//! Common types and shared abstractions for Project Stockpile.
//!
//! This crate provides foundational types used across all Stockpile subsystems:
//! - ID types (ItemId, RecipeId, SourceId)
//! - Quantity formatting for report output
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod fmt;
pub mod ids;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fmt::*;
    pub use crate::ids::*;
}

pub use prelude::*;
