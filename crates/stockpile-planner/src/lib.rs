//! # Stockpile Planner
//!
//! Shopping-list calculation for a crafting game.
//!
//! This crate provides the planning core:
//! - Item and recipe catalog with search and classification queries
//! - Caller-owned cart of desired outputs
//! - Craft-count arithmetic (ceiling division, chance compensation)
//! - Recursive material resolution with path-local cycle suppression
//! - Craft-plan aggregation with duration totals
//! - Drop-source ranking
//! - Report rows and plain-text rendering for presentation layers
//!
//! Everything is synchronous and pure: callers hand in a [`Cart`], a
//! [`RecipeCatalog`], and [`ResolveSettings`], and get totals back. No I/O
//! happens anywhere in this crate.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod cart;
pub mod catalog;
pub mod craft_calc;
pub mod drops;
pub mod materials;
pub mod plan;
pub mod report;
pub mod settings;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cart::*;
    pub use crate::catalog::*;
    pub use crate::craft_calc::*;
    pub use crate::drops::*;
    pub use crate::materials::*;
    pub use crate::plan::*;
    pub use crate::report::*;
    pub use crate::settings::*;
}

pub use prelude::*;
