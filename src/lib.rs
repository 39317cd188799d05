//! Deterministic tooling for a fixed catalogue of simulated land plot records
//!
//! The system loads a pre-generated plot dataset, classifies plot ids against
//! numeric digit patterns, and synthesizes a stable placeholder image per plot
//! from a seeded pseudo-random color grid.

#![forbid(unsafe_code)]

/// Plot records, dataset loading, owner aggregation, and mock data generation
pub mod catalogue;
/// Input/output operations and error handling
pub mod io;
/// Numeric id pattern classification and catalogue search
pub mod pattern;
/// Deterministic plot image synthesis
pub mod synthesis;

pub use io::error::{CatalogueError, Result};
