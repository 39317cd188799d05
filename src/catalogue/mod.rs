//! Plot records, dataset management, and derived reports
//!
//! The catalogue owns everything around the immutable plot list: loading
//! and validating the JSON dataset, generating mock data, aggregating
//! owner concentration, and the injected auxiliary coordinate index.

/// Auxiliary coordinate dataset, injected rather than cached globally
pub mod coordination;
/// Dataset loading, validation, and summary statistics
pub mod dataset;
/// Reproducible mock catalogue generation
pub mod generator;
/// Owner concentration reporting
pub mod owners;
/// Plot record types
pub mod plot;

pub use dataset::Dataset;
pub use plot::Plot;
