//! Input/output operations: CLI, error handling, configuration, progress

/// Command-line interface and command orchestration
pub mod cli;
/// Catalogue constants and runtime configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Tracing subscriber setup for the CLI
pub mod logging;
/// Progress display for batch rendering
pub mod progress;
