//! Error types for catalogue and rendering operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all catalogue operations
#[derive(Debug)]
pub enum CatalogueError {
    /// Failed to read a dataset file from the filesystem
    DatasetLoad {
        /// Path to the dataset file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Dataset file contents could not be decoded
    DatasetParse {
        /// Path to the dataset file
        path: PathBuf,
        /// Underlying JSON decoding error
        source: serde_json::Error,
    },

    /// Dataset value could not be encoded for writing
    DatasetEncode {
        /// Path where the write was attempted
        path: PathBuf,
        /// Underlying JSON encoding error
        source: serde_json::Error,
    },

    /// Dataset records violate the catalogue contract
    InvalidDataset {
        /// Description of the violated constraint
        reason: String,
    },

    /// Requested plot id is not present in the loaded catalogue
    PlotNotFound {
        /// The requested plot id
        id: u64,
        /// Number of plots in the loaded catalogue
        catalogue_size: usize,
    },

    /// Command parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for CatalogueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DatasetLoad { path, source } => {
                write!(f, "Failed to read dataset '{}': {source}", path.display())
            }
            Self::DatasetParse { path, source } => {
                write!(f, "Failed to parse dataset '{}': {source}", path.display())
            }
            Self::DatasetEncode { path, source } => {
                write!(f, "Failed to encode dataset '{}': {source}", path.display())
            }
            Self::InvalidDataset { reason } => {
                write!(f, "Invalid dataset: {reason}")
            }
            Self::PlotNotFound { id, catalogue_size } => {
                write!(
                    f,
                    "Plot {id} not found (catalogue holds {catalogue_size} plots)"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for CatalogueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DatasetLoad { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::DatasetParse { source, .. } | Self::DatasetEncode { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for catalogue results
pub type Result<T> = std::result::Result<T, CatalogueError>;

impl From<std::io::Error> for CatalogueError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CatalogueError {
    CatalogueError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid dataset error
pub fn invalid_dataset(reason: impl Into<String>) -> CatalogueError {
    CatalogueError::InvalidDataset {
        reason: reason.into(),
    }
}
