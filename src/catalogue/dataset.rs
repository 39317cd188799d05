//! Dataset loading, validation, and summary statistics

use crate::catalogue::plot::Plot;
use crate::io::error::{CatalogueError, Result, invalid_dataset};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The full plot catalogue as stored on disk
///
/// Loading produces a complete new value; a refresh replaces the whole
/// dataset rather than merging into a previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Number of plots the header claims
    pub total_lands: usize,
    /// Number of sold plots the header claims
    pub sold_lands: usize,
    /// The plot records, ordered by ascending id
    pub lands: Vec<Plot>,
}

impl Dataset {
    /// Load and validate a dataset from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The contents are not valid dataset JSON
    /// - The records violate the catalogue contract
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let raw = std::fs::read_to_string(&path_buf).map_err(|e| CatalogueError::DatasetLoad {
            path: path_buf.clone(),
            source: e,
        })?;

        let dataset: Self =
            serde_json::from_str(&raw).map_err(|e| CatalogueError::DatasetParse {
                path: path_buf,
                source: e,
            })?;

        dataset.validate()?;
        tracing::debug!(plots = dataset.lands.len(), "dataset loaded");

        Ok(dataset)
    }

    /// Write the dataset as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent directory cannot be created
    /// - The dataset cannot be encoded
    /// - The file cannot be written
    pub fn write_json_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path_buf = path.as_ref().to_path_buf();

        if let Some(parent) = path_buf.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CatalogueError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let json =
            serde_json::to_string_pretty(self).map_err(|e| CatalogueError::DatasetEncode {
                path: path_buf.clone(),
                source: e,
            })?;

        std::fs::write(&path_buf, json).map_err(|e| CatalogueError::FileSystem {
            path: path_buf,
            operation: "write file",
            source: e,
        })
    }

    /// Check the catalogue contract
    ///
    /// Ids must be positive, sold plots must carry an owner, and the
    /// header counts must agree with the records.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDataset` naming the first violated constraint
    pub fn validate(&self) -> Result<()> {
        for plot in &self.lands {
            if plot.id == 0 {
                return Err(invalid_dataset("plot ids must be positive"));
            }
            if plot.is_sold && plot.owner.is_none() {
                return Err(invalid_dataset(format!("sold plot {} has no owner", plot.id)));
            }
        }

        if self.total_lands != self.lands.len() {
            return Err(invalid_dataset(format!(
                "header claims {} plots but {} records are present",
                self.total_lands,
                self.lands.len()
            )));
        }

        let sold = self.lands.iter().filter(|plot| plot.is_sold).count();
        if self.sold_lands != sold {
            return Err(invalid_dataset(format!(
                "header claims {} sold plots but {sold} records are marked sold",
                self.sold_lands
            )));
        }

        Ok(())
    }

    /// Linear lookup of a plot by id
    pub fn plot(&self, id: u64) -> Option<&Plot> {
        self.lands.iter().find(|plot| plot.id == id)
    }

    /// Compute display statistics for the catalogue
    pub fn stats(&self) -> CatalogueStats {
        let total = self.lands.len();
        let sold = self.lands.iter().filter(|plot| plot.is_sold).count();
        let sold_percentage = if total == 0 {
            0.0
        } else {
            ((sold as f64 / total as f64) * 1000.0).round() / 10.0
        };

        CatalogueStats {
            total,
            sold,
            available: total - sold,
            sold_percentage,
        }
    }
}

/// Headline counts for the stats display
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueStats {
    /// Number of plots in the catalogue
    pub total: usize,
    /// Number of sold plots
    pub sold: usize,
    /// Number of unsold plots
    pub available: usize,
    /// Sold share of the catalogue, percent to one decimal
    pub sold_percentage: f64,
}
