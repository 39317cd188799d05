//! Plot record types

use serde::{Deserialize, Serialize};

/// Inclusive degree span along one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSpan {
    /// Lower bound in degrees
    pub min: f64,
    /// Upper bound in degrees
    pub max: f64,
}

/// Bounding box of a plot on the simulated surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotCoordinates {
    /// East-west extent
    pub longitude: CoordinateSpan,
    /// North-south extent
    pub latitude: CoordinateSpan,
}

/// One simulated land unit
///
/// Immutable once loaded. Ownership is a cosmetic static field; there is
/// no chain interaction behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plot {
    /// Positive integer plot id
    pub id: u64,
    /// Whether the plot has been sold
    pub is_sold: bool,
    /// Owner address, present for sold plots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Bounding box on the simulated surface
    pub coordinates: PlotCoordinates,
}
