//! Auxiliary coordinate dataset for pre-rendered plot imagery
//!
//! Some deployments ship a coordination file mapping plot ids to hosted
//! image URLs and authoritative bounding boxes, positionally keyed by
//! `id - 1`. The index is loaded once and passed explicitly to whatever
//! needs it; there is no process-wide cache.

use crate::catalogue::plot::{CoordinateSpan, PlotCoordinates};
use crate::io::error::{CatalogueError, Result, invalid_dataset};
use serde::Deserialize;
use std::path::Path;

/// Degree bounds as stored in the coordination file
#[derive(Debug, Clone, Deserialize)]
struct RawSpan {
    min: String,
    max: String,
}

/// Bounding box entry in the coordination file
#[derive(Debug, Clone, Deserialize)]
struct RawCoord {
    long: RawSpan,
    lat: RawSpan,
}

/// One record as stored on disk, positionally matched to plot id - 1
#[derive(Debug, Clone, Deserialize)]
struct RawRecord {
    coord: RawCoord,
    img_url: String,
}

/// One parsed coordination entry
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinationEntry {
    /// Bounding box on the simulated surface
    pub coordinates: PlotCoordinates,
    /// Hosted image URL for the plot
    pub image_url: String,
}

/// Read-only index over the coordination records
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoordinateIndex {
    entries: Vec<CoordinationEntry>,
}

impl CoordinateIndex {
    /// Load and parse the index from a JSON file
    ///
    /// All degree strings are parsed up front so later lookups are total.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The contents are not valid coordination JSON
    /// - A record holds a non-numeric degree bound
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let raw = std::fs::read_to_string(&path_buf).map_err(|e| CatalogueError::DatasetLoad {
            path: path_buf.clone(),
            source: e,
        })?;

        let records: Vec<RawRecord> =
            serde_json::from_str(&raw).map_err(|e| CatalogueError::DatasetParse {
                path: path_buf,
                source: e,
            })?;

        let mut entries = Vec::with_capacity(records.len());
        for (position, record) in records.into_iter().enumerate() {
            entries.push(parse_record(record, position)?);
        }

        tracing::debug!(records = entries.len(), "coordination data loaded");
        Ok(Self { entries })
    }

    /// Number of records in the index
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no records
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Full entry for a plot id, `None` outside the file's range
    pub fn entry(&self, id: u64) -> Option<&CoordinationEntry> {
        let index = usize::try_from(id.checked_sub(1)?).ok()?;
        self.entries.get(index)
    }

    /// Hosted image URL for a plot id
    pub fn image_url(&self, id: u64) -> Option<&str> {
        self.entry(id).map(|entry| entry.image_url.as_str())
    }

    /// Parsed bounding box for a plot id
    pub fn coordinates(&self, id: u64) -> Option<PlotCoordinates> {
        self.entry(id).map(|entry| entry.coordinates)
    }
}

fn parse_record(record: RawRecord, position: usize) -> Result<CoordinationEntry> {
    Ok(CoordinationEntry {
        coordinates: PlotCoordinates {
            longitude: CoordinateSpan {
                min: parse_degrees(&record.coord.long.min, position)?,
                max: parse_degrees(&record.coord.long.max, position)?,
            },
            latitude: CoordinateSpan {
                min: parse_degrees(&record.coord.lat.min, position)?,
                max: parse_degrees(&record.coord.lat.max, position)?,
            },
        },
        image_url: record.img_url,
    })
}

fn parse_degrees(raw: &str, position: usize) -> Result<f64> {
    raw.trim().parse().map_err(|err| {
        invalid_dataset(format!(
            "coordination record {position} has a non-numeric bound '{raw}': {err}"
        ))
    })
}
