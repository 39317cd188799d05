//! Reproducible mock catalogue generation
//!
//! Produces the full plot dataset from a seed: a uniformly drawn sold
//! mask, random owner addresses for sold plots, and a systematic
//! coordinate grid covering the simulated surface.

use crate::catalogue::dataset::Dataset;
use crate::catalogue::plot::{CoordinateSpan, Plot, PlotCoordinates};
use crate::io::configuration::{
    DEFAULT_SEED, DEFAULT_SOLD_PLOTS, DEFAULT_TOTAL_PLOTS, LATITUDE_RANGE, LONGITUDE_RANGE,
    OWNER_ADDRESS_HEX_CHARS, PLOT_DEGREE_SPAN,
};
use crate::io::error::{Result, invalid_parameter};
use bitvec::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Parameters for mock catalogue generation
#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    /// Total number of plots
    pub total_plots: usize,
    /// Sold-plot target before the first and last plots are forced sold
    pub sold_plots: usize,
    /// Seed for the reproducible random choices
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            total_plots: DEFAULT_TOTAL_PLOTS,
            sold_plots: DEFAULT_SOLD_PLOTS,
            seed: DEFAULT_SEED,
        }
    }
}

/// Generate a complete mock catalogue
///
/// Equal configurations produce byte-identical datasets. Sold plots are
/// drawn uniformly until the target count is reached; the first and last
/// plots are then forced sold, so the final sold count may exceed the
/// target by up to two. The header records the actual count.
///
/// # Errors
///
/// Returns an error if `total_plots` is zero or `sold_plots` exceeds it
pub fn generate_dataset(config: &GeneratorConfig) -> Result<Dataset> {
    if config.total_plots == 0 {
        return Err(invalid_parameter(
            "total",
            &config.total_plots,
            &"must be at least 1",
        ));
    }
    if config.sold_plots > config.total_plots {
        return Err(invalid_parameter(
            "sold",
            &config.sold_plots,
            &"exceeds total plot count",
        ));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);

    // Mask index i covers plot id i + 1
    let mut sold_mask = bitvec![0; config.total_plots];
    let mut marked = 0;
    while marked < config.sold_plots {
        let index = rng.random_range(0..config.total_plots);
        if !sold_mask.replace(index, true) {
            marked += 1;
        }
    }
    sold_mask.set(0, true);
    sold_mask.set(config.total_plots - 1, true);

    let mut lands = Vec::with_capacity(config.total_plots);
    for index in 0..config.total_plots {
        let id = (index + 1) as u64;
        let is_sold = sold_mask.get(index).as_deref() == Some(&true);
        let owner = is_sold.then(|| random_owner_address(&mut rng));

        lands.push(Plot {
            id,
            is_sold,
            owner,
            coordinates: plot_coordinates(id, config.total_plots),
        });
    }

    let sold_lands = sold_mask.count_ones();
    tracing::info!(
        total = config.total_plots,
        sold = sold_lands,
        seed = config.seed,
        "catalogue generated"
    );

    Ok(Dataset {
        total_lands: config.total_plots,
        sold_lands,
        lands,
    })
}

/// Systematic bounding box for a plot id
///
/// Plots occupy a near-square grid over the full surface: columns step
/// east from -180° and rows step south from 90°, each plot spanning one
/// degree per axis with bounds rounded to two decimals.
pub fn plot_coordinates(id: u64, total_plots: usize) -> PlotCoordinates {
    let plots_per_row = ((total_plots as f64).sqrt().ceil() as usize).max(1);
    let total_rows = total_plots.div_ceil(plots_per_row);

    let index = id.saturating_sub(1) as usize;
    let row = index / plots_per_row;
    let col = index % plots_per_row;

    let longitude_step = LONGITUDE_RANGE / plots_per_row as f64;
    let long_min = -LONGITUDE_RANGE / 2.0 + col as f64 * longitude_step;
    let long_max = long_min + PLOT_DEGREE_SPAN;

    let latitude_step = LATITUDE_RANGE / total_rows.max(1) as f64;
    let lat_max = LATITUDE_RANGE / 2.0 - row as f64 * latitude_step;
    let lat_min = lat_max - PLOT_DEGREE_SPAN;

    PlotCoordinates {
        longitude: CoordinateSpan {
            min: round2(long_min),
            max: round2(long_max),
        },
        latitude: CoordinateSpan {
            min: round2(lat_min),
            max: round2(lat_max),
        },
    }
}

/// Draw a random 0x-prefixed hex owner address
fn random_owner_address(rng: &mut StdRng) -> String {
    let mut address = String::with_capacity(2 + OWNER_ADDRESS_HEX_CHARS);
    address.push_str("0x");

    for _ in 0..OWNER_ADDRESS_HEX_CHARS {
        let digit = rng.random_range(0..16u32);
        address.push(char::from_digit(digit, 16).unwrap_or('0'));
    }

    address
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
