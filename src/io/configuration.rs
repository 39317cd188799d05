//! Catalogue constants and runtime configuration defaults

// Image synthesis constants
/// Side length of the synthesized color grid
pub const GRID_SIZE: usize = 10;
/// Device units per grid cell in the rendered SVG
pub const PIXEL_SIZE: u32 = 10;

// Color distribution thresholds for the seeded generator output in [0, 1)
/// Values below this threshold map to the primary palette color
pub const PRIMARY_THRESHOLD: f64 = 0.6;
/// Values below this threshold (and above the primary) map to the secondary color
pub const SECONDARY_THRESHOLD: f64 = 0.9;

/// Row stride in the per-cell seed derivation
pub const ROW_SEED_STRIDE: u64 = 100;

// Dataset generation defaults
/// Total number of plots in the generated catalogue
pub const DEFAULT_TOTAL_PLOTS: usize = 21_000;
/// Number of plots marked sold in the generated catalogue
pub const DEFAULT_SOLD_PLOTS: usize = 10_270;
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Hex characters in a generated owner address (excluding the 0x prefix)
pub const OWNER_ADDRESS_HEX_CHARS: usize = 40;

// Coordinate grid covering the simulated surface
/// Longitude span covered by the plot grid, in degrees
pub const LONGITUDE_RANGE: f64 = 360.0;
/// Latitude span covered by the plot grid, in degrees
pub const LATITUDE_RANGE: f64 = 180.0;
/// Side length of a single plot, in degrees
pub const PLOT_DEGREE_SPAN: f64 = 1.0;

// Search and display defaults
/// Number of plots per result page
pub const DEFAULT_PAGE_SIZE: usize = 20;
/// Default pixel scale for PNG raster export
pub const DEFAULT_RASTER_SCALE: u32 = 10;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
