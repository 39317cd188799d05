//! Seeded symmetric color matrix generation

use crate::io::configuration::{
    GRID_SIZE, PRIMARY_THRESHOLD, ROW_SEED_STRIDE, SECONDARY_THRESHOLD,
};
use ndarray::Array2;

/// The fixed 3-color palette used by plot imagery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    /// Red/pink, roughly 60% of cells
    Primary,
    /// Purple, roughly 30% of cells
    Secondary,
    /// Dark slate, roughly 10% of cells
    Tertiary,
}

impl PaletteColor {
    /// CSS hex form used for SVG fills
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Primary => "#f85266",
            Self::Secondary => "#b243a7",
            Self::Tertiary => "#3f4057",
        }
    }

    /// RGBA form used for raster export
    pub const fn rgba(self) -> [u8; 4] {
        match self {
            Self::Primary => [0xf8, 0x52, 0x66, 0xff],
            Self::Secondary => [0xb2, 0x43, 0xa7, 0xff],
            Self::Tertiary => [0x3f, 0x40, 0x57, 0xff],
        }
    }
}

/// A 10×10 grid of palette colors, symmetric under horizontal mirroring
///
/// Derived from the plot id alone and recomputed on every request; the
/// matrix is never cached by the synthesizer itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMatrix {
    cells: Array2<PaletteColor>,
}

impl ColorMatrix {
    /// Derive the color matrix for a plot id
    ///
    /// The left half is populated from the seeded generator, then mirrored
    /// into the right half; the right half is never independently drawn.
    pub fn generate(id: u64) -> Self {
        let mut cells = Array2::from_elem((GRID_SIZE, GRID_SIZE), PaletteColor::Primary);

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE / 2 {
                let seed = id as f64 + (row as u64 * ROW_SEED_STRIDE + col as u64) as f64;
                let color = threshold_color(unit_interval(seed));
                if let Some(cell) = cells.get_mut((row, col)) {
                    *cell = color;
                }
            }
        }

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE / 2 {
                let mirrored = cells
                    .get((row, col))
                    .copied()
                    .unwrap_or(PaletteColor::Primary);
                if let Some(cell) = cells.get_mut((row, GRID_SIZE - 1 - col)) {
                    *cell = mirrored;
                }
            }
        }

        Self { cells }
    }

    /// Color at a grid position, `None` outside the grid bounds
    pub fn get(&self, row: usize, col: usize) -> Option<PaletteColor> {
        self.cells.get((row, col)).copied()
    }

    /// Side length of the square grid
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Iterate cells in row-major order with their grid positions
    pub fn indexed_cells(&self) -> impl Iterator<Item = ((usize, usize), PaletteColor)> + '_ {
        self.cells.indexed_iter().map(|(pos, &color)| (pos, color))
    }
}

/// Map a seed to the unit interval via the trigonometric hash
///
/// `frac(sin(seed) * 10000)` — cheap, deterministic, non-cryptographic;
/// the same seed always yields the same value.
fn unit_interval(seed: f64) -> f64 {
    let x = seed.sin() * 10_000.0;
    x - x.floor()
}

/// Split the generator output into the fixed 60/30/10 palette distribution
const fn threshold_color(value: f64) -> PaletteColor {
    if value < PRIMARY_THRESHOLD {
        PaletteColor::Primary
    } else if value < SECONDARY_THRESHOLD {
        PaletteColor::Secondary
    } else {
        PaletteColor::Tertiary
    }
}
