//! PNG raster export of plot imagery

use crate::io::error::{CatalogueError, Result, invalid_parameter};
use crate::synthesis::matrix::ColorMatrix;
use image::{ImageBuffer, Rgba};

/// Export a color matrix as a PNG image at an integer pixel scale
///
/// Each grid cell becomes a `scale`×`scale` block of its palette color.
///
/// # Errors
///
/// Returns an error if:
/// - `scale` is zero
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_matrix_png(matrix: &ColorMatrix, scale: u32, output_path: &str) -> Result<()> {
    if scale == 0 {
        return Err(invalid_parameter("scale", &scale, &"must be at least 1"));
    }

    let side = matrix.size() as u32 * scale;
    let mut img = ImageBuffer::new(side, side);

    for ((row, col), color) in matrix.indexed_cells() {
        let pixel = Rgba(color.rgba());
        for dy in 0..scale {
            for dx in 0..scale {
                img.put_pixel(col as u32 * scale + dx, row as u32 * scale + dy, pixel);
            }
        }
    }

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| CatalogueError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| CatalogueError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
