//! SVG rendering and data-URI encoding of plot imagery

use crate::io::configuration::{GRID_SIZE, PIXEL_SIZE};
use crate::synthesis::matrix::ColorMatrix;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped in the SVG data-URI payload
///
/// The complement of `encodeURIComponent`'s unreserved set, so encoded
/// URIs match what browsers produce for inline SVG sources.
const DATA_URI_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Render a color matrix as a fixed-size SVG document
///
/// One square rectangle per cell at `PIXEL_SIZE` pitch, emitted in
/// row-major order.
pub fn render_svg(matrix: &ColorMatrix) -> String {
    let side = GRID_SIZE as u32 * PIXEL_SIZE;
    let mut svg = format!(r#"<svg width="{side}" height="{side}" xmlns="http://www.w3.org/2000/svg">"#);

    for ((row, col), color) in matrix.indexed_cells() {
        let x = col as u32 * PIXEL_SIZE;
        let y = row as u32 * PIXEL_SIZE;
        svg.push_str(&format!(
            r#"<rect x="{x}" y="{y}" width="{PIXEL_SIZE}" height="{PIXEL_SIZE}" fill="{}" />"#,
            color.hex()
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Synthesize the self-contained image resource for a plot id
///
/// Returns an inline `data:` URI suitable for direct use as a display
/// source; no file I/O, no caching, no dataset bounds check.
pub fn synthesize(id: u64) -> String {
    let svg = render_svg(&ColorMatrix::generate(id));
    encode_data_uri(&svg)
}

/// Wrap an SVG document in a percent-encoded `data:` URI
pub fn encode_data_uri(svg: &str) -> String {
    format!(
        "data:image/svg+xml;charset=utf-8,{}",
        utf8_percent_encode(svg, DATA_URI_SET)
    )
}
