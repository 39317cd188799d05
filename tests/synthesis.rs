//! Validates determinism, symmetry, and output structure of plot imagery

use plotfinder::io::configuration::GRID_SIZE;
use plotfinder::synthesis::raster::export_matrix_png;
use plotfinder::synthesis::svg::{encode_data_uri, render_svg, synthesize};
use plotfinder::synthesis::{ColorMatrix, PaletteColor};

#[test]
fn test_matrix_is_deterministic() {
    for id in [1, 42, 12321, 21000, 1_000_000] {
        assert_eq!(ColorMatrix::generate(id), ColorMatrix::generate(id));
    }
}

#[test]
fn test_synthesize_is_byte_identical_across_calls() {
    for id in [1, 9999, 21000] {
        assert_eq!(synthesize(id), synthesize(id));
    }
}

#[test]
fn test_matrix_is_horizontally_symmetric() {
    for id in [1, 7, 12321, 20000] {
        let matrix = ColorMatrix::generate(id);
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                assert_eq!(
                    matrix.get(row, col),
                    matrix.get(row, GRID_SIZE - 1 - col),
                    "asymmetry at ({row}, {col}) for id {id}"
                );
            }
        }
    }
}

#[test]
fn test_known_matrix_row() {
    // Fixed expectation pinning the seeded generator: id 1, row 0
    let matrix = ColorMatrix::generate(1);
    let expected = [
        PaletteColor::Secondary,
        PaletteColor::Tertiary,
        PaletteColor::Primary,
        PaletteColor::Tertiary,
        PaletteColor::Secondary,
        PaletteColor::Secondary,
        PaletteColor::Tertiary,
        PaletteColor::Primary,
        PaletteColor::Tertiary,
        PaletteColor::Secondary,
    ];

    for (col, &color) in expected.iter().enumerate() {
        assert_eq!(matrix.get(0, col), Some(color), "unexpected color at column {col}");
    }
}

#[test]
fn test_distinct_ids_produce_distinct_patterns() {
    assert_ne!(ColorMatrix::generate(1), ColorMatrix::generate(2));
    assert_ne!(synthesize(1), synthesize(2));
}

#[test]
fn test_matrix_bounds() {
    let matrix = ColorMatrix::generate(5);
    assert_eq!(matrix.size(), GRID_SIZE);
    assert!(matrix.get(0, 0).is_some());
    assert!(matrix.get(GRID_SIZE, 0).is_none());
    assert!(matrix.get(0, GRID_SIZE).is_none());
    assert_eq!(matrix.indexed_cells().count(), GRID_SIZE * GRID_SIZE);
}

#[test]
fn test_svg_structure() {
    let svg = render_svg(&ColorMatrix::generate(12321));
    assert!(svg.starts_with(r#"<svg width="100" height="100" xmlns="http://www.w3.org/2000/svg">"#));
    assert!(svg.ends_with("</svg>"));
    assert_eq!(svg.matches("<rect ").count(), GRID_SIZE * GRID_SIZE);

    // Every fill is one of the three palette colors
    let palette_fills = svg.matches("#f85266").count()
        + svg.matches("#b243a7").count()
        + svg.matches("#3f4057").count();
    assert_eq!(palette_fills, GRID_SIZE * GRID_SIZE);
}

#[test]
fn test_data_uri_encoding() {
    let uri = synthesize(1);
    assert!(uri.starts_with("data:image/svg+xml;charset=utf-8,"));

    // The payload must be fully percent-encoded
    let payload = uri.trim_start_matches("data:image/svg+xml;charset=utf-8,");
    assert!(!payload.contains('<'));
    assert!(!payload.contains('>'));
    assert!(!payload.contains('"'));
    assert!(payload.contains("%3Csvg"));
}

#[test]
fn test_encode_data_uri_preserves_unreserved_characters() {
    assert_eq!(
        encode_data_uri("abc-_.!~*'()123"),
        "data:image/svg+xml;charset=utf-8,abc-_.!~*'()123"
    );
    assert_eq!(encode_data_uri("a b"), "data:image/svg+xml;charset=utf-8,a%20b");
}

#[test]
fn test_png_export_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plot_1.png");
    let path_str = path.to_str().unwrap();

    let matrix = ColorMatrix::generate(1);
    export_matrix_png(&matrix, 10, path_str).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (100, 100));

    // Each pixel carries a palette color, and cell blocks mirror horizontally
    let palette = [
        PaletteColor::Primary.rgba(),
        PaletteColor::Secondary.rgba(),
        PaletteColor::Tertiary.rgba(),
    ];
    for (x, y, pixel) in img.enumerate_pixels() {
        assert!(palette.contains(&pixel.0), "non-palette pixel at ({x}, {y})");
    }
    for y in 0..100 {
        for x in 0..100 {
            assert_eq!(img.get_pixel(x, y), img.get_pixel(99 - x, y));
        }
    }
}

#[test]
fn test_png_export_rejects_zero_scale() {
    let matrix = ColorMatrix::generate(1);
    assert!(export_matrix_png(&matrix, 0, "unused.png").is_err());
}
