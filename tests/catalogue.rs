//! Validates dataset generation, persistence, validation, and reports

use plotfinder::catalogue::coordination::CoordinateIndex;
use plotfinder::catalogue::dataset::Dataset;
use plotfinder::catalogue::generator::{GeneratorConfig, generate_dataset, plot_coordinates};
use plotfinder::catalogue::owners::{
    OwnerSortKey, SortDirection, concentration_report, filter_by_address, sort_records, summarize,
};
use plotfinder::catalogue::plot::{CoordinateSpan, Plot, PlotCoordinates};

fn small_config() -> GeneratorConfig {
    GeneratorConfig {
        total_plots: 100,
        sold_plots: 40,
        seed: 7,
    }
}

fn owned_plot(id: u64, owner: Option<&str>) -> Plot {
    Plot {
        id,
        is_sold: owner.is_some(),
        owner: owner.map(str::to_owned),
        coordinates: PlotCoordinates {
            longitude: CoordinateSpan { min: 0.0, max: 1.0 },
            latitude: CoordinateSpan { min: 0.0, max: 1.0 },
        },
    }
}

#[test]
fn test_generator_is_deterministic() {
    let config = small_config();
    assert_eq!(generate_dataset(&config).unwrap(), generate_dataset(&config).unwrap());
}

#[test]
fn test_generated_dataset_satisfies_contract() {
    let dataset = generate_dataset(&small_config()).unwrap();

    assert_eq!(dataset.lands.len(), 100);
    assert_eq!(dataset.total_lands, 100);
    dataset.validate().unwrap();

    // The first and last plot are always sold
    assert!(dataset.plot(1).unwrap().is_sold);
    assert!(dataset.plot(100).unwrap().is_sold);

    // Sold target may be exceeded only by the two forced plots
    assert!(dataset.sold_lands >= 40);
    assert!(dataset.sold_lands <= 42);

    for plot in &dataset.lands {
        assert_eq!(plot.is_sold, plot.owner.is_some());
        if let Some(owner) = &plot.owner {
            assert!(owner.starts_with("0x"));
            assert_eq!(owner.len(), 42);
            assert!(owner.bytes().skip(2).all(|b| b.is_ascii_hexdigit()));
        }
    }
}

#[test]
fn test_generated_ids_are_sequential() {
    let dataset = generate_dataset(&small_config()).unwrap();
    for (index, plot) in dataset.lands.iter().enumerate() {
        assert_eq!(plot.id, (index + 1) as u64);
    }
}

#[test]
fn test_coordinate_grid_layout() {
    // 100 plots on a 10x10 grid: 36 degree columns, 18 degree rows
    let first = plot_coordinates(1, 100);
    assert!((first.longitude.min - -180.0).abs() < f64::EPSILON);
    assert!((first.longitude.max - -179.0).abs() < f64::EPSILON);
    assert!((first.latitude.max - 90.0).abs() < f64::EPSILON);
    assert!((first.latitude.min - 89.0).abs() < f64::EPSILON);

    let last = plot_coordinates(100, 100);
    assert!((last.longitude.min - 144.0).abs() < f64::EPSILON);
    assert!((last.latitude.max - -72.0).abs() < f64::EPSILON);

    // Second plot steps one column east on the same row
    let second = plot_coordinates(2, 100);
    assert!((second.longitude.min - -144.0).abs() < f64::EPSILON);
    assert!((second.latitude.max - 90.0).abs() < f64::EPSILON);
}

#[test]
fn test_generator_rejects_bad_parameters() {
    let zero = GeneratorConfig {
        total_plots: 0,
        sold_plots: 0,
        seed: 1,
    };
    assert!(generate_dataset(&zero).is_err());

    let oversold = GeneratorConfig {
        total_plots: 10,
        sold_plots: 11,
        seed: 1,
    };
    assert!(generate_dataset(&oversold).is_err());
}

#[test]
fn test_dataset_json_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lands.json");

    let dataset = generate_dataset(&small_config()).unwrap();
    dataset.write_json_file(&path).unwrap();

    let reloaded = Dataset::from_json_file(&path).unwrap();
    assert_eq!(dataset, reloaded);
}

#[test]
fn test_dataset_validation_failures() {
    let valid = Dataset {
        total_lands: 2,
        sold_lands: 1,
        lands: vec![owned_plot(1, Some("0xabc")), owned_plot(2, None)],
    };
    valid.validate().unwrap();

    let zero_id = Dataset {
        total_lands: 1,
        sold_lands: 0,
        lands: vec![owned_plot(0, None)],
    };
    assert!(zero_id.validate().is_err());

    let mut ownerless = valid.clone();
    if let Some(plot) = ownerless.lands.first_mut() {
        plot.owner = None;
    }
    assert!(ownerless.validate().is_err());

    let mut bad_total = valid.clone();
    bad_total.total_lands = 5;
    assert!(bad_total.validate().is_err());

    let mut bad_sold = valid;
    bad_sold.sold_lands = 2;
    assert!(bad_sold.validate().is_err());
}

#[test]
fn test_stats_percentages() {
    let dataset = Dataset {
        total_lands: 4,
        sold_lands: 3,
        lands: vec![
            owned_plot(1, Some("0xa")),
            owned_plot(2, Some("0xb")),
            owned_plot(3, Some("0xb")),
            owned_plot(4, None),
        ],
    };

    let stats = dataset.stats();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.sold, 3);
    assert_eq!(stats.available, 1);
    assert!((stats.sold_percentage - 75.0).abs() < f64::EPSILON);
}

#[test]
fn test_owner_concentration_report() {
    let plots = vec![
        owned_plot(1, Some("0xAAA")),
        owned_plot(2, Some("0xBBB")),
        owned_plot(3, Some("0xAAA")),
        owned_plot(4, None),
        owned_plot(5, Some("0xAAA")),
        owned_plot(6, None),
        owned_plot(7, None),
        owned_plot(8, None),
    ];

    let report = concentration_report(&plots);
    assert_eq!(report.len(), 2);

    // First-seen order before any sorting
    let first = report.first().unwrap();
    assert_eq!(first.address, "0xAAA");
    assert_eq!(first.plots_owned, 3);
    // Denominator is the whole catalogue: 3 of 8 plots
    assert!((first.percentage - 37.5).abs() < f64::EPSILON);

    let second = report.get(1).unwrap();
    assert_eq!(second.address, "0xBBB");
    assert_eq!(second.plots_owned, 1);
    assert!((second.percentage - 12.5).abs() < f64::EPSILON);
}

#[test]
fn test_owner_report_sorting_and_filtering() {
    let plots = vec![
        owned_plot(1, Some("0xAAA")),
        owned_plot(2, Some("0xBBB")),
        owned_plot(3, Some("0xBBB")),
        owned_plot(4, Some("0xCCC")),
    ];

    let mut report = concentration_report(&plots);
    sort_records(&mut report, OwnerSortKey::PlotsOwned, SortDirection::Descending);
    assert_eq!(report.first().unwrap().address, "0xBBB");

    sort_records(&mut report, OwnerSortKey::Percentage, SortDirection::Ascending);
    assert_eq!(report.last().unwrap().address, "0xBBB");

    let filtered = filter_by_address(&report, "ccc");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered.first().unwrap().address, "0xCCC");

    assert_eq!(filter_by_address(&report, "").len(), 3);
    assert!(filter_by_address(&report, "0xZ").is_empty());
}

#[test]
fn test_owner_summary() {
    let plots = vec![
        owned_plot(1, Some("0xAAA")),
        owned_plot(2, Some("0xAAA")),
        owned_plot(3, Some("0xBBB")),
        owned_plot(4, None),
    ];

    let summary = summarize(&concentration_report(&plots));
    assert_eq!(summary.total_owners, 2);
    assert_eq!(summary.total_owned, 3);
    assert!((summary.average_owned - 1.5).abs() < f64::EPSILON);

    let empty = summarize(&[]);
    assert_eq!(empty.total_owners, 0);
    assert!((empty.average_owned - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_coordination_index_lookup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("coordination.json");
    std::fs::write(
        &path,
        r#"[
            {"coord": {"long": {"min": "-177.67", "max": "-176.67"},
                       "lat": {"min": "79.27", "max": "80.27"}},
             "img_url": "https://img.example/1.png"},
            {"coord": {"long": {"min": "-176.67", "max": "-175.67"},
                       "lat": {"min": "79.27", "max": "80.27"}},
             "img_url": "https://img.example/2.png"}
        ]"#,
    )
    .unwrap();

    let index = CoordinateIndex::from_json_file(&path).unwrap();
    assert_eq!(index.len(), 2);
    assert!(!index.is_empty());

    assert_eq!(index.image_url(1), Some("https://img.example/1.png"));
    assert_eq!(index.image_url(2), Some("https://img.example/2.png"));
    assert_eq!(index.image_url(3), None);
    assert_eq!(index.image_url(0), None);

    let coords = index.coordinates(1).unwrap();
    assert!((coords.longitude.min - -177.67).abs() < f64::EPSILON);
    assert!((coords.latitude.max - 80.27).abs() < f64::EPSILON);
}

#[test]
fn test_coordination_index_rejects_bad_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("coordination.json");
    std::fs::write(
        &path,
        r#"[{"coord": {"long": {"min": "east", "max": "-176.67"},
                       "lat": {"min": "79.27", "max": "80.27"}},
             "img_url": "x"}]"#,
    )
    .unwrap();

    assert!(CoordinateIndex::from_json_file(&path).is_err());
}
