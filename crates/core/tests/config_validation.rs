use hexgrid::{
    GridConfig, GridLayout, GridShape, HexGrid, LayoutOrientation, Point2,
};
use validator::ValidationErrors;

fn error_fields(config: GridConfig) -> Vec<&'static str> {
    let err = HexGrid::generate(config).unwrap_err();
    assert_eq!(err.to_string(), "invalid config");
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    let mut error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    error_fields.sort_unstable();
    error_fields
}

#[test]
fn test_config_validation() {
    let config = GridConfig {
        layout: GridLayout {
            orientation: LayoutOrientation::Flat,
            size: Point2::new(0.0, 10.0), // invalid (zero width)
            pixel_origin: Point2::new(-100.0, -100.0), // valid
        },
        shape: GridShape::Rectangle {
            width: 10001, // invalid (too big)
            height: 5,
        },
        origin: None,
    };

    // This is a bit of a lazy check but it works well enough
    assert_eq!(error_fields(config), vec!["layout", "shape"]);
}

#[test]
fn test_zero_sizes() {
    for shape in vec![
        GridShape::Rectangle {
            width: 0,
            height: 1,
        },
        GridShape::OffsetRectangle {
            width: 1,
            height: 0,
            offset_type: None,
        },
        GridShape::Triangle {
            size: 0,
            inverted: true,
        },
        GridShape::WorldMap { size: 0 },
    ] {
        let config = GridConfig {
            shape,
            ..Default::default()
        };
        assert_eq!(error_fields(config), vec!["shape"], "for {}", shape);
    }

    // A zero-radius hexagon is fine though
    let config = GridConfig {
        shape: GridShape::Hexagon { radius: 0 },
        ..Default::default()
    };
    assert_eq!(HexGrid::generate(config).unwrap().len(), 1);
}

#[test]
fn test_nan_size() {
    let config = GridConfig {
        layout: GridLayout {
            size: Point2::new(f64::NAN, 10.0),
            ..Default::default()
        },
        ..Default::default()
    };
    assert_eq!(error_fields(config), vec!["layout"]);
}
