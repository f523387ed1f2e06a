use crate::{
    grid::generate::GridShape, hex::AxialHexCoordinate, layout::GridLayout,
};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// Largest width, height or size any shape can have. Anything bigger than
/// this is almost definitely a mistake, and would take a very long time (and
/// a lot of memory) to generate.
pub const MAX_SHAPE_DIMENSION: u32 = 10_000;

/// Configuration that defines a grid. Two grids generated from the same config
/// will always be identical.
///
/// Every field has a default, so a partial config (even an empty one) is
/// valid input. The default config is a pointy-top hexagon of radius 3, with
/// 30px tiles.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// How tiles get projected into pixel space. The layout's tile size must
    /// be positive on both axes.
    #[validate]
    pub layout: GridLayout,

    /// The shape of the grid, and how big it is. Widths, heights and
    /// triangle/world map sizes must be in `[1, 10000]`; a hexagon's radius
    /// can be 0 (which gives a single tile), up to 10000.
    #[validate(custom = "validate_shape")]
    pub shape: GridShape,

    /// Axial offset that's applied to the entire shape. If omitted, the shape
    /// is built around `(0, 0)`.
    pub origin: Option<AxialHexCoordinate>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            layout: GridLayout::default(),
            shape: GridShape::default(),
            origin: None,
        }
    }
}

fn validate_shape(shape: &GridShape) -> Result<(), ValidationError> {
    match *shape {
        GridShape::Rectangle { width, height }
        | GridShape::OffsetRectangle { width, height, .. }
        | GridShape::Parallelogram { width, height, .. } => {
            validate_dimension("width", width, 1)?;
            validate_dimension("height", height, 1)
        }
        GridShape::Hexagon { radius } => {
            validate_dimension("radius", radius, 0)
        }
        GridShape::Triangle { size, .. } | GridShape::WorldMap { size } => {
            validate_dimension("size", size, 1)
        }
    }
}

fn validate_dimension(
    name: &'static str,
    value: u32,
    min: u32,
) -> Result<(), ValidationError> {
    if (min..=MAX_SHAPE_DIMENSION).contains(&value) {
        Ok(())
    } else {
        let mut error = ValidationError::new("range");
        error.message = Some(Cow::Owned(format!(
            "{} must be between {} and {}, but was {}",
            name, min, MAX_SHAPE_DIMENSION, value
        )));
        error.add_param(Cow::Borrowed("value"), &value);
        Err(error)
    }
}
