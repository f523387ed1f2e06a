//! Projection between hex space and 2D pixel space. A [GridLayout] knows how
//! big each tile is, where the origin tile sits on screen, and which way the
//! tiles are turned, which is everything needed to draw a grid or to figure
//! out which tile the cursor is over.
//!
//! https://www.redblobgames.com/grids/hexagons/#hex-to-pixel

mod unit;

pub use self::unit::Point2;

use crate::{
    error::{HexError, Result},
    hex::{AxialHexCoordinate, FractionalHexCoordinate},
    util::parse_variant,
};
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};
use std::{f64::consts::PI, str::FromStr};
use strum::EnumIter;
use validator::{Validate, ValidationError};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Which way the tiles are turned. Each orientation carries the matrices that
/// convert between hex and pixel space, plus the angle of its first corner.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    strum::Display,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum LayoutOrientation {
    /// A corner points straight up, and rows of tiles line up horizontally
    Pointy,
    /// A side faces straight up, and columns of tiles line up vertically
    Flat,
}

impl LayoutOrientation {
    /// Row-major 2x2 matrix that maps `(q, r)` to unscaled pixel space
    pub fn forward(self) -> [f64; 4] {
        match self {
            Self::Pointy => [SQRT_3, SQRT_3 / 2.0, 0.0, 3.0 / 2.0],
            Self::Flat => [3.0 / 2.0, 0.0, SQRT_3 / 2.0, SQRT_3],
        }
    }

    /// Row-major 2x2 matrix that maps unscaled pixel space to `(q, r)`. This
    /// is the inverse of [Self::forward].
    pub fn backward(self) -> [f64; 4] {
        match self {
            Self::Pointy => [SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0],
            Self::Flat => [2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT_3 / 3.0],
        }
    }

    /// Angle of the first corner, as a fraction of 60°
    pub fn start_angle(self) -> f64 {
        match self {
            Self::Pointy => 0.5,
            Self::Flat => 0.0,
        }
    }

    pub fn is_pointy(self) -> bool {
        self == Self::Pointy
    }

    fn forward_matrix(self) -> Matrix2<f64> {
        Matrix2::from_row_slice(&self.forward())
    }

    fn backward_matrix(self) -> Matrix2<f64> {
        Matrix2::from_row_slice(&self.backward())
    }
}

impl Default for LayoutOrientation {
    fn default() -> Self {
        Self::Pointy
    }
}

impl FromStr for LayoutOrientation {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self> {
        parse_variant(s)
    }
}

/// Everything needed to project tiles onto a screen. A layout is immutable;
/// if you need different settings, just make a new one, they're very cheap.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridLayout {
    /// Which way tiles are turned
    pub orientation: LayoutOrientation,

    /// Horizontal and vertical scale of each tile, in pixels. For regular
    /// hexagons both components are equal, and each is the distance from a
    /// tile's center to any of its corners.
    #[validate(custom = "validate_size")]
    pub size: Point2,

    /// Pixel position of the center of tile `(0, 0)`
    pub pixel_origin: Point2,
}

impl GridLayout {
    pub fn new(
        orientation: LayoutOrientation,
        size: Point2,
        pixel_origin: Point2,
    ) -> Self {
        Self {
            orientation,
            size,
            pixel_origin,
        }
    }

    /// Get the pixel position of the center of a tile
    pub fn hex_to_pixel(&self, hex: AxialHexCoordinate) -> Point2 {
        let hex = Vector2::new(f64::from(hex.q()), f64::from(hex.r()));
        let unscaled: Point2 = (self.orientation.forward_matrix() * hex).into();
        Point2::new(
            unscaled.x * self.size.x + self.pixel_origin.x,
            unscaled.y * self.size.y + self.pixel_origin.y,
        )
    }

    /// Map a pixel position back into hex space. The result **isn't
    /// rounded**, so it can land anywhere within a tile. Use
    /// [FractionalHexCoordinate::to_axial] (or [Self::pixel_to_axial]) to
    /// find the tile that contains the point.
    pub fn pixel_to_hex(&self, point: Point2) -> FractionalHexCoordinate {
        let normalized = Point2::new(
            (point.x - self.pixel_origin.x) / self.size.x,
            (point.y - self.pixel_origin.y) / self.size.y,
        );
        let hex = self.orientation.backward_matrix()
            * Vector2::<f64>::from(normalized);
        // s is derived, so this is always on the plane
        FractionalHexCoordinate::new_unchecked(hex.x, hex.y, -hex.x - hex.y)
    }

    /// Get the tile that contains a pixel position
    pub fn pixel_to_axial(&self, point: Point2) -> AxialHexCoordinate {
        self.pixel_to_hex(point).to_axial()
    }

    /// Get the offset from a tile's center to one of its corners. Corners
    /// are numbered `0..6`, going in the direction of increasing angle from
    /// the orientation's start angle.
    pub fn hex_corner_offset(&self, corner: usize) -> Point2 {
        let angle =
            2.0 * PI * (self.orientation.start_angle() + corner as f64) / 6.0;
        Point2::new(self.size.x * angle.cos(), self.size.y * angle.sin())
    }

    /// Get the pixel positions of all 6 corners of a tile, in increasing
    /// corner order (see [Self::hex_corner_offset]). With screen coordinates
    /// (y pointing down) that winds clockwise.
    pub fn polygon_corners(&self, hex: AxialHexCoordinate) -> [Point2; 6] {
        let center = self.hex_to_pixel(hex);
        std::array::from_fn(|corner| center + self.hex_corner_offset(corner))
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            orientation: LayoutOrientation::Pointy,
            size: Point2::new(30.0, 30.0),
            pixel_origin: Point2::ZERO,
        }
    }
}

fn validate_size(size: &Point2) -> std::result::Result<(), ValidationError> {
    // Also catches NaN
    if size.x > 0.0 && size.y > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("size"))
    }
}
