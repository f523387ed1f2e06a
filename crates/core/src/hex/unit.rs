//! This sub-module contains the value types that make up the hex coordinate
//! systems. See the parent module documentation for a description of each
//! system and how they relate.

use crate::{
    error::{HexError, Result},
    util::parse_variant,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, str::FromStr};
use strum::{EnumIter, IntoEnumIterator};

/// A tile address in the axial coordinate system. Axial coordinates are cube
/// coordinates with the `s` component dropped, since `q + r + s = 0` means it
/// can always be derived. Any pair of integers is a valid axial coordinate.
///
/// This is the canonical coordinate type: grids store their membership as
/// axial coordinates, and every other system converts to/from this one.
///
/// Arithmetic is exposed through named methods ([Self::add],
/// [Self::subtract], [Self::scale]) rather than operators.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", q, r)]
pub struct AxialHexCoordinate {
    q: i32,
    r: i32,
}

impl AxialHexCoordinate {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub fn q(&self) -> i32 {
        self.q
    }

    pub fn r(&self) -> i32 {
        self.r
    }

    /// The implicit third component. Since `q + r + s = 0` for all points, we
    /// can derive `s` from `q` & `r`.
    ///
    /// `s` is only representable when `q + r` fits in an `i32`. For the rare
    /// coordinates where it doesn't, [Self::length] and [Self::distance_to]
    /// still work, but `s` (and anything that goes through cube space)
    /// overflows.
    pub fn s(&self) -> i32 {
        -self.q - self.r
    }

    pub fn from_cube(cube: CubeHexCoordinate) -> Self {
        Self::new(cube.q(), cube.r())
    }

    /// Build an axial coordinate from three cube components, checking that
    /// they're actually on the plane `q + r + s = 0`.
    pub fn try_from_cube_components(q: i32, r: i32, s: i32) -> Result<Self> {
        CubeHexCoordinate::new(q, r, s).map(Self::from_cube)
    }

    pub fn to_cube(self) -> CubeHexCoordinate {
        CubeHexCoordinate::from_axial(self)
    }

    /// Number of single-tile steps between this coordinate and the origin
    pub fn length(self) -> usize {
        cube_length(i64::from(self.q), i64::from(self.r))
    }

    /// Calculate the path distance between two tiles, meaning the number of
    /// hops it takes to get from one to the other. 0 if the points are equal,
    /// 1 if the tiles are adjacent, 2 if there is 1 tile between them, etc.
    pub fn distance_to(self, other: Self) -> usize {
        cube_length(
            i64::from(self.q) - i64::from(other.q),
            i64::from(self.r) - i64::from(other.r),
        )
    }

    pub fn add(self, other: Self) -> Self {
        Self::new(self.q + other.q, self.r + other.r)
    }

    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.q - other.q, self.r - other.r)
    }

    /// Multiply both components by `k`. Scaling by 0 gives the origin, scaling
    /// by -1 points the vector the opposite way.
    pub fn scale(self, k: i32) -> Self {
        Self::new(self.q * k, self.r * k)
    }

    /// Rotate this coordinate 60° clockwise around the origin
    pub fn rotate_right(self) -> Self {
        Self::new(-self.r, self.q + self.r)
    }

    /// Rotate this coordinate 60° counter-clockwise around the origin
    pub fn rotate_left(self) -> Self {
        Self::new(self.q + self.r, -self.q)
    }

    /// Get the location of the tile adjacent to this one in a direction
    pub fn neighbor(self, direction: HexDirection) -> Self {
        self.add(direction.to_vector())
    }

    /// Get the tile adjacent to this one, by direction index. The index must
    /// be in `[0, 5]`; see [HexDirection::CLOCKWISE] for the ordering.
    pub fn get_neighbor(self, direction: i32) -> Result<Self> {
        Ok(self.neighbor(HexDirection::try_from(direction)?))
    }

    /// Get an iterator of all the coordinates directly adjacent to this one,
    /// in [HexDirection::CLOCKWISE] order. The iterator will always contain
    /// exactly 6 values. **These don't necessarily exist in any grid!**
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        HexDirection::iter().map(move |dir| self.neighbor(dir))
    }
}

impl From<CubeHexCoordinate> for AxialHexCoordinate {
    fn from(cube: CubeHexCoordinate) -> Self {
        Self::from_cube(cube)
    }
}

/// Number of steps from the origin to `(q, r)`. This is done in `i64` so
/// that coordinates near the edge of the `i32` range (where `s` or the
/// component sum won't fit) still get the right answer.
///
/// https://www.redblobgames.com/grids/hexagons/#distances
fn cube_length(q: i64, r: i64) -> usize {
    let s = -q - r;
    ((q.abs() + r.abs() + s.abs()) / 2) as usize
}

/// A tile address in the cube coordinate system. All three components are
/// stored, and **`q + r + s = 0` always holds**. The constructor enforces
/// this, and every operation on valid cube coordinates produces another valid
/// cube coordinate.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize,
)]
#[display(fmt = "({}, {}, {})", q, r, s)]
pub struct CubeHexCoordinate {
    q: i32,
    r: i32,
    s: i32,
}

impl CubeHexCoordinate {
    pub const ORIGIN: Self = Self::new_unchecked(0, 0, 0);

    /// Construct a new cube coordinate. Returns an error if the components
    /// don't fall on the plane `q + r + s = 0`.
    pub fn new(q: i32, r: i32, s: i32) -> Result<Self> {
        // Widen so large components can't wrap around to 0
        if i64::from(q) + i64::from(r) + i64::from(s) != 0 {
            Err(HexError::InvalidCoordinate(format!("({}, {}, {})", q, r, s)))
        } else {
            Ok(Self::new_unchecked(q, r, s))
        }
    }

    /// Skip the plane check. Only for use when the caller has already
    /// guaranteed `q + r + s = 0`.
    const fn new_unchecked(q: i32, r: i32, s: i32) -> Self {
        Self { q, r, s }
    }

    pub fn from_axial(axial: AxialHexCoordinate) -> Self {
        Self::new_unchecked(axial.q(), axial.r(), axial.s())
    }

    pub fn to_axial(self) -> AxialHexCoordinate {
        AxialHexCoordinate::from_cube(self)
    }

    pub fn q(&self) -> i32 {
        self.q
    }

    pub fn r(&self) -> i32 {
        self.r
    }

    pub fn s(&self) -> i32 {
        self.s
    }

    pub fn length(self) -> usize {
        self.to_axial().length()
    }

    pub fn distance_to(self, other: Self) -> usize {
        self.to_axial().distance_to(other.to_axial())
    }

    // The sum of two points on the plane is still on the plane, same goes for
    // differences and integer multiples, so we can skip validation for all
    // of these

    pub fn add(self, other: Self) -> Self {
        Self::new_unchecked(
            self.q + other.q,
            self.r + other.r,
            self.s + other.s,
        )
    }

    pub fn subtract(self, other: Self) -> Self {
        Self::new_unchecked(
            self.q - other.q,
            self.r - other.r,
            self.s - other.s,
        )
    }

    pub fn scale(self, k: i32) -> Self {
        Self::new_unchecked(self.q * k, self.r * k, self.s * k)
    }

    pub fn neighbor(self, direction: HexDirection) -> Self {
        self.to_axial().neighbor(direction).to_cube()
    }
}

impl From<AxialHexCoordinate> for CubeHexCoordinate {
    fn from(axial: AxialHexCoordinate) -> Self {
        Self::from_axial(axial)
    }
}

/// The parity rule that maps offset coordinates onto the hex grid. Offset
/// coordinates shove every other column (`*Q`) or row (`*R`) by half a tile;
/// `Even*`/`Odd*` picks which ones get shoved.
///
/// https://www.redblobgames.com/grids/hexagons/#coordinates-offset
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
pub enum OffsetType {
    /// Flat-top tiles, even columns shoved down
    EvenQ,
    /// Flat-top tiles, odd columns shoved down
    OddQ,
    /// Pointy-top tiles, even rows shoved right
    EvenR,
    /// Pointy-top tiles, odd rows shoved right
    OddR,
}

impl FromStr for OffsetType {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self> {
        parse_variant(s)
    }
}

/// A tile address in an offset coordinate system, i.e. plain column/row
/// indices like you'd use for a rectangular pixel grid. The coordinate alone
/// is meaningless; it has to be paired with an [OffsetType] to identify a
/// tile.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "[{}, {}]", col, row)]
pub struct OffsetHexCoordinate {
    col: i32,
    row: i32,
}

impl OffsetHexCoordinate {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn from_axial(
        axial: AxialHexCoordinate,
        offset_type: OffsetType,
    ) -> Self {
        let (q, r) = (axial.q(), axial.r());
        // rem_euclid instead of & so the parity is right for negatives too
        match offset_type {
            OffsetType::EvenQ => Self::new(q, r + (q + q.rem_euclid(2)) / 2),
            OffsetType::OddQ => Self::new(q, r + (q - q.rem_euclid(2)) / 2),
            OffsetType::EvenR => Self::new(q + (r + r.rem_euclid(2)) / 2, r),
            OffsetType::OddR => Self::new(q + (r - r.rem_euclid(2)) / 2, r),
        }
    }

    pub fn from_cube(cube: CubeHexCoordinate, offset_type: OffsetType) -> Self {
        Self::from_axial(cube.to_axial(), offset_type)
    }

    pub fn to_axial(self, offset_type: OffsetType) -> AxialHexCoordinate {
        let (col, row) = (self.col, self.row);
        match offset_type {
            OffsetType::EvenQ => {
                AxialHexCoordinate::new(col, row - (col + (col & 1)) / 2)
            }
            OffsetType::OddQ => {
                AxialHexCoordinate::new(col, row - (col - (col & 1)) / 2)
            }
            OffsetType::EvenR => {
                AxialHexCoordinate::new(col - (row + (row & 1)) / 2, row)
            }
            OffsetType::OddR => {
                AxialHexCoordinate::new(col - (row - (row & 1)) / 2, row)
            }
        }
    }

    pub fn to_cube(self, offset_type: OffsetType) -> CubeHexCoordinate {
        self.to_axial(offset_type).to_cube()
    }
}

/// A real-valued point in cube coordinates. These show up as an intermediate
/// step when mapping pixels back onto the grid, or when interpolating between
/// two tiles. Like [CubeHexCoordinate], the components must sum to zero, but
/// here that's checked within a small tolerance to allow for float error.
///
/// Use [Self::to_cube] or [Self::to_axial] to round to the nearest tile.
#[derive(Copy, Clone, Debug, PartialEq, Display, Serialize)]
#[display(fmt = "({}, {}, {})", q, r, s)]
pub struct FractionalHexCoordinate {
    q: f64,
    r: f64,
    s: f64,
}

impl FractionalHexCoordinate {
    /// Max distance from the plane `q + r + s = 0` that we'll accept
    pub const TOLERANCE: f64 = 1e-6;

    /// Construct a new fractional coordinate. Returns an error if the
    /// components sum to more than [Self::TOLERANCE] away from zero.
    pub fn new(q: f64, r: f64, s: f64) -> Result<Self> {
        if (q + r + s).abs() > Self::TOLERANCE {
            Err(HexError::InvalidCoordinate(format!("({}, {}, {})", q, r, s)))
        } else {
            Ok(Self::new_unchecked(q, r, s))
        }
    }

    /// Skip the plane check. Only for use when `s` was derived from `q` and
    /// `r`, or when combining values that were already valid.
    pub(crate) const fn new_unchecked(q: f64, r: f64, s: f64) -> Self {
        Self { q, r, s }
    }

    pub fn from_axial(axial: AxialHexCoordinate) -> Self {
        Self::from_cube(axial.to_cube())
    }

    pub fn from_cube(cube: CubeHexCoordinate) -> Self {
        Self::new_unchecked(cube.q().into(), cube.r().into(), cube.s().into())
    }

    pub fn q(&self) -> f64 {
        self.q
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn s(&self) -> f64 {
        self.s
    }

    /// Linearly interpolate between this point and another. `t = 0` gives
    /// this point, `t = 1` gives `other`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        fn lerp(a: f64, b: f64, t: f64) -> f64 {
            a * (1.0 - t) + b * t
        }

        // A weighted average of two points on the plane stays on the plane
        Self::new_unchecked(
            lerp(self.q, other.q, t),
            lerp(self.r, other.r, t),
            lerp(self.s, other.s, t),
        )
    }

    /// Round to the tile that contains this point.
    ///
    /// Rounding each component on its own can land off the plane, so the
    /// component that moved the most while rounding gets recomputed from the
    /// other two. Ties go to the later component.
    ///
    /// https://www.redblobgames.com/grids/hexagons/#rounding
    pub fn to_cube(self) -> CubeHexCoordinate {
        let mut q = self.q.round_ties_even();
        let mut r = self.r.round_ties_even();
        let mut s = self.s.round_ties_even();

        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s).abs();

        if q_diff > r_diff && q_diff > s_diff {
            q = -r - s;
        } else if r_diff > s_diff {
            r = -q - s;
        } else {
            s = -q - r;
        }

        CubeHexCoordinate::new_unchecked(q as i32, r as i32, s as i32)
    }

    pub fn to_axial(self) -> AxialHexCoordinate {
        self.to_cube().to_axial()
    }
}

/// The 6 directions in which tiles can line up side-to-side, i.e. the
/// direction from one tile's center to each of its neighbors. Named relative
/// to pointy-top tiles.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HexDirection {
    NorthEast,
    East,
    SouthEast,
    SouthWest,
    West,
    NorthWest,
}

impl HexDirection {
    /// All directions, in clockwise order starting from northeast. A
    /// direction's index in this list is its numeric direction.
    pub const CLOCKWISE: &'static [Self] = &[
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Get the index of this direction within [Self::CLOCKWISE]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Get the direction that is directly opposite this one
    pub fn opposite(self) -> Self {
        Self::CLOCKWISE[(self.index() + 3) % Self::CLOCKWISE.len()]
    }

    /// Get an offset that would move a coordinate one tile in this direction
    pub fn to_vector(self) -> AxialHexCoordinate {
        match self {
            Self::NorthEast => AxialHexCoordinate::new(1, -1),
            Self::East => AxialHexCoordinate::new(1, 0),
            Self::SouthEast => AxialHexCoordinate::new(0, 1),
            Self::SouthWest => AxialHexCoordinate::new(-1, 1),
            Self::West => AxialHexCoordinate::new(-1, 0),
            Self::NorthWest => AxialHexCoordinate::new(0, -1),
        }
    }
}

impl TryFrom<i32> for HexDirection {
    type Error = HexError;

    fn try_from(index: i32) -> Result<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::CLOCKWISE.get(i))
            .copied()
            .ok_or(HexError::InvalidDirection(index))
    }
}
