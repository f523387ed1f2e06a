//! Pure functions that produce the set of tiles for each supported grid
//! shape. Every generator returns a fresh, ordered list of axial coordinates
//! and takes an optional origin, which shifts the whole shape. When the origin
//! is omitted it's `(0, 0)`.
//!
//! Generators never fail. Sizes are unsigned so negative sizes can't happen,
//! and a size of 0 just gives you an empty (or near-empty) shape. If 0 isn't
//! meaningful for your use, reject it before calling in (which is what
//! [GridConfig](crate::GridConfig) validation does).
//!
//! Most of these are based on the shapes described here:
//! https://www.redblobgames.com/grids/hexagons/implementation.html#map-shapes

use crate::{
    error::{HexError, Result},
    hex::{AxialHexCoordinate, AxialIndexSet, OffsetHexCoordinate, OffsetType},
    layout::LayoutOrientation,
    util::parse_variant,
};
use derive_more::Display;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::{cmp, str::FromStr};
use strum::EnumIter;

/// The three ways a parallelogram can be laid out. Each one is named for the
/// two cube axes that its sides run along.
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ParallelogramOrientation {
    Qr,
    Sq,
    Rs,
}

impl Default for ParallelogramOrientation {
    fn default() -> Self {
        Self::Qr
    }
}

impl FromStr for ParallelogramOrientation {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self> {
        parse_variant(s)
    }
}

/// A grid shape, plus the parameters that define its size. This is the
/// serializable form of a generation request; call [Self::generate] to get
/// the actual tiles.
#[derive(Copy, Clone, Debug, Display, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GridShape {
    /// `height` rows of `width` tiles, stepping straight along the axial
    /// axes. See [rectangle].
    #[display(fmt = "{}x{} rectangle", width, height)]
    Rectangle { width: u32, height: u32 },

    /// A rectangle built in offset space, so it comes out as an actual
    /// rectangle on screen. If no offset type is given, one is picked based
    /// on the layout orientation: [OffsetType::OddR] for pointy tiles,
    /// [OffsetType::OddQ] for flat. See [offset_rectangle].
    #[display(fmt = "{}x{} offset rectangle", width, height)]
    OffsetRectangle {
        width: u32,
        height: u32,
        #[serde(default)]
        offset_type: Option<OffsetType>,
    },

    /// All tiles within `radius` steps of the origin. See [hexagon].
    #[display(fmt = "hexagon of radius {}", radius)]
    Hexagon { radius: u32 },

    /// A triangle with `size` tiles per side. See [triangle].
    #[display(fmt = "triangle of size {}", size)]
    Triangle {
        size: u32,
        #[serde(default)]
        inverted: bool,
    },

    /// See [parallelogram].
    #[display(fmt = "{}x{} {} parallelogram", width, height, orientation)]
    Parallelogram {
        width: u32,
        height: u32,
        #[serde(default)]
        orientation: ParallelogramOrientation,
    },

    /// 20 triangles with `size` tiles per side, tiled together. See
    /// [world_map].
    #[display(fmt = "world map of size {}", size)]
    WorldMap { size: u32 },
}

impl GridShape {
    /// Generate all the tiles for this shape. The layout orientation only
    /// matters for some shapes (triangles, world maps, and offset rectangles
    /// without an explicit offset type).
    pub fn generate(
        self,
        orientation: LayoutOrientation,
        origin: Option<AxialHexCoordinate>,
    ) -> Vec<AxialHexCoordinate> {
        let cells = match self {
            Self::Rectangle { width, height } => {
                rectangle(width, height, origin)
            }
            Self::OffsetRectangle {
                width,
                height,
                offset_type,
            } => {
                let offset_type = offset_type
                    .unwrap_or_else(|| default_offset_type(orientation));
                offset_rectangle(width, height, offset_type, origin)
            }
            Self::Hexagon { radius } => hexagon(radius, origin),
            Self::Triangle { size, inverted } => {
                triangle(orientation, size, inverted, origin)
            }
            Self::Parallelogram {
                width,
                height,
                orientation: parallelogram_orientation,
            } => parallelogram(width, height, parallelogram_orientation, origin),
            Self::WorldMap { size } => world_map(orientation, size, origin),
        };
        debug!(
            "Generated {} cells for {} ({} tiles)",
            cells.len(),
            self,
            orientation
        );
        cells
    }
}

impl Default for GridShape {
    fn default() -> Self {
        Self::Hexagon { radius: 3 }
    }
}

/// The offset type that makes a rectangle look rectangular for a given
/// orientation: shove rows for pointy tiles, columns for flat tiles.
pub fn default_offset_type(orientation: LayoutOrientation) -> OffsetType {
    match orientation {
        LayoutOrientation::Pointy => OffsetType::OddR,
        LayoutOrientation::Flat => OffsetType::OddQ,
    }
}

/// `height` rows of `width` tiles. Tile `(col, row)` is at axial
/// `(col, row) + origin`, and tiles are ordered row by row. Since this steps
/// along the axial axes, it actually comes out as a rhombus on screen; use
/// [offset_rectangle] for a rectangle that looks like one.
pub fn rectangle(
    width: u32,
    height: u32,
    origin: Option<AxialHexCoordinate>,
) -> Vec<AxialHexCoordinate> {
    let origin = origin.unwrap_or_default();
    let mut cells = reserve_area(width, height);
    let (width, height) = (extent(width), extent(height));
    for r in 0..height {
        for q in 0..width {
            cells.push(AxialHexCoordinate::new(q, r).add(origin));
        }
    }
    cells
}

/// `height` rows of `width` tiles, where `(col, row)` is interpreted as an
/// offset coordinate under the given offset type. Tiles are ordered row by
/// row.
pub fn offset_rectangle(
    width: u32,
    height: u32,
    offset_type: OffsetType,
    origin: Option<AxialHexCoordinate>,
) -> Vec<AxialHexCoordinate> {
    let origin = origin.unwrap_or_default();
    let mut cells = reserve_area(width, height);
    let (width, height) = (extent(width), extent(height));
    for row in 0..height {
        for col in 0..width {
            let axial = OffsetHexCoordinate::new(col, row).to_axial(offset_type);
            cells.push(axial.add(origin));
        }
    }
    cells
}

/// All tiles within `radius` steps of the origin. Radius 0 is 1 tile, 1 is 7
/// tiles, 2 is 19, etc. Tiles are ordered row by row (by ascending `r`), and
/// there are `2 * radius + 1` rows.
pub fn hexagon(
    radius: u32,
    origin: Option<AxialHexCoordinate>,
) -> Vec<AxialHexCoordinate> {
    let origin = origin.unwrap_or_default();
    let k = extent(radius);
    let mut cells = Vec::new();
    let _ = cells.try_reserve_exact(hexagon_len(radius));
    for r in -k..=k {
        // If we just do [-k,k] for q as well, then we end up with a rhombus
        // instead of a hexagon
        let q_min = cmp::max(-k, -r - k);
        let q_max = cmp::min(k, -r + k);
        for q in q_min..=q_max {
            cells.push(AxialHexCoordinate::new(q, r).add(origin));
        }
    }
    debug_assert_eq!(cells.len(), hexagon_len(radius), "expected 3k²+3k+1");
    cells
}

/// Calculate the number of tiles in a hexagon with the given radius
pub fn hexagon_len(radius: u32) -> usize {
    // We'll always have 3k^2+3k+1 tiles (a reduction of a geometric sum).
    // f(0) = 1, and we add 6k tiles for every step after that, so:
    // 1, (+6) 7, (+12) 19, (+18) 37, ...
    // Saturates for radii that could never be generated anyway
    let k = u128::from(radius);
    usize::try_from(3 * k * k + 3 * k + 1).unwrap_or(usize::MAX)
}

/// Convert a size into a loop bound. No coordinate can reach past
/// `i32::MAX`, so bigger sizes are clamped.
fn extent(size: u32) -> i32 {
    i32::try_from(size).unwrap_or(i32::MAX)
}

/// Make an empty vec with room for `width * height` cells. If that much
/// can't be reserved up front, the vec just grows as it goes.
fn reserve_area(width: u32, height: u32) -> Vec<AxialHexCoordinate> {
    let mut cells = Vec::new();
    if let Some(area) = (width as usize).checked_mul(height as usize) {
        let _ = cells.try_reserve_exact(area);
    }
    cells
}

/// A triangle with `size` tiles along each side. The layout orientation
/// decides which way it's built, and `inverted` flips it.
///
/// - Pointy: one row per `q`. The normal triangle starts with its longest
///   row (`size` tiles) and shrinks by 1 per row; inverted starts with 1 tile
///   and grows, going up in `r`.
/// - Flat: normal triangles have one row per `r`, with `size - r + 1` tiles
///   each. Inverted triangles have one row per `q`, with `size - q` tiles
///   each, flipped so they count down in `r` from `size - q`.
pub fn triangle(
    orientation: LayoutOrientation,
    size: u32,
    inverted: bool,
    origin: Option<AxialHexCoordinate>,
) -> Vec<AxialHexCoordinate> {
    let origin = origin.unwrap_or_default();
    let n = extent(size);
    let mut cells = Vec::new();
    let mut push = |q: i32, r: i32| {
        cells.push(AxialHexCoordinate::new(q, r).add(origin));
    };

    match (orientation, inverted) {
        (LayoutOrientation::Pointy, false) => {
            for q in 0..n {
                for r in 0..(n - q) {
                    push(q, r);
                }
            }
        }
        (LayoutOrientation::Pointy, true) => {
            for q in 0..n {
                for r in (-q..=0).rev() {
                    push(q, r);
                }
            }
        }
        (LayoutOrientation::Flat, false) => {
            for r in 0..n {
                for q in 0..=(n - r) {
                    push(q, r);
                }
            }
        }
        (LayoutOrientation::Flat, true) => {
            for q in 0..n {
                for r in 0..(n - q) {
                    push(q, n - q - r);
                }
            }
        }
    }

    cells
}

/// A parallelogram `width` tiles wide and `height` tiles tall. The
/// orientation picks which pair of cube axes the sides run along:
///
/// - [ParallelogramOrientation::Qr]: rows along `q`, stepping in `r`; this is
///   identical to [rectangle]
/// - [ParallelogramOrientation::Sq]: rows along `q`, stepping in `s`
/// - [ParallelogramOrientation::Rs]: rows along `s`, stepping in `r`
///
/// Tiles are ordered row by row.
pub fn parallelogram(
    width: u32,
    height: u32,
    orientation: ParallelogramOrientation,
    origin: Option<AxialHexCoordinate>,
) -> Vec<AxialHexCoordinate> {
    let origin = origin.unwrap_or_default();
    let mut cells = reserve_area(width, height);
    let (width, height) = (extent(width), extent(height));
    for row in 0..height {
        for col in 0..width {
            // For each of these, s is implied as -q-r so the cube invariant
            // holds no matter what the origin is
            let cell = match orientation {
                ParallelogramOrientation::Qr => {
                    AxialHexCoordinate::new(col, row)
                }
                // row is s, col is q
                ParallelogramOrientation::Sq => {
                    AxialHexCoordinate::new(col, -col - row)
                }
                // row is r, col is s
                ParallelogramOrientation::Rs => {
                    AxialHexCoordinate::new(-row - col, row)
                }
            };
            cells.push(cell.add(origin));
        }
    }
    cells
}

/// A big map made of 20 triangles with `size` tiles per side, laid out like
/// the net of an icosahedron: 4 rows of 5 triangles each, alternating
/// inverted and normal. Neighboring triangles share their edge tiles, so
/// duplicates get dropped.
///
/// Output is sorted by ascending `q`, then ascending `r`. Consumers can rely on
/// this ordering.
pub fn world_map(
    orientation: LayoutOrientation,
    size: u32,
    origin: Option<AxialHexCoordinate>,
) -> Vec<AxialHexCoordinate> {
    let origin = origin.unwrap_or_default();
    // Triangles overlap along their edges, so each one is shifted by one
    // less than its side length
    let z = extent(size) - 1;
    let top_anchor = origin.add(AxialHexCoordinate::new(0, z));
    let bottom_anchor = origin.add(AxialHexCoordinate::new(-z, 2 * z));
    let shift = |anchor: AxialHexCoordinate, i: i32| {
        anchor.add(AxialHexCoordinate::new(i * z, 0))
    };

    // (anchor, inverted) for each row of 5 triangles, top to bottom
    let rows = [
        (top_anchor, true),
        (bottom_anchor, true),
        (top_anchor, false),
        (bottom_anchor, false),
    ];
    let mut total = 0;
    // First occurrence wins, although it doesn't matter much since we sort
    let mut unique = AxialIndexSet::default();
    for &(anchor, inverted) in rows.iter() {
        for i in 0..5 {
            let cells =
                triangle(orientation, size, inverted, Some(shift(anchor, i)));
            total += cells.len();
            unique.extend(cells);
        }
    }
    trace!(
        "Merged {} triangle cells into {} unique cells",
        total,
        unique.len()
    );

    let mut cells: Vec<AxialHexCoordinate> = unique.into_iter().collect();
    // Ord on axial coordinates is (q, r)
    cells.sort_unstable();
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::{group_into_rows, AxialSet};
    use strum::IntoEnumIterator;

    fn axial(q: i32, r: i32) -> AxialHexCoordinate {
        AxialHexCoordinate::new(q, r)
    }

    fn assert_unique(cells: &[AxialHexCoordinate]) {
        let set: AxialSet = cells.iter().copied().collect();
        assert_eq!(set.len(), cells.len(), "duplicate cells in {:?}", cells);
    }

    #[test]
    fn test_rectangle() {
        let cells = rectangle(3, 2, None);
        assert_eq!(
            cells,
            vec![
                axial(0, 0),
                axial(1, 0),
                axial(2, 0),
                axial(0, 1),
                axial(1, 1),
                axial(2, 1),
            ]
        );

        let cells = rectangle(2, 2, Some(axial(5, 10)));
        assert_eq!(
            cells,
            vec![axial(5, 10), axial(6, 10), axial(5, 11), axial(6, 11)]
        );
        assert_eq!(rectangle(1, 1, None), vec![AxialHexCoordinate::ORIGIN]);
        assert!(rectangle(0, 5, None).is_empty());
    }

    #[test]
    fn test_offset_rectangle() {
        for offset_type in OffsetType::iter() {
            let cells = offset_rectangle(4, 3, offset_type, Some(axial(5, 10)));
            assert_eq!(cells.len(), 12);
            assert_unique(&cells);
            // Every cell maps back to its (col, row) in offset space
            for (i, cell) in cells.iter().enumerate() {
                let offset = OffsetHexCoordinate::from_axial(
                    cell.subtract(axial(5, 10)),
                    offset_type,
                );
                assert_eq!(offset.col(), i as i32 % 4);
                assert_eq!(offset.row(), i as i32 / 4);
            }
        }

        // Odd-r shifts odd rows right, which means q shrinks every other row
        assert_eq!(
            offset_rectangle(2, 3, OffsetType::OddR, None),
            vec![
                axial(0, 0),
                axial(1, 0),
                axial(0, 1),
                axial(1, 1),
                axial(-1, 2),
                axial(0, 2),
            ]
        );
    }

    #[test]
    fn test_default_offset_type() {
        let pointy = GridShape::OffsetRectangle {
            width: 2,
            height: 3,
            offset_type: None,
        }
        .generate(LayoutOrientation::Pointy, None);
        assert_eq!(pointy, offset_rectangle(2, 3, OffsetType::OddR, None));

        let flat = GridShape::OffsetRectangle {
            width: 3,
            height: 2,
            offset_type: None,
        }
        .generate(LayoutOrientation::Flat, None);
        assert_eq!(flat, offset_rectangle(3, 2, OffsetType::OddQ, None));
    }

    #[test]
    fn test_hexagon() {
        assert_eq!(hexagon(0, None), vec![AxialHexCoordinate::ORIGIN]);
        assert_eq!(hexagon(1, None).len(), 7);
        assert_eq!(hexagon(2, None).len(), 19);
        assert_eq!(hexagon(3, None).len(), 37);
        assert_eq!(hexagon_len(10), 331);
        assert_eq!(hexagon_len(u32::MAX), usize::MAX);

        // Rows should be symmetric around the middle row
        let rows = group_into_rows(hexagon(2, None), |c| c.r());
        let widths: Vec<usize> = rows.iter().map(Vec::len).collect();
        assert_eq!(widths, vec![3, 4, 5, 4, 3]);

        let cells = hexagon(2, Some(axial(10, 10)));
        assert!(cells.contains(&axial(10, 10)));
        assert!(cells.iter().all(|c| c.distance_to(axial(10, 10)) <= 2));
    }

    #[test]
    fn test_triangle_pointy() {
        let cells = triangle(LayoutOrientation::Pointy, 3, false, None);
        assert_eq!(
            cells,
            vec![
                axial(0, 0),
                axial(0, 1),
                axial(0, 2),
                axial(1, 0),
                axial(1, 1),
                axial(2, 0),
            ]
        );

        let cells = triangle(LayoutOrientation::Pointy, 3, true, None);
        assert_eq!(
            cells,
            vec![
                axial(0, 0),
                axial(1, 0),
                axial(1, -1),
                axial(2, 0),
                axial(2, -1),
                axial(2, -2),
            ]
        );

        assert_eq!(
            triangle(LayoutOrientation::Pointy, 2, false, Some(axial(5, 5)))
                [0],
            axial(5, 5)
        );
        assert_eq!(
            triangle(LayoutOrientation::Pointy, 1, false, None),
            vec![AxialHexCoordinate::ORIGIN]
        );
        assert!(triangle(LayoutOrientation::Pointy, 0, true, None).is_empty());
    }

    #[test]
    fn test_triangle_flat() {
        let cells = triangle(LayoutOrientation::Flat, 3, false, None);
        let widths: Vec<usize> = group_into_rows(cells.iter().copied(), |c| {
            c.r()
        })
        .iter()
        .map(Vec::len)
        .collect();
        assert_eq!(widths, vec![4, 3, 2]);
        assert_unique(&cells);

        let cells = triangle(LayoutOrientation::Flat, 3, true, None);
        assert_eq!(
            cells,
            vec![
                axial(0, 3),
                axial(0, 2),
                axial(0, 1),
                axial(1, 2),
                axial(1, 1),
                axial(2, 1),
            ]
        );
    }

    #[test]
    fn test_parallelogram() {
        assert_eq!(
            parallelogram(3, 2, ParallelogramOrientation::Qr, Some(axial(5, 10))),
            rectangle(3, 2, Some(axial(5, 10)))
        );

        assert_eq!(
            parallelogram(2, 2, ParallelogramOrientation::Sq, None),
            vec![axial(0, 0), axial(1, -1), axial(0, -1), axial(1, -2)]
        );
        assert_eq!(
            parallelogram(2, 2, ParallelogramOrientation::Rs, None),
            vec![axial(0, 0), axial(-1, 0), axial(-1, 1), axial(-2, 1)]
        );

        // An origin that isn't on the q+r=0 line must still work
        for orientation in ParallelogramOrientation::iter() {
            let cells = parallelogram(4, 3, orientation, Some(axial(3, 4)));
            assert_eq!(cells.len(), 12);
            assert_unique(&cells);
            assert_eq!(cells[0], axial(3, 4));
        }
    }

    #[test]
    fn test_huge_sizes() {
        assert_eq!(extent(7), 7);
        assert_eq!(extent(i32::MAX as u32), i32::MAX);
        assert_eq!(extent(u32::MAX), i32::MAX);
        assert!(reserve_area(u32::MAX, u32::MAX).is_empty());

        // An empty dimension means nothing gets generated, no matter how big
        // the other one is
        assert!(rectangle(u32::MAX, 0, None).is_empty());
        assert!(
            offset_rectangle(u32::MAX, 0, OffsetType::OddR, None).is_empty()
        );
        for orientation in ParallelogramOrientation::iter() {
            assert!(parallelogram(u32::MAX, 0, orientation, None).is_empty());
        }
    }

    #[test]
    fn test_parallelogram_orientation_parse() {
        assert_eq!(
            "SQ".parse::<ParallelogramOrientation>(),
            Ok(ParallelogramOrientation::Sq)
        );
        assert_eq!(
            "xy".parse::<ParallelogramOrientation>(),
            Err(HexError::InvalidOrientation("xy".into()))
        );
    }

    #[test]
    fn test_world_map() {
        for orientation in LayoutOrientation::iter() {
            for size in 1..=5 {
                let cells = world_map(orientation, size, None);
                assert_unique(&cells);
                let mut sorted = cells.clone();
                sorted.sort_by_key(|c| (c.q(), c.r()));
                assert_eq!(cells, sorted);
            }
        }

        // Size 1 means every triangle is a single tile on top of the origin
        assert_eq!(
            world_map(LayoutOrientation::Pointy, 1, None),
            vec![AxialHexCoordinate::ORIGIN]
        );
        // Shifting the origin shifts everything
        let shifted = world_map(LayoutOrientation::Pointy, 4, Some(axial(2, -3)));
        let unshifted: Vec<_> = world_map(LayoutOrientation::Pointy, 4, None)
            .into_iter()
            .map(|c| c.add(axial(2, -3)))
            .collect();
        assert_eq!(shifted, unshifted);
    }

    #[test]
    fn test_world_map_contains_all_triangles() {
        let size = 4;
        let z = size as i32 - 1;
        let cells: AxialSet = world_map(LayoutOrientation::Pointy, size, None)
            .into_iter()
            .collect();
        for i in 0..5 {
            let anchor = axial(i * z, z);
            for inverted in [false, true].iter().copied() {
                for cell in triangle(
                    LayoutOrientation::Pointy,
                    size,
                    inverted,
                    Some(anchor),
                ) {
                    assert!(cells.contains(&cell), "missing {}", cell);
                }
            }
        }
        // 20 triangles of 10 tiles each, minus the shared edges
        assert!(cells.len() < 200);
    }
}
