//! A [HexGrid] is a finite set of tiles paired with the layout used to draw
//! them. Grids are built by one of the shape generators in [generate], and
//! answer adjacency, line and reachability queries restricted to their own
//! tiles.

pub mod generate;

use crate::{
    config::GridConfig,
    error::{HexError, Result},
    grid::generate::{GridShape, ParallelogramOrientation},
    hex::{
        group_into_rows, AxialHexCoordinate, AxialIndexSet, AxialSet,
        FractionalHexCoordinate, OffsetType,
    },
    layout::{GridLayout, Point2},
    timed,
};
use anyhow::Context;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use validator::Validate;

/// Nudge applied to both ends of a line before interpolating, so points that
/// land exactly on a tile edge always round the same way
const LINE_NUDGE: f64 = 1e-6;

/// A finite collection of tiles, plus the layout and origin it was generated
/// with. Every cell appears exactly once, and iteration follows the order the
/// cells were generated in. Grids are immutable once built; to get a grid
/// with a different set of cells, use [HexGrid::with_cells].
///
/// Two grids are equal only if they have the same layout and origin, and
/// iterate the same cells **in the same order**.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HexGrid {
    layout: GridLayout,
    /// The axial offset that was applied to the generated shape
    origin: AxialHexCoordinate,
    cells: AxialIndexSet,
}

impl HexGrid {
    /// Build a grid from an arbitrary list of cells. Duplicates are dropped,
    /// and the first occurrence of each cell decides its position in
    /// iteration order.
    pub fn new(
        layout: GridLayout,
        cells: impl IntoIterator<Item = AxialHexCoordinate>,
        origin: Option<AxialHexCoordinate>,
    ) -> Self {
        Self {
            layout,
            origin: origin.unwrap_or_default(),
            cells: cells.into_iter().collect(),
        }
    }

    /// Generate a grid from a config. Returns an error if the config is
    /// invalid; see [GridConfig] for the rules.
    pub fn generate(config: GridConfig) -> anyhow::Result<Self> {
        info!("Generating grid with config {:#?}", config);

        config.validate().context("invalid config")?;

        let grid = timed!(
            "Grid generation",
            log::Level::Info,
            Self::from_shape(config.layout, config.shape, config.origin)
        );
        info!("Generated grid with {} cells", grid.len());
        Ok(grid)
    }

    /// Build a grid of the given shape. Unlike [Self::generate], this doesn't
    /// validate anything, so it's up to you to pass reasonable sizes.
    pub fn from_shape(
        layout: GridLayout,
        shape: GridShape,
        origin: Option<AxialHexCoordinate>,
    ) -> Self {
        Self::new(layout, shape.generate(layout.orientation, origin), origin)
    }

    /// See [generate::rectangle]
    pub fn rectangle(
        layout: GridLayout,
        width: u32,
        height: u32,
        origin: Option<AxialHexCoordinate>,
    ) -> Self {
        Self::from_shape(layout, GridShape::Rectangle { width, height }, origin)
    }

    /// See [generate::offset_rectangle]. If no offset type is given, it's
    /// picked from the layout orientation.
    pub fn offset_rectangle(
        layout: GridLayout,
        width: u32,
        height: u32,
        offset_type: Option<OffsetType>,
        origin: Option<AxialHexCoordinate>,
    ) -> Self {
        let shape = GridShape::OffsetRectangle {
            width,
            height,
            offset_type,
        };
        Self::from_shape(layout, shape, origin)
    }

    /// See [generate::hexagon]
    pub fn hexagon(
        layout: GridLayout,
        radius: u32,
        origin: Option<AxialHexCoordinate>,
    ) -> Self {
        Self::from_shape(layout, GridShape::Hexagon { radius }, origin)
    }

    /// See [generate::triangle]
    pub fn triangle(
        layout: GridLayout,
        size: u32,
        inverted: bool,
        origin: Option<AxialHexCoordinate>,
    ) -> Self {
        Self::from_shape(layout, GridShape::Triangle { size, inverted }, origin)
    }

    /// See [generate::parallelogram]
    pub fn parallelogram(
        layout: GridLayout,
        width: u32,
        height: u32,
        orientation: ParallelogramOrientation,
        origin: Option<AxialHexCoordinate>,
    ) -> Self {
        let shape = GridShape::Parallelogram {
            width,
            height,
            orientation,
        };
        Self::from_shape(layout, shape, origin)
    }

    /// See [generate::world_map]
    pub fn world_map(
        layout: GridLayout,
        size: u32,
        origin: Option<AxialHexCoordinate>,
    ) -> Self {
        Self::from_shape(layout, GridShape::WorldMap { size }, origin)
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn origin(&self) -> AxialHexCoordinate {
        self.origin
    }

    /// Get the ordered set of cells in this grid
    pub fn cells(&self) -> &AxialIndexSet {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coord: AxialHexCoordinate) -> bool {
        self.cells.contains(&coord)
    }

    /// Iterate over every cell, in generation order
    pub fn iter(&self) -> impl Iterator<Item = AxialHexCoordinate> + '_ {
        self.cells.iter().copied()
    }

    /// Make a new grid with the same layout and origin, but different cells.
    /// Handy for narrowing a grid down to a subset. This grid is left as is.
    pub fn with_cells(
        &self,
        cells: impl IntoIterator<Item = AxialHexCoordinate>,
    ) -> Self {
        Self::new(self.layout, cells, Some(self.origin))
    }

    /// Group cells into rows of equal `r`, ordered top to bottom. Each row is
    /// ordered left to right by `q`.
    pub fn rows(&self) -> Vec<Vec<AxialHexCoordinate>> {
        group_into_rows(self.iter(), |cell| cell.r())
    }

    /// Get the pixel position of a cell's center, under this grid's layout
    pub fn center(&self, coord: AxialHexCoordinate) -> Result<Point2> {
        self.check_member(coord)?;
        Ok(self.layout.hex_to_pixel(coord))
    }

    /// Get the neighbor of a cell in one direction (see
    /// [HexDirection](crate::HexDirection) for direction indexes). The
    /// neighbor is computed geometrically, so it **may not be in the grid**.
    /// Use [Self::contains] if you need to know.
    pub fn get_neighbor(
        &self,
        coord: AxialHexCoordinate,
        direction: i32,
    ) -> Result<AxialHexCoordinate> {
        self.check_member(coord)?;
        coord.get_neighbor(direction)
    }

    /// Get all neighbors of a cell that are also in the grid, in clockwise
    /// direction order starting from north-east
    pub fn get_neighbors(
        &self,
        coord: AxialHexCoordinate,
    ) -> Result<Vec<AxialHexCoordinate>> {
        self.check_member(coord)?;
        Ok(coord.neighbors().filter(|n| self.contains(*n)).collect())
    }

    /// Draw a straight line between two cells, and get every cell along it
    /// that's in the grid. Both endpoints must be in the grid. The line starts
    /// at `a` and ends at `b`, with one sample per step of distance between
    /// them; samples that fall outside the grid are skipped, so the result
    /// can have gaps if the grid isn't convex.
    pub fn line_draw(
        &self,
        a: AxialHexCoordinate,
        b: AxialHexCoordinate,
    ) -> Result<Vec<AxialHexCoordinate>> {
        self.check_member(a)?;
        self.check_member(b)?;

        let n = a.distance_to(b);
        if n == 0 {
            return Ok(vec![a]);
        }

        let start = nudge(a);
        let end = nudge(b);
        let steps = n as f64;
        Ok((0..=n)
            .map(|i| start.lerp(end, i as f64 / steps).to_axial())
            .filter(|cell| self.contains(*cell))
            .collect())
    }

    /// Get every cell that can be reached from `start` in at most
    /// `max_steps` moves, only stepping between adjacent cells of this grid.
    /// Cells are ordered by how many steps it takes to reach them, so
    /// `start` always comes first.
    pub fn reachable(
        &self,
        start: AxialHexCoordinate,
        max_steps: usize,
    ) -> Result<Vec<AxialHexCoordinate>> {
        self.check_member(start)?;

        let mut visited = AxialSet::default();
        let mut reached = Vec::new();
        let mut bfs_queue: VecDeque<(AxialHexCoordinate, usize)> =
            VecDeque::new();
        visited.insert(start);
        bfs_queue.push_back((start, 0));

        while let Some((pos, steps)) = bfs_queue.pop_front() {
            reached.push(pos);
            if steps < max_steps {
                for adj in pos.neighbors() {
                    // insert returns false if we've already seen it
                    if self.contains(adj) && visited.insert(adj) {
                        bfs_queue.push_back((adj, steps + 1));
                    }
                }
            }
        }

        Ok(reached)
    }

    fn check_member(&self, coord: AxialHexCoordinate) -> Result<()> {
        if self.contains(coord) {
            Ok(())
        } else {
            Err(HexError::CoordinateNotInGrid(coord))
        }
    }
}

impl PartialEq for HexGrid {
    fn eq(&self, other: &Self) -> bool {
        // IndexSet equality ignores order, so compare the sequences
        self.layout == other.layout
            && self.origin == other.origin
            && self.cells.iter().eq(other.cells.iter())
    }
}

impl<'a> IntoIterator for &'a HexGrid {
    type Item = &'a AxialHexCoordinate;
    type IntoIter = indexmap::set::Iter<'a, AxialHexCoordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Shift a cell off-center by a tiny amount, keeping it on the `q+r+s=0`
/// plane
fn nudge(coord: AxialHexCoordinate) -> FractionalHexCoordinate {
    FractionalHexCoordinate::new_unchecked(
        f64::from(coord.q()) + LINE_NUDGE,
        f64::from(coord.r()) + LINE_NUDGE,
        -f64::from(coord.q()) - f64::from(coord.r()) - 2.0 * LINE_NUDGE,
    )
}
