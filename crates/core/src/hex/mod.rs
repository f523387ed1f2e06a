//! This module holds basic types and data structures related to hexagon grids.
//!
//! ## Coordinate Systems
//!
//! There are four ways to address a tile, all based on the [cube coordinate
//! system defined by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates).
//!
//! ### Cube
//!
//! Each coordinate has three components (`q`, `r`, and `s`). **For any tile,
//! all three components are integers and `q + r + s = 0`.** Even though the
//! grid is two-dimensional, the third component makes the math for distances,
//! rotation and rounding much simpler. See [CubeHexCoordinate].
//!
//! ### Axial
//!
//! Since `s` can always be derived from `q` and `r`, we usually just drop it.
//! That's the axial system, and it's the one grids store. See
//! [AxialHexCoordinate].
//!
//! ### Offset
//!
//! Column/row indices, like you'd use for a rectangular pixel grid. Every
//! other row or column is shoved over by half a tile, and which ones get
//! shoved depends on the [OffsetType]. Only useful for conversions; none of
//! the math works directly in offset space. See [OffsetHexCoordinate].
//!
//! ### Fractional
//!
//! Cube coordinates with real-valued components. These show up in between
//! pixel space and hex space, or while interpolating between tiles, and get
//! rounded to a tile as soon as possible. See [FractionalHexCoordinate].
//!
//! ## Directions
//!
//! Each tile has 6 neighbors. [HexDirection] names the direction to each,
//! and its [HexDirection::CLOCKWISE] ordering assigns each direction a fixed
//! index from 0 to 5:
//!
//! ```text
//!   5 (0,-1)   0 (1,-1)
//! 4 (-1,0)   *   1 (1,0)
//!   3 (-1,1)   2 (0,1)
//! ```

mod data_structure;
mod unit;

pub use self::{data_structure::*, unit::*};
