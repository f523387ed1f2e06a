//! Hexgrid is a library for working with hexagonal tile grids. It covers the
//! coordinate systems used to address tiles, projection between tiles and
//! pixels, and a handful of shape generators that build finite grids you can
//! query for neighbors, lines and reachable areas.
//!
//! ```
//! use hexgrid::{AxialHexCoordinate, GridConfig, HexGrid};
//!
//! let config = GridConfig::default();
//! let grid = HexGrid::generate(config).unwrap();
//! let neighbors = grid.get_neighbors(AxialHexCoordinate::ORIGIN).unwrap();
//! println!("{} cells, origin has {} neighbors", grid.len(), neighbors.len());
//! // From here you can draw the grid however you like, see GridLayout.
//! ```
//!
//! See [GridConfig] for details on how generation can be customized. The math
//! is based on [Amit Patel's guide](https://www.redblobgames.com/grids/hexagons/).

mod config;
mod error;
pub mod grid;
pub mod hex;
pub mod layout;
mod util;

pub use crate::{
    config::{GridConfig, MAX_SHAPE_DIMENSION},
    error::{HexError, Result},
    grid::{
        generate::{GridShape, ParallelogramOrientation},
        HexGrid,
    },
    hex::{
        AxialHexCoordinate, CubeHexCoordinate, FractionalHexCoordinate,
        HexDirection, OffsetHexCoordinate, OffsetType,
    },
    layout::{GridLayout, LayoutOrientation, Point2},
};
