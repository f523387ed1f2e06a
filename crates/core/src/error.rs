use crate::hex::AxialHexCoordinate;
use thiserror::Error;

/// Result type for all fallible geometry and grid operations
pub type Result<T> = std::result::Result<T, HexError>;

/// Every way a geometry or grid operation can reject its input. These are all
/// caller errors; nothing here is transient, so retrying with the same input
/// will always fail the same way.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum HexError {
    /// A cube or fractional coordinate whose components don't sum to zero
    #[error("invalid coordinate {0}; components must satisfy q + r + s = 0")]
    InvalidCoordinate(String),

    /// A direction index outside of `[0, 5]`
    #[error("invalid direction {0}; must be between 0 and 5")]
    InvalidDirection(i32),

    /// An unrecognized orientation, parallelogram orientation, or offset type
    #[error("invalid orientation `{0}`")]
    InvalidOrientation(String),

    /// A grid query was given a coordinate that isn't a member of the grid
    #[error("coordinate {0} is not part of the grid")]
    CoordinateNotInGrid(AxialHexCoordinate),
}
