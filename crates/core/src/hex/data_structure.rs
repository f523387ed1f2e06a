use crate::hex::AxialHexCoordinate;
use fnv::FnvBuildHasher;
use indexmap::IndexSet;
use std::collections::{BTreeMap, HashSet};

/// A set of axial coordinates
pub type AxialSet = HashSet<AxialHexCoordinate, FnvBuildHasher>;
/// An ORDERED set of axial coordinates. This gives us constant-time
/// membership checks while still remembering insertion order, which is what
/// grids need: deterministic iteration plus fast lookups. It has some extra
/// memory overhead over [AxialSet], so only use it when order matters.
pub type AxialIndexSet = IndexSet<AxialHexCoordinate, FnvBuildHasher>;

/// Group coordinates into rows, where every coordinate in a row shares the
/// same key. Rows are ordered by ascending key, and the coordinates within
/// each row are ordered by `(q, r)`.
///
/// This is how the jagged array-of-rows view of a grid gets built. It's purely
/// a presentation concern; grids themselves are flat.
pub fn group_into_rows(
    cells: impl IntoIterator<Item = AxialHexCoordinate>,
    key: impl Fn(AxialHexCoordinate) -> i32,
) -> Vec<Vec<AxialHexCoordinate>> {
    let mut rows: BTreeMap<i32, Vec<AxialHexCoordinate>> = BTreeMap::new();
    for cell in cells {
        rows.entry(key(cell)).or_default().push(cell);
    }
    rows.into_iter()
        .map(|(_, mut row)| {
            row.sort_unstable();
            row
        })
        .collect()
}
