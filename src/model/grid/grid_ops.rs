//! boundary to the H3 grid library. the rest of the crate treats the grid
//! as a read-only spatial index with three capabilities: cell areas, cell
//! centers, and ring-distance disk queries. all are pure functions of the
//! cell identifier.

use h3o::{CellIndex, LatLng};

/// area of a cell in square kilometers. always strictly positive for a
/// valid [`CellIndex`].
pub fn cell_area_km2(cell: CellIndex) -> f64 {
    cell.area_km2()
}

/// center coordinate of a cell. degrees and radians are both available on
/// the returned [`LatLng`]; callers inside the core use radians.
pub fn cell_center(cell: CellIndex) -> LatLng {
    LatLng::from(cell)
}

/// all cells within `distance` grid hops of `cell`, inclusive of `cell`
/// itself and of all intermediate rings.
pub fn cells_within_distance(cell: CellIndex, distance: u32) -> Vec<CellIndex> {
    cell.grid_disk(distance)
}
