use crate::model::{city::UrbanSet, grid::grid_ops, population::PopulationIndex};
use h3o::CellIndex;
use rayon::prelude::*;

/// selects the cells whose population density strictly exceeds
/// `urban_threshold` (persons per km²). pure: no iteration order
/// requirement on the input index, and the resulting [`UrbanSet`] snapshot
/// is sorted regardless of how the filter ran.
pub fn urban_cells(
    population: &PopulationIndex,
    urban_threshold: f64,
    parallelize: bool,
) -> UrbanSet {
    let cells: Vec<CellIndex> = if parallelize {
        population
            .par_iter()
            .filter(|(cell, pop)| exceeds_threshold(**cell, **pop, urban_threshold))
            .map(|(cell, _)| *cell)
            .collect()
    } else {
        population
            .iter()
            .filter(|(cell, pop)| exceeds_threshold(**cell, **pop, urban_threshold))
            .map(|(cell, _)| *cell)
            .collect()
    };
    UrbanSet::from_cells(cells)
}

fn exceeds_threshold(cell: CellIndex, population: u64, urban_threshold: f64) -> bool {
    population as f64 / grid_ops::cell_area_km2(cell) > urban_threshold
}
