use crate::model::{city::City, grid::grid_ops};
use h3o::CellIndex;
use serde::Serialize;

/// one output row per reported urban hex. coordinate fields are in degrees;
/// conversion from the radian representation used inside the core happens
/// here, at the report boundary.
#[derive(Debug, Clone, Serialize)]
pub struct UrbanHexRecord {
    pub lat: f64,
    pub lng: f64,
    pub pop: u64,
    pub density: f64,
    pub city: String,
    pub citypop: u64,
}

impl UrbanHexRecord {
    pub fn new(cell: CellIndex, population: u64, city: &City) -> UrbanHexRecord {
        let center = grid_ops::cell_center(cell);
        let density = population as f64 / grid_ops::cell_area_km2(cell);
        UrbanHexRecord {
            lat: center.lat(),
            lng: center.lng(),
            pop: population,
            density,
            city: city.id.to_string(),
            citypop: city.population,
        }
    }
}
