use crate::model::city::City;
use serde::Serialize;

/// one output row per reported city: centroid in degrees and aggregate
/// population.
#[derive(Debug, Clone, Serialize)]
pub struct CityRecord {
    pub lat: f64,
    pub lng: f64,
    pub pop: u64,
}

impl From<&City> for CityRecord {
    fn from(city: &City) -> CityRecord {
        CityRecord {
            lat: city.centroid.lat(),
            lng: city.centroid.lng(),
            pop: city.population,
        }
    }
}
