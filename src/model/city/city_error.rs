use h3o::CellIndex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CityError {
    #[error("attempting to get population for urban cell '{0}' not in population index")]
    MissingPopulation(CellIndex),
    #[error("city centroid out of coordinate range: {source}")]
    InvalidCentroid {
        #[from]
        source: h3o::error::InvalidLatLng,
    },
}
