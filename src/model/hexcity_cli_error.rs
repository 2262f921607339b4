use super::{city::CityError, population::PopulationError, report::ReportError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HexcityCliError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure loading population data: {source}")]
    PopulationError {
        #[from]
        source: PopulationError,
    },
    #[error("failure aggregating cities: {source}")]
    CityError {
        #[from]
        source: CityError,
    },
    #[error("failure writing report datasets: {source}")]
    ReportError {
        #[from]
        source: ReportError,
    },
}
