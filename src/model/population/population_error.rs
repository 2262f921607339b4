use thiserror::Error;

#[derive(Error, Debug)]
pub enum PopulationError {
    #[error("failure opening population file {0}: {1}")]
    IoError(String, std::io::Error),
    #[error("failure reading population file {0}: {1}")]
    CsvReadError(String, csv::Error),
    #[error("invalid h3 cell identifier '{0}': {1}")]
    InvalidCellIndex(String, h3o::error::InvalidCellIndex),
    #[error("invalid population value '{1}' for cell '{0}'")]
    InvalidPopulation(String, f64),
    #[error("{0}")]
    InternalError(String),
}
