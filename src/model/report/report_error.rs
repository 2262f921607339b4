use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("unable to create output directory {0}: {1}")]
    CreateDirectoryError(String, std::io::Error),
    #[error("unable to create output file {0}: {1}")]
    CreateFileError(String, std::io::Error),
    #[error("failure writing to file {0}: {1}")]
    CsvWriteError(String, csv::Error),
    #[error("{0}")]
    InternalError(String),
}
