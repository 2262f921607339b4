use super::{PopulationError, PopulationIndex};
use flate2::read::GzDecoder;
use h3o::CellIndex;
use kdam::{Bar, BarExt};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs::File, io::Read, path::Path};

/// describes a source of gridded population data. imports produce the
/// complete [`PopulationIndex`] before any downstream phase runs.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub enum PopulationSource {
    /// tabular population data with an `h3` cell identifier column and a
    /// `population` count column, optionally gzip-compressed. additional
    /// columns are ignored.
    Csv { filepath: String },
}

/// a single row of a population CSV file. population counts appear as
/// floating point values in some distributions of the source data and are
/// truncated toward zero on import.
#[derive(Debug, Deserialize)]
struct PopulationRow {
    h3: String,
    population: f64,
}

impl PopulationSource {
    pub fn import(&self) -> Result<PopulationIndex, PopulationError> {
        match self {
            PopulationSource::Csv { filepath } => read_csv(filepath),
        }
    }
}

/// reads an `h3`/`population` CSV file into a [`PopulationIndex`]. a cell
/// that occurs more than once keeps the last value seen, with a warning.
fn read_csv(filepath: &str) -> Result<PopulationIndex, PopulationError> {
    let file = File::open(Path::new(filepath))
        .map_err(|e| PopulationError::IoError(String::from(filepath), e))?;
    let reader: Box<dyn Read> = if filepath.ends_with(".gz") {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut rows_bar = Bar::builder()
        .desc(filepath)
        .unit(" rows")
        .unit_scale(true)
        .build()
        .map_err(PopulationError::InternalError)?;

    let mut index: PopulationIndex = HashMap::new();
    for row in csv_reader.deserialize::<PopulationRow>() {
        let row = row.map_err(|e| PopulationError::CsvReadError(String::from(filepath), e))?;
        let cell = row
            .h3
            .parse::<CellIndex>()
            .map_err(|e| PopulationError::InvalidCellIndex(row.h3.clone(), e))?;
        if !row.population.is_finite() || row.population < 0.0 {
            return Err(PopulationError::InvalidPopulation(row.h3, row.population));
        }
        let population = row.population as u64;
        if index.insert(cell, population).is_some() {
            log::warn!("cell '{cell}' occurs more than once in {filepath}");
        }
        let _ = rows_bar.update(1);
    }
    eprintln!();

    if index.is_empty() {
        log::warn!("population file {filepath} contains no rows");
    }
    Ok(index)
}
