use super::{CityRecord, ReportError, UrbanHexRecord};
use crate::model::{
    city::{City, ClusterAssignment, UrbanSet},
    population::PopulationIndex,
};
use csv::QuoteStyle;
use flate2::{write::GzEncoder, Compression};
use h3o::CellIndex;
use kdam::tqdm;
use std::{
    collections::HashMap,
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

mod filenames {
    pub const URBAN_HEXES: &str = "urban.csv";
    pub const CITIES: &str = "cities.csv";
    pub const GZIP_SUFFIX: &str = ".gz";
}

/// writes the per-hex and per-city report datasets into a shared output
/// directory. both datasets apply the same city population threshold: a
/// city (and all of its hexes) appears only when its aggregate population
/// strictly exceeds the threshold.
pub struct ReportWriter {
    output_directory: PathBuf,
    city_threshold: u64,
    compress: bool,
    overwrite: bool,
}

/// row counts of the datasets written by a [`ReportWriter`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub urban_hex_rows: usize,
    pub city_rows: usize,
}

impl ReportWriter {
    pub fn new(
        output_directory: &Path,
        city_threshold: u64,
        compress: bool,
        overwrite: bool,
    ) -> ReportWriter {
        ReportWriter {
            output_directory: output_directory.to_path_buf(),
            city_threshold,
            compress,
            overwrite,
        }
    }

    pub fn write_reports(
        &self,
        urban: &UrbanSet,
        assignment: &ClusterAssignment,
        cities: &[City],
        population: &PopulationIndex,
    ) -> Result<ReportSummary, ReportError> {
        if !self.output_directory.is_dir() {
            std::fs::create_dir_all(&self.output_directory).map_err(|e| {
                let dirname = self.output_directory.as_os_str().to_string_lossy();
                ReportError::CreateDirectoryError(dirname.to_string(), e)
            })?;
        }

        let cities_by_id: HashMap<CellIndex, &City> =
            cities.iter().map(|city| (city.id, city)).collect();

        let urban_hex_rows =
            self.write_urban_hexes(urban, assignment, &cities_by_id, population)?;
        let city_rows = self.write_cities(cities)?;

        Ok(ReportSummary {
            urban_hex_rows,
            city_rows,
        })
    }

    /// per-hex dataset: one row for each urban cell whose owning city
    /// qualifies, in ascending cell order.
    fn write_urban_hexes(
        &self,
        urban: &UrbanSet,
        assignment: &ClusterAssignment,
        cities_by_id: &HashMap<CellIndex, &City>,
        population: &PopulationIndex,
    ) -> Result<usize, ReportError> {
        let filename = self.filename(filenames::URBAN_HEXES);
        let mut writer = match self.create_writer(&filename)? {
            Some(writer) => writer,
            None => return Ok(0),
        };

        let mut rows: usize = 0;
        let iter = tqdm!(
            urban.iter(),
            total = urban.len(),
            desc = "write urban hex dataset"
        );
        for cell in iter {
            let city_id = assignment.representative(&cell).ok_or_else(|| {
                ReportError::InternalError(format!("urban cell '{cell}' has no cluster assignment"))
            })?;
            let city = cities_by_id.get(&city_id).ok_or_else(|| {
                ReportError::InternalError(format!("city '{city_id}' missing from aggregates"))
            })?;
            if city.population <= self.city_threshold {
                continue;
            }
            let cell_population = population.get(&cell).copied().ok_or_else(|| {
                ReportError::InternalError(format!(
                    "urban cell '{cell}' missing from population index"
                ))
            })?;
            let record = UrbanHexRecord::new(cell, cell_population, city);
            writer
                .serialize(record)
                .map_err(|e| ReportError::CsvWriteError(filename.clone(), e))?;
            rows += 1;
        }
        eprintln!();
        writer
            .flush()
            .map_err(|e| ReportError::InternalError(format!("failure flushing {filename}: {e}")))?;

        Ok(rows)
    }

    /// per-city dataset: one row for each qualifying city, in ascending
    /// city id order.
    fn write_cities(&self, cities: &[City]) -> Result<usize, ReportError> {
        let filename = self.filename(filenames::CITIES);
        let mut writer = match self.create_writer(&filename)? {
            Some(writer) => writer,
            None => return Ok(0),
        };

        let mut rows: usize = 0;
        for city in cities {
            if city.population <= self.city_threshold {
                continue;
            }
            let record = CityRecord::from(city);
            writer
                .serialize(record)
                .map_err(|e| ReportError::CsvWriteError(filename.clone(), e))?;
            rows += 1;
        }
        writer
            .flush()
            .map_err(|e| ReportError::InternalError(format!("failure flushing {filename}: {e}")))?;

        Ok(rows)
    }

    fn filename(&self, base: &str) -> String {
        if self.compress {
            format!("{base}{}", filenames::GZIP_SUFFIX)
        } else {
            String::from(base)
        }
    }

    /// builds a CSV writer for one dataset, respecting the overwrite
    /// preference. a `None` result means the file exists and is kept.
    fn create_writer(
        &self,
        filename: &str,
    ) -> Result<Option<csv::Writer<Box<dyn Write>>>, ReportError> {
        let filepath = self.output_directory.join(filename);
        if filepath.exists() && !self.overwrite {
            log::warn!("output file {filename} exists and overwrite is disabled, skipping");
            return Ok(None);
        }
        let file = File::create(&filepath)
            .map_err(|e| ReportError::CreateFileError(String::from(filename), e))?;
        let buffer: Box<dyn Write> = if self.compress {
            Box::new(GzEncoder::new(file, Compression::default()))
        } else {
            Box::new(file)
        };
        let writer = csv::WriterBuilder::new()
            .has_headers(true)
            .quote_style(QuoteStyle::Necessary)
            .from_writer(buffer);
        Ok(Some(writer))
    }
}
