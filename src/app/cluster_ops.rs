use crate::{
    algorithm::{aggregation, classification, clustering},
    config::ClusterConfiguration,
    model::{population::PopulationSource, report::ReportWriter, HexcityCliError},
};
use std::path::Path;

/// phase counts from a completed clustering run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterSummary {
    pub cells: usize,
    pub urban_hexes: usize,
    pub cities: usize,
    pub reported_cities: usize,
}

/// runs the full pipeline: load population data, classify urban hexes,
/// merge them into cities, aggregate city statistics, write the report
/// datasets. phases are sequential; each consumes the complete output of
/// the one before it.
pub fn run_pipeline(
    source: &PopulationSource,
    conf: &ClusterConfiguration,
    output_directory: &Path,
) -> Result<ClusterSummary, HexcityCliError> {
    eprintln!();
    log::info!("  (((1))) loading population index");
    let population = source.import()?;
    log::info!("population index contains {} cells", population.len());

    eprintln!();
    log::info!("  (((2))) finding urban hexes");
    let urban = classification::urban_cells(&population, conf.urban_threshold, conf.parallelize);
    log::info!("{} urban hexes found", urban.len());

    eprintln!();
    log::info!("  (((3))) merging urban hexes into cities");
    let assignment = clustering::merge_urban_cells(&urban, conf.merge_distance);

    eprintln!();
    log::info!("  (((4))) aggregating city statistics");
    let cities = aggregation::build_cities(&assignment, &population)?;
    log::info!("{} cities found", cities.len());

    eprintln!();
    log::info!("  (((5))) writing report datasets");
    let writer = ReportWriter::new(
        output_directory,
        conf.city_threshold,
        conf.compress_output,
        conf.overwrite,
    );
    let report = writer.write_reports(&urban, &assignment, &cities, &population)?;
    log::info!(
        "wrote {} urban hex rows and {} city rows",
        report.urban_hex_rows,
        report.city_rows
    );

    Ok(ClusterSummary {
        cells: population.len(),
        urban_hexes: urban.len(),
        cities: cities.len(),
        reported_cities: report.city_rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use h3o::{CellIndex, LatLng, Resolution};
    use std::fmt::Write as _;

    fn base_cell() -> CellIndex {
        LatLng::new(39.7392, -104.9903)
            .expect("valid coordinate")
            .to_cell(Resolution::Eight)
    }

    fn cell_at_distance(origin: CellIndex, distance: u32) -> CellIndex {
        origin
            .grid_disk_distances::<Vec<_>>(distance)
            .into_iter()
            .find(|(_, d)| *d == distance)
            .map(|(cell, _)| cell)
            .expect("ring contains at least one cell")
    }

    /// a dense 7-hex blob, a dense singleton far away, and sparse filler
    /// in between.
    fn write_population_csv(dir: &Path) -> String {
        let blob = base_cell();
        let lone = cell_at_distance(blob, 8);
        let mut contents = String::from("h3,population\n");
        for cell in blob.grid_disk::<Vec<_>>(1) {
            writeln!(contents, "{cell},10000").expect("format row");
        }
        writeln!(contents, "{lone},10000").expect("format row");
        for (cell, d) in blob.grid_disk_distances::<Vec<(CellIndex, u32)>>(4) {
            if d > 1 {
                writeln!(contents, "{cell},10").expect("format row");
            }
        }
        let filepath = dir.join("population.csv");
        std::fs::write(&filepath, contents).expect("write population csv");
        filepath.to_string_lossy().to_string()
    }

    #[test]
    fn test_run_pipeline_end_to_end() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let filepath = write_population_csv(dir.path());
        let out_dir = dir.path().join("out");

        let conf = ClusterConfiguration {
            urban_threshold: 5000.0,
            city_threshold: 50_000,
            merge_distance: 2,
            ..Default::default()
        };
        let source = PopulationSource::Csv { filepath };
        let summary = run_pipeline(&source, &conf, &out_dir).expect("run pipeline");

        // 7-hex blob and the distant singleton are both urban; only the
        // blob city (70000 residents) clears the 50000 report cutoff
        assert_eq!(summary.urban_hexes, 8);
        assert_eq!(summary.cities, 2);
        assert_eq!(summary.reported_cities, 1);

        let urban_csv = std::fs::read_to_string(out_dir.join("urban.csv")).expect("read urban.csv");
        // header + one row per blob hex
        assert_eq!(urban_csv.lines().count(), 8);
        let cities_csv =
            std::fs::read_to_string(out_dir.join("cities.csv")).expect("read cities.csv");
        assert_eq!(cities_csv.lines().count(), 2);
    }

    #[test]
    fn test_run_pipeline_no_urban_cells() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let cell = base_cell();
        let filepath = dir.path().join("population.csv");
        std::fs::write(&filepath, format!("h3,population\n{cell},3\n"))
            .expect("write population csv");
        let out_dir = dir.path().join("out");

        let conf = ClusterConfiguration::default();
        let source = PopulationSource::Csv {
            filepath: filepath.to_string_lossy().to_string(),
        };
        let summary = run_pipeline(&source, &conf, &out_dir).expect("run pipeline");

        assert_eq!(summary.cells, 1);
        assert_eq!(summary.urban_hexes, 0);
        assert_eq!(summary.cities, 0);
        assert_eq!(summary.reported_cities, 0);
        // datasets still exist, headers only
        let urban_csv = std::fs::read_to_string(out_dir.join("urban.csv")).expect("read urban.csv");
        assert_eq!(urban_csv.lines().count(), 1);
    }
}
