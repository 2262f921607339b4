use clap::{Parser, Subcommand};
use hexcity::{
    app::cluster_ops,
    config::ClusterConfiguration,
    model::{population::PopulationSource, HexcityCliError},
};
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct HexcityAppArguments {
    #[command(subcommand)]
    app: App,
}

#[derive(Subcommand)]
pub enum App {
    Csv {
        #[arg(long, help = "path to CSV file with h3 and population columns")]
        population_file: String,
        #[arg(long, help = "path to file with hexcity run parameters")]
        configuration_file: Option<String>,
        #[arg(long, help = "output path for report datasets")]
        output_directory: String,
    },
}

pub fn run(app: &App) -> Result<(), HexcityCliError> {
    env_logger::init();
    match app {
        App::Csv {
            population_file,
            configuration_file,
            output_directory,
        } => {
            let conf = match configuration_file {
                None => Ok(ClusterConfiguration::default()),
                Some(f) => {
                    log::info!("reading hexcity configuration from {f}");
                    ClusterConfiguration::try_from(f)
                }
            }?;
            conf.validate()?;
            let source = PopulationSource::Csv {
                filepath: population_file.clone(),
            };
            let out_path = Path::new(output_directory);
            let summary = cluster_ops::run_pipeline(&source, &conf, out_path)?;
            eprintln!();
            log::info!(
                "finished: {} cities from {} urban hexes, {} reported",
                summary.cities,
                summary.urban_hexes,
                summary.reported_cities
            );
            Ok(())
        }
    }
}

fn main() {
    let args = HexcityAppArguments::parse();
    if let Err(e) = run(&args.app) {
        log::error!("hexcity failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
