use crate::model::HexcityCliError;
use serde::{Deserialize, Serialize};

/// defines thresholds and behaviors for a city clustering run. fields
/// absent from a configuration file keep their defaults.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct ClusterConfiguration {
    /// density cutoff in persons per square kilometer. a cell is urban
    /// when its density strictly exceeds this value.
    pub urban_threshold: f64,
    /// aggregate population a city must strictly exceed to appear in the
    /// report datasets.
    pub city_threshold: u64,
    /// grid hop radius for merging urban cells into cities.
    pub merge_distance: u32,
    /// run the density classification on a thread pool.
    pub parallelize: bool,
    /// write gzip-compressed report datasets.
    pub compress_output: bool,
    /// replace existing report files instead of keeping them.
    pub overwrite: bool,
}

impl Default for ClusterConfiguration {
    fn default() -> Self {
        Self {
            urban_threshold: 5000.0,
            city_threshold: 1_000_000,
            merge_distance: 2,
            parallelize: false,
            compress_output: false,
            overwrite: false,
        }
    }
}

impl ClusterConfiguration {
    /// rejects configurations the core must never see. the unsigned
    /// integer fields cannot encode negative values, so only the density
    /// cutoff needs a range check here.
    pub fn validate(&self) -> Result<(), HexcityCliError> {
        if !self.urban_threshold.is_finite() || self.urban_threshold < 0.0 {
            return Err(HexcityCliError::ConfigurationError(format!(
                "urban_threshold must be a non-negative finite number, found {}",
                self.urban_threshold
            )));
        }
        Ok(())
    }
}

impl TryFrom<&String> for ClusterConfiguration {
    type Error = HexcityCliError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                HexcityCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                HexcityCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                HexcityCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                HexcityCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(HexcityCliError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}
