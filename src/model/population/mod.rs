mod population_error;
mod population_source;

use h3o::CellIndex;
use std::collections::HashMap;

pub use population_error::PopulationError;
pub use population_source::PopulationSource;

/// mapping from grid cell to resident population count. built once by a
/// [`PopulationSource`] import and read-only afterwards.
pub type PopulationIndex = HashMap<CellIndex, u64>;
