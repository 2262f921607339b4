use h3o::{CellIndex, LatLng};

/// a maximal set of urban cells connected by chains of hops within the
/// merge distance, named by its representative cell. populated by the
/// aggregation phase once its member set is final.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    /// representative cell identifier. always the numerically smallest
    /// member.
    pub id: CellIndex,
    /// member cells, sorted ascending, non-empty, containing `id`.
    pub hexes: Vec<CellIndex>,
    /// sum of member cell populations.
    pub population: u64,
    /// unweighted arithmetic mean of member cell centers.
    pub centroid: LatLng,
}
