use super::UrbanSet;
use h3o::CellIndex;
use std::collections::HashMap;

/// mapping from every urban cell to the representative cell of its city.
/// invariant: the representative of a representative is itself. constructed
/// as singletons and mutated only during the merge phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterAssignment(HashMap<CellIndex, CellIndex>);

impl ClusterAssignment {
    /// every urban cell starts as the representative of its own singleton
    /// cluster.
    pub fn with_singletons(urban: &UrbanSet) -> ClusterAssignment {
        ClusterAssignment(urban.iter().map(|cell| (cell, cell)).collect())
    }

    pub fn representative(&self, cell: &CellIndex) -> Option<CellIndex> {
        self.0.get(cell).copied()
    }

    /// true when the cell is (still) the representative of its own cluster.
    pub fn is_representative(&self, cell: &CellIndex) -> bool {
        self.representative(cell) == Some(*cell)
    }

    /// absorbs a cell into the cluster rooted at `representative`.
    pub fn assign(&mut self, cell: CellIndex, representative: CellIndex) {
        self.0.insert(cell, representative);
    }

    /// (cell, representative) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&CellIndex, &CellIndex)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
