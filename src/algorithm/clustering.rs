use crate::model::{
    city::{ClusterAssignment, UrbanSet},
    grid::grid_ops,
};
use h3o::CellIndex;
use kdam::tqdm;
use std::collections::{HashSet, VecDeque};

/// partitions the urban set into connected components under the relation
/// "within `merge_distance` grid hops of another member", assigning every
/// cell of a component the same representative.
///
/// multi-source breadth-first frontier expansion over the sorted urban
/// snapshot: each cell still mapped to itself when the scan reaches it
/// roots a new component, then absorbs everything reachable through chains
/// of disk queries (single-linkage: a chain of hops each within the merge
/// distance connects cells that are pairwise farther apart than the merge
/// distance itself).
///
/// the scan runs in ascending cell order, and a component's smallest member
/// can never have been absorbed by a root outside its own component, so the
/// representative of every component is exactly its numerically smallest
/// member. two runs over the same urban set produce identical assignments.
pub fn merge_urban_cells(urban: &UrbanSet, merge_distance: u32) -> ClusterAssignment {
    let mut assignment = ClusterAssignment::with_singletons(urban);

    let iter = tqdm!(
        urban.iter(),
        total = urban.len(),
        desc = "merge urban hexes into cities"
    );
    for root in iter {
        if !assignment.is_representative(&root) {
            // absorbed by an earlier root
            continue;
        }
        let mut members: HashSet<CellIndex> = HashSet::from([root]);
        let mut frontier: VecDeque<CellIndex> = VecDeque::from([root]);
        while let Some(cell) = frontier.pop_front() {
            // only newly-discovered members enter the frontier, so each
            // member's disk is queried exactly once
            for neighbor in grid_ops::cells_within_distance(cell, merge_distance) {
                if urban.contains(&neighbor) && members.insert(neighbor) {
                    assignment.assign(neighbor, root);
                    frontier.push_back(neighbor);
                }
            }
        }
    }
    eprintln!();

    assignment
}
