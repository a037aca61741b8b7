use std::collections::HashSet;

use crate::chain::BodyChain;
use crate::grid::Position;

/// The set of cells currently covered by the body chain. Kept exactly in sync
/// with the chain every tick: the new head cell is inserted, the vacated tail
/// cell removed (no removal on a growth tick, where the tail holds its cell).
#[derive(Clone, Debug, Default)]
pub struct OccupancySet {
    cells: HashSet<Position>,
}

impl OccupancySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the set with every segment of the chain.
    pub fn from_chain(chain: &BodyChain) -> Self {
        Self {
            cells: chain.segments().collect(),
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    pub fn insert(&mut self, pos: Position) {
        self.cells.insert(pos);
    }

    pub fn remove(&mut self, pos: Position) {
        self.cells.remove(&pos);
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().copied()
    }

    /// True when the set holds exactly the chain's segment cells.
    pub fn matches_chain(&self, chain: &BodyChain) -> bool {
        let chain_cells: HashSet<Position> = chain.segments().collect();
        self.cells == chain_cells
    }
}
