use crate::grid::Position;
use crate::session_rng::SessionRng;

/// Ground tile variant, chosen per cell from a random parity bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroundTile {
    Light,
    Dark,
}

/// A grass tuft spilling onto a cell from the named neighbor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrassEdge {
    North,
    South,
    East,
    West,
}

/// Static background decoration: a random parity grid generated once at
/// startup. A cell's tile follows its own parity; every in-bounds neighbor
/// with parity set additionally spills a grass edge onto the cell, so the
/// decoration stays consistent with the grid topology.
pub struct GroundLayer {
    width: i32,
    height: i32,
    parity: Vec<bool>,
}

impl GroundLayer {
    pub fn generate(width: i32, height: i32, rng: &mut SessionRng) -> Self {
        let parity = (0..width * height).map(|_| rng.random_bool()).collect();
        Self {
            width,
            height,
            parity,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn tile(&self, cell: Position) -> GroundTile {
        if self.parity_at(cell) {
            GroundTile::Dark
        } else {
            GroundTile::Light
        }
    }

    /// Grass overlays for a cell, one per dark-parity neighbor.
    pub fn edges(&self, cell: Position) -> Vec<GrassEdge> {
        let mut edges = Vec::new();
        if cell.x > 0 && self.parity_at(Position::new(cell.x - 1, cell.y)) {
            edges.push(GrassEdge::West);
        }
        if cell.x + 1 < self.width && self.parity_at(Position::new(cell.x + 1, cell.y)) {
            edges.push(GrassEdge::East);
        }
        if cell.y + 1 < self.height && self.parity_at(Position::new(cell.x, cell.y + 1)) {
            edges.push(GrassEdge::South);
        }
        if cell.y > 0 && self.parity_at(Position::new(cell.x, cell.y - 1)) {
            edges.push(GrassEdge::North);
        }
        edges
    }

    fn parity_at(&self, cell: Position) -> bool {
        self.parity[(cell.y * self.width + cell.x) as usize]
    }

    #[cfg(test)]
    fn set_parity(&mut self, cell: Position, value: bool) {
        self.parity[(cell.y * self.width + cell.x) as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_layer(width: i32, height: i32) -> GroundLayer {
        GroundLayer {
            width,
            height,
            parity: vec![false; (width * height) as usize],
        }
    }

    #[test]
    fn test_tile_follows_parity() {
        let mut layer = blank_layer(4, 4);
        assert_eq!(layer.tile(Position::new(1, 1)), GroundTile::Light);
        layer.set_parity(Position::new(1, 1), true);
        assert_eq!(layer.tile(Position::new(1, 1)), GroundTile::Dark);
    }

    #[test]
    fn test_edges_come_from_dark_neighbors() {
        let mut layer = blank_layer(4, 4);
        layer.set_parity(Position::new(0, 1), true);
        layer.set_parity(Position::new(1, 2), true);

        let edges = layer.edges(Position::new(1, 1));
        assert!(edges.contains(&GrassEdge::West));
        assert!(edges.contains(&GrassEdge::South));
        assert_eq!(edges.len(), 2);
    }

    #[test]
    fn test_edges_ignore_out_of_bounds_neighbors() {
        let layer = blank_layer(3, 3);
        // Corner cell: only two in-bounds neighbors, both light.
        assert!(layer.edges(Position::new(0, 0)).is_empty());
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        let mut rng_a = SessionRng::new(5);
        let mut rng_b = SessionRng::new(5);
        let a = GroundLayer::generate(8, 8, &mut rng_a);
        let b = GroundLayer::generate(8, 8, &mut rng_b);
        for y in 0..8 {
            for x in 0..8 {
                let cell = Position::new(x, y);
                assert_eq!(a.tile(cell), b.tile(cell));
            }
        }
    }
}
