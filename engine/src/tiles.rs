use crate::grid::Position;

/// Sprite selection for one chain segment. Corner tiles are named for the
/// quadrant their bend opens towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentTile {
    Head,
    Tail,
    Straight,
    CornerUpLeft,
    CornerUpRight,
    CornerDownLeft,
    CornerDownRight,
}

/// Quarter-turn sprite rotation, applied around the cell center so the sprite
/// never leaves its grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn from_quarter_turns(turns: usize) -> Self {
        match turns % 4 {
            0 => Rotation::Deg0,
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            _ => Rotation::Deg270,
        }
    }

    pub fn degrees(self) -> f32 {
        match self {
            Rotation::Deg0 => 0.0,
            Rotation::Deg90 => 90.0,
            Rotation::Deg180 => 180.0,
            Rotation::Deg270 => 270.0,
        }
    }

    pub fn radians(self) -> f32 {
        self.degrees().to_radians()
    }
}

/// Rotation of the tail sprite, derived from the segment directly ahead of
/// the tail. Exactly one of the four cases holds for a well-formed chain.
pub fn tail_rotation(tail: Position, ahead: Position) -> Rotation {
    if ahead.x == tail.x + 1 {
        Rotation::Deg0
    } else if ahead.x == tail.x - 1 {
        Rotation::Deg180
    } else if ahead.y == tail.y - 1 {
        Rotation::Deg270
    } else {
        Rotation::Deg90
    }
}

/// Tile for an interior segment, selected from the 4-bit neighbor adjacency
/// of its predecessor and successor. Only the 6 patterns a simple path can
/// produce are meaningful; anything else cannot occur in a well-formed chain.
pub fn body_tile(prev: Position, curr: Position, next: Position) -> SegmentTile {
    let east = prev.x == curr.x + 1 || next.x == curr.x + 1;
    let west = prev.x == curr.x - 1 || next.x == curr.x - 1;
    let north = prev.y == curr.y - 1 || next.y == curr.y - 1;
    let south = prev.y == curr.y + 1 || next.y == curr.y + 1;

    if (east && west) || (north && south) {
        SegmentTile::Straight
    } else if east && south {
        SegmentTile::CornerUpLeft
    } else if west && south {
        SegmentTile::CornerUpRight
    } else if east && north {
        SegmentTile::CornerDownLeft
    } else {
        SegmentTile::CornerDownRight
    }
}
