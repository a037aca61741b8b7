use crate::grid::Position;
use crate::occupancy::OccupancySet;
use crate::session_rng::SessionRng;

/// Places a pickup on a uniformly random free cell by rejection sampling:
/// candidates are re-drawn while they land on an occupied cell. There is no
/// retry bound; placement degrades only as occupancy approaches the full
/// board.
pub fn spawn_pickup(
    board_width: i32,
    board_height: i32,
    occupied: &OccupancySet,
    rng: &mut SessionRng,
) -> Position {
    loop {
        let candidate = Position::new(
            rng.random_range(0..board_width),
            rng.random_range(0..board_height),
        );
        if !occupied.contains(candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_never_lands_on_an_occupied_cell() {
        let mut rng = SessionRng::new(42);
        let mut occupied = OccupancySet::new();
        for x in 0..10 {
            occupied.insert(Position::new(x, 0));
        }

        for _ in 0..200 {
            let pos = spawn_pickup(10, 10, &occupied, &mut rng);
            assert!(!occupied.contains(pos));
            assert!((0..10).contains(&pos.x));
            assert!((0..10).contains(&pos.y));
        }
    }

    #[test]
    fn test_spawn_finds_the_single_free_cell() {
        let mut rng = SessionRng::new(42);
        let mut occupied = OccupancySet::new();
        for x in 0..4 {
            for y in 0..4 {
                if (x, y) != (2, 3) {
                    occupied.insert(Position::new(x, y));
                }
            }
        }

        let pos = spawn_pickup(4, 4, &occupied, &mut rng);
        assert_eq!(pos, Position::new(2, 3));
    }
}
