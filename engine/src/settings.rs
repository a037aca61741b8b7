use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::grid::Position;

/// Board dimensions in cells and the simulation cadence, fixed at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub board_width: i32,
    pub board_height: i32,
    /// Rendered frames per simulation step.
    pub frames_per_tick: u32,
}

impl GameSettings {
    pub fn contains(&self, pos: Position) -> bool {
        (0..self.board_width).contains(&pos.x) && (0..self.board_height).contains(&pos.y)
    }

    pub fn center(&self) -> Position {
        Position::new(self.board_width / 2, self.board_height / 2)
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board_width: 40,
            board_height: 20,
            frames_per_tick: 20,
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if !(10..=100).contains(&self.board_width) {
            return Err("Board width must be between 10 and 100".to_string());
        }
        if !(10..=100).contains(&self.board_height) {
            return Err("Board height must be between 10 and 100".to_string());
        }
        if !(1..=240).contains(&self.frames_per_tick) {
            return Err("Frames per tick must be between 1 and 240".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_validate() {
        assert!(GameSettings::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_board() {
        let mut settings = GameSettings::default();
        settings.board_width = 5;
        assert!(settings.validate().is_err());

        settings.board_width = 40;
        settings.frames_per_tick = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_contains_is_inclusive_of_edges() {
        let settings = GameSettings::default();
        assert!(settings.contains(Position::new(0, 0)));
        assert!(settings.contains(Position::new(39, 19)));
        assert!(!settings.contains(Position::new(-1, 0)));
        assert!(!settings.contains(Position::new(40, 0)));
        assert!(!settings.contains(Position::new(0, 20)));
    }
}
