use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use snake_engine::GameSettings;
use snake_engine::config::Validate;

const CONFIG_FILE_NAME: &str = "snake_client_config.yaml";

/// Default config location: next to the executable, falling back to the
/// working directory.
pub fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: GameSettings,
    /// Side length of one board cell in window pixels.
    pub cell_pixels: u32,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        if !(8..=128).contains(&self.cell_pixels) {
            return Err("Cell size must be between 8 and 128 pixels".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameSettings::default(),
            cell_pixels: 32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_engine::config::{from_yaml, load_or_create, to_yaml};

    fn temp_config_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nonce: u64 = rand::random();
        path.push(format!("snake_client_config_{}.yaml", nonce));
        path
    }

    #[test]
    fn test_default_config_round_trips_through_yaml() {
        let config = Config::default();
        let text = to_yaml(&config).unwrap();
        let parsed: Config = from_yaml(&text).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_load_or_create_writes_and_reloads() {
        let path = temp_config_path();
        let created: Config = load_or_create(&path).unwrap();
        assert_eq!(created, Config::default());
        let reloaded: Config = load_or_create(&path).unwrap();
        assert_eq!(reloaded, created);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_rejects_bad_cell_size() {
        let mut config = Config::default();
        config.cell_pixels = 4;
        assert!(config.validate().is_err());
    }
}
