use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Semantic validation for configuration values, run after deserialization
/// and before persisting.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub fn to_yaml<C: Serialize>(config: &C) -> Result<String, String> {
    serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
}

pub fn from_yaml<C: DeserializeOwned>(content: &str) -> Result<C, String> {
    serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
}

/// Loads a validated config from a YAML file. A missing file is not an error:
/// the default is written back so the user has a file to edit.
pub fn load_or_create<C>(path: &Path) -> Result<C, String>
where
    C: Default + Serialize + DeserializeOwned + Validate,
{
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let config: C = from_yaml(&content)?;
            config
                .validate()
                .map_err(|e| format!("Config validation error: {}", e))?;
            Ok(config)
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            let config = C::default();
            save(path, &config)?;
            Ok(config)
        }
        Err(err) => Err(format!("Failed to read config file: {}", err)),
    }
}

pub fn save<C>(path: &Path, config: &C) -> Result<(), String>
where
    C: Serialize + Validate,
{
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;
    let content = to_yaml(config)?;
    std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameSettings;
    use std::path::PathBuf;

    fn temp_config_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nonce: u64 = rand::random();
        path.push(format!("snake_engine_config_{}.yaml", nonce));
        path
    }

    #[test]
    fn test_yaml_round_trip() {
        let settings = GameSettings::default();
        let text = to_yaml(&settings).unwrap();
        let parsed: GameSettings = from_yaml(&text).unwrap();
        assert_eq!(settings, parsed);
    }

    #[test]
    fn test_load_or_create_writes_the_default() {
        let path = temp_config_path();
        let loaded: GameSettings = load_or_create(&path).unwrap();
        assert_eq!(loaded, GameSettings::default());
        assert!(path.exists());

        let reloaded: GameSettings = load_or_create(&path).unwrap();
        assert_eq!(reloaded, loaded);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let path = temp_config_path();
        let mut settings = GameSettings::default();
        settings.board_width = 3;
        std::fs::write(&path, to_yaml(&settings).unwrap()).unwrap();

        let result: Result<GameSettings, String> = load_or_create(&path);
        assert!(result.is_err());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_save_rejects_invalid_config() {
        let path = temp_config_path();
        let mut settings = GameSettings::default();
        settings.frames_per_tick = 0;
        assert!(save(&path, &settings).is_err());
        assert!(!path.exists());
    }
}
