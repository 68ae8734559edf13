use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{AppearanceConfig, GameConfig};

pub const CONFIG_FILE: &str = "snake_config.yaml";

pub type ClientConfigManager =
    ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

pub fn get_config_manager(path: &Path) -> ClientConfigManager {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: GameConfig,
    pub appearance: AppearanceConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.appearance.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};
    use common::games::snake::WallCollisionMode;
    use std::path::PathBuf;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_snake_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();
        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_with_manager() {
        let path = get_temp_file_path();
        let config = Config {
            game: GameConfig {
                tick_interval_ms: 80,
                apple_count: 5,
                warp_walls: true,
                ..GameConfig::default()
            },
            ..Config::default()
        };

        get_config_manager(&path).set_config(&config).unwrap();

        let loaded = get_config_manager(&path).get_config().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.game.to_session_settings().wall_collision_mode,
            WallCollisionMode::WrapAround
        );
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Path::new("this_file_does_not_exist.yaml"));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r##"
            game:
              field_size: 20
              tick_interval_ms: 0
              apple_count: 3
              warp_walls: false
            appearance:
              gradient: true
              accent_color: "#00ff00"
        "##;

        let path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(&path);
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();

        let manager = get_config_manager(&path);
        assert!(manager.get_config().is_err());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_bad_accent_color_is_rejected() {
        let config = Config {
            appearance: AppearanceConfig {
                accent_color: "green".to_string(),
                ..AppearanceConfig::default()
            },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
