use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tictactoe_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_common::games::tictactoe::{DifficultyConfig, FirstPlayerMode};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

pub fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, ClientConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    #[serde(default)]
    pub difficulty: DifficultyConfig,
    #[serde(default)]
    pub first_player: FirstPlayerMode,
    /// Fixed seed for reproducible sessions; random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub use_log_prefix: bool,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        self.difficulty.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!(
            "temp_tictactoe_client_config_{}.yaml",
            random_number
        ))
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = ClientConfig::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: ClientConfig = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_file() {
        let default_config = ClientConfig::default();
        let serializer = YamlConfigSerializer::new();
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());

        let serialized = serializer.serialize(&default_config).unwrap();
        content_provider.set_config_content(&serialized).unwrap();

        let read_string = content_provider.get_config_content().unwrap().unwrap();
        let deserialized: ClientConfig = serializer.deserialize(&read_string).unwrap();
        assert_eq!(default_config, deserialized);
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_by_manager() {
        let config = ClientConfig {
            difficulty: DifficultyConfig::new(0.5).unwrap(),
            first_player: FirstPlayerMode::Human,
            seed: Some(17),
            use_log_prefix: true,
        };
        let file_path = get_temp_file_path();

        get_config_manager(Some(file_path.clone()))
            .set_config(&config)
            .unwrap();
        let loaded = get_config_manager(Some(file_path.clone()))
            .get_config()
            .unwrap();
        assert_eq!(loaded, config);
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let serializer = YamlConfigSerializer::new();
        let config: ClientConfig = serializer.deserialize("first_player: computer\n").unwrap();
        assert_eq!(config.first_player, FirstPlayerMode::Computer);
        assert_eq!(config.difficulty, DifficultyConfig::default());
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_invalid_difficulty_fails_validation() {
        let config = ClientConfig {
            difficulty: DifficultyConfig {
                random_move_probability: 3.0,
            },
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
