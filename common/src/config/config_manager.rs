use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config of type `TConfig`.
///
/// A missing config yields `TConfig::default()` without touching storage.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Mutex::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config lock poisoned".to_string())?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config lock poisoned".to_string())?;
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryConfigContentProvider;
    use crate::games::tictactoe::DifficultyConfig;

    fn memory_manager(
        content: Option<&str>,
    ) -> ConfigManager<MemoryConfigContentProvider, DifficultyConfig> {
        let provider = match content {
            Some(content) => MemoryConfigContentProvider::with_content(content),
            None => MemoryConfigContentProvider::new(),
        };
        ConfigManager::new(provider, YamlConfigSerializer::new())
    }

    #[test]
    fn test_missing_content_yields_default() {
        let manager = memory_manager(None);
        assert_eq!(manager.get_config(), Ok(DifficultyConfig::default()));
    }

    #[test]
    fn test_stored_content_is_parsed() {
        let manager = memory_manager(Some("random_move_probability: 0.5\n"));
        let config = manager.get_config().unwrap();
        assert_eq!(config.random_move_probability, 0.5);
    }

    #[test]
    fn test_invalid_stored_content_is_rejected() {
        let manager = memory_manager(Some("random_move_probability: 1.5\n"));
        let err = manager.get_config().unwrap_err();
        assert!(err.starts_with("Config validation error"), "{}", err);
    }

    #[test]
    fn test_set_config_rejects_invalid_values() {
        let manager = memory_manager(None);
        let invalid = DifficultyConfig {
            random_move_probability: -0.1,
        };
        assert!(manager.set_config(&invalid).is_err());
        assert_eq!(manager.get_config(), Ok(DifficultyConfig::default()));
    }

    #[test]
    fn test_set_config_round_trips_through_file() {
        let random_number: u32 = rand::random();
        let path = std::env::temp_dir().join(format!(
            "temp_tictactoe_difficulty_{}.yaml",
            random_number
        ));
        let config = DifficultyConfig {
            random_move_probability: 0.35,
        };

        let manager: ConfigManager<_, DifficultyConfig> =
            ConfigManager::from_yaml_file(path.clone());
        manager.set_config(&config).unwrap();

        let reloaded: ConfigManager<_, DifficultyConfig> =
            ConfigManager::from_yaml_file(path.clone());
        assert_eq!(reloaded.get_config(), Ok(config));
        let _ = std::fs::remove_file(path);
    }
}
