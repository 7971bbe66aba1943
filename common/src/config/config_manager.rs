use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads a config once, validates it, and caches it; a missing source yields `TConfig::default()`.
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
            .map_err(|e| format!("Config lock poisoned: {}", e))?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let config_data_result = self.config_content_provider.get_config_content()?;
        if let Some(config_data) = config_data_result {
            let config = self.config_serializer.deserialize(&config_data)?;

            config
                .validate()
                .map_err(|e| format!("Config validation error: {}", e))?;

            *current = Some(config.clone());
            return Ok(config);
        }

        Ok(TConfig::default())
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
            .map_err(|e| format!("Config lock poisoned: {}", e))?;
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InMemoryConfigProvider;
    use crate::games::tictactoe::{FirstPlayerMode, TicTacToeSettings};

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    struct LimitConfig {
        limit: u32,
    }

    impl Validate for LimitConfig {
        fn validate(&self) -> Result<(), String> {
            if self.limit > 10 {
                return Err("limit must be at most 10".to_string());
            }
            Ok(())
        }
    }

    fn manager<T>(content: Option<&str>) -> ConfigManager<InMemoryConfigProvider, T>
    where
        T: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    {
        ConfigManager::new(
            InMemoryConfigProvider::new(content.map(str::to_string)),
            YamlConfigSerializer::new(),
        )
    }

    #[test]
    fn test_missing_content_returns_default() {
        let manager = manager::<TicTacToeSettings>(None);
        assert_eq!(manager.get_config().unwrap(), TicTacToeSettings::default());
    }

    #[test]
    fn test_loads_yaml() {
        let manager = manager::<TicTacToeSettings>(Some("first_player_mode: ai\n"));
        assert_eq!(
            manager.get_config().unwrap().first_player_mode,
            FirstPlayerMode::Ai
        );
    }

    #[test]
    fn test_invalid_yaml_is_reported() {
        let manager = manager::<LimitConfig>(Some("limit: [1, 2"));
        let err = manager.get_config().unwrap_err();
        assert!(err.starts_with("Failed to deserialize config"), "{}", err);
    }

    #[test]
    fn test_validation_failure_is_reported() {
        let manager = manager::<LimitConfig>(Some("limit: 11"));
        assert_eq!(
            manager.get_config(),
            Err("Config validation error: limit must be at most 10".to_string())
        );
    }

    #[test]
    fn test_set_config_persists_and_caches() {
        let manager = manager::<LimitConfig>(None);
        manager.set_config(&LimitConfig { limit: 4 }).unwrap();

        assert_eq!(manager.get_config().unwrap(), LimitConfig { limit: 4 });
        let stored = manager
            .config_content_provider
            .get_config_content()
            .unwrap()
            .unwrap();
        assert!(stored.contains("limit: 4"), "{}", stored);
    }

    #[test]
    fn test_set_config_rejects_invalid() {
        let manager = manager::<LimitConfig>(None);
        assert!(manager.set_config(&LimitConfig { limit: 50 }).is_err());
        assert_eq!(manager.get_config().unwrap(), LimitConfig::default());
    }

    #[test]
    fn test_missing_file_returns_default() {
        let manager: ConfigManager<FileContentConfigProvider, LimitConfig> =
            ConfigManager::from_yaml_file("/nonexistent/dir/tictactoe.yaml");
        assert_eq!(manager.get_config().unwrap(), LimitConfig::default());
    }
}
