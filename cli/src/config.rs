use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate};
use tictactoe_engine::game::{BotType, FirstPlayerMode, Mark};

const CONFIG_FILE_NAME: &str = "tictactoe_cli_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config> {
    ConfigManager::from_yaml_file(&get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub human_mark: Mark,
    pub first_player: FirstPlayerMode,
    pub bot: BotType,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.human_mark == Mark::Empty {
            return Err("Human mark must be X or O".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            human_mark: Mark::X,
            first_player: FirstPlayerMode::Human,
            bot: BotType::Minimax,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::config::{ConfigContentProvider, ConfigSerializer, YamlConfigSerializer};

    fn get_temp_file_path() -> String {
        use std::env;
        let mut path = env::temp_dir();
        let random_number: u32 = rand::random();
        let file_name = format!("temp_tictactoe_cli_config_{}.yaml", random_number);
        path.push(file_name);
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_empty_mark_is_rejected() {
        let config = Config {
            human_mark: Mark::Empty,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_yaml_roundtrip() {
        let serializer = YamlConfigSerializer::new();
        let config = Config {
            human_mark: Mark::O,
            first_player: FirstPlayerMode::Random,
            bot: BotType::Random,
            seed: Some(1234),
        };
        let content = serializer.serialize(&config).unwrap();
        let restored: Config = serializer.deserialize(&content).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn test_missing_file_yields_default() {
        let path = get_temp_file_path();
        let manager: ConfigManager<FileContentConfigProvider, Config> =
            ConfigManager::from_yaml_file(&path);
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_config_persists_to_file() {
        let path = get_temp_file_path();
        let manager: ConfigManager<FileContentConfigProvider, Config> =
            ConfigManager::from_yaml_file(&path);

        let config = Config {
            human_mark: Mark::O,
            first_player: FirstPlayerMode::Bot,
            bot: BotType::Minimax,
            seed: None,
        };
        manager.set_config(&config).unwrap();

        let provider = FileContentConfigProvider::new(path.clone());
        let content = provider.get_config_content().unwrap();
        assert!(content.is_some(), "config file should exist after set");

        let reloaded: ConfigManager<FileContentConfigProvider, Config> =
            ConfigManager::from_yaml_file(&path);
        assert_eq!(reloaded.get_config().unwrap(), config);

        let _ = std::fs::remove_file(&path);
    }
}
