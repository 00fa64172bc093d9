use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub model: ModelPathConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Name the bot announces itself with
    pub bot_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ModelPathConfig {
    /// Garment model artifact directory; defaults to ~/.ecobuddy/models/garment
    pub dir: Option<PathBuf>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        ChatConfig {
            bot_name: "CryptoBuddy".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&config_path)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(&config_path, toml_string)
            .context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Could not determine home directory")?;

        Ok(home.join(".ecobuddy").join("config.toml"))
    }

    /// Resolve the garment model directory, falling back to the default
    /// location under the home directory
    pub fn model_dir(&self) -> Option<PathBuf> {
        self.model
            .dir
            .clone()
            .or_else(crate::triage::CandleClassifier::default_model_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.chat.bot_name, "CryptoBuddy");
        assert!(config.model.dir.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.model.dir = Some(PathBuf::from("/opt/models/garment"));

        let toml_string = toml::to_string(&config).unwrap();
        assert!(toml_string.contains("/opt/models/garment"));

        let deserialized: Config = toml::from_str(&toml_string).unwrap();
        assert_eq!(
            deserialized.model.dir,
            Some(PathBuf::from("/opt/models/garment"))
        );
    }

    #[test]
    fn test_config_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.chat.bot_name, "CryptoBuddy");
    }

    #[test]
    fn test_explicit_model_dir_wins() {
        let mut config = Config::default();
        config.model.dir = Some(PathBuf::from("/tmp/garment"));
        assert_eq!(config.model_dir(), Some(PathBuf::from("/tmp/garment")));
    }
}
