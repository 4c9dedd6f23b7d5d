use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_engine::{Difficulty, GameMode};

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_config.yaml";

const DEFAULT_COMPUTER_DELAY_MS: u64 = 500;
const MAX_COMPUTER_DELAY_MS: u64 = 5_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub mode: Option<GameMode>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_computer_delay_ms")]
    pub computer_delay_ms: u64,
}

fn default_computer_delay_ms() -> u64 {
    DEFAULT_COMPUTER_DELAY_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: None,
            difficulty: None,
            seed: None,
            computer_delay_ms: DEFAULT_COMPUTER_DELAY_MS,
        }
    }
}

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.computer_delay_ms > MAX_COMPUTER_DELAY_MS {
            return Err(format!(
                "computer_delay_ms must not exceed {}",
                MAX_COMPUTER_DELAY_MS
            ));
        }
        Ok(())
    }
}

/// Loads the YAML config. An explicitly passed path must exist; the
/// default file is optional and falls back to defaults when absent.
pub fn load(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    let (path, required) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    if !required && !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: Config = serde_yaml_ng::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: Config = serde_yaml_ng::from_str("seed: 17").unwrap();

        assert_eq!(config.mode, None);
        assert_eq!(config.difficulty, None);
        assert_eq!(config.seed, Some(17));
        assert_eq!(config.computer_delay_ms, DEFAULT_COMPUTER_DELAY_MS);
    }

    #[test]
    fn test_full_config_parses() {
        let yaml = "\
mode: player-vs-computer
difficulty: hard
seed: 42
computer_delay_ms: 0
";
        let config: Config = serde_yaml_ng::from_str(yaml).unwrap();

        assert_eq!(config.mode, Some(GameMode::PlayerVsComputer));
        assert_eq!(config.difficulty, Some(Difficulty::Hard));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.computer_delay_ms, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_excessive_delay_is_rejected() {
        let config = Config {
            computer_delay_ms: 60_000,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
