use crate::domain::{Category, CommissionConfig};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    /// Operations file used when none is given on the command line.
    pub input_path: Option<String>,
    pub commission: CommissionConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let input_path = env_map
            .get("COMMISSION_INPUT_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let commission = match env_map.get("COMMISSION_CONFIG_FILE") {
            Some(path) => load_commission_file(path)?,
            None => CommissionConfig::default(),
        };
        validate_commission(&commission)?;

        Ok(Config {
            input_path,
            commission,
        })
    }
}

fn load_commission_file(path: &str) -> Result<CommissionConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|_| {
        ConfigError::InvalidValue(
            "COMMISSION_CONFIG_FILE".to_string(),
            "file not found or unreadable".to_string(),
        )
    })?;
    serde_json::from_str(&content).map_err(|e| {
        ConfigError::InvalidValue(
            "COMMISSION_CONFIG_FILE".to_string(),
            format!("invalid commission config: {}", e),
        )
    })
}

fn validate_commission(commission: &CommissionConfig) -> Result<(), ConfigError> {
    for category in Category::ALL {
        if let Some(field) = commission.get(category).negative_field() {
            return Err(ConfigError::InvalidValue(
                format!("{}.{}", category, field),
                "must not be negative".to_string(),
            ));
        }
    }
    Ok(())
}
