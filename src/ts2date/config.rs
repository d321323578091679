use crate::attributes::{parse_attribute_list, AttributeNameSet};
use crate::error::{Result, Ts2DateError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILENAME: &str = "ts2date.json";

/// Config key for the attribute list, as used by `get`/`set`.
pub const ATTRIBUTES_LIST_KEY: &str = "attributes-list";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("'Attributes List' is required and cannot be blank")]
    BlankAttributesList,

    #[error("Unknown config key: {0}")]
    UnknownKey(String),
}

/// Processor configuration, stored in `ts2date.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// Comma separated list of attributes to be formatted as the date.
    #[serde(default)]
    pub attributes_list: String,
}

impl ProcessorConfig {
    pub fn new(attributes_list: impl Into<String>) -> Self {
        Self {
            attributes_list: attributes_list.into(),
        }
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(Ts2DateError::Io)?;
        let config: ProcessorConfig =
            serde_json::from_str(&content).map_err(Ts2DateError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(Ts2DateError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(Ts2DateError::Serialization)?;
        fs::write(config_path, content).map_err(Ts2DateError::Io)?;
        Ok(())
    }

    /// Replace the attribute list when an override is given (e.g. from the CLI).
    pub fn with_override(mut self, attributes_list: Option<String>) -> Self {
        if let Some(list) = attributes_list {
            self.attributes_list = list;
        }
        self
    }

    /// Check the configuration without touching any records.
    ///
    /// The attribute list must not be blank; anything else is accepted.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.attributes_list.trim().is_empty() {
            return Err(ConfigError::BlankAttributesList);
        }
        Ok(())
    }

    /// Validate and resolve the configured attribute names.
    pub fn attribute_names(&self) -> std::result::Result<AttributeNameSet, ConfigError> {
        self.validate()?;
        parse_attribute_list(&self.attributes_list).ok_or(ConfigError::BlankAttributesList)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            ATTRIBUTES_LIST_KEY => Some(self.attributes_list.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), ConfigError> {
        match key {
            ATTRIBUTES_LIST_KEY => {
                let candidate = Self::new(value);
                candidate.validate()?;
                self.attributes_list = candidate.attributes_list;
                Ok(())
            }
            other => Err(ConfigError::UnknownKey(other.to_string())),
        }
    }
}
