use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::format::NumberFormat;
use crate::reader::ReadError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config")]
    Parse(#[from] serde_yaml::Error),

    #[error("Error in profile '{profile}': {reason}")]
    InvalidProfile { profile: String, reason: String },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// How amounts are shown in the preview tables
    #[serde(default)]
    pub display: NumberFormat,
    pub profiles: BTreeMap<String, Profile>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        log::info!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, profile) in &self.profiles {
            profile
                .validate()
                .map_err(|reason| ConfigError::InvalidProfile {
                    profile: name.clone(),
                    reason: reason.to_string(),
                })?;
        }
        Ok(())
    }

    pub fn profile(&self, name: &str) -> Result<&Profile, ReadError> {
        self.profiles
            .get(name)
            .ok_or_else(|| ReadError::UnknownProfile {
                name: name.to_string(),
                available: self
                    .profiles
                    .keys()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Describes how a bank's ledger export maps onto transactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub currency: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Lines before the header row
    #[serde(default)]
    pub skip_rows: usize,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
    #[serde(default)]
    pub grouping_separator: Option<char>,
    pub columns: ColumnNames,
}

fn default_delimiter() -> char {
    ','
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_decimal_separator() -> char {
    '.'
}

impl Profile {
    fn validate(&self) -> Result<(), &'static str> {
        if self.currency.trim().is_empty() {
            return Err("currency must not be empty");
        }
        if !self.delimiter.is_ascii() {
            return Err("delimiter must be a single ASCII character");
        }
        if self.grouping_separator == Some(self.decimal_separator) {
            return Err("decimal and grouping separator must differ");
        }
        if self.date_format.trim().is_empty() {
            return Err("date_format must not be empty");
        }
        Ok(())
    }

    pub fn delimiter_byte(&self) -> u8 {
        let mut buffer = [0; 4];
        self.delimiter.encode_utf8(&mut buffer);
        buffer[0]
    }

    pub fn number_format(&self) -> NumberFormat {
        NumberFormat {
            decimal_separator: self.decimal_separator,
            grouping_separator: self.grouping_separator,
        }
    }
}

/// Header names of the ledger columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnNames {
    pub time: String,
    pub amount: String,
    pub state: String,
    pub payee: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}
