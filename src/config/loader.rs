//! Configuration loader

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{ConfigError, RuleGateError};
use crate::rules::{RuleFilter, RuleSettings};

use super::RulesConfig;

pub const CONFIG_FILENAME: &str = ".rulegate.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Rule selection
    #[serde(default)]
    pub rules: RulesConfig,

    /// Per-rule settings handed to rule builders, keyed by rule ID
    #[serde(default)]
    pub settings: BTreeMap<String, RuleSettings>,
}

impl Config {
    /// Load configuration from an explicit path, the default file, or
    /// fall back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self, RuleGateError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load_or_default(),
        }
    }

    /// Load configuration from file or return default
    pub fn load_or_default() -> Result<Self, RuleGateError> {
        let config_path = Path::new(CONFIG_FILENAME);

        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            debug!("No {} found, using defaults", CONFIG_FILENAME);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, RuleGateError> {
        let content = fs::read_to_string(path).map_err(|e| {
            RuleGateError::Config(ConfigError::FileRead {
                path: path.display().to_string(),
                source: e,
            })
        })?;

        debug!(path = %path.display(), "Loaded configuration");
        toml::from_str(&content).map_err(Into::into)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, RuleGateError> {
        toml::to_string_pretty(self).map_err(Into::into)
    }

    /// Filters described by the rule selection, include-only first
    pub fn filters(&self) -> Vec<RuleFilter> {
        let mut filters = Vec::new();
        if !self.rules.include.is_empty() {
            filters.push(RuleFilter::include_only(self.rules.include.iter().cloned()));
        }
        if !self.rules.exclude.is_empty() {
            filters.push(RuleFilter::exclude(self.rules.exclude.iter().cloned()));
        }
        filters
    }

    /// Settings for a rule, empty when none are configured
    pub fn settings_for(&self, rule_id: &str) -> RuleSettings {
        self.settings.get(rule_id).cloned().unwrap_or_default()
    }
}
