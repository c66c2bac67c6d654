//! Configuration module

pub mod loader;

pub use loader::Config;

use serde::{Deserialize, Serialize};

/// Rule selection configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RulesConfig {
    /// Run only these rule IDs (empty means all)
    #[serde(default)]
    pub include: Vec<String>,

    /// Never run these rule IDs
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Keep suppressed rules in the rule list, flagged as suppressed
    #[serde(default)]
    pub track_suppressions: bool,
}

impl RulesConfig {
    /// Extend the configured lists with command line values
    pub fn merge_cli(&mut self, include: &[String], exclude: &[String], track_suppressions: bool) {
        self.include.extend(include.iter().cloned());
        self.exclude.extend(exclude.iter().cloned());
        self.track_suppressions |= track_suppressions;
    }

    /// Every ID named by the include and exclude lists
    pub fn referenced_ids(&self) -> Vec<String> {
        self.include
            .iter()
            .chain(self.exclude.iter())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_cli_extends_lists() {
        let mut rules = RulesConfig {
            include: vec![],
            exclude: vec!["G104".to_string()],
            track_suppressions: false,
        };
        rules.merge_cli(&["G101".to_string()], &["G601".to_string()], false);

        assert_eq!(rules.include, vec!["G101"]);
        assert_eq!(rules.exclude, vec!["G104", "G601"]);
        assert!(!rules.track_suppressions);
    }

    #[test]
    fn test_merge_cli_cannot_disable_tracking() {
        let mut rules = RulesConfig {
            track_suppressions: true,
            ..Default::default()
        };
        rules.merge_cli(&[], &[], false);
        assert!(rules.track_suppressions);

        let mut rules = RulesConfig::default();
        rules.merge_cli(&[], &[], true);
        assert!(rules.track_suppressions);
    }

    #[test]
    fn test_referenced_ids() {
        let rules = RulesConfig {
            include: vec!["G101".to_string()],
            exclude: vec!["G999".to_string()],
            track_suppressions: false,
        };
        assert_eq!(rules.referenced_ids(), vec!["G101", "G999"]);
    }
}
