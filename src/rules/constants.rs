//! Rule ID convention and validation of user supplied IDs

use colored::Colorize;
use lazy_static::lazy_static;
use regex::Regex;

use super::catalog;

lazy_static! {
    /// One uppercase letter followed by a three digit code
    static ref RULE_ID_PATTERN: Regex = Regex::new(r"^[A-Z][0-9]{3}$").unwrap();
}

/// Check if a string follows the rule ID convention
pub fn is_valid_rule_id(id: &str) -> bool {
    RULE_ID_PATTERN.is_match(id)
}

/// IDs from the list that do not name a catalog rule, in input order
pub fn unknown_rule_ids(ids: &[String]) -> Vec<&str> {
    ids.iter()
        .map(String::as_str)
        .filter(|id| !catalog::is_known_rule(id))
        .collect()
}

/// Print a warning for every ID that is not in the catalog.
///
/// Unknown IDs stay in the filter: they never match a catalog entry, so
/// keeping them is harmless and lets newer configuration files run against
/// an older catalog.
pub fn warn_unknown_rule_ids(ids: &[String]) {
    for id in unknown_rule_ids(ids) {
        tracing::debug!(rule_id = id, "Unknown rule ID in filter");
        eprintln!(
            "{} Unknown rule ID '{}' has no effect. Run {} to list known rules.",
            "Warning:".yellow(),
            id.cyan(),
            "rulegate rules".dimmed()
        );
    }
}
