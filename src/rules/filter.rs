//! Rule filters
//!
//! A filter answers one question for a rule ID: should this rule be flagged
//! as suppressed? The same type covers "turn these rules off" and "run only
//! these rules".

use std::collections::HashSet;

/// A predicate over rule IDs. `matches` returning `true` flags the rule as
/// suppressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleFilter {
    /// Matches every ID in the set
    Exclude(HashSet<String>),
    /// Matches every ID outside the set
    IncludeOnly(HashSet<String>),
}

impl RuleFilter {
    /// Build a filter from an action flag: `true` excludes the given IDs,
    /// `false` keeps only the given IDs.
    ///
    /// IDs are not checked against the catalog.
    pub fn new<I, S>(action: bool, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids = ids.into_iter().map(Into::into).collect();
        if action {
            Self::Exclude(ids)
        } else {
            Self::IncludeOnly(ids)
        }
    }

    pub fn exclude<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(true, ids)
    }

    pub fn include_only<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(false, ids)
    }

    /// The action flag this filter was built with
    pub fn action(&self) -> bool {
        matches!(self, Self::Exclude(_))
    }

    /// IDs the filter was built with
    pub fn ids(&self) -> &HashSet<String> {
        match self {
            Self::Exclude(ids) | Self::IncludeOnly(ids) => ids,
        }
    }

    /// Whether the rule should be flagged as suppressed
    pub fn matches(&self, id: &str) -> bool {
        match self {
            Self::Exclude(ids) => ids.contains(id),
            Self::IncludeOnly(ids) => !ids.contains(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclude_matches_listed_ids() {
        let filter = RuleFilter::new(true, ["G101", "G102"]);
        assert!(filter.matches("G101"));
        assert!(filter.matches("G102"));
        assert!(!filter.matches("G103"));
        assert!(filter.action());
    }

    #[test]
    fn test_include_only_matches_everything_else() {
        let filter = RuleFilter::new(false, ["G101"]);
        assert!(!filter.matches("G101"));
        assert!(filter.matches("G102"));
        assert!(filter.matches("G601"));
        assert!(!filter.action());
    }

    #[test]
    fn test_empty_filters() {
        // An empty exclude list matches nothing, an empty allow-list matches everything
        let none: [&str; 0] = [];
        assert!(!RuleFilter::exclude(none).matches("G101"));
        assert!(RuleFilter::include_only(none).matches("G101"));
    }

    #[test]
    fn test_unknown_ids_are_accepted() {
        let filter = RuleFilter::exclude(vec!["NOT-A-RULE".to_string()]);
        assert!(filter.matches("NOT-A-RULE"));
        assert!(!filter.matches("G101"));
    }

    #[test]
    fn test_duplicate_ids_collapse() {
        let filter = RuleFilter::exclude(["G101", "G101"]);
        assert_eq!(filter.ids().len(), 1);
    }

    #[test]
    fn test_convenience_constructors() {
        assert_eq!(RuleFilter::exclude(["G101"]), RuleFilter::new(true, ["G101"]));
        assert_eq!(
            RuleFilter::include_only(["G101"]),
            RuleFilter::new(false, ["G101"])
        );
    }
}
