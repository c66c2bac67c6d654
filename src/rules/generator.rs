//! # Rule Set Generation
//!
//! Reconciles the catalog with a list of [`RuleFilter`]s.
//!
//! Filters are OR-combined: a rule matched by any filter is suppressed and
//! no later filter can clear the flag. What happens to a suppressed rule
//! depends on `track_suppressions`:
//!
//! - `false`: the rule is left out of [`RuleList::rules`], so a driver that
//!   only walks the active set never sees it.
//! - `true`: every catalog rule stays in [`RuleList::rules`]. Consumers must
//!   check [`RuleList::rule_suppressed`] before running an entry; a present
//!   but suppressed rule is reported as configured off, never executed.
//!
//! ## Examples
//!
//! ```rust
//! use rulegate::rules::{generate, RuleFilter};
//!
//! let list = generate(false, &[RuleFilter::exclude(["G101"])]);
//! assert!(!list.rules.contains_key("G101"));
//! assert_eq!(list.rule_suppressed["G101"], true);
//!
//! let audit = generate(true, &[RuleFilter::exclude(["G101"])]);
//! assert!(audit.rules.contains_key("G101"));
//! assert!(audit.is_suppressed("G101"));
//! ```

use std::collections::HashMap;
use tracing::{debug, span, trace, Level};

use super::catalog::{self, RuleDefinition};
use super::checks::RuleBuilder;
use super::filter::RuleFilter;

/// Rules selected by one [`generate`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleList {
    /// Active set, keyed by rule ID
    pub rules: HashMap<String, RuleDefinition>,
    /// Suppressed flag for every catalog rule
    pub rule_suppressed: HashMap<String, bool>,
}

impl RuleList {
    /// Builders of the active set together with the suppression ledger
    pub fn rules_info(&self) -> (HashMap<String, RuleBuilder>, HashMap<String, bool>) {
        let builders = self
            .rules
            .values()
            .map(|def| (def.id.to_string(), def.create))
            .collect();
        (builders, self.rule_suppressed.clone())
    }

    /// Whether the rule was flagged by a filter. Unknown IDs are never
    /// suppressed.
    pub fn is_suppressed(&self, id: &str) -> bool {
        self.rule_suppressed.get(id).copied().unwrap_or(false)
    }

    /// Whether the rule is in the active set and not suppressed
    pub fn is_active(&self, id: &str) -> bool {
        self.rules.contains_key(id) && !self.is_suppressed(id)
    }

    /// Rules a driver should execute, in catalog order
    pub fn runnable(&self) -> Vec<&RuleDefinition> {
        catalog::ids()
            .filter(|id| self.is_active(id))
            .filter_map(|id| self.rules.get(id))
            .collect()
    }

    /// Suppressed rule IDs, in catalog order
    pub fn suppressed_ids(&self) -> Vec<&'static str> {
        catalog::ids().filter(|id| self.is_suppressed(id)).collect()
    }
}

/// Generate the list of rules to use
pub fn generate(track_suppressions: bool, filters: &[RuleFilter]) -> RuleList {
    let span = span!(
        Level::DEBUG,
        "generate",
        track_suppressions,
        filters = filters.len()
    );
    let _guard = span.enter();

    let rules = catalog::catalog();
    let mut rule_map = HashMap::with_capacity(rules.len());
    let mut suppressed_map = HashMap::with_capacity(rules.len());

    'rules: for rule in rules {
        let mut suppressed = false;
        for filter in filters {
            if filter.matches(rule.id) {
                suppressed = true;
            }
            if suppressed && !track_suppressions {
                trace!(rule_id = rule.id, "Rule suppressed and dropped");
                suppressed_map.insert(rule.id.to_string(), true);
                continue 'rules;
            }
        }
        if suppressed {
            trace!(rule_id = rule.id, "Rule suppressed and tracked");
        }
        rule_map.insert(rule.id.to_string(), *rule);
        suppressed_map.insert(rule.id.to_string(), suppressed);
    }

    debug!(
        active = rule_map.len(),
        suppressed = suppressed_map.values().filter(|s| **s).count(),
        "Rule list generated"
    );

    RuleList {
        rules: rule_map,
        rule_suppressed: suppressed_map,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::checks::Rule;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn catalog_len() -> usize {
        catalog::catalog().len()
    }

    #[test]
    fn test_no_filters_activates_everything() {
        let list = generate(false, &[]);

        assert_eq!(list.rules.len(), catalog_len());
        for id in catalog::ids() {
            assert!(list.rules.contains_key(id), "{id} should be active");
            assert_eq!(list.rule_suppressed.get(id), Some(&false));
        }
    }

    #[test]
    fn test_ledger_covers_catalog_for_every_mode() {
        let filter_sets = [
            vec![],
            vec![RuleFilter::exclude(["G101"])],
            vec![RuleFilter::include_only(["G101"])],
            vec![RuleFilter::exclude(["G101"]), RuleFilter::include_only(["G101", "G102"])],
        ];

        for track in [false, true] {
            for filters in &filter_sets {
                let list = generate(track, filters);
                assert_eq!(list.rule_suppressed.len(), catalog_len());
                let keys: HashSet<_> = list.rule_suppressed.keys().map(String::as_str).collect();
                let expected: HashSet<_> = catalog::ids().collect();
                assert_eq!(keys, expected);
            }
        }
    }

    #[test]
    fn test_exclude_filter_drops_rule() {
        let list = generate(false, &[RuleFilter::new(true, ["G101"])]);

        assert!(!list.rules.contains_key("G101"));
        assert_eq!(list.rule_suppressed["G101"], true);
        for id in catalog::ids().filter(|id| *id != "G101") {
            assert!(list.rules.contains_key(id));
            assert_eq!(list.rule_suppressed[id], false);
        }
    }

    #[test]
    fn test_include_only_filter_keeps_single_rule() {
        let list = generate(false, &[RuleFilter::new(false, ["G101"])]);

        let active: Vec<_> = list.rules.keys().map(String::as_str).collect();
        assert_eq!(active, vec!["G101"]);
        for id in catalog::ids() {
            assert_eq!(list.rule_suppressed[id], id != "G101");
        }
    }

    #[test]
    fn test_tracking_keeps_suppressed_rule_present() {
        let list = generate(true, &[RuleFilter::new(true, ["G101"])]);

        assert!(list.rules.contains_key("G101"));
        assert_eq!(list.rule_suppressed["G101"], true);
        assert_eq!(list.rules.len(), catalog_len());
        assert!(!list.is_active("G101"));
    }

    #[test]
    fn test_later_filter_cannot_unsuppress() {
        // The include-only filter does not match G101, yet the earlier exclude holds
        let filters = [RuleFilter::exclude(["G101"]), RuleFilter::include_only(["G101"])];
        let list = generate(true, &filters);

        assert!(list.is_suppressed("G101"));
        assert_eq!(list.suppressed_ids().len(), catalog_len());
    }

    #[test]
    fn test_filter_order_does_not_change_ledger() {
        let a = RuleFilter::exclude(["G104", "G401"]);
        let b = RuleFilter::include_only(["G101", "G104", "G204", "G401"]);

        for track in [false, true] {
            let forward = generate(track, &[a.clone(), b.clone()]);
            let backward = generate(track, &[b.clone(), a.clone()]);
            assert_eq!(forward.rule_suppressed, backward.rule_suppressed);
        }
    }

    #[test]
    fn test_unknown_ids_are_inert() {
        let baseline = generate(false, &[RuleFilter::exclude(["G101"])]);
        let with_unknown = generate(false, &[RuleFilter::exclude(["G101", "G999", "bogus"])]);

        assert_eq!(baseline, with_unknown);
        assert!(!with_unknown.rule_suppressed.contains_key("G999"));
    }

    #[test]
    fn test_rules_info_preserves_key_sets() {
        for track in [false, true] {
            let list = generate(track, &[RuleFilter::exclude(["G101", "G601"])]);
            let (builders, suppressed) = list.rules_info();

            let builder_keys: HashSet<_> = builders.keys().collect();
            let rule_keys: HashSet<_> = list.rules.keys().collect();
            assert_eq!(builder_keys, rule_keys);
            assert_eq!(suppressed, list.rule_suppressed);
        }
    }

    #[test]
    fn test_rules_info_builders_build_matching_rules() {
        let list = generate(false, &[RuleFilter::include_only(["G402", "G505"])]);
        let (builders, _) = list.rules_info();

        for (id, build) in &builders {
            assert_eq!(build(id.as_str(), &Default::default()).id(), id.as_str());
        }
        assert_eq!(builders.len(), 2);
    }

    #[test]
    fn test_runnable_skips_tracked_suppressions() {
        let list = generate(true, &[RuleFilter::include_only(["G304", "G101"])]);

        let runnable: Vec<_> = list.runnable().iter().map(|r| r.id).collect();
        assert_eq!(runnable, vec!["G101", "G304"]);
        assert_eq!(list.suppressed_ids().len(), catalog_len() - 2);
    }

    #[test]
    fn test_each_call_owns_its_maps() {
        let mut first = generate(false, &[]);
        first.rule_suppressed.insert("G101".to_string(), true);
        first.rules.clear();

        let second = generate(false, &[]);
        assert_eq!(second.rule_suppressed["G101"], false);
        assert_eq!(second.rules.len(), catalog_len());
    }

    #[test]
    fn test_concurrent_generation() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                std::thread::spawn(move || {
                    let track = i % 2 == 0;
                    generate(track, &[RuleFilter::exclude(["G101"])])
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let list = handle.join().unwrap();
            assert_eq!(list.rules.contains_key("G101"), i % 2 == 0);
            assert!(list.is_suppressed("G101"));
        }
    }
}
