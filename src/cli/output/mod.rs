//! Output formatting module for CLI

pub mod json;
mod terminal;

pub use json::JsonOutput;
pub use terminal::TerminalOutput;

use serde::Serialize;

use crate::error::RuleGateError;
use crate::rules::{catalog, Category, RuleList};

/// How a catalog rule ended up after selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    /// In the active set and will run
    Active,
    /// In the active set but flagged, reported as configured off
    Suppressed,
    /// Dropped from the active set
    Disabled,
}

impl RuleStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Suppressed => "suppressed",
            Self::Disabled => "disabled",
        }
    }
}

/// One catalog rule with its selection outcome
#[derive(Debug, Clone, Serialize)]
pub struct RuleRow {
    pub id: &'static str,
    pub category: Option<Category>,
    pub description: &'static str,
    /// Present in the active set
    pub active: bool,
    pub suppressed: bool,
    #[serde(skip)]
    pub status: RuleStatus,
}

/// Selection outcome for every catalog rule, in catalog order
#[derive(Debug, Clone)]
pub struct SelectionView {
    pub track_suppressions: bool,
    pub rows: Vec<RuleRow>,
}

impl SelectionView {
    pub fn new(list: &RuleList, track_suppressions: bool) -> Self {
        let rows = catalog::catalog()
            .iter()
            .map(|rule| {
                let active = list.rules.contains_key(rule.id);
                let suppressed = list.is_suppressed(rule.id);
                let status = match (active, suppressed) {
                    (true, false) => RuleStatus::Active,
                    (true, true) => RuleStatus::Suppressed,
                    (false, _) => RuleStatus::Disabled,
                };
                RuleRow {
                    id: rule.id,
                    category: rule.category(),
                    description: rule.description,
                    active,
                    suppressed,
                    status,
                }
            })
            .collect();

        Self {
            track_suppressions,
            rows,
        }
    }

    pub fn count(&self, status: RuleStatus) -> usize {
        self.rows.iter().filter(|row| row.status == status).count()
    }

    pub fn suppressed_count(&self) -> usize {
        self.rows.iter().filter(|row| row.suppressed).count()
    }
}

/// Trait for rendering the rule selection
pub trait SelectionRenderer {
    fn render_selection(&self, view: &SelectionView) -> Result<String, RuleGateError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{generate, RuleFilter};

    #[test]
    fn test_statuses_without_tracking() {
        let list = generate(false, &[RuleFilter::exclude(["G101"])]);
        let view = SelectionView::new(&list, false);

        assert_eq!(view.rows.len(), catalog::catalog().len());
        assert_eq!(view.rows[0].id, "G101");
        assert_eq!(view.rows[0].status, RuleStatus::Disabled);
        assert_eq!(view.count(RuleStatus::Suppressed), 0);
        assert_eq!(view.count(RuleStatus::Disabled), 1);
        assert_eq!(view.suppressed_count(), 1);
    }

    #[test]
    fn test_statuses_with_tracking() {
        let list = generate(true, &[RuleFilter::exclude(["G101"])]);
        let view = SelectionView::new(&list, true);

        assert_eq!(view.rows[0].status, RuleStatus::Suppressed);
        assert!(view.rows[0].active);
        assert_eq!(view.count(RuleStatus::Disabled), 0);
        assert_eq!(view.count(RuleStatus::Active), catalog::catalog().len() - 1);
    }
}
