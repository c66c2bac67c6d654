//! JSON output formatting

use crate::error::RuleGateError;
use serde::Serialize;

use super::{RuleRow, RuleStatus, SelectionRenderer, SelectionView};

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct SelectionOutput<'a> {
    version: &'static str,
    track_suppressions: bool,
    rules: &'a [RuleRow],
    summary: Summary,
}

#[derive(Serialize)]
struct Summary {
    total: usize,
    active: usize,
    suppressed: usize,
}

impl SelectionRenderer for JsonOutput {
    fn render_selection(&self, view: &SelectionView) -> Result<String, RuleGateError> {
        let output = SelectionOutput {
            version: env!("CARGO_PKG_VERSION"),
            track_suppressions: view.track_suppressions,
            rules: &view.rows,
            summary: Summary {
                total: view.rows.len(),
                active: view.count(RuleStatus::Active),
                suppressed: view.suppressed_count(),
            },
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}
