//! Terminal output formatting with colors

use crate::error::RuleGateError;
use colored::Colorize;

use super::{RuleRow, RuleStatus, SelectionRenderer, SelectionView};

pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    fn format_header(&self, view: &SelectionView) -> String {
        let mode = if view.track_suppressions {
            "tracking suppressions"
        } else {
            "dropping suppressed rules"
        };
        format!(
            "\n{} v{}\n\n{} {}\n",
            "rulegate".cyan().bold(),
            env!("CARGO_PKG_VERSION"),
            "Mode:".dimmed(),
            mode.yellow()
        )
    }

    fn format_rules(&self, view: &SelectionView) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}\n{}\n\n",
            "━".repeat(50).dimmed(),
            "  RULES".bold()
        ));

        let mut current_category = None;
        for row in &view.rows {
            if row.category != current_category {
                current_category = row.category;
                let name = row.category.map(|c| c.name()).unwrap_or("other");
                output.push_str(&format!("{}\n", name.to_uppercase().bold()));
            }
            output.push_str(&self.format_row(row));
        }

        output
    }

    fn format_row(&self, row: &RuleRow) -> String {
        let status = match row.status {
            RuleStatus::Active => row.status.name().green(),
            RuleStatus::Suppressed => row.status.name().yellow(),
            RuleStatus::Disabled => row.status.name().red(),
        };
        format!(
            "  {} [{}] {:<10} {}\n",
            "•".dimmed(),
            row.id.cyan(),
            status,
            row.description
        )
    }

    fn format_summary(&self, view: &SelectionView) -> String {
        format!(
            "\n{}\n  {} rules, {} active, {} suppressed\n",
            "━".repeat(50).dimmed(),
            view.rows.len(),
            view.count(RuleStatus::Active).to_string().green(),
            view.suppressed_count().to_string().yellow()
        )
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionRenderer for TerminalOutput {
    fn render_selection(&self, view: &SelectionView) -> Result<String, RuleGateError> {
        let mut output = self.format_header(view);
        output.push_str(&self.format_rules(view));
        output.push_str(&self.format_summary(view));
        Ok(output)
    }
}
