//! Rules command - Show which rules a scan would run

use colored::Colorize;
use std::path::Path;
use tracing::{debug, info};

use super::{OutputFormat, RulesArgs};
use crate::cli::exit_codes;
use crate::cli::output::{JsonOutput, SelectionRenderer, SelectionView, TerminalOutput};
use crate::config::Config;
use crate::error::{OutputError, RuleGateError};
use crate::rules::constants::warn_unknown_rule_ids;
use crate::rules::generate;

pub fn execute(args: RulesArgs, config_path: Option<&Path>) -> Result<i32, RuleGateError> {
    let mut config = Config::load(config_path)?;
    config
        .rules
        .merge_cli(&args.include, &args.exclude, args.track_suppressions);

    warn_unknown_rule_ids(&config.rules.referenced_ids());

    let filters = config.filters();
    debug!(filters = filters.len(), "Built rule filters");

    let track_suppressions = config.rules.track_suppressions;
    let list = generate(track_suppressions, &filters);
    let (builders, suppressed) = list.rules_info();
    info!(
        active = builders.len(),
        suppressed = suppressed.values().filter(|s| **s).count(),
        "Rule selection complete"
    );

    let view = SelectionView::new(&list, track_suppressions);
    let renderer: Box<dyn SelectionRenderer> = match args.format {
        OutputFormat::Terminal => Box::new(TerminalOutput::new()),
        OutputFormat::Json => Box::new(JsonOutput::new()),
    };
    let rendered = renderer.render_selection(&view)?;

    match args.output {
        Some(output_path) => {
            std::fs::write(&output_path, &rendered).map_err(|e| {
                RuleGateError::Output(OutputError::FileWrite {
                    path: output_path.display().to_string(),
                    source: e,
                })
            })?;

            println!(
                "{} Rule list written to: {}",
                "Success:".green().bold(),
                output_path.display().to_string().cyan()
            );
        }
        None => println!("{rendered}"),
    }

    Ok(exit_codes::SUCCESS)
}
