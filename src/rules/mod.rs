//! Rules module - Rule catalog and rule selection

pub mod catalog;
pub mod checks;
pub mod constants;
pub mod filter;
pub mod generator;

pub use catalog::{Category, RuleDefinition};
pub use checks::{Rule, RuleBuilder, RuleSettings};
pub use filter::RuleFilter;
pub use generator::{generate, RuleList};
