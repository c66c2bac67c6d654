//! rulegate library
//!
//! Rule catalog and rule selection for a static-analysis security scanner.
//!
//! ```rust
//! use rulegate::rules::{generate, RuleFilter};
//!
//! // Run everything except G104, and drop it from the rule set
//! let list = generate(false, &[RuleFilter::exclude(["G104"])]);
//! let (builders, suppressed) = list.rules_info();
//!
//! assert!(!builders.contains_key("G104"));
//! assert!(suppressed["G104"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod rules;

pub use error::RuleGateError;
