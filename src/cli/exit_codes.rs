//! Exit codes for the CLI
//!
//! Standard exit codes used by the rulegate CLI for CI/CD integration.
//!
//! # Exit Code Reference
//!
//! | Code | Constant | Meaning | Example |
//! |------|----------|---------|---------|
//! | 0 | `SUCCESS` | Success | Rule list printed |
//! | 3 | `ERROR` | Runtime error | Config file unreadable, output not writable |
//! | 4 | `INVALID_ARGS` | Invalid arguments | Unknown flag, bad output format |
//!
//! Codes 1 and 2 are reserved for the scan driver (findings above and
//! below the failure threshold).

/// Operation completed successfully.
pub const SUCCESS: i32 = 0;

/// Runtime error (configuration file unreadable or invalid, write failure).
pub const ERROR: i32 = 3;

/// Invalid command-line arguments.
pub const INVALID_ARGS: i32 = 4;
