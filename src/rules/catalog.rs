//! # Rule Catalog
//!
//! The fixed, compiled-in inventory of every check the scanner knows about.
//!
//! Rule IDs follow a letter prefix plus a three digit code. The hundreds
//! digit names the category:
//!
//! | Range | Category |
//! |-------|----------|
//! | 1xx | misc |
//! | 2xx | injection |
//! | 3xx | filesystem |
//! | 4xx | crypto |
//! | 5xx | import blocklist |
//! | 6xx | memory safety |
//!
//! Gaps inside a range carry no meaning. External suppression annotations
//! reference these IDs, so they never change once published.
//!
//! ## Examples
//!
//! ```rust
//! use rulegate::rules::catalog::{self, Category};
//!
//! let g101 = catalog::lookup("G101").unwrap();
//! assert_eq!(g101.description, "Look for hardcoded credentials");
//! assert_eq!(g101.category(), Some(Category::Misc));
//! assert_eq!(catalog::catalog().first().map(|r| r.id), Some("G101"));
//! ```

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::checks::*;
use super::constants::is_valid_rule_id;

/// A rule as listed in the catalog
#[derive(Clone, Copy)]
pub struct RuleDefinition {
    /// Stable rule ID (e.g. "G101")
    pub id: &'static str,
    /// Human readable description
    pub description: &'static str,
    /// Builds a runnable instance of the rule
    pub create: RuleBuilder,
}

impl RuleDefinition {
    const fn new(id: &'static str, description: &'static str, create: RuleBuilder) -> Self {
        Self {
            id,
            description,
            create,
        }
    }

    /// Category derived from the rule ID
    pub fn category(&self) -> Option<Category> {
        Category::of(self.id)
    }
}

impl fmt::Debug for RuleDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleDefinition")
            .field("id", &self.id)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl PartialEq for RuleDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.description == other.description
    }
}

impl Eq for RuleDefinition {}

/// Rule categories, keyed by the hundreds digit of the rule ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Misc,
    Injection,
    Filesystem,
    Crypto,
    Blocklist,
    MemorySafety,
}

impl Category {
    /// Derive the category of a rule ID, `None` when the ID does not follow
    /// the convention or uses an unassigned range.
    pub fn of(id: &str) -> Option<Self> {
        if !is_valid_rule_id(id) {
            return None;
        }
        match id.as_bytes()[1] {
            b'1' => Some(Self::Misc),
            b'2' => Some(Self::Injection),
            b'3' => Some(Self::Filesystem),
            b'4' => Some(Self::Crypto),
            b'5' => Some(Self::Blocklist),
            b'6' => Some(Self::MemorySafety),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Misc => "misc",
            Self::Injection => "injection",
            Self::Filesystem => "filesystem",
            Self::Crypto => "crypto",
            Self::Blocklist => "blocklist",
            Self::MemorySafety => "memory-safety",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const RULES: &[RuleDefinition] = &[
    // misc
    RuleDefinition::new("G101", "Look for hardcoded credentials", new_hardcoded_credentials),
    RuleDefinition::new("G102", "Bind to all interfaces", new_binds_to_all_network_interfaces),
    RuleDefinition::new("G103", "Audit the use of unsafe block", new_using_unsafe),
    RuleDefinition::new("G104", "Audit errors not checked", new_no_error_check),
    RuleDefinition::new(
        "G106",
        "Audit the use of ssh.InsecureIgnoreHostKey function",
        new_ssh_host_key,
    ),
    RuleDefinition::new("G107", "Url provided to HTTP request as taint input", new_ssrf_check),
    RuleDefinition::new("G108", "Profiling endpoint is automatically exposed", new_pprof_check),
    RuleDefinition::new(
        "G109",
        "Converting strconv.Atoi result to int32/int16",
        new_integer_overflow_check,
    ),
    RuleDefinition::new(
        "G110",
        "Detect io.Copy instead of io.CopyN when decompression",
        new_decompression_bomb_check,
    ),
    RuleDefinition::new(
        "G111",
        "Detect http.Dir('/') as a potential risk",
        new_directory_traversal,
    ),
    RuleDefinition::new(
        "G112",
        "Detect ReadHeaderTimeout not configured as a potential risk",
        new_slowloris,
    ),
    RuleDefinition::new(
        "G114",
        "Use of net/http serve function that has no support for setting timeouts",
        new_http_serve_without_timeouts,
    ),
    // injection
    RuleDefinition::new("G201", "SQL query construction using format string", new_sql_str_format),
    RuleDefinition::new(
        "G202",
        "SQL query construction using string concatenation",
        new_sql_str_concat,
    ),
    RuleDefinition::new("G203", "Use of unescaped data in HTML templates", new_template_check),
    RuleDefinition::new("G204", "Audit use of command execution", new_subproc),
    // filesystem
    RuleDefinition::new(
        "G301",
        "Poor file permissions used when creating a directory",
        new_mkdir_perms,
    ),
    RuleDefinition::new(
        "G302",
        "Poor file permissions used when creation file or using chmod",
        new_file_perms,
    ),
    RuleDefinition::new("G303", "Creating tempfile using a predictable path", new_bad_temp_file),
    RuleDefinition::new("G304", "File path provided as taint input", new_read_file),
    RuleDefinition::new(
        "G305",
        "File path traversal when extracting zip archive",
        new_archive,
    ),
    RuleDefinition::new(
        "G306",
        "Poor file permissions used when writing to a file",
        new_write_perms,
    ),
    RuleDefinition::new(
        "G307",
        "Poor file permissions used when creating a file with os.Create",
        new_os_create_perms,
    ),
    // crypto
    RuleDefinition::new(
        "G401",
        "Detect the usage of MD5 or SHA1",
        new_uses_weak_cryptography_hash,
    ),
    RuleDefinition::new("G402", "Look for bad TLS connection settings", new_intermediate_tls_check),
    RuleDefinition::new(
        "G403",
        "Ensure minimum RSA key length of 2048 bits",
        new_weak_key_strength,
    ),
    RuleDefinition::new("G404", "Insecure random number source (rand)", new_weak_rand_check),
    RuleDefinition::new(
        "G405",
        "Detect the usage of DES or RC4",
        new_uses_weak_cryptography_encryption,
    ),
    RuleDefinition::new(
        "G406",
        "Detect the usage of deprecated MD4 or RIPEMD160",
        new_uses_weak_deprecated_cryptography_hash,
    ),
    // blocklist
    RuleDefinition::new("G501", "Import blocklist: crypto/md5", new_blocklisted_import_md5),
    RuleDefinition::new("G502", "Import blocklist: crypto/des", new_blocklisted_import_des),
    RuleDefinition::new("G503", "Import blocklist: crypto/rc4", new_blocklisted_import_rc4),
    RuleDefinition::new("G504", "Import blocklist: net/http/cgi", new_blocklisted_import_cgi),
    RuleDefinition::new("G505", "Import blocklist: crypto/sha1", new_blocklisted_import_sha1),
    RuleDefinition::new(
        "G506",
        "Import blocklist: golang.org/x/crypto/md4",
        new_blocklisted_import_md4,
    ),
    RuleDefinition::new(
        "G507",
        "Import blocklist: golang.org/x/crypto/ripemd160",
        new_blocklisted_import_ripemd160,
    ),
    // memory safety
    RuleDefinition::new("G601", "Implicit memory aliasing in RangeStmt", new_implicit_aliasing),
];

lazy_static! {
    static ref CATALOG: Vec<RuleDefinition> = build_catalog(RULES);
}

/// Checks the authoring invariants of a rule table. A violation is a data
/// defect in the table, so it panics on first access instead of surfacing
/// as a runtime error.
fn build_catalog(table: &[RuleDefinition]) -> Vec<RuleDefinition> {
    let mut seen = HashSet::with_capacity(table.len());
    for rule in table {
        assert!(
            Category::of(rule.id).is_some(),
            "rule ID '{}' does not follow the catalog ID convention",
            rule.id
        );
        assert!(seen.insert(rule.id), "duplicate rule ID '{}' in catalog", rule.id);
    }
    table.to_vec()
}

/// All rules, in catalog order
pub fn catalog() -> &'static [RuleDefinition] {
    &CATALOG
}

/// Find a rule by ID
pub fn lookup(id: &str) -> Option<&'static RuleDefinition> {
    catalog().iter().find(|rule| rule.id == id)
}

/// Whether the ID names a rule in the catalog
pub fn is_known_rule(id: &str) -> bool {
    lookup(id).is_some()
}

/// Rule IDs in catalog order
pub fn ids() -> impl Iterator<Item = &'static str> {
    catalog().iter().map(|rule| rule.id)
}
