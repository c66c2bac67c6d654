//! Constructor capabilities referenced by the rule catalog
//!
//! Every catalog entry carries a [`RuleBuilder`]. The selection engine never
//! calls it: it only hands the builders of the active rules to whatever
//! drives the analysis. What a built rule does with a source file lives
//! behind the [`Rule`] trait, outside this crate.

use std::fmt;

/// Per-rule settings taken from the `[settings.<ID>]` table of the
/// configuration file.
pub type RuleSettings = toml::Table;

/// A runnable check instance.
pub trait Rule: Send + Sync + fmt::Debug {
    /// Rule ID this instance was built for
    fn id(&self) -> &str;

    /// Settings the instance was built with
    fn settings(&self) -> &RuleSettings;
}

/// Builds a runnable check for a rule ID
pub type RuleBuilder = fn(id: &str, settings: &RuleSettings) -> Box<dyn Rule>;

macro_rules! declare_checks {
    ($($builder:ident => $check:ident),+ $(,)?) => {
        $(
            #[derive(Debug, Clone)]
            pub struct $check {
                id: String,
                settings: RuleSettings,
            }

            impl Rule for $check {
                fn id(&self) -> &str {
                    &self.id
                }

                fn settings(&self) -> &RuleSettings {
                    &self.settings
                }
            }

            pub fn $builder(id: &str, settings: &RuleSettings) -> Box<dyn Rule> {
                Box::new($check {
                    id: id.to_string(),
                    settings: settings.clone(),
                })
            }
        )+
    };
}

declare_checks! {
    // misc
    new_hardcoded_credentials => HardcodedCredentials,
    new_binds_to_all_network_interfaces => BindsToAllNetworkInterfaces,
    new_using_unsafe => UsingUnsafe,
    new_no_error_check => NoErrorCheck,
    new_ssh_host_key => SshHostKey,
    new_ssrf_check => SsrfCheck,
    new_pprof_check => PprofCheck,
    new_integer_overflow_check => IntegerOverflowCheck,
    new_decompression_bomb_check => DecompressionBombCheck,
    new_directory_traversal => DirectoryTraversal,
    new_slowloris => Slowloris,
    new_http_serve_without_timeouts => HttpServeWithoutTimeouts,

    // injection
    new_sql_str_format => SqlStrFormat,
    new_sql_str_concat => SqlStrConcat,
    new_template_check => TemplateCheck,
    new_subproc => Subproc,

    // filesystem
    new_mkdir_perms => MkdirPerms,
    new_file_perms => FilePerms,
    new_bad_temp_file => BadTempFile,
    new_read_file => ReadFile,
    new_archive => Archive,
    new_write_perms => WritePerms,
    new_os_create_perms => OsCreatePerms,

    // crypto
    new_uses_weak_cryptography_hash => UsesWeakCryptographyHash,
    new_intermediate_tls_check => IntermediateTlsCheck,
    new_weak_key_strength => WeakKeyStrength,
    new_weak_rand_check => WeakRandCheck,
    new_uses_weak_cryptography_encryption => UsesWeakCryptographyEncryption,
    new_uses_weak_deprecated_cryptography_hash => UsesWeakDeprecatedCryptographyHash,

    // blocklist
    new_blocklisted_import_md5 => BlocklistedImportMd5,
    new_blocklisted_import_des => BlocklistedImportDes,
    new_blocklisted_import_rc4 => BlocklistedImportRc4,
    new_blocklisted_import_cgi => BlocklistedImportCgi,
    new_blocklisted_import_sha1 => BlocklistedImportSha1,
    new_blocklisted_import_md4 => BlocklistedImportMd4,
    new_blocklisted_import_ripemd160 => BlocklistedImportRipemd160,

    // memory safety
    new_implicit_aliasing => ImplicitAliasing,
}
