//! Configuration for a hashing run, loaded from an optional TOML file.
//!
//! # Sections
//!
//! | Section         | Purpose                                          |
//! |-----------------|--------------------------------------------------|
//! | `[fingerprint]` | Digest length and the separator spliced into names |
//! | `[kinds]`       | Extension lists selecting each asset grammar     |
//!
//! Every field has a default, so an absent file (or an empty one) yields
//! the standard behavior: 6 hex chars joined with `-`.

mod error;

pub use error::ConfigError;

use crate::log;
use serde::Deserialize;
use std::{fs, path::Path};

/// Maximum fingerprint length (hex chars of a 256-bit digest).
pub const MAX_FINGERPRINT_LEN: usize = 64;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HashConfig {
    /// Fingerprint format
    pub fingerprint: FingerprintConfig,
    /// Extension → asset kind table
    pub kinds: KindsConfig,
}

/// `[fingerprint]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FingerprintConfig {
    /// Number of hex chars kept from the digest
    pub length: usize,
    /// Text placed between the file stem and the fingerprint
    pub separator: String,
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self {
            length: 6,
            separator: "-".into(),
        }
    }
}

/// `[kinds]` section. Extensions are matched case-insensitively, without the dot.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KindsConfig {
    pub markup: Vec<String>,
    pub script: Vec<String>,
    pub stylesheet: Vec<String>,
    pub manifest: Vec<String>,
}

impl Default for KindsConfig {
    fn default() -> Self {
        Self {
            markup: vec!["html".into(), "htm".into()],
            script: vec!["js".into(), "mjs".into()],
            stylesheet: vec!["css".into()],
            manifest: vec!["webmanifest".into()],
        }
    }
}

impl KindsConfig {
    /// All configured lists paired with their section key.
    fn lists(&self) -> [(&'static str, &[String]); 4] {
        [
            ("markup", &self.markup),
            ("script", &self.script),
            ("stylesheet", &self.stylesheet),
            ("manifest", &self.manifest),
        ]
    }
}

/// Check whether `ext` appears in an extension list.
pub fn ext_in(list: &[String], ext: &str) -> bool {
    list.iter()
        .any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(ext))
}

impl HashConfig {
    /// Load configuration: defaults when `path` is `None`, otherwise the file.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let (config, _) = Self::parse_with_ignored(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        log!("warning"; "unknown fields in {}, ignoring:", path.display());
        for field in fields {
            log!("warning"; "- {}", field);
        }
    }

    /// Reject values that would produce unusable output names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fp = &self.fingerprint;
        if fp.length == 0 || fp.length > MAX_FINGERPRINT_LEN {
            return Err(ConfigError::Validation(format!(
                "fingerprint.length must be between 1 and {MAX_FINGERPRINT_LEN}, got {}",
                fp.length
            )));
        }
        if fp.separator.is_empty() || fp.separator.contains(['/', '\\', '.']) {
            return Err(ConfigError::Validation(format!(
                "fingerprint.separator `{}` must be non-empty and contain no `/`, `\\` or `.`",
                fp.separator
            )));
        }

        let lists = self.kinds.lists();
        for (i, (name, list)) in lists.iter().enumerate() {
            for ext in list.iter() {
                if ext.trim_start_matches('.').is_empty() {
                    return Err(ConfigError::Validation(format!(
                        "kinds.{name} contains an empty extension"
                    )));
                }
                if let Some((other, _)) = lists[i + 1..]
                    .iter()
                    .find(|(_, other)| ext_in(other, ext.trim_start_matches('.')))
                {
                    return Err(ConfigError::Validation(format!(
                        "extension `{ext}` is listed in both kinds.{name} and kinds.{other}"
                    )));
                }
            }
        }
        Ok(())
    }
}
