//! Disassembler configuration (TOML) parsing.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Allowed range for `format.mnemonic_width`.
pub const MNEMONIC_WIDTH_RANGE: std::ops::RangeInclusive<usize> = 1..=64;

/// A parsed configuration file. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Decoder behaviour.
    #[serde(default)]
    pub decode: DecodeOptions,

    /// Listing layout.
    #[serde(default)]
    pub format: FormatOptions,
}

/// The `[decode]` section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecodeOptions {
    /// Fail on call-target tokens missing from the enumeration instead of
    /// emitting them unresolved.
    pub strict_tokens: bool,
}

/// The `[format]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    /// Column width the mnemonic is padded to (default: 15).
    pub mnemonic_width: usize,

    /// Print offsets and raw bytes with upper-case hex digits.
    pub uppercase_hex: bool,

    /// Insert the instruction's raw bytes after the offset.
    pub show_bytes: bool,

    /// Append the absolute target to branch instructions.
    pub show_branch_targets: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            mnemonic_width: 15,
            uppercase_hex: false,
            show_bytes: false,
            show_branch_targets: false,
        }
    }
}

impl Config {
    /// Load a configuration from a file path.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_owned(),
            source: e,
        })?;

        let config = Self::from_str(&content, path)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse a configuration from a string. `path` is only used in errors.
    pub fn from_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_owned(),
            source: e,
        })?;

        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let width = self.format.mnemonic_width;
        if !MNEMONIC_WIDTH_RANGE.contains(&width) {
            return Err(ConfigError::Invalid {
                path: path.to_owned(),
                field: "format.mnemonic_width",
                reason: format!(
                    "{} is outside {}..={}",
                    width,
                    MNEMONIC_WIDTH_RANGE.start(),
                    MNEMONIC_WIDTH_RANGE.end()
                ),
            });
        }
        Ok(())
    }
}
