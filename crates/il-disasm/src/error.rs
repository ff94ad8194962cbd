//! Error types for decoding and configuration.

use il_opcodes::OperandKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a decode.
///
/// Records yielded before the error are still valid; the decoder yields
/// nothing after it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("fat method header at IL_{offset:04x} is not supported")]
    UnsupportedFormat { offset: usize },

    #[error(
        "stream truncated at IL_{offset:04x}: needed {needed} more byte(s), {available} available"
    )]
    TruncatedStream {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("operand kind {kind} of '{mnemonic}' at IL_{offset:04x} is not supported")]
    UnsupportedOperandKind {
        kind: OperandKind,
        mnemonic: &'static str,
        offset: usize,
    },

    #[error("call target token {token:#010x} at IL_{offset:04x} is not a known method token")]
    UnresolvedToken { offset: usize, token: i32 },
}

impl DecodeError {
    /// Offset of the instruction that failed.
    pub fn offset(&self) -> usize {
        match self {
            DecodeError::UnsupportedFormat { offset }
            | DecodeError::TruncatedStream { offset, .. }
            | DecodeError::UnsupportedOperandKind { offset, .. }
            | DecodeError::UnresolvedToken { offset, .. } => *offset,
        }
    }
}

/// Errors that can occur when loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid value for '{field}' in {path}: {reason}")]
    Invalid {
        path: PathBuf,
        field: &'static str,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = DecodeError::UnsupportedFormat { offset: 0 };
        assert_eq!(
            err.to_string(),
            "fat method header at IL_0000 is not supported"
        );

        let err = DecodeError::TruncatedStream {
            offset: 0x1a,
            needed: 4,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "stream truncated at IL_001a: needed 4 more byte(s), 2 available"
        );

        let err = DecodeError::UnsupportedOperandKind {
            kind: OperandKind::Switch,
            mnemonic: "switch",
            offset: 3,
        };
        assert_eq!(
            err.to_string(),
            "operand kind InlineSwitch of 'switch' at IL_0003 is not supported"
        );

        let err = DecodeError::UnresolvedToken {
            offset: 5,
            token: 0x44,
        };
        assert_eq!(
            err.to_string(),
            "call target token 0x00000044 at IL_0005 is not a known method token"
        );
    }

    #[test]
    fn offset_accessor() {
        let err = DecodeError::TruncatedStream {
            offset: 9,
            needed: 1,
            available: 0,
        };
        assert_eq!(err.offset(), 9);
    }
}
