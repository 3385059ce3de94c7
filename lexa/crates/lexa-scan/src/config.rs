//! Scanner configuration.
//!
//! A [`ScannerConfig`] is fixed when the scanner is built. Every field has a
//! default, so a TOML file only needs the settings it changes:
//!
//! ```
//! use lexa_scan::ScannerConfig;
//!
//! let config = ScannerConfig::from_toml_str(
//!     r#"
//!     scan_binary = true
//!     cpair_comment_single = "%\n"
//!     "#,
//! )
//! .unwrap();
//! assert!(config.scan_binary);
//! assert_eq!(config.cpair_comment_single, Some((b'%', b'\n')));
//! assert!(config.scan_hex);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::charset::CharSet;
use crate::error::{ConfigError, ConfigResult};

/// Settings that control how a [`Scanner`](crate::Scanner) tokenizes input.
///
/// Conflicting toggles are not rejected; the scanning rules decide which one
/// wins (for example an identifier found in the symbol table is only a
/// symbol when both `scan_symbols` and `symbol_2_token` are set).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScannerConfig {
    /// Bytes skipped between tokens.
    pub cset_skip_characters: CharSet,
    /// Bytes that may start an identifier.
    pub cset_identifier_first: CharSet,
    /// Bytes that may continue an identifier.
    pub cset_identifier_nth: CharSet,
    /// Bytes emitted as single-character tokens.
    pub cset_char_tokens: CharSet,
    /// Start and end markers of single-line comments, or `None`.
    #[serde(with = "comment_pair")]
    pub cpair_comment_single: Option<(u8, u8)>,

    /// Symbol names are compared case-sensitively.
    pub case_sensitive: bool,
    /// Drop `/* */` comments instead of returning them.
    pub skip_comment_multi: bool,
    /// Drop single-line comments instead of returning them.
    pub skip_comment_single: bool,
    /// Recognise `/* */` comments.
    pub scan_comment_multi: bool,
    /// Recognise identifiers.
    pub scan_identifier: bool,
    /// A lone identifier-first byte is an identifier.
    pub scan_identifier_1char: bool,
    /// `NULL` yields [`TokenKind::IdentifierNull`](crate::TokenKind::IdentifierNull).
    pub scan_identifier_null: bool,
    /// Look identifiers up in the symbol table.
    pub scan_symbols: bool,
    /// Recognise `0b` binary literals.
    pub scan_binary: bool,
    /// Recognise leading-zero octal literals.
    pub scan_octal: bool,
    /// Recognise floating-point literals.
    pub scan_float: bool,
    /// Recognise `0x` hex literals.
    pub scan_hex: bool,
    /// Recognise `$` hex literals.
    pub scan_hex_dollar: bool,
    /// Recognise single-quoted strings (no escapes).
    pub scan_string_sq: bool,
    /// Recognise double-quoted strings (with escapes).
    pub scan_string_dq: bool,
    /// Report binary, octal and hex literals as `Int`.
    pub numbers_2_int: bool,
    /// Report every integer literal as `Float`.
    pub int_2_float: bool,
    /// Report identifiers as `String`.
    pub identifier_2_string: bool,
    /// Report single characters as punctuation tokens rather than `Char`.
    pub char_2_token: bool,
    /// Report symbol-table hits as `Symbol`.
    pub symbol_2_token: bool,
    /// Lookups in a non-zero scope fall back to scope 0.
    pub scope_0_fallback: bool,

    /// Error count at which the scanner reports that it is over its budget.
    pub max_parse_errors: u32,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        let ident_first = CharSet::ascii_letters().union(&CharSet::from_bytes(b"_"));
        Self {
            cset_skip_characters: CharSet::from_bytes(b" \t\n"),
            cset_identifier_first: ident_first,
            cset_identifier_nth: ident_first
                .union(&CharSet::ascii_digits())
                .union(&CharSet::high_bytes()),
            cset_char_tokens: CharSet::ascii_punctuation(),
            cpair_comment_single: Some((b'#', b'\n')),
            case_sensitive: false,
            skip_comment_multi: true,
            skip_comment_single: true,
            scan_comment_multi: true,
            scan_identifier: true,
            scan_identifier_1char: true,
            scan_identifier_null: false,
            scan_symbols: true,
            scan_binary: false,
            scan_octal: true,
            scan_float: true,
            scan_hex: true,
            scan_hex_dollar: false,
            scan_string_sq: true,
            scan_string_dq: true,
            numbers_2_int: true,
            int_2_float: false,
            identifier_2_string: false,
            char_2_token: true,
            symbol_2_token: true,
            scope_0_fallback: false,
            max_parse_errors: 1,
        }
    }
}

impl ScannerConfig {
    /// Parse a configuration from TOML text. Missing keys keep their
    /// defaults; unknown keys are rejected.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Render the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }
}

/// Serializes a comment pair as a two-character string, `""` meaning none.
mod comment_pair {
    use serde::de::{self, Deserializer};
    use serde::ser::Serializer;
    use serde::Deserialize;

    use crate::charset::latin1_bytes;

    pub fn serialize<S: Serializer>(pair: &Option<(u8, u8)>, serializer: S) -> Result<S::Ok, S::Error> {
        match pair {
            Some((start, end)) => {
                let text: String = [char::from(*start), char::from(*end)].iter().collect();
                serializer.serialize_str(&text)
            },
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<(u8, u8)>, D::Error> {
        let text = String::deserialize(deserializer)?;
        let bytes = latin1_bytes(&text).map_err(de::Error::custom)?;
        match bytes.as_slice() {
            [] => Ok(None),
            [start, end] => Ok(Some((*start, *end))),
            _ => Err(de::Error::custom(format!(
                "comment pair must be empty or exactly two characters, got {:?}",
                text
            ))),
        }
    }
}
