//! Common types and utilities for lexat commands.
//!
//! This module provides the token record printed by `dump`, input helpers
//! shared by every command, and the snippet extraction used by `check`.

use std::fs::File;
use std::path::Path;

use lexa_scan::{Token, TokenKind};
use lexa_util::SourceSnippet;
use serde::Serialize;

use crate::config::Config;
use crate::error::{LexatError, Result};

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

// ============================================================================
// Token Records
// ============================================================================

/// One scanned token in printable form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenRecord {
    /// Line of the token's first character.
    pub line: u32,
    /// Column of the token's first character.
    pub column: u32,
    /// Variant name, such as `identifier` or `int`.
    pub kind: &'static str,
    /// Payload, if the variant carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl TokenRecord {
    /// Build a record, naming symbols through the configured symbol table.
    pub fn from_token(token: &Token<u32>, config: &Config) -> Self {
        Self {
            line: token.line(),
            column: token.column(),
            kind: token.kind.name(),
            value: token_value(&token.kind, config),
        }
    }

    /// `line:column kind value` text form.
    pub fn to_line(&self) -> String {
        match &self.value {
            Some(value) => format!("{}:{} {} {}", self.line, self.column, self.kind, value),
            None => format!("{}:{} {}", self.line, self.column, self.kind),
        }
    }
}

/// The printable payload of a token kind.
pub fn token_value(kind: &TokenKind<u32>, config: &Config) -> Option<String> {
    match kind {
        TokenKind::Error(error) => Some(error.to_string()),
        TokenKind::Binary(v) => Some(format!("{:#b}", v)),
        TokenKind::Octal(v) => Some(format!("0{:o}", v)),
        TokenKind::Int(v) => Some(v.to_string()),
        TokenKind::Hex(v) => Some(format!("{:#x}", v)),
        TokenKind::Float(v) => Some(v.to_string()),
        TokenKind::String(s) | TokenKind::Identifier(s) => Some(format!("{:?}", s)),
        TokenKind::CommentSingle(s) | TokenKind::CommentMulti(s) => Some(format!("{:?}", s)),
        TokenKind::Symbol(v) => Some(match config.symbol_name(*v) {
            Some(name) => format!("{} ({})", name, v),
            None => v.to_string(),
        }),
        other => other.as_char().map(|c| format!("{:?}", c)),
    }
}

// ============================================================================
// Input Utilities
// ============================================================================

/// Name used for `path` in output and diagnostics.
pub fn display_name(path: &Path) -> String {
    if path.as_os_str() == STDIN_PATH {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

/// Open `path` for streaming.
pub fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| LexatError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the whole of `path`, or standard input for `-`.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    let result = if path.as_os_str() == STDIN_PATH {
        let mut bytes = Vec::new();
        std::io::Read::read_to_end(&mut std::io::stdin().lock(), &mut bytes).map(|_| bytes)
    } else {
        std::fs::read(path)
    };
    result.map_err(|source| LexatError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

// ============================================================================
// Snippets
// ============================================================================

/// The source line under `start..end`, with the range underlined.
///
/// `line_number` and `column` are the scanner's position for `start`.
pub fn snippet_for(
    source: &[u8],
    start: usize,
    end: usize,
    line_number: u32,
    column: u32,
) -> SourceSnippet {
    let start = start.min(source.len());
    let line_start = source[..start]
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1);
    let line_end = source[start..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(source.len(), |i| start + i);

    let line = String::from_utf8_lossy(&source[line_start..line_end]);
    let underlined = String::from_utf8_lossy(&source[start..end.clamp(start, line_end)]);
    let column = column as usize;

    SourceSnippet::new(
        line.trim_end_matches('\r'),
        line_number as usize,
        column,
        column + underlined.chars().count(),
        None::<String>,
    )
}
