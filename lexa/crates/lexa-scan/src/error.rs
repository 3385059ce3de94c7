//! Error types for lexa-scan
//!
//! Lexical errors are not returned through `Result`: they travel in-band as
//! [`TokenKind::Error`](crate::TokenKind::Error) tokens carrying an
//! [`ErrorKind`], and scanning always continues after them. Only loading a
//! configuration can fail outright, with a [`ConfigError`].

use std::path::PathBuf;

use lexa_util::DiagnosticCode;
use thiserror::Error;

/// The kind of a lexical error token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// A byte that starts no token.
    #[error("unknown character")]
    Unknown,

    /// Input ended where more was required.
    #[error("unexpected end of file")]
    UnexpEof,

    /// Input ended inside a string literal.
    #[error("unterminated string constant")]
    UnexpEofInString,

    /// Input ended inside a multi-line comment.
    #[error("unterminated comment")]
    UnexpEofInComment,

    /// A letter that is no digit at all inside a number.
    #[error("non-digit in constant")]
    NonDigitInConst,

    /// A digit that is out of range for the literal's radix.
    #[error("digit out of radix")]
    DigitRadix,

    /// A fraction in a hex or binary literal.
    #[error("non-decimal floating point number")]
    FloatRadix,

    /// A float with a second point or an empty exponent.
    #[error("malformed floating point number")]
    FloatMalformed,

    /// An integer literal larger than `u64::MAX`.
    #[error("integer constant out of range")]
    IntegerOverflow,
}

impl ErrorKind {
    /// Every kind, in code order.
    pub const ALL: [ErrorKind; 9] = [
        ErrorKind::Unknown,
        ErrorKind::UnexpEof,
        ErrorKind::UnexpEofInString,
        ErrorKind::UnexpEofInComment,
        ErrorKind::NonDigitInConst,
        ErrorKind::DigitRadix,
        ErrorKind::FloatRadix,
        ErrorKind::FloatMalformed,
        ErrorKind::IntegerOverflow,
    ];

    /// The diagnostic code reported for this kind.
    pub const fn code(self) -> DiagnosticCode {
        match self {
            ErrorKind::Unknown => DiagnosticCode::E_SCAN_UNKNOWN,
            ErrorKind::UnexpEof => DiagnosticCode::E_SCAN_UNEXP_EOF,
            ErrorKind::UnexpEofInString => DiagnosticCode::E_SCAN_UNEXP_EOF_IN_STRING,
            ErrorKind::UnexpEofInComment => DiagnosticCode::E_SCAN_UNEXP_EOF_IN_COMMENT,
            ErrorKind::NonDigitInConst => DiagnosticCode::E_SCAN_NON_DIGIT_IN_CONST,
            ErrorKind::DigitRadix => DiagnosticCode::E_SCAN_DIGIT_RADIX,
            ErrorKind::FloatRadix => DiagnosticCode::E_SCAN_FLOAT_RADIX,
            ErrorKind::FloatMalformed => DiagnosticCode::E_SCAN_FLOAT_MALFORMED,
            ErrorKind::IntegerOverflow => DiagnosticCode::E_SCAN_INTEGER_OVERFLOW,
        }
    }
}

/// Error type for loading a [`ScannerConfig`](crate::ScannerConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The TOML text is not a valid configuration
    #[error("invalid scanner configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be written as TOML
    #[error("failed to serialize scanner configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
