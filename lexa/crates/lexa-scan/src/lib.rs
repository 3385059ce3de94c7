//! lexa-scan - A configurable lexical scanner
//!
//! This crate provides a general-purpose tokenizer for configuration files,
//! small languages and data formats. What counts as whitespace, identifiers,
//! comments, numbers and strings is decided by a [`ScannerConfig`] rather
//! than hard-wired, and identifiers can be resolved against a scoped symbol
//! table holding caller-defined values.
//!
//! # Example Usage
//!
//! ```
//! use lexa_scan::{Scanner, ScannerConfig, TokenKind};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Key {
//!     Width,
//!     Title,
//! }
//!
//! let mut scanner = Scanner::new(ScannerConfig::default());
//! scanner.add_symbol("width", Key::Width);
//! scanner.add_symbol("title", Key::Title);
//! scanner.attach_text("width = 640 # pixels\ntitle = \"Main\"");
//!
//! let kinds: Vec<_> = scanner.map(|token| token.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Symbol(Key::Width),
//!         TokenKind::EqualSign,
//!         TokenKind::Int(640),
//!         TokenKind::Symbol(Key::Title),
//!         TokenKind::EqualSign,
//!         TokenKind::String("Main".to_string()),
//!     ]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`config`] - Scanner configuration and its TOML form
//! - [`charset`] - Byte character sets used by the configuration
//! - [`token`] - Token definitions
//! - [`cursor`] - Byte cursor over a buffer or a reader
//! - [`symbol`] - Scoped symbol table
//! - [`error`] - Lexical error kinds and configuration errors
//!
//! # Errors
//!
//! Lexical errors never stop the scanner. Each one is returned in-band as a
//! [`TokenKind::Error`] token, counted, and reported to the
//! [`Handler`](lexa_util::Handler) given to [`Scanner::with_handler`].
//! Scanning resumes after the offending text.

#![warn(missing_docs)]

pub mod charset;
pub mod config;
pub mod cursor;
pub mod error;
mod scanner;
pub mod symbol;
pub mod token;

pub use charset::CharSet;
pub use config::ScannerConfig;
pub use error::{ConfigError, ConfigResult, ErrorKind};
pub use scanner::Scanner;
pub use symbol::SymbolTable;
pub use token::{Token, TokenKind};

#[cfg(test)]
mod edge_cases;
