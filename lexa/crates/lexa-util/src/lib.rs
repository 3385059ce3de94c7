//! lexa-util - Shared foundation types for the lexa scanner workspace
//!
//! This crate holds the pieces that are not specific to scanning itself but
//! that every consumer of a scanner needs:
//!
//! - [`span`] - byte ranges with 1-based line/column positions
//! - [`diagnostic`] - diagnostics, diagnostic codes, and the collecting
//!   [`Handler`](diagnostic::Handler)
//!
//! # Example
//!
//! ```
//! use lexa_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated comment")
//!     .code(DiagnosticCode::E_SCAN_UNEXP_EOF_IN_COMMENT)
//!     .span(Span::new(0, 7, 1, 1))
//!     .emit(&handler);
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use span::Span;

#[cfg(test)]
mod edge_cases;
