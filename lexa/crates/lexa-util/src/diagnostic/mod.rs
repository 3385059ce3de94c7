//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! Scanners report lexical errors both in-band, as error tokens, and
//! out-of-band through a [`Handler`] that collects [`Diagnostic`]s so a tool
//! can present every problem of an input at once.
//!
//! # Examples
//!
//! ```
//! use lexa_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use lexa_util::span::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unknown character")
//!     .code(DiagnosticCode::E_SCAN_UNKNOWN)
//!     .span(Span::new(3, 4, 1, 4))
//!     .emit(&handler);
//!
//! let rendered = handler.diagnostics()[0].render("input.txt");
//! assert_eq!(rendered, "input.txt:1:4: error[E1001]: unknown character");
//! ```

mod builder;
mod codes;
mod level;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use level::Level;

use std::cell::RefCell;
use std::fmt::Write as _;

use crate::span::Span;

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a source snippet
    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Render the diagnostic in `origin:line:col: level[code]: message`
    /// form, followed by any snippets, notes and helps on their own lines.
    ///
    /// The location is omitted for [`Span::DUMMY`].
    pub fn render(&self, origin: &str) -> String {
        let mut out = String::new();
        if self.span.is_dummy() {
            let _ = write!(out, "{}: ", origin);
        } else {
            let _ = write!(out, "{}:{}: ", origin, self.span);
        }
        match self.code {
            Some(code) => {
                let _ = write!(out, "{}[{}]: {}", self.level, code, self.message);
            },
            None => {
                let _ = write!(out, "{}: {}", self.level, self.message);
            },
        }
        for snippet in &self.snippets {
            let _ = write!(out, "\n{}", snippet.format());
        }
        for note in &self.notes {
            let _ = write!(out, "\n  = note: {}", note);
        }
        for help in &self.helps {
            let _ = write!(out, "\n  = help: {}", help);
        }
        out
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` uses interior mutability so a scanner can hold a shared
/// reference to it while the caller inspects counts between tokens.
///
/// # Examples
///
/// ```
/// use lexa_util::diagnostic::{Diagnostic, Handler};
/// use lexa_util::span::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("bad digit", Span::DUMMY));
/// assert!(handler.has_errors());
/// assert_eq!(handler.error_count(), 1);
/// ```
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level.is_error())
            .count()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// Get a copy of all diagnostics in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Remove and return all diagnostics
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
