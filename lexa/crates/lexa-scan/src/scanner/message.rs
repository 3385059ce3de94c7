//! Caller-level messages.
//!
//! A parser built on the scanner reports its own errors at the current
//! token through the same channel as lexical errors: the attached
//! [`Handler`](lexa_util::Handler) if there is one, otherwise the `tracing`
//! log.

use lexa_util::{Diagnostic, DiagnosticCode, Level};
use tracing::{error, warn};

use crate::Scanner;

impl<'a, V> Scanner<'a, V> {
    /// Reports an error at the current token and counts it.
    pub fn error(&mut self, message: impl Into<String>) {
        self.count_error();
        self.report(Diagnostic::error(message, self.current.span).with_code(DiagnosticCode::E_USER));
    }

    /// Reports a warning at the current token.
    pub fn warn(&self, message: impl Into<String>) {
        self.report(Diagnostic::warning(message, self.current.span).with_code(DiagnosticCode::W_USER));
    }

    /// Reports that the current token is not what the caller expected.
    ///
    /// The message reads "unexpected {current}, expected {expected}", with
    /// `message` attached as a note. As an error it is counted like
    /// [`error`](Self::error).
    pub fn unexpected_token(&mut self, expected: &str, message: Option<&str>, is_error: bool) {
        let text = format!(
            "unexpected {}, expected {}",
            self.current.kind.describe(),
            expected
        );
        let (level, code) = if is_error {
            self.count_error();
            (Level::Error, DiagnosticCode::E_UNEXPECTED_TOKEN)
        } else {
            (Level::Warning, DiagnosticCode::W_UNEXPECTED_TOKEN)
        };

        let mut diagnostic = Diagnostic::new(level, text, self.current.span).with_code(code);
        if let Some(message) = message {
            diagnostic = diagnostic.with_note(message);
        }
        self.report(diagnostic);
    }

    fn report(&self, diagnostic: Diagnostic) {
        match self.handler {
            Some(handler) => handler.emit_diagnostic(diagnostic),
            None if diagnostic.level.is_error() => error!("{}", diagnostic.render(self.origin())),
            None => warn!("{}", diagnostic.render(self.origin())),
        }
    }
}

#[cfg(test)]
mod tests {
    use lexa_util::{DiagnosticCode, Handler, Level};

    use crate::{Scanner, ScannerConfig};

    fn scanner<'a>(handler: &'a Handler, text: &'a str) -> Scanner<'a, u32> {
        let mut scanner = Scanner::with_handler(ScannerConfig::default(), handler);
        scanner.attach_text(text);
        scanner
    }

    #[test]
    fn test_error_counts_and_reports() {
        let handler = Handler::new();
        let mut scanner = scanner(&handler, "\n  key");
        scanner.advance();
        scanner.error("bad key");

        assert_eq!(scanner.error_count(), 1);
        let diag = &handler.diagnostics()[0];
        assert_eq!(diag.code, Some(DiagnosticCode::E_USER));
        assert_eq!((diag.span.line, diag.span.column), (2, 3));
    }

    #[test]
    fn test_warn_does_not_count() {
        let handler = Handler::new();
        let mut scanner = scanner(&handler, "x");
        scanner.advance();
        scanner.warn("odd");
        assert_eq!(scanner.error_count(), 0);
        assert_eq!(handler.warning_count(), 1);
    }

    #[test]
    fn test_unexpected_token_message() {
        let handler = Handler::new();
        let mut scanner = scanner(&handler, "width");
        scanner.advance();
        scanner.unexpected_token("number", Some("sizes are numeric"), true);

        let diag = &handler.diagnostics()[0];
        assert_eq!(diag.message, "unexpected identifier `width`, expected number");
        assert_eq!(diag.notes, vec!["sizes are numeric"]);
        assert_eq!(diag.code, Some(DiagnosticCode::E_UNEXPECTED_TOKEN));
        assert_eq!(scanner.error_count(), 1);
    }

    #[test]
    fn test_unexpected_token_as_warning() {
        let handler = Handler::new();
        let mut scanner = scanner(&handler, "");
        scanner.advance();
        scanner.unexpected_token("`}`", None, false);

        let diag = &handler.diagnostics()[0];
        assert_eq!(diag.level, Level::Warning);
        assert_eq!(diag.message, "unexpected end of file, expected `}`");
        assert_eq!(scanner.error_count(), 0);
    }

    #[test]
    fn test_messages_without_handler_do_not_panic() {
        let mut scanner: Scanner<'_, u32> = Scanner::default();
        scanner.attach_text("x");
        scanner.advance();
        scanner.error("logged");
        scanner.warn("logged");
        assert_eq!(scanner.error_count(), 1);
    }
}
