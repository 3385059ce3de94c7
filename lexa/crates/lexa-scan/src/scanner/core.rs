//! Core scanner implementation.
//!
//! This module contains the Scanner struct, input attachment, the
//! advance/peek state machine and the per-token dispatch.

use std::fs::File;
use std::io::Read;

use lexa_util::{DiagnosticBuilder, Handler, Span};
use tracing::{debug, trace, warn};

use crate::config::ScannerConfig;
use crate::cursor::Cursor;
use crate::error::ErrorKind;
use crate::symbol::SymbolTable;
use crate::token::{Token, TokenKind};

/// A configurable lexical scanner.
///
/// The scanner turns one attached input into a stream of [`Token`]s,
/// classifying text according to its [`ScannerConfig`]. Identifiers are
/// resolved against a scoped symbol table whose values have type `V`.
///
/// It keeps exactly one token of lookahead: [`peek`](Self::peek) scans the
/// next token once and holds it until [`advance`](Self::advance) takes it.
///
/// # Example
///
/// ```
/// use lexa_scan::{Scanner, ScannerConfig, TokenKind};
///
/// let mut scanner: Scanner<'_, u32> = Scanner::new(ScannerConfig::default());
/// scanner.add_symbol("width", 1);
/// scanner.attach_text("width = 640");
///
/// assert_eq!(scanner.advance().kind, TokenKind::Symbol(1));
/// assert_eq!(scanner.peek().kind, TokenKind::EqualSign);
/// assert_eq!(scanner.current_token().kind, TokenKind::Symbol(1));
/// assert_eq!(scanner.advance().kind, TokenKind::EqualSign);
/// assert_eq!(scanner.advance().kind, TokenKind::Int(640));
/// assert!(scanner.advance().is_eof());
/// ```
pub struct Scanner<'a, V> {
    pub(super) config: ScannerConfig,
    pub(super) cursor: Cursor<'a>,
    pub(super) symbols: SymbolTable<V>,
    pub(super) scope_id: u32,

    /// Most recently advanced-to token.
    pub(super) current: Token<V>,
    /// Token scanned by `peek` but not yet advanced to.
    pending: Option<Token<V>>,

    pub(super) error_count: u32,
    scan_reads: usize,
    pub(super) input_name: Option<String>,
    pub(super) handler: Option<&'a Handler>,

    /// Byte offset where the token being scanned starts.
    token_start: usize,
    token_start_line: u32,
    token_start_column: u32,
}

impl<'a, V> Scanner<'a, V> {
    /// Creates a scanner with no input attached.
    pub fn new(config: ScannerConfig) -> Self {
        let symbols = SymbolTable::new(config.case_sensitive);
        Self {
            config,
            cursor: Cursor::empty(),
            symbols,
            scope_id: 0,
            current: Token::none(),
            pending: None,
            error_count: 0,
            scan_reads: 0,
            input_name: None,
            handler: None,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Creates a scanner that reports errors to `handler`.
    pub fn with_handler(config: ScannerConfig, handler: &'a Handler) -> Self {
        let mut scanner = Self::new(config);
        scanner.handler = Some(handler);
        scanner
    }

    /// Routes future diagnostics to `handler`.
    pub fn set_handler(&mut self, handler: &'a Handler) {
        self.handler = Some(handler);
    }

    /// The configuration this scanner was built with.
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Scans `bytes`. Any previous input is released and the position is
    /// reset to line 1, column 1.
    pub fn attach_buffer(&mut self, bytes: &'a [u8]) {
        self.attach(Cursor::from_bytes(bytes));
    }

    /// Scans `text`.
    pub fn attach_text(&mut self, text: &'a str) {
        self.attach_buffer(text.as_bytes());
    }

    /// Scans bytes pulled from `reader`. Read errors end the input.
    pub fn attach_reader<R: Read + 'a>(&mut self, reader: R) {
        self.attach(Cursor::from_reader(Box::new(reader)));
    }

    /// Scans an open file; the scanner owns it until the next attach or drop.
    pub fn attach_file(&mut self, file: File) {
        self.attach_reader(file);
    }

    /// Scans from a duplicate of `fd`. The caller keeps ownership of the
    /// original descriptor.
    #[cfg(unix)]
    pub fn attach_fd(&mut self, fd: std::os::fd::BorrowedFd<'_>) -> std::io::Result<()> {
        let owned = fd.try_clone_to_owned()?;
        self.attach_file(File::from(owned));
        Ok(())
    }

    fn attach(&mut self, cursor: Cursor<'a>) {
        self.cursor = cursor;
        self.current = Token::none();
        self.pending = None;
        self.token_start = 0;
        self.token_start_line = 1;
        self.token_start_column = 1;
        debug!(
            input = self.cursor.input_kind(),
            name = self.origin(),
            "attached scanner input"
        );
    }

    /// Names the input in diagnostics.
    pub fn set_input_name(&mut self, name: impl Into<String>) {
        self.input_name = Some(name.into());
    }

    /// The name given with [`set_input_name`](Self::set_input_name).
    pub fn input_name(&self) -> Option<&str> {
        self.input_name.as_deref()
    }

    pub(super) fn origin(&self) -> &str {
        self.input_name.as_deref().unwrap_or("<input>")
    }

    /// The most recently advanced-to token, or [`TokenKind::None`] before the
    /// first advance.
    pub fn current_token(&self) -> &Token<V> {
        &self.current
    }

    /// Line where the current token starts.
    pub fn current_line(&self) -> u32 {
        self.current.line()
    }

    /// Column where the current token starts.
    pub fn current_position(&self) -> u32 {
        self.current.column()
    }

    /// Returns `true` once the current token is [`TokenKind::Eof`].
    pub fn is_at_end(&self) -> bool {
        self.current.is_eof()
    }

    /// Lexical and caller-reported errors so far.
    pub fn error_count(&self) -> u32 {
        self.error_count
    }

    /// The configured error threshold.
    pub fn max_parse_errors(&self) -> u32 {
        self.config.max_parse_errors
    }

    /// Returns `true` once the error count has reached the threshold.
    pub fn error_threshold_reached(&self) -> bool {
        self.error_count >= self.config.max_parse_errors
    }

    /// Number of tokens actually scanned from the input. A peeked token that
    /// is later advanced to counts once.
    pub fn scan_reads(&self) -> usize {
        self.scan_reads
    }

    pub(super) fn count_error(&mut self) {
        self.error_count = self.error_count.saturating_add(1);
        if self.error_count == self.config.max_parse_errors {
            warn!(
                errors = self.error_count,
                input = self.origin(),
                "scanner error threshold reached"
            );
        }
    }

    fn report_lexical_error(&mut self, kind: ErrorKind, span: Span) {
        self.count_error();
        if let Some(handler) = self.handler {
            DiagnosticBuilder::error(kind.to_string())
                .code(kind.code())
                .span(span)
                .emit(handler);
        }
    }

    fn mark_token_start(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    fn skip_characters(&mut self) {
        while let Some(b) = self.cursor.peek() {
            if !self.config.cset_skip_characters.contains(b) {
                break;
            }
            self.cursor.bump();
        }
    }

    /// The token for a single byte, honouring `char_2_token`.
    pub(super) fn char_token(&self, byte: u8) -> TokenKind<V> {
        let c = char::from(byte);
        if self.config.char_2_token {
            TokenKind::from_char(c)
        } else {
            TokenKind::Char(c)
        }
    }
}

impl<'a, V: Clone> Scanner<'a, V> {
    /// Moves to the next token and returns it.
    ///
    /// A token already obtained by [`peek`](Self::peek) is taken without
    /// scanning again. At the end of input every call returns
    /// [`TokenKind::Eof`].
    pub fn advance(&mut self) -> Token<V> {
        self.current = match self.pending.take() {
            Some(token) => token,
            None => self.scan_token(),
        };
        self.current.clone()
    }

    /// Returns the next token without moving to it. Repeated calls return the
    /// same token until the next [`advance`](Self::advance).
    pub fn peek(&mut self) -> Token<V> {
        if let Some(token) = &self.pending {
            return token.clone();
        }
        let token = self.scan_token();
        self.pending = Some(token.clone());
        token
    }

    fn scan_token(&mut self) -> Token<V> {
        self.scan_reads += 1;

        let kind = loop {
            self.skip_characters();
            self.mark_token_start();
            if let Some(kind) = self.lex_token() {
                break kind;
            }
        };

        let token = Token::new(kind, self.token_span());
        if let TokenKind::Error(kind) = token.kind {
            self.report_lexical_error(kind, token.span);
        }
        trace!(
            kind = token.kind.name(),
            line = token.span.line,
            column = token.span.column,
            "scanned token"
        );
        token
    }

    /// Scans one token starting at the cursor. Returns `None` when a skipped
    /// comment was consumed instead.
    fn lex_token(&mut self) -> Option<TokenKind<V>> {
        let Some(c) = self.cursor.peek() else {
            return Some(TokenKind::Eof);
        };
        let next = self.cursor.peek_at(1);

        if let Some((start, end)) = self.config.cpair_comment_single {
            if c == start {
                return self.lex_comment_single(end);
            }
        }
        if c == b'/' && next == Some(b'*') && self.config.scan_comment_multi {
            return self.lex_comment_multi();
        }

        match c {
            b'\'' if self.config.scan_string_sq => return Some(self.lex_string_single()),
            b'"' if self.config.scan_string_dq => return Some(self.lex_string_double()),
            b'0'..=b'9' => return Some(self.lex_number()),
            b'.' if self.config.scan_float && next.is_some_and(|b| b.is_ascii_digit()) => {
                return Some(self.lex_number());
            },
            b'$' if self.config.scan_hex_dollar && next.is_some_and(|b| b.is_ascii_hexdigit()) => {
                return Some(self.lex_number());
            },
            _ => {},
        }

        if self.config.cset_identifier_first.contains(c) {
            return Some(self.lex_identifier());
        }

        self.cursor.bump();
        if self.config.cset_char_tokens.contains(c) {
            Some(self.char_token(c))
        } else {
            Some(TokenKind::Error(ErrorKind::Unknown))
        }
    }
}

impl<'a, V: Clone> Iterator for Scanner<'a, V> {
    type Item = Token<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.advance();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl<'a, V> Default for Scanner<'a, V> {
    fn default() -> Self {
        Self::new(ScannerConfig::default())
    }
}
