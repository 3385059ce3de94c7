//! Comment scanning.
//!
//! Handles both comment styles:
//! - Single-line comments, delimited by the configured marker pair
//! - Multi-line comments (`/* ... */`), which do not nest

use crate::error::ErrorKind;
use crate::token::TokenKind;
use crate::Scanner;

impl<'a, V: Clone> Scanner<'a, V> {
    /// Scans a single-line comment through its end marker or end of input.
    ///
    /// Returns `None` when the comment is skipped.
    pub(super) fn lex_comment_single(&mut self, end: u8) -> Option<TokenKind<V>> {
        self.cursor.bump();

        let mut text = Vec::new();
        while let Some(b) = self.cursor.bump() {
            if b == end {
                break;
            }
            text.push(b);
        }

        if self.config.skip_comment_single {
            None
        } else {
            Some(TokenKind::CommentSingle(String::from_utf8_lossy(&text).into_owned()))
        }
    }

    /// Scans a `/* ... */` comment. An unterminated comment is an error even
    /// when comments are skipped.
    pub(super) fn lex_comment_multi(&mut self) -> Option<TokenKind<V>> {
        self.cursor.bump();
        self.cursor.bump();

        let mut text = Vec::new();
        loop {
            match self.cursor.bump() {
                None => return Some(TokenKind::Error(ErrorKind::UnexpEofInComment)),
                Some(b'*') if self.cursor.eat(b'/') => break,
                Some(b) => text.push(b),
            }
        }

        if self.config.skip_comment_multi {
            None
        } else {
            Some(TokenKind::CommentMulti(String::from_utf8_lossy(&text).into_owned()))
        }
    }
}
