//! String literal scanning.
//!
//! Single-quoted strings are taken literally. Double-quoted strings process
//! escapes:
//!
//! | Escape | Meaning |
//! |---|---|
//! | `\n` `\t` `\r` `\b` `\f` | newline, tab, carriage return, backspace, form feed |
//! | `\\` `\"` `\'` | the character itself |
//! | `\NNN` | one to three octal digits, one byte |
//! | `\xNN` | one or two hex digits, one byte |
//! | `\u{H...}` | a Unicode scalar value |
//!
//! Any other escaped character stands for itself. Both kinds may span lines.

use crate::error::ErrorKind;
use crate::token::TokenKind;
use crate::Scanner;

impl<'a, V: Clone> Scanner<'a, V> {
    /// Scans `'...'`.
    pub(super) fn lex_string_single(&mut self) -> TokenKind<V> {
        self.cursor.bump();

        let mut text = Vec::new();
        loop {
            match self.cursor.bump() {
                None => return TokenKind::Error(ErrorKind::UnexpEofInString),
                Some(b'\'') => break,
                Some(b) => text.push(b),
            }
        }
        TokenKind::String(String::from_utf8_lossy(&text).into_owned())
    }

    /// Scans `"..."` with escape processing.
    pub(super) fn lex_string_double(&mut self) -> TokenKind<V> {
        self.cursor.bump();

        let mut text = Vec::new();
        loop {
            match self.cursor.bump() {
                None => return TokenKind::Error(ErrorKind::UnexpEofInString),
                Some(b'"') => break,
                Some(b'\\') => {
                    if !self.lex_escape(&mut text) {
                        return TokenKind::Error(ErrorKind::UnexpEofInString);
                    }
                },
                Some(b) => text.push(b),
            }
        }
        TokenKind::String(String::from_utf8_lossy(&text).into_owned())
    }

    /// Decodes the escape after a backslash into `out`. Returns `false` if
    /// the input ends right after the backslash.
    fn lex_escape(&mut self, out: &mut Vec<u8>) -> bool {
        let Some(b) = self.cursor.bump() else {
            return false;
        };

        match b {
            b'n' => out.push(b'\n'),
            b't' => out.push(b'\t'),
            b'r' => out.push(b'\r'),
            b'b' => out.push(0x08),
            b'f' => out.push(0x0C),
            b'0'..=b'7' => {
                let mut value = u32::from(b - b'0');
                for _ in 0..2 {
                    match self.cursor.peek() {
                        Some(d @ b'0'..=b'7') => {
                            value = value * 8 + u32::from(d - b'0');
                            self.cursor.bump();
                        },
                        _ => break,
                    }
                }
                out.push((value & 0xFF) as u8);
            },
            b'x' => {
                let mut value = 0u32;
                let mut digits = 0;
                while digits < 2 {
                    match self.cursor.peek().and_then(|d| char::from(d).to_digit(16)) {
                        Some(d) => {
                            value = value * 16 + d;
                            digits += 1;
                            self.cursor.bump();
                        },
                        None => break,
                    }
                }
                if digits == 0 {
                    out.push(b'x');
                } else {
                    out.push(value as u8);
                }
            },
            b'u' if self.cursor.peek() == Some(b'{') => self.lex_unicode_escape(out),
            other => out.push(other),
        }
        true
    }

    /// Decodes `{H...}` after `\u`. A malformed escape is kept literally.
    fn lex_unicode_escape(&mut self, out: &mut Vec<u8>) {
        self.cursor.bump();

        let mut raw = String::new();
        let mut closed = false;
        while let Some(d) = self.cursor.peek() {
            if d == b'}' {
                self.cursor.bump();
                closed = true;
                break;
            }
            if !d.is_ascii_hexdigit() || raw.len() == 6 {
                break;
            }
            raw.push(char::from(d));
            self.cursor.bump();
        }

        let decoded = if closed {
            u32::from_str_radix(&raw, 16).ok().and_then(char::from_u32)
        } else {
            None
        };
        match decoded {
            Some(c) => {
                let mut buf = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            },
            None => {
                out.extend_from_slice(b"u{");
                out.extend_from_slice(raw.as_bytes());
                if closed {
                    out.push(b'}');
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{ErrorKind, Scanner, ScannerConfig, TokenKind};

    fn first(text: &str) -> TokenKind<u32> {
        let mut scanner = Scanner::default();
        scanner.attach_text(text);
        scanner.advance().kind
    }

    fn string(s: &str) -> TokenKind<u32> {
        TokenKind::String(s.to_string())
    }

    #[test]
    fn test_single_quoted_is_literal() {
        assert_eq!(first(r"'a\nb'"), string(r"a\nb"));
    }

    #[test]
    fn test_double_quoted_simple_escapes() {
        assert_eq!(first(r#""a\tb\n\\\"\'""#), string("a\tb\n\\\"'"));
        assert_eq!(first(r#""\b\f\r""#), string("\u{8}\u{c}\r"));
    }

    #[test]
    fn test_octal_escape() {
        assert_eq!(first(r#""\101\1012""#), string("AA2"));
        assert_eq!(first(r#""\0""#), string("\0"));
    }

    #[test]
    fn test_hex_escape() {
        assert_eq!(first(r#""\x41\x4a""#), string("AJ"));
        assert_eq!(first(r#""\xg""#), string("xg"));
        assert_eq!(first(r#""\xC3\xA9""#), string("\u{e9}"));
    }

    #[test]
    fn test_unicode_escape() {
        assert_eq!(first(r#""\u{1F600}""#), string("\u{1F600}"));
        assert_eq!(first(r#""\u{zz}""#), string("u{zz}"));
        assert_eq!(first(r#""\u{D800}""#), string("u{D800}"));
        assert_eq!(first(r#""\u41""#), string("u41"));
    }

    #[test]
    fn test_unknown_escape_is_literal() {
        assert_eq!(first(r#""\q""#), string("q"));
    }

    #[test]
    fn test_multiline_string() {
        let mut scanner: Scanner<'_, u32> = Scanner::default();
        scanner.attach_text("'a\nb' x");
        assert_eq!(scanner.advance().kind, string("a\nb"));
        assert_eq!(scanner.advance().line(), 2);
    }

    #[test]
    fn test_unterminated_strings() {
        let err = TokenKind::Error(ErrorKind::UnexpEofInString);
        assert_eq!(first("'abc"), err);
        assert_eq!(first("\"abc"), err);
        assert_eq!(first("\"abc\\"), err);
    }

    #[test]
    fn test_disabled_quotes_are_char_tokens() {
        let mut scanner: Scanner<'_, u32> = Scanner::new(ScannerConfig {
            scan_string_sq: false,
            ..ScannerConfig::default()
        });
        scanner.attach_text("'x'");
        let kinds: Vec<_> = scanner.map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Single('\''),
                TokenKind::Identifier("x".into()),
                TokenKind::Single('\''),
            ]
        );
    }
}
