//! Identifier scanning and symbol resolution.

use crate::token::TokenKind;
use crate::Scanner;

impl<'a, V: Clone> Scanner<'a, V> {
    /// Scans an identifier starting at a byte of `cset_identifier_first`.
    ///
    /// A first byte that does not start an identifier (identifiers disabled,
    /// or a lone byte without `scan_identifier_1char`) is returned as a
    /// single-character token.
    pub(super) fn lex_identifier(&mut self) -> TokenKind<V> {
        let Some(first) = self.cursor.bump() else {
            return TokenKind::Eof;
        };

        let continues = self
            .cursor
            .peek()
            .is_some_and(|b| self.config.cset_identifier_nth.contains(b));
        if !self.config.scan_identifier || (!continues && !self.config.scan_identifier_1char) {
            return self.char_token(first);
        }

        let mut text = vec![first];
        while let Some(b) = self.cursor.peek() {
            if !self.config.cset_identifier_nth.contains(b) {
                break;
            }
            text.push(b);
            self.cursor.bump();
        }

        self.resolve_identifier(String::from_utf8_lossy(&text).into_owned())
    }

    /// Classifies a scanned identifier: symbol, `NULL`, identifier or string.
    fn resolve_identifier(&self, name: String) -> TokenKind<V> {
        if self.config.scan_symbols && self.config.symbol_2_token {
            if let Some(value) =
                self.symbols
                    .resolve(self.scope_id, &name, self.config.scope_0_fallback)
            {
                return TokenKind::Symbol(value.clone());
            }
        }

        if self.config.scan_identifier_null && self.is_null_identifier(&name) {
            return TokenKind::IdentifierNull;
        }

        if self.config.identifier_2_string {
            TokenKind::String(name)
        } else {
            TokenKind::Identifier(name)
        }
    }

    fn is_null_identifier(&self, name: &str) -> bool {
        if self.config.case_sensitive {
            name == "NULL"
        } else {
            name.eq_ignore_ascii_case("NULL")
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Scanner, ScannerConfig, TokenKind};

    fn kinds(config: ScannerConfig, text: &str) -> Vec<TokenKind<u32>> {
        let mut scanner = Scanner::new(config);
        scanner.attach_text(text);
        scanner.map(|t| t.kind).collect()
    }

    #[test]
    fn test_plain_identifiers() {
        assert_eq!(
            kinds(ScannerConfig::default(), "foo _bar baz9"),
            vec![
                TokenKind::Identifier("foo".into()),
                TokenKind::Identifier("_bar".into()),
                TokenKind::Identifier("baz9".into()),
            ]
        );
    }

    #[test]
    fn test_utf8_continues_identifier() {
        assert_eq!(
            kinds(ScannerConfig::default(), "caf\u{e9} x"),
            vec![
                TokenKind::Identifier("caf\u{e9}".into()),
                TokenKind::Identifier("x".into()),
            ]
        );
    }

    #[test]
    fn test_one_char_identifier_disabled() {
        let config = ScannerConfig {
            scan_identifier_1char: false,
            ..ScannerConfig::default()
        };
        assert_eq!(
            kinds(config, "x xy"),
            vec![TokenKind::Single('x'), TokenKind::Identifier("xy".into())]
        );
    }

    #[test]
    fn test_identifiers_disabled() {
        let config = ScannerConfig {
            scan_identifier: false,
            char_2_token: false,
            ..ScannerConfig::default()
        };
        assert_eq!(kinds(config, "ab"), vec![TokenKind::Char('a'), TokenKind::Char('b')]);
    }

    #[test]
    fn test_identifier_2_string() {
        let config = ScannerConfig {
            identifier_2_string: true,
            ..ScannerConfig::default()
        };
        assert_eq!(kinds(config, "name"), vec![TokenKind::String("name".into())]);
    }

    #[test]
    fn test_null_identifier() {
        let config = ScannerConfig {
            scan_identifier_null: true,
            ..ScannerConfig::default()
        };
        assert_eq!(
            kinds(config.clone(), "NULL null"),
            vec![TokenKind::IdentifierNull, TokenKind::IdentifierNull]
        );

        let strict = ScannerConfig {
            case_sensitive: true,
            ..config
        };
        assert_eq!(
            kinds(strict, "NULL null"),
            vec![TokenKind::IdentifierNull, TokenKind::Identifier("null".into())]
        );
    }

    #[test]
    fn test_symbol_toggles() {
        for (scan_symbols, symbol_2_token, expect_symbol) in
            [(true, true, true), (true, false, false), (false, true, false)]
        {
            let mut scanner: Scanner<'_, u32> = Scanner::new(ScannerConfig {
                scan_symbols,
                symbol_2_token,
                ..ScannerConfig::default()
            });
            scanner.add_symbol("key", 9);
            scanner.attach_text("key");
            let kind = scanner.advance().kind;
            assert_eq!(kind == TokenKind::Symbol(9), expect_symbol, "{:?}", kind);
        }
    }
}
