//! Number literal scanning.
//!
//! A number is scanned as the maximal run of ASCII alphanumerics, decimal
//! points and exponent signs, then validated as a whole, so malformed input
//! such as `0x1G` or `12ab` becomes one error token rather than a number
//! followed by an identifier.
//!
//! # Number Formats
//!
//! - Decimal: `42`, `0` (without `scan_octal`)
//! - Octal: `017` (with `scan_octal`)
//! - Hexadecimal: `0xFF` (with `scan_hex`), `$FF` (with `scan_hex_dollar`)
//! - Binary: `0b1010` (with `scan_binary`)
//! - Float: `3.14`, `.5`, `1.`, `1e10`, `2.5e-3` (with `scan_float`)

use crate::error::ErrorKind;
use crate::token::TokenKind;
use crate::Scanner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberKind {
    Binary,
    Octal,
    Decimal,
    Hex,
    Float,
}

impl NumberKind {
    fn radix(self) -> u32 {
        match self {
            NumberKind::Binary => 2,
            NumberKind::Octal => 8,
            NumberKind::Decimal | NumberKind::Float => 10,
            NumberKind::Hex => 16,
        }
    }
}

impl<'a, V: Clone> Scanner<'a, V> {
    /// Scans a number starting at a digit, at `.` followed by a digit, or at
    /// `$` followed by a hex digit.
    pub(super) fn lex_number(&mut self) -> TokenKind<V> {
        let mut kind = match self.cursor.peek() {
            Some(b'$') => {
                self.cursor.bump();
                NumberKind::Hex
            },
            // the digit loop consumes the `.` and switches to a float
            Some(b'.') => NumberKind::Decimal,
            Some(b'0') => match self.cursor.peek_at(1) {
                Some(b'x' | b'X') if self.config.scan_hex => {
                    self.cursor.bump();
                    self.cursor.bump();
                    NumberKind::Hex
                },
                Some(b'b' | b'B') if self.config.scan_binary => {
                    self.cursor.bump();
                    self.cursor.bump();
                    NumberKind::Binary
                },
                _ if self.config.scan_octal => NumberKind::Octal,
                _ => NumberKind::Decimal,
            },
            _ => NumberKind::Decimal,
        };

        if self.cursor.is_at_end() {
            // only reachable right after a `0x` or `0b` prefix
            return TokenKind::Error(ErrorKind::UnexpEof);
        }

        let mut digits = Vec::new();
        let mut error = None;
        while let Some(b) = self.cursor.peek() {
            match b {
                b'.' if self.config.scan_float => match kind {
                    NumberKind::Octal | NumberKind::Decimal => kind = NumberKind::Float,
                    NumberKind::Float => {
                        error.get_or_insert(ErrorKind::FloatMalformed);
                    },
                    NumberKind::Hex | NumberKind::Binary => {
                        error.get_or_insert(ErrorKind::FloatRadix);
                    },
                },
                b'e' | b'E'
                    if self.config.scan_float
                        && !matches!(kind, NumberKind::Hex | NumberKind::Binary) =>
                {
                    kind = NumberKind::Float;
                    digits.push(b);
                    self.cursor.bump();
                    if let Some(sign @ (b'+' | b'-')) = self.cursor.peek() {
                        digits.push(sign);
                        self.cursor.bump();
                    }
                    continue;
                },
                b if b.is_ascii_alphanumeric() => {},
                _ => break,
            }
            digits.push(b);
            self.cursor.bump();
        }

        if let Some(error) = error {
            return TokenKind::Error(error);
        }
        match self.number_value(kind, &digits) {
            Ok(token) => self.normalize_number(token),
            Err(error) => TokenKind::Error(error),
        }
    }

    /// Validates the digits of a scanned number and converts them.
    fn number_value(&self, kind: NumberKind, digits: &[u8]) -> Result<TokenKind<V>, ErrorKind> {
        if digits.is_empty() {
            return Err(ErrorKind::DigitRadix);
        }
        if digits
            .iter()
            .any(|b| b.is_ascii_alphabetic() && !b.is_ascii_hexdigit())
        {
            return Err(ErrorKind::NonDigitInConst);
        }

        let text: String = digits.iter().map(|&b| char::from(b)).collect();

        if kind == NumberKind::Float {
            if digits
                .iter()
                .any(|&b| b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E'))
            {
                return Err(ErrorKind::DigitRadix);
            }
            return text
                .parse::<f64>()
                .map(TokenKind::Float)
                .map_err(|_| ErrorKind::FloatMalformed);
        }

        let radix = kind.radix();
        if !text.chars().all(|c| c.is_digit(radix)) {
            return Err(ErrorKind::DigitRadix);
        }
        let value = u64::from_str_radix(&text, radix).map_err(|_| ErrorKind::IntegerOverflow)?;

        Ok(match kind {
            NumberKind::Binary => TokenKind::Binary(value),
            NumberKind::Octal => TokenKind::Octal(value),
            NumberKind::Hex => TokenKind::Hex(value),
            NumberKind::Decimal | NumberKind::Float => TokenKind::Int(value),
        })
    }

    /// Applies `numbers_2_int` and then `int_2_float`.
    fn normalize_number(&self, token: TokenKind<V>) -> TokenKind<V> {
        let token = match token {
            TokenKind::Binary(v) | TokenKind::Octal(v) | TokenKind::Hex(v)
                if self.config.numbers_2_int =>
            {
                TokenKind::Int(v)
            },
            other => other,
        };
        match token {
            TokenKind::Int(v) if self.config.int_2_float => TokenKind::Float(v as f64),
            other => other,
        }
    }
}
