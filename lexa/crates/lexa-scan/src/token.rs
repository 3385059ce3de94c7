//! Token definitions.
//!
//! A [`Token`] pairs a [`TokenKind`] with the [`Span`] of its first byte.
//! `TokenKind` is generic over the value type `V` that callers store in the
//! symbol table, so a symbol hit hands back the caller's own value.

use std::fmt;

use lexa_util::Span;

use crate::error::ErrorKind;

/// The classification and payload of a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind<V> {
    /// No token has been read yet.
    None,
    /// End of input.
    Eof,
    /// A lexical error.
    Error(ErrorKind),

    /// A single character, when `char_2_token` is off.
    Char(char),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftCurly,
    /// `}`
    RightCurly,
    /// `[`
    LeftBrace,
    /// `]`
    RightBrace,
    /// `=`
    EqualSign,
    /// `,`
    Comma,
    /// Any other single-character token.
    Single(char),

    /// `0b` literal, when `numbers_2_int` is off.
    Binary(u64),
    /// Leading-zero octal literal, when `numbers_2_int` is off.
    Octal(u64),
    /// Integer literal.
    Int(u64),
    /// `0x` or `$` literal, when `numbers_2_int` is off.
    Hex(u64),
    /// Floating-point literal.
    Float(f64),

    /// String literal, after escape processing.
    String(String),
    /// An identifier found in the symbol table.
    Symbol(V),
    /// An identifier not found in the symbol table.
    Identifier(String),
    /// The identifier `NULL`, when `scan_identifier_null` is on.
    IdentifierNull,

    /// Single-line comment text without its markers.
    CommentSingle(String),
    /// Multi-line comment text without its markers.
    CommentMulti(String),
}

impl<V> TokenKind<V> {
    /// The token for a single character, as `char_2_token` would report it.
    pub fn from_char(c: char) -> Self {
        match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftCurly,
            '}' => TokenKind::RightCurly,
            '[' => TokenKind::LeftBrace,
            ']' => TokenKind::RightBrace,
            '=' => TokenKind::EqualSign,
            ',' => TokenKind::Comma,
            c => TokenKind::Single(c),
        }
    }

    /// The character of a single-character token.
    pub fn as_char(&self) -> Option<char> {
        match self {
            TokenKind::Char(c) | TokenKind::Single(c) => Some(*c),
            TokenKind::LeftParen => Some('('),
            TokenKind::RightParen => Some(')'),
            TokenKind::LeftCurly => Some('{'),
            TokenKind::RightCurly => Some('}'),
            TokenKind::LeftBrace => Some('['),
            TokenKind::RightBrace => Some(']'),
            TokenKind::EqualSign => Some('='),
            TokenKind::Comma => Some(','),
            _ => None,
        }
    }

    /// Short lowercase name of the variant.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::None => "none",
            TokenKind::Eof => "eof",
            TokenKind::Error(_) => "error",
            TokenKind::Char(_) => "char",
            TokenKind::LeftParen => "left_paren",
            TokenKind::RightParen => "right_paren",
            TokenKind::LeftCurly => "left_curly",
            TokenKind::RightCurly => "right_curly",
            TokenKind::LeftBrace => "left_brace",
            TokenKind::RightBrace => "right_brace",
            TokenKind::EqualSign => "equal_sign",
            TokenKind::Comma => "comma",
            TokenKind::Single(_) => "single",
            TokenKind::Binary(_) => "binary",
            TokenKind::Octal(_) => "octal",
            TokenKind::Int(_) => "int",
            TokenKind::Hex(_) => "hex",
            TokenKind::Float(_) => "float",
            TokenKind::String(_) => "string",
            TokenKind::Symbol(_) => "symbol",
            TokenKind::Identifier(_) => "identifier",
            TokenKind::IdentifierNull => "identifier_null",
            TokenKind::CommentSingle(_) => "comment_single",
            TokenKind::CommentMulti(_) => "comment_multi",
        }
    }

    /// Human-readable description used in messages such as
    /// "unexpected identifier `foo`, expected number".
    pub fn describe(&self) -> String {
        match self {
            TokenKind::None => "nothing".to_string(),
            TokenKind::Eof => "end of file".to_string(),
            TokenKind::Error(kind) => format!("scanner error ({})", kind),
            TokenKind::Binary(v) => format!("number `{:#b}`", v),
            TokenKind::Octal(v) => format!("number `0{:o}`", v),
            TokenKind::Int(v) => format!("number `{}`", v),
            TokenKind::Hex(v) => format!("number `{:#x}`", v),
            TokenKind::Float(v) => format!("number `{}`", v),
            TokenKind::String(s) => format!("string constant \"{}\"", s),
            TokenKind::Symbol(_) => "symbol".to_string(),
            TokenKind::Identifier(s) => format!("identifier `{}`", s),
            TokenKind::IdentifierNull => "null identifier".to_string(),
            TokenKind::CommentSingle(_) | TokenKind::CommentMulti(_) => "comment".to_string(),
            other => match other.as_char() {
                Some(c) if c.is_control() => format!("character `{}`", c.escape_default()),
                Some(c) => format!("character `{}`", c),
                None => other.name().to_string(),
            },
        }
    }

    /// Returns `true` for the integer and float kinds.
    pub fn is_number(&self) -> bool {
        matches!(
            self,
            TokenKind::Binary(_)
                | TokenKind::Octal(_)
                | TokenKind::Int(_)
                | TokenKind::Hex(_)
                | TokenKind::Float(_)
        )
    }
}

impl<V> fmt::Display for TokenKind<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// A token with its source position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<V> {
    /// What was scanned.
    pub kind: TokenKind<V>,
    /// Byte range of the token; line and column are those of its first byte.
    pub span: Span,
}

impl<V> Token<V> {
    /// Creates a token.
    pub fn new(kind: TokenKind<V>, span: Span) -> Self {
        Self { kind, span }
    }

    /// The "nothing read yet" token at line 1, column 1.
    pub fn none() -> Self {
        Self::new(TokenKind::None, Span::point(0, 1, 1))
    }

    /// Line of the first byte (1-based).
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Column of the first byte (1-based).
    pub fn column(&self) -> u32 {
        self.span.column
    }

    /// Returns `true` for the end-of-input token.
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// The error kind, if this is an error token.
    pub fn error(&self) -> Option<ErrorKind> {
        match self.kind {
            TokenKind::Error(kind) => Some(kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Kind = TokenKind<u32>;

    #[test]
    fn test_from_char_named() {
        assert_eq!(Kind::from_char('('), TokenKind::LeftParen);
        assert_eq!(Kind::from_char(']'), TokenKind::RightBrace);
        assert_eq!(Kind::from_char('='), TokenKind::EqualSign);
        assert_eq!(Kind::from_char(';'), TokenKind::Single(';'));
    }

    #[test]
    fn test_as_char_inverts_from_char() {
        for c in "(){}[]=,;+x".chars() {
            assert_eq!(Kind::from_char(c).as_char(), Some(c));
        }
        assert_eq!(Kind::Int(3).as_char(), None);
    }

    #[test]
    fn test_describe() {
        assert_eq!(Kind::Identifier("foo".into()).describe(), "identifier `foo`");
        assert_eq!(Kind::Int(42).describe(), "number `42`");
        assert_eq!(Kind::Hex(255).describe(), "number `0xff`");
        assert_eq!(Kind::Eof.describe(), "end of file");
        assert_eq!(Kind::Comma.describe(), "character `,`");
        assert_eq!(Kind::Char('\n').describe(), "character `\\n`");
        assert_eq!(
            Kind::Error(ErrorKind::UnexpEofInString).describe(),
            "scanner error (unterminated string constant)"
        );
    }

    #[test]
    fn test_token_accessors() {
        let token: Token<u32> = Token::new(TokenKind::Error(ErrorKind::Unknown), Span::new(4, 5, 2, 3));
        assert_eq!(token.line(), 2);
        assert_eq!(token.column(), 3);
        assert_eq!(token.error(), Some(ErrorKind::Unknown));
        assert!(!token.is_eof());
    }

    #[test]
    fn test_none_token_position() {
        let token: Token<u32> = Token::none();
        assert_eq!(token.kind, TokenKind::None);
        assert_eq!((token.line(), token.column()), (1, 1));
    }
}
