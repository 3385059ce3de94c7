//! Edge case tests for lexa-scan

use crate::{ErrorKind, Scanner, ScannerConfig, TokenKind};

fn scan_all(source: &str) -> Vec<TokenKind<u32>> {
    let mut scanner = Scanner::default();
    scanner.attach_text(source);
    scanner.map(|t| t.kind).collect()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source() {
    assert!(scan_all("").is_empty());
}

#[test]
fn test_edge_only_skip_characters() {
    assert!(scan_all(" \t\n\n  ").is_empty());
}

#[test]
fn test_edge_only_comments() {
    assert!(scan_all("# one\n# two\n/* three */").is_empty());
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10000);
    assert_eq!(scan_all(&name), vec![TokenKind::Identifier(name)]);
}

#[test]
fn test_edge_carriage_return_is_not_skipped() {
    let tokens = scan_all("a\r\nb");
    assert_eq!(tokens[1], TokenKind::Error(ErrorKind::Unknown));
    assert_eq!(tokens.len(), 3);
}

#[test]
fn test_edge_nul_byte() {
    assert_eq!(scan_all("\0"), vec![TokenKind::Error(ErrorKind::Unknown)]);
}

#[test]
fn test_edge_invalid_utf8_buffer() {
    let mut scanner: Scanner<'_, u32> = Scanner::default();
    scanner.attach_buffer(b"ab\xFF\xFE");
    let kinds: Vec<_> = scanner.map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Identifier("ab\u{FFFD}\u{FFFD}".into())]);
}

#[test]
fn test_edge_stray_high_byte() {
    let mut scanner: Scanner<'_, u32> = Scanner::default();
    scanner.attach_buffer(b"\xC3\xA9");
    let kinds: Vec<_> = scanner.map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Error(ErrorKind::Unknown); 2]);
}

#[test]
fn test_edge_string_at_eof_after_escape() {
    assert_eq!(scan_all("\"\\"), vec![TokenKind::Error(ErrorKind::UnexpEofInString)]);
}

#[test]
fn test_edge_lone_slash_star() {
    assert_eq!(
        scan_all("/ *"),
        vec![TokenKind::Single('/'), TokenKind::Single('*')]
    );
}

#[test]
fn test_edge_dot_without_digit() {
    assert_eq!(scan_all(".x"), vec![TokenKind::Single('.'), TokenKind::Identifier("x".into())]);
}

#[test]
fn test_edge_dollar_without_hex_dollar() {
    assert_eq!(scan_all("$1"), vec![TokenKind::Single('$'), TokenKind::Int(1)]);
}

#[test]
fn test_edge_many_errors_keep_counting() {
    let mut scanner: Scanner<'_, u32> = Scanner::new(ScannerConfig {
        max_parse_errors: 3,
        ..ScannerConfig::default()
    });
    scanner.attach_text("\u{1}\u{2}");
    scanner.by_ref().for_each(drop);
    assert_eq!(scanner.error_count(), 2);
    assert!(!scanner.error_threshold_reached());
}

#[test]
fn test_edge_all_punctuation_are_tokens() {
    let config = ScannerConfig {
        cpair_comment_single: None,
        scan_comment_multi: false,
        scan_string_sq: false,
        scan_string_dq: false,
        scan_identifier_1char: false,
        ..ScannerConfig::default()
    };
    let mut scanner: Scanner<'_, u32> = Scanner::new(config);
    let text = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
    scanner.attach_text(text);
    let chars: String = scanner.map(|t| t.kind.as_char().unwrap_or('?')).collect();
    assert_eq!(chars, text);
}

#[test]
fn test_edge_comment_marker_overrides_char_token() {
    assert_eq!(scan_all("#;\n;"), vec![TokenKind::Single(';')]);
}

#[test]
fn test_edge_unterminated_single_quote_consumes_rest() {
    let mut scanner: Scanner<'_, u32> = Scanner::default();
    scanner.attach_text("'abc\ndef");
    assert_eq!(scanner.advance().kind, TokenKind::Error(ErrorKind::UnexpEofInString));
    assert!(scanner.advance().is_eof());
}
