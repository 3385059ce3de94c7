//! Diagnostic codes for categorizing scanner errors and warnings.
//!
//! Codes follow the format `{prefix}{number:04}`. The `E1xxx` range covers
//! lexical errors produced by the scanner itself, `E2xxx`/`W2xxx` cover
//! messages reported by callers about the token stream.
//!
//! # Examples
//!
//! ```
//! use lexa_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_SCAN_DIGIT_RADIX;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.as_str(), "E1006");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use lexa_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("W", 7);
    /// assert_eq!(code.as_str(), "W0007");
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXICAL ERRORS (E1001-E1999)
    // =========================================================================

    /// E1001: Unknown character
    pub const E_SCAN_UNKNOWN: Self = Self::new("E", 1001);
    /// E1002: Unexpected end of file
    pub const E_SCAN_UNEXP_EOF: Self = Self::new("E", 1002);
    /// E1003: Unterminated string constant
    pub const E_SCAN_UNEXP_EOF_IN_STRING: Self = Self::new("E", 1003);
    /// E1004: Unterminated comment
    pub const E_SCAN_UNEXP_EOF_IN_COMMENT: Self = Self::new("E", 1004);
    /// E1005: Non-digit character in a number
    pub const E_SCAN_NON_DIGIT_IN_CONST: Self = Self::new("E", 1005);
    /// E1006: Digit out of range for the radix
    pub const E_SCAN_DIGIT_RADIX: Self = Self::new("E", 1006);
    /// E1007: Fraction in a non-decimal number
    pub const E_SCAN_FLOAT_RADIX: Self = Self::new("E", 1007);
    /// E1008: Malformed floating point number
    pub const E_SCAN_FLOAT_MALFORMED: Self = Self::new("E", 1008);
    /// E1009: Integer constant too large
    pub const E_SCAN_INTEGER_OVERFLOW: Self = Self::new("E", 1009);

    // =========================================================================
    // TOKEN STREAM MESSAGES (E2001-E2999, W2001-W2999)
    // =========================================================================

    /// E2001: Unexpected token
    pub const E_UNEXPECTED_TOKEN: Self = Self::new("E", 2001);
    /// E2002: Caller-reported error
    pub const E_USER: Self = Self::new("E", 2002);
    /// W2001: Unexpected token (reported as a warning)
    pub const W_UNEXPECTED_TOKEN: Self = Self::new("W", 2001);
    /// W2002: Caller-reported warning
    pub const W_USER: Self = Self::new("W", 2002);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_code() {
        let code = DiagnosticCode::new("E", 1001);
        assert_eq!(code.prefix(), "E");
        assert_eq!(code.number(), 1001);
    }

    #[test]
    fn test_as_str_pads() {
        assert_eq!(DiagnosticCode::new("E", 1).as_str(), "E0001");
        assert_eq!(DiagnosticCode::W_UNEXPECTED_TOKEN.as_str(), "W2001");
    }

    #[test]
    fn test_display_and_debug() {
        let code = DiagnosticCode::E_SCAN_UNKNOWN;
        assert_eq!(format!("{}", code), "E1001");
        assert_eq!(format!("{:?}", code), "DiagnosticCode(E1001)");
    }

    #[test]
    fn test_lexical_codes_are_distinct() {
        let codes = [
            DiagnosticCode::E_SCAN_UNKNOWN,
            DiagnosticCode::E_SCAN_UNEXP_EOF,
            DiagnosticCode::E_SCAN_UNEXP_EOF_IN_STRING,
            DiagnosticCode::E_SCAN_UNEXP_EOF_IN_COMMENT,
            DiagnosticCode::E_SCAN_NON_DIGIT_IN_CONST,
            DiagnosticCode::E_SCAN_DIGIT_RADIX,
            DiagnosticCode::E_SCAN_FLOAT_RADIX,
            DiagnosticCode::E_SCAN_FLOAT_MALFORMED,
            DiagnosticCode::E_SCAN_INTEGER_OVERFLOW,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
