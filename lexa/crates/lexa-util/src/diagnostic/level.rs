//! Diagnostic severity levels.
//!
//! # Examples
//!
//! ```
//! use lexa_util::diagnostic::Level;
//!
//! assert!(Level::Error.is_error());
//! assert!(!Level::Warning.is_error());
//! assert_eq!(Level::Warning.to_string(), "warning");
//! ```

use std::fmt;

/// Diagnostic severity level
///
/// Lexical errors are always reported as [`Level::Error`]; callers that
/// report their own messages through a scanner may also use warnings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// A problem that makes the scanned input invalid
    Error,
    /// Suspicious input that is still accepted
    Warning,
    /// Additional information attached to another diagnostic
    Note,
}

impl Level {
    /// Returns true for [`Level::Error`]
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    /// Returns the lowercase name used when rendering
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(format!("{}", Level::Error), "error");
        assert_eq!(format!("{}", Level::Warning), "warning");
        assert_eq!(format!("{}", Level::Note), "note");
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::Error < Level::Warning);
        assert!(Level::Warning < Level::Note);
    }
}
