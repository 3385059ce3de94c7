//! Span module - Source location tracking.
//!
//! A [`Span`] records where a token or diagnostic came from: the byte range
//! in the scanned input plus the human-readable line and column of its first
//! byte.
//!
//! # Examples
//!
//! ```
//! use lexa_util::span::Span;
//!
//! let span = Span::new(10, 20, 1, 5);
//! assert_eq!(span.len(), 10);
//! assert_eq!(span.to_string(), "1:5");
//! ```

use std::fmt;

/// Source location span
///
/// Byte offsets are relative to the start of the attached input. Lines and
/// columns are both 1-based; a column counts characters since the last
/// newline.
///
/// # Examples
///
/// ```
/// use lexa_util::span::Span;
///
/// let span = Span::new(0, 3, 2, 1);
/// assert_eq!(span.line, 2);
/// assert!(!span.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

static_assertions::assert_impl_all!(Span: Copy, Send, Sync);

impl Span {
    /// Dummy span for diagnostics without a location
    ///
    /// # Examples
    ///
    /// ```
    /// use lexa_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.line, 0);
    /// assert!(Span::DUMMY.is_dummy());
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a single point
    ///
    /// # Examples
    ///
    /// ```
    /// use lexa_util::span::Span;
    ///
    /// let point = Span::point(7, 3, 1);
    /// assert_eq!(point.start, point.end);
    /// ```
    #[inline]
    pub const fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns true if this is the location-less [`Span::DUMMY`]
    #[inline]
    pub fn is_dummy(&self) -> bool {
        self.line == 0
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span contains a byte offset
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
