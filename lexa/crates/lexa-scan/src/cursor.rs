//! Byte cursor for traversing scanner input.
//!
//! The cursor hides where bytes come from. A borrowed buffer is indexed in
//! place; a reader is pulled through an internal read-ahead window that only
//! grows as far as the scanner's lookahead requires. Both track the byte
//! offset, the 1-based line and the 1-based column of the next byte.
//!
//! # Example
//!
//! ```
//! use lexa_scan::cursor::Cursor;
//!
//! let mut cursor = Cursor::from_bytes(b"a\nb");
//! assert_eq!(cursor.bump(), Some(b'a'));
//! cursor.bump();
//! assert_eq!((cursor.line(), cursor.column()), (2, 1));
//! ```

use std::fmt;
use std::io::{self, Read};

use tracing::warn;

/// Bytes requested from a reader per refill.
const READ_CHUNK: usize = 4096;

enum Input<'a> {
    Empty,
    Buffer(&'a [u8]),
    Stream(Stream<'a>),
}

/// Read-ahead window over a reader. `buf[head..]` holds the bytes that have
/// been read but not yet consumed.
struct Stream<'a> {
    reader: Box<dyn Read + 'a>,
    buf: Vec<u8>,
    head: usize,
    eof: bool,
}

impl<'a> Stream<'a> {
    fn new(reader: Box<dyn Read + 'a>) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(READ_CHUNK),
            head: 0,
            eof: false,
        }
    }

    /// Reads until at least `n + 1` unconsumed bytes are buffered or the
    /// reader is exhausted.
    fn fill(&mut self, n: usize) {
        while self.buf.len() - self.head <= n && !self.eof {
            if self.head > 0 && self.head >= self.buf.len() / 2 {
                self.buf.drain(..self.head);
                self.head = 0;
            }

            let len = self.buf.len();
            self.buf.resize(len + READ_CHUNK, 0);
            match self.reader.read(&mut self.buf[len..]) {
                Ok(0) => {
                    self.buf.truncate(len);
                    self.eof = true;
                },
                Ok(read) => self.buf.truncate(len + read),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => self.buf.truncate(len),
                Err(e) => {
                    self.buf.truncate(len);
                    self.eof = true;
                    warn!(error = %e, "read failed, treating as end of input");
                },
            }
        }
    }

    fn peek_at(&mut self, n: usize) -> Option<u8> {
        self.fill(n);
        self.buf.get(self.head + n).copied()
    }
}

/// A cursor over the bytes of one input.
pub struct Cursor<'a> {
    input: Input<'a>,

    /// Byte offset of the next byte.
    position: usize,

    /// Line of the next byte (1-based).
    line: u32,

    /// Column of the next byte (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// A cursor with no input; it is immediately at the end.
    pub fn empty() -> Self {
        Self::with_input(Input::Empty)
    }

    /// A cursor over a borrowed buffer.
    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self::with_input(Input::Buffer(bytes))
    }

    /// A cursor that pulls bytes from `reader` on demand.
    pub fn from_reader(reader: Box<dyn Read + 'a>) -> Self {
        Self::with_input(Input::Stream(Stream::new(reader)))
    }

    fn with_input(input: Input<'a>) -> Self {
        Self {
            input,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// The next byte, without consuming it.
    #[inline]
    pub fn peek(&mut self) -> Option<u8> {
        self.peek_at(0)
    }

    /// The byte `n` places after the next one, without consuming anything.
    #[inline]
    pub fn peek_at(&mut self, n: usize) -> Option<u8> {
        match &mut self.input {
            Input::Empty => None,
            Input::Buffer(bytes) => bytes.get(self.position + n).copied(),
            Input::Stream(stream) => stream.peek_at(n),
        }
    }

    /// Consumes and returns the next byte.
    ///
    /// A newline moves to column 1 of the next line. UTF-8 continuation bytes
    /// do not advance the column, so columns count characters.
    pub fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        if let Input::Stream(stream) = &mut self.input {
            stream.head += 1;
        }
        self.position += 1;
        if byte == b'\n' {
            self.line = self.line.saturating_add(1);
            self.column = 1;
        } else if byte & 0xC0 != 0x80 {
            self.column = self.column.saturating_add(1);
        }
        Some(byte)
    }

    /// Consumes the next byte if it equals `expected`.
    pub fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Returns `true` once every byte has been consumed.
    pub fn is_at_end(&mut self) -> bool {
        self.peek().is_none()
    }

    /// Byte offset of the next byte.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Line of the next byte.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the next byte.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Short name of the input kind, for logging.
    pub fn input_kind(&self) -> &'static str {
        match self.input {
            Input::Empty => "none",
            Input::Buffer(_) => "buffer",
            Input::Stream(_) => "stream",
        }
    }
}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("input", &self.input_kind())
            .field("position", &self.position)
            .field("line", &self.line)
            .field("column", &self.column)
            .finish()
    }
}
