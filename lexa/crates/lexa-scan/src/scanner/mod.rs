//! Scanner module.
//!
//! The scanner implementation is split into focused components:
//! - `core` - Scanner struct, input attachment, advance/peek and dispatch
//! - `comment` - Single-line and multi-line comments
//! - `string` - Quoted strings and escapes
//! - `number` - Integer and float literals
//! - `identifier` - Identifiers and symbol resolution
//! - `scope` - Symbol table operations and scopes
//! - `message` - Caller-level errors, warnings and unexpected-token reports

mod comment;
mod core;
mod identifier;
mod message;
mod number;
mod scope;
mod string;

pub use self::core::Scanner;
