//! Input-parsing core for the `tern` terminal library.
//!
//! Converts a raw byte stream — mixed UTF-8 text and ANSI/VT control
//! sequences, in arbitrary fragments — into an ordered sequence of semantic
//! actions delivered to an [`ActionSink`]. The parser is a single-pass,
//! table-driven transducer: it never fails, never allocates per byte, and
//! recovers from malformed input by substituting the Unicode replacement
//! character or skipping the offending byte with a diagnostic.

mod classify;
mod parser;
mod sink;
mod table;
mod utf8;

pub use classify::{Range, is_c1, is_execute_char, is_param_char, is_print_char};
pub use parser::Parser;
pub use sink::{ActionClass, ActionSink};
pub use table::{Action, DEC_ANSI, ParserTable, State};
