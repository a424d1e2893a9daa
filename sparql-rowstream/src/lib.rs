//! Decoder for the binary row-stream format used to deliver SPARQL query
//! results: a repeating `[column count, type array, offset array, payload]`
//! sequence terminated by a zero column count.

mod cursor;
mod error;
mod value;

pub use cursor::{PendingNext, RowCursor, DEFAULT_MAX_ROW_SIZE};
pub use error::CursorError;
pub use value::ValueType;
