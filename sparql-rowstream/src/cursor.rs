//! Decoder for the repeating binary row-stream format.
//!
//! Grounded directly in `tracker-bus-cursor.c`'s `next()`: read a column
//! count, then a type array, then an offset array, validate the offsets,
//! then read the payload they describe in one shot and slice it into
//! per-column NUL-terminated strings. The only behavioral departure from the
//! C source is making the row-size ceiling a per-cursor setting instead of a
//! compiled-in constant (open question in the design notes).

use std::io::Read;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};

use crate::error::CursorError;
use crate::value::ValueType;

/// Default ceiling on a single row's payload size, matching the ~2 GiB
/// compiled-in limit of the original implementation.
pub const DEFAULT_MAX_ROW_SIZE: u64 = 2_000_000_000;

/// A decoded row-stream, reading from any byte source.
pub struct RowCursor<R> {
    reader: R,
    variable_names: Vec<String>,
    max_row_size: u64,
    types: Vec<ValueType>,
    offsets: Vec<i32>,
    row_data: Vec<u8>,
    has_row: bool,
    finished: bool,
}

impl<R: Read> RowCursor<R> {
    pub fn new(reader: R, variable_names: Vec<String>) -> Self {
        Self {
            reader,
            variable_names,
            max_row_size: DEFAULT_MAX_ROW_SIZE,
            types: Vec::new(),
            offsets: Vec::new(),
            row_data: Vec::new(),
            has_row: false,
            finished: false,
        }
    }

    pub fn max_row_size(mut self, limit: u64) -> Self {
        self.max_row_size = limit;
        self
    }

    pub fn get_n_columns(&self) -> usize {
        self.variable_names.len()
    }

    pub fn get_variable_name(&self, column: usize) -> Option<&str> {
        self.variable_names.get(column).map(String::as_str)
    }

    pub fn get_value_type(&self, column: usize) -> ValueType {
        if !self.has_row {
            return ValueType::Unbound;
        }
        self.types.get(column).copied().unwrap_or(ValueType::Unbound)
    }

    /// The column's string value, an optional language tag, and the value's
    /// byte length — `None` for unbound columns or before the first
    /// successful [`Self::next`].
    pub fn get_string(&self, column: usize) -> Option<(&str, Option<&str>, usize)> {
        if !self.has_row || column >= self.get_n_columns() {
            return None;
        }
        if self.get_value_type(column) == ValueType::Unbound {
            return None;
        }
        let start = if column == 0 {
            0
        } else {
            (self.offsets[column - 1] + 1) as usize
        };
        let end = self.offsets[column] as usize;
        let span = self.row_data.get(start..=end)?;

        match span.iter().position(|&b| b == 0) {
            Some(nul) => {
                let value = std::str::from_utf8(&span[..nul]).ok()?;
                let langtag = (nul + 1 < span.len())
                    .then(|| std::str::from_utf8(&span[nul + 1..]).ok())
                    .flatten();
                Some((value, langtag, nul))
            }
            None => {
                let value = std::str::from_utf8(span).ok()?;
                Some((value, None, value.len()))
            }
        }
    }

    /// Advances to the next row, checking `cancel` before decode begins and
    /// between each IO read.
    pub fn next(&mut self, cancel: &AtomicBool) -> Result<bool, CursorError> {
        if self.finished {
            return Ok(false);
        }
        if cancel.load(Ordering::SeqCst) {
            return Err(CursorError::Cancelled);
        }

        let column_count = self.read_i32()?;
        if column_count == 0 {
            self.finished = true;
            self.has_row = false;
            return Ok(false);
        }
        if column_count < 0 {
            self.finished = true;
            return Err(CursorError::InvalidData(format!(
                "negative column count {column_count}"
            )));
        }
        let n = column_count as usize;
        if n != self.get_n_columns() {
            self.finished = true;
            return Err(CursorError::InvalidData(format!(
                "row declares {n} columns, cursor was constructed with {}",
                self.get_n_columns()
            )));
        }

        if cancel.load(Ordering::SeqCst) {
            self.finished = true;
            return Err(CursorError::Cancelled);
        }

        let mut raw_types = vec![0i32; n];
        self.read_i32_array(&mut raw_types)?;
        let mut types = Vec::with_capacity(n);
        for tag in raw_types {
            types.push(ValueType::from_i32(tag).ok_or_else(|| {
                CursorError::InvalidData(format!("unrecognized value type tag {tag}"))
            })?);
        }

        let mut offsets = vec![0i32; n];
        self.read_i32_array(&mut offsets)?;
        for (i, &offset) in offsets.iter().enumerate() {
            if offset < 0 || (offset as u64) > self.max_row_size {
                self.finished = true;
                return Err(CursorError::InvalidData(format!(
                    "offset {offset} at column {i} out of bounds"
                )));
            }
            if i > 0 && offset <= offsets[i - 1] {
                self.finished = true;
                return Err(CursorError::InvalidData(format!(
                    "offset {offset} at column {i} is not strictly greater than the previous offset"
                )));
            }
        }

        if cancel.load(Ordering::SeqCst) {
            self.finished = true;
            return Err(CursorError::Cancelled);
        }

        let last = *offsets.last().expect("column_count > 0 checked above");
        let payload_len = last as u64 + 1;
        if payload_len > self.max_row_size {
            self.finished = true;
            return Err(CursorError::InvalidData(format!(
                "row payload of {payload_len} bytes exceeds the configured maximum"
            )));
        }
        let mut payload = vec![0u8; payload_len as usize];
        self.reader.read_exact(&mut payload)?;

        self.types = types;
        self.offsets = offsets;
        self.row_data = payload;
        self.has_row = true;
        Ok(true)
    }

    pub fn close(&mut self) {
        self.finished = true;
        self.has_row = false;
        self.row_data = Vec::new();
        self.types = Vec::new();
        self.offsets = Vec::new();
    }

    fn read_i32(&mut self) -> Result<i32, CursorError> {
        let mut buf = [0u8; 4];
        self.reader.read_exact(&mut buf)?;
        Ok(i32::from_le_bytes(buf))
    }

    fn read_i32_array(&mut self, out: &mut [i32]) -> Result<(), CursorError> {
        for slot in out.iter_mut() {
            *slot = self.read_i32()?;
        }
        Ok(())
    }
}

/// A `next()` call handed off to a worker thread, which owns the cursor
/// until the decode finishes — mirrors `GTask`'s single-worker-per-cursor
/// model rather than a pollable future, since nothing here needs a runtime.
pub struct PendingNext<R> {
    rx: mpsc::Receiver<(RowCursor<R>, Result<bool, CursorError>)>,
}

impl<R> PendingNext<R> {
    /// Blocks until the worker thread finishes, returning the cursor (ready
    /// for the next call) and the decode result.
    pub fn join(self) -> (RowCursor<R>, Result<bool, CursorError>) {
        self.rx.recv().expect("worker thread dropped without a reply")
    }
}

impl<R: Read + Send + 'static> RowCursor<R> {
    /// Offloads [`Self::next`] to the shared worker pool. Only one call may
    /// be outstanding per cursor at a time (enforced by `self` being moved
    /// in); callers must `join` before issuing the next one, which is also
    /// what keeps successive calls completing in submission order.
    pub fn next_async(mut self, cancel: Arc<AtomicBool>) -> PendingNext<R> {
        let (tx, rx) = mpsc::channel();
        rayon::spawn(move || {
            let result = self.next(&cancel);
            let _ = tx.send((self, result));
        });
        PendingNext { rx }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor as IoCursor;

    /// Builds a single-column row: `payload` must already be NUL-terminated
    /// (with an optional langtag appended after the NUL).
    fn encode_single_column_row(type_tag: i32, payload: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(1i32.to_le_bytes());
        bytes.extend(type_tag.to_le_bytes());
        bytes.extend((payload.len() as i32 - 1).to_le_bytes());
        bytes.extend(payload);
        bytes
    }

    fn end_marker() -> Vec<u8> {
        0i32.to_le_bytes().to_vec()
    }

    #[test]
    fn decodes_a_single_column_uri_row_then_reports_end_of_stream() {
        let mut wire = encode_single_column_row(1, b"http://x\0");
        wire.extend(end_marker());

        let mut cursor = RowCursor::new(IoCursor::new(wire), vec!["s".into()]);
        let flag = AtomicBool::new(false);

        assert!(cursor.next(&flag).unwrap());
        assert_eq!(cursor.get_value_type(0), ValueType::Uri);
        assert_eq!(cursor.get_string(0), Some(("http://x", None, 8)));

        assert!(!cursor.next(&flag).unwrap());
        assert_eq!(cursor.get_value_type(0), ValueType::Unbound);
    }

    #[test]
    fn decodes_a_language_tagged_string() {
        let mut bytes = encode_single_column_row(2, b"hi\0en");
        bytes.extend(end_marker());

        let mut cursor = RowCursor::new(IoCursor::new(bytes), vec!["o".into()]);
        let flag = AtomicBool::new(false);
        assert!(cursor.next(&flag).unwrap());
        assert_eq!(cursor.get_string(0), Some(("hi", Some("en"), 2)));
    }

    #[test]
    fn rejects_non_monotonic_offsets() {
        let mut bytes = Vec::new();
        bytes.extend(2i32.to_le_bytes());
        bytes.extend(2i32.to_le_bytes());
        bytes.extend(2i32.to_le_bytes());
        // Two columns, second offset not strictly greater than the first.
        bytes.extend(3i32.to_le_bytes());
        bytes.extend(1i32.to_le_bytes());
        bytes.extend([0u8; 4]);

        let mut cursor = RowCursor::new(IoCursor::new(bytes), vec!["a".into(), "b".into()]);
        let flag = AtomicBool::new(false);
        assert!(matches!(cursor.next(&flag), Err(CursorError::InvalidData(_))));
    }

    #[test]
    fn short_payload_is_an_io_error() {
        let mut bytes = Vec::new();
        bytes.extend(1i32.to_le_bytes());
        bytes.extend(1i32.to_le_bytes());
        bytes.extend(9i32.to_le_bytes()); // promises 10 bytes of payload
        bytes.extend(b"short"); // only 5 delivered

        let mut cursor = RowCursor::new(IoCursor::new(bytes), vec!["s".into()]);
        let flag = AtomicBool::new(false);
        assert!(matches!(cursor.next(&flag), Err(CursorError::Io(_))));
    }

    #[test]
    fn cancellation_before_decode_is_observed() {
        let wire = encode_single_column_row(1, b"x\0");
        let mut cursor = RowCursor::new(IoCursor::new(wire), vec!["s".into()]);
        let flag = AtomicBool::new(true);
        assert!(matches!(cursor.next(&flag), Err(CursorError::Cancelled)));
    }
}
