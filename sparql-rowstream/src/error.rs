/// Failure modes a [`crate::RowCursor`] can surface, per the classification
/// `tracker-bus-cursor.c` reports through `GError`/`G_IO_ERROR_*`.
#[derive(thiserror::Error, Debug)]
pub enum CursorError {
    /// A row's offsets violated monotonicity or the configured row-size
    /// ceiling, or the declared column count was negative.
    #[error("corrupted cursor data: {0}")]
    InvalidData(String),
    /// The underlying stream returned fewer bytes than the row header
    /// promised, or a read otherwise failed.
    #[error("cursor I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A synchronous cancellation was observed before or during decode.
    #[error("cursor operation cancelled")]
    Cancelled,
}
