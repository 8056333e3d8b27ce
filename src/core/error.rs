use thiserror::Error;

/// Structural problems in a single read's alignment; the read is rejected
/// without touching the accumulators.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AlignmentDataError {
    #[error("alignment column maps to neither the query nor the reference")]
    EmptyColumn,
    #[error("alignment column carries a negative coordinate ({value})")]
    NegativeCoordinate { value: i64 },
    #[error("soft clips exceed the alignment ({clipped} bp clipped, {available} available)")]
    ExcessiveSoftClip { clipped: usize, available: usize },
    #[error("alignment column points at query offset {offset} but the read is {len} bp long")]
    InconsistentQuery { offset: usize, len: usize },
    #[error("insertion at the alignment start has no anchor base")]
    UnanchoredInsertion,
    #[error("deletion anchored before the reference start")]
    UnanchoredDeletion,
    #[error("MD tag is absent or is not a string")]
    MissingMdTag,
    #[error("position {pos} lies beyond the reference end ({len} bp)")]
    PositionOutOfBounds { pos: u64, len: u64 },
    #[error("{leftover} {cursor} entries left after the MD tag was fully consumed")]
    UnconsumedAlignment { cursor: &'static str, leftover: usize },
}

/// Malformed MD tags. Fatal for the read, same rejection policy as
/// [`AlignmentDataError`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TagParseError {
    #[error("unexpected character '{ch}' at MD tag offset {offset}")]
    UnexpectedByte { ch: char, offset: usize },
    #[error("'^' with no deleted bases at MD tag offset {offset}")]
    EmptyDeletion { offset: usize },
    #[error("MD tag walks past the end of the {cursor}")]
    CursorExhausted { cursor: &'static str },
}

/// Rejected before any read is processed.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("the {what} threshold must be at least 1")]
    ZeroThreshold { what: &'static str },
    #[error("reference sequence {name} has zero length")]
    EmptyReference { name: String },
}

/// Any per-read failure surfaced by the counting pipeline.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CountingError {
    #[error(transparent)]
    AlignmentData(#[from] AlignmentDataError),
    #[error(transparent)]
    TagParse(#[from] TagParseError),
}
