//! General type definitions.

/// The sortable unit. Matches the 4-byte fixed-width element of the binary
/// output record.
pub type Element = i32;

/// Errors surfaced by the sort pipeline.
#[derive(thiserror::Error, Debug)]
pub enum SortError {
    /// The current process group has an odd size greater than one, for which
    /// the pairing protocol is undefined.
    #[error("process group of size {0} cannot be paired; sizes above one must be even")]
    OddGroupSize(usize),

    /// Failure to open, read or write an input/output file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed input text.
    #[error("failed to parse {token} at position {pos}")]
    Parse {
        /// What was being parsed, e.g. "element count".
        token: String,
        /// Zero-based token position within the input.
        pos: usize,
    },

    /// The final array failed the non-decreasing check, indicating a defect
    /// in the sort itself rather than in the environment.
    #[error("array failed to sort")]
    NotSorted,
}

/// Result type.
pub type Result<T> = std::result::Result<T, SortError>;
