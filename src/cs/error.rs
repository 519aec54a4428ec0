//! Error type shared by the algorithms in this crate.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Precondition violations reported by the dynamic programming routines.
///
/// An unreachable target is not an error: routines that can fail to reach
/// their target report it in their `Ok` value instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input violates a documented precondition.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A value that must be non-negative was negative.
    ///
    /// `index` is the position in the input sequence, or `None` when the
    /// offending value is the target.
    #[error("{name} must be non-negative, got {value}{}", position_suffix(.index))]
    NegativeValue {
        name: &'static str,
        index: Option<usize>,
        value: String,
    },

    /// A value, a sum of values or a table size does not fit in memory.
    #[error("input too large: {length} exceeds maximum of {max_length}")]
    InputTooLarge { length: u128, max_length: u128 },

    /// A combination count exceeded the range of `u128`.
    #[error("count overflowed u128 in a {rows}x{cols} table")]
    CountOverflow { rows: usize, cols: usize },
}

impl Error {
    pub(crate) fn too_large(length: u128) -> Self {
        Error::InputTooLarge {
            length,
            max_length: usize::MAX as u128,
        }
    }
}

fn position_suffix(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at index {i}"),
        None => String::new(),
    }
}
