use std::result;

use thiserror::Error;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for typedlist operations.
///
/// Only lookups can fail at runtime. Passing a list of one element type where a
/// list of another is expected is rejected by the compiler and has no variant here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Index out of range: index: {index}, len: {len}")]
    IndexOutOfRange { index: i128, len: usize },
}
