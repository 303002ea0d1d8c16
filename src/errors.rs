//! Error types for codedump.

use crate::walker::WalkError;

/// Top-level error type for dump operations.
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error("walk error: {0}")]
    Walk(#[from] WalkError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Map an error to its exit code.
pub fn exit_code(error: &DumpError) -> i32 {
    match error {
        DumpError::Walk(_) => 2,
        DumpError::Io(_) => 1,
    }
}
