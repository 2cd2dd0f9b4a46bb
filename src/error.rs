//! Error taxonomy shared by every cube operation.

use thiserror::Error;

use crate::notation::Face;

/// Errors reported by the permutation engine and its consumers.
///
/// Every error is raised before any mutation is committed, so a failed
/// call leaves the cube exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Invalid notation {0:?}, expected a face letter optionally followed by ' or 2")]
    InvalidNotation(String),
    #[error("Unknown face {0:?}, expected one of UDLRFBXYZ")]
    UnknownFace(char),
    #[error("Move {0} has no entry in the move table")]
    UnsupportedMove(Face),
    #[error("Invariant violated: {0}")]
    InvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, CubeError>;
