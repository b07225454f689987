//! Error type for the pure computation layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from reference-table and strength calculations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VedicError {
    /// Caller-supplied value outside its natural range.
    BadInput(&'static str),
    /// Numeric argument violates a documented precondition.
    OutOfDomain(&'static str),
    /// A reference table lookup produced no result (a bug, surfaced).
    MissingData(&'static str),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadInput(msg) => write!(f, "bad input: {msg}"),
            Self::OutOfDomain(msg) => write!(f, "out of domain: {msg}"),
            Self::MissingData(msg) => write!(f, "missing data: {msg}"),
        }
    }
}

impl Error for VedicError {}
