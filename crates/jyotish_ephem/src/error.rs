//! Error taxonomy of the ephemeris port.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jyotish_base::VedicError;

/// Failure kinds an ephemeris provider may surface.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EphemError {
    /// Malformed request (invalid body, field out of natural range).
    BadInput(&'static str),
    /// Numeric argument violates a documented precondition.
    OutOfDomain(&'static str),
    /// Requested JD lies outside the provider's coverage.
    EphemerisRange(&'static str),
    /// Iterative search (station, eclipse) failed to converge.
    Unreachable(&'static str),
    /// A lookup produced no result; strictly a bug, never defaulted over.
    MissingData(&'static str),
}

impl Display for EphemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadInput(msg) => write!(f, "bad input: {msg}"),
            Self::OutOfDomain(msg) => write!(f, "out of domain: {msg}"),
            Self::EphemerisRange(msg) => write!(f, "ephemeris range: {msg}"),
            Self::Unreachable(msg) => write!(f, "unreachable: {msg}"),
            Self::MissingData(msg) => write!(f, "missing data: {msg}"),
        }
    }
}

impl Error for EphemError {}

impl From<VedicError> for EphemError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::BadInput(m) => Self::BadInput(m),
            VedicError::OutOfDomain(m) => Self::OutOfDomain(m),
            VedicError::MissingData(m) => Self::MissingData(m),
            _ => Self::MissingData("unclassified calculation error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_kind() {
        assert!(
            EphemError::EphemerisRange("jd 0 outside snapshot")
                .to_string()
                .starts_with("ephemeris range")
        );
    }

    #[test]
    fn converts_from_vedic_error() {
        let e: EphemError = VedicError::MissingData("kp").into();
        assert!(matches!(e, EphemError::MissingData(_)));
    }
}
