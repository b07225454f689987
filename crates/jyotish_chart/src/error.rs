//! Error type of the chart layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jyotish_base::VedicError;
use jyotish_ephem::EphemError;

/// Errors from chart assembly and derived-record computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Malformed caller input; names the offending field.
    BadInput(&'static str),
    /// Error surfaced by the ephemeris provider.
    Ephemeris(EphemError),
    /// Error from the pure computation layer.
    Vedic(VedicError),
}

impl ChartError {
    /// CLI exit category: 2 bad input, 3 ephemeris, 1 other.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::BadInput(_) => 2,
            Self::Ephemeris(EphemError::BadInput(_)) => 2,
            Self::Ephemeris(_) => 3,
            Self::Vedic(VedicError::BadInput(_)) => 2,
            Self::Vedic(_) => 1,
        }
    }
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadInput(msg) => write!(f, "bad input: {msg}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::Vedic(e) => write!(f, "calculation error: {e}"),
        }
    }
}

impl Error for ChartError {}

impl From<EphemError> for ChartError {
    fn from(e: EphemError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<VedicError> for ChartError {
    fn from(e: VedicError) -> Self {
        Self::Vedic(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(ChartError::BadInput("month").exit_code(), 2);
        assert_eq!(
            ChartError::Ephemeris(EphemError::EphemerisRange("jd")).exit_code(),
            3
        );
        assert_eq!(
            ChartError::Ephemeris(EphemError::BadInput("latitude")).exit_code(),
            2
        );
        assert_eq!(
            ChartError::Vedic(VedicError::MissingData("table")).exit_code(),
            1
        );
    }
}
