use thiserror::Error;

/// Reasons a catalog is rejected at startup.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    #[error("catalog has no sensors")]
    NoSensors,
    #[error("baseline sensor index {index} out of range (have {len} sensors)")]
    BaselineOutOfRange { index: usize, len: usize },
    #[error("baseline sensor '{0}' has no usable width")]
    BaselineWidth(String),
    #[error("reference ladder is empty")]
    EmptyLadder,
    #[error("reference rung {index} has invalid focal {focal_mm}mm")]
    InvalidRung { index: usize, focal_mm: f64 },
    #[error("reference rung {index} ({focal_mm}mm) is not above the previous rung")]
    UnsortedLadder { index: usize, focal_mm: f64 },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RatioParseError {
    #[error("aspect '{0}' is not of the form num/den")]
    Format(String),
    #[error("aspect '{0}' has a zero term")]
    Zero(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("'{0}' is not a capture id")]
pub struct CaptureIdParseError(pub String);
