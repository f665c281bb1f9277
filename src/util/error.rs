//! Error types for peakloc.

use thiserror::Error;

/// Result alias for peakloc operations.
pub type PeakLocResult<T> = std::result::Result<T, PeakLocError>;

/// Errors that can occur when locating a peak.
///
/// Variants carry the offending values so callers can report or branch on
/// them; equality is derived so tests can assert on exact errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeakLocError {
    /// The signal has fewer than the three samples a parabolic fit needs.
    #[error("signal too short: {len} samples, need at least 3")]
    InsufficientData { len: usize },
    /// A flat top at the maximum is too wide to be a genuine peak.
    #[error("flat top spans {width} samples, limit is {limit}")]
    MalformedPlateau { width: usize, limit: usize },
    /// The three fitted samples are colinear, so the parabola has no vertex.
    #[error("degenerate parabolic fit over samples ({left}, {center}, {right})")]
    DegenerateFit {
        left: usize,
        center: usize,
        right: usize,
    },
    /// The configured error range leaves no room for a peak neighborhood.
    #[error("error_range must be positive, got {value}")]
    InvalidErrorRange { value: usize },
    /// An explicit sample index does not fall inside the signal.
    #[error("{context} index {index} out of bounds for signal of length {len}")]
    IndexOutOfBounds {
        index: usize,
        len: usize,
        context: &'static str,
    },
}
