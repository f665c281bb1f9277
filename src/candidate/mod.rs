//! Integer-grid peak candidates.
//!
//! Includes the windowed local-maximum scan that feeds the rival-peak
//! classification in [`crate::locate`].

pub mod window;

pub use window::window_peak;

/// Candidate extremum on the integer sample grid.
///
/// Absence of a qualifying candidate is expressed as `None` by the scan
/// functions, never as a sentinel index or value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplePeak {
    /// Index of the sample in the signal.
    pub index: usize,
    /// Sample value at `index`.
    pub value: i32,
}
