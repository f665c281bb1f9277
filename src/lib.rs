//! PeakLoc locates the dominant peak of a 1D integer signal with sub-sample
//! precision.
//!
//! The locator finds the global maximum, classifies the shape of the peak
//! around it (flat top, boundary, isolated, or crowded by rivals) and
//! refines the position with a three-point parabolic fit when the shape
//! allows one. Each building block is exposed on its own for callers that
//! need only a windowed scan, a plateau midpoint or a raw vertex fit.

mod candidate;
pub mod locate;
mod refine;
mod trace;
pub mod util;

pub use candidate::window::window_peak;
pub use candidate::SamplePeak;
pub use locate::{
    locate_peak_position, LocateConfig, PeakLocator, PeakPosition, PeakShape, DEFAULT_ERROR_RANGE,
};
pub use refine::parabola::{interpolate_triple, parabola_vertex};
pub use refine::plateau::plateau_center;
pub use util::{PeakLocError, PeakLocResult};
