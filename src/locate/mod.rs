//! Dominant-peak localization.
//!
//! [`PeakLocator`] finds the global maximum of a signal, classifies the
//! shape of the peak around it and produces the best estimate that shape
//! allows: a plateau midpoint for a flat top, the bare index at a signal
//! boundary, the unrefined maximum when equal-height rivals make the fit
//! direction ambiguous, or a parabolic sub-sample fit otherwise.

use std::fmt;

use crate::candidate::window::window_peak;
use crate::candidate::SamplePeak;
use crate::refine::parabola::interpolate_triple;
use crate::refine::plateau::plateau_center;
use crate::trace::{trace_event, trace_span};
use crate::util::{PeakLocError, PeakLocResult};

/// Default rival-search radius and flat-top tolerance.
pub const DEFAULT_ERROR_RANGE: usize = 3;

/// Tunable parameters for [`PeakLocator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocateConfig {
    /// Radius searched for rival peaks on each side of the maximum; also
    /// half the plateau width at which a flat top is rejected as malformed.
    pub error_range: usize,
}

impl Default for LocateConfig {
    fn default() -> Self {
        Self {
            error_range: DEFAULT_ERROR_RANGE,
        }
    }
}

/// Shape classification of the dominant peak.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeakShape {
    /// A run of equal samples at the maximum; the position is the plateau
    /// midpoint.
    FlatTop,
    /// The maximum sits on the first or last sample, where one neighbor is
    /// missing and no fit is possible.
    Boundary,
    /// A clean maximum with no qualifying rival nearby, fitted over its
    /// immediate neighbors.
    Isolated,
    /// Equal-height rivals on both sides; the fit direction is ambiguous
    /// and the integer maximum is returned unrefined.
    BalancedRivals,
    /// A rival on one side outweighs the other; the fit window is widened
    /// toward it.
    DominantRival,
}

impl PeakShape {
    /// Short lowercase name, stable for logs and machine-readable output.
    pub fn as_str(self) -> &'static str {
        match self {
            PeakShape::FlatTop => "flat-top",
            PeakShape::Boundary => "boundary",
            PeakShape::Isolated => "isolated",
            PeakShape::BalancedRivals => "balanced-rivals",
            PeakShape::DominantRival => "dominant-rival",
        }
    }
}

impl fmt::Display for PeakShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Located peak: the position estimate and how it was produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeakPosition {
    /// Position as a real-valued sample index. An exact integer for the
    /// flat-top, boundary and balanced-rivals shapes.
    pub position: f64,
    /// Shape classification that produced the position.
    pub shape: PeakShape,
}

/// Locates the dominant peak of integer-sampled signals.
///
/// The locator is cheap to build and holds no per-signal state; one
/// instance may serve any number of signals.
#[derive(Clone, Copy, Debug)]
pub struct PeakLocator {
    config: LocateConfig,
}

impl Default for PeakLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl PeakLocator {
    /// Creates a locator with the default configuration.
    pub fn new() -> Self {
        Self {
            config: LocateConfig::default(),
        }
    }

    /// Creates a locator with a validated configuration.
    ///
    /// `error_range` must be positive: a zero radius leaves no room for a
    /// rival search or a flat top.
    pub fn with_config(config: LocateConfig) -> PeakLocResult<Self> {
        if config.error_range == 0 {
            return Err(PeakLocError::InvalidErrorRange {
                value: config.error_range,
            });
        }
        Ok(Self { config })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> LocateConfig {
        self.config
    }

    /// Locates the dominant peak of `signal` with sub-sample precision.
    ///
    /// The global maximum is found with a `>=` comparison, so among equal
    /// maxima the rightmost index wins; the rival windows scanned by
    /// [`crate::window_peak`] keep the leftmost instead. The asymmetry is
    /// deliberate, load-bearing behavior: on a flat top the rightmost
    /// winner is the plateau's right edge, which is exactly what the
    /// plateau walk needs, and changing either rule would move results on
    /// tied inputs.
    ///
    /// # Errors
    /// [`PeakLocError::InsufficientData`] for signals shorter than three
    /// samples and [`PeakLocError::MalformedPlateau`] for implausibly wide
    /// flat tops.
    pub fn locate(&self, signal: &[i32]) -> PeakLocResult<PeakPosition> {
        let _span = trace_span!("locate_peak", len = signal.len()).entered();

        if signal.len() < 3 {
            return Err(PeakLocError::InsufficientData { len: signal.len() });
        }

        let mut peak = SamplePeak {
            index: 0,
            value: signal[0],
        };
        for (index, &value) in signal.iter().enumerate().skip(1) {
            if value >= peak.value {
                peak = SamplePeak { index, value };
            }
        }

        let result = self.resolve(signal, peak)?;
        trace_event!(
            "peak_located",
            position = result.position,
            shape = result.shape.as_str()
        );
        Ok(result)
    }

    /// Classifies the peak around the global maximum and refines it.
    fn resolve(&self, signal: &[i32], peak: SamplePeak) -> PeakLocResult<PeakPosition> {
        let last = signal.len() - 1;

        // The rightmost-wins scan lands on the right edge of any flat top,
        // so one equality test against the left neighbor detects it. A
        // maximum at index 0 has no left neighbor and cannot start one.
        if peak.index > 0 && signal[peak.index - 1] == peak.value {
            let center = plateau_center(signal, peak.index, self.config.error_range)?;
            return Ok(PeakPosition {
                position: center as f64,
                shape: PeakShape::FlatTop,
            });
        }

        if peak.index == 0 || peak.index == last {
            return Ok(PeakPosition {
                position: peak.index as f64,
                shape: PeakShape::Boundary,
            });
        }

        let anchor = peak.index as isize;
        let radius = self.config.error_range as isize;
        let left_rival = window_peak(signal, anchor - radius, anchor - 1);
        let right_rival = window_peak(signal, anchor + 1, anchor + radius);

        let (left, right, shape) = match (left_rival, right_rival) {
            (None, None) => (peak.index - 1, peak.index + 1, PeakShape::Isolated),
            (Some(l), Some(r)) if l.value == r.value => {
                return Ok(PeakPosition {
                    position: peak.index as f64,
                    shape: PeakShape::BalancedRivals,
                });
            }
            (Some(l), Some(r)) if l.value > r.value => {
                (l.index, peak.index + 1, PeakShape::DominantRival)
            }
            (Some(_), Some(r)) => (peak.index - 1, r.index, PeakShape::DominantRival),
            (Some(l), None) => (l.index, peak.index + 1, PeakShape::DominantRival),
            (None, Some(r)) => (peak.index - 1, r.index, PeakShape::DominantRival),
        };

        let position = interpolate_triple(signal, left, peak.index, right)?;
        Ok(PeakPosition { position, shape })
    }
}

/// Locates the dominant peak with the default configuration.
///
/// Convenience wrapper over [`PeakLocator::new`] for one-shot callers.
pub fn locate_peak_position(signal: &[i32]) -> PeakLocResult<PeakPosition> {
    PeakLocator::new().locate(signal)
}
