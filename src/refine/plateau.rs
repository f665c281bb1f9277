//! Flat-top plateau centering.

use crate::util::{PeakLocError, PeakLocResult};

/// Locates the center of a flat top given the plateau's right edge.
///
/// Walks leftward from `right_edge` over samples equal to
/// `signal[right_edge]` and returns the floor midpoint
/// `(right_edge - left_edge) / 2 + left_edge`. A flat top has no meaningful
/// sub-sample vertex, so the center is always an integer sample index.
///
/// # Errors
/// [`PeakLocError::MalformedPlateau`] as soon as the plateau width reaches
/// `2 * error_range`: a top that wide does not resemble a genuine peak and
/// usually means clipped or corrupted data. The walk stops early, so the
/// reported width equals the limit even when the actual run is longer.
/// [`PeakLocError::IndexOutOfBounds`] when `right_edge` falls outside the
/// signal.
pub fn plateau_center(
    signal: &[i32],
    right_edge: usize,
    error_range: usize,
) -> PeakLocResult<usize> {
    let len = signal.len();
    if right_edge >= len {
        return Err(PeakLocError::IndexOutOfBounds {
            index: right_edge,
            len,
            context: "right_edge",
        });
    }

    let top = signal[right_edge];
    let limit = 2 * error_range;
    let mut left_edge = right_edge;
    loop {
        let width = right_edge - left_edge + 1;
        if width >= limit {
            return Err(PeakLocError::MalformedPlateau { width, limit });
        }
        if left_edge == 0 || signal[left_edge - 1] != top {
            break;
        }
        left_edge -= 1;
    }

    Ok((right_edge - left_edge) / 2 + left_edge)
}
