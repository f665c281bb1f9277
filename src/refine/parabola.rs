//! Three-point parabolic vertex fitting.

use crate::util::{PeakLocError, PeakLocResult};

/// Fits a parabola through `(-1, y0)`, `(0, y1)`, `(+1, y2)` and returns the
/// abscissa of its vertex.
///
/// With `c = y1`, `b = (y2 - y0) / 2` and `a = y0 - c + b` the vertex sits
/// at `-b / (2a)`. The samples are integers, so the colinear case `a == 0`
/// is detected exactly and reported as `None`; every other input yields a
/// finite offset.
pub fn parabola_vertex(y0: i32, y1: i32, y2: i32) -> Option<f64> {
    let (y0, y1, y2) = (y0 as f64, y1 as f64, y2 as f64);
    let c = y1;
    let b = (y2 - y0) / 2.0;
    let a = y0 - c + b;
    if a == 0.0 {
        return None;
    }
    Some(-b / (2.0 * a))
}

/// Interpolates the sub-sample peak position over a sample triple.
///
/// The three samples are fitted at unit spacing around `center` even when
/// the indices are not adjacent; the widened fits in [`crate::locate`] rely
/// on that fixed-abscissa convention. The result is `center` plus the
/// vertex offset.
///
/// # Errors
/// [`PeakLocError::IndexOutOfBounds`] when an index falls outside the
/// signal and [`PeakLocError::DegenerateFit`] when the samples are
/// colinear.
pub fn interpolate_triple(
    signal: &[i32],
    left: usize,
    center: usize,
    right: usize,
) -> PeakLocResult<f64> {
    let len = signal.len();
    for (index, context) in [(left, "left"), (center, "center"), (right, "right")] {
        if index >= len {
            return Err(PeakLocError::IndexOutOfBounds {
                index,
                len,
                context,
            });
        }
    }

    parabola_vertex(signal[left], signal[center], signal[right])
        .map(|offset| center as f64 + offset)
        .ok_or(PeakLocError::DegenerateFit {
            left,
            center,
            right,
        })
}

#[cfg(test)]
mod tests {
    use super::{interpolate_triple, parabola_vertex};
    use crate::util::PeakLocError;

    #[test]
    fn symmetric_triple_has_centered_vertex() {
        assert_eq!(parabola_vertex(5, 6, 5), Some(0.0));
    }

    #[test]
    fn vertex_leans_toward_larger_neighbor() {
        // (5, 10, 9): b = 2, a = -3, vertex at 1/3.
        let offset = parabola_vertex(5, 10, 9).unwrap();
        assert!((offset - 1.0 / 3.0).abs() < 1e-12);

        let mirrored = parabola_vertex(9, 10, 5).unwrap();
        assert!((mirrored + 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn colinear_triple_has_no_vertex() {
        assert_eq!(parabola_vertex(1, 2, 3), None);
        assert_eq!(parabola_vertex(4, 4, 4), None);
    }

    #[test]
    fn triple_interpolation_offsets_from_center() {
        let signal = [1, 2, 3, 4, 5, 10, 9, 4];
        let position = interpolate_triple(&signal, 4, 5, 6).unwrap();
        assert!((position - (5.0 + 1.0 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn non_adjacent_triple_keeps_unit_spacing() {
        // Same sample values as an adjacent fit, so the same offset from
        // the center index.
        let signal = [5, 0, 10, 0, 9];
        let position = interpolate_triple(&signal, 0, 2, 4).unwrap();
        assert!((position - (2.0 + 1.0 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn triple_bounds_are_checked() {
        let signal = [1, 5, 1];
        assert_eq!(
            interpolate_triple(&signal, 0, 1, 3),
            Err(PeakLocError::IndexOutOfBounds {
                index: 3,
                len: 3,
                context: "right"
            })
        );
    }

    #[test]
    fn colinear_triple_reports_degenerate_fit() {
        let signal = [1, 2, 3];
        assert_eq!(
            interpolate_triple(&signal, 0, 1, 2),
            Err(PeakLocError::DegenerateFit {
                left: 0,
                center: 1,
                right: 2
            })
        );
    }
}
