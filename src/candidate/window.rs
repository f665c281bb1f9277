//! Windowed local-maximum scan.

use super::SamplePeak;

/// Finds the maximum sample in `start..=end` and keeps it only if it is a
/// strict local peak of the full signal.
///
/// The bounds are signed so callers can derive them by plain offset
/// arithmetic around an anchor index. A window that pokes outside the
/// signal, on either side, is treated as absent rather than truncated:
/// clipping it would score a partial neighborhood as if it were complete.
/// An inverted window (`start > end`) is absent as well.
///
/// Among equal in-window maxima the scan keeps the leftmost index. The
/// winner then has to beat both of its immediate neighbors in the full
/// signal strictly; a neighbor beyond the signal edge counts as `i32::MIN`,
/// so a maximum sitting on the first or last sample can still qualify.
pub fn window_peak(signal: &[i32], start: isize, end: isize) -> Option<SamplePeak> {
    let last = signal.len() as isize - 1;
    if start < 0 || start > last || end < 0 || end > last {
        return None;
    }
    let (start, end) = (start as usize, end as usize);
    if start > end {
        return None;
    }

    let mut peak = SamplePeak {
        index: start,
        value: signal[start],
    };
    for index in start + 1..=end {
        if signal[index] > peak.value {
            peak = SamplePeak {
                index,
                value: signal[index],
            };
        }
    }

    let left = if peak.index > 0 {
        signal[peak.index - 1]
    } else {
        i32::MIN
    };
    let right = if peak.index + 1 < signal.len() {
        signal[peak.index + 1]
    } else {
        i32::MIN
    };

    if left < peak.value && peak.value > right {
        Some(peak)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::window_peak;
    use crate::candidate::SamplePeak;

    #[test]
    fn strict_peak_qualifies() {
        let signal = [1, 5, 2, 0];
        assert_eq!(
            window_peak(&signal, 0, 3),
            Some(SamplePeak { index: 1, value: 5 })
        );
    }

    #[test]
    fn out_of_bounds_window_is_absent() {
        let signal = [1, 5, 2];
        assert_eq!(window_peak(&signal, -1, 1), None);
        assert_eq!(window_peak(&signal, 1, 3), None);
        assert_eq!(window_peak(&signal, 3, 4), None);
    }

    #[test]
    fn inverted_window_is_absent() {
        let signal = [1, 2, 3];
        assert_eq!(window_peak(&signal, 2, 1), None);
    }

    #[test]
    fn empty_signal_has_no_peak() {
        assert_eq!(window_peak(&[], 0, 0), None);
    }

    #[test]
    fn earliest_equal_maximum_wins() {
        let signal = [1, 5, 2, 5, 1];
        assert_eq!(
            window_peak(&signal, 0, 4),
            Some(SamplePeak { index: 1, value: 5 })
        );
    }

    #[test]
    fn plateau_maximum_does_not_qualify() {
        let signal = [1, 4, 4, 2];
        assert_eq!(window_peak(&signal, 0, 3), None);
    }

    #[test]
    fn edge_maximum_faces_virtual_minimum() {
        let signal = [3, 2, 1];
        assert_eq!(
            window_peak(&signal, 0, 2),
            Some(SamplePeak { index: 0, value: 3 })
        );
        let signal = [1, 2, 3];
        assert_eq!(
            window_peak(&signal, 0, 2),
            Some(SamplePeak { index: 2, value: 3 })
        );
    }

    #[test]
    fn window_maximum_shadowed_by_outside_neighbor() {
        // The maximum of 1..=2 is at index 2, but the sample just past the
        // window is larger, so it is not a local peak of the full signal.
        let signal = [0, 1, 4, 9, 0];
        assert_eq!(window_peak(&signal, 1, 2), None);
    }

    #[test]
    fn single_sample_window() {
        let signal = [0, 7, 0];
        assert_eq!(
            window_peak(&signal, 1, 1),
            Some(SamplePeak { index: 1, value: 7 })
        );
        assert_eq!(window_peak(&signal, 0, 0), None);
    }
}
