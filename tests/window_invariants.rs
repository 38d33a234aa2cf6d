//! Property-based checks on the window extractor: starts and ends always
//! pair off, and the output list is chronological and non-overlapping for
//! any altitude series.

use proptest::prelude::*;
use qtty::Degrees;

use caniobserve::ephemeris::AltitudeSample;
use caniobserve::models::ModifiedJulianDate;
use caniobserve::services::extract_windows;

fn series(altitudes: &[f64]) -> Vec<AltitudeSample> {
    altitudes
        .iter()
        .enumerate()
        .map(|(i, &alt)| AltitudeSample {
            time: ModifiedJulianDate::new(60000.0 + i as f64 / 1440.0),
            altitude: Degrees::new(alt),
        })
        .collect()
}

proptest! {
    #[test]
    fn extraction_never_leaves_an_open_window(
        altitudes in prop::collection::vec(-90.0f64..90.0, 1..300),
        threshold in -30.0f64..30.0,
    ) {
        // extract_windows returning Ok means the start/end counts matched.
        let windows = extract_windows(&series(&altitudes), Degrees::new(threshold)).unwrap();

        for w in &windows {
            prop_assert!(w.start.value() <= w.end.value());
        }
        for pair in windows.windows(2) {
            prop_assert!(pair[0].end.value() <= pair[1].start.value());
        }
    }

    #[test]
    fn every_window_start_is_an_above_threshold_sample(
        altitudes in prop::collection::vec(-90.0f64..90.0, 1..300),
        threshold in -30.0f64..30.0,
    ) {
        let samples = series(&altitudes);
        let windows = extract_windows(&samples, Degrees::new(threshold)).unwrap();

        for w in &windows {
            let sample = samples
                .iter()
                .find(|s| s.time == w.start)
                .expect("window start must lie on the sample grid");
            prop_assert!(sample.altitude.value() >= threshold);
        }
    }

    #[test]
    fn window_count_bounded_by_crossings(
        altitudes in prop::collection::vec(-90.0f64..90.0, 1..300),
    ) {
        let windows = extract_windows(&series(&altitudes), Degrees::new(0.0)).unwrap();
        prop_assert!(windows.len() <= altitudes.len() / 2 + 1);
    }
}
