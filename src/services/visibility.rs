//! Visibility window extraction.
//!
//! Converts a sampled altitude signal crossing a fixed elevation threshold
//! into the list of maximal contiguous above-threshold windows. This is a
//! single forward pass over the series: O(N) time, the output list is the
//! only auxiliary allocation.

use qtty::Degrees;
use tracing::debug;

use crate::ephemeris::AltitudeSample;
use crate::models::VisibilityWindow;

/// Errors from window extraction.
#[derive(Debug, thiserror::Error)]
pub enum VisibilityError {
    #[error("altitude series is empty; nothing to extract")]
    EmptySeries,
    /// Start/end pairing self-check. Unreachable for a well-formed series;
    /// reaching it indicates a fault in the extraction pass itself.
    #[error("window bookkeeping mismatch: {starts} starts vs {ends} ends")]
    WindowMismatch { starts: usize, ends: usize },
}

/// Extract the maximal above-threshold windows from an altitude series.
///
/// `samples` must be in strictly increasing time order; uniform spacing is
/// not required. A window opens at the first sample of a run with
/// `altitude >= threshold` and closes at the first out-of-threshold sample
/// after the run, or at the final sample itself when the run is still open
/// at the end of the series.
///
/// The first sample has no predecessor: it can only ever open a window,
/// never close one.
pub fn extract_windows(
    samples: &[AltitudeSample],
    threshold: Degrees,
) -> Result<Vec<VisibilityWindow>, VisibilityError> {
    if samples.is_empty() {
        return Err(VisibilityError::EmptySeries);
    }

    let mut starts = Vec::new();
    let mut ends = Vec::new();
    let last = samples.len() - 1;

    for (i, sample) in samples.iter().enumerate() {
        let above = sample.altitude.value() >= threshold.value();
        let prev_above = i > 0 && samples[i - 1].altitude.value() >= threshold.value();

        if above {
            if !prev_above {
                starts.push(sample.time);
            }
            if i == last {
                // Run still open at end of data: close it on the last sample.
                ends.push(sample.time);
            }
        } else if prev_above {
            ends.push(sample.time);
        }
    }

    if starts.len() != ends.len() {
        return Err(VisibilityError::WindowMismatch {
            starts: starts.len(),
            ends: ends.len(),
        });
    }

    debug!(windows = starts.len(), "extracted visibility windows");

    Ok(starts
        .into_iter()
        .zip(ends)
        .map(|(start, end)| VisibilityWindow::new(start, end))
        .collect())
}
