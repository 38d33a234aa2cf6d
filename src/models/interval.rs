//! Visibility windows: contiguous time spans during which a target stays
//! at or above the elevation threshold.

use serde::{Deserialize, Serialize};

use super::time::ModifiedJulianDate;

/// A contiguous span of time during which the target is observable.
///
/// `start` is the timestamp of the first in-threshold sample of a run;
/// `end` is the first out-of-threshold sample after the run, or the last
/// sample of the series when the run is still open at end of data.
///
/// Invariants: `start <= end`; lists of windows are chronological and
/// non-overlapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibilityWindow {
    pub start: ModifiedJulianDate,
    pub end: ModifiedJulianDate,
}

impl VisibilityWindow {
    pub fn new(start: ModifiedJulianDate, end: ModifiedJulianDate) -> Self {
        Self { start, end }
    }

    /// Window length in days.
    pub fn duration_days(&self) -> qtty::Days {
        self.end - self.start
    }

    /// Whether this window overlaps or touches `other`.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start.value() <= other.end.value() && other.start.value() <= self.end.value()
    }
}

impl std::fmt::Display for VisibilityWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Merge a list of possibly-overlapping windows into a sorted,
/// non-overlapping list.
pub fn merge_windows(mut windows: Vec<VisibilityWindow>) -> Vec<VisibilityWindow> {
    windows.sort_by(|a, b| {
        a.start
            .value()
            .partial_cmp(&b.start.value())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut merged: Vec<VisibilityWindow> = Vec::new();
    for window in windows {
        if let Some(last) = merged.last_mut() {
            if window.start.value() <= last.end.value() {
                if window.end.value() > last.end.value() {
                    last.end = window.end;
                }
            } else {
                merged.push(window);
            }
        } else {
            merged.push(window);
        }
    }

    merged
}
