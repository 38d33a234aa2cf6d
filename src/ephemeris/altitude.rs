//! Altitude time-series sampling for a fixed target and observer site.

use qtty::{Days, Degrees};
use tracing::debug;

use crate::models::{ModifiedJulianDate, ObservatorySite};

use super::frames::Icrs;
use super::sidereal::local_sidereal_time;

/// One-minute sampling step, in days.
pub const MINUTE_STEP: Days = Days::new(1.0 / 1440.0);

/// One point of the sampled altitude signal.
#[derive(Debug, Clone, Copy)]
pub struct AltitudeSample {
    pub time: ModifiedJulianDate,
    pub altitude: Degrees,
}

/// Altitude of `target` above the local horizon at `t`, as seen from `site`.
///
/// Hour-angle formula: `sin h = sin φ sin δ + cos φ cos δ cos H` with
/// `H = LST − α`. No refraction term; the horizon margin absorbs it.
pub fn altitude_at(target: &Icrs, site: &ObservatorySite, t: ModifiedJulianDate) -> Degrees {
    let lst = local_sidereal_time(t, site.longitude);
    let hour_angle = (lst.value() - target.ra().value()).to_radians();
    let dec = target.dec().value().to_radians();
    let lat = site.latitude.value().to_radians();

    let sin_alt = lat.sin() * dec.sin() + lat.cos() * dec.cos() * hour_angle.cos();
    Degrees::new(sin_alt.clamp(-1.0, 1.0).asin().to_degrees())
}

/// Sample the target's altitude from `start` over `span` at `step` intervals.
///
/// The grid is half-open: `start` is included, `start + span` is not, so a
/// one-day span at a one-minute step yields exactly 1440 samples. A
/// non-positive span yields an empty series.
pub fn altitude_series(
    target: &Icrs,
    site: &ObservatorySite,
    start: ModifiedJulianDate,
    span: Days,
    step: Days,
) -> Vec<AltitudeSample> {
    if span.value() <= 0.0 || step.value() <= 0.0 {
        return Vec::new();
    }

    let count = (span.value() / step.value()).round() as usize;
    debug!(
        site = site.name,
        count, "sampling altitude series at {} day step", step.value()
    );

    (0..count)
        .map(|i| {
            let t = start + Days::new(step.value() * i as f64);
            AltitudeSample {
                time: t,
                altitude: altitude_at(target, site, t),
            }
        })
        .collect()
}
