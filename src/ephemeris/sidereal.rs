//! Greenwich and local mean sidereal time.

use qtty::Degrees;

use crate::models::ModifiedJulianDate;

/// JD of the J2000.0 epoch.
const J2000_JD: f64 = 2_451_545.0;
/// Offset between JD and MJD: `JD = MJD + MJD_EPOCH`.
const MJD_EPOCH: f64 = 2_400_000.5;

/// GMST at J2000.0, degrees.
const GMST_AT_J2000_DEG: f64 = 280.460_618_37;
/// Earth rotation rate, degrees per UT day.
const GMST_RATE_DEG_PER_DAY: f64 = 360.985_647_366_29;

/// Greenwich mean sidereal time at `t`, in degrees [0, 360).
///
/// Linear expression about J2000; UT1 is approximated by UTC, which costs
/// under a second of time and is negligible against the horizon margin.
pub fn gmst(t: ModifiedJulianDate) -> Degrees {
    let days_since_j2000 = t.value() + MJD_EPOCH - J2000_JD;
    let theta = GMST_AT_J2000_DEG + GMST_RATE_DEG_PER_DAY * days_since_j2000;
    Degrees::new(theta.rem_euclid(360.0))
}

/// Local mean sidereal time for an observer at `longitude` (east-positive).
pub fn local_sidereal_time(t: ModifiedJulianDate, longitude: Degrees) -> Degrees {
    Degrees::new((gmst(t).value() + longitude.value()).rem_euclid(360.0))
}
