//! # caniobserve
//!
//! Observability tools for radio-astronomy targets.
//!
//! Given a target in galactic coordinates and an observatory site, this crate
//! computes the time windows during which the target sits above a minimum
//! elevation, and exports those windows as calendar events in iCalendar
//! (`.ics`) format.
//!
//! The pipeline is a single linear computation:
//!
//! 1. Galactic (l, b) → ICRS frame rotation
//! 2. Minute-resolution altitude sampling over the requested look-ahead span
//! 3. Threshold-crossing window extraction
//! 4. `.ics` serialization
//!
//! ## Architecture
//!
//! - [`models`]: time (MJD), visibility windows, observatory sites
//! - [`ephemeris`]: coordinate frames, sidereal time, altitude sampling
//! - [`services`]: window extraction and calendar serialization
//! - [`cli`]: clap argument surface and orchestration

pub mod cli;
pub mod ephemeris;
pub mod models;
pub mod services;
