//! Coordinate frames and the altitude time-series computation.
//!
//! This is the in-crate stand-in for an external ephemeris provider: a J2000
//! galactic→ICRS rotation, Greenwich mean sidereal time, and the hour-angle
//! altitude formula. Accuracy is a few arcminutes, which is far below the 5°
//! horizon margin the visibility threshold carries.

pub mod altitude;
pub mod frames;
pub mod sidereal;

pub use altitude::*;
pub use frames::*;
pub use sidereal::*;
