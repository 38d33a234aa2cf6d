//! Celestial coordinate frames and the galactic→ICRS rotation.

use qtty::Degrees;

/// Right ascension of the north galactic pole, J2000.
const NGP_RA_DEG: f64 = 192.85948;
/// Declination of the north galactic pole, J2000.
const NGP_DEC_DEG: f64 = 27.12825;
/// Galactic longitude of the north celestial pole, J2000.
const NCP_L_DEG: f64 = 122.93192;

/// A direction in the galactic frame.
#[derive(Debug, Clone, Copy)]
pub struct GalacticCoord {
    l: Degrees,
    b: Degrees,
}

impl GalacticCoord {
    pub fn new(l: Degrees, b: Degrees) -> Self {
        Self { l, b }
    }

    pub fn l(&self) -> Degrees {
        self.l
    }

    pub fn b(&self) -> Degrees {
        self.b
    }

    /// Rotate this direction into the ICRS equatorial frame.
    ///
    /// Uses the fixed J2000 galactic pole orientation; right ascension is
    /// normalized to [0, 360).
    pub fn to_icrs(&self) -> Icrs {
        let b = self.b.value().to_radians();
        let dl = (NCP_L_DEG - self.l.value()).to_radians();
        let ngp_dec = NGP_DEC_DEG.to_radians();

        let sin_dec = ngp_dec.sin() * b.sin() + ngp_dec.cos() * b.cos() * dl.cos();
        let y = b.cos() * dl.sin();
        let x = ngp_dec.cos() * b.sin() - ngp_dec.sin() * b.cos() * dl.cos();

        let dec = sin_dec.asin().to_degrees();
        let ra = (NGP_RA_DEG + y.atan2(x).to_degrees()).rem_euclid(360.0);

        Icrs::new(Degrees::new(ra), Degrees::new(dec))
    }
}

/// A direction in the ICRS equatorial frame.
#[derive(Debug, Clone, Copy)]
pub struct Icrs {
    ra: Degrees,
    dec: Degrees,
}

impl Icrs {
    pub fn new(ra: Degrees, dec: Degrees) -> Self {
        Self { ra, dec }
    }

    pub fn ra(&self) -> Degrees {
        self.ra
    }

    pub fn dec(&self) -> Degrees {
        self.dec
    }
}
