//! Analytic apparent solar longitude.
//!
//! Geometric longitude from the mean longitude plus the equation of
//! centre (Meeus, *Astronomical Algorithms*, ch. 25), referred to the
//! true equinox of date with truncated IAU 2000B nutation, and shifted by
//! annual aberration. UT inputs are carried to TT through the ΔT model.
//!
//! Accuracy is about 0.01°, i.e. a solar-term instant to within roughly
//! a quarter of an hour.

use saju_time::{J2000_JD, jd_ut_to_tt};

use crate::adapter::{SunLongitude, normalize_360};
use crate::error::EphemerisError;
use crate::nutation::nutation_longitude_arcsec;

/// Days accepted beyond the civil range: the 45-day decade-luck scan
/// plus the widest zone offset.
pub const RANGE_MARGIN_DAYS: f64 = 46.0;

/// JD (UT) of 1000-01-01T00:00 less the margin.
pub const MIN_JD_UT: f64 = 2_086_302.5 - RANGE_MARGIN_DAYS;

/// JD (UT) of 3001-01-01T00:00 plus the margin, so all of civil 3000 is covered.
pub const MAX_JD_UT: f64 = 2_817_152.5 + RANGE_MARGIN_DAYS;

/// Constant of annual aberration scaled to 1 AU, in arcseconds.
const ABERRATION_ARCSEC: f64 = 20.4898;

/// Self-contained solar theory implementing [`SunLongitude`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyticSun;

impl AnalyticSun {
    pub const fn new() -> Self {
        Self
    }

    /// Geometric longitude (mean equinox of date) and radius vector in AU
    /// at `t` Julian centuries TT.
    pub fn geometric(t: f64) -> (f64, f64) {
        let t2 = t * t;
        let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t2;
        let m = 357.52911 + 35999.05029 * t - 0.0001537 * t2;
        let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t2;

        let m_rad = m.to_radians();
        let c = (1.914602 - 0.004817 * t - 0.000014 * t2) * m_rad.sin()
            + (0.019993 - 0.000101 * t) * (2.0 * m_rad).sin()
            + 0.000289 * (3.0 * m_rad).sin();

        let true_lon = l0 + c;
        let v = (m + c).to_radians();
        let r = 1.000001018 * (1.0 - e * e) / (1.0 + e * v.cos());
        (normalize_360(true_lon), r)
    }

    /// Apparent longitude in degrees for a JD in TT.
    pub fn apparent_longitude_tt(jd_tt: f64) -> f64 {
        let t = (jd_tt - J2000_JD) / 36_525.0;
        let (lon, r) = Self::geometric(t);
        let correction_arcsec = nutation_longitude_arcsec(t) - ABERRATION_ARCSEC / r;
        normalize_360(lon + correction_arcsec / 3600.0)
    }
}

impl SunLongitude for AnalyticSun {
    fn sun_longitude_deg(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        if !jd_ut.is_finite() {
            return Err(EphemerisError::InvalidEpoch);
        }
        if !(MIN_JD_UT..=MAX_JD_UT).contains(&jd_ut) {
            return Err(EphemerisError::EpochOutOfRange { jd_ut });
        }
        Ok(Self::apparent_longitude_tt(jd_ut_to_tt(jd_ut)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_longitude() {
        // Apparent solar longitude at 2000-01-01T12:00 UT ≈ 280.37°
        let lon = AnalyticSun.sun_longitude_deg(J2000_JD).unwrap();
        assert!((lon - 280.37).abs() < 0.02, "lon = {lon}");
    }

    #[test]
    fn radius_vector_range() {
        for i in 0..36 {
            let (_, r) = AnalyticSun::geometric(i as f64 / 360.0);
            assert!((0.983..=1.017).contains(&r), "r = {r}");
        }
    }

    #[test]
    fn rejects_non_finite() {
        assert_eq!(
            AnalyticSun.sun_longitude_deg(f64::NAN),
            Err(EphemerisError::InvalidEpoch)
        );
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            AnalyticSun.sun_longitude_deg(MAX_JD_UT + 1.0),
            Err(EphemerisError::EpochOutOfRange { .. })
        ));
        assert!(matches!(
            AnalyticSun.sun_longitude_deg(MIN_JD_UT - 1.0),
            Err(EphemerisError::EpochOutOfRange { .. })
        ));
    }

    #[test]
    fn whole_civil_range_is_covered() {
        use saju_time::CivilTime;
        let first = CivilTime::from_ymd_hm(1000, 1, 1, 0, 0).unwrap();
        let last = CivilTime::from_ymd_hm(3000, 12, 31, 23, 59).unwrap();
        // 45 days of hourly scan either side, at the extreme zone offsets
        assert!(AnalyticSun.sun_longitude_deg(first.to_jd_ut(14.0) - 45.0).is_ok());
        assert!(AnalyticSun.sun_longitude_deg(last.to_jd_ut(-12.0) + 45.0).is_ok());
    }

    #[test]
    fn longitude_advances_about_one_degree_per_day() {
        let a = AnalyticSun.sun_longitude_deg(J2000_JD).unwrap();
        let b = AnalyticSun.sun_longitude_deg(J2000_JD + 1.0).unwrap();
        let step = normalize_360(b - a);
        assert!((0.95..1.03).contains(&step), "step = {step}");
    }
}
