//! The ephemeris seam consumed by the chart engine.

pub use saju_base::normalize_360;

use crate::error::EphemerisError;

/// Source of the sun's apparent ecliptic longitude.
///
/// Implementations receive a Julian Date in UT (the caller has already
/// removed the civil zone offset) and return degrees in `[0, 360)`.
/// Failures must be reported, never replaced by a fabricated value.
pub trait SunLongitude {
    fn sun_longitude_deg(&self, jd_ut: f64) -> Result<f64, EphemerisError>;
}

impl<F> SunLongitude for F
where
    F: Fn(f64) -> Result<f64, EphemerisError>,
{
    fn sun_longitude_deg(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        self(jd_ut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_is_an_adapter() {
        let fixed = |_jd: f64| -> Result<f64, EphemerisError> { Ok(123.0) };
        assert_eq!(fixed.sun_longitude_deg(2_451_545.0), Ok(123.0));
    }

    #[test]
    fn boxed_trait_object() {
        let boxed: Box<dyn SunLongitude> = Box::new(|jd: f64| -> Result<f64, EphemerisError> { Ok(jd % 360.0) });
        assert_eq!(boxed.sun_longitude_deg(370.0), Ok(10.0));
    }
}
