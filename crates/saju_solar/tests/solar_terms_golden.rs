//! Golden checks of the analytic sun against published solar-term instants.
//!
//! Pure-math tests (no kernel files needed). Instants are UT, to the minute.

use saju_solar::{AnalyticSun, SunLongitude};
use saju_time::calendar_to_jd;

fn jd_ut(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> f64 {
    calendar_to_jd(
        year,
        month,
        day as f64 + hour as f64 / 24.0 + minute as f64 / 1440.0,
    )
}

/// Signed angular difference folded into (-180, 180].
fn angle_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

fn assert_longitude(jd: f64, expected_deg: f64, label: &str) {
    let lon = AnalyticSun.sun_longitude_deg(jd).unwrap();
    let diff = angle_diff(lon, expected_deg);
    assert!(diff.abs() < 0.02, "{label}: lon = {lon}, expected {expected_deg}");
}

#[test]
fn march_equinox_2024() {
    assert_longitude(jd_ut(2024, 3, 20, 3, 6), 0.0, "2024 March equinox");
}

#[test]
fn september_equinox_2024() {
    assert_longitude(jd_ut(2024, 9, 22, 12, 44), 180.0, "2024 September equinox");
}

#[test]
fn december_solstice_2024() {
    assert_longitude(jd_ut(2024, 12, 21, 9, 21), 270.0, "2024 December solstice");
}

#[test]
fn ipchun_2024() {
    // 2024-02-04 17:27 KST
    assert_longitude(jd_ut(2024, 2, 4, 8, 27), 315.0, "2024 Ipchun");
}

#[test]
fn ipchun_1990() {
    // 1990-02-04 11:14 KST
    assert_longitude(jd_ut(1990, 2, 4, 2, 14), 315.0, "1990 Ipchun");
}

#[test]
fn output_always_normalized() {
    let start = jd_ut(1999, 12, 1, 0, 0);
    for i in 0..800 {
        let lon = AnalyticSun.sun_longitude_deg(start + i as f64 * 0.5).unwrap();
        assert!((0.0..360.0).contains(&lon), "lon = {lon}");
    }
}
