//! Nutation in longitude (Δψ) from a truncated IAU 2000B series.
//!
//! Only the thirteen largest lunisolar terms are kept. Each omitted term
//! is below 0.01″ and together they amount to roughly 0.1″, far below the
//! 0.01° (36″) accuracy of the solar theory they correct.
//!
//! Source: IERS Conventions 2010, Chapter 5, Tables 5.2e and 5.3b.

use std::f64::consts::TAU;

/// Arcseconds to radians conversion factor.
const AS2RAD: f64 = TAU / 1_296_000.0;

/// Delaunay fundamental arguments `[l, l', F, D, Ω]` in radians.
///
/// Coefficients from IERS Conventions 2010, Table 5.2e (Simon et al. 1994).
/// `t` = Julian centuries of TT since J2000.0.
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    // mean anomaly of the Moon
    let l = (485868.249036 + 1717915923.2178 * t + 31.8792 * t2 + 0.051635 * t3 - 0.00024470 * t4)
        * AS2RAD;
    // mean anomaly of the Sun
    let lp = (1287104.79305 + 129596581.0481 * t - 0.5532 * t2 + 0.000136 * t3 - 0.00001149 * t4)
        * AS2RAD;
    // mean argument of latitude of the Moon
    let f = (335779.526232 + 1739527262.8478 * t - 12.7512 * t2 - 0.001037 * t3 + 0.00000417 * t4)
        * AS2RAD;
    // mean elongation of the Moon from the Sun
    let d = (1072260.70369 + 1602961601.2090 * t - 6.3706 * t2 + 0.006593 * t3 - 0.00003169 * t4)
        * AS2RAD;
    // mean longitude of the Moon's ascending node
    let om =
        (450160.398036 - 6962890.5431 * t + 7.4722 * t2 + 0.007702 * t3 - 0.00005939 * t4) * AS2RAD;

    [l, lp, f, d, om]
}

/// Leading IAU 2000B terms for Δψ.
///
/// Each row: `[nl, nl', nF, nD, nΩ, S, S']`, amplitudes in 0.1 μas.
#[rustfmt::skip]
const DPSI_TERMS: [[i64; 7]; 13] = [
    //  nl  nl'  nF   nD   nΩ          S        S'
    [   0,   0,   0,   0,   1, -172064161, -174666],
    [   0,   0,   2,  -2,   2,  -13170906,   -1675],
    [   0,   0,   2,   0,   2,   -2276413,    -234],
    [   0,   0,   0,   0,   2,    2074554,     207],
    [   0,   1,   0,   0,   0,    1475877,   -3633],
    [   0,   1,   2,  -2,   2,    -516821,    1226],
    [   1,   0,   0,   0,   0,     711159,      73],
    [   0,   0,   2,   0,   1,    -387298,    -367],
    [   1,   0,   2,   0,   2,    -301461,     -36],
    [   0,  -1,   2,  -2,   2,     215829,    -494],
    [   0,   0,   2,  -2,   1,     128227,     137],
    [  -1,   0,   2,   0,   2,     123457,      11],
    [  -1,   0,   0,   2,   0,     156994,      10],
];

/// Nutation in longitude Δψ in arcseconds at `t` Julian centuries TT.
pub fn nutation_longitude_arcsec(t: f64) -> f64 {
    let args = fundamental_arguments(t);
    let sum: f64 = DPSI_TERMS
        .iter()
        .map(|row| {
            let arg: f64 = row[..5]
                .iter()
                .zip(args.iter())
                .map(|(&n, &a)| n as f64 * a)
                .sum();
            (row[5] as f64 + row[6] as f64 * t) * arg.sin()
        })
        .sum();
    sum * 1e-7
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dpsi_bounded_by_principal_term() {
        for i in 0..200 {
            let t = -1.0 + i as f64 * 0.01;
            let dpsi = nutation_longitude_arcsec(t);
            assert!(dpsi.abs() < 19.5, "Δψ = {dpsi} at t = {t}");
        }
    }

    #[test]
    fn dpsi_at_j2000() {
        // IAU 2000B Δψ at J2000.0 ≈ -13.93″
        let dpsi = nutation_longitude_arcsec(0.0);
        assert!((dpsi + 13.93).abs() < 0.1, "Δψ = {dpsi}");
    }
}
