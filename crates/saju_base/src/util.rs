//! Angle helpers shared by the longitude-driven pillars.

/// Wrap an angle into `[0, 360)`.
///
/// A tiny negative input would otherwise come back as exactly 360.0
/// after the `+ 360` step; that case folds to 0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    if r >= 360.0 { 0.0 } else { r }
}

/// Index of the `span`-degree sector containing `lon`, counting from
/// `origin`. Clamped to `count - 1`.
pub fn sector_index(lon: f64, origin: f64, span: f64, count: u8) -> u8 {
    let shifted = normalize_360(lon - origin);
    ((shifted / span).floor() as u8).min(count - 1)
}
