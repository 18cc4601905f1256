//! Integration tests for the saju_rs facade.

use std::sync::Arc;
use std::thread;

use saju_rs::{
    BirthDate, CivilDate, CivilTime, EphemerisError, ErrorKind, Gender, LunarDate, PillarSlot,
    Saju, SolarTerm, Stem, TenGodLabel,
};

fn moment(y: i32, m: u32, d: u32, h: u32, mi: u32) -> CivilTime {
    CivilTime::from_ymd_hm(y, m, d, h, mi).unwrap()
}

#[test]
fn chart_through_facade() {
    let saju = Saju::new();
    let c = saju.chart(&moment(1990, 1, 1, 0, 0), Gender::Male).unwrap();
    assert_eq!(c.label(), "己巳 丙子 丙寅 戊子");
    assert_eq!(c.pillar(PillarSlot::Day).ten_god, TenGodLabel::Anchor);
}

#[test]
fn repeated_chart_is_cached() {
    let saju = Saju::new();
    let t = moment(1988, 8, 8, 8, 8);
    let a = saju.chart(&t, Gender::Female).unwrap();
    let b = saju.chart(&t, Gender::Female).unwrap();
    assert_eq!(a, b);
    let stats = saju.cache_stats();
    assert_eq!((stats.hits, stats.misses, stats.entries), (1, 1, 1));
}

#[test]
fn cache_capacity_bounds_entries() {
    let saju = Saju::new().with_cache_capacity(3);
    for hour in [1, 5, 9, 13, 17] {
        saju.chart(&moment(1988, 8, 8, hour, 0), Gender::Male).unwrap();
    }
    let stats = saju.cache_stats();
    assert_eq!((stats.misses, stats.entries), (5, 3));
}

#[test]
fn shared_across_threads() {
    let saju = Arc::new(Saju::new());
    let t = moment(2001, 5, 5, 13, 0);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let saju = Arc::clone(&saju);
            thread::spawn(move || saju.chart(&t, Gender::Male).unwrap())
        })
        .collect();
    let charts: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(charts.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(saju.cache_stats().entries, 1);
}

#[test]
fn lunar_input_uses_converter() {
    // lunar 1990-01-01 is solar 1990-01-27
    let saju = Saju::new().with_lunar_converter(|l: &LunarDate| {
        if (l.year, l.month, l.day, l.is_leap_month) == (1990, 1, 1, false) {
            CivilDate::new(1990, 1, 27).map_err(|e| e.to_string())
        } else {
            Err(format!("no table entry for {l:?}"))
        }
    });
    let lunar = BirthDate::Lunar(LunarDate {
        year: 1990,
        month: 1,
        day: 1,
        is_leap_month: false,
    });
    let c = saju.chart_for_date(&lunar, 12, 0, Gender::Male).unwrap();
    assert_eq!(c.birth, moment(1990, 1, 27, 12, 0));

    let leap = BirthDate::Lunar(LunarDate {
        year: 1990,
        month: 5,
        day: 1,
        is_leap_month: true,
    });
    let err = saju.chart_for_date(&leap, 12, 0, Gender::Male).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LunarConversion);
}

#[test]
fn lunar_input_without_converter() {
    let lunar = BirthDate::Lunar(LunarDate {
        year: 1990,
        month: 1,
        day: 1,
        is_leap_month: false,
    });
    let err = Saju::new()
        .chart_for_date(&lunar, 0, 0, Gender::Male)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LunarConversion);
}

#[test]
fn failing_adapter_is_ephemeris_unavailable() {
    let saju = Saju::new().with_sun(|_: f64| -> Result<f64, EphemerisError> {
        Err(EphemerisError::Unavailable("backend offline".into()))
    });
    let err = saju.chart(&moment(1990, 1, 1, 0, 0), Gender::Male).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EphemerisUnavailable);
    assert_eq!(saju.cache_stats().entries, 0);
}

#[test]
fn frozen_adapter_is_search_exhausted() {
    let saju = Saju::new().with_sun(|_: f64| -> Result<f64, EphemerisError> { Ok(100.0) });
    let err = saju.chart(&moment(1990, 6, 1, 0, 0), Gender::Male).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BoundarySearchExhausted);
}

#[test]
fn out_of_range_epoch() {
    let err = Saju::new()
        .sun_longitude(&moment(3500, 1, 1, 0, 0))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EphemerisUnavailable);
}

#[test]
fn solar_term_helpers() {
    let saju = Saju::new();
    let t = moment(2024, 1, 1, 0, 0);
    assert_eq!(saju.next_solar_term(&t).unwrap().term, SolarTerm::Sohan);
    assert_eq!(saju.prev_solar_term(&t).unwrap().term, SolarTerm::Dongji);
    let lon = saju.sun_longitude(&t).unwrap();
    assert!((279.0..281.0).contains(&lon), "lon = {lon}");
}

#[test]
fn report_for_day_stem() {
    let saju = Saju::new();
    let c = saju.chart(&moment(1990, 1, 1, 0, 0), Gender::Male).unwrap();
    let r = saju.report(&c, "테스트").unwrap();
    assert_eq!(r.day_stem, Stem::Byeong);
    assert!(r.header.starts_with("테스트님의"));
}
