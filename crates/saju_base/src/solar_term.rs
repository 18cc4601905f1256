//! The 24 solar terms (jeolgi), 15° sectors of apparent solar longitude.
//!
//! Index 0 is Chunbun (the March equinox, 0°). Ipchun, the start of the
//! astrological year, is index 21 at 315°. Every other term starting at
//! Ipchun (Ipchun, Gyeongchip, Cheongmyeong, ...) opens one of the twelve
//! astrological months.

use serde::Serialize;

use crate::util::sector_index;

/// Width of one solar-term sector in degrees.
pub const SOLAR_TERM_SPAN: f64 = 15.0;

/// Solar longitude where the astrological year begins (Ipchun).
pub const YEAR_START_LONGITUDE: f64 = 315.0;

/// The 24 solar terms, ordered by longitude from 0°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum SolarTerm {
    Chunbun = 0,
    Cheongmyeong,
    Gogu,
    Ipha,
    Soman,
    Mangjong,
    Haji,
    Soseo,
    Daeseo,
    Ipchu,
    Cheoseo,
    Baengno,
    Chubun,
    Hallo,
    Sanggang,
    Ipdong,
    Soseol,
    Daeseol,
    Dongji,
    Sohan,
    Daehan,
    Ipchun,
    Usu,
    Gyeongchip,
}

/// All 24 terms in longitude order (index 0 = Chunbun at 0°).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::Chunbun,
    SolarTerm::Cheongmyeong,
    SolarTerm::Gogu,
    SolarTerm::Ipha,
    SolarTerm::Soman,
    SolarTerm::Mangjong,
    SolarTerm::Haji,
    SolarTerm::Soseo,
    SolarTerm::Daeseo,
    SolarTerm::Ipchu,
    SolarTerm::Cheoseo,
    SolarTerm::Baengno,
    SolarTerm::Chubun,
    SolarTerm::Hallo,
    SolarTerm::Sanggang,
    SolarTerm::Ipdong,
    SolarTerm::Soseol,
    SolarTerm::Daeseol,
    SolarTerm::Dongji,
    SolarTerm::Sohan,
    SolarTerm::Daehan,
    SolarTerm::Ipchun,
    SolarTerm::Usu,
    SolarTerm::Gyeongchip,
];

const SOLAR_TERM_NAMES: [&str; 24] = [
    "Chunbun",
    "Cheongmyeong",
    "Gogu",
    "Ipha",
    "Soman",
    "Mangjong",
    "Haji",
    "Soseo",
    "Daeseo",
    "Ipchu",
    "Cheoseo",
    "Baengno",
    "Chubun",
    "Hallo",
    "Sanggang",
    "Ipdong",
    "Soseol",
    "Daeseol",
    "Dongji",
    "Sohan",
    "Daehan",
    "Ipchun",
    "Usu",
    "Gyeongchip",
];

impl SolarTerm {
    /// 0-based index (Chunbun=0 .. Gyeongchip=23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(i: u8) -> Option<Self> {
        ALL_SOLAR_TERMS.get(i as usize).copied()
    }

    pub fn name(self) -> &'static str {
        SOLAR_TERM_NAMES[self.index() as usize]
    }

    /// Longitude at which this term begins.
    pub fn start_longitude(self) -> f64 {
        self.index() as f64 * SOLAR_TERM_SPAN
    }

    /// True for the twelve terms that open an astrological month.
    pub fn opens_month(self) -> bool {
        // 315° and every 30° from it: indices 21, 23, 1, 3, ...
        self.index() % 2 == 1
    }
}

/// Sector index 0..24 for a solar longitude: `floor(λ / 15)`.
pub fn solar_term_index(sun_lon_deg: f64) -> u8 {
    sector_index(sun_lon_deg, 0.0, SOLAR_TERM_SPAN, 24)
}

/// Solar term containing a longitude.
pub fn solar_term_from_longitude(sun_lon_deg: f64) -> SolarTerm {
    ALL_SOLAR_TERMS[solar_term_index(sun_lon_deg) as usize]
}
