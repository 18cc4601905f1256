//! Birth-date input: solar dates pass straight through, lunar dates go
//! through an external converter first.

use saju_time::{CivilDate, CivilTime};
use serde::{Deserialize, Serialize};

use crate::error::SajuError;

/// A date on the lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Whether `month` is the intercalary (leap) month of the year.
    pub is_leap_month: bool,
}

/// Birth date as entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BirthDate {
    Solar(CivilDate),
    Lunar(LunarDate),
}

/// Lunar-to-solar conversion service.
pub trait LunarConverter {
    fn to_solar(&self, lunar: &LunarDate) -> Result<CivilDate, String>;
}

impl<F> LunarConverter for F
where
    F: Fn(&LunarDate) -> Result<CivilDate, String>,
{
    fn to_solar(&self, lunar: &LunarDate) -> Result<CivilDate, String> {
        self(lunar)
    }
}

impl BirthDate {
    /// Solar calendar date, converting lunar input through `converter`.
    pub fn to_solar(
        &self,
        converter: Option<&(dyn LunarConverter + Send + Sync)>,
    ) -> Result<CivilDate, SajuError> {
        match self {
            Self::Solar(date) => {
                date.validate()?;
                Ok(*date)
            }
            Self::Lunar(lunar) => {
                let converter = converter.ok_or_else(|| {
                    SajuError::LunarConversion("no lunar converter configured".into())
                })?;
                let date = converter.to_solar(lunar).map_err(SajuError::LunarConversion)?;
                date.validate()?;
                Ok(date)
            }
        }
    }

    /// Birth moment at `hour:minute` on the solar date.
    pub fn at(
        &self,
        hour: u32,
        minute: u32,
        converter: Option<&(dyn LunarConverter + Send + Sync)>,
    ) -> Result<CivilTime, SajuError> {
        let d = self.to_solar(converter)?;
        Ok(CivilTime::from_ymd_hm(d.year, d.month, d.day, hour, minute)?)
    }
}
