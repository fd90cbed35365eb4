//! Free functions over the calendar.

use mingli_calendar::{SexagenaryDate, SolarDateTime, lunar_to_solar, solar_to_lunar};

use crate::error::MingliError;

/// Lunar date and four pillars of a solar time.
pub fn lunar(date: SolarDateTime) -> Result<SexagenaryDate, MingliError> {
    Ok(solar_to_lunar(&date)?)
}

/// Solar date of a lunar date; `is_leap` selects the leap duplicate.
pub fn solar(year: i32, month: u8, day: u8, is_leap: bool) -> Result<SolarDateTime, MingliError> {
    Ok(lunar_to_solar(year, month, day, is_leap)?)
}
