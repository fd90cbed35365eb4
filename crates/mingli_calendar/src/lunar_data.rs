//! Lunar year table, 1900–2100.
//!
//! Each raw entry is a bit-packed year record:
//! - bits 0–3: leap month number (0 = no leap month)
//! - bits 4–15: months 1..12, bit `0x10000 >> m` set → month `m` has 30 days, else 29
//! - bit 16: leap month has 30 days when set, else 29
//!
//! The packed table is decoded at compile time into [`LunarYear`] records so
//! lookups never touch the bit layout.

/// First lunar year covered by the table. Its new year falls on 1900-01-31.
pub const LUNAR_START_YEAR: i32 = 1900;

/// Last lunar year covered by the table.
pub const LUNAR_END_YEAR: i32 = 2100;

const YEAR_COUNT: usize = (LUNAR_END_YEAR - LUNAR_START_YEAR + 1) as usize;

#[rustfmt::skip]
const RAW_LUNAR_INFO: [u32; YEAR_COUNT] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2,
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977,
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970,
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950,
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557,
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0,
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0,
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6,
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570,
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0,
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5,
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930,
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530,
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45,
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0,
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0,
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4,
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0,
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160,
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252,
    0x0d520,];

/// One month of a lunar year, in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarMonth {
    /// Month number (1..=12). A leap month repeats the number it follows.
    pub month: u8,
    pub is_leap: bool,
    /// 29 or 30.
    pub days: u8,
}

/// Decoded record of one lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarYear {
    month_days: [u8; 12],
    leap_month: Option<u8>,
    leap_days: Option<u8>,
}

impl LunarYear {
    const fn decode(raw: u32) -> Self {
        let mut month_days = [29u8; 12];
        let mut m = 1;
        while m <= 12 {
            if raw & (0x10000 >> m) != 0 {
                month_days[m - 1] = 30;
            }
            m += 1;
        }
        let leap = (raw & 0xf) as u8;
        let (leap_month, leap_days) = if leap == 0 {
            (None, None)
        } else if raw & 0x10000 != 0 {
            (Some(leap), Some(30))
        } else {
            (Some(leap), Some(29))
        };
        Self {
            month_days,
            leap_month,
            leap_days,
        }
    }

    /// Length of regular month `month` (1..=12).
    pub fn month_days(&self, month: u8) -> Option<u8> {
        if (1..=12).contains(&month) {
            Some(self.month_days[month as usize - 1])
        } else {
            None
        }
    }

    /// Number of the month that is followed by a leap duplicate, if any.
    pub fn leap_month(&self) -> Option<u8> {
        self.leap_month
    }

    /// Length of the leap month, if any.
    pub fn leap_days(&self) -> Option<u8> {
        self.leap_days
    }

    /// Number of months in the year: 12 or 13.
    pub fn month_count(&self) -> u8 {
        if self.leap_month.is_some() { 13 } else { 12 }
    }

    /// Total days in the year.
    pub fn total_days(&self) -> u32 {
        let regular: u32 = self.month_days.iter().map(|&d| d as u32).sum();
        regular + self.leap_days.unwrap_or(0) as u32
    }

    /// Months in calendar order, with the leap month inserted after the
    /// regular month of the same number.
    pub fn months(&self) -> impl Iterator<Item = LunarMonth> + '_ {
        (1..=12u8).flat_map(move |month| {
            let regular = LunarMonth {
                month,
                is_leap: false,
                days: self.month_days[month as usize - 1],
            };
            let leap = match (self.leap_month, self.leap_days) {
                (Some(lm), Some(days)) if lm == month => Some(LunarMonth {
                    month,
                    is_leap: true,
                    days,
                }),
                _ => None,
            };
            std::iter::once(regular).chain(leap)
        })
    }
}

const fn decode_all() -> [LunarYear; YEAR_COUNT] {
    let mut out = [LunarYear {
        month_days: [0; 12],
        leap_month: None,
        leap_days: None,
    }; YEAR_COUNT];
    let mut i = 0;
    while i < YEAR_COUNT {
        out[i] = LunarYear::decode(RAW_LUNAR_INFO[i]);
        i += 1;
    }
    out
}

static LUNAR_YEARS: [LunarYear; YEAR_COUNT] = decode_all();

/// Decoded record for a lunar year, or `None` outside 1900–2100.
pub fn lunar_year(year: i32) -> Option<&'static LunarYear> {
    if !(LUNAR_START_YEAR..=LUNAR_END_YEAR).contains(&year) {
        return None;
    }
    LUNAR_YEARS.get((year - LUNAR_START_YEAR) as usize)
}
