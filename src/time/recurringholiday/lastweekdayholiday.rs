use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::time::utility::days_of_month;

/// The last occurrence of a weekday in a month, e.g. the last Monday of May.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct LastWeekdayHoliday {
    month: u32,
    weekday: Weekday,
}

impl LastWeekdayHoliday {
    pub const fn new(month: u32, weekday: Weekday) -> LastWeekdayHoliday {
        LastWeekdayHoliday { month, weekday }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn actual_date(&self, year: i32) -> Option<NaiveDate> {
        let eom = NaiveDate::from_ymd_opt(year, self.month, days_of_month(year, self.month))?;

        // Walk back from the end of the month to the target weekday
        let days_back = (eom.weekday().num_days_from_monday() + 7
                         - self.weekday.num_days_from_monday()) % 7;
        eom.checked_sub_days(Days::new(days_back as u64))
    }
}
