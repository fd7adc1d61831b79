use chrono::{Datelike, NaiveDate};

use super::fixeddateholiday::FixedDateHoliday;
use super::lastweekdayholiday::LastWeekdayHoliday;
use super::nthweekdayholiday::NthWeekdayHoliday;

/// How a holiday's actual date is derived from a year.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum RecurringHoliday {
    FixedDate(FixedDateHoliday),
    NthWeekday(NthWeekdayHoliday),
    LastWeekday(LastWeekdayHoliday)
}

impl RecurringHoliday {
    /// The holiday's calendar date in `year`, before any weekend observance.
    /// `None` only when the date cannot be represented.
    pub fn actual_date(&self, year: i32) -> Option<NaiveDate> {
        match self {
            RecurringHoliday::FixedDate(holiday) => holiday.actual_date(year),
            RecurringHoliday::NthWeekday(holiday) => holiday.actual_date(year),
            RecurringHoliday::LastWeekday(holiday) => holiday.actual_date(year)
        }
    }

    pub fn is_actual_date(&self, d: &NaiveDate) -> bool {
        self.actual_date(d.year()).is_some_and(|actual| actual == *d)
    }
}

impl From<FixedDateHoliday> for RecurringHoliday {
    fn from(holiday: FixedDateHoliday) -> RecurringHoliday {
        RecurringHoliday::FixedDate(holiday)
    }
}

impl From<NthWeekdayHoliday> for RecurringHoliday {
    fn from(holiday: NthWeekdayHoliday) -> RecurringHoliday {
        RecurringHoliday::NthWeekday(holiday)
    }
}

impl From<LastWeekdayHoliday> for RecurringHoliday {
    fn from(holiday: LastWeekdayHoliday) -> RecurringHoliday {
        RecurringHoliday::LastWeekday(holiday)
    }
}
