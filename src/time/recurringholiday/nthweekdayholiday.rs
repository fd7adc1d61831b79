use chrono::{
    NaiveDate,
    Weekday
};

/// The `n`-th occurrence of a weekday in a month, counted from the first day
/// of the month, e.g. the third Monday of January.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct NthWeekdayHoliday {
    month: u32,
    n: u8,
    weekday: Weekday,
}

impl NthWeekdayHoliday {
    pub const fn new(month: u32, n: u8, weekday: Weekday) -> NthWeekdayHoliday {
        NthWeekdayHoliday { month, n, weekday }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn n(&self) -> u8 {
        self.n
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn actual_date(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_weekday_of_month_opt(year, self.month, self.weekday, self.n)
    }
}
