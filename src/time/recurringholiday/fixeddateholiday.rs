use chrono::NaiveDate;

/// A holiday on the same month and day every year, e.g. July 4.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    pub const fn new(month: u32, day: u32) -> FixedDateHoliday {
        FixedDateHoliday { month, day }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn actual_date(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_day_every_year() {
        let independence_day = FixedDateHoliday::new(7, 4);
        assert_eq!(independence_day.actual_date(2018), NaiveDate::from_ymd_opt(2018, 7, 4));
        assert_eq!(independence_day.actual_date(2021), NaiveDate::from_ymd_opt(2021, 7, 4));
    }

    #[test]
    fn impossible_day_has_no_date() {
        assert_eq!(FixedDateHoliday::new(2, 30).actual_date(2024), None);
    }
}
