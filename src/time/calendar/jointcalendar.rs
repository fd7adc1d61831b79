use std::sync::Arc;

use chrono::NaiveDate;

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::recurringholiday::observedholiday::ObservedHoliday;

/// Union of two calendars: a date is a holiday if it is a holiday in either.
///
/// Name lookups consult `c1` before `c2`.
pub struct JointCalendar {
    name: String,
    c1: Arc<dyn HolidayCalendar>,
    c2: Arc<dyn HolidayCalendar>
}

impl JointCalendar {
    pub fn union(c1: Arc<dyn HolidayCalendar>, c2: Arc<dyn HolidayCalendar>) -> JointCalendar {
        let name = format!("{} | {}", c1.name(), c2.name());
        JointCalendar { name, c1, c2 }
    }

    pub fn c1(&self) -> &Arc<dyn HolidayCalendar> {
        &self.c1
    }

    pub fn c2(&self) -> &Arc<dyn HolidayCalendar> {
        &self.c2
    }
}

impl HolidayCalendar for JointCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn observed_holidays(&self, year: i32) -> Arc<[ObservedHoliday]> {
        let mut holidays: Vec<ObservedHoliday> = self.c1.observed_holidays(year).to_vec();
        holidays.extend(self.c2.observed_holidays(year).iter().cloned());
        holidays.sort_by_key(|holiday| holiday.observed_date());
        holidays.into()
    }

    #[inline]
    fn is_observed_holiday(&self, d: NaiveDate) -> bool {
        self.c1.is_observed_holiday(d) || self.c2.is_observed_holiday(d)
    }

    fn holiday_named(&self, d: NaiveDate) -> Option<ObservedHoliday> {
        self.c1.holiday_named(d).or_else(|| self.c2.holiday_named(d))
    }
}
