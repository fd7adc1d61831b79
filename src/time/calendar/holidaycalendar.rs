use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::time::recurringholiday::observedholiday::ObservedHoliday;
use crate::time::utility::is_weekend;

/// Years whose observed holidays can land on a date in `d.year()`.
/// Observance shifts at most one day, so only neighbouring years matter.
fn candidate_years(d: NaiveDate) -> [i32; 3] {
    let year = d.year();
    [year, year + 1, year - 1]
}

/// A named set of observed holidays, queried one year at a time.
///
/// Implementors must be `Send + Sync`: calendars are shared by every
/// `CalendarTime` in the process.
pub trait HolidayCalendar: Send + Sync {
    fn name(&self) -> &str;

    /// One entry per holiday rule for `year`, sorted by observed date.
    fn observed_holidays(&self, year: i32) -> Arc<[ObservedHoliday]>;

    fn is_observed_holiday(&self, d: NaiveDate) -> bool {
        candidate_years(d).into_iter().any(|year| {
            self.observed_holidays(year)
                .iter()
                .any(|holiday| holiday.observed_date() == d)
        })
    }

    /// The holiday observed on `d`; failing that, the holiday whose actual
    /// date is `d` (a weekend holiday that is observed on another day).
    fn holiday_named(&self, d: NaiveDate) -> Option<ObservedHoliday> {
        for year in candidate_years(d) {
            let holidays = self.observed_holidays(year);
            if let Some(holiday) = holidays.iter().find(|h| h.observed_date() == d) {
                return Some(holiday.clone());
            }
        }
        self.observed_holidays(d.year())
            .iter()
            .find(|h| h.actual_date() == d)
            .cloned()
    }

    fn is_business_day(&self, d: NaiveDate) -> bool {
        !is_weekend(d) && !self.is_observed_holiday(d)
    }

    /// Steps forward one calendar day at a time, counting only business days
    /// of this calendar, until `n` have been counted. Returns `horizon` if the
    /// walk runs past the last representable date.
    fn shift_n_business_day(&self, horizon: NaiveDate, n: u32) -> NaiveDate {
        let mut m = n;
        let mut d = horizon;
        while m > 0 {
            d = match d.succ_opt() {
                Some(next) => next,
                None => return horizon
            };
            m -= self.is_business_day(d) as u32;
        }
        d
    }
}
