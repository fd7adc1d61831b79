use chrono::NaiveDate;
use serde::Serialize;

/// A holiday resolved for one year: the date it falls on and the date it is
/// observed on.
#[derive(PartialEq, Eq, Hash, Clone, Debug, Serialize)]
pub struct ObservedHoliday {
    name: &'static str,
    actual_date: NaiveDate,
    observed_date: NaiveDate
}

impl ObservedHoliday {
    pub fn new(name: &'static str, actual_date: NaiveDate, observed_date: NaiveDate) -> ObservedHoliday {
        ObservedHoliday { name, actual_date, observed_date }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn actual_date(&self) -> NaiveDate {
        self.actual_date
    }

    pub fn observed_date(&self) -> NaiveDate {
        self.observed_date
    }

    pub fn is_shifted(&self) -> bool {
        self.actual_date != self.observed_date
    }
}
