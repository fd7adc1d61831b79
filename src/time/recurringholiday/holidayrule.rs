use chrono::NaiveDate;

use super::recurringholiday::RecurringHoliday;

/// A named holiday and the calendars it closes.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct HolidayRule {
    name: &'static str,
    recurring_holiday: RecurringHoliday,
    applies_to_business: bool,
    applies_to_banking: bool
}

impl HolidayRule {
    pub const fn new(name: &'static str,
                     recurring_holiday: RecurringHoliday,
                     applies_to_business: bool,
                     applies_to_banking: bool) -> HolidayRule {
        HolidayRule {
            name,
            recurring_holiday,
            applies_to_business,
            applies_to_banking
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn recurring_holiday(&self) -> &RecurringHoliday {
        &self.recurring_holiday
    }

    pub fn applies_to_business(&self) -> bool {
        self.applies_to_business
    }

    pub fn applies_to_banking(&self) -> bool {
        self.applies_to_banking
    }

    pub fn actual_date(&self, year: i32) -> Option<NaiveDate> {
        self.recurring_holiday.actual_date(year)
    }
}
