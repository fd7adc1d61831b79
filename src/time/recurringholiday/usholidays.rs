use chrono::Weekday;

use super::fixeddateholiday::FixedDateHoliday;
use super::holidayrule::HolidayRule;
use super::lastweekdayholiday::LastWeekdayHoliday;
use super::nthweekdayholiday::NthWeekdayHoliday;
use super::recurringholiday::RecurringHoliday;

const fn fixed(month: u32, day: u32) -> RecurringHoliday {
    RecurringHoliday::FixedDate(FixedDateHoliday::new(month, day))
}

const fn nth(month: u32, n: u8, weekday: Weekday) -> RecurringHoliday {
    RecurringHoliday::NthWeekday(NthWeekdayHoliday::new(month, n, weekday))
}

const fn last(month: u32, weekday: Weekday) -> RecurringHoliday {
    RecurringHoliday::LastWeekday(LastWeekdayHoliday::new(month, weekday))
}

/// US holidays in calendar order. The banking (Federal Reserve) set is a strict
/// superset of the business set.
pub const US_HOLIDAY_RULES: [HolidayRule; 11] = [
    //                name                          rule                         business banking
    HolidayRule::new("New Year's Day",             fixed(1, 1),                 true,    true),
    HolidayRule::new("Martin Luther King Jr. Day", nth(1, 3, Weekday::Mon),     true,    true),
    HolidayRule::new("Presidents' Day",            nth(2, 3, Weekday::Mon),     false,   true),
    HolidayRule::new("Memorial Day",               last(5, Weekday::Mon),       true,    true),
    HolidayRule::new("Juneteenth",                 fixed(6, 19),                false,   true),
    HolidayRule::new("Independence Day",           fixed(7, 4),                 true,    true),
    HolidayRule::new("Labor Day",                  nth(9, 1, Weekday::Mon),     true,    true),
    HolidayRule::new("Columbus Day",               nth(10, 2, Weekday::Mon),    false,   true),
    HolidayRule::new("Veterans Day",               fixed(11, 11),               false,   true),
    HolidayRule::new("Thanksgiving Day",           nth(11, 4, Weekday::Thu),    true,    true),
    HolidayRule::new("Christmas Day",              fixed(12, 25),               true,    true),
];
