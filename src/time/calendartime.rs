use std::fmt;
use std::str::FromStr;

use chrono::{
    DateTime,
    Datelike,
    FixedOffset,
    LocalResult,
    NaiveDate,
    NaiveDateTime,
    Offset,
    SecondsFormat,
    TimeDelta,
    TimeZone,
    Timelike,
    Utc,
    Weekday
};
use chrono_tz::Tz;
use serde::{
    Serialize,
    Serializer
};
use serde::de;

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::uscalendars::Calendars;
use crate::time::calendarzone::CalendarZone;
use crate::time::recurringholiday::observedholiday::ObservedHoliday;
use crate::time::timeerror::TimeError;
use crate::time::utility::is_weekend;

/// Largest day count accepted by `add_business_day` and `add_banking_day`.
/// Larger (and non-positive) counts leave the time unchanged.
pub const MAX_DAY_STEPS: i32 = 500;

/// Offset-bearing layouts accepted after RFC 3339 fails.
const ISO8601_OFFSET_FORMATS: [&str; 2] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z"
];

/// Layouts without an offset; read as UTC.
const ISO8601_NAIVE_FORMATS: [&str; 2] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f"
];

/// An absolute instant in a timezone, aware of the US business and banking
/// calendars.
///
/// Equality, ordering and hashing compare the instant only: the same moment
/// in two timezones is equal. Every calendar predicate is evaluated against
/// the local date in the wrapped zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarTime {
    time: DateTime<CalendarZone>
}

impl CalendarTime {
    /// Accepts a time in an IANA zone (`Tz`), a fixed offset, UTC or a
    /// `CalendarZone`.
    pub fn new<Z>(time: DateTime<Z>) -> CalendarTime
    where
        Z: TimeZone,
        CalendarZone: From<Z>,
    {
        let zone = CalendarZone::from(time.timezone());
        CalendarTime { time: time.with_timezone(&zone) }
    }

    /// The current instant, expressed in `zone`.
    pub fn now<Z: Into<CalendarZone>>(zone: Z) -> CalendarTime {
        let zone: CalendarZone = zone.into();
        CalendarTime::new(Utc::now().with_timezone(&zone))
    }

    /// The Unix epoch in UTC; what an empty JSON string deserializes to.
    pub fn zero() -> CalendarTime {
        CalendarTime::new(Tz::UTC.from_utc_datetime(&NaiveDateTime::default()))
    }

    pub fn is_zero(&self) -> bool {
        *self == CalendarTime::zero()
    }

    /// Parses RFC 3339 and the common ISO 8601 variants. An empty string is
    /// the zero time. The offset written in the input is kept (a zero offset
    /// or `Z` as UTC); input without an offset is read as UTC.
    pub fn parse(input: &str) -> Result<CalendarTime, TimeError> {
        if input.is_empty() {
            return Ok(CalendarTime::zero());
        }
        let parsed = parse_iso8601(input).map_err(|source| TimeError::Parse {
            input: input.to_owned(),
            source
        })?;
        Ok(CalendarTime::new(parsed))
    }

    pub fn time(&self) -> DateTime<CalendarZone> {
        self.time
    }

    pub fn timezone(&self) -> CalendarZone {
        self.time.timezone()
    }

    /// Same instant, re-expressed in `zone`. Calendar predicates follow the
    /// new local date.
    pub fn in_timezone<Z: Into<CalendarZone>>(&self, zone: Z) -> CalendarTime {
        let zone: CalendarZone = zone.into();
        CalendarTime { time: self.time.with_timezone(&zone) }
    }

    pub fn local_date(&self) -> NaiveDate {
        self.time.date_naive()
    }

    pub fn is_weekend(&self) -> bool {
        is_weekend(self.local_date())
    }

    /// True if the local date is a holiday on any US calendar, including the
    /// weekday a weekend holiday is nominally observed on.
    ///
    /// This can be true on an open banking day: Friday 2021-12-31 is the
    /// federal in-lieu day for a Saturday New Year's Day, yet the Federal
    /// Reserve does not close for it. Use `is_banking_day` or
    /// `is_business_day` to decide whether a day is open.
    pub fn is_holiday(&self) -> bool {
        self.get_holiday().is_some()
    }

    pub fn get_holiday(&self) -> Option<ObservedHoliday> {
        Calendars::us().unified().holiday_named(self.local_date())
    }

    pub fn is_business_day(&self) -> bool {
        Calendars::us().business().is_business_day(self.local_date())
    }

    pub fn is_banking_day(&self) -> bool {
        Calendars::us().banking().is_business_day(self.local_date())
    }

    /// Moves forward `n` business days, keeping the wall-clock time and
    /// zone. A fixed-offset zone keeps its offset. `n` outside `1..=MAX_DAY_STEPS` returns `self` unchanged.
    pub fn add_business_day(&self, n: i32) -> CalendarTime {
        self.add_days_in(Calendars::us().business(), n)
    }

    /// Moves forward `n` Federal Reserve banking days, keeping the wall-clock
    /// time and timezone. `n` outside `1..=MAX_DAY_STEPS` returns `self`
    /// unchanged.
    pub fn add_banking_day(&self, n: i32) -> CalendarTime {
        self.add_days_in(Calendars::us().banking(), n)
    }

    fn add_days_in(&self, calendar: &dyn HolidayCalendar, n: i32) -> CalendarTime {
        if n <= 0 || n > MAX_DAY_STEPS {
            return *self;
        }
        let landing = calendar.shift_n_business_day(self.local_date(), n as u32);
        self.with_local_date(landing)
    }

    /// Same wall-clock time on another local date.
    fn with_local_date(&self, d: NaiveDate) -> CalendarTime {
        let tz = self.timezone();
        let wall = d.and_time(self.time.time());
        let time = match tz.from_local_datetime(&wall) {
            LocalResult::Single(t) => t,
            LocalResult::Ambiguous(earliest, _) => earliest,
            LocalResult::None => {
                // skipped by a DST gap: keep the offset in force before it
                let before_gap = tz.offset_from_utc_datetime(&(wall - TimeDelta::days(1))).fix();
                let utc = wall - TimeDelta::seconds(i64::from(before_gap.local_minus_utc()));
                tz.from_utc_datetime(&utc)
            }
        };
        CalendarTime::new(time)
    }

    pub fn year(&self) -> i32 {
        self.time.year()
    }

    pub fn month(&self) -> u32 {
        self.time.month()
    }

    pub fn day(&self) -> u32 {
        self.time.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.time.weekday()
    }

    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    pub fn second(&self) -> u32 {
        self.time.second()
    }

    /// `self - other` as a signed duration.
    pub fn sub(&self, other: &CalendarTime) -> TimeDelta {
        self.time.signed_duration_since(other.time)
    }

    /// strftime-style formatting, see `chrono::format::strftime`.
    pub fn format(&self, fmt: &str) -> String {
        self.time.format(fmt).to_string()
    }

    /// RFC 3339 with `Z` for UTC and fractional seconds only when present.
    pub fn to_rfc3339(&self) -> String {
        self.time.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

fn parse_iso8601(input: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    let rfc3339_error = match DateTime::parse_from_rfc3339(input) {
        Ok(t) => return Ok(t),
        Err(error) => error
    };
    for fmt in ISO8601_OFFSET_FORMATS {
        if let Ok(t) = DateTime::parse_from_str(input, fmt) {
            return Ok(t);
        }
    }
    for fmt in ISO8601_NAIVE_FORMATS {
        if let Ok(t) = NaiveDateTime::parse_from_str(input, fmt) {
            return Ok(t.and_utc().fixed_offset());
        }
    }
    Err(rfc3339_error)
}

impl Default for CalendarTime {
    fn default() -> CalendarTime {
        CalendarTime::zero()
    }
}

impl<Z> From<DateTime<Z>> for CalendarTime
where
    Z: TimeZone,
    CalendarZone: From<Z>,
{
    fn from(time: DateTime<Z>) -> CalendarTime {
        CalendarTime::new(time)
    }
}

impl FromStr for CalendarTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<CalendarTime, TimeError> {
        CalendarTime::parse(s)
    }
}

impl fmt::Display for CalendarTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.time.format("%Y-%m-%d %H:%M:%S %z %Z"))
    }
}

impl Serialize for CalendarTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_rfc3339())
    }
}

impl<'de> de::Deserialize<'de> for CalendarTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct CalendarTimeVisitor;

        impl<'de> de::Visitor<'de> for CalendarTimeVisitor {
            type Value = CalendarTime;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an ISO 8601 time string or an empty string")
            }

            fn visit_str<E>(self, value: &str) -> Result<CalendarTime, E>
            where
                E: de::Error,
            {
                CalendarTime::parse(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(CalendarTimeVisitor)
    }
}
