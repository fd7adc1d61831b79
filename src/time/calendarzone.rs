use std::fmt;

use chrono::{
    FixedOffset,
    LocalResult,
    NaiveDate,
    NaiveDateTime,
    Offset,
    TimeZone,
    Utc
};
use chrono_tz::{
    Tz,
    TzOffset
};

/// The zone a `CalendarTime` is expressed in.
///
/// Times built in code carry an IANA zone. Times parsed from text carry the
/// offset written in the text, so a round trip through JSON keeps the local
/// date the calendars are evaluated against. A zero offset is read as UTC.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CalendarZone {
    Named(Tz),
    Fixed(FixedOffset)
}

impl CalendarZone {
    /// `Named(UTC)` for a zero offset, `Fixed` otherwise.
    pub fn from_fixed_offset(offset: FixedOffset) -> CalendarZone {
        if offset.local_minus_utc() == 0 {
            CalendarZone::Named(Tz::UTC)
        } else {
            CalendarZone::Fixed(offset)
        }
    }

    pub fn iana(&self) -> Option<Tz> {
        match self {
            CalendarZone::Named(tz) => Some(*tz),
            CalendarZone::Fixed(_) => None
        }
    }
}

impl From<Tz> for CalendarZone {
    fn from(tz: Tz) -> CalendarZone {
        CalendarZone::Named(tz)
    }
}

impl From<FixedOffset> for CalendarZone {
    fn from(offset: FixedOffset) -> CalendarZone {
        CalendarZone::from_fixed_offset(offset)
    }
}

impl From<Utc> for CalendarZone {
    fn from(_: Utc) -> CalendarZone {
        CalendarZone::Named(Tz::UTC)
    }
}

impl fmt::Display for CalendarZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarZone::Named(tz) => write!(f, "{}", tz),
            CalendarZone::Fixed(offset) => write!(f, "{}", offset)
        }
    }
}

/// Offset in force at an instant of a `CalendarZone`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoneOffset {
    Named(TzOffset),
    Fixed(FixedOffset)
}

impl Offset for ZoneOffset {
    fn fix(&self) -> FixedOffset {
        match self {
            ZoneOffset::Named(offset) => offset.fix(),
            ZoneOffset::Fixed(offset) => *offset
        }
    }
}

/// `%Z` renders this: the abbreviation for IANA zones, `+hh:mm` otherwise.
impl fmt::Display for ZoneOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneOffset::Named(offset) => write!(f, "{}", offset),
            ZoneOffset::Fixed(offset) => write!(f, "{}", offset)
        }
    }
}

#[allow(deprecated)]
impl TimeZone for CalendarZone {
    type Offset = ZoneOffset;

    fn from_offset(offset: &ZoneOffset) -> CalendarZone {
        match offset {
            ZoneOffset::Named(offset) => CalendarZone::Named(Tz::from_offset(offset)),
            ZoneOffset::Fixed(offset) => CalendarZone::Fixed(*offset)
        }
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<ZoneOffset> {
        match self {
            CalendarZone::Named(tz) => tz.offset_from_local_date(local).map(ZoneOffset::Named),
            CalendarZone::Fixed(offset) => offset.offset_from_local_date(local).map(ZoneOffset::Fixed)
        }
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<ZoneOffset> {
        match self {
            CalendarZone::Named(tz) => tz.offset_from_local_datetime(local).map(ZoneOffset::Named),
            CalendarZone::Fixed(offset) => offset.offset_from_local_datetime(local).map(ZoneOffset::Fixed)
        }
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> ZoneOffset {
        match self {
            CalendarZone::Named(tz) => ZoneOffset::Named(tz.offset_from_utc_date(utc)),
            CalendarZone::Fixed(offset) => ZoneOffset::Fixed(offset.offset_from_utc_date(utc))
        }
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> ZoneOffset {
        match self {
            CalendarZone::Named(tz) => ZoneOffset::Named(tz.offset_from_utc_datetime(utc)),
            CalendarZone::Fixed(offset) => ZoneOffset::Fixed(offset.offset_from_utc_datetime(utc))
        }
    }
}


#[cfg(test)]
mod tests {
    use chrono_tz::America::New_York;

    use super::*;

    #[test]
    fn zero_offset_is_utc() {
        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(CalendarZone::from(utc), CalendarZone::Named(Tz::UTC));
        let pacific = FixedOffset::west_opt(8 * 3600).unwrap();
        assert_eq!(CalendarZone::from(pacific), CalendarZone::Fixed(pacific));
        assert_eq!(CalendarZone::from(pacific).iana(), None);
    }

    #[test]
    fn offsets_follow_the_underlying_zone() {
        let winter = NaiveDate::from_ymd_opt(2018, 1, 12).unwrap().and_hms_opt(20, 0, 0).unwrap();
        let summer = NaiveDate::from_ymd_opt(2018, 7, 12).unwrap().and_hms_opt(20, 0, 0).unwrap();
        let eastern = CalendarZone::from(New_York);
        assert_eq!(eastern.offset_from_utc_datetime(&winter).fix().local_minus_utc(), -5 * 3600);
        assert_eq!(eastern.offset_from_utc_datetime(&summer).fix().local_minus_utc(), -4 * 3600);

        let fixed = CalendarZone::from(FixedOffset::west_opt(5 * 3600).unwrap());
        assert_eq!(fixed.offset_from_utc_datetime(&summer).fix().local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn time_zone_name_renders_abbreviation_or_offset() {
        let t = CalendarZone::from(New_York).with_ymd_and_hms(2018, 1, 11, 1, 0, 0).unwrap();
        assert_eq!(t.format("%Z").to_string(), "EST");
        let t = CalendarZone::from(FixedOffset::west_opt(8 * 3600).unwrap())
            .with_ymd_and_hms(2018, 11, 18, 9, 4, 23)
            .unwrap();
        assert_eq!(t.format("%z %Z").to_string(), "-0800 -08:00");
    }
}
