use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};

#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100 != 0)) || (year % 400 == 0)
}

/// Number of days in `month` of `year`; zero for a month outside `1..=12`.
pub const fn days_of_month (year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if month > 12 {
        0
    } else if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

/// Saturday and Sunday are the only weekend days on the US calendars.
#[inline]
pub fn is_weekend (d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn february_length_follows_leap_years() {
        assert_eq!(days_of_month(2024, 2), 29);
        assert_eq!(days_of_month(2023, 2), 28);
        assert_eq!(days_of_month(1900, 2), 28);
        assert_eq!(days_of_month(2000, 2), 29);
        assert_eq!(days_of_month(2023, 13), 0);
    }

    #[test]
    fn weekend_is_saturday_and_sunday() {
        let sat = NaiveDate::from_ymd_opt(2018, 1, 6).unwrap();
        let sun = NaiveDate::from_ymd_opt(2018, 1, 7).unwrap();
        let tue = NaiveDate::from_ymd_opt(2018, 1, 9).unwrap();
        assert!(is_weekend(sat));
        assert!(is_weekend(sun));
        assert!(!is_weekend(tue));
    }
}
