use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};


/// How a holiday whose actual date falls on a weekend is observed.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum ObservancePolicy {
    /// The actual date is the observed date.
    Unadjusted,
    /// Sunday moves to the following Monday; Saturday stays put.
    /// This is the Federal Reserve Bank rule.
    SundayToMonday,
    /// Saturday moves to the preceding Friday and Sunday to the following Monday.
    NearestWeekday
}

/// Array-based observance rule, indexed by `Weekday::num_days_from_monday()`.
#[derive(Clone, Copy, Debug)]
pub struct ObservanceAdjuster {
    policy: ObservancePolicy,
    shift_days: [i8; 7]
}

impl ObservanceAdjuster {
    pub fn new(policy: ObservancePolicy) -> ObservanceAdjuster {
        let mut shift_days = [0; 7];
        let sat = Weekday::Sat.num_days_from_monday() as usize;
        let sun = Weekday::Sun.num_days_from_monday() as usize;

        match policy {
            ObservancePolicy::Unadjusted => {},
            ObservancePolicy::SundayToMonday => {
                shift_days[sun] = 1;
            },
            ObservancePolicy::NearestWeekday => {
                shift_days[sat] = -1;
                shift_days[sun] = 1;
            }
        }

        ObservanceAdjuster { policy, shift_days }
    }

    pub fn policy(&self) -> ObservancePolicy {
        self.policy
    }

    /// Maps an actual holiday date to the date it is observed on.
    #[inline]
    pub fn adjust(&self, d: NaiveDate) -> NaiveDate {
        let shift = self.shift_days[d.weekday().num_days_from_monday() as usize];
        let shifted = match shift {
            0 => Some(d),
            n if n > 0 => d.checked_add_days(Days::new(n as u64)),
            n => d.checked_sub_days(Days::new(n.unsigned_abs() as u64))
        };
        shifted.unwrap_or(d)
    }
}
