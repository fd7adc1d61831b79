use std::collections::HashMap;
use std::sync::{
    Arc,
    PoisonError,
    RwLock
};

use tracing::debug;

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::recurringholiday::holidayrule::HolidayRule;
use crate::time::recurringholiday::observedholiday::ObservedHoliday;
use crate::time::recurringholiday::weekendadjustment::{
    ObservanceAdjuster,
    ObservancePolicy
};

/// An ordered set of holiday rules observed under one weekend policy.
///
/// Observed holidays are computed lazily and memoized per year. The memo is
/// the only mutable state: lookups take a read lock, computation happens
/// outside any lock, and the result is published under a write lock. Two
/// threads racing on the same uncached year may both compute it; the first
/// published list wins and both callers receive it.
pub struct SimpleCalendar {
    name: &'static str,
    rules: Vec<HolidayRule>,
    adjuster: ObservanceAdjuster,
    observed_cache: RwLock<HashMap<i32, Arc<[ObservedHoliday]>>>
}

impl SimpleCalendar {
    pub(crate) fn new(name: &'static str,
                      rules: Vec<HolidayRule>,
                      policy: ObservancePolicy) -> SimpleCalendar {
        SimpleCalendar {
            name,
            rules,
            adjuster: ObservanceAdjuster::new(policy),
            observed_cache: RwLock::new(HashMap::new())
        }
    }

    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }

    pub fn observance_policy(&self) -> ObservancePolicy {
        self.adjuster.policy()
    }

    /// Number of years currently memoized.
    pub fn cached_years(&self) -> usize {
        self.observed_cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn compute_observed_holidays(&self, year: i32) -> Arc<[ObservedHoliday]> {
        let mut holidays: Vec<ObservedHoliday> = self.rules
            .iter()
            .filter_map(|rule| {
                rule.actual_date(year).map(|actual| {
                    ObservedHoliday::new(rule.name(), actual, self.adjuster.adjust(actual))
                })
            })
            .collect();
        // stable: rules observed on the same day keep table order
        holidays.sort_by_key(|holiday| holiday.observed_date());
        holidays.into()
    }
}

impl HolidayCalendar for SimpleCalendar {
    fn name(&self) -> &str {
        self.name
    }

    fn observed_holidays(&self, year: i32) -> Arc<[ObservedHoliday]> {
        // Poisoning is recovered: entries are only ever inserted whole
        if let Some(holidays) = self.observed_cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&year) {
            return Arc::clone(holidays);
        }

        let computed = self.compute_observed_holidays(year);
        debug!(calendar = self.name, year, holidays = computed.len(), "computed observed holidays");

        let mut cache = self.observed_cache
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(cache.entry(year).or_insert(computed))
    }
}


#[cfg(test)]
mod tests {
    use std::thread;

    use chrono::NaiveDate;

    use super::*;
    use crate::time::recurringholiday::usholidays::US_HOLIDAY_RULES;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn banking() -> SimpleCalendar {
        SimpleCalendar::new("Banking", US_HOLIDAY_RULES.to_vec(), ObservancePolicy::SundayToMonday)
    }

    #[test]
    fn one_entry_per_rule_sorted_by_date() {
        let calendar = banking();
        for year in [1999, 2018, 2021, 2023, 2050] {
            let holidays = calendar.observed_holidays(year);
            assert_eq!(holidays.len(), US_HOLIDAY_RULES.len());
            assert!(holidays.windows(2).all(|w| w[0].observed_date() <= w[1].observed_date()));
        }
    }

    #[test]
    fn repeated_lookups_are_identical() {
        let calendar = banking();
        let first = calendar.observed_holidays(2021);
        let second = calendar.observed_holidays(2021);
        assert_eq!(first, second);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calendar.cached_years(), 1);
    }

    #[test]
    fn sunday_holiday_observed_on_monday() {
        let calendar = banking();
        let holidays = calendar.observed_holidays(2021);
        let independence_day = holidays.iter().find(|h| h.name() == "Independence Day").unwrap();
        assert_eq!(independence_day.actual_date(), date(2021, 7, 4));
        assert_eq!(independence_day.observed_date(), date(2021, 7, 5));
        assert!(calendar.is_observed_holiday(date(2021, 7, 5)));
        assert!(!calendar.is_observed_holiday(date(2021, 7, 4)));
    }

    #[test]
    fn saturday_holiday_leaves_friday_open() {
        let calendar = banking();
        assert!(calendar.is_business_day(date(2023, 11, 10)));
        assert!(calendar.is_observed_holiday(date(2023, 11, 11)));
        assert!(calendar.holiday_named(date(2023, 11, 10)).is_none());
    }

    #[test]
    fn holiday_named_falls_back_to_actual_date() {
        let calendar = banking();
        let holiday = calendar.holiday_named(date(2021, 7, 4)).unwrap();
        assert_eq!(holiday.name(), "Independence Day");
        assert!(holiday.is_shifted());
    }

    #[test]
    fn shift_skips_weekends_and_holidays() {
        let calendar = banking();
        // Friday before MLK weekend
        assert_eq!(calendar.shift_n_business_day(date(2018, 1, 12), 2), date(2018, 1, 17));
        assert_eq!(calendar.shift_n_business_day(date(2018, 1, 12), 0), date(2018, 1, 12));
    }

    #[test]
    fn concurrent_first_lookups_agree() {
        let calendar = banking();
        let shared = &calendar;
        let results: Vec<Arc<[ObservedHoliday]>> = thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(move || shared.observed_holidays(2030)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        for holidays in results.iter() {
            assert_eq!(holidays, &results[0]);
        }
        assert_eq!(calendar.cached_years(), 1);
    }
}
