use std::sync::{
    Arc,
    LazyLock
};

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::jointcalendar::JointCalendar;
use crate::time::calendar::simplecalendar::SimpleCalendar;
use crate::time::recurringholiday::holidayrule::HolidayRule;
use crate::time::recurringholiday::usholidays::US_HOLIDAY_RULES;
use crate::time::recurringholiday::weekendadjustment::ObservancePolicy;

static US_CALENDARS: LazyLock<Calendars> = LazyLock::new(Calendars::new_us);

/// The process-wide US calendars, built once and never mutated afterwards
/// (apart from each calendar's internal per-year memo).
///
/// - `business`: general business closures, observed on the actual date.
/// - `banking`: Federal Reserve Bank closures; a Sunday holiday closes the
///   following Monday, a Saturday holiday closes nothing extra.
/// - `federal`: every holiday on its federal "in lieu" weekday. Only used to
///   name holidays, never to decide whether a day is open.
/// - `unified`: business, then banking, then federal.
pub struct Calendars {
    business: Arc<SimpleCalendar>,
    banking: Arc<SimpleCalendar>,
    federal: Arc<SimpleCalendar>,
    unified: JointCalendar
}

impl Calendars {
    /// Shared, thread-safe US calendars.
    pub fn us() -> &'static Calendars {
        &US_CALENDARS
    }

    fn new_us() -> Calendars {
        let rules_where = |applies: fn(&HolidayRule) -> bool| -> Vec<HolidayRule> {
            US_HOLIDAY_RULES.iter().copied().filter(|rule| applies(rule)).collect()
        };

        let business = Arc::new(SimpleCalendar::new(
            "Business",
            rules_where(HolidayRule::applies_to_business),
            ObservancePolicy::Unadjusted));
        let banking = Arc::new(SimpleCalendar::new(
            "Banking",
            rules_where(HolidayRule::applies_to_banking),
            ObservancePolicy::SundayToMonday));
        let federal = Arc::new(SimpleCalendar::new(
            "Federal",
            US_HOLIDAY_RULES.to_vec(),
            ObservancePolicy::NearestWeekday));

        let business_or_banking = JointCalendar::union(business.clone(), banking.clone());
        let unified = JointCalendar::union(Arc::new(business_or_banking), federal.clone());

        Calendars { business, banking, federal, unified }
    }

    pub fn business(&self) -> &SimpleCalendar {
        &self.business
    }

    pub fn banking(&self) -> &SimpleCalendar {
        &self.banking
    }

    pub fn federal(&self) -> &SimpleCalendar {
        &self.federal
    }

    pub fn unified(&self) -> &dyn HolidayCalendar {
        &self.unified
    }
}
