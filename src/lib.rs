pub mod configuration;
pub mod logger;

pub mod database {
    pub mod databaseerror;
    pub mod sqlite;
}

pub mod mask {
    pub mod password;
}

pub mod time {
    pub mod utility;
    pub mod timeerror;
    pub mod calendarzone;
    pub mod calendartime;

    pub mod recurringholiday {
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod lastweekdayholiday;
        pub mod recurringholiday;
        pub mod weekendadjustment;
        pub mod holidayrule;
        pub mod observedholiday;
        pub mod usholidays;
    }

    pub mod calendar {
        pub mod holidaycalendar;
        pub mod simplecalendar;
        pub mod jointcalendar;
        pub mod uscalendars;
    }
}
