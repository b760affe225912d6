use chrono::{Local, NaiveDate, NaiveDateTime, Utc};

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;
    /// The current calendar date in the process's local timezone. This is
    /// the notion of "today" the notification job operates on.
    fn get_local_date(&self) -> NaiveDate;
    /// The current date and time in the process's local timezone
    fn get_local_datetime(&self) -> NaiveDateTime;
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn get_local_date(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn get_local_datetime(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// System pinned to a fixed instant, used by tests
pub struct FixedSys {
    pub timestamp_millis: i64,
    pub datetime: NaiveDateTime,
}

impl ISys for FixedSys {
    fn get_timestamp_millis(&self) -> i64 {
        self.timestamp_millis
    }

    fn get_local_date(&self) -> NaiveDate {
        self.datetime.date()
    }

    fn get_local_datetime(&self) -> NaiveDateTime {
        self.datetime
    }
}
