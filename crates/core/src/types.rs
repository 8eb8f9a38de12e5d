/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Registration time of a car, in Unix seconds.
pub type UnixSeconds = i64;

/// Current time as Unix seconds.
pub fn now_unix() -> UnixSeconds {
    chrono::Utc::now().timestamp()
}
