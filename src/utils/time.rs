use chrono::{DateTime, NaiveDate, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Calendar day used to key the daily interview sets.
pub fn today() -> NaiveDate {
    now().date_naive()
}
