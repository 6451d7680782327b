//! US equity regular trading session (09:30-16:00 New York time).
//!
//! Exchange holidays are not modeled.

use chrono::{DateTime, Datelike, NaiveTime, Utc, Weekday};
use chrono_tz::America::New_York;

const OPEN: (u32, u32) = (9, 30);
const CLOSE: (u32, u32) = (16, 0);

/// Whether `now` falls within the regular session.
pub fn is_regular_trading_time(now: DateTime<Utc>) -> bool {
    let local = now.with_timezone(&New_York);

    if matches!(local.weekday(), Weekday::Sat | Weekday::Sun) {
        return false;
    }

    let open = NaiveTime::from_hms_opt(OPEN.0, OPEN.1, 0).unwrap_or_default();
    let close = NaiveTime::from_hms_opt(CLOSE.0, CLOSE.1, 0).unwrap_or_default();
    let time = local.time();
    time >= open && time < close
}
