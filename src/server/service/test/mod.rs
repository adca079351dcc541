use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::Tz;

mod booking;
mod schedule;

fn business_tz() -> Tz {
    chrono_tz::Asia::Dhaka
}

/// Instant at `hour:minute` local business time, `days_ahead` days from today.
fn local_time(days_ahead: i64, hour: u32, minute: u32) -> DateTime<Utc> {
    let tz = business_tz();
    let date = (Utc::now().with_timezone(&tz) + Duration::days(days_ahead)).date_naive();

    tz.from_local_datetime(&date.and_hms_opt(hour, minute, 0).unwrap())
        .unwrap()
        .with_timezone(&Utc)
}
