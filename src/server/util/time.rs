//! Calendar-day arithmetic in the business timezone.

use chrono::{
    DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc,
};
use chrono_tz::Tz;

/// Returns the UTC instant at which `date` begins in `tz`.
///
/// When midnight falls inside a DST gap the first valid instant after it is used.
pub fn local_midnight(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    first_valid_instant(tz, date.and_time(NaiveTime::MIN))
}

/// Resolves `local` to UTC, taking the earliest reading of repeated times and the
/// end of the transition for skipped ones.
fn first_valid_instant(tz: &Tz, local: NaiveDateTime) -> DateTime<Utc> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => {
            // Read with the offset in force before the gap, `local` lands at or after
            // the transition; walk back to the transition itself.
            let before = tz
                .offset_from_utc_datetime(&(local - Duration::days(1)))
                .fix();
            let mut first = Utc.from_utc_datetime(
                &(local - Duration::seconds(before.local_minus_utc().into())),
            );

            while (first - Duration::minutes(1))
                .with_timezone(tz)
                .naive_local()
                >= local
            {
                first -= Duration::minutes(1);
            }

            first
        }
    }
}

/// Returns the inclusive [00:00, 23:59:59.999] window of the local day containing `instant`.
pub fn day_window(tz: &Tz, instant: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let date = instant.with_timezone(tz).date_naive();
    let start = local_midnight(tz, date);

    let next_start = date
        .succ_opt()
        .map(|next| local_midnight(tz, next))
        .unwrap_or(start + Duration::days(1));

    (start, next_start - Duration::milliseconds(1))
}

/// Start of the local day containing `now`.
pub fn start_of_day(tz: &Tz, now: DateTime<Utc>) -> DateTime<Utc> {
    day_window(tz, now).0
}
