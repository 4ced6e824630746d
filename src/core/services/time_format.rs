use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

const UNITS: [(i64, &str, &str); 6] = [
    (YEAR, "year", "years"),
    (MONTH, "month", "months"),
    (DAY, "day", "days"),
    (HOUR, "hour", "hours"),
    (MINUTE, "minute", "minutes"),
    (1, "second", "seconds"),
];

/// At most this many units are shown, largest first.
const ACCURACY: usize = 3;

/// Describe the distance between two instants, e.g. `"3 days 4 hours"`.
///
/// Returns `"now"` when they are less than a second apart.
pub fn format_date_diff(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let mut remaining = (now - then).num_seconds().abs();
    let mut parts = Vec::with_capacity(ACCURACY);

    for (size, singular, plural) in UNITS {
        if parts.len() == ACCURACY {
            break;
        }
        let count = remaining / size;
        if count == 0 {
            continue;
        }
        remaining -= count * size;
        let unit = if count == 1 { singular } else { plural };
        parts.push(format!("{count} {unit}"));
    }

    if parts.is_empty() {
        "now".to_string()
    } else {
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn under_a_second_is_now() {
        assert_eq!(format_date_diff(now(), now()), "now");
        assert_eq!(
            format_date_diff(now() - Duration::milliseconds(400), now()),
            "now"
        );
    }

    #[test]
    fn singular_and_plural() {
        assert_eq!(format_date_diff(now() - Duration::seconds(1), now()), "1 second");
        assert_eq!(format_date_diff(now() - Duration::hours(2), now()), "2 hours");
    }

    #[test]
    fn mixed_units_largest_first() {
        let then = now() - (Duration::days(3) + Duration::hours(4) + Duration::seconds(5));
        assert_eq!(format_date_diff(then, now()), "3 days 4 hours 5 seconds");
    }

    #[test]
    fn keeps_three_units_at_most() {
        let then = now()
            - (Duration::days(400)
                + Duration::hours(1)
                + Duration::minutes(1)
                + Duration::seconds(1));
        // 400 days = 1 year 1 month 5 days
        assert_eq!(format_date_diff(then, now()), "1 year 1 month 5 days");
    }

    #[test]
    fn future_timestamps_use_distance() {
        assert_eq!(
            format_date_diff(now() + Duration::minutes(5), now()),
            "5 minutes"
        );
    }
}
