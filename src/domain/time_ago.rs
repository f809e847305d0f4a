//! Relative "time elapsed" labels.
//!
//! Labels are a pure function of an anchor and the current clock value. The
//! app owns the clock and decides when to re-evaluate via
//! [`next_refresh_in`], so a label keeps moving without a new fetch.

use std::time::Duration;

use chrono::{DateTime, Utc};

/// Wait used for anchors in the future, whose label counts down.
const FUTURE_REFRESH: Duration = Duration::from_secs(1);

const DAY_SECS: f64 = 86_400.0;

/// (seconds per unit, largest count shown in this unit, suffix)
const UNITS: [(f64, Option<u64>, &str); 7] = [
    (1.0, Some(59), "s"),
    (60.0, Some(59), "m"),
    (3_600.0, Some(23), "h"),
    (DAY_SECS, Some(6), "d"),
    (7.0 * DAY_SECS, Some(4), "w"),
    (30.436_875 * DAY_SECS, Some(11), "mo"),
    (365.2425 * DAY_SECS, None, "y"),
];

/// Parse a transaction timestamp into a label anchor.
///
/// Accepts RFC 3339 strings and integer epoch milliseconds. Missing or
/// unreadable input anchors at the Unix epoch.
#[must_use]
pub fn parse_anchor(raw: Option<&str>) -> DateTime<Utc> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return DateTime::UNIX_EPOCH;
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Utc);
    }

    raw.parse::<i64>()
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// The unit a label uses for `abs_secs`: seconds per unit, the rounded count
/// and the suffix.
fn label_unit(abs_secs: f64) -> (f64, u64, &'static str) {
    UNITS
        .iter()
        .find_map(|&(unit_secs, max, suffix)| {
            let count = (abs_secs / unit_secs).round() as u64;
            max.is_none_or(|max| count <= max)
                .then_some((unit_secs, count, suffix))
        })
        .unwrap_or((1.0, 0, "s"))
}

/// Compact relative label, e.g. `"12s ago"`, `"3h ago"` or `"in 5m"`.
#[must_use]
pub fn time_ago(anchor: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed_ms = (now - anchor).num_milliseconds();
    let (_, count, suffix) = label_unit(elapsed_ms.unsigned_abs() as f64 / 1_000.0);
    let amount = format!("{}{suffix}", count.max(1));

    if elapsed_ms < 0 {
        format!("in {amount}")
    } else {
        format!("{amount} ago")
    }
}

/// How long until the label for `anchor` can change.
///
/// Counts are rounded to the nearest unit, so a label moves on when the
/// elapsed time crosses the next half-unit point (`"1m ago"` turns into
/// `"2m ago"` at 90s). Future anchors are re-checked every second.
#[must_use]
pub fn next_refresh_in(anchor: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    let elapsed_ms = (now - anchor).num_milliseconds();
    if elapsed_ms < 0 {
        return FUTURE_REFRESH;
    }

    let (unit_secs, count, _) = label_unit(elapsed_ms as f64 / 1_000.0);
    let threshold_ms = ((count as f64 + 0.5) * unit_secs * 1_000.0).ceil() as i64;
    Duration::from_millis(threshold_ms.saturating_sub(elapsed_ms).max(1).unsigned_abs())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use rstest::rstest;

    fn now() -> DateTime<Utc> {
        parse_anchor(Some("2024-06-01T12:00:00Z"))
    }

    #[rstest]
    #[case::just_now(0, "1s ago")]
    #[case::seconds(12, "12s ago")]
    #[case::edge_of_seconds(59, "59s ago")]
    #[case::one_minute(60, "1m ago")]
    #[case::minutes(5 * 60 + 20, "5m ago")]
    #[case::hours(3 * 3_600, "3h ago")]
    #[case::days(2 * 86_400, "2d ago")]
    #[case::weeks(15 * 86_400, "2w ago")]
    #[case::months(90 * 86_400, "3mo ago")]
    #[case::years(800 * 86_400, "2y ago")]
    fn test_time_ago(#[case] elapsed_secs: i64, #[case] expected: &str) {
        let anchor = now() - TimeDelta::seconds(elapsed_secs);
        assert_eq!(time_ago(anchor, now()), expected);
    }

    #[test]
    fn test_time_ago_future_anchor() {
        let anchor = now() + TimeDelta::seconds(30);
        assert_eq!(time_ago(anchor, now()), "in 30s");
    }

    #[test]
    fn test_epoch_anchor_produces_label() {
        let label = time_ago(parse_anchor(None), now());
        assert_eq!(label, "54y ago");
    }

    #[rstest]
    #[case::rfc3339(Some("2024-06-01T11:59:30Z"), 1_717_243_170)]
    #[case::offset(Some("2024-06-01T13:59:30+02:00"), 1_717_243_170)]
    #[case::millis(Some("1717243170000"), 1_717_243_170)]
    #[case::missing(None, 0)]
    #[case::blank(Some("  "), 0)]
    #[case::zero(Some("0"), 0)]
    #[case::garbage(Some("yesterday"), 0)]
    fn test_parse_anchor(#[case] raw: Option<&str>, #[case] expected_secs: i64) {
        assert_eq!(parse_anchor(raw).timestamp(), expected_secs);
    }

    #[rstest]
    #[case::seconds(10, 500)]
    #[case::before_two_minutes(89, 1_000)]
    #[case::minutes(5 * 60 + 20, 10_000)]
    #[case::before_two_hours(5_040, 360_000)]
    #[case::days(2 * 86_400, 43_200_000)]
    fn test_next_refresh_in(#[case] elapsed_secs: i64, #[case] expected_ms: u64) {
        let anchor = now() - TimeDelta::seconds(elapsed_secs);
        assert_eq!(
            next_refresh_in(anchor, now()),
            Duration::from_millis(expected_ms)
        );
    }

    #[rstest]
    #[case::minute_rounding(89, "1m ago", "2m ago")]
    #[case::hour_rounding(5_040, "1h ago", "2h ago")]
    #[case::day_rounding(2 * 86_400, "2d ago", "3d ago")]
    fn test_label_changes_when_refresh_is_due(
        #[case] elapsed_secs: i64,
        #[case] before: &str,
        #[case] after: &str,
    ) {
        let anchor = now() - TimeDelta::seconds(elapsed_secs);
        let wait = next_refresh_in(anchor, now());
        let due = now() + TimeDelta::from_std(wait).unwrap();

        assert_eq!(time_ago(anchor, now()), before);
        assert_eq!(time_ago(anchor, due - TimeDelta::milliseconds(1)), before);
        assert_eq!(time_ago(anchor, due), after);
    }

    #[test]
    fn test_label_never_changes_before_refresh() {
        for elapsed_secs in (0..3 * 86_400).step_by(37) {
            let anchor = now() - TimeDelta::seconds(elapsed_secs);
            let wait = next_refresh_in(anchor, now());
            let just_before =
                now() + TimeDelta::from_std(wait).unwrap() - TimeDelta::milliseconds(1);
            assert_eq!(
                time_ago(anchor, now()),
                time_ago(anchor, just_before),
                "elapsed={elapsed_secs}"
            );
        }
    }

    #[test]
    fn test_future_anchor_refreshes_every_second() {
        let anchor = now() + TimeDelta::seconds(30);
        assert_eq!(next_refresh_in(anchor, now()), Duration::from_secs(1));
    }
}
