//! Edge case and boundary condition tests
//!
//! Countdown scenarios around the event instant and startup failures for
//! malformed invitation details.

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use invite_core::{tick, CountdownValue, Invitation, InviteError};

fn utc(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

fn details_json(date: &str, time: Option<&str>, offset: Option<&str>) -> String {
    let mut event = serde_json::json!({
        "date": date,
        "venue": { "name": "Hall", "address": "1 Main St" }
    });
    if let Some(time) = time {
        event["time"] = serde_json::json!(time);
    }
    if let Some(offset) = offset {
        event["utc_offset"] = serde_json::json!(offset);
    }
    serde_json::json!({
        "groom": { "full_name": "Arjun", "father": "Ravi", "mother": "Meena" },
        "bride": { "full_name": "Priya", "father": "Kumar", "mother": "Lakshmi" },
        "event": event
    })
    .to_string()
}

// ============================================================================
// Countdown Scenarios
// ============================================================================

#[test]
fn test_one_full_day_remaining() {
    let value = tick(utc("2026-02-05T08:45:00Z"), utc("2026-02-06T08:45:00Z"));
    assert_eq!(
        value,
        CountdownValue {
            days: 1,
            hours: 0,
            minutes: 0,
            seconds: 0
        }
    );
}

#[test]
fn test_thirty_seconds_remaining() {
    let value = tick(utc("2026-02-06T00:00:00Z"), utc("2026-02-06T00:00:30Z"));
    assert_eq!(
        value,
        CountdownValue {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 30
        }
    );
}

#[test]
fn test_target_equals_now() {
    let t = utc("2026-02-06T08:45:00Z");
    assert_eq!(tick(t, t), CountdownValue::ZERO);
}

#[test]
fn test_target_one_second_past() {
    let target = utc("2026-02-06T08:45:00Z");
    let value = tick(target + Duration::seconds(1), target);
    assert_eq!(value, CountdownValue::ZERO);
    assert!(value.is_zero());
}

#[test]
fn test_large_day_counts_are_unbounded() {
    let target = utc("2026-02-06T08:45:00Z");
    let value = tick(target - Duration::days(3650), target);
    assert_eq!(value.days, 3650);
    assert_eq!((value.hours, value.minutes, value.seconds), (0, 0, 0));
}

#[test]
fn test_offset_target_counts_in_absolute_time() {
    let invitation = Invitation::from_json(&details_json(
        "2026-02-06",
        Some("8:45 AM - 10:00 AM"),
        Some("+05:30"),
    ))
    .unwrap();

    // 08:45 IST is 03:15 UTC
    let now = utc("2026-02-06T03:14:30Z");
    let value = tick(now, invitation.target_utc());
    assert_eq!(value.seconds, 30);
    assert_eq!(value.total_seconds(), 30);
}

// ============================================================================
// Startup Failures
// ============================================================================

#[test]
fn test_unparseable_date_is_rejected() {
    let err = Invitation::from_json(&details_json("next friday", None, None)).unwrap_err();
    assert!(matches!(err, InviteError::InvalidDate { .. }));
}

#[test]
fn test_impossible_calendar_date_is_rejected() {
    let err = Invitation::from_json(&details_json("2026-02-30", None, None)).unwrap_err();
    assert!(matches!(err, InviteError::InvalidDate { .. }));
}

#[test]
fn test_missing_date_field_is_rejected() {
    let json = details_json("2026-02-06", None, None).replace("\"date\":\"2026-02-06\",", "");
    let err = Invitation::from_json(&json).unwrap_err();
    assert!(matches!(err, InviteError::Json(_)));
}

#[test]
fn test_empty_date_is_rejected() {
    let err = Invitation::from_json(&details_json("", None, None)).unwrap_err();
    assert!(matches!(err, InviteError::MissingField("event.date")));
}

#[test]
fn test_bad_time_and_offset_are_rejected() {
    let err = Invitation::from_json(&details_json("2026-02-06", Some("after lunch"), None))
        .unwrap_err();
    assert!(matches!(err, InviteError::InvalidTime(_)));

    let err = Invitation::from_json(&details_json("2026-02-06", None, Some("IST"))).unwrap_err();
    assert!(matches!(err, InviteError::InvalidOffset(_)));
}

#[test]
fn test_target_keeps_event_offset() {
    let invitation = Invitation::from_json(&details_json(
        "2026-02-06",
        Some("18:30"),
        Some("-04:00"),
    ))
    .unwrap();
    let expected = FixedOffset::west_opt(4 * 3600)
        .unwrap()
        .with_ymd_and_hms(2026, 2, 6, 18, 30, 0)
        .unwrap();
    assert_eq!(invitation.target(), expected);
}
