#![forbid(unsafe_code)]
use chrono::{TimeZone, Utc};
use permanence::{io, model::format_timestamp, storage, ScheduleEntry, UserId};
use tempfile::tempdir;

#[test]
fn load_rotation_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.json");
    std::fs::write(
        &path,
        r#"{
            "users": ["alice", "bob"],
            "handover_start_at": "2024-01-01T00:00:00Z",
            "handover_interval_days": 7
        }"#,
    )
    .unwrap();

    let rotation = io::load_rotation_json(&path).unwrap();
    assert_eq!(rotation.users.len(), 2);
    assert_eq!(rotation.users[0].as_str(), "alice");
    assert_eq!(rotation.handover_interval_days, 7);
    assert_eq!(
        rotation.handover_start_at,
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    );
}

#[test]
fn load_overrides_accepts_z_and_offset() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("overrides.json");
    std::fs::write(
        &path,
        r#"[
            {"user": "carol", "start_at": "2024-01-02T00:00:00Z", "end_at": "2024-01-04T12:30:00+00:00"}
        ]"#,
    )
    .unwrap();

    let overrides = io::load_overrides_json(&path).unwrap();
    assert_eq!(overrides.len(), 1);
    assert_eq!(overrides[0].user.as_str(), "carol");
    assert_eq!(
        overrides[0].end_at,
        Utc.with_ymd_and_hms(2024, 1, 4, 12, 30, 0).unwrap()
    );
}

#[test]
fn import_overrides_from_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("overrides.csv");
    std::fs::write(
        &path,
        "user,start_at,end_at\ncarol,2024-01-02T00:00:00Z,2024-01-04T00:00:00Z\n",
    )
    .unwrap();

    let overrides = io::import_overrides_csv(&path).unwrap();
    assert_eq!(overrides.len(), 1);
    assert_eq!(overrides[0].user.as_str(), "carol");
    assert!(!overrides[0].is_degenerate());
}

#[test]
fn rendered_timestamps_use_fixed_format() {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 8, 5, 0).unwrap();
    assert_eq!(format_timestamp(at), "2024-01-01T08:05:00Z");

    let entries = [ScheduleEntry {
        user: UserId::new("alice"),
        start_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        end_at: Utc.with_ymd_and_hms(2024, 1, 4, 0, 0, 0).unwrap(),
    }];
    let json = io::schedule_to_json(&entries).unwrap();
    assert!(json.contains("\"start_at\": \"2024-01-01T00:00:00Z\""));
    assert!(json.contains("\"end_at\": \"2024-01-04T00:00:00Z\""));
    assert!(json.contains("\"user\": \"alice\""));
}

#[test]
fn export_schedule_csv_writes_header_and_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let entries = [ScheduleEntry {
        user: UserId::new("bob"),
        start_at: Utc.with_ymd_and_hms(2024, 1, 4, 0, 0, 0).unwrap(),
        end_at: Utc.with_ymd_and_hms(2024, 1, 7, 0, 0, 0).unwrap(),
    }];
    io::export_schedule_csv(&path, &entries).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let mut lines = raw.lines();
    assert_eq!(lines.next(), Some("user,start_at,end_at"));
    assert_eq!(
        lines.next(),
        Some("bob,2024-01-04T00:00:00Z,2024-01-07T00:00:00Z")
    );
}

#[test]
fn atomic_json_export_roundtrips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.json");
    let entries = [ScheduleEntry {
        user: UserId::new("alice"),
        start_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        end_at: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
    }];
    storage::write_schedule_json(&path, &entries).unwrap();

    let raw = std::fs::read(&path).unwrap();
    let loaded: Vec<ScheduleEntry> = serde_json::from_slice(&raw).unwrap();
    assert_eq!(loaded.as_slice(), entries.as_slice());
}
