use crate::model::{format_timestamp, Override, Rotation, ScheduleEntry, UserId};
use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Charge la configuration de rotation :
/// `{ "users": [...], "handover_start_at": ..., "handover_interval_days": N }`
pub fn load_rotation_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Rotation> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let rotation: Rotation =
        serde_json::from_slice(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(rotation)
}

/// Charge la liste d'overrides : tableau JSON de `{user, start_at, end_at}`.
/// La liste peut être non triée, chevauchante, ou déborder de la fenêtre.
pub fn load_overrides_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Override>> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let overrides: Vec<Override> =
        serde_json::from_slice(&data).with_context(|| format!("parsing {}", path.display()))?;
    Ok(overrides)
}

/// Import d'overrides depuis CSV : header `user,start_at,end_at` (RFC3339 UTC).
pub fn import_overrides_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Override>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let user = rec.get(0).context("missing user")?.trim();
        if user.is_empty() {
            bail!("invalid override row (empty user)");
        }
        let start = rec.get(1).context("missing start_at")?.trim();
        let end = rec.get(2).context("missing end_at")?.trim();
        let start: DateTime<Utc> = start
            .parse()
            .with_context(|| format!("invalid start_at for user {user}"))?;
        let end: DateTime<Utc> = end
            .parse()
            .with_context(|| format!("invalid end_at for user {user}"))?;
        out.push(Override::new(UserId::new(user), start, end));
    }
    Ok(out)
}

/// Rendu JSON du planning (jolie mise en forme).
pub fn schedule_to_json(entries: &[ScheduleEntry]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Export CSV du planning : header `user,start_at,end_at`.
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, entries: &[ScheduleEntry]) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["user", "start_at", "end_at"])?;
    for entry in entries {
        let start = format_timestamp(entry.start_at);
        let end = format_timestamp(entry.end_at);
        w.write_record([entry.user.as_str(), start.as_str(), end.as_str()])?;
    }
    w.flush()?;
    Ok(())
}
