use crate::model::ScheduleEntry;
use anyhow::Context;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Écrit le planning rendu en JSON, de manière atomique (tmp + rename) :
/// jamais de fichier de sortie partiel, même si l'écriture échoue en route.
pub fn write_schedule_json<P: AsRef<Path>>(path: P, entries: &[ScheduleEntry]) -> anyhow::Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_vec_pretty(entries)?;
    let mut tmp = NamedTempFile::new_in(path.parent().unwrap_or_else(|| Path::new(".")))
        .with_context(|| "creating temp file")?;
    tmp.write_all(&json)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).with_context(|| "atomic rename")?;
    Ok(())
}
