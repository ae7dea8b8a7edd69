use super::Stint;
use crate::model::{QueryWindow, ScheduleEntry};

/// Rogne chaque intervalle à la fenêtre et ne garde que les survivants non
/// vides, dans l'ordre d'entrée (chronologique).
pub(super) fn clip_to_window(stints: Vec<Stint>, window: QueryWindow) -> Vec<ScheduleEntry> {
    stints
        .into_iter()
        .filter_map(|stint| {
            let (start_at, end_at) = window.clip(stint.start, stint.end)?;
            Some(ScheduleEntry {
                user: stint.user,
                start_at,
                end_at,
            })
        })
        .collect()
}
