mod overrides;
mod rotation;
mod types;
mod util;
mod window;

pub use types::{PlanError, Stint};

use crate::model::{Override, QueryWindow, Rotation, ScheduleEntry};

/// Vérifie qu'une rotation peut générer sans boucler ni diviser par zéro.
pub fn validate_rotation(rotation: &Rotation) -> Result<(), PlanError> {
    if rotation.users.is_empty() {
        return Err(PlanError::EmptyRoster);
    }
    if rotation.handover_interval_days <= 0 {
        return Err(PlanError::NonPositiveInterval(
            rotation.handover_interval_days,
        ));
    }
    Ok(())
}

/// Calcule le planning effectif sur la fenêtre [from, until).
///
/// Pipeline pur en trois étages : génération des créneaux de base depuis
/// l'ancre, superposition des overrides (prioritaires), rognage à la fenêtre.
/// Aucun état partagé entre appels ; le résultat est une fonction de ses
/// seules entrées.
pub fn render_schedule(
    rotation: &Rotation,
    overrides: &[Override],
    window: QueryWindow,
) -> Result<Vec<ScheduleEntry>, PlanError> {
    validate_rotation(rotation)?;
    let base = rotation::base_shifts(rotation, window.until);
    let tiled = overrides::apply_overrides(base, overrides);
    Ok(window::clip_to_window(tiled, window))
}
