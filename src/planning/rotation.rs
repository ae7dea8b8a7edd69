use super::Stint;
use crate::model::Rotation;
use chrono::{DateTime, Utc};

/// Créneaux de base de la rotation, dans l'ordre, jusqu'à ce qu'un départ
/// atteigne `until`.
///
/// Le créneau d'index `i` est une fonction pure de l'index :
/// `start = ancre + i * durée`, `user = users[i % users.len()]`. La phase ne
/// dépend donc jamais de la fenêtre interrogée, seulement de l'ancre.
///
/// Coût linéaire en nombre de créneaux entre l'ancre et `until` : une ancre
/// très ancienne combinée à une durée courte est à la charge de l'appelant.
///
/// Précondition (garantie par [`super::validate_rotation`]) : liste
/// d'utilisateurs non vide et durée strictement positive.
pub(super) fn base_shifts(
    rotation: &Rotation,
    until: DateTime<Utc>,
) -> impl Iterator<Item = Stint> + '_ {
    let anchor = rotation.handover_start_at;
    let interval = rotation.interval();
    (0i32..)
        .map(move |i| {
            let start = anchor + interval * i;
            Stint {
                start,
                end: start + interval,
                user: rotation.users[i as usize % rotation.users.len()].clone(),
            }
        })
        .take_while(move |stint| stint.start < until)
}
