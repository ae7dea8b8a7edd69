use super::{util, Stint};
use crate::model::Override;

/// Superpose les overrides sur les créneaux de base.
///
/// Le résultat pave exactement le même span total que l'entrée : chaque point
/// est couvert par exactement un intervalle, l'override gagnant partout où il
/// recouvre un créneau.
///
/// L'application est faite créneau par créneau : un override qui traverse une
/// relève est re-découpé contre chaque créneau touché, donc il se fragmente à
/// chaque frontière de rotation qu'il franchit. C'est voulu, pas un défaut à
/// fusionner.
///
/// Dans un même créneau, les overrides retenus sont triés par début croissant
/// (tri stable : à départs égaux, l'ordre d'entrée est conservé) puis
/// consommés par un curseur gauche-droite. Un override entièrement couvert
/// par un autre déjà émis ne contribue rien : son span rogné est vide une
/// fois le curseur passé.
pub(super) fn apply_overrides<I>(base: I, overrides: &[Override]) -> Vec<Stint>
where
    I: Iterator<Item = Stint>,
{
    let mut out = Vec::new();

    for stint in base {
        let mut hits: Vec<&Override> = overrides
            .iter()
            .filter(|ov| !ov.is_degenerate())
            .filter(|ov| util::overlaps(stint.start, stint.end, ov.start_at, ov.end_at))
            .collect();
        hits.sort_by_key(|ov| ov.start_at);

        let mut cursor = stint.start;
        for ov in hits {
            // fragment de base avant l'override
            if cursor < ov.start_at && ov.start_at < stint.end {
                out.push(Stint {
                    start: cursor,
                    end: ov.start_at,
                    user: stint.user.clone(),
                });
            }

            let covered_start = cursor.max(ov.start_at);
            let covered_end = stint.end.min(ov.end_at);
            if covered_start < covered_end {
                out.push(Stint {
                    start: covered_start,
                    end: covered_end,
                    user: ov.user.clone(),
                });
            }

            cursor = cursor.max(covered_end);
        }

        // queue du créneau (ou créneau entier si aucun override ne le touche)
        if cursor < stint.end {
            out.push(Stint {
                start: cursor,
                end: stint.end,
                user: stint.user,
            });
        }
    }

    out
}
