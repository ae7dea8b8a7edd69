#![forbid(unsafe_code)]
//! Permanence — calcul pur d'un planning d'astreinte effectif (sans BD).
//!
//! - Rotation round-robin ancrée : la phase dépend de l'ancre, jamais de la fenêtre.
//! - Overrides prioritaires, découpés créneau par créneau.
//! - Tout en UTC ; parsing RFC3339 ; rendu `YYYY-MM-DDTHH:MM:SSZ`.

#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod planning;
#[cfg(feature = "serde")]
pub mod storage;

pub use model::{Override, QueryWindow, Rotation, ScheduleEntry, UserId};
pub use planning::{render_schedule, validate_rotation, PlanError, Stint};
#[cfg(feature = "serde")]
pub use storage::write_schedule_json;
