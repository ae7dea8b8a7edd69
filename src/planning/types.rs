use crate::model::UserId;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Intervalle UTC [start, end) attribué à un utilisateur, avant rognage
/// à la fenêtre de requête.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stint {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub user: UserId,
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("rotation has no users: at least one is required")]
    EmptyRoster,
    #[error("handover interval must be strictly positive, got {0} day(s)")]
    NonPositiveInterval(i64),
}
