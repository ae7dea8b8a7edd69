use chrono::{DateTime, Duration, SecondsFormat, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifiant opaque d'un membre de la rotation.
///
/// Aucune contrainte d'unicité : un même utilisateur peut apparaître
/// plusieurs fois dans la rotation (cela change la cadence, pas la validité).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UserId(String);

impl UserId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Configuration de rotation : liste ordonnée, ancre de départ, durée de relève.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rotation {
    pub users: Vec<UserId>,
    /// Instant (UTC) du tout premier créneau ; la phase se calcule toujours ici.
    pub handover_start_at: DateTime<Utc>,
    pub handover_interval_days: i64,
}

impl Rotation {
    /// Construit une rotation en validant liste non vide et durée > 0.
    pub fn new(
        users: Vec<UserId>,
        handover_start_at: DateTime<Utc>,
        handover_interval_days: i64,
    ) -> Result<Self, String> {
        if users.is_empty() {
            return Err("rotation needs at least one user".to_string());
        }
        if handover_interval_days <= 0 {
            return Err("handover interval must be strictly positive".to_string());
        }
        Ok(Self {
            users,
            handover_start_at,
            handover_interval_days,
        })
    }

    pub fn interval(&self) -> Duration {
        Duration::days(self.handover_interval_days)
    }
}

/// Override : intervalle UTC [start_at, end_at) attribué à un utilisateur,
/// prioritaire sur la rotation partout où il la recouvre.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Override {
    pub user: UserId,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

impl Override {
    pub fn new(user: UserId, start_at: DateTime<Utc>, end_at: DateTime<Utc>) -> Self {
        Self {
            user,
            start_at,
            end_at,
        }
    }

    /// Un override dégénéré (`start >= end`) ne recouvre rien : no-op.
    pub fn is_degenerate(&self) -> bool {
        self.start_at >= self.end_at
    }
}

/// Fenêtre de requête [from, until). `from > until` est toléré et donne
/// un résultat vide (tous les rognages échouent).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWindow {
    pub from: DateTime<Utc>,
    pub until: DateTime<Utc>,
}

impl QueryWindow {
    pub fn new(from: DateTime<Utc>, until: DateTime<Utc>) -> Self {
        Self { from, until }
    }

    /// Rogne [start, end) à la fenêtre ; `None` si l'intersection est vide.
    pub fn clip(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let start = start.max(self.from);
        let end = end.min(self.until);
        (start < end).then_some((start, end))
    }
}

/// Entrée du planning rendu : un span contigu à propriétaire unique,
/// déjà rogné à la fenêtre. Invariant : `start_at < end_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScheduleEntry {
    pub user: UserId,
    #[cfg_attr(feature = "serde", serde(with = "timestamp"))]
    pub start_at: DateTime<Utc>,
    #[cfg_attr(feature = "serde", serde(with = "timestamp"))]
    pub end_at: DateTime<Utc>,
}

/// Format de rendu fixe des instants : `YYYY-MM-DDTHH:MM:SSZ`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// (Dé)sérialisation des bornes au format de rendu fixe ; `Z` est lu comme UTC.
#[cfg(feature = "serde")]
mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(at: &DateTime<Utc>, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&super::format_timestamp(*at))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(de)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
