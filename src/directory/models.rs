use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A tournament a player attended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    pub name: String,
    /// Serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Competitive tier, carried through but not used by any filter
    pub tier: u32,
}

/// Player record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub real_name: String,
    pub team: String,
    /// Authored order, not chronological
    pub tournaments: Vec<Tournament>,
}
