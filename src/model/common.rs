use serde::{Deserialize, Serialize};

/// A team taking part in a match. Opaque to classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub gender: String,
    #[serde(default)]
    pub sub_teams: Vec<serde_json::Value>,
}

/// The competition round a match belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub round: u32,
}
