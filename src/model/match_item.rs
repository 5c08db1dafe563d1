use serde::{Deserialize, Serialize};

use crate::model::{MatchStatus, Round, StatusType, Team};

/// A collection of match records, as supplied by the data source.
pub type MatchList = Vec<Match>;

/// A single fixture and its current state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub name: String,
    pub competition_id: String,
    pub competition: String,
    pub country_id: String,
    pub country: String,
    /// Kickoff as Unix seconds.
    pub timestamp: i64,
    pub date: String,
    pub time: String,
    pub status: MatchStatus,
    #[serde(default)]
    pub round: Round,
    pub home_team: Team,
    pub away_team: Team,
    #[serde(default)]
    pub home_score: Score,
    #[serde(default)]
    pub away_score: Score,
    #[serde(default)]
    pub live_status: String,
}

impl Match {
    pub fn status_type(&self) -> StatusType {
        self.status.kind
    }
}

/// Score breakdown for one side of a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Absent until the match has started.
    #[serde(default)]
    pub current: Option<u32>,
    #[serde(default)]
    pub period1: u32,
    #[serde(default)]
    pub normaltime: u32,
}
