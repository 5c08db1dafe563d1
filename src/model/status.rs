use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Status block attached to every match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStatus {
    pub code: u32,
    #[serde(rename = "type")]
    pub kind: StatusType,
}

/// The lifecycle state of a match.
///
/// `Canceled` and `Cancelled` are distinct values in the source data and
/// drive different card content, so they are kept apart.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StatusType {
    Finished,
    NotStarted,
    InProgress,
    Canceled,
    Cancelled,
}
