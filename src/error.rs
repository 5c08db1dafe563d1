use std::env::VarError;

/// All errors that can occur while loading or configuring a match board.
#[derive(thiserror::Error, Debug)]
pub enum LiveScoreError {
    /// The match document could not be deserialized.
    #[error("failed to parse match data: {0}")]
    Json(#[from] serde_json::Error),

    /// A category name did not match any of the four filter tabs.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// A time zone name was neither `local` nor a known IANA zone.
    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),

    /// An environment variable was set but could not be read.
    #[error("failed to read {var}: {source}")]
    Env {
        var: &'static str,
        source: VarError,
    },
}

pub type Result<T> = std::result::Result<T, LiveScoreError>;
