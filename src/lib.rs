//! Classification, filtering and card content for a live score board.
//!
//! Match records are supplied as an in-memory collection (or a JSON array),
//! grouped into four filter tabs and turned into status-dependent cards.
//!
//! ```
//! use chrono::Utc;
//! use live_score::{format_upcoming_date_time, Category};
//!
//! assert_eq!(format_upcoming_date_time(1_470_578_400, &Utc), "AUG 7TH 14:00");
//! assert_eq!(Category::NotStarted.label(), "Upcoming");
//! ```

mod board;
mod card;
mod category;
mod config;
mod error;
mod format;
mod model;
#[cfg(test)]
mod testing;

pub use board::{Board, FilterTab};
pub use card::{Badge, Headline, LiveClock, MatchCard, Tone};
pub use category::{classify, count_by_category, filter_by_category, Category, CategoryCounts};
pub use config::{Config, FILTER_VAR, TIME_ZONE_VAR};
pub use error::{LiveScoreError, Result};
pub use format::{
    format_upcoming_date_time, format_upcoming_date_time_local, ordinal_suffix, DisplayZone,
};
pub use model::*;
