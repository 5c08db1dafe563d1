use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::LiveScoreError;
use crate::model::{Match, StatusType};

/// The four filter tabs a match board offers.
///
/// Canceled matches belong to [`Category::All`] only.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Finished,
    InProgress,
    NotStarted,
}

impl Category {
    /// Whether `m` belongs to this category. Only the status type is consulted.
    pub fn matches(self, m: &Match) -> bool {
        match self {
            Category::All => true,
            Category::Finished => m.status_type() == StatusType::Finished,
            Category::InProgress => m.status_type() == StatusType::InProgress,
            Category::NotStarted => m.status_type() == StatusType::NotStarted,
        }
    }

    /// Tab label shown next to the count.
    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Finished => "Results",
            Category::InProgress => "Live",
            Category::NotStarted => "Upcoming",
        }
    }

    /// Parse a category name, reporting the rejected input on failure.
    pub fn parse(name: &str) -> Result<Self, LiveScoreError> {
        name.trim()
            .parse()
            .map_err(|_| LiveScoreError::UnknownCategory(name.to_string()))
    }
}

pub fn classify(category: Category, m: &Match) -> bool {
    category.matches(m)
}

/// Number of matches in `category`.
pub fn count_by_category<'a, I>(matches: I, category: Category) -> usize
where
    I: IntoIterator<Item = &'a Match>,
{
    matches.into_iter().filter(|m| category.matches(m)).count()
}

/// The matches in `category`, in their original order.
pub fn filter_by_category<'a, I>(matches: I, category: Category) -> Vec<&'a Match>
where
    I: IntoIterator<Item = &'a Match>,
{
    matches
        .into_iter()
        .filter(|m| category.matches(m))
        .collect()
}

/// Per-category totals for a collection, computed in a single pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub all: usize,
    pub finished: usize,
    pub in_progress: usize,
    pub not_started: usize,
}

impl CategoryCounts {
    pub fn tally<'a, I>(matches: I) -> Self
    where
        I: IntoIterator<Item = &'a Match>,
    {
        matches.into_iter().fold(Self::default(), |mut counts, m| {
            counts.all += 1;
            match m.status_type() {
                StatusType::Finished => counts.finished += 1,
                StatusType::InProgress => counts.in_progress += 1,
                StatusType::NotStarted => counts.not_started += 1,
                StatusType::Canceled | StatusType::Cancelled => {}
            }
            counts
        })
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::All => self.all,
            Category::Finished => self.finished,
            Category::InProgress => self.in_progress,
            Category::NotStarted => self.not_started,
        }
    }
}
