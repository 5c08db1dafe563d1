use std::fmt::{Display, Formatter};

use itertools::Itertools;
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

use crate::card::MatchCard;
use crate::category::{filter_by_category, Category, CategoryCounts};
use crate::config::Config;
use crate::error::{LiveScoreError, Result};
use crate::format::DisplayZone;
use crate::model::{Match, MatchList};

/// The state behind a match board page.
///
/// `Board` owns the full match collection, remembers which filter tab is
/// selected and knows the zone kickoff times are displayed in.
///
/// # Examples
///
/// ```
/// use live_score::{Board, Category};
///
/// let mut board = Board::from_json("[]")?;
/// board.select(Category::InProgress);
/// assert!(board.visible().is_empty());
/// assert_eq!(board.tabs()[2].to_string(), "Live (0)");
/// # Ok::<(), live_score::LiveScoreError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Board {
    matches: MatchList,
    active: Category,
    zone: DisplayZone,
}

/// One filter button: its label, how many matches it holds and whether it is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterTab {
    pub category: Category,
    pub label: &'static str,
    pub count: usize,
    pub active: bool,
}

impl Display for FilterTab {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label, self.count)
    }
}

impl Board {
    pub fn new(matches: MatchList) -> Self {
        Self {
            matches,
            ..Self::default()
        }
    }

    /// Build a board from a JSON array of match records.
    #[instrument(level = "info", skip(body), fields(bytes = body.len()))]
    pub fn from_json(body: &str) -> Result<Self> {
        let matches: MatchList = serde_json::from_str(body)?;
        let duplicates = matches.iter().map(|m| m.id.as_str()).duplicates().collect_vec();
        if !duplicates.is_empty() {
            warn!(?duplicates, "match ids are not unique");
        }
        info!(matches = matches.len(), "loaded match board");
        Ok(Self::new(matches))
    }

    pub fn from_config(matches: MatchList, config: &Config) -> Self {
        Self::new(matches)
            .with_zone(config.time_zone)
            .with_category(config.initial_category)
    }

    pub fn with_zone(mut self, zone: DisplayZone) -> Self {
        self.zone = zone;
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.active = category;
        self
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn active(&self) -> Category {
        self.active
    }

    pub fn zone(&self) -> DisplayZone {
        self.zone
    }

    #[instrument(level = "debug", skip(self))]
    pub fn select(&mut self, category: Category) {
        self.active = category;
    }

    /// Select a tab by its name (`all`, `finished`, `inprogress`, `notstarted`).
    pub fn select_named(&mut self, name: &str) -> Result<()> {
        let category = Category::parse(name).inspect_err(|e: &LiveScoreError| {
            debug!(error = %e, "rejected filter selection");
        })?;
        self.select(category);
        Ok(())
    }

    pub fn counts(&self) -> CategoryCounts {
        CategoryCounts::tally(&self.matches)
    }

    /// The filter tabs in display order.
    pub fn tabs(&self) -> Vec<FilterTab> {
        let counts = self.counts();
        Category::iter()
            .map(|category| FilterTab {
                category,
                label: category.label(),
                count: counts.get(category),
                active: category == self.active,
            })
            .collect()
    }

    /// Matches in the active category, in their original order.
    pub fn visible(&self) -> Vec<&Match> {
        filter_by_category(&self.matches, self.active)
    }

    /// Cards for the visible matches.
    #[instrument(level = "debug", skip(self), fields(active = %self.active))]
    pub fn cards(&self) -> Vec<MatchCard> {
        self.visible()
            .into_iter()
            .map(|m| MatchCard::from_match(m, &self.zone))
            .collect()
    }
}
