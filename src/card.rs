use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::format::DisplayZone;
use crate::model::{Match, Score, StatusType};

/// Length of regulation time in minutes, used to scale the live clock.
const REGULATION_MINUTES: f64 = 90.0;

/// What a match card shows for one match, independent of styling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchCard {
    pub id: String,
    pub country: String,
    pub competition: String,
    pub headline: Headline,
    pub home_team: String,
    pub away_team: String,
    /// `None` renders as an empty score cell.
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub badge: Badge,
}

/// The line above the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Headline {
    Status { text: String, tone: Tone },
    /// Kickoff date and time of a match that has not started.
    Kickoff(String),
}

/// Semantic colour of a status headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tone {
    Live,
    Ended,
    Alert,
    Muted,
}

/// The marker between the two team names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Badge {
    LiveClock(LiveClock),
    FullTime,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveClock {
    pub label: String,
    /// Share of regulation time played, 0 to 100.
    pub progress: f64,
}

impl LiveClock {
    pub fn new(live_status: &str) -> Self {
        let minutes = elapsed_minutes(live_status);
        Self {
            label: live_status.to_string(),
            progress: (f64::from(minutes) / REGULATION_MINUTES * 100.0).min(100.0),
        }
    }
}

/// Leading minutes of a live status such as `45'` or `90+3'`; 0 when there are none.
fn elapsed_minutes(live_status: &str) -> u32 {
    let cleaned = live_status.replacen('\'', "", 1);
    let digits: String = cleaned
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or_default()
}

impl MatchCard {
    pub fn from_match(m: &Match, zone: &DisplayZone) -> Self {
        let (headline, badge) = match m.status_type() {
            StatusType::InProgress => (
                status_headline("LIVE", Tone::Live),
                Badge::LiveClock(LiveClock::new(&m.live_status)),
            ),
            StatusType::Finished => (status_headline("ENDED", Tone::Ended), Badge::FullTime),
            StatusType::Canceled => (status_headline("CANCELLED", Tone::Alert), Badge::Empty),
            StatusType::NotStarted => (
                Headline::Kickoff(zone.format_upcoming(m.timestamp)),
                Badge::Empty,
            ),
            StatusType::Cancelled => (
                status_headline(&m.status_type().as_ref().to_uppercase(), Tone::Muted),
                Badge::Empty,
            ),
        };

        Self {
            id: m.id.clone(),
            country: m.country.to_uppercase(),
            competition: m.competition.clone(),
            headline,
            home_team: m.home_team.name.clone(),
            away_team: m.away_team.name.clone(),
            home_score: displayed_score(m.status_type(), &m.home_score),
            away_score: displayed_score(m.status_type(), &m.away_score),
            badge,
        }
    }
}

fn status_headline(text: &str, tone: Tone) -> Headline {
    Headline::Status {
        text: text.to_string(),
        tone,
    }
}

/// Canceled and upcoming cards always show a number, falling back to zero.
fn displayed_score(kind: StatusType, score: &Score) -> Option<u32> {
    match kind {
        StatusType::Canceled | StatusType::NotStarted => Some(score.current.unwrap_or(0)),
        _ => score.current,
    }
}

impl Display for Headline {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Headline::Status { text, .. } => write!(f, "{text}"),
            Headline::Kickoff(when) => write!(f, "{when}"),
        }
    }
}

impl Display for Badge {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Badge::LiveClock(clock) => write!(f, "({})", clock.label),
            Badge::FullTime => write!(f, "(FT)"),
            Badge::Empty => write!(f, "( )"),
        }
    }
}

impl Display for MatchCard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let cell = |score: Option<u32>| score.map(|s| s.to_string()).unwrap_or_default();
        writeln!(f, "{}", self.country)?;
        writeln!(f, "{}", self.competition)?;
        writeln!(f, "{}", self.headline)?;
        writeln!(
            f,
            "{} \u{2013} {}",
            cell(self.home_score),
            cell(self.away_score)
        )?;
        write!(f, "{} {} {}", self.home_team, self.badge, self.away_team)
    }
}
