use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Local, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::LiveScoreError;

const MONTH_FORMAT: &str = "%b";
const CLOCK_FORMAT: &str = "%H:%M";

/// Render a kickoff timestamp (Unix seconds) as `"AUG 7TH 14:00"` in `tz`.
///
/// Timestamps chrono cannot represent are clamped to its supported range.
pub fn format_upcoming_date_time<Z>(timestamp: i64, tz: &Z) -> String
where
    Z: TimeZone,
    Z::Offset: Display,
{
    let local = to_utc(timestamp).with_timezone(tz);
    let month = local.format(MONTH_FORMAT).to_string().to_uppercase();
    let day = local.day();
    format!(
        "{month} {day}{} {}",
        ordinal_suffix(day),
        local.format(CLOCK_FORMAT)
    )
}

/// [`format_upcoming_date_time`] in the host's local time zone.
pub fn format_upcoming_date_time_local(timestamp: i64) -> String {
    format_upcoming_date_time(timestamp, &Local)
}

/// English ordinal suffix for a day of month, upper-cased.
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (4..=20).contains(&day) {
        return "TH";
    }
    match day % 10 {
        1 => "ST",
        2 => "ND",
        3 => "RD",
        _ => "TH",
    }
}

fn to_utc(timestamp: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(timestamp, 0).unwrap_or_else(|| {
        warn!(timestamp, "timestamp outside supported range, clamping");
        if timestamp < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        }
    })
}

/// The time zone kickoff times are displayed in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DisplayZone {
    /// Whatever the host reports as its local zone.
    #[default]
    Local,
    Named(Tz),
}

impl DisplayZone {
    pub fn format_upcoming(&self, timestamp: i64) -> String {
        match self {
            DisplayZone::Local => format_upcoming_date_time(timestamp, &Local),
            DisplayZone::Named(tz) => format_upcoming_date_time(timestamp, tz),
        }
    }
}

impl FromStr for DisplayZone {
    type Err = LiveScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("local") {
            return Ok(DisplayZone::Local);
        }
        s.parse::<Tz>()
            .map(DisplayZone::Named)
            .map_err(|_| LiveScoreError::UnknownTimeZone(s.to_string()))
    }
}

impl TryFrom<String> for DisplayZone {
    type Error = LiveScoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DisplayZone> for String {
    fn from(zone: DisplayZone) -> Self {
        zone.to_string()
    }
}

impl Display for DisplayZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayZone::Local => write!(f, "local"),
            DisplayZone::Named(tz) => write!(f, "{}", tz.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;
    use crate::testing::KICKOFF;

    fn utc_on(day: u32, hour: u32, minute: u32) -> String {
        let ts = Utc
            .with_ymd_and_hms(2016, 8, day, hour, minute, 0)
            .unwrap()
            .timestamp();
        format_upcoming_date_time(ts, &Utc)
    }

    #[test]
    fn test_known_kickoff() {
        assert_eq!(format_upcoming_date_time(KICKOFF, &Utc), "AUG 7TH 14:00");
    }

    #[test]
    fn test_ordinal_suffixes() {
        assert_eq!(utc_on(1, 0, 0), "AUG 1ST 00:00");
        assert_eq!(utc_on(2, 9, 5), "AUG 2ND 09:05");
        assert_eq!(utc_on(3, 23, 59), "AUG 3RD 23:59");
        assert_eq!(utc_on(11, 12, 0), "AUG 11TH 12:00");
        assert_eq!(utc_on(12, 12, 0), "AUG 12TH 12:00");
        assert_eq!(utc_on(13, 12, 0), "AUG 13TH 12:00");
        assert_eq!(utc_on(21, 12, 0), "AUG 21ST 12:00");
        assert_eq!(utc_on(22, 12, 0), "AUG 22ND 12:00");
        assert_eq!(utc_on(23, 12, 0), "AUG 23RD 12:00");
        assert_eq!(utc_on(31, 12, 0), "AUG 31ST 12:00");
        for day in 4..=20 {
            assert_eq!(ordinal_suffix(day), "TH", "day {day}");
        }
    }

    #[test]
    fn test_zone_is_applied() {
        let tokyo: DisplayZone = "Asia/Tokyo".parse().unwrap();
        assert_eq!(tokyo.format_upcoming(KICKOFF), "AUG 7TH 23:00");

        let minus_three = FixedOffset::west_opt(3 * 3600).unwrap();
        assert_eq!(
            format_upcoming_date_time(KICKOFF, &minus_three),
            "AUG 7TH 11:00"
        );

        // crosses into the next day
        let auckland: DisplayZone = "Pacific/Auckland".parse().unwrap();
        assert_eq!(auckland.format_upcoming(KICKOFF), "AUG 8TH 02:00");
    }

    #[test]
    fn test_out_of_range_timestamps_do_not_panic() {
        assert!(!format_upcoming_date_time(i64::MAX, &Utc).is_empty());
        assert!(!format_upcoming_date_time(i64::MIN, &Utc).is_empty());
        assert_eq!(format_upcoming_date_time(-1, &Utc), "DEC 31ST 23:59");
    }

    #[test]
    fn test_display_zone_parse() {
        assert_eq!("local".parse::<DisplayZone>().unwrap(), DisplayZone::Local);
        assert_eq!(
            "UTC".parse::<DisplayZone>().unwrap(),
            DisplayZone::Named(Tz::UTC)
        );
        assert!(matches!(
            "Mars/Olympus".parse::<DisplayZone>(),
            Err(LiveScoreError::UnknownTimeZone(_))
        ));

        let zone: DisplayZone = serde_json::from_str(r#""Europe/London""#).unwrap();
        assert_eq!(zone.to_string(), "Europe/London");
        assert_eq!(serde_json::to_string(&zone).unwrap(), r#""Europe/London""#);
    }
}
