use crate::model::{Match, MatchStatus, Round, Score, StatusType, Team};

/// 2016-08-07T14:00:00Z
pub(crate) const KICKOFF: i64 = 1_470_578_400;

pub(crate) fn sample_match(id: &str, kind: StatusType) -> Match {
    let (code, live_status, current) = match kind {
        StatusType::Finished => (100, "FT", Some(1)),
        StatusType::InProgress => (7, "45'", Some(0)),
        _ => (0, "-", None),
    };
    Match {
        id: id.to_string(),
        name: format!("Test Match {id}"),
        competition_id: "test-comp".to_string(),
        competition: "Test Competition".to_string(),
        country_id: "test-country".to_string(),
        country: "Test Country".to_string(),
        timestamp: KICKOFF,
        date: "07.08.2016.".to_string(),
        time: "14:00".to_string(),
        status: MatchStatus { code, kind },
        round: Round { round: 1 },
        home_team: team(1, "Home Team"),
        away_team: team(2, "Away Team"),
        home_score: Score {
            current,
            ..Score::default()
        },
        away_score: Score {
            current,
            ..Score::default()
        },
        live_status: live_status.to_string(),
    }
}

pub(crate) fn six_match_fixture() -> Vec<Match> {
    vec![
        sample_match("1", StatusType::Finished),
        sample_match("2", StatusType::Finished),
        sample_match("3", StatusType::InProgress),
        sample_match("4", StatusType::NotStarted),
        sample_match("5", StatusType::NotStarted),
        sample_match("6", StatusType::NotStarted),
    ]
}

fn team(id: u64, name: &str) -> Team {
    Team {
        id,
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        gender: "M".to_string(),
        sub_teams: vec![],
    }
}
