use std::env::{self, VarError};

use serde::Deserialize;

use crate::category::Category;
use crate::error::{LiveScoreError, Result};
use crate::format::DisplayZone;

pub const TIME_ZONE_VAR: &str = "LIVE_SCORE_TZ";
pub const FILTER_VAR: &str = "LIVE_SCORE_FILTER";

/// Board settings: where kickoff times are shown and which tab opens first.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub time_zone: DisplayZone,
    pub initial_category: Category,
}

impl Config {
    /// Read `LIVE_SCORE_TZ` and `LIVE_SCORE_FILTER`; unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| env::var(var))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&'static str) -> std::result::Result<String, VarError>,
    {
        let mut config = Config::default();
        if let Some(tz) = read_var(&lookup, TIME_ZONE_VAR)? {
            config.time_zone = tz.parse()?;
        }
        if let Some(filter) = read_var(&lookup, FILTER_VAR)? {
            config.initial_category = Category::parse(&filter)?;
        }
        Ok(config)
    }
}

fn read_var<F>(lookup: &F, var: &'static str) -> Result<Option<String>>
where
    F: Fn(&'static str) -> std::result::Result<String, VarError>,
{
    match lookup(var) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(source) => Err(LiveScoreError::Env { var, source }),
    }
}
