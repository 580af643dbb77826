use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PickemError {
    #[error("week must be between 1 and 18 (got {0})")]
    InvalidWeek(i64),

    #[error("unable to retrieve NFL teams from ESPN API")]
    NoTeams,

    #[error("missing metadata for {home} or {away}")]
    UnknownTeam { home: String, away: String },

    #[error("input CSV not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("unrecognized week label {0:?}")]
    InvalidWeekLabel(String),

    #[error("unparsable game date {0:?}")]
    InvalidDate(String),
}

pub const MIN_WEEK: i64 = 1;
pub const MAX_WEEK: i64 = 18;

/// Regular-season weeks only; checked before any network call.
pub fn validate_week(week: i64) -> Result<u32, PickemError> {
    if !(MIN_WEEK..=MAX_WEEK).contains(&week) {
        return Err(PickemError::InvalidWeek(week));
    }
    Ok(week as u32)
}
