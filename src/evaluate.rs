use std::fmt;

use serde::Serialize;

use crate::espn::Side;
use crate::grading::GameResult;
use crate::profile::TeamProfile;
use crate::spread::point_spread_value;

const HIGH_CONFIDENCE_GAP: f64 = 0.3;
const MEDIUM_CONFIDENCE_GAP: f64 = 0.15;
const SPREAD_DIVISOR: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn from_gap(gap: f64) -> Self {
        if gap >= HIGH_CONFIDENCE_GAP {
            Confidence::High
        } else if gap >= MEDIUM_CONFIDENCE_GAP {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Confidence::High => "High",
            Confidence::Medium => "Medium",
            Confidence::Low => "Low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummaries {
    pub home: String,
    pub away: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Matchup {
    pub week: u32,
    pub event_id: String,
    pub home_team: String,
    pub away_team: String,
    pub point_spread: String,
    pub recommended_pick: String,
    pub pick_side: Side,
    pub confidence: Confidence,
    pub rationale: Vec<String>,
    pub teams: TeamSummaries,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GameResult>,
}

/// `Name (W-L, R% recent)`.
pub fn describe_team(profile: &TeamProfile) -> String {
    format!(
        "{} ({}-{}, {:.0}% recent)",
        profile.name,
        profile.wins() as i64,
        profile.losses() as i64,
        profile.recent_form * 100.0
    )
}

pub fn evaluate_matchup(
    week: u32,
    event_id: &str,
    home: &TeamProfile,
    away: &TeamProfile,
    point_spread: &str,
) -> Matchup {
    let mut adjusted_diff = home.rating - away.rating;
    if let Some(spread) = point_spread_value(point_spread) {
        adjusted_diff -= spread / SPREAD_DIVISOR;
    }

    let (pick_side, winner, loser) = if adjusted_diff >= 0.0 {
        (Side::Home, home, away)
    } else {
        (Side::Away, away, home)
    };
    let confidence = Confidence::from_gap((winner.rating - loser.rating).abs());

    let rationale = vec![
        format!("Rating edge: {:.2} vs {:.2}", winner.rating, loser.rating),
        format!(
            "Recent form: {:.0}% vs {:.0}%",
            winner.recent_form * 100.0,
            loser.recent_form * 100.0
        ),
    ];

    Matchup {
        week,
        event_id: event_id.to_string(),
        home_team: home.name.clone(),
        away_team: away.name.clone(),
        point_spread: point_spread.to_string(),
        recommended_pick: winner.name.clone(),
        pick_side,
        confidence,
        rationale,
        teams: TeamSummaries {
            home: describe_team(home),
            away: describe_team(away),
        },
        result: None,
    }
}
