//! ESPN endpoints and permissive readers for their loosely-typed payloads.

use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_SEASON: i32 = 2025;

const TEAMS_URL: &str = "https://sports.core.api.espn.com/v2/sports/football/leagues/nfl/teams?limit=32";
const CORE_LEAGUE_BASE: &str = "https://sports.core.api.espn.com/v2/sports/football/leagues/nfl";
const SITE_TEAMS_BASE: &str = "https://site.api.espn.com/apis/site/v2/sports/football/nfl/teams";
// Provider 1002 is the consensus line.
const PAST_PERFORMANCE_PROVIDER: u32 = 1002;
const PAST_PERFORMANCE_LIMIT: u32 = 134;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    pub season: i32,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            season: DEFAULT_SEASON,
        }
    }
}

impl Endpoints {
    pub fn new(season: i32) -> Self {
        Self { season }
    }

    pub fn teams(&self) -> String {
        TEAMS_URL.to_string()
    }

    /// Regular-season (type 2) statistics.
    pub fn statistics(&self, team_id: &str) -> String {
        format!(
            "{CORE_LEAGUE_BASE}/seasons/{}/types/2/teams/{team_id}/statistics",
            self.season
        )
    }

    pub fn schedule(&self, team_id: &str) -> String {
        format!("{SITE_TEAMS_BASE}/{team_id}/schedule")
    }

    pub fn past_performance(&self, team_id: &str) -> String {
        format!(
            "{CORE_LEAGUE_BASE}/teams/{team_id}/odds/{PAST_PERFORMANCE_PROVIDER}/past-performances?limit={PAST_PERFORMANCE_LIMIT}"
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "home" => Some(Side::Home),
            "away" => Some(Side::Away),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Competitor {
    pub team_id: Option<String>,
    pub abbreviation: Option<String>,
    pub side: Option<Side>,
    pub winner: bool,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OddsEntry {
    pub spread: Option<String>,
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Competition {
    pub competitors: Vec<Competitor>,
    pub odds: Vec<OddsEntry>,
}

impl Competition {
    pub fn competitor(&self, side: Side) -> Option<&Competitor> {
        self.competitors.iter().find(|c| c.side == Some(side))
    }

    pub fn competitor_for_team(&self, team_id: &str) -> Option<&Competitor> {
        self.competitors
            .iter()
            .find(|c| c.team_id.as_deref() == Some(team_id))
    }
}

/// Typed view of one entry in a team's schedule. Only the first competition is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEvent {
    pub id: Option<String>,
    pub week: Option<u32>,
    pub completed: bool,
    pub competition: Option<Competition>,
}

pub fn parse_schedule_events(schedule: &Value) -> Vec<ScheduleEvent> {
    schedule
        .get("events")
        .and_then(Value::as_array)
        .map(|events| events.iter().map(parse_schedule_event).collect())
        .unwrap_or_default()
}

pub fn parse_schedule_event(v: &Value) -> ScheduleEvent {
    let id = pick_string(v, &["id", "uid"]);
    let week = v.get("week").and_then(|w| pick_u32(w, &["number"]));
    let completed = v
        .get("status")
        .and_then(|s| s.get("type"))
        .and_then(|t| t.get("completed"))
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let competition = v
        .get("competitions")
        .and_then(Value::as_array)
        .and_then(|arr| arr.first())
        .map(parse_competition);

    ScheduleEvent {
        id,
        week,
        completed,
        competition,
    }
}

fn parse_competition(v: &Value) -> Competition {
    let competitors = v
        .get("competitors")
        .and_then(Value::as_array)
        .map(|arr| arr.iter().map(parse_competitor).collect())
        .unwrap_or_default();
    let odds = v
        .get("odds")
        .and_then(Value::as_array)
        .map(|arr| arr.iter().map(parse_odds_entry).collect())
        .unwrap_or_default();
    Competition { competitors, odds }
}

fn parse_competitor(v: &Value) -> Competitor {
    let team_id = v
        .get("team")
        .and_then(|t| pick_string(t, &["id"]))
        .or_else(|| pick_string(v, &["id"]));
    let abbreviation = v
        .get("team")
        .and_then(|t| pick_string(t, &["abbreviation"]));
    let side = v.get("homeAway").and_then(Value::as_str).and_then(Side::parse);
    let winner = v.get("winner").and_then(Value::as_bool).unwrap_or(false);
    let score = v.get("score").and_then(score_value);
    Competitor {
        team_id,
        abbreviation,
        side,
        winner,
        score,
    }
}

fn parse_odds_entry(v: &Value) -> OddsEntry {
    let spread = v.get("spread").and_then(|s| match s {
        Value::Null => None,
        Value::String(s) => Some(s.trim().to_string()),
        other => Some(other.to_string()),
    });
    let details = v
        .get("details")
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    OddsEntry { spread, details }
}

/// Scores show up as numbers, numeric strings, or `{ value, displayValue }` objects.
fn score_value(v: &Value) -> Option<f64> {
    match v {
        Value::Object(_) => v
            .get("value")
            .and_then(value_to_f64)
            .or_else(|| v.get("displayValue").and_then(value_to_f64)),
        other => value_to_f64(other),
    }
}

/// Team id from an item's `id` or, for `$ref`-only items, from the reference path.
pub fn team_id_of(item: &Value) -> Option<String> {
    pick_string(item, &["id"]).or_else(|| {
        item.get("$ref")
            .and_then(Value::as_str)
            .and_then(ref_last_segment)
            .map(str::to_string)
    })
}

/// Last path segment of an API reference with any query string removed.
pub fn ref_last_segment(reference: &str) -> Option<&str> {
    let path = reference.split(['?', '#']).next().unwrap_or_default();
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

pub fn value_to_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

pub fn pick_string(value: &Value, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(v) = value.get(*key) {
            if let Some(s) = as_string(v) {
                return Some(s);
            }
        }
    }
    None
}

pub fn pick_u32(value: &Value, keys: &[&str]) -> Option<u32> {
    for key in keys {
        if let Some(v) = value.get(*key) {
            if let Some(num) = v.as_u64() {
                return u32::try_from(num).ok();
            }
            if let Some(s) = v.as_str() {
                if let Ok(num) = s.trim().parse::<u32>() {
                    return Some(num);
                }
            }
        }
    }
    None
}

fn as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
