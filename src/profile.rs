use std::collections::{BTreeMap, HashMap};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::PickemError;
use crate::espn::{
    Endpoints, ScheduleEvent, parse_schedule_events, pick_string, ref_last_segment, team_id_of,
    value_to_f64,
};
use crate::http_client::JsonSource;

pub const RECENT_FORM_LOOKBACK: usize = 5;
pub const COVER_RATE_LOOKBACK: usize = 10;
pub const NEUTRAL_RATIO: f64 = 0.5;
pub const RATING_MAX: f64 = 1.5;

const WIN_PCT_WEIGHT: f64 = 0.6;
const RECENT_FORM_WEIGHT: f64 = 0.25;
const COVER_RATE_WEIGHT: f64 = 0.15;
const MARGIN_DIVISOR: f64 = 100.0;

pub const WINS_KEYS: &[&str] = &["wins", "overallWins", "overallRecordWins"];
pub const LOSSES_KEYS: &[&str] = &["losses", "overallLosses", "overallRecordLosses"];
pub const TIES_KEYS: &[&str] = &["ties", "overallTies", "overallRecordTies"];
// Team descriptions only read the plain record keys.
const RECORD_WINS_KEYS: &[&str] = &["wins", "overallWins"];
const RECORD_LOSSES_KEYS: &[&str] = &["losses", "overallLosses"];
const POINTS_FOR_KEYS: &[&str] = &["pointsFor", "pointsForTotal"];
const POINTS_AGAINST_KEYS: &[&str] = &["pointsAgainst", "pointsAgainstTotal"];

pub type FlatStats = HashMap<String, f64>;

/// A team's state for one run. Built once from fetched data.
#[derive(Debug, Clone)]
pub struct TeamProfile {
    pub team_id: String,
    pub name: String,
    pub stats: Value,
    pub flat_stats: FlatStats,
    pub schedule_events: Vec<ScheduleEvent>,
    pub past_performance: Value,
    pub recent_form: f64,
    pub cover_rate: f64,
    pub rating: f64,
}

impl TeamProfile {
    /// Derives the flattened stats and every ratio from the raw payloads.
    pub fn from_payloads(
        team_id: String,
        name: String,
        stats: Value,
        schedule: &Value,
        past_performance: Value,
    ) -> Self {
        let flat_stats = flatten_stats(&stats);
        let schedule_events = parse_schedule_events(schedule);
        let recent_form = compute_recent_form(&schedule_events, &team_id, RECENT_FORM_LOOKBACK);
        let cover_rate = compute_cover_rate(&past_performance, &team_id, COVER_RATE_LOOKBACK);
        let rating = compute_rating(&flat_stats, recent_form, cover_rate);
        Self {
            team_id,
            name,
            stats,
            flat_stats,
            schedule_events,
            past_performance,
            recent_form,
            cover_rate,
            rating,
        }
    }

    pub fn wins(&self) -> f64 {
        lookup_stat(&self.flat_stats, RECORD_WINS_KEYS, 0.0)
    }

    pub fn losses(&self) -> f64 {
        lookup_stat(&self.flat_stats, RECORD_LOSSES_KEYS, 0.0)
    }
}

/// Profiles keyed by ESPN team id.
pub type TeamProfiles = BTreeMap<String, TeamProfile>;

/// Walks `splits.categories[].stats[]` into name -> value. `splits` may be one
/// object or an array of them.
pub fn flatten_stats(stats_payload: &Value) -> FlatStats {
    let mut flattened = FlatStats::new();
    let splits: Vec<&Value> = match stats_payload.get("splits") {
        Some(Value::Array(arr)) => arr.iter().collect(),
        Some(obj @ Value::Object(_)) => vec![obj],
        _ => Vec::new(),
    };

    for split in splits {
        let Some(categories) = split.get("categories").and_then(Value::as_array) else {
            continue;
        };
        for category in categories {
            let Some(stats) = category.get("stats").and_then(Value::as_array) else {
                continue;
            };
            for stat in stats {
                let Some(name) = stat.get("name").and_then(Value::as_str) else {
                    continue;
                };
                let Some(value) = stat.get("value").and_then(value_to_f64) else {
                    continue;
                };
                flattened.insert(name.to_string(), value);
            }
        }
    }
    flattened
}

/// Mean of the last `lookback` completed results, in schedule order.
pub fn compute_recent_form(events: &[ScheduleEvent], team_id: &str, lookback: usize) -> f64 {
    let results: Vec<f64> = events
        .iter()
        .filter(|e| e.completed)
        .filter_map(|e| e.competition.as_ref())
        .filter_map(|c| c.competitor_for_team(team_id))
        .map(|c| if c.winner { 1.0 } else { 0.0 })
        .collect();

    if results.is_empty() || lookback == 0 {
        return NEUTRAL_RATIO;
    }
    let recent = &results[results.len().saturating_sub(lookback)..];
    recent.iter().sum::<f64>() / recent.len() as f64
}

/// Share of the first `lookback` past-performance items whose spread winner is
/// this team.
///
/// Items are taken in payload order, assumed most-recent-first. The feed does not
/// document its ordering, so this is unverified.
pub fn compute_cover_rate(past_performance: &Value, team_id: &str, lookback: usize) -> f64 {
    let Some(items) = past_performance.get("items").and_then(Value::as_array) else {
        return NEUTRAL_RATIO;
    };

    let mut successes = 0usize;
    let mut total = 0usize;
    for item in items.iter().take(lookback) {
        let reference = match item.get("spreadWinner") {
            Some(Value::Object(obj)) => obj.get("$ref").and_then(Value::as_str).unwrap_or_default(),
            Some(Value::String(s)) => s.as_str(),
            _ => continue,
        };
        total += 1;
        if ref_last_segment(reference) == Some(team_id) {
            successes += 1;
        }
    }

    if total == 0 {
        return NEUTRAL_RATIO;
    }
    successes as f64 / total as f64
}

/// First alias present in `flat_stats`, else `default`.
pub fn lookup_stat(flat_stats: &FlatStats, names: &[&str], default: f64) -> f64 {
    names
        .iter()
        .find_map(|name| flat_stats.get(*name).copied())
        .unwrap_or(default)
}

pub fn compute_rating(flat_stats: &FlatStats, recent_form: f64, cover_rate: f64) -> f64 {
    let wins = lookup_stat(flat_stats, WINS_KEYS, 0.0);
    let losses = lookup_stat(flat_stats, LOSSES_KEYS, 0.0);
    let ties = lookup_stat(flat_stats, TIES_KEYS, 0.0);
    let games = wins + losses + ties;
    let win_pct = if games != 0.0 { wins / games } else { NEUTRAL_RATIO };

    let points_for = lookup_stat(flat_stats, POINTS_FOR_KEYS, 0.0);
    let points_against = lookup_stat(flat_stats, POINTS_AGAINST_KEYS, 0.0);
    let scoring_margin = (points_for - points_against) / games.max(1.0);

    let rating = win_pct * WIN_PCT_WEIGHT
        + recent_form * RECENT_FORM_WEIGHT
        + cover_rate * COVER_RATE_WEIGHT
        + scoring_margin / MARGIN_DIVISOR;
    clamp_rating(rating)
}

fn clamp_rating(rating: f64) -> f64 {
    if rating.is_nan() {
        return 0.0;
    }
    rating.clamp(0.0, RATING_MAX)
}

/// Fetches the team list and each team's stats, schedule and odds history, one
/// team at a time.
pub fn build_team_profiles(source: &dyn JsonSource, endpoints: &Endpoints) -> Result<TeamProfiles> {
    let payload = source
        .fetch_json(&endpoints.teams())
        .context("teams list request failed")?;
    let teams = payload
        .get("items")
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .ok_or(PickemError::NoTeams)?;

    info!(teams = teams.len(), season = endpoints.season, "building team profiles");

    let mut profiles = TeamProfiles::new();
    for team in teams {
        let Some(team_id) = team_id_of(team) else {
            debug!("skipping team item without id");
            continue;
        };

        let stats = source
            .fetch_json(&endpoints.statistics(&team_id))
            .with_context(|| format!("statistics request failed for team {team_id}"))?;
        let schedule = source
            .fetch_json(&endpoints.schedule(&team_id))
            .with_context(|| format!("schedule request failed for team {team_id}"))?;
        let past_perf = source
            .fetch_json(&endpoints.past_performance(&team_id))
            .with_context(|| format!("past performance request failed for team {team_id}"))?;

        let name = pick_string(team, &["displayName", "name"])
            .or_else(|| {
                schedule
                    .get("team")
                    .and_then(|t| pick_string(t, &["displayName", "name"]))
            })
            .unwrap_or_else(|| format!("Team {team_id}"));

        let profile = TeamProfile::from_payloads(team_id.clone(), name, stats, &schedule, past_perf);
        debug!(
            team = %profile.name,
            rating = profile.rating,
            recent_form = profile.recent_form,
            cover_rate = profile.cover_rate,
            "profile ready"
        );
        profiles.insert(team_id, profile);
    }
    Ok(profiles)
}
