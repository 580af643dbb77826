use std::collections::HashSet;

use tracing::{debug, info};

use crate::espn::{ScheduleEvent, Side};
use crate::evaluate::{Matchup, evaluate_matchup};
use crate::grading;
use crate::profile::TeamProfiles;
use crate::spread::{home_line, parse_point_spread};

/// Every game scheduled in `week`, once each, sorted by home team name.
///
/// A game shows up in both teams' schedules; the first copy seen wins.
pub fn gather_week_matchups(profiles: &TeamProfiles, week: u32) -> Vec<Matchup> {
    let mut processed: HashSet<&str> = HashSet::new();
    let mut matchups = Vec::new();

    for profile in profiles.values() {
        for event in &profile.schedule_events {
            if event.week != Some(week) {
                continue;
            }
            let Some(event_id) = event.id.as_deref() else {
                continue;
            };
            if !processed.insert(event_id) {
                continue;
            }
            if let Some(m) = assemble_matchup(profiles, week, event_id, event) {
                matchups.push(m);
            }
        }
    }

    matchups.sort_by(|a, b| a.home_team.cmp(&b.home_team));
    info!(week, games = matchups.len(), "assembled matchups");
    matchups
}

fn assemble_matchup(
    profiles: &TeamProfiles,
    week: u32,
    event_id: &str,
    event: &ScheduleEvent,
) -> Option<Matchup> {
    let competition = event.competition.as_ref()?;
    if competition.competitors.len() < 2 {
        debug!(event_id, "skipping event with fewer than two competitors");
        return None;
    }
    let home_comp = competition.competitor(Side::Home)?;
    let away_comp = competition.competitor(Side::Away)?;

    let home = home_comp.team_id.as_deref().and_then(|id| profiles.get(id));
    let away = away_comp.team_id.as_deref().and_then(|id| profiles.get(id));
    let (Some(home), Some(away)) = (home, away) else {
        debug!(event_id, "skipping event with unknown team");
        return None;
    };

    let spread = parse_point_spread(competition);
    let mut matchup = evaluate_matchup(week, event_id, home, away, &spread);

    if event.completed {
        if let (Some(home_score), Some(away_score)) = (home_comp.score, away_comp.score) {
            matchup.result = Some(grading::grade(
                matchup.pick_side,
                home_score,
                away_score,
                home_line(competition),
            ));
        }
    }
    Some(matchup)
}
