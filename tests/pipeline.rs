use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use approx::assert_abs_diff_eq;
use serde_json::{Value, json};

use nfl_pickem::error::PickemError;
use nfl_pickem::espn::{Endpoints, Side};
use nfl_pickem::evaluate::Confidence;
use nfl_pickem::http_client::JsonSource;
use nfl_pickem::matchups::gather_week_matchups;
use nfl_pickem::profile::build_team_profiles;
use nfl_pickem::render::render_matchups;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

/// Serves canned payloads by URL, failing like a 404 for anything unknown.
struct FixtureSource {
    responses: HashMap<String, Value>,
}

impl FixtureSource {
    fn league(endpoints: &Endpoints) -> Self {
        let raw: Value =
            serde_json::from_str(&read_fixture("espn_league.json")).expect("fixture should parse");
        let mut responses = HashMap::new();
        responses.insert(endpoints.teams(), raw["teams"].clone());
        for id in ["3", "8", "9"] {
            responses.insert(endpoints.statistics(id), raw["stats"][id].clone());
            responses.insert(endpoints.schedule(id), raw["schedules"][id].clone());
            responses.insert(endpoints.past_performance(id), raw["past"][id].clone());
        }
        Self { responses }
    }
}

impl JsonSource for FixtureSource {
    fn fetch_json(&self, url: &str) -> Result<Value> {
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| anyhow!("http 404 Not Found for {url}"))
    }
}

#[test]
fn profiles_built_from_fixture_league() {
    let endpoints = Endpoints::default();
    let profiles = build_team_profiles(&FixtureSource::league(&endpoints), &endpoints)
        .expect("profiles should build");
    assert_eq!(profiles.len(), 3);

    let bears = &profiles["3"];
    assert_eq!(bears.name, "Chicago Bears");
    assert_abs_diff_eq!(bears.recent_form, 1.0);
    assert_abs_diff_eq!(bears.cover_rate, 0.5);
    assert_abs_diff_eq!(bears.rating, 0.965, epsilon = 1e-9);

    let lions = &profiles["8"];
    assert_abs_diff_eq!(lions.recent_form, 0.0);
    assert_abs_diff_eq!(lions.cover_rate, 0.5);
    assert_abs_diff_eq!(lions.rating, 0.035, epsilon = 1e-9);

    let packers = &profiles["9"];
    assert_eq!(packers.name, "Green Bay Packers");
    assert_abs_diff_eq!(packers.rating, 0.8, epsilon = 1e-9);

    for p in profiles.values() {
        assert!((0.0..=1.5).contains(&p.rating));
        assert!((0.0..=1.0).contains(&p.recent_form));
        assert!((0.0..=1.0).contains(&p.cover_rate));
    }
}

#[test]
fn completed_week_is_graded() {
    let endpoints = Endpoints::default();
    let profiles =
        build_team_profiles(&FixtureSource::league(&endpoints), &endpoints).unwrap();

    let week1 = gather_week_matchups(&profiles, 1);
    assert_eq!(week1.len(), 1, "shared event must not be duplicated");
    let m = &week1[0];
    assert_eq!(m.event_id, "100");
    assert_eq!(m.home_team, "Chicago Bears");
    assert_eq!(m.away_team, "Detroit Lions");
    assert_eq!(m.point_spread, "-1.5");
    assert_eq!(m.recommended_pick, "Chicago Bears");
    assert_eq!(m.confidence, Confidence::High);
    let result = m.result.expect("final game carries a result");
    assert_eq!(result.home_score, 24.0);
    assert_eq!(result.away_score, 20.0);
    assert_eq!(result.pick_covered, Some(true));
}

#[test]
fn upcoming_week_uses_details_line() {
    let endpoints = Endpoints::default();
    let profiles =
        build_team_profiles(&FixtureSource::league(&endpoints), &endpoints).unwrap();

    let week2 = gather_week_matchups(&profiles, 2);
    assert_eq!(week2.len(), 1);
    let m = &week2[0];
    assert_eq!(m.home_team, "Detroit Lions");
    assert_eq!(m.point_spread, "DET -3½");
    assert_eq!(m.recommended_pick, "Green Bay Packers");
    assert_eq!(m.pick_side, Side::Away);
    assert!(m.result.is_none());

    let mut buf = Vec::new();
    render_matchups(&mut buf, &week2, 2).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("Green Bay Packers at Detroit Lions\n"));
    assert!(text.contains("Away summary: Green Bay Packers (1-0, 50% recent)\n"));
    assert!(!text.contains("Final:"));
}

#[test]
fn empty_team_list_is_a_domain_error() {
    let endpoints = Endpoints::default();
    let mut source = FixtureSource::league(&endpoints);
    source.responses.insert(endpoints.teams(), json!({"items": []}));

    let err = build_team_profiles(&source, &endpoints).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PickemError>(),
        Some(PickemError::NoTeams)
    ));
}

#[test]
fn failed_request_aborts_the_run() {
    let endpoints = Endpoints::default();
    let mut source = FixtureSource::league(&endpoints);
    source.responses.remove(&endpoints.schedule("8"));

    let err = build_team_profiles(&source, &endpoints).unwrap_err();
    assert!(format!("{err:#}").contains("schedule request failed for team 8"));
}
