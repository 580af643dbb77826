use std::collections::HashMap;

use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::{Value, json};
use std::hint::black_box;

use nfl_pickem::matchups::gather_week_matchups;
use nfl_pickem::profile::{TeamProfile, TeamProfiles, compute_rating, flatten_stats};
use nfl_pickem::season_convert::convert_reader;
use nfl_pickem::team_meta::TEAMS;

fn stats_payload(wins: u32, losses: u32) -> Value {
    json!({"splits": {"categories": [
        {"stats": [
            {"name": "wins", "value": wins},
            {"name": "losses", "value": losses},
            {"name": "ties", "value": 0}
        ]},
        {"stats": [
            {"name": "pointsFor", "value": 21 * (wins + losses)},
            {"name": "pointsAgainst", "value": 19 * (wins + losses)}
        ]}
    ]}})
}

fn event(id: u32, week: u32, home: u32, away: u32, completed: bool) -> Value {
    json!({
        "id": id.to_string(),
        "week": {"number": week},
        "status": {"type": {"completed": completed}},
        "competitions": [{
            "competitors": [
                {"homeAway": "home", "team": {"id": home.to_string()}, "winner": true, "score": {"value": 27.0}},
                {"homeAway": "away", "team": {"id": away.to_string()}, "winner": false, "score": {"value": 20.0}}
            ],
            "odds": [{"spread": -2.5}]
        }]
    })
}

// 32 teams over 17 weeks; each even id hosts one odd id per week.
fn league() -> TeamProfiles {
    let mut schedules: HashMap<u32, Vec<Value>> = HashMap::new();
    for week in 1..=17u32 {
        for home in (0..32u32).step_by(2) {
            let away = (home + 2 * week + 1) % 32;
            let id = week * 100 + home;
            let ev = event(id, week, home, away, week < 9);
            schedules.entry(home).or_default().push(ev.clone());
            schedules.entry(away).or_default().push(ev);
        }
    }

    (0..32u32)
        .map(|id| {
            let events = schedules.remove(&id).unwrap_or_default();
            let profile = TeamProfile::from_payloads(
                id.to_string(),
                format!("Team {id}"),
                stats_payload(id % 9, 8 - id % 9),
                &json!({ "events": events }),
                Value::Null,
            );
            (id.to_string(), profile)
        })
        .collect()
}

fn schedule_csv() -> String {
    let mut out = String::from("Week,HomeTeam,AwayTeam,Date,HomeScore,AwayScore,GameStatus,Day\n");
    for week in 1..=18usize {
        for pair in TEAMS.chunks(2) {
            out.push_str(&format!(
                "Week {week},{},{},TBD,{},{},Final,Sun\n",
                pair[0].key,
                pair[1].key,
                17 + week % 7,
                20
            ));
        }
    }
    out
}

fn bench_rating(c: &mut Criterion) {
    let payload = stats_payload(10, 7);
    c.bench_function("flatten_and_rate", |b| {
        b.iter(|| {
            let flat = flatten_stats(black_box(&payload));
            black_box(compute_rating(&flat, 0.6, 0.4));
        })
    });
}

fn bench_week_matchups(c: &mut Criterion) {
    let profiles = league();
    c.bench_function("gather_week_matchups", |b| {
        b.iter(|| {
            let out = gather_week_matchups(black_box(&profiles), 6);
            black_box(out.len());
        })
    });
}

fn bench_season_convert(c: &mut Criterion) {
    let csv = schedule_csv();
    c.bench_function("season_convert", |b| {
        b.iter(|| {
            let mock = convert_reader(black_box(csv.as_bytes()), 2025).unwrap();
            black_box(mock.weeks.len());
        })
    });
}

criterion_group!(benches, bench_rating, bench_week_matchups, bench_season_convert);
criterion_main!(benches);
