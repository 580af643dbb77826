//! CSV schedule -> mobile client mock JSON.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::PickemError;
use crate::team_meta::{self, TeamMeta};

const KICKOFF_HOUR: u32 = 17;
const POINTS_PER_GAME: u32 = 10;
// Week 1 kicks off the first Thursday of September; TBD dates count forward from here.
const WEEK1_MONTH: u32 = 9;
const WEEK1_DAY: u32 = 4;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduleRow {
    #[serde(default)]
    pub week: Option<String>,
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub away_team: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub home_score: Option<String>,
    #[serde(default)]
    pub away_score: Option<String>,
    #[serde(default)]
    pub game_status: Option<String>,
    #[serde(default)]
    pub day: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamRecord {
    pub wins: u32,
    pub losses: u32,
}

impl TeamRecord {
    pub fn as_text(&self) -> String {
        format!("{}-{}", self.wins, self.losses)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Scheduled,
    Final,
}

impl GameStatus {
    fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.trim().eq_ignore_ascii_case("final") => GameStatus::Final,
            _ => GameStatus::Scheduled,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MockTeam {
    pub id: String,
    pub name: String,
    pub abbr: String,
    pub record: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub score: Option<i32>,
}

impl MockTeam {
    fn new(meta: &TeamMeta, record: &TeamRecord, score: Option<i32>) -> Self {
        Self {
            id: meta.id.to_string(),
            name: meta.name.to_string(),
            abbr: meta.abbr.to_string(),
            record: record.as_text(),
            primary_color: meta.primary.to_string(),
            secondary_color: meta.secondary.to_string(),
            score,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MockMatchup {
    pub id: String,
    pub week_id: u32,
    pub kickoff: String,
    pub venue: String,
    pub network: String,
    pub spread: String,
    pub favorite: String,
    pub status: GameStatus,
    pub home_team: MockTeam,
    pub away_team: MockTeam,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekDescriptor {
    pub id: u32,
    pub week_number: u32,
    pub start_date: String,
    pub end_date: String,
    pub lock_date: String,
    pub is_locked: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummary {
    pub correct_picks: u32,
    pub total_games: u32,
    pub rank: u32,
    pub potential_points: u32,
    pub bonus_tokens: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonMock {
    pub weeks: Vec<WeekDescriptor>,
    pub matchups_by_week: BTreeMap<u32, Vec<MockMatchup>>,
    pub weekly_summaries: BTreeMap<u32, WeeklySummary>,
}

/// Running state for one pass over the schedule. Rows must be pushed in file
/// order; each matchup embeds the records as they stood before that game.
pub struct SeasonConverter {
    season: i32,
    week1: NaiveDate,
    records: HashMap<&'static str, TeamRecord>,
    matchups_by_week: BTreeMap<u32, Vec<MockMatchup>>,
    week_dates: BTreeMap<u32, Vec<NaiveDate>>,
}

impl SeasonConverter {
    pub fn new(season: i32) -> Result<Self> {
        let week1 = NaiveDate::from_ymd_opt(season, WEEK1_MONTH, WEEK1_DAY)
            .ok_or_else(|| anyhow!("invalid season {season}"))?;
        let records = team_meta::TEAMS
            .iter()
            .map(|t| (t.key, TeamRecord::default()))
            .collect();
        Ok(Self {
            season,
            week1,
            records,
            matchups_by_week: BTreeMap::new(),
            week_dates: BTreeMap::new(),
        })
    }

    pub fn record(&self, team: &str) -> Option<TeamRecord> {
        self.records.get(team).copied()
    }

    pub fn push_row(&mut self, row: &ScheduleRow) -> Result<()> {
        let week_label = field(&row.week);
        let home = field(&row.home_team);
        let away = field(&row.away_team);
        let (Some(week_label), Some(home), Some(away)) = (week_label, home, away) else {
            debug!("skipping incomplete schedule row");
            return Ok(());
        };

        let (Some(home_meta), Some(away_meta)) = (team_meta::lookup(home), team_meta::lookup(away))
        else {
            return Err(PickemError::UnknownTeam {
                home: home.to_string(),
                away: away.to_string(),
            }
            .into());
        };

        let week = parse_week_label(week_label)?;
        let date = self.game_date(field(&row.date).unwrap_or_default(), week)?;
        self.week_dates.entry(week).or_default().push(date);

        let home_score = parse_score(row.home_score.as_deref());
        let away_score = parse_score(row.away_score.as_deref());
        let home_team = MockTeam::new(home_meta, &self.records[home_meta.key], home_score);
        let away_team = MockTeam::new(away_meta, &self.records[away_meta.key], away_score);

        let week_games = self.matchups_by_week.entry(week).or_default();
        week_games.push(MockMatchup {
            id: format!("{}-w{}-{}", self.season, week, week_games.len() + 1),
            week_id: week,
            kickoff: utc_timestamp(date, KICKOFF_HOUR, 0),
            venue: format!("{} Stadium", home_meta.name),
            network: field(&row.day).unwrap_or("TBD").to_string(),
            spread: "EVEN".to_string(),
            favorite: "even".to_string(),
            status: GameStatus::parse(row.game_status.as_deref()),
            home_team,
            away_team,
        });

        if let (Some(h), Some(a)) = (home_score, away_score) {
            self.record_result(home_meta.key, away_meta.key, h, a);
        }
        Ok(())
    }

    fn record_result(&mut self, home: &str, away: &str, home_score: i32, away_score: i32) {
        let (winner, loser) = match home_score.cmp(&away_score) {
            std::cmp::Ordering::Greater => (home, away),
            std::cmp::Ordering::Less => (away, home),
            std::cmp::Ordering::Equal => return,
        };
        if let Some(r) = self.records.get_mut(winner) {
            r.wins += 1;
        }
        if let Some(r) = self.records.get_mut(loser) {
            r.losses += 1;
        }
    }

    /// `TBD` maps to the week-1 base date plus whole weeks; otherwise `D-Mon` in
    /// the season year.
    fn game_date(&self, token: &str, week: u32) -> Result<NaiveDate> {
        if token.eq_ignore_ascii_case("TBD") {
            let offset = 7 * u64::from(week.saturating_sub(1));
            return self
                .week1
                .checked_add_days(Days::new(offset))
                .ok_or_else(|| PickemError::InvalidDate(token.to_string()).into());
        }
        let raw = format!("{token}-{}", self.season);
        NaiveDate::parse_from_str(&raw, "%d-%b-%Y")
            .map_err(|_| PickemError::InvalidDate(token.to_string()).into())
    }

    pub fn finish(self) -> SeasonMock {
        let mut weeks = Vec::new();
        let mut weekly_summaries = BTreeMap::new();

        for (&week, games) in &self.matchups_by_week {
            let dates = self.week_dates.get(&week).map(Vec::as_slice).unwrap_or_default();
            let (Some(first), Some(last)) = (dates.iter().min(), dates.iter().max()) else {
                continue;
            };
            weeks.push(WeekDescriptor {
                id: week,
                week_number: week,
                start_date: utc_timestamp(*first, 0, 0),
                end_date: utc_timestamp(*last, 23, 59),
                lock_date: utc_timestamp(*first, KICKOFF_HOUR, 0),
                is_locked: false,
            });
            let total_games = games.len() as u32;
            weekly_summaries.insert(
                week,
                WeeklySummary {
                    correct_picks: 0,
                    total_games,
                    rank: 0,
                    potential_points: total_games * POINTS_PER_GAME,
                    bonus_tokens: 0,
                },
            );
        }

        SeasonMock {
            weeks,
            matchups_by_week: self.matchups_by_week,
            weekly_summaries,
        }
    }
}

pub fn convert_reader<R: Read>(reader: R, season: i32) -> Result<SeasonMock> {
    let mut converter = SeasonConverter::new(season)?;
    let mut rdr = csv::Reader::from_reader(reader);
    for (idx, row) in rdr.deserialize::<ScheduleRow>().enumerate() {
        let row = row.with_context(|| format!("invalid csv row {}", idx + 1))?;
        converter
            .push_row(&row)
            .with_context(|| format!("schedule row {}", idx + 1))?;
    }
    Ok(converter.finish())
}

pub fn convert_file(input: &Path, output: &Path, season: i32) -> Result<SeasonMock> {
    if !input.exists() {
        return Err(PickemError::InputNotFound(input.to_path_buf()).into());
    }
    info!(input = %input.display(), season, "converting schedule");
    let file = fs::File::open(input).with_context(|| format!("open {}", input.display()))?;
    let mock = convert_reader(file, season)?;
    write_season_json(output, &mock)?;
    Ok(mock)
}

pub fn write_season_json(path: &Path, mock: &SeasonMock) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let mut json = serde_json::to_string_pretty(mock).context("serialize season mock")?;
    json.push('\n');
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).context("write season mock")?;
    fs::rename(&tmp, path).context("swap season mock")?;
    Ok(())
}

/// Week number from labels like `Week 3`.
pub fn parse_week_label(label: &str) -> Result<u32, PickemError> {
    label
        .split_whitespace()
        .last()
        .and_then(|tok| tok.parse::<u32>().ok())
        .filter(|week| *week > 0)
        .ok_or_else(|| PickemError::InvalidWeekLabel(label.to_string()))
}

/// Blank or non-integer scores become `None`.
pub fn parse_score(value: Option<&str>) -> Option<i32> {
    value.map(str::trim).filter(|s| !s.is_empty())?.parse().ok()
}

fn field(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn utc_timestamp(date: NaiveDate, hour: u32, minute: u32) -> String {
    date.and_hms_opt(hour, minute, 0)
        .map(|dt| dt.and_utc().format("%Y-%m-%dT%H:%M:%SZ").to_string())
        .unwrap_or_default()
}
