use std::path::PathBuf;

use clap::Parser;

use crate::espn::DEFAULT_SEASON;

/// Weekly NFL pick'em agent
#[derive(Parser, Debug, Clone)]
#[command(name = "nfl_pickem", version, about)]
pub struct PickemArgs {
    /// Regular-season week number (1-18)
    #[arg(long, allow_negative_numbers = true)]
    pub week: i64,

    /// Season used for the team statistics endpoint
    #[arg(long, env = "PICKEM_SEASON", default_value_t = DEFAULT_SEASON)]
    pub season: i32,

    /// Print matchups as JSON instead of text
    #[arg(long, env = "PICKEM_JSON")]
    pub json: bool,
}

/// Convert a CSV schedule into the mobile client mock JSON structure
#[derive(Parser, Debug, Clone)]
#[command(name = "season_convert", version, about)]
pub struct ConvertArgs {
    /// CSV generated from the ESPN/NFL scrape
    #[arg(long, default_value = "data/2025_scores.csv")]
    pub input: PathBuf,

    /// Destination JSON file
    #[arg(long, default_value = "mobile/src/data/season2025.json")]
    pub output: PathBuf,

    /// Season year for computing ISO dates
    #[arg(long, default_value_t = DEFAULT_SEASON)]
    pub season: i32,
}
