use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use nfl_pickem::config::PickemArgs;
use nfl_pickem::error::validate_week;
use nfl_pickem::espn::Endpoints;
use nfl_pickem::http_client::HttpJsonSource;
use nfl_pickem::matchups::gather_week_matchups;
use nfl_pickem::profile::build_team_profiles;
use nfl_pickem::render::{render_matchups, render_matchups_json};

fn main() -> Result<()> {
    nfl_pickem::logging::init();

    let args = PickemArgs::parse();
    let week = validate_week(args.week)?;
    info!(week, season = args.season, "starting pick'em run");

    let endpoints = Endpoints::new(args.season);
    let profiles = build_team_profiles(&HttpJsonSource, &endpoints)?;
    let matchups = gather_week_matchups(&profiles, week);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        render_matchups_json(&mut out, &matchups)?;
    } else {
        render_matchups(&mut out, &matchups, week)?;
    }
    out.flush()?;
    Ok(())
}
