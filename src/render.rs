use std::io::Write;

use anyhow::{Context, Result};

use crate::evaluate::Matchup;

pub fn render_matchups<W: Write>(out: &mut W, matchups: &[Matchup], week: u32) -> Result<()> {
    if matchups.is_empty() {
        writeln!(out, "No completed schedule entries found for week {week}.")?;
        return Ok(());
    }

    writeln!(
        out,
        "Week {week} NFL Pick'em Recommendations ({} games)\n",
        matchups.len()
    )?;
    for item in matchups {
        writeln!(out, "{} at {}", item.away_team, item.home_team)?;
        writeln!(out, "Point spread: {}", item.point_spread)?;
        writeln!(
            out,
            "Pick: {} (confidence: {})",
            item.recommended_pick, item.confidence
        )?;
        writeln!(out, "Home summary: {}", item.teams.home)?;
        writeln!(out, "Away summary: {}", item.teams.away)?;
        for note in &item.rationale {
            writeln!(out, " - {note}")?;
        }
        if let Some(result) = item.result.as_ref() {
            writeln!(
                out,
                "Final: {} {} - {} {}{}",
                item.away_team,
                result.away_score,
                item.home_team,
                result.home_score,
                match result.pick_covered {
                    Some(true) => " (pick covered)",
                    Some(false) => " (pick did not cover)",
                    None => "",
                }
            )?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn render_matchups_json<W: Write>(out: &mut W, matchups: &[Matchup]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, matchups).context("serialize matchups")?;
    writeln!(out)?;
    Ok(())
}
