use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Display metadata for one franchise, keyed in the schedule CSV by nickname.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMeta {
    pub key: &'static str,
    pub id: &'static str,
    pub name: &'static str,
    pub abbr: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
}

const fn meta(
    key: &'static str,
    id: &'static str,
    name: &'static str,
    abbr: &'static str,
    primary: &'static str,
    secondary: &'static str,
) -> TeamMeta {
    TeamMeta {
        key,
        id,
        name,
        abbr,
        primary,
        secondary,
    }
}

pub const TEAMS: &[TeamMeta] = &[
    meta("49ers", "sf", "San Francisco 49ers", "SF", "#b00101", "#ddb945"),
    meta("Bears", "chi", "Chicago Bears", "CHI", "#0b162a", "#c83803"),
    meta("Bengals", "cin", "Cincinnati Bengals", "CIN", "#fb4f14", "#000000"),
    meta("Bills", "buf", "Buffalo Bills", "BUF", "#00338d", "#c60c30"),
    meta("Broncos", "den", "Denver Broncos", "DEN", "#fb4f14", "#0a2343"),
    meta("Browns", "cle", "Cleveland Browns", "CLE", "#311d00", "#ff3c00"),
    meta("Buccaneers", "tb", "Tampa Bay Buccaneers", "TB", "#d50a0a", "#b1babf"),
    meta("Cardinals", "ari", "Arizona Cardinals", "ARI", "#97233f", "#000000"),
    meta("Chargers", "lac", "Los Angeles Chargers", "LAC", "#0073cf", "#ffc20e"),
    meta("Chiefs", "kc", "Kansas City Chiefs", "KC", "#e31837", "#ffb81c"),
    meta("Colts", "ind", "Indianapolis Colts", "IND", "#003da5", "#a2aaad"),
    meta("Commanders", "wsh", "Washington Commanders", "WSH", "#5a1414", "#ffb612"),
    meta("Cowboys", "dal", "Dallas Cowboys", "DAL", "#041e42", "#869397"),
    meta("Dolphins", "mia", "Miami Dolphins", "MIA", "#008e97", "#f58220"),
    meta("Eagles", "phi", "Philadelphia Eagles", "PHI", "#004c54", "#a5acaf"),
    meta("Falcons", "atl", "Atlanta Falcons", "ATL", "#a71930", "#000000"),
    meta("Giants", "nyg", "New York Giants", "NYG", "#0b2265", "#a71930"),
    meta("Jaguars", "jax", "Jacksonville Jaguars", "JAX", "#006778", "#d7a22a"),
    meta("Jets", "nyj", "New York Jets", "NYJ", "#125740", "#000000"),
    meta("Lions", "det", "Detroit Lions", "DET", "#0076b6", "#b0b7bc"),
    meta("Packers", "gb", "Green Bay Packers", "GB", "#203731", "#ffb612"),
    meta("Panthers", "car", "Carolina Panthers", "CAR", "#0085ca", "#101820"),
    meta("Patriots", "ne", "New England Patriots", "NE", "#002244", "#c60c30"),
    meta("Raiders", "lv", "Las Vegas Raiders", "LV", "#000000", "#a5acaf"),
    meta("Rams", "lar", "Los Angeles Rams", "LAR", "#003594", "#ffd100"),
    meta("Ravens", "bal", "Baltimore Ravens", "BAL", "#241773", "#9e7c0c"),
    meta("Saints", "no", "New Orleans Saints", "NO", "#101820", "#d2b887"),
    meta("Seahawks", "sea", "Seattle Seahawks", "SEA", "#002244", "#69be28"),
    meta("Steelers", "pit", "Pittsburgh Steelers", "PIT", "#000000", "#ffb612"),
    meta("Texans", "hou", "Houston Texans", "HOU", "#03202f", "#a71930"),
    meta("Titans", "ten", "Tennessee Titans", "TEN", "#4b92db", "#002244"),
    meta("Vikings", "min", "Minnesota Vikings", "MIN", "#4f2683", "#ffc62f"),
];

static BY_KEY: Lazy<HashMap<&'static str, &'static TeamMeta>> =
    Lazy::new(|| TEAMS.iter().map(|t| (t.key, t)).collect());

pub fn lookup(key: &str) -> Option<&'static TeamMeta> {
    BY_KEY.get(key).copied()
}
