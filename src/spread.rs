use crate::espn::{Competition, Side};

pub const NO_SPREAD: &str = "N/A";

/// Spread text from the first odds entry: its `spread`, else its `details`.
pub fn parse_point_spread(competition: &Competition) -> String {
    let Some(odds) = competition.odds.first() else {
        return NO_SPREAD.to_string();
    };
    if let Some(spread) = odds.spread.as_ref() {
        return spread.clone();
    }
    if let Some(details) = odds.details.as_ref() {
        return details.clone();
    }
    NO_SPREAD.to_string()
}

/// Numeric spread from free text such as `-3.5`, `+7` or `KC -3½`.
pub fn point_spread_value(spread: &str) -> Option<f64> {
    let trimmed = spread.trim();
    if trimmed.is_empty() || trimmed == NO_SPREAD {
        return None;
    }
    if let Some(v) = parse_finite(trimmed) {
        return Some(v);
    }

    let normalized = trimmed
        .replace("Â½", ".5")
        .replace('½', ".5")
        .replace('+', " +")
        .replace('-', " -");
    normalized.split_whitespace().find_map(parse_finite)
}

/// The line as seen from the home side, for grading finished games.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HomeLine {
    /// No usable number; games grade straight up.
    Even,
    Points(f64),
    /// `details` names a favorite neither competitor matches.
    Unresolved,
}

/// A numeric `spread` is already quoted from the home side. `details` such as
/// `GB -3` is quoted from the favorite, so the leading token is matched against
/// the competitors' abbreviations and flipped when it names the away team.
pub fn home_line(competition: &Competition) -> HomeLine {
    let Some(odds) = competition.odds.first() else {
        return HomeLine::Even;
    };
    if let Some(v) = odds.spread.as_deref().and_then(point_spread_value) {
        return HomeLine::Points(v);
    }
    let Some(details) = odds.details.as_deref() else {
        return HomeLine::Even;
    };
    let Some(value) = point_spread_value(details) else {
        return HomeLine::Even;
    };

    let favorite = details
        .split(|c: char| c.is_whitespace() || c == '+' || c == '-')
        .find(|tok| !tok.is_empty())
        .filter(|tok| parse_finite(&tok.replace('½', ".5")).is_none());
    let Some(favorite) = favorite else {
        return HomeLine::Unresolved;
    };
    let names = |side: Side| {
        competition
            .competitor(side)
            .and_then(|c| c.abbreviation.as_deref())
            .is_some_and(|abbr| abbr.eq_ignore_ascii_case(favorite))
    };
    if names(Side::Home) {
        HomeLine::Points(value)
    } else if names(Side::Away) {
        HomeLine::Points(-value)
    } else {
        HomeLine::Unresolved
    }
}

fn parse_finite(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::espn::{Competitor, OddsEntry};

    fn competitor(abbr: &str, side: Side) -> Competitor {
        Competitor {
            team_id: None,
            abbreviation: Some(abbr.to_string()),
            side: Some(side),
            winner: false,
            score: None,
        }
    }

    fn lined(spread: Option<&str>, details: Option<&str>) -> Competition {
        Competition {
            competitors: vec![competitor("DET", Side::Home), competitor("GB", Side::Away)],
            odds: vec![OddsEntry {
                spread: spread.map(str::to_string),
                details: details.map(str::to_string),
            }],
        }
    }

    #[test]
    fn away_favorite_in_details_flips_to_home_side() {
        assert_eq!(home_line(&lined(None, Some("GB -3"))), HomeLine::Points(3.0));
        assert_eq!(home_line(&lined(None, Some("det -6½"))), HomeLine::Points(-6.5));
    }

    #[test]
    fn numeric_spread_is_home_side() {
        assert_eq!(home_line(&lined(Some("2.5"), Some("GB -2.5"))), HomeLine::Points(2.5));
    }

    #[test]
    fn unknown_favorite_is_unresolved() {
        assert_eq!(home_line(&lined(None, Some("KC -3"))), HomeLine::Unresolved);
        assert_eq!(home_line(&lined(None, Some("-3"))), HomeLine::Unresolved);
        assert_eq!(home_line(&lined(None, Some("PK"))), HomeLine::Even);
        assert_eq!(home_line(&comp(Vec::new())), HomeLine::Even);
    }

    fn comp(odds: Vec<OddsEntry>) -> Competition {
        Competition {
            competitors: Vec::new(),
            odds,
        }
    }

    #[test]
    fn numeric_forms() {
        assert_eq!(point_spread_value("-3.5"), Some(-3.5));
        assert_eq!(point_spread_value("+7"), Some(7.0));
        assert_eq!(point_spread_value(" 0 "), Some(0.0));
    }

    #[test]
    fn unparsable_is_none() {
        assert_eq!(point_spread_value("PK"), None);
        assert_eq!(point_spread_value("N/A"), None);
        assert_eq!(point_spread_value(""), None);
        assert_eq!(point_spread_value("EVEN"), None);
        assert_eq!(point_spread_value("inf"), None);
    }

    #[test]
    fn details_text_and_half_points() {
        assert_eq!(point_spread_value("KC -3½"), Some(-3.5));
        assert_eq!(point_spread_value("BUF -6Â½"), Some(-6.5));
        assert_eq!(point_spread_value("DAL+2.5"), Some(2.5));
    }

    #[test]
    fn spread_preferred_over_details() {
        let c = comp(vec![OddsEntry {
            spread: Some("-2.5".into()),
            details: Some("PHI -2.5".into()),
        }]);
        assert_eq!(parse_point_spread(&c), "-2.5");

        let c = comp(vec![OddsEntry {
            spread: None,
            details: Some("PHI -2.5".into()),
        }]);
        assert_eq!(parse_point_spread(&c), "PHI -2.5");

        let c = comp(vec![OddsEntry {
            spread: None,
            details: None,
        }]);
        assert_eq!(parse_point_spread(&c), NO_SPREAD);
        assert_eq!(parse_point_spread(&comp(Vec::new())), NO_SPREAD);
    }
}
