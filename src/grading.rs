use serde::Serialize;

use crate::espn::Side;
use crate::spread::HomeLine;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub home_score: f64,
    pub away_score: f64,
    /// `None` when the line's favorite could not be tied to either side.
    pub pick_covered: Option<bool>,
}

/// Whether a pick beat the spread. `spread` is quoted from the home side
/// (negative when home is favored); no line grades straight up. A push covers
/// for neither side.
pub fn pick_covers(pick: Side, home_score: f64, away_score: f64, spread: Option<f64>) -> bool {
    let against_spread = (home_score - away_score) + spread.unwrap_or(0.0);
    match pick {
        Side::Home => against_spread > 0.0,
        Side::Away => against_spread < 0.0,
    }
}

pub fn grade(pick: Side, home_score: f64, away_score: f64, line: HomeLine) -> GameResult {
    let pick_covered = match line {
        HomeLine::Even => Some(pick_covers(pick, home_score, away_score, None)),
        HomeLine::Points(spread) => Some(pick_covers(pick, home_score, away_score, Some(spread))),
        HomeLine::Unresolved => None,
    };
    GameResult {
        home_score,
        away_score,
        pick_covered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favored_home_must_win_by_more_than_spread() {
        assert!(pick_covers(Side::Home, 24.0, 17.0, Some(-3.0)));
        assert!(!pick_covers(Side::Home, 20.0, 17.0, Some(-3.0)));
        assert!(!pick_covers(Side::Away, 20.0, 17.0, Some(-3.0)));
    }

    #[test]
    fn underdog_covers_by_losing_small() {
        assert!(pick_covers(Side::Away, 20.0, 17.0, Some(-3.5)));
        assert!(pick_covers(Side::Home, 17.0, 20.0, Some(3.5)));
        assert!(!pick_covers(Side::Home, 10.0, 20.0, Some(3.5)));
    }

    #[test]
    fn missing_line_grades_straight_up() {
        assert!(pick_covers(Side::Away, 10.0, 13.0, None));
        assert!(!pick_covers(Side::Home, 13.0, 13.0, None));
        assert!(!pick_covers(Side::Away, 13.0, 13.0, None));
        assert_eq!(grade(Side::Away, 10.0, 13.0, HomeLine::Even).pick_covered, Some(true));
    }

    #[test]
    fn unresolved_line_is_left_ungraded() {
        let r = grade(Side::Home, 30.0, 3.0, HomeLine::Unresolved);
        assert_eq!(r.pick_covered, None);
        assert_eq!(r.home_score, 30.0);
    }
}
