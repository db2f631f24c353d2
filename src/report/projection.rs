// In-progress projections: what a lineup is on pace to score while games
// are still being played.

use crate::league::{BoxScore, Player};

/// Projected total for a lineup with games possibly still in progress.
///
/// For each starter, realized `points` are authoritative once the player's
/// game has started (`game_played > 0`) or any points are already on the
/// board; otherwise the pre-game projection stands in.
pub fn projected_total(lineup: &[Player]) -> f64 {
    lineup
        .iter()
        .filter(|p| p.is_starter())
        .map(|p| {
            if p.points != 0.0 || p.game_played > 0 {
                p.points
            } else {
                p.projected_points
            }
        })
        .sum()
}

/// Whether every starter in the lineup has finished their game.
pub fn all_played(lineup: &[Player]) -> bool {
    lineup
        .iter()
        .filter(|p| p.is_starter())
        .all(|p| p.game_played >= 100)
}

/// A matchup whose projected totals are within the close-score margin while
/// the trailing side can still play.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedMatchup {
    pub home_team: String,
    pub away_team: String,
    pub home_projected: f64,
    pub away_projected: f64,
}

/// Find matchups projected within `margin` points where the outcome is still
/// live: the side that trails (or ties) must have starters left to play.
pub fn close_matchups(box_scores: &[BoxScore], margin: f64) -> Vec<ProjectedMatchup> {
    let mut close: Vec<ProjectedMatchup> = Vec::new();

    for score in box_scores {
        let Some(away) = &score.away else {
            continue;
        };
        let home_projected = projected_total(&score.home.lineup);
        let away_projected = projected_total(&away.lineup);
        let diff = away_projected - home_projected;

        let away_can_catch_up = -margin < diff && diff <= 0.0 && !all_played(&away.lineup);
        let home_can_catch_up = 0.0 <= diff && diff < margin && !all_played(&score.home.lineup);

        if away_can_catch_up || home_can_catch_up {
            close.push(ProjectedMatchup {
                home_team: score.home.team.clone(),
                away_team: away.team.clone(),
                home_projected,
                away_projected,
            });
        }
    }

    close
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::{TeamSide, BENCH};

    fn player(name: &str, points: f64, projected: f64, game_played: u8) -> Player {
        Player {
            name: name.into(),
            position: "WR".into(),
            slot_position: "WR".into(),
            points,
            projected_points: projected,
            game_played,
            injury_status: Default::default(),
        }
    }

    #[test]
    fn projection_uses_points_once_game_starts() {
        let lineup = vec![
            player("Done", 12.0, 9.0, 100),
            player("Mid-game", 3.0, 10.0, 40),
            player("Not started", 0.0, 8.0, 0),
        ];
        // 12 + 3 + 8
        assert!((projected_total(&lineup) - 23.0).abs() < 1e-9);
    }

    #[test]
    fn nonzero_points_are_authoritative_even_before_kickoff() {
        // Stat corrections can land before `game_played` ticks; realized
        // points win whenever they are nonzero.
        let lineup = vec![player("Corrected", 2.0, 15.0, 0)];
        assert!((projected_total(&lineup) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn projection_skips_bench() {
        let mut benched = player("Benched", 50.0, 50.0, 100);
        benched.slot_position = BENCH.into();
        let lineup = vec![player("Starter", 10.0, 10.0, 100), benched];
        assert!((projected_total(&lineup) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn all_played_ignores_bench() {
        let mut benched = player("Benched", 0.0, 10.0, 0);
        benched.slot_position = BENCH.into();
        let lineup = vec![player("Starter", 10.0, 10.0, 100), benched];
        assert!(all_played(&lineup));
    }

    #[test]
    fn all_played_false_with_game_in_progress() {
        let lineup = vec![player("Mid-game", 4.0, 10.0, 55)];
        assert!(!all_played(&lineup));
    }

    fn side(team: &str, points: f64, game_played: u8) -> TeamSide {
        TeamSide {
            team: team.into(),
            score: points,
            lineup: vec![player("Only", points, points, game_played)],
        }
    }

    #[test]
    fn close_matchup_detected_when_trailer_can_play() {
        let scores = vec![BoxScore {
            home: side("Home", 100.0, 100),
            away: Some(side("Away", 95.0, 50)),
        }];

        let close = close_matchups(&scores, 11.0);
        assert_eq!(close.len(), 1);
        assert_eq!(close[0].away_team, "Away");
    }

    #[test]
    fn decided_matchup_is_not_close() {
        // Trailing side has finished; nothing can change.
        let scores = vec![BoxScore {
            home: side("Home", 100.0, 100),
            away: Some(side("Away", 95.0, 100)),
        }];

        assert!(close_matchups(&scores, 11.0).is_empty());
    }

    #[test]
    fn wide_margin_is_not_close() {
        let scores = vec![BoxScore {
            home: side("Home", 100.0, 100),
            away: Some(side("Away", 70.0, 0)),
        }];

        assert!(close_matchups(&scores, 11.0).is_empty());
    }

    #[test]
    fn bye_week_is_skipped() {
        let scores = vec![BoxScore {
            home: side("Solo", 100.0, 0),
            away: None,
        }];

        assert!(close_matchups(&scores, 11.0).is_empty());
    }
}
