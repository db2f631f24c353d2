// Season-long superlatives, reduced over every week's box scores. The same
// ratio-with-absolute-tiebreak ranking as the weekly player awards, but each
// record remembers the week it happened in.

use crate::league::{BoxScore, Player};

/// A single-week team total that stood out across the whole season.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonTeamScore {
    pub team: String,
    pub week: usize,
    pub points: f64,
}

/// The season's most extreme single-game performance against projection.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonPlayerAward {
    pub team: String,
    pub week: usize,
    pub player: String,
    pub position: String,
    pub points: f64,
    pub projected: f64,
}

/// The season's trophy case. Fields are `None` for an empty season or when
/// no player clears the award gates.
#[derive(Debug, Clone, Default)]
pub struct SeasonTrophies {
    /// Highest single-week team score of the season.
    pub highest: Option<SeasonTeamScore>,
    /// Lowest single-week team score of the season.
    pub lowest: Option<SeasonTeamScore>,
    /// Best single-game surprise against projection. D/ST excluded, and the
    /// projection must be meaningful (above 0.1) so a near-zero denominator
    /// cannot mint an MVP.
    pub mvp: Option<SeasonPlayerAward>,
    /// Worst single-game surprise against projection. D/ST excluded, and
    /// kickers too: a missed kicker week is noise, not mismanagement.
    pub lvp: Option<SeasonPlayerAward>,
}

/// Compute the season trophies over every played week, in order. `weeks[0]`
/// is week 1. Earlier weeks win ties.
pub fn season_trophies(weeks: &[Vec<BoxScore>]) -> SeasonTrophies {
    let mut trophies = SeasonTrophies::default();
    let mut mvp_rank: Option<(f64, f64)> = None;
    let mut lvp_rank: Option<(f64, f64)> = None;

    for (i, box_scores) in weeks.iter().enumerate() {
        let week = i + 1;
        for score in box_scores {
            for side in score.sides() {
                if trophies
                    .highest
                    .as_ref()
                    .map_or(true, |h| side.score > h.points)
                {
                    trophies.highest = Some(SeasonTeamScore {
                        team: side.team.clone(),
                        week,
                        points: side.score,
                    });
                }
                if trophies
                    .lowest
                    .as_ref()
                    .map_or(true, |l| side.score < l.points)
                {
                    trophies.lowest = Some(SeasonTeamScore {
                        team: side.team.clone(),
                        week,
                        points: side.score,
                    });
                }

                for p in side.lineup.iter().filter(|p| award_eligible(p)) {
                    let diff = p.points - p.projected_points;
                    let ratio = diff / p.projected_points;
                    let award = || SeasonPlayerAward {
                        team: side.team.clone(),
                        week,
                        player: p.name.clone(),
                        position: p.position.clone(),
                        points: p.points,
                        projected: p.projected_points,
                    };

                    let beats_mvp = mvp_rank
                        .map_or(true, |(r, d)| ratio > r || (ratio == r && diff > d));
                    if beats_mvp && p.projected_points > 0.1 {
                        mvp_rank = Some((ratio, diff));
                        trophies.mvp = Some(award());
                    }
                    let beats_lvp = lvp_rank
                        .map_or(true, |(r, d)| ratio < r || (ratio == r && diff < d));
                    if beats_lvp && p.position != "K" {
                        lvp_rank = Some((ratio, diff));
                        trophies.lvp = Some(award());
                    }
                }
            }
        }
    }

    trophies
}

fn award_eligible(p: &Player) -> bool {
    p.is_starter() && p.position != "D/ST" && p.projected_points > 0.0
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
