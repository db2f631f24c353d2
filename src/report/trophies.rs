// Weekly superlatives, computed as typed values over one week's box scores.
// Every trophy is a straight reduction over numbers the allocator and the
// provider already produced.

use crate::league::{BoxScore, Player};
use crate::report::projection::projected_total;

// ---------------------------------------------------------------------------
// Trophy types
// ---------------------------------------------------------------------------

/// A team singled out for its weekly total.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamScore {
    pub team: String,
    pub points: f64,
}

/// A decided matchup's winner, loser, and final margin.
#[derive(Debug, Clone, PartialEq)]
pub struct Margin {
    pub winner: String,
    pub loser: String,
    pub margin: f64,
}

/// A team's would-be record had it played every other team this week.
#[derive(Debug, Clone, PartialEq)]
pub struct LuckRecord {
    pub team: String,
    pub wins: usize,
    pub losses: usize,
}

/// How far a team landed from its projected total (positive = over).
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionSwing {
    pub team: String,
    pub delta: f64,
}

/// A single player's performance against projection.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerAward {
    pub team: String,
    pub player: String,
    pub position: String,
    pub points: f64,
    pub projected: f64,
}

/// The week's full trophy case. Fields are `None` when the week has no
/// qualifying candidate (no decided matchups, no player above projection,
/// and so on).
#[derive(Debug, Clone, Default)]
pub struct WeeklyTrophies {
    pub highest: Option<TeamScore>,
    pub lowest: Option<TeamScore>,
    /// Narrowest nonzero winning margin.
    pub close_win: Option<Margin>,
    /// Widest winning margin.
    pub blowout: Option<Margin>,
    /// Lowest-scoring winner: would have lost to most of the league.
    pub lucky: Option<LuckRecord>,
    /// Highest-scoring loser: would have beaten most of the league.
    pub unlucky: Option<LuckRecord>,
    pub overachiever: Option<ProjectionSwing>,
    pub underachiever: Option<ProjectionSwing>,
    /// Biggest positive surprise against projection, D/ST excluded.
    pub mvp: Option<PlayerAward>,
    /// Biggest negative surprise against projection, D/ST excluded.
    pub lvp: Option<PlayerAward>,
    /// D/ST awards are separated out; defense scoring swings would otherwise
    /// dominate the player awards.
    pub best_defense: Option<PlayerAward>,
    pub worst_defense: Option<PlayerAward>,
}

// ---------------------------------------------------------------------------
// Trophy computation
// ---------------------------------------------------------------------------

/// Compute all weekly trophies for one week's box scores.
pub fn weekly_trophies(box_scores: &[BoxScore]) -> WeeklyTrophies {
    let mut trophies = WeeklyTrophies::default();

    score_trophies(box_scores, &mut trophies);
    margin_trophies(box_scores, &mut trophies);
    luck_trophies(box_scores, &mut trophies);
    achiever_trophies(box_scores, &mut trophies);

    let is_defense = |p: &Player| p.slot_position == "D/ST";
    let (mvp, lvp) = scan_awards(box_scores, |p| p.is_starter() && !is_defense(p));
    let (best_d, worst_d) = scan_awards(box_scores, is_defense);
    trophies.mvp = mvp;
    trophies.lvp = lvp;
    trophies.best_defense = best_d;
    trophies.worst_defense = worst_d;

    trophies
}

fn score_trophies(box_scores: &[BoxScore], trophies: &mut WeeklyTrophies) {
    for score in box_scores {
        for side in score.sides() {
            let entry = TeamScore {
                team: side.team.clone(),
                points: side.score,
            };
            if trophies.highest.as_ref().map_or(true, |h| side.score > h.points) {
                trophies.highest = Some(entry.clone());
            }
            if trophies.lowest.as_ref().map_or(true, |l| side.score < l.points) {
                trophies.lowest = Some(entry);
            }
        }
    }
}

fn margin_trophies(box_scores: &[BoxScore], trophies: &mut WeeklyTrophies) {
    for score in box_scores {
        let Some(away) = &score.away else {
            continue;
        };
        let diff = score.home.score - away.score;
        // A tied game has no winner, so it earns no margin trophies.
        if diff == 0.0 {
            continue;
        }
        let (winner, loser) = if diff > 0.0 {
            (&score.home.team, &away.team)
        } else {
            (&away.team, &score.home.team)
        };
        let margin = Margin {
            winner: winner.clone(),
            loser: loser.clone(),
            margin: diff.abs(),
        };

        if trophies
            .close_win
            .as_ref()
            .map_or(true, |c| margin.margin < c.margin)
        {
            trophies.close_win = Some(margin.clone());
        }
        if trophies
            .blowout
            .as_ref()
            .map_or(true, |b| margin.margin > b.margin)
        {
            trophies.blowout = Some(margin);
        }
    }
}

fn luck_trophies(box_scores: &[BoxScore], trophies: &mut WeeklyTrophies) {
    // (team, score, won) for every decided head-to-head; ties go to away.
    let mut results: Vec<(String, f64, bool)> = Vec::new();
    for score in box_scores {
        let Some(away) = &score.away else {
            continue;
        };
        let home_won = score.home.score > away.score;
        results.push((score.home.team.clone(), score.home.score, home_won));
        results.push((away.team.clone(), away.score, !home_won));
    }
    if results.len() < 2 {
        return;
    }
    let opponents = results.len() - 1;

    // Unlucky: the highest-scoring loser. Scanning descending, a team at
    // index i would have gone (opponents - i) and i against the league.
    results.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    trophies.unlucky = results
        .iter()
        .enumerate()
        .find(|(_, (_, _, won))| !won)
        .map(|(i, (team, _, _))| LuckRecord {
            team: team.clone(),
            wins: opponents - i,
            losses: i,
        });

    // Lucky: the lowest-scoring winner, scanning ascending.
    results.reverse();
    trophies.lucky = results
        .iter()
        .enumerate()
        .find(|(_, (_, _, won))| *won)
        .map(|(i, (team, _, _))| LuckRecord {
            team: team.clone(),
            wins: i,
            losses: opponents - i,
        });
}

fn achiever_trophies(box_scores: &[BoxScore], trophies: &mut WeeklyTrophies) {
    let mut best: Option<ProjectionSwing> = None;
    let mut worst: Option<ProjectionSwing> = None;

    for score in box_scores {
        for side in score.sides() {
            let delta = side.score - projected_total(&side.lineup);
            if best.as_ref().map_or(true, |b| delta > b.delta) {
                best = Some(ProjectionSwing {
                    team: side.team.clone(),
                    delta,
                });
            }
            if worst.as_ref().map_or(true, |w| delta < w.delta) {
                worst = Some(ProjectionSwing {
                    team: side.team.clone(),
                    delta,
                });
            }
        }
    }

    // Only a team actually over (or under) projection earns the trophy.
    trophies.overachiever = best.filter(|b| b.delta > 0.0);
    trophies.underachiever = worst.filter(|w| w.delta < 0.0);
}

/// Scan every lineup for the biggest positive and negative surprises against
/// projection among players matching `keep`. Players without a positive
/// projection are skipped (their ratio is undefined). Ranked by relative
/// surprise `(points - projected) / projected`, ties broken by the absolute
/// difference.
fn scan_awards<F>(
    box_scores: &[BoxScore],
    keep: F,
) -> (Option<PlayerAward>, Option<PlayerAward>)
where
    F: Fn(&Player) -> bool,
{
    let mut best: Option<(f64, f64, PlayerAward)> = None;
    let mut worst: Option<(f64, f64, PlayerAward)> = None;

    for score in box_scores {
        for side in score.sides() {
            for p in &side.lineup {
                if !keep(p) || p.projected_points <= 0.0 {
                    continue;
                }
                let diff = p.points - p.projected_points;
                let ratio = diff / p.projected_points;
                let award = PlayerAward {
                    team: side.team.clone(),
                    player: p.name.clone(),
                    position: p.position.clone(),
                    points: p.points,
                    projected: p.projected_points,
                };

                let beats_best = best
                    .as_ref()
                    .map_or(true, |(r, d, _)| ratio > *r || (ratio == *r && diff > *d));
                if beats_best {
                    best = Some((ratio, diff, award.clone()));
                }
                let beats_worst = worst
                    .as_ref()
                    .map_or(true, |(r, d, _)| ratio < *r || (ratio == *r && diff < *d));
                if beats_worst {
                    worst = Some((ratio, diff, award));
                }
            }
        }
    }

    (best.map(|(_, _, a)| a), worst.map(|(_, _, a)| a))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
