// Pre-kickoff roster scan: starters carrying an injury designation whose
// game has not started yet. Once the game kicks off the decision window is
// over, so in-progress and finished players are not reported.

use tracing::debug;

use crate::league::{BoxScore, InjuryStatus, Player};

/// A starter worth watching before lineups lock.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitoredPlayer {
    pub team: String,
    pub player: String,
    pub position: String,
    pub status: InjuryStatus,
}

fn needs_monitoring(p: &Player) -> bool {
    p.is_starter() && !p.injury_status.is_healthy() && p.game_played == 0
}

/// Scan every lineup in the week's box scores for started players with a
/// game-time concern. Roster order within each team is preserved.
pub fn players_to_monitor(box_scores: &[BoxScore]) -> Vec<MonitoredPlayer> {
    let mut monitored: Vec<MonitoredPlayer> = Vec::new();

    for score in box_scores {
        for side in score.sides() {
            for p in side.lineup.iter().filter(|p| needs_monitoring(p)) {
                monitored.push(MonitoredPlayer {
                    team: side.team.clone(),
                    player: p.name.clone(),
                    position: p.position.clone(),
                    status: p.injury_status,
                });
            }
        }
    }
    debug!(flagged = monitored.len(), "scanned rosters for injury designations");

    monitored
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
