// Team/week efficiency ranking: every team's allocation for the week,
// ordered by percentage of optimal.

use tracing::debug;

use crate::league::BoxScore;
use crate::lineup::{allocate, Allocation, LineupError, SlotConfig};

/// One team's lineup efficiency for the week.
#[derive(Debug, Clone)]
pub struct TeamEfficiency {
    pub team: String,
    pub allocation: Allocation,
}

/// All teams' allocations for a week, ranked descending by percentage of
/// optimal.
#[derive(Debug, Clone)]
pub struct EfficiencyReport {
    pub rankings: Vec<TeamEfficiency>,
}

impl EfficiencyReport {
    /// The leading group of managers scoring above `threshold` percent of
    /// optimal, grouped as a joint best. When nobody clears the threshold,
    /// the single top-ranked manager stands alone.
    pub fn best_managers(&self, threshold: f64) -> &[TeamEfficiency] {
        let above = self
            .rankings
            .iter()
            .take_while(|t| t.allocation.percentage > threshold)
            .count();
        let group = above.max(1).min(self.rankings.len());
        &self.rankings[..group]
    }

    /// The single lowest-ranked manager; `difference` on their allocation is
    /// the points left on the bench.
    pub fn worst_manager(&self) -> Option<&TeamEfficiency> {
        self.rankings.last()
    }
}

/// Run the allocator for every team side in the week's box scores and rank
/// the results. Any single degenerate lineup (zero optimal, eligibility
/// violation) fails the whole report: a partial ranking would silently
/// misname the best and worst managers.
pub fn efficiency_report(
    box_scores: &[BoxScore],
    config: &SlotConfig,
) -> Result<EfficiencyReport, LineupError> {
    let mut rankings: Vec<TeamEfficiency> = Vec::new();

    for score in box_scores {
        for side in score.sides() {
            let allocation = allocate(&side.lineup, config)?;
            rankings.push(TeamEfficiency {
                team: side.team.clone(),
                allocation,
            });
        }
    }

    rankings.sort_by(|a, b| {
        b.allocation
            .percentage
            .partial_cmp(&a.allocation.percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    debug!(teams = rankings.len(), "ranked weekly lineup efficiency");

    Ok(EfficiencyReport { rankings })
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
