// Optimal lineup allocation: slot classification, starter-slot inference,
// and the greedy allocator that reassigns a roster's realized points into
// the league's slot configuration.

pub mod allocator;
pub mod slots;

pub use allocator::{
    allocate, optimal_lineup, Allocation, AssignedPlayer, OptimalLineup, SlotAssignment,
};
pub use slots::{SlotConfig, SlotKind};

use thiserror::Error;

/// Failures of the lineup core. Both the allocator and the inference routine
/// fail closed: a wrong slot configuration or a wrong optimal score would
/// silently corrupt every downstream ranking, so they signal instead of
/// guessing. Short slots (fewer eligible players than a slot requires) are
/// NOT an error; the allocator partial-fills and moves on.
#[derive(Debug, Error)]
pub enum LineupError {
    /// Optimal total is zero (empty or degenerate roster/configuration), so
    /// the efficiency percentage is undefined. The caller decides the
    /// fallback display.
    #[error("optimal total is zero; percentage of optimal is undefined")]
    UndefinedAllocation,

    /// Neither side of the sampled matchup had any starters, so no slot
    /// configuration can be inferred. An empty configuration would make
    /// every later allocation report a zero optimal score.
    #[error("no starters observed on either side of the matchup; cannot infer slot configuration")]
    AmbiguousSlotInference,

    /// A started player occupies a slot their position is not eligible for
    /// (corrupted provider data). Flagged rather than silently scored.
    #[error("player {player} ({position}) started in ineligible slot {slot}")]
    IneligibleLineup {
        player: String,
        position: String,
        slot: String,
    },
}
