// Slot classification and starter-slot configuration inference.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::league::Player;
use crate::lineup::LineupError;

// ---------------------------------------------------------------------------
// Slot classification
// ---------------------------------------------------------------------------

/// Positions eligible for the "OP" (offensive utility) slot.
pub const OFFENSIVE_UTILITY_ELIGIBLE: &[&str] = &["RB", "WR", "TE", "QB"];
/// Positions eligible for the "DP" (defensive utility / IDP) slot.
pub const DEFENSIVE_UTILITY_ELIGIBLE: &[&str] = &["DT", "DE", "LB", "CB", "S"];

/// What a slot name means for eligibility.
///
/// Flex slots encode their eligible positions in the name itself, joined by
/// `/` (e.g. "RB/WR/TE"). "D/ST" also contains a `/` but is a singular
/// position in its own right, never a flex. "OP" and "DP" carry fixed
/// eligible-position sets independent of naming convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotKind {
    /// Non-scoring bench placement.
    Bench,
    /// Non-scoring injured-reserve placement.
    InjuredReserve,
    /// Only players whose position equals the slot name are eligible.
    Singular,
    /// Composite flex: eligible positions are the name's components.
    Flex(Vec<String>),
    /// "OP": any of RB/WR/TE/QB.
    OffensiveUtility,
    /// "DP": any of DT/DE/LB/CB/S.
    DefensiveUtility,
}

impl SlotKind {
    pub fn classify(name: &str) -> SlotKind {
        match name {
            crate::league::BENCH => SlotKind::Bench,
            crate::league::INJURED_RESERVE => SlotKind::InjuredReserve,
            "OP" => SlotKind::OffensiveUtility,
            "DP" => SlotKind::DefensiveUtility,
            _ if name.contains('/') && !name.contains("D/ST") => SlotKind::Flex(
                name.split('/').map(str::to_string).collect(),
            ),
            _ => SlotKind::Singular,
        }
    }
}

/// Whether a player whose primary position is `position` may legally occupy
/// the slot named `slot`. Bench and IR accept anyone; they are placements,
/// not positions.
pub fn slot_allows(slot: &str, position: &str) -> bool {
    match SlotKind::classify(slot) {
        SlotKind::Bench | SlotKind::InjuredReserve => true,
        SlotKind::Singular => slot == position,
        SlotKind::Flex(positions) => positions.iter().any(|p| p == position),
        SlotKind::OffensiveUtility => OFFENSIVE_UTILITY_ELIGIBLE.contains(&position),
        SlotKind::DefensiveUtility => DEFENSIVE_UTILITY_ELIGIBLE.contains(&position),
    }
}

// ---------------------------------------------------------------------------
// Slot configuration
// ---------------------------------------------------------------------------

/// The league's starting-lineup schema: how many starters each slot requires.
///
/// Represented as an explicit ordered sequence of `(name, count)` pairs —
/// the iteration order is observable behavior (flex slots are resolved in
/// configuration order), so an unordered map would make allocations
/// irreproducible. Immutable once published for a week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotConfig {
    slots: Vec<(String, usize)>,
}

impl SlotConfig {
    pub fn new(slots: Vec<(String, usize)>) -> Self {
        SlotConfig { slots }
    }

    /// Iterate slots in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.slots.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// Required starter count for a slot name (0 if absent).
    pub fn count(&self, name: &str) -> usize {
        self.slots
            .iter()
            .find(|(n, _)| n == name)
            .map_or(0, |(_, c)| *c)
    }

    /// Total number of starters across all slots.
    pub fn total_starters(&self) -> usize {
        self.slots.iter().map(|(_, c)| c).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    // -----------------------------------------------------------------------
    // Inference
    // -----------------------------------------------------------------------

    /// Derive the slot configuration from one matchup's pair of lineups.
    ///
    /// Starters (non-bench, non-IR players) are tallied per `slot_position`
    /// on each side, and the side with the larger total wins: a single
    /// observed lineup can under-report the true schema when an empty slot is
    /// simply absent from the data, so preferring the fuller side reduces the
    /// chance of under-counting. A tie returns the home tally (both sides
    /// are structurally identical in a well-formed league).
    ///
    /// Slot order in the result is first-observed order within the winning
    /// lineup. If the league changes its roster format intra-season, callers
    /// must re-run the inference per week rather than caching indefinitely.
    pub fn infer(home: &[Player], away: &[Player]) -> Result<SlotConfig, LineupError> {
        let (home_slots, home_total) = tally_starters(home);
        let (away_slots, away_total) = tally_starters(away);

        if home_total == 0 && away_total == 0 {
            return Err(LineupError::AmbiguousSlotInference);
        }

        let (side, slots, total) = if away_total > home_total {
            ("away", away_slots, away_total)
        } else {
            ("home", home_slots, home_total)
        };
        debug!(side, starters = total, slots = slots.len(), "inferred slot configuration");

        Ok(SlotConfig { slots })
    }
}

/// Count starters per slot name, preserving first-observed order. Returns
/// the per-slot tally and the total starter count.
fn tally_starters(lineup: &[Player]) -> (Vec<(String, usize)>, usize) {
    let mut slots: Vec<(String, usize)> = Vec::new();
    let mut total = 0;

    for player in lineup.iter().filter(|p| p.is_starter()) {
        total += 1;
        match slots.iter_mut().find(|(name, _)| *name == player.slot_position) {
            Some((_, count)) => *count += 1,
            None => slots.push((player.slot_position.clone(), 1)),
        }
    }

    (slots, total)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
