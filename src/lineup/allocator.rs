// Optimal lineup allocation.
//
// Given a scored roster and a slot configuration, partition players into
// slots to maximize the total of their realized points, then compare the
// result against what the manager actually started. The flex resolution is
// deliberately greedy: singular slots first, then composite flexes in
// configuration order, then OP, then DP. That heuristic can fall short of a
// true maximum-weight matching when flex slots share eligible positions,
// but every team is scored by the same procedure, so the published
// efficiency ranking stays self-consistent.

use std::collections::HashMap;

use tracing::trace;

use crate::league::Player;
use crate::lineup::slots::{
    slot_allows, SlotConfig, SlotKind, DEFENSIVE_UTILITY_ELIGIBLE, OFFENSIVE_UTILITY_ELIGIBLE,
};
use crate::lineup::LineupError;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// A player chosen for a slot in the optimal allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignedPlayer {
    pub name: String,
    pub points: f64,
}

/// One slot's share of the optimal allocation. May hold fewer players than
/// the slot requires when the eligible pool runs short (partial fill).
#[derive(Debug, Clone)]
pub struct SlotAssignment {
    pub slot: String,
    pub players: Vec<AssignedPlayer>,
}

/// The full optimal partition of a roster into slots.
#[derive(Debug, Clone)]
pub struct OptimalLineup {
    pub slots: Vec<SlotAssignment>,
}

impl OptimalLineup {
    /// Sum of the scores of all assigned players across all slots.
    pub fn total(&self) -> f64 {
        self.slots
            .iter()
            .flat_map(|s| s.players.iter())
            .map(|p| p.points)
            .sum()
    }
}

/// Comparison of the actual lineup against the optimal one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Allocation {
    pub optimal_total: f64,
    pub actual_total: f64,
    /// Points left unrealized: `optimal_total - actual_total`. Negative when
    /// the started lineup beats the greedy optimum (overlapping flex slots).
    pub difference: f64,
    /// `actual_total / optimal_total * 100`, the manager-efficiency metric.
    pub percentage: f64,
}

// ---------------------------------------------------------------------------
// Working pool
// ---------------------------------------------------------------------------

/// Remaining (not-yet-assigned) players, bucketed by primary position.
///
/// An explicit working value threaded through the allocation passes and
/// discarded at the end of the call; lookups on absent positions yield a
/// typed empty result rather than an error.
#[derive(Debug)]
struct PositionPool {
    buckets: HashMap<String, Vec<AssignedPlayer>>,
}

impl PositionPool {
    fn from_roster(roster: &[Player]) -> Self {
        let mut buckets: HashMap<String, Vec<AssignedPlayer>> = HashMap::new();
        for player in roster {
            buckets
                .entry(player.position.clone())
                .or_default()
                .push(AssignedPlayer {
                    name: player.name.clone(),
                    points: player.points,
                });
        }
        PositionPool { buckets }
    }

    /// Take up to `count` top-scoring players whose position exactly matches
    /// `position`. Returns fewer when the bucket runs short.
    fn take_singular(&mut self, position: &str, count: usize) -> Vec<AssignedPlayer> {
        let Some(bucket) = self.buckets.get_mut(position) else {
            return Vec::new();
        };
        sort_descending(bucket);
        let take = count.min(bucket.len());
        bucket.drain(..take).collect()
    }

    /// Take up to `count` top-scoring players across all of the `eligible`
    /// position buckets. Chosen players are removed from the whole pool, not
    /// only the bucket they were drawn from.
    fn take_flex(&mut self, eligible: &[&str], count: usize) -> Vec<AssignedPlayer> {
        let mut candidates: Vec<AssignedPlayer> = Vec::new();
        for &position in eligible {
            if let Some(bucket) = self.buckets.get(position) {
                candidates.extend(bucket.iter().cloned());
            }
        }
        sort_descending(&mut candidates);
        candidates.truncate(count);

        for chosen in &candidates {
            for bucket in self.buckets.values_mut() {
                bucket.retain(|p| p.name != chosen.name);
            }
        }
        candidates
    }
}

/// Stable descending sort by points; ties keep roster order.
fn sort_descending(players: &mut [AssignedPlayer]) {
    players.sort_by(|a, b| {
        b.points
            .partial_cmp(&a.points)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

// ---------------------------------------------------------------------------
// Allocation passes
// ---------------------------------------------------------------------------

/// Compute the highest-scoring legal partition of `roster` into `config`'s
/// slots under the documented greedy order.
///
/// Slots short on eligible players are partial-filled without error; the
/// optimal total simply reflects the players that could be assigned.
pub fn optimal_lineup(roster: &[Player], config: &SlotConfig) -> OptimalLineup {
    let mut pool = PositionPool::from_roster(roster);
    let mut slots: Vec<SlotAssignment> = Vec::new();

    // Pass 1: singular slots, in configuration order. Exact-position matches
    // must come out of the pool before any flex resolution sees them.
    for (name, count) in config.iter() {
        if SlotKind::classify(name) == SlotKind::Singular {
            let players = pool.take_singular(name, count);
            trace!(slot = name, assigned = players.len(), required = count, "filled singular slot");
            slots.push(SlotAssignment {
                slot: name.to_string(),
                players,
            });
        }
    }

    // Pass 2: composite flex slots, in configuration order.
    for (name, count) in config.iter() {
        if let SlotKind::Flex(positions) = SlotKind::classify(name) {
            let eligible: Vec<&str> = positions.iter().map(String::as_str).collect();
            let players = pool.take_flex(&eligible, count);
            trace!(slot = name, assigned = players.len(), required = count, "filled flex slot");
            slots.push(SlotAssignment {
                slot: name.to_string(),
                players,
            });
        }
    }

    // Pass 3: the named special flexes, OP then DP, after everything else.
    for (slot_name, eligible) in [
        ("OP", OFFENSIVE_UTILITY_ELIGIBLE),
        ("DP", DEFENSIVE_UTILITY_ELIGIBLE),
    ] {
        let count = config.count(slot_name);
        if count > 0 {
            let players = pool.take_flex(eligible, count);
            trace!(slot = slot_name, assigned = players.len(), required = count, "filled special flex slot");
            slots.push(SlotAssignment {
                slot: slot_name.to_string(),
                players,
            });
        }
    }

    OptimalLineup { slots }
}

/// Allocate `roster` into `config` and compare against the actual lineup.
///
/// The optimal computation uses realized `points` throughout — it answers
/// "how well could the actual results have been arranged", not how well they
/// could have been predicted.
///
/// Every started player must occupy a slot their position is eligible for;
/// a violation is corrupted provider data and fails the allocation. A legal
/// lineup may still out-score the greedy optimal when composite flex slots
/// overlap in eligible positions; that yields a percentage above 100, not an
/// error.
pub fn allocate(roster: &[Player], config: &SlotConfig) -> Result<Allocation, LineupError> {
    for p in roster.iter().filter(|p| p.is_starter()) {
        if !slot_allows(&p.slot_position, &p.position) {
            return Err(LineupError::IneligibleLineup {
                player: p.name.clone(),
                position: p.position.clone(),
                slot: p.slot_position.clone(),
            });
        }
    }

    let actual_total: f64 = roster
        .iter()
        .filter(|p| p.is_starter())
        .map(|p| p.points)
        .sum();

    let lineup = optimal_lineup(roster, config);
    let optimal_total = lineup.total();

    if optimal_total == 0.0 {
        return Err(LineupError::UndefinedAllocation);
    }

    Ok(Allocation {
        optimal_total,
        actual_total,
        difference: optimal_total - actual_total,
        percentage: actual_total / optimal_total * 100.0,
    })
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
