// Provider-facing data model: rosters, matchup sides, and box scores.
//
// Everything in this module is constructed fresh per scoring request from an
// external data provider's payload and never mutated afterwards. Retrieval
// itself (HTTP, auth, scheduling) lives outside this crate; we only define
// the shapes and a JSON ingestion helper.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Slot name marking a benched (non-scoring) player.
pub const BENCH: &str = "BE";
/// Slot name marking an injured-reserve (non-scoring) player.
pub const INJURED_RESERVE: &str = "IR";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LeagueError {
    #[error("failed to parse box score payload: {source}")]
    ParseError {
        #[from]
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// Provider-reported injury designation. D/ST units report `Normal` instead
/// of `Active`; designations the provider adds later fold into `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InjuryStatus {
    #[default]
    Active,
    Normal,
    Questionable,
    Doubtful,
    Out,
    InjuryReserve,
    #[serde(other)]
    Unknown,
}

impl InjuryStatus {
    /// Whether the designation carries no game-time concern.
    pub fn is_healthy(&self) -> bool {
        matches!(self, InjuryStatus::Active | InjuryStatus::Normal)
    }
}

/// One roster entry for one team for one week.
///
/// `name` is unique within a single lineup (not league-wide). `position` is
/// the player's primary eligibility tag ("RB", "WR", "D/ST", ...), while
/// `slot_position` is the slot the player actually occupied that week — one
/// of the starting-slot names, or the [`BENCH`]/[`INJURED_RESERVE`]
/// sentinels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub position: String,
    pub slot_position: String,
    /// Realized score for the week.
    pub points: f64,
    /// Pre-game projected score.
    #[serde(default)]
    pub projected_points: f64,
    /// How much of the player's game has elapsed, 0 (not started) to 100
    /// (complete). Decides whether `points` or `projected_points` is
    /// authoritative for in-progress projections.
    #[serde(default)]
    pub game_played: u8,
    #[serde(default)]
    pub injury_status: InjuryStatus,
}

impl Player {
    /// Whether this player occupies a scoring slot (not bench, not IR).
    pub fn is_starter(&self) -> bool {
        self.slot_position != BENCH && self.slot_position != INJURED_RESERVE
    }
}

// ---------------------------------------------------------------------------
// Matchups
// ---------------------------------------------------------------------------

/// One team's side of a matchup: identity, weekly total, and full lineup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSide {
    pub team: String,
    pub score: f64,
    pub lineup: Vec<Player>,
}

/// A single matchup's box score. Bye-week pseudo-matchups carry only a home
/// side (`away` is `None`); report routines skip the missing side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxScore {
    pub home: TeamSide,
    #[serde(default)]
    pub away: Option<TeamSide>,
}

impl BoxScore {
    /// Iterate over the sides that are actually present.
    pub fn sides(&self) -> impl Iterator<Item = &TeamSide> {
        std::iter::once(&self.home).chain(self.away.iter())
    }
}

// ---------------------------------------------------------------------------
// Ingestion
// ---------------------------------------------------------------------------

/// Parse one week's box scores from a provider JSON payload (an array of
/// matchup objects).
pub fn box_scores_from_json(payload: &str) -> Result<Vec<BoxScore>, LeagueError> {
    let scores: Vec<BoxScore> = serde_json::from_str(payload)?;
    Ok(scores)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
