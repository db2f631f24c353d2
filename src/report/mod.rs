// Report reductions over already-computed numbers: efficiency rankings,
// in-progress projections, injury monitoring, and weekly and season
// superlatives. All outputs are typed values; rendering them into chat text
// is the presentation layer's job.

pub mod efficiency;
pub mod monitor;
pub mod projection;
pub mod season;
pub mod trophies;

pub use efficiency::{efficiency_report, EfficiencyReport, TeamEfficiency};
pub use monitor::{players_to_monitor, MonitoredPlayer};
pub use projection::{all_played, close_matchups, projected_total, ProjectedMatchup};
pub use season::{season_trophies, SeasonPlayerAward, SeasonTeamScore, SeasonTrophies};
pub use trophies::{weekly_trophies, WeeklyTrophies};
