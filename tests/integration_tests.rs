// Integration tests for the lineup efficiency engine.
//
// These tests exercise the full pipeline end-to-end through the library
// crate's public API: ingest a week of box scores from a provider payload,
// infer the slot configuration from one matchup, allocate every team's
// roster, rank the managers, and pull the report reductions (close
// matchups, trophies) off the same data.

use benchwarmer::config::ReportConfig;
use benchwarmer::league::{box_scores_from_json, BoxScore, InjuryStatus, Player, TeamSide, BENCH};
use benchwarmer::lineup::{allocate, LineupError, SlotConfig};
use benchwarmer::report::{
    close_matchups, efficiency_report, players_to_monitor, season_trophies, weekly_trophies,
};

// ===========================================================================
// Test helpers
// ===========================================================================

/// Opt-in log capture: run with RUST_LOG=benchwarmer=trace to watch the
/// allocation passes.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn player(name: &str, position: &str, slot: &str, points: f64, projected: f64) -> Player {
    Player {
        name: name.into(),
        position: position.into(),
        slot_position: slot.into(),
        points,
        projected_points: projected,
        game_played: 100,
        injury_status: InjuryStatus::Active,
    }
}

/// A standard lineup for a QB/2xRB/2xWR/TE/FLEX/D-ST league, plus bench.
/// `starters` maps onto the eight starting slots in order.
fn standard_lineup(starters: [f64; 8], bench: &[(&str, f64)]) -> Vec<Player> {
    let slots = [
        ("QB", "QB"),
        ("RB1", "RB"),
        ("RB2", "RB"),
        ("WR1", "WR"),
        ("WR2", "WR"),
        ("TE", "TE"),
        ("FLEX", "RB/WR/TE"),
        ("DST", "D/ST"),
    ];
    let mut lineup: Vec<Player> = slots
        .iter()
        .zip(starters)
        .map(|((name, slot), points)| {
            let position = match *slot {
                "RB/WR/TE" => "WR",
                other => other,
            };
            player(name, position, slot, points, points)
        })
        .collect();
    for (position, points) in bench {
        lineup.push(player(
            &format!("Bench {position} {points}"),
            position,
            BENCH,
            *points,
            *points,
        ));
    }
    lineup
}

fn team(name: &str, lineup: Vec<Player>) -> TeamSide {
    let score = lineup
        .iter()
        .filter(|p| p.is_starter())
        .map(|p| p.points)
        .sum();
    TeamSide {
        team: name.into(),
        score,
        lineup,
    }
}

/// A four-team week. "Tidy" starts its best players; "Sloppy" left a big RB
/// on the bench; "Perfect" and "Modest" fill the other matchup.
fn sample_week() -> Vec<BoxScore> {
    let tidy = team(
        "Tidy",
        standard_lineup(
            [20.0, 12.0, 10.0, 11.0, 9.0, 7.0, 8.0, 6.0],
            &[("RB", 3.0), ("WR", 2.0)],
        ),
    );
    let sloppy = team(
        "Sloppy",
        standard_lineup(
            [18.0, 5.0, 4.0, 10.0, 8.0, 6.0, 7.0, 5.0],
            &[("RB", 22.0), ("WR", 1.0)],
        ),
    );
    let perfect = team(
        "Perfect",
        standard_lineup(
            [25.0, 14.0, 13.0, 12.0, 11.0, 9.0, 10.0, 8.0],
            &[("RB", 2.0)],
        ),
    );
    let modest = team(
        "Modest",
        standard_lineup(
            [15.0, 9.0, 8.0, 7.0, 6.0, 5.0, 6.0, 4.0],
            &[("WR", 9.0)],
        ),
    );
    vec![
        BoxScore {
            home: tidy,
            away: Some(sloppy),
        },
        BoxScore {
            home: perfect,
            away: Some(modest),
        },
    ]
}

// ===========================================================================
// End-to-end pipeline
// ===========================================================================

#[test]
fn infer_then_allocate_a_full_week() {
    init_logging();
    let week = sample_week();

    // Infer the schema from the first matchup's pair of lineups.
    let away = week[0].away.as_ref().unwrap();
    let config =
        SlotConfig::infer(&week[0].home.lineup, &away.lineup).expect("inference should succeed");
    assert_eq!(config.total_starters(), 8);
    assert_eq!(config.count("QB"), 1);
    assert_eq!(config.count("RB"), 2);
    assert_eq!(config.count("WR"), 2);
    assert_eq!(config.count("RB/WR/TE"), 1);
    assert_eq!(config.count("D/ST"), 1);
    assert_eq!(config.count(BENCH), 0);

    // Rank every team with the inferred configuration.
    let report = efficiency_report(&week, &config).expect("report should build");
    assert_eq!(report.rankings.len(), 4);

    // Tidy and Perfect started their best possible lineups.
    let settings = ReportConfig::default();
    let best = report.best_managers(settings.best_manager_threshold);
    let mut best_names: Vec<&str> = best.iter().map(|t| t.team.as_str()).collect();
    best_names.sort_unstable();
    assert_eq!(best_names, vec!["Perfect", "Tidy"]);

    // Sloppy benched a 22-point RB over a 4-point starter and a 7-point
    // flex: worst manager, 18 points left on the bench.
    let worst = report.worst_manager().expect("ranking is non-empty");
    assert_eq!(worst.team, "Sloppy");
    assert!(worst.allocation.percentage < 90.0);
    assert!(worst.allocation.difference > 0.0);
}

#[test]
fn provider_payload_round_trip() {
    init_logging();
    let payload = r#"[
        {
            "home": {
                "team": "Ingested Home",
                "score": 31.0,
                "lineup": [
                    {"name": "QB A", "position": "QB", "slot_position": "QB",
                     "points": 21.0, "projected_points": 18.0, "game_played": 100},
                    {"name": "RB A", "position": "RB", "slot_position": "RB",
                     "points": 10.0, "projected_points": 12.0, "game_played": 100},
                    {"name": "RB B", "position": "RB", "slot_position": "BE",
                     "points": 14.0, "projected_points": 8.0, "game_played": 100}
                ]
            },
            "away": {
                "team": "Ingested Away",
                "score": 12.0,
                "lineup": [
                    {"name": "QB B", "position": "QB", "slot_position": "QB",
                     "points": 7.0, "projected_points": 16.0, "game_played": 100},
                    {"name": "RB C", "position": "RB", "slot_position": "RB",
                     "points": 5.0, "projected_points": 9.0, "game_played": 100}
                ]
            }
        }
    ]"#;

    let week = box_scores_from_json(payload).expect("payload should parse");
    let away = week[0].away.as_ref().unwrap();
    let config =
        SlotConfig::infer(&week[0].home.lineup, &away.lineup).expect("inference should succeed");

    // Home benched the better RB; optimal swaps it in.
    let alloc = allocate(&week[0].home.lineup, &config).expect("allocation should be defined");
    assert!((alloc.actual_total - 31.0).abs() < 1e-9);
    assert!((alloc.optimal_total - 35.0).abs() < 1e-9);
    assert!((alloc.difference - 4.0).abs() < 1e-9);
}

#[test]
fn reports_share_one_week_of_data() {
    init_logging();
    let week = sample_week();
    let settings = ReportConfig::default();

    // Everyone's games are final, so no matchup is still close.
    assert!(close_matchups(&week, settings.close_score_margin).is_empty());

    let trophies = weekly_trophies(&week);
    assert_eq!(trophies.highest.unwrap().team, "Perfect");
    assert_eq!(trophies.lowest.unwrap().team, "Modest");
    // Tidy beat Sloppy 83-63; Perfect beat Modest 102-60.
    assert_eq!(trophies.blowout.unwrap().winner, "Perfect");
    assert_eq!(trophies.close_win.unwrap().winner, "Tidy");
    // Every starter in sample_week() hits projection exactly, so the player
    // awards have no surprise to reward.
    assert!(trophies.overachiever.is_none());
    assert!(trophies.underachiever.is_none());

    // Everyone is healthy and every game is final: nothing to monitor.
    assert!(players_to_monitor(&week).is_empty());
}

#[test]
fn season_trophies_span_multiple_weeks() {
    init_logging();
    let week_one = sample_week();
    let mut week_two = sample_week();

    // Week two: Modest's QB erupts past projection and carries the team to
    // the season-high total.
    let modest = week_two[1].away.as_mut().unwrap();
    modest.lineup[0].points = 48.0;
    modest.score = 48.0 + 9.0 + 8.0 + 7.0 + 6.0 + 5.0 + 6.0 + 4.0;

    let season = season_trophies(&[week_one, week_two]);
    let highest = season.highest.unwrap();
    assert_eq!(highest.team, "Perfect");
    assert_eq!(highest.week, 1);

    let mvp = season.mvp.unwrap();
    assert_eq!(mvp.team, "Modest");
    assert_eq!(mvp.player, "QB");
    assert_eq!(mvp.week, 2);
}

#[test]
fn questionable_starter_shows_up_in_the_monitor() {
    init_logging();
    let mut week = sample_week();
    let tidy = &mut week[0].home;
    tidy.lineup[3].injury_status = InjuryStatus::Questionable;
    tidy.lineup[3].game_played = 0;

    let monitored = players_to_monitor(&week);
    assert_eq!(monitored.len(), 1);
    assert_eq!(monitored[0].team, "Tidy");
    assert_eq!(monitored[0].player, "WR1");
}

// ===========================================================================
// Edge cases across module boundaries
// ===========================================================================

#[test]
fn inference_feeds_allocation_with_flex_resolution() {
    init_logging();
    // Scenario A driven through inference instead of a hand-built config.
    let observed = vec![
        player("Obs QB", "QB", "QB", 0.0, 0.0),
        player("Obs RB", "RB", "RB", 0.0, 0.0),
        player("Obs Flex", "WR", "RB/WR/TE", 0.0, 0.0),
    ];
    let config = SlotConfig::infer(&observed, &[]).expect("inference should succeed");

    let roster = vec![
        player("QB1", "QB", "QB", 12.0, 0.0),
        player("RB1", "RB", "RB", 10.0, 0.0),
        player("RB2", "RB", BENCH, 8.0, 0.0),
    ];
    let alloc = allocate(&roster, &config).expect("allocation should be defined");
    assert!((alloc.optimal_total - 30.0).abs() < 1e-9);
    assert!((alloc.actual_total - 22.0).abs() < 1e-9);
}

#[test]
fn empty_week_propagates_ambiguous_inference() {
    init_logging();
    let home: Vec<Player> = vec![player("Hurt", "RB", "IR", 0.0, 0.0)];
    let away: Vec<Player> = Vec::new();

    let err = SlotConfig::infer(&home, &away).unwrap_err();
    assert!(matches!(err, LineupError::AmbiguousSlotInference));
}

#[test]
fn degenerate_roster_propagates_undefined_allocation() {
    init_logging();
    let config = SlotConfig::new(vec![("QB".into(), 1)]);
    let err = allocate(&[], &config).unwrap_err();
    assert!(matches!(err, LineupError::UndefinedAllocation));

    // The error formats into caller-facing text without a percentage.
    let text = err.to_string();
    assert!(text.contains("undefined"));
}
