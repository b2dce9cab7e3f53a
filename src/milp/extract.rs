//! Result extraction.
//!
//! Reads a solved variable assignment back into a human-facing
//! [`Schedule`] and derives travel metrics. Extraction is a pure read:
//! it performs no search, and it tolerates threshold artifacts — any
//! `x` value at or below 0.5 counts as "no game" even where the model
//! invariants say one should exist.

use crate::geo::DistanceMatrix;
use crate::models::{Game, League, Schedule};

use super::solver::{SolveOutcome, SolveStatus};

/// Binary read threshold for near-integer solver output.
const GAME_THRESHOLD: f64 = 0.5;

/// Reconstructs the schedule from a solved assignment.
///
/// Scans days in ascending order, then home/away pairs in team order,
/// emitting a [`Game`] for every hosting variable above the binary
/// threshold. The schedule is labeled proven-optimal only for
/// [`SolveStatus::Optimal`] outcomes.
pub fn extract_schedule(league: &League, outcome: &SolveOutcome) -> Schedule {
    let assignment = &outcome.assignment;
    debug_assert_eq!(assignment.team_count(), league.team_count());
    debug_assert_eq!(assignment.day_count(), league.calendar().num_days());

    let teams = league.teams();
    let mut games = Vec::new();
    for day in league.calendar().days() {
        for home in 0..league.team_count() {
            for away in (0..league.team_count()).filter(|&a| a != home) {
                if assignment.x_value(home, away, day) > GAME_THRESHOLD {
                    games.push(Game::new(day, &teams[home].name, &teams[away].name));
                }
            }
        }
    }

    Schedule::new(
        games,
        assignment.objective_miles(),
        outcome.status == SolveStatus::Optimal,
    )
}

/// Total miles a team travels to its road games.
///
/// Sums `dist(team, host)` over every game the team plays away.
/// Unknown team names contribute nothing.
pub fn away_travel_miles(
    schedule: &Schedule,
    team: &str,
    league: &League,
    distances: &DistanceMatrix,
) -> f64 {
    let Some(t) = league.team_index(team) else {
        return 0.0;
    };
    schedule
        .games
        .iter()
        .filter(|g| g.away == team)
        .filter_map(|g| league.team_index(&g.home))
        .map(|host| distances.miles(t, host))
        .sum()
}

/// League-wide away-travel miles, recomputed from the extracted games.
///
/// Equals the solver-reported objective up to floating tolerance; the
/// round-trip is a tested property.
pub fn total_travel_miles(schedule: &Schedule, league: &League, distances: &DistanceMatrix) -> f64 {
    schedule
        .games
        .iter()
        .filter_map(|g| {
            let home = league.team_index(&g.home)?;
            let away = league.team_index(&g.away)?;
            Some(distances.miles(away, home))
        })
        .sum()
}
