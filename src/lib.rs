//! Sports-league fixture scheduling via mixed-integer programming.
//!
//! Assigns home/away games to season days for a league of teams
//! partitioned into divisions, minimizing the total distance visiting
//! teams travel, subject to league-structure rules: an exact
//! games-per-team target, one game per team per day, a weekly load
//! cap, a distinct-opponent breadth minimum, and fixed intra-division
//! rivalry quotas with a deterministic home/away split.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Team`, `Division`, `League`,
//!   `SeasonCalendar`, `ScheduleRules`, `Game`, `Schedule`
//! - **`geo`**: Venue coordinates, haversine distances, the cached
//!   pairwise `DistanceMatrix`
//! - **`validation`**: Configuration integrity checks (partition,
//!   coordinates, rivalry arithmetic)
//! - **`milp`**: The combinatorial core — model builder, solver
//!   contract, result extraction
//! - **`report`**: Console-style schedule and travel formatting
//! - **`instances`**: The 30-team MLB reference topology
//!
//! # Architecture
//!
//! Model construction is purely declarative; the branch-and-bound
//! search is delegated to an external solver behind the
//! [`milp::MipSolver`] contract ( `good_lp` over `microlp` by
//! default). Topology and distances are immutable snapshots for the
//! lifetime of a solve, so independent instances can run side by side.
//!
//! # Example
//!
//! ```no_run
//! use league_scheduler::{instances, milp::SolveOptions, solve_league};
//!
//! let league = instances::mlb();
//! let schedule = solve_league(&league, &SolveOptions::default())?;
//! println!("{}", league_scheduler::report::format_schedule(&schedule));
//! # Ok::<(), league_scheduler::milp::SolveError>(())
//! ```

pub mod geo;
pub mod instances;
pub mod milp;
pub mod models;
pub mod report;
pub mod validation;

use milp::{
    extract_schedule, DefaultMipSolver, MipSolver, ScheduleModelBuilder, SolveError, SolveOptions,
};
use models::{League, Schedule};

/// Runs the full pipeline with the bundled solver backend.
///
/// Builds the distance matrix and MILP instance for the league, solves
/// it, and extracts the schedule. Infeasible or unbounded models come
/// back as [`SolveError`]; a time-limited solve yields a schedule
/// labeled not proven optimal.
pub fn solve_league(league: &League, options: &SolveOptions) -> Result<Schedule, SolveError> {
    let distances = league.distance_matrix();
    let model = ScheduleModelBuilder::new(league, &distances).build();
    let outcome = DefaultMipSolver.solve(model, options)?;
    Ok(extract_schedule(league, &outcome))
}
