//! Solver backend contract.
//!
//! The search itself is delegated to an external mixed-integer solver
//! behind the narrow [`MipSolver`] trait: hand over a built
//! [`ScheduleModel`] plus a [`SolveOptions`] budget, get back either a
//! [`SolveOutcome`] (optimal, or the best incumbent at a time limit)
//! or a terminal [`SolveError`].
//!
//! [`DefaultMipSolver`] wires the contract to `good_lp`'s bundled
//! pure-Rust `microlp` backend. Other backends (CBC, HiGHS, a remote
//! service) can implement the trait without touching the formulation.

use std::time::Duration;

use good_lp::{default_solver, ResolutionError, Solution, SolverModel};
use thiserror::Error;

use super::builder::{x_slot, ScheduleModel};

/// Caller-supplied solve budget.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveOptions {
    /// Wall-clock budget handed to the backend. `None` = run to
    /// proven optimality.
    pub time_limit: Option<Duration>,
}

impl SolveOptions {
    /// Sets a wall-clock time limit.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}

/// How the backend finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// The assignment is a proven optimum.
    Optimal,
    /// The time limit expired; the assignment is the best incumbent
    /// found and must not be presented as optimal.
    BestFound,
}

/// A solved 0/1 assignment of the game variables.
///
/// Values are near-integer floats as returned by the backend; anything
/// at or below 0.5 reads as "no game" downstream.
#[derive(Debug, Clone)]
pub struct SolvedAssignment {
    team_count: usize,
    day_count: usize,
    x: Vec<f64>,
    objective_miles: f64,
}

impl SolvedAssignment {
    /// Wraps raw `x` values laid out in the model's arena order.
    ///
    /// # Panics
    /// If `x.len()` doesn't match `team_count * (team_count - 1) *
    /// day_count`.
    pub fn new(team_count: usize, day_count: usize, x: Vec<f64>, objective_miles: f64) -> Self {
        assert_eq!(
            x.len(),
            team_count * (team_count.saturating_sub(1)) * day_count,
            "assignment size does not match the variable arena"
        );
        Self {
            team_count,
            day_count,
            x,
            objective_miles,
        }
    }

    /// Builds an assignment from explicit `(home, away, day)` games.
    ///
    /// Every listed game reads back as 1.0, everything else as 0.0.
    /// Intended for backends and tests that hold a game list rather
    /// than a variable vector.
    pub fn from_games(
        team_count: usize,
        day_count: usize,
        games: &[(usize, usize, usize)],
        objective_miles: f64,
    ) -> Self {
        let mut x = vec![0.0; team_count * (team_count.saturating_sub(1)) * day_count];
        for &(home, away, day) in games {
            x[x_slot(team_count, day_count, home, away, day)] = 1.0;
        }
        Self::new(team_count, day_count, x, objective_miles)
    }

    /// The solved value of `x[home, away, day]`.
    #[inline]
    pub fn x_value(&self, home: usize, away: usize, day: usize) -> f64 {
        self.x[x_slot(self.team_count, self.day_count, home, away, day)]
    }

    /// Objective value reported by the backend (total away-travel miles).
    #[inline]
    pub fn objective_miles(&self) -> f64 {
        self.objective_miles
    }

    /// Number of teams the assignment covers.
    #[inline]
    pub fn team_count(&self) -> usize {
        self.team_count
    }

    /// Number of days the assignment covers.
    #[inline]
    pub fn day_count(&self) -> usize {
        self.day_count
    }
}

/// Successful backend result.
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    /// Whether the assignment is proven optimal or a best incumbent.
    pub status: SolveStatus,
    /// The solved variable assignment.
    pub assignment: SolvedAssignment,
}

/// Terminal solve failures.
///
/// `Infeasible` is a legitimate outcome of an over-constrained
/// configuration, reported as-is — the crate never repairs or relaxes
/// constraints on its own. `Unbounded` cannot arise from this
/// formulation (binary variables, objective bounded below by zero),
/// so seeing it means the model was corrupted and is surfaced
/// immediately.
#[derive(Debug, Error)]
pub enum SolveError {
    /// No 0/1 assignment satisfies the constraint set.
    #[error("no schedule satisfies the configured constraints")]
    Infeasible,
    /// The objective is unbounded; indicates a formulation bug.
    #[error("model reported unbounded; the formulation is corrupted")]
    Unbounded,
    /// The backend failed for another reason.
    #[error("solver backend error: {0}")]
    Backend(String),
}

/// Narrow contract over an external mixed-integer solver.
pub trait MipSolver {
    /// Solves the model within the given budget.
    fn solve(
        &mut self,
        model: ScheduleModel,
        options: &SolveOptions,
    ) -> Result<SolveOutcome, SolveError>;
}

/// The bundled backend: `good_lp` over the pure-Rust `microlp` solver.
///
/// `microlp` exposes no time-limit control, so this backend always
/// solves to proven optimality and logs a warning when a budget is
/// requested; it never returns [`SolveStatus::BestFound`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMipSolver;

impl MipSolver for DefaultMipSolver {
    fn solve(
        &mut self,
        model: ScheduleModel,
        options: &SolveOptions,
    ) -> Result<SolveOutcome, SolveError> {
        if let Some(limit) = options.time_limit {
            log::warn!(
                "microlp backend does not support time limits; \
                 ignoring the {limit:?} budget and solving to optimality"
            );
        }

        let ScheduleModel {
            vars,
            objective,
            constraints,
            games,
        } = model;

        log::debug!("handing {} constraints to microlp", constraints.len());
        let mut problem = vars.minimise(&objective).using(default_solver);
        for c in constraints {
            problem = problem.with(c);
        }

        match problem.solve() {
            Ok(solution) => {
                let x = games.read_x(&solution);
                let objective_miles = solution.eval(&objective);
                log::debug!("optimal objective: {objective_miles:.1} miles");
                Ok(SolveOutcome {
                    status: SolveStatus::Optimal,
                    assignment: SolvedAssignment::new(
                        games.team_count(),
                        games.day_count(),
                        x,
                        objective_miles,
                    ),
                })
            }
            Err(ResolutionError::Infeasible) => Err(SolveError::Infeasible),
            Err(ResolutionError::Unbounded) => Err(SolveError::Unbounded),
            Err(other) => Err(SolveError::Backend(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_assignment_from_games() {
        let a = SolvedAssignment::from_games(4, 6, &[(0, 1, 0), (2, 3, 0), (1, 0, 1)], 500.0);
        assert_eq!(a.x_value(0, 1, 0), 1.0);
        assert_eq!(a.x_value(2, 3, 0), 1.0);
        assert_eq!(a.x_value(1, 0, 1), 1.0);
        assert_eq!(a.x_value(0, 1, 1), 0.0);
        assert_eq!(a.objective_miles(), 500.0);
        assert_eq!(a.team_count(), 4);
        assert_eq!(a.day_count(), 6);
    }

    #[test]
    #[should_panic(expected = "arena")]
    fn test_solved_assignment_rejects_wrong_size() {
        SolvedAssignment::new(4, 6, vec![0.0; 10], 0.0);
    }

    #[test]
    fn test_solve_options_builder() {
        let opts = SolveOptions::default().with_time_limit(Duration::from_secs(30));
        assert_eq!(opts.time_limit, Some(Duration::from_secs(30)));
        assert!(SolveOptions::default().time_limit.is_none());
    }
}
