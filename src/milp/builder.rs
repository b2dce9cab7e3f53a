//! MILP formulation of the fixture scheduling problem.
//!
//! Translates a [`League`] and its [`DistanceMatrix`] into a complete
//! integer-program instance: binary decision variables, linear
//! constraints, and a linear travel-distance objective. The builder is
//! purely declarative — it never searches for a solution itself; that
//! is the job of a [`crate::milp::MipSolver`] backend.
//!
//! # Variables
//!
//! - `x[home, away, day] ∈ {0,1}`: 1 iff `home` hosts `away` on `day`,
//!   for every ordered pair of distinct teams and every day. Stored as
//!   a flat arena indexed by `(ordered pair, day)`.
//! - `y[team, opp] ∈ {0,1}`: 1 iff `team` ever meets `opp` across the
//!   season. Not independently free: linked to `x` by constraint.
//!
//! # Constraint families
//!
//! 1. Season length: every team's home + away games equal the games
//!    target exactly.
//! 2. One game per team per day.
//! 3. Weekly load cap over the calendar's cap windows.
//! 4. Opponent breadth: a two-sided link ties `y` to the schedule.
//!    `y[t,o] >= Σ_d (x[t,o,d] + x[o,t,d]) / games` forces `y` to 1
//!    whenever any meeting is scheduled (the division by the games
//!    target keeps the right side in (0, 1] for any nonzero meeting
//!    count, which integrality then rounds up), while
//!    `y[t,o] <= Σ_d (x[t,o,d] + x[o,t,d])` forces it back to 0 when
//!    none is. `Σ_o y[t,o]` must then reach the breadth minimum over
//!    opponents actually faced.
//! 5. Division rivalry: each same-division pair meets exactly
//!    `rivalry_games` times, with the lexicographically first team
//!    hosting exactly `rivalry_home_games` of them.
//!
//! The objective minimizes `Σ dist(away, home) · x[home, away, day]`:
//! the miles visitors travel to reach their hosts.

use good_lp::{
    constraint, variable, variables, Constraint, Expression, ProblemVariables, Solution, Variable,
};

use crate::geo::DistanceMatrix;
use crate::models::League;

/// Flat-arena slot for `x[home, away, day]`.
///
/// Ordered team pairs are packed as `home * (n - 1) + away'` where
/// `away'` skips the diagonal; each pair owns a contiguous run of
/// `day_count` slots.
#[inline]
pub(crate) fn x_slot(
    team_count: usize,
    day_count: usize,
    home: usize,
    away: usize,
    day: usize,
) -> usize {
    debug_assert!(home != away, "no self-pairing");
    let pair = home * (team_count - 1) + if away < home { away } else { away - 1 };
    pair * day_count + day
}

/// Arena of game decision variables.
pub(crate) struct GameVars {
    team_count: usize,
    day_count: usize,
    /// `x[home, away, day]`, laid out by [`x_slot`].
    x: Vec<Variable>,
    /// `y[team, opp]`, laid out by ordered-pair index.
    y: Vec<Variable>,
}

impl GameVars {
    fn populate(vars: &mut ProblemVariables, team_count: usize, day_count: usize) -> Self {
        let mut x = Vec::with_capacity(team_count * (team_count - 1) * day_count);
        for _home in 0..team_count {
            for _away in 0..team_count - 1 {
                for _day in 0..day_count {
                    x.push(vars.add(variable().binary()));
                }
            }
        }
        let mut y = Vec::with_capacity(team_count * (team_count - 1));
        for _ in 0..team_count * (team_count - 1) {
            y.push(vars.add(variable().binary()));
        }
        Self {
            team_count,
            day_count,
            x,
            y,
        }
    }

    /// The hosting variable for `home` receiving `away` on `day`.
    #[inline]
    pub(crate) fn x(&self, home: usize, away: usize, day: usize) -> Variable {
        self.x[x_slot(self.team_count, self.day_count, home, away, day)]
    }

    /// The meeting indicator for `team` vs `opp`.
    #[inline]
    pub(crate) fn y(&self, team: usize, opp: usize) -> Variable {
        debug_assert!(team != opp);
        let pair = team * (self.team_count - 1) + if opp < team { opp } else { opp - 1 };
        self.y[pair]
    }

    /// Reads all `x` values out of a solution, in arena order.
    pub(crate) fn read_x<S: Solution>(&self, solution: &S) -> Vec<f64> {
        self.x.iter().map(|&v| solution.value(v)).collect()
    }

    #[inline]
    pub(crate) fn team_count(&self) -> usize {
        self.team_count
    }

    #[inline]
    pub(crate) fn day_count(&self) -> usize {
        self.day_count
    }

    #[inline]
    pub(crate) fn x_len(&self) -> usize {
        self.x.len()
    }

    #[inline]
    pub(crate) fn y_len(&self) -> usize {
        self.y.len()
    }
}

/// A complete, ready-to-solve integer-program instance.
///
/// Immutable once built; hand it to a [`crate::milp::MipSolver`].
pub struct ScheduleModel {
    pub(crate) vars: ProblemVariables,
    pub(crate) objective: Expression,
    pub(crate) constraints: Vec<Constraint>,
    pub(crate) games: GameVars,
}

impl ScheduleModel {
    /// Number of binary decision variables.
    pub fn variable_count(&self) -> usize {
        self.games.x_len() + self.games.y_len()
    }

    /// Number of linear constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}

/// Builds a [`ScheduleModel`] from a league and its distance table.
///
/// # Example
/// ```no_run
/// use league_scheduler::milp::ScheduleModelBuilder;
/// use league_scheduler::instances;
///
/// let league = instances::mlb();
/// let distances = league.distance_matrix();
/// let model = ScheduleModelBuilder::new(&league, &distances).build();
/// ```
pub struct ScheduleModelBuilder<'a> {
    league: &'a League,
    distances: &'a DistanceMatrix,
}

impl<'a> ScheduleModelBuilder<'a> {
    /// Creates a builder over an immutable league snapshot.
    pub fn new(league: &'a League, distances: &'a DistanceMatrix) -> Self {
        debug_assert_eq!(league.team_count(), distances.len());
        Self { league, distances }
    }

    /// Produces the full variable set, constraint set, and objective.
    pub fn build(&self) -> ScheduleModel {
        let n = self.league.team_count();
        let day_count = self.league.calendar().num_days();

        let mut vars = variables!();
        let games = GameVars::populate(&mut vars, n, day_count);

        let mut constraints = Vec::new();
        self.season_length(&games, &mut constraints);
        self.one_game_per_day(&games, &mut constraints);
        self.weekly_cap(&games, &mut constraints);
        self.opponent_breadth(&games, &mut constraints);
        self.division_rivalries(&games, &mut constraints);

        let objective = self.travel_objective(&games);

        log::debug!(
            "built schedule model: {} variables, {} constraints",
            games.x_len() + games.y_len(),
            constraints.len()
        );

        ScheduleModel {
            vars,
            objective,
            constraints,
            games,
        }
    }

    /// Home + away games of every team sum to the games target exactly.
    fn season_length(&self, games: &GameVars, out: &mut Vec<Constraint>) {
        let n = self.league.team_count();
        let days = self.league.calendar().days();
        let target = f64::from(self.league.rules().games_per_team);

        for t in 0..n {
            let mut total = Expression::with_capacity(2 * (n - 1) * days.len());
            for o in (0..n).filter(|&o| o != t) {
                for d in days.clone() {
                    total.add_mul(1.0, games.x(t, o, d));
                    total.add_mul(1.0, games.x(o, t, d));
                }
            }
            out.push(constraint!(total == target));
        }
    }

    /// No team plays twice on the same day.
    fn one_game_per_day(&self, games: &GameVars, out: &mut Vec<Constraint>) {
        let n = self.league.team_count();
        for t in 0..n {
            for d in self.league.calendar().days() {
                let mut load = Expression::with_capacity(2 * (n - 1));
                for o in (0..n).filter(|&o| o != t) {
                    load.add_mul(1.0, games.x(t, o, d));
                    load.add_mul(1.0, games.x(o, t, d));
                }
                out.push(constraint!(load <= 1.0));
            }
        }
    }

    /// Per-team game cap inside each weekly window.
    ///
    /// Windows come from the calendar and may leave tail days of the
    /// season uncapped when the window width is narrower than the day
    /// stride; that mismatch is the calendar's to report, not ours to
    /// patch.
    fn weekly_cap(&self, games: &GameVars, out: &mut Vec<Constraint>) {
        let n = self.league.team_count();
        let cap = f64::from(self.league.rules().weekly_game_cap);

        for t in 0..n {
            for w in self.league.calendar().weeks() {
                let window = self.league.calendar().week_window(w);
                if window.is_empty() {
                    continue;
                }
                let mut load = Expression::with_capacity(2 * (n - 1) * window.len());
                for o in (0..n).filter(|&o| o != t) {
                    for d in window.clone() {
                        load.add_mul(1.0, games.x(t, o, d));
                        load.add_mul(1.0, games.x(o, t, d));
                    }
                }
                out.push(constraint!(load <= cap));
            }
        }
    }

    /// Links meeting indicators to scheduled games and enforces the
    /// minimum distinct-opponent count.
    ///
    /// The lower link divides the meeting count by the games target so
    /// the right side stays within (0, 1] whenever any meeting exists;
    /// binary integrality of `y` then forces it to 1. Kept in this
    /// exact fractional form rather than a big-M disjunction. The
    /// upper link caps `y` by the raw meeting count so an unmet
    /// opponent can never count toward the breadth minimum.
    fn opponent_breadth(&self, games: &GameVars, out: &mut Vec<Constraint>) {
        let n = self.league.team_count();
        let days = self.league.calendar().days();
        let inv_target = 1.0 / f64::from(self.league.rules().games_per_team);
        let min_opponents = f64::from(self.league.rules().min_opponents);

        for t in 0..n {
            for o in (0..n).filter(|&o| o != t) {
                let mut meetings = Expression::with_capacity(2 * days.len());
                let mut met_count = Expression::with_capacity(2 * days.len());
                for d in days.clone() {
                    meetings.add_mul(inv_target, games.x(t, o, d));
                    meetings.add_mul(inv_target, games.x(o, t, d));
                    met_count.add_mul(1.0, games.x(t, o, d));
                    met_count.add_mul(1.0, games.x(o, t, d));
                }
                let indicator = games.y(t, o);
                out.push(constraint!(indicator >= meetings));
                out.push(constraint!(indicator <= met_count));
            }

            let mut breadth = Expression::with_capacity(n - 1);
            for o in (0..n).filter(|&o| o != t) {
                breadth.add_mul(1.0, games.y(t, o));
            }
            out.push(constraint!(breadth >= min_opponents));
        }
    }

    /// Same-division pairs meet exactly `rivalry_games` times, split
    /// `rivalry_home_games` / `rivalry_road_games` with the
    /// lexicographically first team hosting the larger share.
    fn division_rivalries(&self, games: &GameVars, out: &mut Vec<Constraint>) {
        let days = self.league.calendar().days();
        let rules = self.league.rules();
        let total = f64::from(rules.rivalry_games);
        let first_hosts = f64::from(rules.rivalry_home_games);
        let second_hosts = f64::from(rules.rivalry_road_games());

        for (i, j) in self.league.rival_pairs() {
            let mut meetings = Expression::with_capacity(2 * days.len());
            let mut i_hosts = Expression::with_capacity(days.len());
            let mut j_hosts = Expression::with_capacity(days.len());
            for d in days.clone() {
                meetings.add_mul(1.0, games.x(i, j, d));
                meetings.add_mul(1.0, games.x(j, i, d));
                i_hosts.add_mul(1.0, games.x(i, j, d));
                j_hosts.add_mul(1.0, games.x(j, i, d));
            }
            out.push(constraint!(meetings == total));
            out.push(constraint!(i_hosts == first_hosts));
            out.push(constraint!(j_hosts == second_hosts));
        }
    }

    /// Minimize the miles visiting teams travel to their hosts.
    fn travel_objective(&self, games: &GameVars) -> Expression {
        let n = self.league.team_count();
        let days = self.league.calendar().days();

        let mut objective = Expression::with_capacity(n * (n - 1) * days.len());
        for home in 0..n {
            for away in (0..n).filter(|&a| a != home) {
                let miles = self.distances.miles(away, home);
                for d in days.clone() {
                    objective.add_mul(miles, games.x(home, away, d));
                }
            }
        }
        objective
    }
}
