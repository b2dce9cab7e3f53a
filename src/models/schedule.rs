//! Schedule (solution) model.
//!
//! A schedule is the set of `(day, home, away)` games read back from a
//! solved assignment, plus the reported objective value. It is
//! immutable once extracted and carries a flag saying whether the
//! solver proved optimality or merely returned its best incumbent.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single scheduled game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Day index in `[0, num_days)`.
    pub day: usize,
    /// Hosting team name.
    pub home: String,
    /// Visiting team name.
    pub away: String,
}

impl Game {
    /// Creates a game record.
    pub fn new(day: usize, home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            day,
            home: home.into(),
            away: away.into(),
        }
    }

    /// Whether the given team plays in this game.
    #[inline]
    pub fn involves(&self, team: &str) -> bool {
        self.home == team || self.away == team
    }
}

/// A complete extracted schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    /// Games ordered by day, then by the builder's team enumeration.
    pub games: Vec<Game>,
    /// Total away-travel miles reported by the solver objective.
    pub objective_miles: f64,
    /// `false` when the solver stopped at a time limit and the games
    /// come from its best incumbent rather than a proven optimum.
    pub proven_optimal: bool,
}

impl Schedule {
    /// Creates a schedule from extracted games.
    pub fn new(games: Vec<Game>, objective_miles: f64, proven_optimal: bool) -> Self {
        Self {
            games,
            objective_miles,
            proven_optimal,
        }
    }

    /// Number of games.
    #[inline]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Whether the schedule contains no games.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// All games on a given day, in extraction order.
    pub fn games_on_day(&self, day: usize) -> Vec<&Game> {
        self.games.iter().filter(|g| g.day == day).collect()
    }

    /// All games involving a team.
    pub fn games_for_team(&self, team: &str) -> Vec<&Game> {
        self.games.iter().filter(|g| g.involves(team)).collect()
    }

    /// Games a team hosts.
    pub fn home_game_count(&self, team: &str) -> usize {
        self.games.iter().filter(|g| g.home == team).count()
    }

    /// Games a team plays on the road.
    pub fn away_game_count(&self, team: &str) -> usize {
        self.games.iter().filter(|g| g.away == team).count()
    }

    /// Distinct opponents a team faces across the season.
    pub fn distinct_opponents(&self, team: &str) -> usize {
        let mut opponents = HashSet::new();
        for g in &self.games {
            if g.home == team {
                opponents.insert(g.away.as_str());
            } else if g.away == team {
                opponents.insert(g.home.as_str());
            }
        }
        opponents.len()
    }

    /// Total games between two teams, both directions.
    pub fn meetings(&self, a: &str, b: &str) -> usize {
        self.games
            .iter()
            .filter(|g| {
                (g.home == a && g.away == b) || (g.home == b && g.away == a)
            })
            .count()
    }
}
