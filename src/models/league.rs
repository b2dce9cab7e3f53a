//! League topology.
//!
//! Static definitions of teams, their partition into divisions, and
//! the season timing and structure rules. A [`League`] is an immutable
//! snapshot: it is validated once at construction and never modified
//! afterwards, so multiple instances can be built and solved with
//! different topologies side by side.

use serde::{Deserialize, Serialize};

use super::{ScheduleRules, SeasonCalendar, Team};
use crate::geo::DistanceMatrix;
use crate::validation::{validate_league, ConfigError};

/// A named, disjoint group of teams.
///
/// Divisions must partition the team set: every team belongs to
/// exactly one division. Membership is by team name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Division {
    /// Division name.
    pub name: String,
    /// Names of member teams.
    pub teams: Vec<String>,
}

impl Division {
    /// Creates a division from a name and member team names.
    pub fn new(name: impl Into<String>, teams: Vec<String>) -> Self {
        Self {
            name: name.into(),
            teams,
        }
    }
}

/// Validated league topology: teams, division partition, calendar,
/// and season rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct League {
    teams: Vec<Team>,
    divisions: Vec<Division>,
    calendar: SeasonCalendar,
    rules: ScheduleRules,
}

impl League {
    /// Builds a league, validating the configuration.
    ///
    /// Fails with every detected [`ConfigError`] when the divisions do
    /// not partition the team set, a coordinate is degenerate, the
    /// calendar is empty, or the rivalry/breadth arithmetic cannot fit
    /// the games target. A calendar whose weekly-cap window differs
    /// from its day stride is accepted but logged as a warning, naming
    /// the days exempt from the cap.
    pub fn new(
        teams: Vec<Team>,
        divisions: Vec<Division>,
        calendar: SeasonCalendar,
        rules: ScheduleRules,
    ) -> Result<Self, Vec<ConfigError>> {
        validate_league(&teams, &divisions, &calendar, &rules)?;

        if calendar.has_window_mismatch() {
            let uncovered = calendar.uncovered_days();
            log::warn!(
                "weekly-cap window ({} days) differs from day stride ({} days); \
                 days {}..{} are exempt from the weekly cap",
                calendar.week_window_days,
                calendar.days_per_week,
                uncovered.start,
                uncovered.end,
            );
        }

        Ok(Self {
            teams,
            divisions,
            calendar,
            rules,
        })
    }

    /// All teams, in declaration order.
    #[inline]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Number of teams.
    #[inline]
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// All divisions.
    #[inline]
    pub fn divisions(&self) -> &[Division] {
        &self.divisions
    }

    /// Season calendar.
    #[inline]
    pub fn calendar(&self) -> &SeasonCalendar {
        &self.calendar
    }

    /// Season rules.
    #[inline]
    pub fn rules(&self) -> &ScheduleRules {
        &self.rules
    }

    /// Index of a team by name.
    pub fn team_index(&self, name: &str) -> Option<usize> {
        self.teams.iter().position(|t| t.name == name)
    }

    /// The division a team belongs to.
    pub fn division_of(&self, team_name: &str) -> Option<&Division> {
        self.divisions
            .iter()
            .find(|d| d.teams.iter().any(|t| t == team_name))
    }

    /// Pairwise venue distances for all teams.
    pub fn distance_matrix(&self) -> DistanceMatrix {
        let points: Vec<_> = self.teams.iter().map(|t| t.venue).collect();
        DistanceMatrix::from_points(&points)
    }

    /// All same-division team pairs as `(first, second)` indices.
    ///
    /// Within each pair the team whose name sorts lexicographically
    /// first comes first; the rivalry constraints allocate
    /// `rivalry_home_games` to that team. The ordering depends only on
    /// team names, so repeated runs over the same input produce the
    /// same split.
    pub fn rival_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for division in &self.divisions {
            for (n, a) in division.teams.iter().enumerate() {
                for b in division.teams.iter().skip(n + 1) {
                    let (first, second) = if a < b { (a, b) } else { (b, a) };
                    // Membership was validated at construction.
                    let i = self.team_index(first).expect("division member exists");
                    let j = self.team_index(second).expect("division member exists");
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
}
