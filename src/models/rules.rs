//! Season structure rules.
//!
//! Numeric targets the schedule must satisfy: games per team, the
//! weekly load cap, distinct-opponent breadth, and the intra-division
//! rivalry quota with its home/away split. Defaults reproduce the
//! reference 30-team instance (a 162-game season compressed into
//! 54 three-game series units).

use serde::{Deserialize, Serialize};

/// Scheduling targets for a season.
///
/// All fields are hard requirements of the MILP formulation, not
/// preferences. See [`crate::validation`] for the arithmetic checks
/// performed at league construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRules {
    /// Exact total games (home + away) every team plays.
    pub games_per_team: u32,
    /// Maximum games a team may play inside one weekly-cap window.
    pub weekly_game_cap: u32,
    /// Minimum number of distinct opponents every team must face.
    pub min_opponents: u32,
    /// Total games between each pair of same-division teams.
    pub rivalry_games: u32,
    /// Of `rivalry_games`, how many the lexicographically first team
    /// of the pair hosts. The other team hosts the remainder.
    pub rivalry_home_games: u32,
}

impl Default for ScheduleRules {
    fn default() -> Self {
        Self {
            games_per_team: 54,
            weekly_game_cap: 6,
            // 13 games against each of 4 division rivals leave 2 spare
            // games, so 6 distinct opponents is the reachable maximum.
            min_opponents: 6,
            rivalry_games: 13,
            rivalry_home_games: 7,
        }
    }
}

impl ScheduleRules {
    /// Sets the exact games-per-team target.
    pub fn with_games_per_team(mut self, games: u32) -> Self {
        self.games_per_team = games;
        self
    }

    /// Sets the weekly game cap.
    pub fn with_weekly_game_cap(mut self, cap: u32) -> Self {
        self.weekly_game_cap = cap;
        self
    }

    /// Sets the minimum distinct-opponent count.
    pub fn with_min_opponents(mut self, min: u32) -> Self {
        self.min_opponents = min;
        self
    }

    /// Sets the rivalry quota and its home split.
    pub fn with_rivalry(mut self, total: u32, first_hosts: u32) -> Self {
        self.rivalry_games = total;
        self.rivalry_home_games = first_hosts;
        self
    }

    /// Games the lexicographically second team of a rivalry pair hosts.
    #[inline]
    pub fn rivalry_road_games(&self) -> u32 {
        self.rivalry_games - self.rivalry_home_games
    }
}
