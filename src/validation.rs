//! League configuration validation.
//!
//! Checks structural integrity of a league before any model is built.
//! Detects:
//! - Duplicate team names
//! - Divisions that do not partition the team set
//! - Degenerate venue coordinates
//! - Rivalry/breadth arithmetic that cannot fit the games target
//! - Empty calendars
//!
//! All violations are configuration errors: fatal, reported together,
//! and surfaced before a solve is ever attempted.

use std::collections::HashMap;

use crate::models::{Division, ScheduleRules, SeasonCalendar, Team};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ConfigError>>;

/// A league configuration error.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    /// Error category.
    pub kind: ConfigErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigErrorKind {
    /// Two teams share the same name.
    DuplicateTeam,
    /// A division references a team that doesn't exist.
    UnknownTeam,
    /// A team belongs to no division.
    UnassignedTeam,
    /// A team belongs to more than one division.
    OverlappingDivisions,
    /// A division has no teams.
    EmptyDivision,
    /// A venue coordinate is NaN or out of range.
    InvalidCoordinate,
    /// Rivalry quota arithmetic is inconsistent or exceeds the
    /// games-per-team target for some division.
    RivalryArithmetic,
    /// The minimum distinct-opponent threshold exceeds the number of
    /// available opponents, or is unreachable once rivalry games
    /// consume the games budget.
    OpponentThreshold,
    /// The calendar has zero days or a zero-width cap window.
    DegenerateCalendar,
}

impl ConfigError {
    fn new(kind: ConfigErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a league configuration.
///
/// Checks:
/// 1. No duplicate team names
/// 2. Every division member is a known team
/// 3. Divisions partition the team set (each team in exactly one)
/// 4. No empty divisions
/// 5. All venue coordinates are finite and in range
/// 6. `rivalry_home_games <= rivalry_games`, and each team's rivalry
///    quota `(division_size - 1) * rivalry_games` fits `games_per_team`
/// 7. `min_opponents <= team_count - 1`, and the threshold stays
///    reachable once each team's rivalry quota is deducted from its
///    games budget
/// 8. The calendar has at least one day and a nonzero cap window
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_league(
    teams: &[Team],
    divisions: &[Division],
    calendar: &SeasonCalendar,
    rules: &ScheduleRules,
) -> ValidationResult {
    let mut errors = Vec::new();

    // Team names must be unique.
    let mut membership: HashMap<&str, usize> = HashMap::new();
    for team in teams {
        if membership.insert(team.name.as_str(), 0).is_some() {
            errors.push(ConfigError::new(
                ConfigErrorKind::DuplicateTeam,
                format!("Duplicate team name: {}", team.name),
            ));
        }
        if !team.venue.is_valid() {
            errors.push(ConfigError::new(
                ConfigErrorKind::InvalidCoordinate,
                format!(
                    "Team '{}' has invalid venue coordinates ({}, {})",
                    team.name, team.venue.lat_deg, team.venue.lon_deg
                ),
            ));
        }
    }

    // Divisions must partition the team set.
    for division in divisions {
        if division.teams.is_empty() {
            errors.push(ConfigError::new(
                ConfigErrorKind::EmptyDivision,
                format!("Division '{}' has no teams", division.name),
            ));
        }
        for name in &division.teams {
            match membership.get_mut(name.as_str()) {
                Some(count) => *count += 1,
                None => errors.push(ConfigError::new(
                    ConfigErrorKind::UnknownTeam,
                    format!(
                        "Division '{}' references unknown team '{}'",
                        division.name, name
                    ),
                )),
            }
        }
    }
    for (name, count) in &membership {
        match count {
            0 => errors.push(ConfigError::new(
                ConfigErrorKind::UnassignedTeam,
                format!("Team '{name}' belongs to no division"),
            )),
            1 => {}
            n => errors.push(ConfigError::new(
                ConfigErrorKind::OverlappingDivisions,
                format!("Team '{name}' belongs to {n} divisions"),
            )),
        }
    }

    // Rivalry quota arithmetic.
    if rules.rivalry_home_games > rules.rivalry_games {
        errors.push(ConfigError::new(
            ConfigErrorKind::RivalryArithmetic,
            format!(
                "Rivalry home split {} exceeds rivalry total {}",
                rules.rivalry_home_games, rules.rivalry_games
            ),
        ));
    }
    for division in divisions {
        let rivals = division.teams.len().saturating_sub(1) as u32;
        let quota = rivals * rules.rivalry_games;
        if quota > rules.games_per_team {
            errors.push(ConfigError::new(
                ConfigErrorKind::RivalryArithmetic,
                format!(
                    "Division '{}' requires {} rivalry games per team, \
                     exceeding the games target {}",
                    division.name, quota, rules.games_per_team
                ),
            ));
        }
    }

    // Breadth threshold must be reachable.
    let max_opponents = teams.len().saturating_sub(1) as u32;
    if rules.min_opponents > max_opponents {
        errors.push(ConfigError::new(
            ConfigErrorKind::OpponentThreshold,
            format!(
                "Minimum opponent threshold {} exceeds the {} available opponents",
                rules.min_opponents, max_opponents
            ),
        ));
    }
    // Rivalry games are fixed against division rivals; only the spare
    // games can reach new opponents.
    for division in divisions {
        let rivals = division.teams.len().saturating_sub(1) as u32;
        let quota = rivals * rules.rivalry_games;
        let spare = rules.games_per_team.saturating_sub(quota);
        let reachable = (rivals + spare).min(max_opponents);
        if rules.min_opponents > reachable {
            errors.push(ConfigError::new(
                ConfigErrorKind::OpponentThreshold,
                format!(
                    "Minimum opponent threshold {} is unreachable for division '{}': \
                     {} rivals plus {} spare games reach at most {} opponents",
                    rules.min_opponents, division.name, rivals, spare, reachable
                ),
            ));
        }
    }

    // Calendar sanity.
    if calendar.num_days() == 0 || calendar.week_window_days == 0 {
        errors.push(ConfigError::new(
            ConfigErrorKind::DegenerateCalendar,
            format!(
                "Calendar has {} weeks of {} days with a {}-day cap window",
                calendar.num_weeks, calendar.days_per_week, calendar.week_window_days
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_teams() -> Vec<Team> {
        vec![
            Team::new("Avalanche", 39.7392, -105.0118),
            Team::new("Bobcats", 35.2271, -80.8431),
            Team::new("Comets", 29.7604, -95.3698),
            Team::new("Drifters", 47.6062, -122.3321),
        ]
    }

    fn sample_divisions() -> Vec<Division> {
        vec![
            Division::new("North", vec!["Avalanche".into(), "Bobcats".into()]),
            Division::new("South", vec!["Comets".into(), "Drifters".into()]),
        ]
    }

    fn sample_rules() -> ScheduleRules {
        ScheduleRules::default()
            .with_games_per_team(6)
            .with_min_opponents(3)
            .with_rivalry(3, 2)
    }

    #[test]
    fn test_valid_configuration() {
        let result = validate_league(
            &sample_teams(),
            &sample_divisions(),
            &SeasonCalendar::new(2, 3),
            &sample_rules(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_duplicate_team() {
        let mut teams = sample_teams();
        teams.push(Team::new("Avalanche", 40.0, -100.0));
        let errors = validate_league(
            &teams,
            &sample_divisions(),
            &SeasonCalendar::new(2, 3),
            &sample_rules(),
        )
        .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ConfigErrorKind::DuplicateTeam));
    }

    #[test]
    fn test_unknown_team_in_division() {
        let mut divisions = sample_divisions();
        divisions[0].teams.push("Phantoms".into());
        let errors = validate_league(
            &sample_teams(),
            &divisions,
            &SeasonCalendar::new(2, 3),
            &sample_rules(),
        )
        .unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ConfigErrorKind::UnknownTeam));
    }

    #[test]
    fn test_unassigned_team() {
        let mut teams = sample_teams();
        teams.push(Team::new("Earls", 33.0, -97.0));
        let errors = validate_league(
            &teams,
            &sample_divisions(),
            &SeasonCalendar::new(2, 3),
            &sample_rules().with_min_opponents(3),
        )
        .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ConfigErrorKind::UnassignedTeam));
    }

    #[test]
    fn test_overlapping_divisions() {
        let mut divisions = sample_divisions();
        divisions[1].teams.push("Avalanche".into());
        let errors = validate_league(
            &sample_teams(),
            &divisions,
            &SeasonCalendar::new(2, 3),
            &sample_rules(),
        )
        .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ConfigErrorKind::OverlappingDivisions));
    }

    #[test]
    fn test_empty_division() {
        let mut divisions = sample_divisions();
        divisions.push(Division::new("Ghost", Vec::new()));
        let errors = validate_league(
            &sample_teams(),
            &divisions,
            &SeasonCalendar::new(2, 3),
            &sample_rules(),
        )
        .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ConfigErrorKind::EmptyDivision));
    }

    #[test]
    fn test_invalid_coordinate() {
        let mut teams = sample_teams();
        teams[0].venue.lat_deg = f64::NAN;
        let errors = validate_league(
            &teams,
            &sample_divisions(),
            &SeasonCalendar::new(2, 3),
            &sample_rules(),
        )
        .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ConfigErrorKind::InvalidCoordinate));
    }

    #[test]
    fn test_rivalry_split_exceeds_total() {
        let errors = validate_league(
            &sample_teams(),
            &sample_divisions(),
            &SeasonCalendar::new(2, 3),
            &sample_rules().with_rivalry(3, 4),
        )
        .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ConfigErrorKind::RivalryArithmetic));
    }

    #[test]
    fn test_rivalry_quota_exceeds_games_target() {
        // One rival, 13 rivalry games, but only 6 games total.
        let errors = validate_league(
            &sample_teams(),
            &sample_divisions(),
            &SeasonCalendar::new(2, 3),
            &sample_rules().with_rivalry(13, 7),
        )
        .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ConfigErrorKind::RivalryArithmetic));
    }

    #[test]
    fn test_opponent_threshold_too_high() {
        let errors = validate_league(
            &sample_teams(),
            &sample_divisions(),
            &SeasonCalendar::new(2, 3),
            &sample_rules().with_min_opponents(4),
        )
        .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ConfigErrorKind::OpponentThreshold));
    }

    #[test]
    fn test_opponent_threshold_unreachable_after_rivalries() {
        // 4 games with 3 fixed against the rival leave one spare game:
        // at most 2 distinct opponents, short of the 3 required.
        let errors = validate_league(
            &sample_teams(),
            &sample_divisions(),
            &SeasonCalendar::new(2, 3),
            &sample_rules().with_games_per_team(4),
        )
        .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ConfigErrorKind::OpponentThreshold));
    }

    #[test]
    fn test_degenerate_calendar() {
        let errors = validate_league(
            &sample_teams(),
            &sample_divisions(),
            &SeasonCalendar::new(0, 7),
            &sample_rules(),
        )
        .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ConfigErrorKind::DegenerateCalendar));
    }

    #[test]
    fn test_multiple_errors_reported_together() {
        let mut teams = sample_teams();
        teams[0].venue.lon_deg = f64::INFINITY;
        let mut divisions = sample_divisions();
        divisions.push(Division::new("Ghost", Vec::new()));
        let errors = validate_league(
            &teams,
            &divisions,
            &SeasonCalendar::new(2, 3),
            &sample_rules(),
        )
        .unwrap_err();
        assert!(errors.len() >= 2);
    }
}
