//! Console-style schedule reporting.
//!
//! Formats an extracted schedule as a day-ordered `Away @ Home` table
//! and renders per-team travel summaries. Pure string building — the
//! caller decides where the text goes.

use std::fmt::Write;

use crate::models::Schedule;

/// Renders the schedule as a day-ordered table.
///
/// One row per game: day index, visiting team, hosting team. When the
/// schedule is a best incumbent rather than a proven optimum, a label
/// line says so under the header.
pub fn format_schedule(schedule: &Schedule) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>4}   {:25} @ {}", "Day", "Away", "Home");
    let _ = writeln!(out, "{}", "-".repeat(60));
    if !schedule.proven_optimal {
        let _ = writeln!(out, "(best found, not proven optimal)");
    }
    for game in &schedule.games {
        let _ = writeln!(out, "{:>4}   {:25} @ {}", game.day, game.away, game.home);
    }
    out
}

/// Renders a one-line travel summary with one decimal of precision.
pub fn format_travel_summary(team: &str, miles: f64) -> String {
    format!("Total distance traveled by {team}: {miles:.1} miles")
}
