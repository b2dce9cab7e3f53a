//! League scheduling domain models.
//!
//! Core data types for describing a league and its solved schedule:
//! teams with venue coordinates, the division partition, season timing
//! and structure rules, and the extracted `(day, home, away)` games.
//!
//! All topology types are immutable snapshots once constructed —
//! model building and solving never mutate them.

mod calendar;
mod league;
mod rules;
mod schedule;
mod team;

pub use calendar::SeasonCalendar;
pub use league::{Division, League};
pub use rules::ScheduleRules;
pub use schedule::{Game, Schedule};
pub use team::Team;
