//! Season calendar model.
//!
//! The season is a sequence of integer day indices `[0, num_days)`
//! laid out as `num_weeks * days_per_week`. The weekly game cap is
//! enforced over *windows* whose width may differ from the day-layout
//! stride: window `w` covers days
//! `[w * week_window_days, min((w + 1) * week_window_days, num_days))`.
//!
//! When the window width is smaller than the stride, tail days of the
//! season fall outside every window and are exempt from the weekly
//! cap. The calendar reports such days via [`SeasonCalendar::uncovered_days`]
//! rather than reconciling the two parameters silently; league
//! construction logs a warning when a mismatch is configured.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Season timing parameters.
///
/// Half-open day ranges throughout: a window includes its start day
/// and excludes its end day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonCalendar {
    /// Number of weeks in the season.
    pub num_weeks: usize,
    /// Day-layout stride: days allocated per week.
    pub days_per_week: usize,
    /// Width of the weekly-cap window in days.
    pub week_window_days: usize,
}

impl SeasonCalendar {
    /// Creates a calendar whose cap window equals the day stride.
    pub fn new(num_weeks: usize, days_per_week: usize) -> Self {
        Self {
            num_weeks,
            days_per_week,
            week_window_days: days_per_week,
        }
    }

    /// Overrides the weekly-cap window width.
    ///
    /// A width narrower than `days_per_week` leaves tail days of the
    /// season uncovered by any cap window; see [`Self::uncovered_days`].
    pub fn with_week_window(mut self, days: usize) -> Self {
        self.week_window_days = days;
        self
    }

    /// Total number of days in the season.
    #[inline]
    pub fn num_days(&self) -> usize {
        self.num_weeks * self.days_per_week
    }

    /// All day indices, in order.
    #[inline]
    pub fn days(&self) -> Range<usize> {
        0..self.num_days()
    }

    /// All week indices.
    #[inline]
    pub fn weeks(&self) -> Range<usize> {
        0..self.num_weeks
    }

    /// The day window of week `w`, clamped to the season end.
    ///
    /// May be empty when the window start already exceeds `num_days`.
    pub fn week_window(&self, w: usize) -> Range<usize> {
        let start = (w * self.week_window_days).min(self.num_days());
        let end = ((w + 1) * self.week_window_days).min(self.num_days());
        start..end
    }

    /// Days covered by no weekly-cap window.
    ///
    /// Non-empty iff `num_weeks * week_window_days < num_days`.
    pub fn uncovered_days(&self) -> Range<usize> {
        let covered = (self.num_weeks * self.week_window_days).min(self.num_days());
        covered..self.num_days()
    }

    /// Whether the cap window width differs from the day stride.
    #[inline]
    pub fn has_window_mismatch(&self) -> bool {
        self.week_window_days != self.days_per_week
    }
}
