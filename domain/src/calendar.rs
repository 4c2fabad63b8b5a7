//! Calendar grid generation for the referee match calendar.
//!
//! Builds a month as complete Sunday-first weeks, attaches the server's
//! matches to the days of the displayed month and derives everything the
//! view needs per cell: CSS classes, tooltip summary and clickable match
//! entries. Padding days from the adjacent months never carry matches.

use chrono::{Datelike, NaiveDate};
use shared::{
    date_key, CalendarData, CalendarDayType, CalendarGrid, CellState, CellSummary, DayCell,
    MatchEntry, MatchSelection, MonthStats, PeriodValue,
};

use crate::error::CalendarError;

/// Earliest year the calendar accepts
pub const MIN_YEAR: i32 = 2000;

/// Builds calendar grids and per-cell view data
#[derive(Debug, Clone, Default)]
pub struct CalendarGridBuilder;

impl CalendarGridBuilder {
    /// Create a new CalendarGridBuilder instance
    pub fn new() -> Self {
        Self
    }

    /// Check the requested month and return its first day
    pub fn validate(&self, year: i32, month: i32) -> Result<NaiveDate, CalendarError> {
        if year < MIN_YEAR {
            return Err(CalendarError::InvalidYear(year));
        }
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }

        let month = month as u32;
        NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(CalendarError::UnrepresentableDate { year, month })
    }

    /// Check the year and month exactly as the host page supplied them
    pub fn validate_period(
        &self,
        year: &PeriodValue,
        month: &PeriodValue,
    ) -> Result<NaiveDate, CalendarError> {
        let year = period_number("currentYear", year)?;
        let month = period_number("currentMonth", month)?;
        self.validate(year, month)
    }

    /// Last day of the month, i.e. "day 0" of the following month
    pub fn last_day_of_month(&self, year: i32, month: u32) -> Option<NaiveDate> {
        let (next_year, next_month) = if month == 12 {
            (year.checked_add(1)?, 1)
        } else {
            (year, month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
    }

    /// Get the number of days in a given month and year
    pub fn days_in_month(&self, year: i32, month: u32) -> Option<u32> {
        self.last_day_of_month(year, month).map(|d| d.day())
    }

    /// Get the first day of month (0 = Sunday, 1 = Monday, etc.)
    pub fn first_day_of_month(&self, first: NaiveDate) -> u32 {
        first.weekday().num_days_from_sunday()
    }

    /// Generate the grid for `year`/`month`, marking `today` if it falls inside it
    pub fn build(
        &self,
        year: i32,
        month: i32,
        data: &CalendarData,
        today: NaiveDate,
    ) -> Result<CalendarGrid, CalendarError> {
        let first = self.validate(year, month)?;
        let month = first.month();
        let days_in_month = self
            .days_in_month(year, month)
            .ok_or(CalendarError::UnrepresentableDate { year, month })?;
        let first_weekday = self.first_day_of_month(first);

        if data.rejected_matches > 0 {
            log::warn!(
                "⚠️ Skipped {} malformed match records for {:02}/{}",
                data.rejected_matches,
                month,
                year
            );
        }

        log::info!(
            "🗓️ Generating calendar for {:02}/{}: {} days, first weekday {}",
            month,
            year,
            days_in_month,
            first_weekday
        );

        let mut days = Vec::with_capacity(42);
        let mut stats = MonthStats::default();

        if first_weekday > 0 {
            let previous_month_days = first
                .pred_opt()
                .map(|d| d.day())
                .ok_or(CalendarError::UnrepresentableDate { year, month })?;

            log::debug!("🗓️ Adding {} days from the previous month", first_weekday);
            for offset in (0..first_weekday).rev() {
                days.push(padding_day(
                    previous_month_days - offset,
                    CalendarDayType::PaddingBefore,
                ));
            }
        }

        for day in 1..=days_in_month {
            let date = first
                .with_day(day)
                .ok_or(CalendarError::UnrepresentableDate { year, month })?;
            let key = date_key(date);
            let matches = data.matches_for(&key).to_vec();

            stats.total_matches += matches.len() as u32;
            stats.upcoming_matches += matches.iter().filter(|m| m.is_upcoming).count() as u32;

            days.push(DayCell {
                day,
                day_type: CalendarDayType::MonthDay,
                is_today: date == today,
                matches,
                date_key: key,
            });
        }

        // Complete the last week with the start of the next month
        let trailing = (7 - days.len() % 7) % 7;
        if trailing > 0 {
            log::debug!("🗓️ Adding {} days from the next month", trailing);
        }
        for day in 1..=trailing as u32 {
            days.push(padding_day(day, CalendarDayType::PaddingAfter));
        }

        log::info!(
            "🗓️ Calendar generated: {} cells, {} matches ({} upcoming)",
            days.len(),
            stats.total_matches,
            stats.upcoming_matches
        );

        Ok(CalendarGrid {
            year,
            month,
            first_day_of_week: first_weekday,
            days,
            stats,
        })
    }

    /// Highlight state of a day, `None` for padding days and days without matches
    pub fn classify(&self, cell: &DayCell) -> Option<CellState> {
        if cell.is_outside_month() || cell.matches.is_empty() {
            return None;
        }

        let has_upcoming = cell.matches.iter().any(|m| m.is_upcoming);
        let has_past = cell.matches.iter().any(|m| !m.is_upcoming);

        Some(match (has_upcoming, has_past) {
            (true, true) => CellState::Mixed,
            (true, false) => CellState::UpcomingOnly,
            _ => CellState::PastOnly,
        })
    }

    /// Tooltip summary for a classified day
    pub fn summarize(&self, cell: &DayCell) -> Option<CellSummary> {
        let state = self.classify(cell)?;
        let count = cell.matches.len();

        let mut tooltip = format!("{} partido{}:\n", count, if count > 1 { "s" } else { "" });
        for fixture in &cell.matches {
            tooltip.push_str(&format!(
                "• {} - {} ({})\n",
                fixture.start_time,
                fixture.matchup(),
                fixture.status
            ));
        }

        Some(CellSummary {
            state,
            tooltip: tooltip.trim_end().to_string(),
        })
    }

    /// Space-separated CSS classes for a day cell
    pub fn cell_classes(&self, cell: &DayCell) -> String {
        let mut classes = vec!["dia-celda"];
        if cell.is_outside_month() {
            classes.push("dia-otro-mes");
        }
        if cell.is_today {
            classes.push("dia-hoy");
        }
        if let Some(state) = self.classify(cell) {
            classes.push(state.css_class());
        }
        classes.join(" ")
    }

    /// Clickable match chips for a day, each carrying its own selection
    pub fn match_entries(&self, cell: &DayCell) -> Vec<MatchEntry> {
        if cell.is_outside_month() {
            return Vec::new();
        }

        cell.matches
            .iter()
            .map(|fixture| MatchEntry {
                label: format!("{} - {}", fixture.start_time, fixture.matchup()),
                css_class: if fixture.is_upcoming {
                    "partido-item".to_string()
                } else {
                    "partido-item partido-pasado".to_string()
                },
                selection: MatchSelection {
                    date_key: cell.date_key.clone(),
                    fixture: fixture.clone(),
                },
            })
            .collect()
    }
}

fn period_number(field: &'static str, value: &PeriodValue) -> Result<i32, CalendarError> {
    match value {
        PeriodValue::Number(n) => i32::try_from(*n).map_err(|_| CalendarError::InvalidValue {
            field,
            value: n.to_string(),
        }),
        other => Err(CalendarError::InvalidValue {
            field,
            value: other.to_string(),
        }),
    }
}

fn padding_day(day: u32, day_type: CalendarDayType) -> DayCell {
    DayCell {
        day,
        day_type,
        is_today: false,
        matches: Vec::new(),
        date_key: String::new(),
    }
}
