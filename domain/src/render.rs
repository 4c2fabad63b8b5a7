//! Rendering port and the render pass that drives it.
//!
//! [`CalendarRenderer`] owns no DOM: it validates the request, rebuilds the
//! grid from scratch and pushes every cell through a [`RenderPort`]. The port
//! decides how cells, tooltips and match chips become elements.

use chrono::{Datelike, NaiveDate};
use shared::{CalendarConfig, CalendarGrid, CellSummary, DayCell, GlobalStats, MatchEntry, MonthStats};

use crate::calendar::CalendarGridBuilder;
use crate::error::CalendarError;

/// Delay before tooltip widgets are attached a second time, once layout has settled
pub const WIDGET_SETTLE_DELAY_MS: u32 = 100;

/// Output surface of the calendar (the DOM in the browser, a recorder in tests)
pub trait RenderPort {
    /// Handle to a cell that has been created but not yet added to the grid
    type Cell;

    /// Fail without touching anything when there is nowhere to render
    fn ensure_container(&self) -> Result<(), CalendarError>;

    /// Remove the day cells of the previous render, keeping weekday headers
    fn clear_cells(&mut self) -> Result<(), CalendarError>;

    fn create_cell(&mut self, day: &DayCell, classes: &str) -> Result<Self::Cell, CalendarError>;

    fn attach_tooltip(
        &mut self,
        cell: &mut Self::Cell,
        summary: &CellSummary,
    ) -> Result<(), CalendarError>;

    /// Add a clickable match chip; the entry's selection is what a click reports
    fn attach_match(&mut self, cell: &mut Self::Cell, entry: MatchEntry) -> Result<(), CalendarError>;

    fn append_cell(&mut self, cell: Self::Cell) -> Result<(), CalendarError>;

    fn show_stats(&mut self, stats: &StatsDisplay);

    /// Attach tooltip widgets to the tooltip-marked elements present right now
    fn refresh_widgets(&mut self);

    /// Run [`RenderPort::refresh_widgets`] again after `delay_ms`, against the
    /// elements present when the timer fires
    fn schedule_widget_refresh(&mut self, delay_ms: u32);
}

/// Counters shown next to the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsDisplay {
    pub upcoming_matches: u32,
    pub total_matches: u32,
}

impl StatsDisplay {
    /// A non-zero server aggregate wins over the value counted from the grid
    pub fn resolve(client: MonthStats, server: &GlobalStats) -> Self {
        let pick = |server: u32, client: u32| if server > 0 { server } else { client };
        Self {
            upcoming_matches: pick(server.upcoming_matches, client.upcoming_matches),
            total_matches: pick(server.total_matches, client.total_matches),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutcome {
    pub grid: CalendarGrid,
    pub stats: StatsDisplay,
}

/// Rebuilds the calendar through a [`RenderPort`] on every call
pub struct CalendarRenderer<P: RenderPort> {
    port: P,
    builder: CalendarGridBuilder,
}

impl<P: RenderPort> CalendarRenderer<P> {
    pub fn new(port: P) -> Self {
        Self {
            port,
            builder: CalendarGridBuilder::new(),
        }
    }

    /// Clear and rebuild the grid for the configured month
    pub fn render(
        &mut self,
        config: &CalendarConfig,
        today: NaiveDate,
    ) -> Result<RenderOutcome, CalendarError> {
        // Preconditions are checked before the container is touched
        let first = self
            .builder
            .validate_period(&config.current_year, &config.current_month)?;
        self.port.ensure_container()?;

        self.port.clear_cells()?;

        let grid = self.builder.build(
            first.year(),
            first.month() as i32,
            &config.calendar_data,
            today,
        )?;

        for day in &grid.days {
            let classes = self.builder.cell_classes(day);
            let mut cell = self.port.create_cell(day, &classes)?;

            if let Some(summary) = self.builder.summarize(day) {
                self.port.attach_tooltip(&mut cell, &summary)?;
            }
            for entry in self.builder.match_entries(day) {
                self.port.attach_match(&mut cell, entry)?;
            }

            self.port.append_cell(cell)?;
        }

        let stats = StatsDisplay::resolve(grid.stats, &config.global_stats);
        self.port.show_stats(&stats);

        self.port.refresh_widgets();
        self.port.schedule_widget_refresh(WIDGET_SETTLE_DELAY_MS);

        Ok(RenderOutcome { grid, stats })
    }

    /// Top-level entry: failures are logged and leave the page as it is
    pub fn render_logged(&mut self, config: &CalendarConfig, today: NaiveDate) -> Option<RenderOutcome> {
        match self.render(config, today) {
            Ok(outcome) => {
                log::info!("✅ Calendar rendered with {} cells", outcome.grid.days.len());
                Some(outcome)
            }
            Err(e) => {
                log::error!("❌ Calendar render aborted: {}", e);
                None
            }
        }
    }
}
