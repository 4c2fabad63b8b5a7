//! web-sys implementation of the calendar [`RenderPort`].

use std::cell::RefCell;

use anyhow::Context;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use referee_calendar_domain::{CalendarError, RenderPort, StatsDisplay};
use shared::{CellSummary, DayCell, MatchEntry};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::components::match_detail_modal::show_match_detail;
use crate::services::bootstrap;

pub const GRID_CONTAINER_ID: &str = "calendarioGrid";
pub const UPCOMING_COUNTER_ID: &str = "partidosFuturos";
const DAY_CELL_SELECTOR: &str = ".dia-celda";

thread_local! {
    // Click handlers of the match chips currently in the grid
    static MATCH_LISTENERS: RefCell<Vec<EventListener>> = RefCell::new(Vec::new());
}

pub struct DomRenderer {
    document: Document,
    container: Option<Element>,
}

impl DomRenderer {
    pub fn new() -> anyhow::Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .context("Document not available")?;
        let container = document.get_element_by_id(GRID_CONTAINER_ID);

        Ok(Self { document, container })
    }

    fn container(&self) -> Result<&Element, CalendarError> {
        self.container.as_ref().ok_or(CalendarError::ContainerMissing)
    }

    fn create_element(&self, tag: &str) -> Result<Element, CalendarError> {
        self.document
            .create_element(tag)
            .map_err(|e| js_error("create element", e))
    }
}

fn js_error(action: &str, err: JsValue) -> CalendarError {
    CalendarError::Render(format!("{} failed: {:?}", action, err))
}

impl RenderPort for DomRenderer {
    type Cell = Element;

    fn ensure_container(&self) -> Result<(), CalendarError> {
        self.container().map(|_| ())
    }

    fn clear_cells(&mut self) -> Result<(), CalendarError> {
        let cells = self
            .container()?
            .query_selector_all(DAY_CELL_SELECTOR)
            .map_err(|e| js_error("query day cells", e))?;

        for i in 0..cells.length() {
            if let Some(cell) = cells.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                cell.remove();
            }
        }
        MATCH_LISTENERS.with(|listeners| listeners.borrow_mut().clear());
        Ok(())
    }

    fn create_cell(&mut self, day: &DayCell, classes: &str) -> Result<Element, CalendarError> {
        let cell = self.create_element("div")?;
        cell.set_class_name(classes);

        let number = self.create_element("div")?;
        number.set_class_name("dia-numero");
        number.set_text_content(Some(&day.day.to_string()));
        cell.append_child(&number)
            .map_err(|e| js_error("append day number", e))?;

        Ok(cell)
    }

    fn attach_tooltip(&mut self, cell: &mut Element, summary: &CellSummary) -> Result<(), CalendarError> {
        let attributes = [
            ("data-bs-toggle", "tooltip"),
            ("data-bs-placement", "top"),
            ("data-bs-title", summary.tooltip.as_str()),
            ("data-bs-html", "false"),
        ];
        for (name, value) in attributes {
            cell.set_attribute(name, value)
                .map_err(|e| js_error("set tooltip attribute", e))?;
        }
        Ok(())
    }

    fn attach_match(&mut self, cell: &mut Element, entry: MatchEntry) -> Result<(), CalendarError> {
        let item: HtmlElement = self
            .create_element("div")?
            .dyn_into()
            .map_err(|e| js_error("create match item", e.into()))?;
        item.set_class_name(&entry.css_class);
        item.set_text_content(Some(&entry.label));
        item.style()
            .set_property("cursor", "pointer")
            .map_err(|e| js_error("style match item", e))?;

        let selection = entry.selection;
        let listener = EventListener::new(&item, "click", move |event| {
            event.stop_propagation();
            show_match_detail(&selection);
        });
        MATCH_LISTENERS.with(|listeners| listeners.borrow_mut().push(listener));

        cell.append_child(&item)
            .map_err(|e| js_error("append match item", e))?;
        Ok(())
    }

    fn append_cell(&mut self, cell: Element) -> Result<(), CalendarError> {
        self.container()?
            .append_child(&cell)
            .map_err(|e| js_error("append day cell", e))?;
        Ok(())
    }

    fn show_stats(&mut self, stats: &StatsDisplay) {
        let Some(counter) = self.document.get_element_by_id(UPCOMING_COUNTER_ID) else {
            return;
        };
        // The server template normally fills the counter already
        if counter.text_content().as_deref().map(str::trim) == Some("0") {
            counter.set_text_content(Some(&stats.upcoming_matches.to_string()));
        }
    }

    fn refresh_widgets(&mut self) {
        bootstrap::init_tooltips(&self.document);
    }

    fn schedule_widget_refresh(&mut self, delay_ms: u32) {
        Timeout::new(delay_ms, || {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let count = bootstrap::init_tooltips(&document);
            log::info!("💬 Tooltips initialized for {} elements", count);
        })
        .forget();
    }
}
