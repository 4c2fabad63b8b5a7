mod components;
mod services;

use std::cell::RefCell;

use gloo::events::EventListener;
use gloo::timers::future::TimeoutFuture;
use referee_calendar_domain::{resolve_config, CalendarRenderer};
use shared::CalendarConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use services::config_source::WindowConfigSource;
use services::date_utils::today;
use services::dom_renderer::DomRenderer;
use services::logging::Logger;

thread_local! {
    // Configuration resolved at start-up, reused by explicit re-renders
    static ACTIVE_CONFIG: RefCell<Option<CalendarConfig>> = RefCell::new(None);
}

/// Rebuild the calendar grid from the resolved configuration
#[wasm_bindgen(js_name = renderCalendar)]
pub fn render_calendar() {
    let Some(config) = ACTIVE_CONFIG.with(|active| active.borrow().clone()) else {
        log::warn!("⚠️ Calendar configuration not resolved yet, skipping render");
        return;
    };

    match DomRenderer::new() {
        Ok(port) => {
            CalendarRenderer::new(port).render_logged(&config, today());
        }
        Err(e) => log::error!("❌ Calendar render aborted: {:#}", e),
    }
}

fn start(document: &web_sys::Document) {
    log::info!("🚀 DOM loaded, starting calendar page");

    if let Err(e) = services::sidebar::install(document) {
        log::warn!("⚠️ Sidebar navigation disabled: {:#}", e);
    }

    spawn_local(async {
        let resolved = match resolve_config(&WindowConfigSource, today(), TimeoutFuture::new).await {
            Ok(resolved) => resolved,
            Err(e) => {
                log::error!("❌ Calendar not rendered: {}", e);
                return;
            }
        };
        log::info!(
            "🗓️ Calendar for referee {} ({}), {}/{}",
            resolved.config.referee_id,
            resolved.config.referee_name,
            resolved.config.current_month,
            resolved.config.current_year
        );

        ACTIVE_CONFIG.with(|active| *active.borrow_mut() = Some(resolved.config));
        render_calendar();
    });
}

fn main() {
    Logger::init(log::LevelFilter::Info);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("❌ No document available, calendar not started");
        return;
    };

    if document.ready_state() == "loading" {
        let ready = document.clone();
        EventListener::once(&document, "DOMContentLoaded", move |_| start(&ready)).forget();
    } else {
        start(&document);
    }
}
