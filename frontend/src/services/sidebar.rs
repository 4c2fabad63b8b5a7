use std::cell::RefCell;

use anyhow::{anyhow, Context};
use gloo::events::{EventListener, EventListenerOptions};
use referee_calendar_domain::navigation::{Navigation, SidebarState};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

const SIDEBAR_ID: &str = "sidebar";
const MENU_TOGGLE_ID: &str = "menu-toggle";
const MENU_CLOSE_ID: &str = "menu-close";
const PAGE_TITLE_ID: &str = "page-title";
const NAV_LINK_SELECTOR: &str = "nav a";
const PAGE_SELECTOR: &str = ".page-content";
const HIDDEN_CLASS: &str = "hidden";
const COLLAPSED_CLASS: &str = "-translate-x-full";

thread_local! {
    static SIDEBAR_STATE: RefCell<SidebarState> = RefCell::new(SidebarState::new());
    static SIDEBAR_LISTENERS: RefCell<Vec<EventListener>> = RefCell::new(Vec::new());
}

/// Wire the sidebar links and the mobile menu buttons
pub fn install(document: &Document) -> anyhow::Result<()> {
    let sidebar = document
        .get_element_by_id(SIDEBAR_ID)
        .context("Sidebar element not found")?;
    let links = document
        .query_selector_all(NAV_LINK_SELECTOR)
        .map_err(|e| anyhow!("Failed to query navigation links: {:?}", e))?;

    let mut listeners = Vec::new();

    for i in 0..links.length() {
        let Some(link) = links.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };

        let document = document.clone();
        let sidebar = sidebar.clone();
        let clicked = link.clone();
        listeners.push(EventListener::new_with_options(
            &link,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let target_page = clicked.get_attribute("data-page");
                let link_text = clicked
                    .query_selector("span")
                    .ok()
                    .flatten()
                    .and_then(|span| span.text_content());

                let navigation = SIDEBAR_STATE.with(|state| {
                    state
                        .borrow_mut()
                        .navigate(target_page.as_deref(), link_text.as_deref(), viewport_width())
                });

                if let Navigation::ShowPage { page_id, title, close_sidebar } = navigation {
                    event.prevent_default();
                    if let Err(e) = show_page(&document, &page_id, title.as_deref()) {
                        log::warn!("⚠️ Navigation to '{}' incomplete: {:#}", page_id, e);
                    }
                    if close_sidebar {
                        sync_sidebar(&sidebar);
                    }
                }
            },
        ));
    }

    match document.get_element_by_id(MENU_TOGGLE_ID) {
        Some(toggle) => {
            let sidebar = sidebar.clone();
            listeners.push(EventListener::new(&toggle, "click", move |_| {
                SIDEBAR_STATE.with(|state| state.borrow_mut().open());
                sync_sidebar(&sidebar);
            }));
        }
        None => log::warn!("⚠️ Menu toggle button not found"),
    }

    match document.get_element_by_id(MENU_CLOSE_ID) {
        Some(close) => {
            let sidebar = sidebar.clone();
            listeners.push(EventListener::new(&close, "click", move |_| {
                SIDEBAR_STATE.with(|state| state.borrow_mut().close());
                sync_sidebar(&sidebar);
            }));
        }
        None => log::warn!("⚠️ Menu close button not found"),
    }

    log::info!("📚 Sidebar navigation ready ({} links)", links.length());
    SIDEBAR_LISTENERS.with(|stored| stored.borrow_mut().extend(listeners));
    Ok(())
}

fn show_page(document: &Document, page_id: &str, title: Option<&str>) -> anyhow::Result<()> {
    let pages = document
        .query_selector_all(PAGE_SELECTOR)
        .map_err(|e| anyhow!("Failed to query pages: {:?}", e))?;
    for i in 0..pages.length() {
        if let Some(page) = pages.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            page.class_list()
                .add_1(HIDDEN_CLASS)
                .map_err(|e| anyhow!("Failed to hide page: {:?}", e))?;
        }
    }

    if let Some(active) = document.get_element_by_id(page_id) {
        active
            .class_list()
            .remove_1(HIDDEN_CLASS)
            .map_err(|e| anyhow!("Failed to show page: {:?}", e))?;
        if let (Some(title), Some(title_el)) = (title, document.get_element_by_id(PAGE_TITLE_ID)) {
            title_el.set_text_content(Some(title));
        }
    }

    SIDEBAR_STATE.with(|state| {
        if let Some(active) = state.borrow().active_page() {
            log::debug!("📄 Showing page '{}'", active);
        }
    });
    Ok(())
}

/// Collapse or expand the sidebar element to match the navigation state
fn sync_sidebar(sidebar: &Element) {
    let open = SIDEBAR_STATE.with(|state| state.borrow().is_open());
    let result = if open {
        sidebar.class_list().remove_1(COLLAPSED_CLASS)
    } else {
        sidebar.class_list().add_1(COLLAPSED_CLASS)
    };
    if let Err(e) = result {
        log::warn!("⚠️ Could not update sidebar: {:?}", e);
    }
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(f64::MAX)
}
