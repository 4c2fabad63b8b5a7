use std::cell::RefCell;

use anyhow::{anyhow, Context};
use referee_calendar_domain::match_detail;
use shared::{MatchDetail, MatchSelection};
use yew::prelude::*;
use yew::AppHandle;

use crate::services::bootstrap;

pub const MODAL_ID: &str = "modalPartido";

thread_local! {
    static MOUNTED_DETAIL: RefCell<Option<AppHandle<MatchDetailView>>> = RefCell::new(None);
}

#[derive(Properties, PartialEq)]
pub struct MatchDetailProps {
    pub detail: MatchDetail,
}

#[function_component(MatchDetailView)]
pub fn match_detail_view(props: &MatchDetailProps) -> Html {
    let detail = &props.detail;
    let (alert_class, alert_icon) = if detail.is_upcoming {
        ("alert alert-info", "fas fa-clock me-2")
    } else {
        ("alert alert-secondary", "fas fa-check-circle me-2")
    };

    html! {
        <div class="detalle-partido">
            <h5 class="text-primary mb-3">
                <i class="fas fa-basketball-ball me-2"></i>
                {&detail.title}
            </h5>

            <div class="row mb-3">
                <div class="col-md-6">
                    <strong><i class="fas fa-calendar me-2"></i>{"Fecha:"}</strong><br/>
                    <span class="text-muted">{&detail.formatted_date}</span>
                </div>
                <div class="col-md-6">
                    <strong><i class="fas fa-clock me-2"></i>{"Hora:"}</strong><br/>
                    <span class="text-muted">{&detail.time}</span>
                </div>
            </div>

            <div class="row mb-3">
                <div class="col-md-12">
                    <strong><i class="fas fa-info-circle me-2"></i>{"Estado:"}</strong>
                    <span class={classes!("badge", detail.status_tag.badge_class(), "ms-2")}>
                        {&detail.status_label}
                    </span>
                </div>
            </div>

            <div class="row mb-3">
                <div class="col-md-6">
                    <strong><i class="fas fa-home me-2"></i>{"Equipo Local:"}</strong><br/>
                    <span class="text-primary">{&detail.home_team}</span>
                </div>
                <div class="col-md-6">
                    <strong><i class="fas fa-plane me-2"></i>{"Equipo Visitante:"}</strong><br/>
                    <span class="text-danger">{&detail.away_team}</span>
                </div>
            </div>

            <div class={alert_class}>
                <i class={alert_icon}></i>
                {&detail.banner}
            </div>
        </div>
    }
}

/// Fill the match modal with `selection` and open it; failures are only logged
pub fn show_match_detail(selection: &MatchSelection) {
    if let Err(e) = try_show_match_detail(selection) {
        log::error!("❌ Could not show match details: {:#}", e);
    }
}

fn try_show_match_detail(selection: &MatchSelection) -> anyhow::Result<()> {
    let detail = match_detail::project(selection)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .context("Document not available")?;
    let modal = document
        .get_element_by_id(MODAL_ID)
        .context("Match modal not found")?;
    let body = modal
        .query_selector(".modal-body")
        .map_err(|e| anyhow!("Failed to query modal body: {:?}", e))?
        .context("Match modal has no body")?;

    MOUNTED_DETAIL.with(|mounted| {
        if let Some(handle) = mounted.borrow_mut().take() {
            handle.destroy();
        }
    });
    body.set_inner_html("");

    let handle = yew::Renderer::<MatchDetailView>::with_root_and_props(body, MatchDetailProps { detail })
        .render();
    MOUNTED_DETAIL.with(|mounted| *mounted.borrow_mut() = Some(handle));

    bootstrap::show_modal(&modal).map_err(|e| anyhow!("Failed to open match modal: {:?}", e))?;
    Ok(())
}
