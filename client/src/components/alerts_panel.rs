//! Active pipeline alerts from `GET /alerts`. Hidden when there are none.

#[cfg(test)]
#[path = "alerts_panel_test.rs"]
mod alerts_panel_test;

use leptos::prelude::*;

use crate::net::sync::{SlotView, SyncSlot};
use crate::net::types::Alerts;
use crate::util::palette::alert_level_color;

pub const ALERTS_FAILED: &str = "⚠️ Could not load alerts.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertItem {
    pub message: String,
    pub reason: String,
    pub color: &'static str,
}

pub fn alert_items(data: &Alerts) -> Vec<AlertItem> {
    data.alerts
        .iter()
        .map(|alert| AlertItem {
            message: alert.message.clone(),
            reason: alert.reason.clone(),
            color: alert_level_color(&alert.level),
        })
        .collect()
}

#[component]
pub fn AlertsPanel(slot: RwSignal<SyncSlot<Alerts>>) -> impl IntoView {
    move || {
        slot.with(|s| match s.view() {
            SlotView::Pending => None,
            SlotView::Failed(err) => Some(view! { <p class="panel__error">{err.to_owned()}</p> }.into_any()),
            SlotView::Ready(data) | SlotView::Stale(data, _) => {
                let items = alert_items(data);
                (!items.is_empty()).then(|| {
                    view! {
                        <section class="panel alerts">
                            <strong class="alerts__title">"🚨 Active Alerts:"</strong>
                            {items
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <div class="alerts__item" style=format!("--accent: {}", item.color)>
                                            <div class="alerts__message">{item.message}</div>
                                            <div class="alerts__reason">{item.reason}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </section>
                    }
                        .into_any()
                })
            }
        })
    }
}
