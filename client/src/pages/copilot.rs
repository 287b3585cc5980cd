//! Sales copilot page: next best actions, pipeline trends, and alerts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads its three panels once on mount. The dashboard reuses the same slot
//! group and refreshes it after every metrics poll.

use leptos::prelude::*;

use crate::components::alerts_panel::{ALERTS_FAILED, AlertsPanel};
use crate::components::next_actions_panel::{NEXT_ACTIONS_FAILED, NextActionsPanel};
use crate::components::sales_trends_panel::{SALES_TRENDS_FAILED, SalesTrendsPanel};
use crate::net::api::{ApiConfig, endpoints, fetch_alerts, fetch_next_actions, fetch_sales_trends};
use crate::net::sync::{SyncRegistry, SyncSlot, refresh};
use crate::net::types::{Alerts, NextActions, SalesTrends};

/// Slots for the copilot panels.
#[derive(Clone, Copy)]
pub(crate) struct CopilotSlots {
    pub actions: RwSignal<SyncSlot<NextActions>>,
    pub trends: RwSignal<SyncSlot<SalesTrends>>,
    pub alerts: RwSignal<SyncSlot<Alerts>>,
}

impl CopilotSlots {
    pub fn new() -> Self {
        Self {
            actions: RwSignal::new(SyncSlot::default()),
            trends: RwSignal::new(SyncSlot::default()),
            alerts: RwSignal::new(SyncSlot::default()),
        }
    }

    pub fn refresh(self, registry: &SyncRegistry, config: &ApiConfig) {
        let cfg = config.clone();
        refresh(registry, endpoints::NEXT_ACTIONS, self.actions, NEXT_ACTIONS_FAILED, move || async move {
            fetch_next_actions(&cfg).await
        });
        let cfg = config.clone();
        refresh(registry, endpoints::SALES_TRENDS, self.trends, SALES_TRENDS_FAILED, move || async move {
            fetch_sales_trends(&cfg).await
        });
        let cfg = config.clone();
        refresh(registry, endpoints::ALERTS, self.alerts, ALERTS_FAILED, move || async move {
            fetch_alerts(&cfg).await
        });
    }
}

#[component]
pub fn CopilotPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let registry = expect_context::<SyncRegistry>();

    let slots = CopilotSlots::new();
    slots.refresh(&registry, &config);

    view! {
        <div class="page copilot-page">
            <header class="page__header">
                <h1>"🧭 Sales Action Copilot"</h1>
                <p class="page__subtitle">"Prioritized actions, pipeline trends, and risk alerts."</p>
            </header>
            <AlertsPanel slot=slots.alerts/>
            <div class="page__grid">
                <NextActionsPanel slot=slots.actions/>
                <SalesTrendsPanel slot=slots.trends/>
            </div>
        </div>
    }
}
