//! Ranked "next best action" list from `GET /actions/next`.

#[cfg(test)]
#[path = "next_actions_panel_test.rs"]
mod next_actions_panel_test;

use leptos::prelude::*;

use crate::components::slot_view::render_slot;
use crate::net::sync::SyncSlot;
use crate::net::types::NextActions;
use crate::util::palette::category_color;

/// Shown when the backend returns no actions and no explanation.
pub const NO_ACTIONS_MESSAGE: &str = "No actions available. Add leads to see prioritized recommendations.";

pub const NEXT_ACTIONS_FAILED: &str = "⚠️ Could not load next actions.";

/// One rendered action.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionCard {
    pub rank: usize,
    pub heading: String,
    pub badge: String,
    pub color: &'static str,
    pub action: String,
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum NextActionsView {
    /// Single empty-state line instead of an empty list.
    Empty(String),
    Ranked(Vec<ActionCard>),
}

pub fn next_actions_view(data: &NextActions) -> NextActionsView {
    if data.actions.is_empty() {
        let message = data.message.as_deref().map(str::trim).filter(|m| !m.is_empty()).unwrap_or(NO_ACTIONS_MESSAGE);
        return NextActionsView::Empty(format!("📭 {message}"));
    }
    let cards = data
        .actions
        .iter()
        .enumerate()
        .map(|(i, item)| ActionCard {
            rank: i + 1,
            heading: format!("Lead #{}", item.lead_id),
            badge: format!("{} • {}", item.category, item.score),
            color: category_color(&item.category),
            action: item.action.clone(),
            reason: item.reason.clone(),
        })
        .collect();
    NextActionsView::Ranked(cards)
}

#[component]
pub fn NextActionsPanel(slot: RwSignal<SyncSlot<NextActions>>) -> impl IntoView {
    view! {
        <section class="panel next-actions">
            <h3 class="panel__title">"🎯 Next Best Actions"</h3>
            {render_slot(slot, |data| match next_actions_view(data) {
                NextActionsView::Empty(message) => {
                    view! { <div class="card next-actions__empty">{message}</div> }.into_any()
                }
                NextActionsView::Ranked(cards) => cards.into_iter().map(render_card).collect_view().into_any(),
            })}
        </section>
    }
}

fn render_card(card: ActionCard) -> impl IntoView {
    view! {
        <div class="card next-actions__card" style=format!("--accent: {}", card.color)>
            <span class="next-actions__rank">{card.rank}</span>
            <div class="next-actions__heading">
                {card.heading}
                " "
                <span class="next-actions__badge">{card.badge}</span>
            </div>
            <div class="next-actions__action">{card.action}</div>
            <div class="next-actions__reason">"💡 " {card.reason}</div>
        </div>
    }
}
