//! Deal tools: pick a lead, then ask for a closing strategy or a follow-up
//! plan.

#[cfg(test)]
#[path = "deal_tools_test.rs"]
mod deal_tools_test;

use leptos::prelude::*;

use crate::components::form_field::SubmitButton;
use crate::components::output_card::OutputField;
use crate::components::slot_view::render_slot;
use crate::net::api::{ApiConfig, deal_assist, endpoints, fetch_leads, followup_plan};
use crate::net::error::advisory_failure_message;
use crate::net::sync::{Failure, SyncRegistry, SyncSlot, refresh};
use crate::net::types::{DealStrategy, FollowupPlan, LeadList, LeadSummary};
use crate::util::palette::severity_color;

pub const LEADS_FAILED: &str = "❌ Failed to load leads. Ensure backend is running.";

/// Lead picker state. `Cleared` means the user went back to the placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    Untouched,
    Selected(i64),
    Cleared,
}

impl Selection {
    pub fn lead_id(self) -> Option<i64> {
        match self {
            Self::Selected(id) => Some(id),
            Self::Untouched | Self::Cleared => None,
        }
    }
}

pub fn lead_option_label(lead: &LeadSummary) -> String {
    format!("Lead #{} — {} — Score {}", lead.id, lead.category, lead.score)
}

/// Selector value to selection. The placeholder option has an empty value.
pub fn parse_selection(raw: &str) -> Selection {
    raw.trim().parse::<i64>().map_or(Selection::Cleared, Selection::Selected)
}

/// Status line under the selector. `None` while the list is still loading.
pub fn lead_status(leads: Option<&LeadList>, failed: bool, selection: Selection) -> Option<String> {
    if failed && leads.is_none() {
        return Some(LEADS_FAILED.to_owned());
    }
    let leads = leads?;
    if leads.leads.is_empty() {
        return Some("⚠️ No leads found. Generate leads first.".to_owned());
    }
    Some(match selection {
        Selection::Untouched => format!("✅ {} leads available", leads.leads.len()),
        Selection::Selected(id) => format!("✅ Lead #{id} selected"),
        Selection::Cleared => "⚠️ Please select a lead".to_owned(),
    })
}

/// `day 3` → `DAY 3`.
pub fn day_label(day: &str) -> String {
    day.to_uppercase()
}

#[component]
pub fn DealToolsPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let registry = expect_context::<SyncRegistry>();

    let leads = RwSignal::new(SyncSlot::<LeadList>::default());
    let selection = RwSignal::new(Selection::Untouched);
    let deal = RwSignal::new(SyncSlot::<DealStrategy>::default());
    let followup = RwSignal::new(SyncSlot::<FollowupPlan>::default());

    let cfg = config.clone();
    refresh(&registry, endpoints::LEADS, leads, LEADS_FAILED, move || async move { fetch_leads(&cfg).await });

    let no_lead = Signal::derive(move || selection.get().lead_id().is_none());

    let on_deal = {
        let config = config.clone();
        let registry = registry.clone();
        Callback::new(move |()| {
            let Some(lead_id) = selection.get_untracked().lead_id() else { return };
            let cfg = config.clone();
            refresh(
                &registry,
                endpoints::DEAL_ASSIST,
                deal,
                Failure::Describe(advisory_failure_message),
                move || async move { deal_assist(&cfg, lead_id).await },
            );
        })
    };

    let on_followup = Callback::new(move |()| {
        let Some(lead_id) = selection.get_untracked().lead_id() else { return };
        let cfg = config.clone();
        refresh(
            &registry,
            endpoints::FOLLOWUP_PLAN,
            followup,
            Failure::Describe(advisory_failure_message),
            move || async move { followup_plan(&cfg, lead_id).await },
        );
    });

    let status = move || {
        leads.with(|slot| lead_status(slot.data.as_ref(), slot.error.is_some(), selection.get()))
    };

    view! {
        <div class="page deal-tools-page">
            <header class="page__header">
                <h1>"🤝 Deal Tools"</h1>
                <p class="page__subtitle">"Closing strategy and follow-up plans for a scored lead."</p>
            </header>
            <section class="panel">
                <label class="form-field">
                    <span class="form-field__label">"Lead"</span>
                    <select class="form-field__input" on:change=move |ev| selection.set(parse_selection(&event_target_value(&ev)))>
                        <option value="">"Select a lead..."</option>
                        {move || {
                            leads
                                .with(|slot| slot.data.as_ref().map(|list| list.leads.clone()).unwrap_or_default())
                                .into_iter()
                                .map(|lead| {
                                    let label = lead_option_label(&lead);
                                    view! { <option value=lead.id.to_string()>{label}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
                <p class="panel__muted">{status}</p>
            </section>
            <div class="page__grid">
                <section class="panel generator">
                    <h3 class="panel__title">"💼 Deal Assist"</h3>
                    <SubmitButton
                        busy=Signal::derive(move || deal.with(|s| s.loading))
                        idle_label="Get Closing Strategy"
                        busy_label="Analyzing..."
                        on_press=on_deal
                        disabled=no_lead
                    />
                    <div class="output-card">{render_slot(deal, render_deal)}</div>
                </section>
                <section class="panel generator">
                    <h3 class="panel__title">"📅 Follow-up Plan"</h3>
                    <SubmitButton
                        busy=Signal::derive(move || followup.with(|s| s.loading))
                        idle_label="Build Follow-up Plan"
                        busy_label="Analyzing..."
                        on_press=on_followup
                        disabled=no_lead
                    />
                    <div class="output-card">{render_slot(followup, render_followup)}</div>
                </section>
            </div>
        </div>
    }
}

fn render_deal(deal: &DealStrategy) -> AnyView {
    let urgency_color = severity_color(&deal.urgency_level);
    view! {
        <h4>{format!("🎯 {}", deal.closing_strategy)}</h4>
        <OutputField label="💰 Discount Range:" value=deal.discount_range.clone()/>
        <OutputField label="🎯 Objection Focus:" value=deal.objection_focus.clone()/>
        <div class="output-card__field">
            <strong>"⚡ Urgency:"</strong>
            " "
            <span class="output-card__accent" style=format!("color: {urgency_color}")>
                {deal.urgency_level.clone()}
            </span>
        </div>
        <OutputField label="💡 Reasoning:" value=deal.explanation.clone()/>
    }
    .into_any()
}

fn render_followup(plan: &FollowupPlan) -> AnyView {
    view! {
        <p class="output-card__meta">{format!("Lead Category: {} | Score: {}/100", plan.category, plan.score)}</p>
        <ol class="followup-steps">
            {plan
                .plan
                .iter()
                .map(|(day, action)| {
                    view! {
                        <li>
                            <strong>{format!("{}:", day_label(day))}</strong>
                            " "
                            {action.clone()}
                        </li>
                    }
                })
                .collect_view()}
        </ol>
        <InsightNote note=plan.note.clone()/>
    }
    .into_any()
}

#[component]
fn InsightNote(note: String) -> impl IntoView {
    (!note.is_empty()).then(|| view! { <p class="output-card__note">{format!("💡 {note}")}</p> })
}
