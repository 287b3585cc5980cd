//! Dashboard intelligence widgets: recommendations, segments, weekly report.

#[cfg(test)]
#[path = "intelligence_test.rs"]
mod intelligence_test;

use leptos::prelude::*;

use crate::components::slot_view::render_slot;
use crate::net::sync::SyncSlot;
use crate::net::types::{Recommendations, Segments, WeeklyReport};

pub const RECOMMENDATIONS_FAILED: &str = "⚠️ Recommendations unavailable.";
pub const SEGMENTS_FAILED: &str = "⚠️ Segments unavailable.";
pub const WEEKLY_REPORT_FAILED: &str = "⚠️ Weekly report unavailable.";

pub fn weekly_trend_icon(trend: &str) -> &'static str {
    match trend {
        "up" => "📈",
        "down" => "📉",
        _ => "➡️",
    }
}

/// `📈 Trend: UP | Best: LinkedIn | Hot Leads: 4`, built from whichever
/// parts the backend sent.
pub fn weekly_meta(report: &WeeklyReport) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(trend) = report.trend.as_deref() {
        parts.push(format!("{} Trend: {}", weekly_trend_icon(trend), trend.to_uppercase()));
    }
    if let Some(platform) = report.best_platform.as_deref() {
        parts.push(format!("Best: {platform}"));
    }
    if let Some(hot) = report.hot_leads {
        parts.push(format!("Hot Leads: {hot}"));
    }
    (!parts.is_empty()).then(|| parts.join(" | "))
}

#[component]
pub fn RecommendationsCard(slot: RwSignal<SyncSlot<Recommendations>>) -> impl IntoView {
    view! {
        <section class="panel recommendations">
            <h3 class="panel__title">"💡 AI Recommendations"</h3>
            {render_slot(slot, |rec| {
                view! {
                    <p class="recommendations__action">{rec.action.clone()}</p>
                    <p class="recommendations__tip">{rec.tip.clone()}</p>
                    <p class="recommendations__platform">
                        <strong>"Best Platform:"</strong>
                        " "
                        {rec.platform.clone()}
                    </p>
                }
                    .into_any()
            })}
        </section>
    }
}

#[component]
pub fn SegmentsCard(slot: RwSignal<SyncSlot<Segments>>) -> impl IntoView {
    view! {
        <section class="panel segments">
            <h3 class="panel__title">"🧩 Lead Segments"</h3>
            {render_slot(slot, |seg| {
                view! {
                    <div class="segments__grid">
                        <div class="segments__cell">
                            <span class="segments__value">{seg.high_value}</span>
                            <span class="segments__label">"High Value"</span>
                        </div>
                        <div class="segments__cell">
                            <span class="segments__value">{seg.high_intent}</span>
                            <span class="segments__label">"High Intent"</span>
                        </div>
                        <div class="segments__cell">
                            <span class="segments__value">{seg.price_sensitive}</span>
                            <span class="segments__label">"Price Sensitive"</span>
                        </div>
                        <div class="segments__cell">
                            <span class="segments__value">{seg.low_intent}</span>
                            <span class="segments__label">"Low Intent"</span>
                        </div>
                    </div>
                }
                    .into_any()
            })}
        </section>
    }
}

#[component]
pub fn WeeklyReportCard(slot: RwSignal<SyncSlot<WeeklyReport>>) -> impl IntoView {
    view! {
        <section class="panel weekly-report">
            <h3 class="panel__title">"📅 Weekly Report"</h3>
            {render_slot(slot, |report| {
                let meta = weekly_meta(report);
                let generated = report.generated_at.clone();
                view! {
                    <p class="weekly-report__summary">{report.summary.clone()}</p>
                    {meta.map(|m| view! { <p class="weekly-report__meta">{m}</p> })}
                    {generated.map(|g| view! { <p class="weekly-report__generated">"Generated " {g}</p> })}
                }
                    .into_any()
            })}
        </section>
    }
}
