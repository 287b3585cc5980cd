//! Pipeline trend badge with risk and opportunity flags from `GET /trends/sales`.

#[cfg(test)]
#[path = "sales_trends_panel_test.rs"]
mod sales_trends_panel_test;

use leptos::prelude::*;

use crate::components::slot_view::render_slot;
use crate::net::sync::SyncSlot;
use crate::net::types::{SalesTrends, TrendFlag};
use crate::util::palette::trend_color;

pub const NO_RISKS_MESSAGE: &str = "No active risks detected";

pub const SALES_TRENDS_FAILED: &str = "⚠️ Could not load sales trends.";

/// A flag flattened for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlagItem {
    pub title: String,
    pub detail: Option<String>,
}

impl From<&TrendFlag> for FlagItem {
    fn from(flag: &TrendFlag) -> Self {
        match flag {
            TrendFlag::Text(text) => Self { title: text.clone(), detail: None },
            TrendFlag::Detail { alert, reason } => Self {
                title: alert.clone(),
                detail: Some(reason.trim()).filter(|r| !r.is_empty()).map(str::to_owned),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RiskView {
    /// Explicit success state when no risks are flagged.
    Clear,
    Flags(Vec<FlagItem>),
}

pub fn risk_view(data: &SalesTrends) -> RiskView {
    if data.risk_flags.is_empty() {
        RiskView::Clear
    } else {
        RiskView::Flags(data.risk_flags.iter().map(FlagItem::from).collect())
    }
}

/// Opportunity entries; empty means the section is not rendered.
pub fn opportunity_items(data: &SalesTrends) -> Vec<FlagItem> {
    data.opportunity_flags.iter().map(FlagItem::from).collect()
}

pub fn trend_reason(data: &SalesTrends) -> Option<&str> {
    data.trend_reason.as_deref().map(str::trim).filter(|r| !r.is_empty())
}

#[component]
pub fn SalesTrendsPanel(slot: RwSignal<SyncSlot<SalesTrends>>) -> impl IntoView {
    view! {
        <section class="panel sales-trends">
            <h3 class="panel__title">"📊 Sales Trends"</h3>
            {render_slot(slot, |data| {
                let color = trend_color(&data.trend);
                let direction = data.trend_direction.clone();
                let reason = trend_reason(data).map(str::to_owned);
                let risks = risk_view(data);
                let opportunities = opportunity_items(data);
                view! {
                    <div class="sales-trends__badge" style=format!("color: {color}")>{direction}</div>
                    {reason.map(|r| view! { <em class="sales-trends__reason">{r}</em> })}
                    {match risks {
                        RiskView::Clear => {
                            view! {
                                <div class="flag-box flag-box--success">
                                    "✅ "
                                    <strong>{NO_RISKS_MESSAGE}</strong>
                                </div>
                            }
                                .into_any()
                        }
                        RiskView::Flags(items) => {
                            view! {
                                <div class="flag-box flag-box--risk">
                                    <strong>"⚠️ Risk Alerts:"</strong>
                                    <ul>{items.into_iter().map(render_flag).collect_view()}</ul>
                                </div>
                            }
                                .into_any()
                        }
                    }}
                    {(!opportunities.is_empty())
                        .then(|| {
                            view! {
                                <div class="flag-box flag-box--opportunity">
                                    <strong>"🎯 Opportunities:"</strong>
                                    <ul>{opportunities.into_iter().map(render_flag).collect_view()}</ul>
                                </div>
                            }
                        })}
                }
                    .into_any()
            })}
        </section>
    }
}

fn render_flag(item: FlagItem) -> impl IntoView {
    match item.detail {
        None => view! { <li>{item.title}</li> }.into_any(),
        Some(detail) => {
            view! {
                <li>
                    <strong>{item.title}</strong>
                    <br/>
                    <em class="flag-box__detail">{detail}</em>
                </li>
            }
                .into_any()
        }
    }
}
