//! Market intelligence: demand trend, competition matrix, and channel mix for
//! an industry/region/horizon, drawn as CSS bars.

#[cfg(test)]
#[path = "market_test.rs"]
mod market_test;

use leptos::prelude::*;

use crate::components::form_field::{SelectField, SubmitButton, TextField};
use crate::components::slot_view::render_slot;
use crate::net::api::{ApiConfig, analyze_market_trends, endpoints};
use crate::net::sync::{SyncRegistry, SyncSlot, refresh};
use crate::net::types::{MarketAnalysis, MarketAnalysisRequest, MarketMatrix};

pub const DEFAULT_INDUSTRY: &str = "SaaS";
pub const REGIONS: &[&str] = &["Global", "North America", "Europe", "APAC"];
pub const HORIZONS: &[&str] = &["Mid", "Short", "Long"];

pub const MARKET_FAILED: &str = "Failed to analyze market. Ensure backend is running.";

pub const DEMAND_LABELS: [&str; 6] = ["M1", "M2", "M3", "M4", "M5", "M6"];
/// Demand index axis top.
pub const DEMAND_MAX: f64 = 120.0;
pub const MATRIX_MAX: f64 = 100.0;

const MATRIX_COLORS: [&str; 3] = ["#f43f5e", "#10b981", "#f59e0b"];
const CHANNEL_COLORS: [&str; 3] = ["#0a66c2", "#e1306c", "#facc15"];

pub fn market_analysis_request(industry: &str, region: &str, horizon: &str) -> MarketAnalysisRequest {
    let industry = industry.trim();
    MarketAnalysisRequest {
        industry: if industry.is_empty() { DEFAULT_INDUSTRY } else { industry }.to_owned(),
        region: region.to_owned(),
        time_horizon: horizon.to_owned(),
    }
}

/// Bar height in percent of `max`, clamped to 0..=100.
pub fn bar_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// Demand points paired with their month labels. Extra points are dropped.
pub fn demand_bars(trend: &[f64]) -> Vec<(&'static str, f64)> {
    DEMAND_LABELS.iter().copied().zip(trend.iter().copied()).collect()
}

pub fn matrix_bars(matrix: &MarketMatrix) -> [(&'static str, f64, &'static str); 3] {
    [
        ("Competition", matrix.competition, MATRIX_COLORS[0]),
        ("Opportunity", matrix.opportunity, MATRIX_COLORS[1]),
        ("Saturation", matrix.saturation, MATRIX_COLORS[2]),
    ]
}

/// Channel share of the total, in backend order, with a cycling color.
pub fn channel_shares(channels: &[(String, f64)]) -> Vec<(String, f64, &'static str)> {
    let total: f64 = channels.iter().map(|(_, v)| v.max(0.0)).sum();
    channels
        .iter()
        .enumerate()
        .map(|(i, (name, value))| {
            let share = if total > 0.0 { value.max(0.0) / total * 100.0 } else { 0.0 };
            (name.clone(), share, CHANNEL_COLORS[i % CHANNEL_COLORS.len()])
        })
        .collect()
}

#[component]
pub fn MarketPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let registry = expect_context::<SyncRegistry>();

    let industry = RwSignal::new(String::new());
    let region = RwSignal::new(REGIONS[0].to_owned());
    let horizon = RwSignal::new(HORIZONS[0].to_owned());
    let slot = RwSignal::new(SyncSlot::<MarketAnalysis>::default());

    let analyze = Callback::new(move |()| {
        let req =
            market_analysis_request(&industry.get_untracked(), &region.get_untracked(), &horizon.get_untracked());
        let cfg = config.clone();
        refresh(&registry, endpoints::MARKET_ANALYZE, slot, MARKET_FAILED, move || async move {
            analyze_market_trends(&cfg, &req).await
        });
    });
    analyze.run(());

    view! {
        <div class="page market-page">
            <header class="page__header">
                <h1>"🌐 Market Intelligence"</h1>
                <p class="page__subtitle">"Demand, competition, and channel mix by industry and region."</p>
            </header>
            <section class="panel generator">
                <TextField label="Industry" value=industry placeholder=DEFAULT_INDUSTRY/>
                <SelectField label="Region" value=region options=REGIONS/>
                <SelectField label="Time Horizon" value=horizon options=HORIZONS/>
                <SubmitButton
                    busy=Signal::derive(move || slot.with(|s| s.loading))
                    idle_label="Analyze Market"
                    busy_label="Analyzing..."
                    on_press=analyze
                />
            </section>
            {render_slot(slot, render_analysis)}
        </div>
    }
}

fn render_analysis(analysis: &MarketAnalysis) -> AnyView {
    let demand = demand_bars(&analysis.demand_trend);
    let matrix = matrix_bars(&analysis.market_matrix);
    let channels = channel_shares(&analysis.channels);
    view! {
        <div class="ai-insight market-page__insight">
            "🧠 "
            <b>"AI Insight:"</b>
            <p>{analysis.insight.clone()}</p>
        </div>
        <div class="page__grid">
            <section class="panel">
                <h3 class="panel__title">"📈 Market Demand Index"</h3>
                <div class="bar-chart">
                    {demand
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <div class="bar-chart__column">
                                    <div class="bar-chart__bar" style=format!("height: {:.1}%", bar_percent(value, DEMAND_MAX))></div>
                                    <span class="bar-chart__label">{label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <section class="panel">
                <h3 class="panel__title">"⚖️ Market Matrix"</h3>
                <div class="bar-chart">
                    {matrix
                        .into_iter()
                        .map(|(label, value, color)| {
                            view! {
                                <div class="bar-chart__column">
                                    <div
                                        class="bar-chart__bar"
                                        style=format!("height: {:.1}%; --accent: {color}", bar_percent(value, MATRIX_MAX))
                                    ></div>
                                    <span class="bar-chart__label">{label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <section class="panel">
                <h3 class="panel__title">"📡 Channel Effectiveness"</h3>
                <ul class="channel-mix">
                    {channels
                        .into_iter()
                        .map(|(name, share, color)| {
                            view! {
                                <li class="channel-mix__row">
                                    <span class="channel-mix__name">{name}</span>
                                    <div class="channel-mix__track">
                                        <div class="channel-mix__fill" style=format!("width: {share:.1}%; --accent: {color}")></div>
                                    </div>
                                    <span class="channel-mix__share">{format!("{share:.0}%")}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
    .into_any()
}
