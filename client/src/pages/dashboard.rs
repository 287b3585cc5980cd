//! Dashboard page: live pipeline metrics plus intelligence and copilot widgets.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It polls `/dashboard` every few seconds and,
//! after each successful poll, refreshes every widget below the metrics.
//! Widgets fail independently of each other and of the metrics.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::alerts_panel::AlertsPanel;
use crate::components::data_source_badge::DataSourceBadge;
use crate::components::intelligence::{
    RECOMMENDATIONS_FAILED, RecommendationsCard, SEGMENTS_FAILED, SegmentsCard, WEEKLY_REPORT_FAILED,
    WeeklyReportCard,
};
use crate::components::next_actions_panel::NextActionsPanel;
use crate::components::sales_trends_panel::SalesTrendsPanel;
use crate::components::score_bar::ScoreBar;
use crate::net::api::{
    ApiConfig, endpoints, fetch_dashboard, fetch_recommendations, fetch_segments, fetch_weekly_report,
};
use crate::net::error::BACKEND_OFFLINE_MESSAGE;
use crate::net::sync::{
    DASHBOARD_POLL_INTERVAL_MS, SlotView, SyncRegistry, SyncSlot, poll, refresh, refresh_then,
};
use crate::net::types::{DashboardMetrics, DashboardResponse, Recommendations, Segments, WeeklyReport};
use crate::pages::copilot::CopilotSlots;
use crate::state::counters::CountersState;

/// Color tone of a trend line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Muted,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "trend trend--success",
            Self::Warning => "trend trend--warning",
            Self::Muted => "trend trend--muted",
        }
    }
}

/// Campaigns above this count read as high activity.
const HIGH_ACTIVITY_CAMPAIGNS: i64 = 5;

/// Hot/total ratio above this reads as high conversion potential.
const HOT_RATIO_THRESHOLD: f64 = 0.3;

pub fn campaign_activity(total_campaigns: i64) -> (&'static str, Tone) {
    if total_campaigns > HIGH_ACTIVITY_CAMPAIGNS {
        ("📈 High Activity Volume", Tone::Success)
    } else {
        ("🟡 Moderate Activity", Tone::Muted)
    }
}

#[allow(clippy::cast_precision_loss)]
pub fn hot_lead_trend(hot_leads: i64, total_leads: i64) -> (&'static str, Tone) {
    if total_leads <= 0 {
        return ("Waiting for data...", Tone::Muted);
    }
    if hot_leads as f64 / total_leads as f64 > HOT_RATIO_THRESHOLD {
        ("🔥 High Conversion Potential", Tone::Success)
    } else {
        ("❄️ Needs Better Targeting", Tone::Warning)
    }
}

/// Backend quality trend when present, else a bucket of the average score.
pub fn quality_trend(metrics: &DashboardMetrics) -> String {
    if let Some(trend) = metrics.lead_quality_trend.as_deref().filter(|t| !t.is_empty()) {
        let icon = match trend {
            "Improving" => "📈",
            "Declining" => "📉",
            _ => "➡️",
        };
        return format!("{icon} {trend}");
    }
    let label = if metrics.avg_lead_score > 70.0 {
        "✅ Premium Lead Quality"
    } else if metrics.avg_lead_score > 40.0 {
        "⚠️ Mixed Lead Quality"
    } else {
        "🔻 Low Quality Detect"
    };
    label.to_owned()
}

pub fn quality_label(avg_lead_score: f64) -> String {
    format!("{avg_lead_score}%")
}

/// Slots for the intelligence widgets under the metrics.
#[derive(Clone, Copy)]
struct IntelligenceSlots {
    recommendations: RwSignal<SyncSlot<Recommendations>>,
    segments: RwSignal<SyncSlot<Segments>>,
    weekly: RwSignal<SyncSlot<WeeklyReport>>,
}

impl IntelligenceSlots {
    fn new() -> Self {
        Self {
            recommendations: RwSignal::new(SyncSlot::default()),
            segments: RwSignal::new(SyncSlot::default()),
            weekly: RwSignal::new(SyncSlot::default()),
        }
    }

    fn refresh(self, registry: &SyncRegistry, config: &ApiConfig) {
        let cfg = config.clone();
        refresh(registry, endpoints::RECOMMENDATIONS, self.recommendations, RECOMMENDATIONS_FAILED, move || async move {
            fetch_recommendations(&cfg).await
        });
        let cfg = config.clone();
        refresh(registry, endpoints::SEGMENTS, self.segments, SEGMENTS_FAILED, move || async move {
            fetch_segments(&cfg).await
        });
        let cfg = config.clone();
        refresh(registry, endpoints::WEEKLY_REPORT, self.weekly, WEEKLY_REPORT_FAILED, move || async move {
            fetch_weekly_report(&cfg).await
        });
    }
}

/// Dashboard page. Polls metrics until unmounted.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let registry = expect_context::<SyncRegistry>();
    let counters = expect_context::<RwSignal<CountersState>>();

    let dashboard = RwSignal::new(SyncSlot::<DashboardResponse>::default());
    let intelligence = IntelligenceSlots::new();
    let copilot = CopilotSlots::new();

    poll(DASHBOARD_POLL_INTERVAL_MS, move || {
        let cfg = config.clone();
        let widgets_cfg = config.clone();
        let widgets_registry = registry.clone();
        refresh_then(
            &registry,
            endpoints::DASHBOARD,
            dashboard,
            BACKEND_OFFLINE_MESSAGE,
            move || async move { fetch_dashboard(&cfg).await },
            move |_: &DashboardResponse| {
                intelligence.refresh(&widgets_registry, &widgets_cfg);
                copilot.refresh(&widgets_registry, &widgets_cfg);
            },
        );
    });

    let metrics = move || dashboard.with(|s| s.data.as_ref().map(|d| d.metrics.clone()));
    let counter = move |pick: fn(&DashboardMetrics) -> String| metrics().map_or_else(|| "—".to_owned(), |m| pick(&m));
    let avg_score = Signal::derive(move || metrics().map_or(0.0, |m| m.avg_lead_score));

    let campaign_line = move || {
        dashboard.with(|s| match s.view() {
            SlotView::Pending => ("Loading...".to_owned(), Tone::Muted),
            SlotView::Failed(err) | SlotView::Stale(_, err) => (err.to_owned(), Tone::Warning),
            SlotView::Ready(d) => {
                let (text, tone) = campaign_activity(d.metrics.total_campaigns);
                (text.to_owned(), tone)
            }
        })
    };
    let hot_line = move || metrics().map(|m| hot_lead_trend(m.hot_leads, m.total_leads));
    let quality_line = move || metrics().map(|m| quality_trend(&m));

    view! {
        <div class="page dashboard-page">
            <header class="page__header">
                <h1>"📊 Sales Dashboard"</h1>
                {move || {
                    dashboard
                        .with(|s| s.data.as_ref().map(|d| d.data_source.clone()))
                        .map(|source| view! { <DataSourceBadge source=source/> })
                }}
            </header>

            <div class="dashboard-page__counters">
                <div class="stat-card">
                    <span class="stat-card__label">"Campaigns"</span>
                    <span class="stat-card__value">{move || counter(|m| m.total_campaigns.to_string())}</span>
                    {move || {
                        let (text, tone) = campaign_line();
                        view! { <span class=tone.class()>{text}</span> }
                    }}
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Leads"</span>
                    <span class="stat-card__value">{move || counter(|m| m.total_leads.to_string())}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Hot Leads"</span>
                    <span class="stat-card__value">{move || counter(|m| m.hot_leads.to_string())}</span>
                    {move || hot_line().map(|(text, tone)| view! { <span class=tone.class()>{text}</span> })}
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Lead Quality"</span>
                    <span class="stat-card__value">{move || counter(|m| quality_label(m.avg_lead_score))}</span>
                    {move || quality_line().map(|text| view! { <span class=Tone::Muted.class()>{text}</span> })}
                </div>
            </div>

            <ScoreBar score=avg_score/>

            {move || {
                metrics()
                    .and_then(|m| m.best_platform)
                    .map(|platform| {
                        view! {
                            <p class="dashboard-page__platform">
                                "🏆 Best Platform: "
                                <strong>{platform}</strong>
                            </p>
                        }
                    })
            }}

            <section class="panel local-activity">
                <h3 class="panel__title">"🗂️ This Browser"</h3>
                <p>
                    {move || {
                        counters
                            .with(|c| {
                                format!(
                                    "{} campaigns generated · {} leads scored · {} hot · avg score {:.1}",
                                    c.campaigns,
                                    c.leads_scored,
                                    c.hot_leads,
                                    c.average_score(),
                                )
                            })
                    }}
                </p>
            </section>

            <AlertsPanel slot=copilot.alerts/>
            <div class="page__grid">
                <RecommendationsCard slot=intelligence.recommendations/>
                <SegmentsCard slot=intelligence.segments/>
                <WeeklyReportCard slot=intelligence.weekly/>
            </div>
            <div class="page__grid">
                <NextActionsPanel slot=copilot.actions/>
                <SalesTrendsPanel slot=copilot.trends/>
            </div>
        </div>
    }
}
