//! Campaign prediction: engagement and conversion odds for a platform/goal
//! pair, with the inputs the backend used.

#[cfg(test)]
#[path = "prediction_test.rs"]
mod prediction_test;

use leptos::prelude::*;

use crate::components::data_source_badge::DataSourceBadge;
use crate::components::form_field::{SelectField, SubmitButton};
use crate::components::output_card::InsightBox;
use crate::components::slot_view::render_slot;
use crate::net::api::{ApiConfig, endpoints, predict_campaign};
use crate::net::error::BACKEND_ERROR_MESSAGE;
use crate::net::sync::{SyncRegistry, SyncSlot, refresh};
use crate::net::types::{CampaignPrediction, MetricsUsed, PredictionRequest};
use crate::pages::generators::{GOALS, PLATFORMS};
use crate::util::palette::risk_color;

pub const HIGH_RISK_WARNING: &str = "⚠️ High risk: Limited historical data on this platform";

/// Whole numbers print without a fractional part.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 { format!("{value:.0}") } else { format!("{value}") }
}

pub fn probability_label(value: f64) -> String {
    format!("{}%", format_number(value))
}

pub fn high_risk_warning(risk_level: &str) -> Option<&'static str> {
    (risk_level == "High").then_some(HIGH_RISK_WARNING)
}

/// "Metrics used" lines, labelled with the platform and goal that were asked
/// about. The goal line is left out when the backend does not report it.
pub fn metrics_used_lines(req: &PredictionRequest, metrics: &MetricsUsed) -> Vec<(String, String)> {
    let mut lines = vec![
        ("Total Leads".to_owned(), metrics.total_leads.to_string()),
        ("Avg Lead Score".to_owned(), format!("{}/100", format_number(metrics.avg_lead_score))),
        (format!("{} Campaigns", req.platform), metrics.platform_campaigns.to_string()),
    ];
    if let Some(goal_campaigns) = metrics.goal_campaigns {
        lines.push((format!("{} Campaigns", req.goal), goal_campaigns.to_string()));
    }
    lines.push(("Hot Leads".to_owned(), metrics.hot_leads.to_string()));
    lines
}

#[component]
pub fn PredictionPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let registry = expect_context::<SyncRegistry>();

    let platform = RwSignal::new(PLATFORMS[0].to_owned());
    let goal = RwSignal::new(GOALS[0].to_owned());
    let slot = RwSignal::new(SyncSlot::<(PredictionRequest, CampaignPrediction)>::default());

    let on_press = Callback::new(move |()| {
        let req = PredictionRequest { platform: platform.get_untracked(), goal: goal.get_untracked() };
        let cfg = config.clone();
        refresh(&registry, endpoints::PREDICT_CAMPAIGN, slot, BACKEND_ERROR_MESSAGE, move || async move {
            predict_campaign(&cfg, &req).await.map(|prediction| (req, prediction))
        });
    });

    view! {
        <div class="page prediction-page">
            <header class="page__header">
                <h1>"🔮 Campaign Prediction"</h1>
                <p class="page__subtitle">"Engagement and conversion odds from your pipeline history."</p>
            </header>
            <section class="panel generator">
                <SelectField label="Platform" value=platform options=PLATFORMS/>
                <SelectField label="Goal" value=goal options=GOALS/>
                <SubmitButton
                    busy=Signal::derive(move || slot.with(|s| s.loading))
                    idle_label="Predict Performance"
                    busy_label="Predicting..."
                    on_press=on_press
                />
                <div class="output-card">{render_slot(slot, |(req, prediction)| render_prediction(req, prediction))}</div>
            </section>
        </div>
    }
}

fn render_prediction(req: &PredictionRequest, prediction: &CampaignPrediction) -> AnyView {
    let color = risk_color(&prediction.risk_level);
    let warning = high_risk_warning(&prediction.risk_level);
    let lines = metrics_used_lines(req, &prediction.metrics_used);
    view! {
        <div class="prediction-card">
            <div class="prediction-card__header">
                <span class="prediction-card__kicker">"🔬 Real-Time Prediction"</span>
                <DataSourceBadge source=prediction.data_source.clone()/>
            </div>
            <div class="metric-row">
                <span>"📈 Engagement Probability"</span>
                <span class="metric-row__value metric-row__value--green">{probability_label(prediction.engagement_prob)}</span>
            </div>
            <div class="metric-row">
                <span>"💰 Conversion Probability"</span>
                <span class="metric-row__value metric-row__value--blue">{probability_label(prediction.conversion_prob)}</span>
            </div>
            <div class="metric-row">
                <span>"⚠️ Risk Level"</span>
                <span class="metric-row__value" style=format!("color: {color}")>{prediction.risk_level.clone()}</span>
            </div>
            {warning.map(|text| view! { <div class="prediction-card__warning">{text}</div> })}
            <InsightBox text=prediction.explanation.clone()/>
            <details class="prediction-card__metrics">
                <summary>"📊 Metrics Used"</summary>
                <ul>
                    {lines
                        .into_iter()
                        .map(|(label, value)| {
                            view! {
                                <li>
                                    {format!("{label}: ")}
                                    <b>{value}</b>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </details>
        </div>
    }
    .into_any()
}
