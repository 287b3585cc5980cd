//! Generator forms: campaign, pitch, lead score, market snapshot, social
//! content, and outreach email.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each form owns one slot and posts to its own endpoint. Successful campaign
//! and lead-score responses also update the persisted counters record.

#[cfg(test)]
#[path = "generators_test.rs"]
mod generators_test;

use leptos::prelude::*;

use crate::components::form_field::{SelectField, SubmitButton, TextField};
use crate::components::output_card::{InsightBox, OutputField};
use crate::components::slot_view::render_slot;
use crate::net::api::{
    ApiConfig, analyze_market, endpoints, generate_campaign, generate_email, generate_pitch, generate_social,
    score_lead,
};
use crate::net::error::BACKEND_ERROR_MESSAGE;
use crate::net::sync::{SyncRegistry, SyncSlot, refresh, refresh_then};
use crate::net::types::{
    CampaignPlan, CampaignRequest, EmailDraft, EmailRequest, LeadScore, LeadScoreRequest, MarketRequest,
    MarketSnapshot, Pitch, PitchRequest, SocialPost, SocialRequest,
};
use crate::state::counters::CountersState;

pub const DEFAULT_PRODUCT: &str = "AI Solution";
pub const DEFAULT_AUDIENCE: &str = "Business Leaders";
pub const DEFAULT_INDUSTRY: &str = "Tech";

/// Sync key for scoring, kept apart from the lead list load on `GET /leads`
/// so neither aborts the other.
pub const LEAD_SCORE_SYNC_KEY: &str = "/leads#score";

pub const PLATFORMS: &[&str] = &["LinkedIn", "Instagram", "Email", "Facebook", "Twitter"];
pub const GOALS: &[&str] = &["Lead Generation", "Brand Awareness", "Sales Conversion"];

fn or_default(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() { default.to_owned() } else { trimmed.to_owned() }
}

pub fn campaign_request(product: &str, audience: &str, platform: &str, goal: &str) -> CampaignRequest {
    CampaignRequest {
        product: or_default(product, DEFAULT_PRODUCT),
        audience: or_default(audience, DEFAULT_AUDIENCE),
        platform: platform.to_owned(),
        goal: goal.to_owned(),
    }
}

pub fn market_request(industry: &str) -> MarketRequest {
    MarketRequest { industry: or_default(industry, DEFAULT_INDUSTRY) }
}

/// Numeric form input as an integer. Blank or unparsable input is 0.
#[allow(clippy::cast_possible_truncation)]
pub fn parse_number_input(raw: &str) -> i64 {
    let raw = raw.trim();
    raw.parse::<i64>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v.round() as i64))
        .unwrap_or(0)
}

pub fn lead_score_request(company: &str, budget: &str, interest: &str) -> LeadScoreRequest {
    LeadScoreRequest {
        company: company.trim().to_owned(),
        budget: parse_number_input(budget),
        interest: parse_number_input(interest),
    }
}

/// Replace the counters record and persist it.
fn record(counters: RwSignal<CountersState>, next: impl FnOnce(&CountersState) -> CountersState) {
    counters.update(|c| *c = next(c));
    counters.with_untracked(CountersState::save);
}

fn busy<T: Send + Sync + 'static>(slot: RwSignal<SyncSlot<T>>) -> Signal<bool> {
    Signal::derive(move || slot.with(|s| s.loading))
}

#[component]
pub fn GeneratorsPage() -> impl IntoView {
    view! {
        <div class="page generators-page">
            <header class="page__header">
                <h1>"🛠️ AI Generators"</h1>
                <p class="page__subtitle">"Campaigns, pitches, lead scoring, and outreach content."</p>
            </header>
            <div class="page__grid">
                <CampaignForm/>
                <PitchForm/>
                <LeadScoreForm/>
                <MarketForm/>
                <ContentForm/>
                <EmailForm/>
            </div>
        </div>
    }
}

#[component]
fn CampaignForm() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let registry = expect_context::<SyncRegistry>();
    let counters = expect_context::<RwSignal<CountersState>>();

    let product = RwSignal::new(String::new());
    let audience = RwSignal::new(String::new());
    let platform = RwSignal::new(PLATFORMS[0].to_owned());
    let goal = RwSignal::new(GOALS[0].to_owned());
    let slot = RwSignal::new(SyncSlot::<CampaignPlan>::default());

    let on_press = Callback::new(move |()| {
        let req = campaign_request(
            &product.get_untracked(),
            &audience.get_untracked(),
            &platform.get_untracked(),
            &goal.get_untracked(),
        );
        let label = req.product.clone();
        let cfg = config.clone();
        refresh_then(
            &registry,
            endpoints::CAMPAIGNS,
            slot,
            BACKEND_ERROR_MESSAGE,
            move || async move { generate_campaign(&cfg, &req).await },
            move |_: &CampaignPlan| record(counters, |c| c.with_campaign(&label)),
        );
    });

    view! {
        <section class="panel generator">
            <h3 class="panel__title">"🚀 Campaign Generator"</h3>
            <TextField label="Product" value=product placeholder=DEFAULT_PRODUCT/>
            <TextField label="Audience" value=audience placeholder=DEFAULT_AUDIENCE/>
            <SelectField label="Platform" value=platform options=PLATFORMS/>
            <SelectField label="Goal" value=goal options=GOALS/>
            <SubmitButton busy=busy(slot) idle_label="Generate Campaign" busy_label="Generating..." on_press=on_press/>
            <div class="output-card">
                {render_slot(slot, |plan| {
                    view! {
                        <OutputField label="🎯 Objective:" value=plan.objective.clone()/>
                        <OutputField label="🎨 Theme:" value=format!("\"{}\"", plan.theme)/>
                        <OutputField label="📢 Key CTA:" value=plan.cta.clone()/>
                        <OutputField label="🏆 Outcome:" value=plan.outcome.clone()/>
                        <InsightBox text=plan.ai_insight.clone()/>
                    }
                        .into_any()
                })}
            </div>
        </section>
    }
}

#[component]
fn PitchForm() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let registry = expect_context::<SyncRegistry>();

    let product = RwSignal::new(String::new());
    let target = RwSignal::new(String::new());
    let slot = RwSignal::new(SyncSlot::<Pitch>::default());

    let on_press = Callback::new(move |()| {
        let req = PitchRequest { product: product.get_untracked(), target: target.get_untracked() };
        let cfg = config.clone();
        refresh(&registry, endpoints::PITCH, slot, BACKEND_ERROR_MESSAGE, move || async move {
            generate_pitch(&cfg, &req).await
        });
    });

    view! {
        <section class="panel generator">
            <h3 class="panel__title">"🎤 Sales Pitch"</h3>
            <TextField label="Product" value=product/>
            <TextField label="Target" value=target placeholder="e.g. CFOs at mid-size retailers"/>
            <SubmitButton busy=busy(slot) idle_label="Generate Pitch" busy_label="Generating..." on_press=on_press/>
            <div class="output-card">
                {render_slot(slot, |pitch| {
                    view! {
                        <OutputField label="Problem:" value=pitch.problem.clone()/>
                        <OutputField label="Value:" value=pitch.value_prop.clone()/>
                        <OutputField label="Objection:" value=pitch.objection.clone()/>
                        <OutputField label="Closing:" value=pitch.closing.clone()/>
                        <InsightBox text=pitch.ai_insight.clone()/>
                    }
                        .into_any()
                })}
            </div>
        </section>
    }
}

#[component]
fn LeadScoreForm() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let registry = expect_context::<SyncRegistry>();
    let counters = expect_context::<RwSignal<CountersState>>();

    let company = RwSignal::new(String::new());
    let budget = RwSignal::new(String::new());
    let interest = RwSignal::new(String::new());
    let slot = RwSignal::new(SyncSlot::<LeadScore>::default());

    let on_press = Callback::new(move |()| {
        let req = lead_score_request(&company.get_untracked(), &budget.get_untracked(), &interest.get_untracked());
        let label = req.company.clone();
        let cfg = config.clone();
        refresh_then(
            &registry,
            LEAD_SCORE_SYNC_KEY,
            slot,
            BACKEND_ERROR_MESSAGE,
            move || async move { score_lead(&cfg, &req).await },
            move |scored: &LeadScore| record(counters, |c| c.with_lead_score(&label, scored.score, &scored.category)),
        );
    });

    view! {
        <section class="panel generator">
            <h3 class="panel__title">"🎯 Lead Scoring"</h3>
            <TextField label="Company" value=company/>
            <TextField label="Budget" value=budget kind="number"/>
            <TextField label="Interest (1-10)" value=interest kind="number"/>
            <SubmitButton busy=busy(slot) idle_label="Score Lead" busy_label="Scoring..." on_press=on_press/>
            <div class="output-card">
                {render_slot(slot, |lead| {
                    view! {
                        <OutputField label="Score:" value=format!("{}/100", lead.score)/>
                        <OutputField label="Category:" value=lead.category.clone()/>
                        <OutputField label="Recommendation:" value=lead.recommendation.clone()/>
                        <OutputField label="Explanation:" value=lead.explanation.clone()/>
                    }
                        .into_any()
                })}
            </div>
        </section>
    }
}

#[component]
fn MarketForm() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let registry = expect_context::<SyncRegistry>();

    let industry = RwSignal::new(String::new());
    let slot = RwSignal::new(SyncSlot::<MarketSnapshot>::default());

    let on_press = Callback::new(move |()| {
        let req = market_request(&industry.get_untracked());
        let cfg = config.clone();
        refresh(&registry, endpoints::MARKET, slot, BACKEND_ERROR_MESSAGE, move || async move {
            analyze_market(&cfg, &req).await
        });
    });

    view! {
        <section class="panel generator">
            <h3 class="panel__title">"🌍 Market Analysis"</h3>
            <TextField label="Industry" value=industry placeholder=DEFAULT_INDUSTRY/>
            <SubmitButton busy=busy(slot) idle_label="Analyze Market" busy_label="Analyzing..." on_press=on_press/>
            <div class="output-card">
                {render_slot(slot, |market| {
                    view! {
                        <OutputField label="📈 Trend:" value=market.trend.clone()/>
                        <OutputField label="🔥 Demand:" value=market.demand.clone()/>
                        <OutputField label="⚔️ Competition:" value=market.competition.clone()/>
                        <OutputField label="💡 Opportunity:" value=market.opportunity.clone()/>
                        <InsightBox text=market.ai_insight.clone()/>
                    }
                        .into_any()
                })}
            </div>
        </section>
    }
}

#[component]
fn ContentForm() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let registry = expect_context::<SyncRegistry>();

    let product = RwSignal::new(String::new());
    let platform = RwSignal::new(PLATFORMS[0].to_owned());
    let slot = RwSignal::new(SyncSlot::<SocialPost>::default());

    let on_press = Callback::new(move |()| {
        let req = SocialRequest { product: product.get_untracked(), platform: platform.get_untracked() };
        let cfg = config.clone();
        refresh(&registry, endpoints::SOCIAL, slot, BACKEND_ERROR_MESSAGE, move || async move {
            generate_social(&cfg, &req).await
        });
    });

    view! {
        <section class="panel generator">
            <h3 class="panel__title">"📱 Channel Content"</h3>
            <TextField label="Product" value=product/>
            <SelectField label="Platform" value=platform options=PLATFORMS/>
            <SubmitButton busy=busy(slot) idle_label="Generate Content" busy_label="Generating..." on_press=on_press/>
            <div class="output-card">
                {render_slot(slot, |post| {
                    view! {
                        <h4>"Generated Content"</h4>
                        <OutputField label="Caption:" value=post.caption.clone()/>
                        <OutputField label="Hashtags:" value=post.hashtags.clone()/>
                        <p>
                            <i>{post.ai_insight.clone()}</i>
                        </p>
                    }
                        .into_any()
                })}
            </div>
        </section>
    }
}

#[component]
fn EmailForm() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let registry = expect_context::<SyncRegistry>();

    let recipient = RwSignal::new(String::new());
    let context = RwSignal::new(String::new());
    let product = RwSignal::new(String::new());
    let slot = RwSignal::new(SyncSlot::<EmailDraft>::default());

    let on_press = Callback::new(move |()| {
        let req = EmailRequest {
            recipient: recipient.get_untracked(),
            context: context.get_untracked(),
            product: product.get_untracked(),
        };
        let cfg = config.clone();
        refresh(&registry, endpoints::EMAIL, slot, BACKEND_ERROR_MESSAGE, move || async move {
            generate_email(&cfg, &req).await
        });
    });

    view! {
        <section class="panel generator">
            <h3 class="panel__title">"✉️ Outreach Email"</h3>
            <TextField label="Recipient" value=recipient/>
            <TextField label="Context" value=context placeholder="e.g. met at SaaStr"/>
            <TextField label="Product" value=product/>
            <SubmitButton busy=busy(slot) idle_label="Draft Email" busy_label="Drafting..." on_press=on_press/>
            <div class="output-card">
                {render_slot(slot, |email| {
                    view! {
                        <OutputField label="Subject:" value=email.subject.clone()/>
                        <pre class="output-card__pre">{email.body.clone()}</pre>
                        <p>
                            <i>{email.follow_up_tip.clone()}</i>
                        </p>
                    }
                        .into_any()
                })}
            </div>
        </section>
    }
}
