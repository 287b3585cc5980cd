//! REST helpers for the SalesSpark backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call resolves to `ApiError::Unavailable` since
//! the backend is only contacted from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. Failures are logged here
//! once, with the endpoint, so views only decide what to display.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    Advisory, Alerts, CampaignPlan, CampaignPrediction, CampaignRequest, ChatReply, ChatRequest, DashboardResponse,
    DealStrategy, EmailDraft, EmailRequest, FollowupPlan, LeadList, LeadRef, LeadScore, LeadScoreRequest,
    MarketAnalysis, MarketAnalysisRequest, MarketRequest, MarketSnapshot, NextActions, Pitch, PitchRequest,
    PredictionRequest, Recommendations, SalesTrends, Segments, SocialPost, SocialRequest, WeeklyReport,
};

/// Backend base URL used when the page does not configure one.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Name of the `<meta>` tag the host uses to pass the backend base URL.
pub const API_BASE_META: &str = "spark-api-base";

/// Endpoint paths, relative to the configured base URL.
pub mod endpoints {
    pub const DASHBOARD: &str = "/dashboard";
    pub const RECOMMENDATIONS: &str = "/recommendations";
    pub const SEGMENTS: &str = "/segments";
    pub const WEEKLY_REPORT: &str = "/weekly-report";
    pub const NEXT_ACTIONS: &str = "/actions/next";
    pub const SALES_TRENDS: &str = "/trends/sales";
    pub const ALERTS: &str = "/alerts";
    pub const LEADS: &str = "/leads";
    pub const CAMPAIGNS: &str = "/campaigns";
    pub const PITCH: &str = "/pitch";
    pub const MARKET: &str = "/market";
    pub const MARKET_ANALYZE: &str = "/market/analyze";
    pub const SOCIAL: &str = "/social";
    pub const EMAIL: &str = "/email";
    pub const PREDICT_CAMPAIGN: &str = "/predict/campaign";
    pub const DEAL_ASSIST: &str = "/deal/assist";
    pub const FOLLOWUP_PLAN: &str = "/followup/plan";
    pub const CHAT: &str = "/chat";
}

/// Where the backend lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE.to_owned() }
    }
}

impl ApiConfig {
    /// Build a config from a base URL. Blank input falls back to the default;
    /// trailing slashes are trimmed.
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::default();
        }
        Self { base_url: trimmed.to_owned() }
    }

    /// Read the base URL the host wrote into the page's `<meta>` tag.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&format!("meta[name=\"{API_BASE_META}\"]")).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            content.map_or_else(Self::default, |base| Self::new(&base))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    /// Absolute URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Turn a raw HTTP outcome into a typed body.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn read_response<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
    decode_body(status, &body)
}

fn log_failure<T>(method: &str, path: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(err) = &result {
        log::warn!("{method} {path} failed: {err}");
    }
    result
}

/// `GET` an endpoint and decode its JSON body.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails, the status is not 2xx, or the
/// body does not decode as `T`.
pub async fn get_json<T: DeserializeOwned>(config: &ApiConfig, path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let result = async {
            let resp = gloo_net::http::Request::get(&config.url(path))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            read_response(resp).await
        }
        .await;
        log_failure("GET", path, result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        log_failure("GET", path, Err(ApiError::Unavailable))
    }
}

/// `POST` a JSON body to an endpoint and decode the JSON answer.
///
/// # Errors
///
/// Returns an `ApiError` if the body cannot be encoded, the request fails,
/// the status is not 2xx, or the answer does not decode as `T`.
pub async fn post_json<B, T>(config: &ApiConfig, path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let result = async {
            let resp = gloo_net::http::Request::post(&config.url(path))
                .json(body)
                .map_err(|e| ApiError::Decode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            read_response(resp).await
        }
        .await;
        log_failure("POST", path, result)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, body);
        log_failure("POST", path, Err(ApiError::Unavailable))
    }
}

fn unwrap_advisory<T>(answer: Advisory<T>) -> Result<T, ApiError> {
    match answer {
        Advisory::Refused { error } => Err(ApiError::Backend(error)),
        Advisory::Answer(body) => Ok(body),
    }
}

// =============================================================================
// DASHBOARD
// =============================================================================

pub async fn fetch_dashboard(config: &ApiConfig) -> Result<DashboardResponse, ApiError> {
    get_json(config, endpoints::DASHBOARD).await
}

pub async fn fetch_recommendations(config: &ApiConfig) -> Result<Recommendations, ApiError> {
    get_json(config, endpoints::RECOMMENDATIONS).await
}

pub async fn fetch_segments(config: &ApiConfig) -> Result<Segments, ApiError> {
    get_json(config, endpoints::SEGMENTS).await
}

pub async fn fetch_weekly_report(config: &ApiConfig) -> Result<WeeklyReport, ApiError> {
    get_json(config, endpoints::WEEKLY_REPORT).await
}

// =============================================================================
// COPILOT
// =============================================================================

pub async fn fetch_next_actions(config: &ApiConfig) -> Result<NextActions, ApiError> {
    get_json(config, endpoints::NEXT_ACTIONS).await
}

pub async fn fetch_sales_trends(config: &ApiConfig) -> Result<SalesTrends, ApiError> {
    get_json(config, endpoints::SALES_TRENDS).await
}

pub async fn fetch_alerts(config: &ApiConfig) -> Result<Alerts, ApiError> {
    get_json(config, endpoints::ALERTS).await
}

// =============================================================================
// LEADS + GENERATORS
// =============================================================================

pub async fn fetch_leads(config: &ApiConfig) -> Result<LeadList, ApiError> {
    get_json(config, endpoints::LEADS).await
}

pub async fn score_lead(config: &ApiConfig, req: &LeadScoreRequest) -> Result<LeadScore, ApiError> {
    post_json(config, endpoints::LEADS, req).await
}

pub async fn generate_campaign(config: &ApiConfig, req: &CampaignRequest) -> Result<CampaignPlan, ApiError> {
    post_json(config, endpoints::CAMPAIGNS, req).await
}

pub async fn generate_pitch(config: &ApiConfig, req: &PitchRequest) -> Result<Pitch, ApiError> {
    post_json(config, endpoints::PITCH, req).await
}

pub async fn analyze_market(config: &ApiConfig, req: &MarketRequest) -> Result<MarketSnapshot, ApiError> {
    post_json(config, endpoints::MARKET, req).await
}

pub async fn generate_social(config: &ApiConfig, req: &SocialRequest) -> Result<SocialPost, ApiError> {
    post_json(config, endpoints::SOCIAL, req).await
}

pub async fn generate_email(config: &ApiConfig, req: &EmailRequest) -> Result<EmailDraft, ApiError> {
    post_json(config, endpoints::EMAIL, req).await
}

pub async fn predict_campaign(config: &ApiConfig, req: &PredictionRequest) -> Result<CampaignPrediction, ApiError> {
    post_json(config, endpoints::PREDICT_CAMPAIGN, req).await
}

pub async fn analyze_market_trends(config: &ApiConfig, req: &MarketAnalysisRequest) -> Result<MarketAnalysis, ApiError> {
    post_json(config, endpoints::MARKET_ANALYZE, req).await
}

// =============================================================================
// DEAL TOOLS + CHAT
// =============================================================================

/// # Errors
///
/// Returns `ApiError::Backend` when the backend refuses the lead id.
pub async fn deal_assist(config: &ApiConfig, lead_id: i64) -> Result<DealStrategy, ApiError> {
    post_json(config, endpoints::DEAL_ASSIST, &LeadRef { lead_id })
        .await
        .and_then(unwrap_advisory)
}

/// # Errors
///
/// Returns `ApiError::Backend` when the backend refuses the lead id.
pub async fn followup_plan(config: &ApiConfig, lead_id: i64) -> Result<FollowupPlan, ApiError> {
    post_json(config, endpoints::FOLLOWUP_PLAN, &LeadRef { lead_id })
        .await
        .and_then(unwrap_advisory)
}

pub async fn send_chat(config: &ApiConfig, req: &ChatRequest) -> Result<ChatReply, ApiError> {
    post_json(config, endpoints::CHAT, req).await
}
