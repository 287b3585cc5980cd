//! Wire contracts for the SalesSpark backend API.
//!
//! DESIGN
//! ======
//! One request/response type per endpoint. Response types are lenient where
//! the backend has shipped more than one shape over time (aliases, optional
//! fields, flat vs. wrapped payloads) so a drifted field degrades a widget
//! instead of failing the whole decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{Error as _, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Data-source label the backend reports for real (non-demo) data.
pub const LIVE_DATA_SOURCE: &str = "Live Database";

fn default_data_source() -> String {
    LIVE_DATA_SOURCE.to_owned()
}

// =============================================================================
// DASHBOARD
// =============================================================================

/// Aggregate pipeline metrics from `GET /dashboard`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub total_campaigns: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub total_leads: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub hot_leads: i64,
    #[serde(default)]
    pub avg_lead_score: f64,
    #[serde(default)]
    pub best_platform: Option<String>,
    /// Backend-computed quality trend (`Improving`, `Declining`, `Stable`).
    #[serde(default)]
    pub lead_quality_trend: Option<String>,
}

/// Normalized `GET /dashboard` payload.
///
/// Newer backends wrap metrics as `{data_source, metrics}`; older ones send
/// the metrics object flat. Both decode into this type.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardResponse {
    pub data_source: String,
    pub metrics: DashboardMetrics,
}

/// Whether a backend data-source label means live data.
pub fn is_live_source(source: &str) -> bool {
    source == LIVE_DATA_SOURCE
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DashboardWire {
    Wrapped {
        #[serde(default)]
        data_source: Option<String>,
        metrics: DashboardMetrics,
    },
    Flat(DashboardMetrics),
}

impl<'de> Deserialize<'de> for DashboardResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match DashboardWire::deserialize(deserializer)? {
            DashboardWire::Wrapped { data_source, metrics } => Self {
                data_source: data_source
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(default_data_source),
                metrics,
            },
            DashboardWire::Flat(metrics) => Self { data_source: default_data_source(), metrics },
        })
    }
}

/// `GET /recommendations`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Recommendations {
    #[serde(alias = "priority_action")]
    pub action: String,
    #[serde(alias = "strategy_tip")]
    pub tip: String,
    #[serde(alias = "best_platform")]
    pub platform: String,
}

/// `GET /segments` lead counts per segment.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Segments {
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub high_value: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub high_intent: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub price_sensitive: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub low_intent: i64,
}

/// `GET /weekly-report`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct WeeklyReport {
    pub summary: String,
    #[serde(default)]
    pub generated_at: Option<String>,
    /// `up`, `down`, or anything else for flat.
    #[serde(default)]
    pub trend: Option<String>,
    #[serde(default)]
    pub best_platform: Option<String>,
    #[serde(default)]
    pub hot_leads: Option<i64>,
}

// =============================================================================
// SALES COPILOT
// =============================================================================

/// One ranked entry from `GET /actions/next`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NextAction {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub lead_id: i64,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub score: i64,
    pub action: String,
    #[serde(default)]
    pub reason: String,
}

/// `GET /actions/next`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NextActions {
    #[serde(default)]
    pub actions: Vec<NextAction>,
    /// Backend-supplied explanation when `actions` is empty.
    #[serde(default)]
    pub message: Option<String>,
}

/// A risk or opportunity flag: either plain text or an alert with a reason.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TrendFlag {
    Text(String),
    Detail {
        alert: String,
        #[serde(default)]
        reason: String,
    },
}

/// `GET /trends/sales`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SalesTrends {
    /// Machine key: `improving`, `declining`, `stable`, `insufficient`.
    #[serde(default)]
    pub trend: String,
    /// Human label, usually prefixed with an emoji.
    #[serde(default)]
    pub trend_direction: String,
    #[serde(default, alias = "reason")]
    pub trend_reason: Option<String>,
    #[serde(default)]
    pub risk_flags: Vec<TrendFlag>,
    #[serde(default)]
    pub opportunity_flags: Vec<TrendFlag>,
}

/// One pipeline alert.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Alert {
    #[serde(default)]
    pub level: String,
    pub message: String,
    #[serde(default)]
    pub reason: String,
}

/// `GET /alerts`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Alerts {
    #[serde(default)]
    pub alerts: Vec<Alert>,
}

// =============================================================================
// LEADS
// =============================================================================

/// Lead row from `GET /leads`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LeadSummary {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub score: i64,
}

/// `GET /leads`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LeadList {
    #[serde(default)]
    pub leads: Vec<LeadSummary>,
}

/// `POST /leads` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LeadScoreRequest {
    pub company: String,
    pub budget: i64,
    pub interest: i64,
}

/// `POST /leads` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LeadScore {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub score: i64,
    pub category: String,
    #[serde(default)]
    pub recommendation: String,
    #[serde(default)]
    pub explanation: String,
}

// =============================================================================
// GENERATORS
// =============================================================================

/// `POST /campaigns` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CampaignRequest {
    pub product: String,
    pub audience: String,
    pub platform: String,
    pub goal: String,
}

/// `POST /campaigns` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CampaignPlan {
    pub objective: String,
    #[serde(default)]
    pub theme: String,
    pub cta: String,
    pub outcome: String,
    #[serde(default)]
    pub ai_insight: String,
}

/// `POST /pitch` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PitchRequest {
    pub product: String,
    pub target: String,
}

/// `POST /pitch` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Pitch {
    pub problem: String,
    pub value_prop: String,
    #[serde(alias = "objection_handling")]
    pub objection: String,
    pub closing: String,
    #[serde(default)]
    pub ai_insight: String,
}

/// `POST /market` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarketRequest {
    pub industry: String,
}

/// `POST /market` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MarketSnapshot {
    pub trend: String,
    pub demand: String,
    pub competition: String,
    pub opportunity: String,
    #[serde(default)]
    pub ai_insight: String,
}

/// `POST /social` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SocialRequest {
    pub product: String,
    pub platform: String,
}

/// `POST /social` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SocialPost {
    pub caption: String,
    pub hashtags: String,
    #[serde(default)]
    pub ai_insight: String,
}

/// `POST /email` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EmailRequest {
    pub recipient: String,
    pub context: String,
    pub product: String,
}

/// `POST /email` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
    #[serde(default, alias = "ai_insight")]
    pub follow_up_tip: String,
}

// =============================================================================
// PREDICTION
// =============================================================================

/// `POST /predict/campaign` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub platform: String,
    pub goal: String,
}

/// Inputs the backend reports having used for a prediction.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MetricsUsed {
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub total_leads: i64,
    #[serde(default)]
    pub avg_lead_score: f64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub platform_campaigns: i64,
    #[serde(default)]
    pub goal_campaigns: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub hot_leads: i64,
}

/// `POST /predict/campaign` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CampaignPrediction {
    pub engagement_prob: f64,
    pub conversion_prob: f64,
    /// `Low`, `Medium`, or `High`.
    pub risk_level: String,
    #[serde(default = "default_data_source")]
    pub data_source: String,
    #[serde(default)]
    pub metrics_used: MetricsUsed,
    #[serde(default)]
    pub explanation: String,
}

// =============================================================================
// MARKET INTELLIGENCE
// =============================================================================

/// `POST /market/analyze` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarketAnalysisRequest {
    pub industry: String,
    pub region: String,
    pub time_horizon: String,
}

/// Competition/opportunity/saturation scores (0-100).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MarketMatrix {
    #[serde(default)]
    pub competition: f64,
    #[serde(default)]
    pub opportunity: f64,
    #[serde(default)]
    pub saturation: f64,
}

/// `POST /market/analyze` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MarketAnalysis {
    #[serde(default)]
    pub insight: String,
    #[serde(default)]
    pub demand_trend: Vec<f64>,
    #[serde(default)]
    pub market_matrix: MarketMatrix,
    /// Channel effectiveness in backend order.
    #[serde(default, deserialize_with = "deserialize_ordered_pairs")]
    pub channels: Vec<(String, f64)>,
}

// =============================================================================
// DEAL TOOLS
// =============================================================================

/// Body for the per-lead advisory endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LeadRef {
    pub lead_id: i64,
}

/// `POST /deal/assist` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DealStrategy {
    pub closing_strategy: String,
    pub discount_range: String,
    pub objection_focus: String,
    /// `High`, `Medium`, or `Low`.
    pub urgency_level: String,
    #[serde(default)]
    pub explanation: String,
}

/// `POST /followup/plan` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FollowupPlan {
    pub category: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub score: i64,
    /// `(day label, action)` steps in backend order.
    #[serde(deserialize_with = "deserialize_ordered_pairs")]
    pub plan: Vec<(String, String)>,
    #[serde(default)]
    pub note: String,
}

/// Advisory endpoints answer `200 {"error": "..."}` for unknown leads.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum Advisory<T> {
    Refused { error: String },
    Answer(T),
}

// =============================================================================
// CHAT
// =============================================================================

/// `POST /chat` body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: String,
}

/// `POST /chat` response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    #[serde(default)]
    pub follow_up: Option<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl ChatReply {
    /// Follow-up question, if the backend sent a non-blank one.
    pub fn follow_up_text(&self) -> Option<&str> {
        self.follow_up.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

// =============================================================================
// DESERIALIZERS
// =============================================================================

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
            {
                return Ok(float.round() as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}

/// Decode a JSON object into `(key, value)` pairs, keeping document order.
fn deserialize_ordered_pairs<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct PairsVisitor<V>(std::marker::PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for PairsVisitor<V> {
        type Value = Vec<(String, V)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a JSON object")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut out = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, value)) = map.next_entry::<String, V>()? {
                out.push((key, value));
            }
            Ok(out)
        }
    }

    deserializer.deserialize_map(PairsVisitor(std::marker::PhantomData))
}
