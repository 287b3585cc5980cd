//! Client-local usage counters persisted in localStorage.
//!
//! DESIGN
//! ======
//! One flat record stored as JSON under a single key. It is loaded once at
//! page start and overwritten wholesale on every save. Updates never mutate
//! in place: each `with_*` call returns the next record, which the caller
//! stores in its signal and saves.

#[cfg(test)]
#[path = "counters_test.rs"]
mod counters_test;

use serde::{Deserialize, Serialize};

use crate::util::storage;

/// localStorage key holding the counters record.
pub const STORAGE_KEY: &str = "salesSparkData_v2";

/// Most recent history entries kept on save.
pub const HISTORY_LIMIT: usize = 50;

/// What produced a history entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryKind {
    Campaign,
    Lead,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub kind: HistoryKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
}

/// Counters record. Missing fields take their defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CountersState {
    pub campaigns: i64,
    pub leads_scored: i64,
    pub hot_leads: i64,
    pub total_score: i64,
    pub history: Vec<HistoryEntry>,
}

impl CountersState {
    /// Decode a stored record. Absent or malformed input yields the default.
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match serde_json::from_str(raw) {
            Ok(state) => state,
            Err(e) => {
                log::warn!("stored counters unreadable, resetting: {e}");
                Self::default()
            }
        }
    }

    /// Load the record from localStorage.
    pub fn load() -> Self {
        Self::parse_or_default(storage::load_raw(STORAGE_KEY).as_deref())
    }

    /// Overwrite the stored record.
    pub fn save(&self) {
        storage::save_json(STORAGE_KEY, self);
    }

    /// Record a generated campaign.
    #[must_use]
    pub fn with_campaign(&self, product: &str) -> Self {
        let mut next = self.clone();
        next.campaigns = next.campaigns.saturating_add(1);
        next.push_history(HistoryEntry { kind: HistoryKind::Campaign, label: product.to_owned(), score: None });
        next
    }

    /// Record a scored lead.
    #[must_use]
    pub fn with_lead_score(&self, company: &str, score: i64, category: &str) -> Self {
        let mut next = self.clone();
        next.leads_scored = next.leads_scored.saturating_add(1);
        next.total_score = next.total_score.saturating_add(score);
        if category == "Hot" {
            next.hot_leads = next.hot_leads.saturating_add(1);
        }
        next.push_history(HistoryEntry { kind: HistoryKind::Lead, label: company.to_owned(), score: Some(score) });
        next
    }

    /// Mean score over every lead scored in this browser, 0 when none.
    #[allow(clippy::cast_precision_loss)]
    pub fn average_score(&self) -> f64 {
        if self.leads_scored <= 0 {
            return 0.0;
        }
        self.total_score as f64 / self.leads_scored as f64
    }

    fn push_history(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
        let overflow = self.history.len().saturating_sub(HISTORY_LIMIT);
        self.history.drain(..overflow);
    }
}
