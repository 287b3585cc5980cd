use super::*;

#[test]
fn missing_record_is_default() {
    assert_eq!(CountersState::parse_or_default(None), CountersState::default());
}

#[test]
fn malformed_record_resets_to_default() {
    assert_eq!(CountersState::parse_or_default(Some("{not json")), CountersState::default());
    assert_eq!(CountersState::parse_or_default(Some("null")), CountersState::default());
}

#[test]
fn missing_fields_take_defaults() {
    let state = CountersState::parse_or_default(Some(r#"{"campaigns": 4}"#));
    assert_eq!(state.campaigns, 4);
    assert_eq!(state.leads_scored, 0);
    assert!(state.history.is_empty());
}

#[test]
fn stored_keys_are_camel_case() {
    let json = serde_json::to_value(CountersState::default()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "campaigns": 0, "leadsScored": 0, "hotLeads": 0, "totalScore": 0, "history": [] })
    );
}

#[test]
fn record_survives_save_format() {
    let state = CountersState::default().with_campaign("AI CRM").with_lead_score("Acme", 82, "Hot");
    let raw = serde_json::to_string(&state).unwrap();
    assert_eq!(CountersState::parse_or_default(Some(&raw)), state);
}

#[test]
fn campaign_increments_count_and_history() {
    let state = CountersState::default().with_campaign("AI CRM");
    assert_eq!(state.campaigns, 1);
    assert_eq!(
        state.history,
        [HistoryEntry { kind: HistoryKind::Campaign, label: "AI CRM".to_owned(), score: None }]
    );
}

#[test]
fn hot_lead_counts_toward_hot_leads() {
    let state = CountersState::default().with_lead_score("Acme", 90, "Hot").with_lead_score("Globex", 40, "Cold");
    assert_eq!(state.leads_scored, 2);
    assert_eq!(state.hot_leads, 1);
    assert_eq!(state.total_score, 130);
    assert_eq!(state.average_score(), 65.0);
}

#[test]
fn updates_leave_original_untouched() {
    let before = CountersState::default();
    let _after = before.with_campaign("x");
    assert_eq!(before.campaigns, 0);
}

#[test]
fn average_score_without_leads_is_zero() {
    assert_eq!(CountersState::default().average_score(), 0.0);
}

#[test]
fn history_keeps_latest_entries_only() {
    let mut state = CountersState::default();
    for i in 0..(HISTORY_LIMIT + 5) {
        state = state.with_campaign(&format!("p{i}"));
    }
    assert_eq!(state.history.len(), HISTORY_LIMIT);
    assert_eq!(state.history[0].label, "p5");
    assert_eq!(state.campaigns, 55);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_outside_browser_is_default() {
    assert_eq!(CountersState::load(), CountersState::default());
}

#[test]
fn huge_stored_totals_saturate_instead_of_overflowing() {
    let stored = CountersState::parse_or_default(Some(r#"{"leadsScored":1,"totalScore":9223372036854775807}"#));
    let next = stored.with_lead_score("Acme", 10, "Warm");
    assert_eq!(next.total_score, i64::MAX);
    assert_eq!(next.leads_scored, 2);
}

#[test]
fn saturated_backend_score_does_not_overflow() {
    let state = CountersState { total_score: 50, ..CountersState::default() };
    let next = state.with_lead_score("Acme", i64::MAX, "Hot");
    assert_eq!(next.total_score, i64::MAX);
    assert_eq!(next.hot_leads, 1);
}
