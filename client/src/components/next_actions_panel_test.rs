use super::*;

fn parse(raw: serde_json::Value) -> NextActions {
    serde_json::from_value(raw).unwrap()
}

#[test]
fn empty_list_shows_default_message_only() {
    let view = next_actions_view(&parse(serde_json::json!({ "actions": [] })));
    let NextActionsView::Empty(message) = view else {
        panic!("expected empty state");
    };
    assert!(message.contains("No actions available"));
    assert_eq!(message, format!("📭 {NO_ACTIONS_MESSAGE}"));
}

#[test]
fn backend_message_replaces_default() {
    let view = next_actions_view(&parse(serde_json::json!({ "message": "Generate leads first." })));
    assert_eq!(view, NextActionsView::Empty("📭 Generate leads first.".to_owned()));
}

#[test]
fn blank_backend_message_falls_back_to_default() {
    let view = next_actions_view(&parse(serde_json::json!({ "actions": [], "message": "  " })));
    assert_eq!(view, NextActionsView::Empty(format!("📭 {NO_ACTIONS_MESSAGE}")));
}

#[test]
fn actions_are_ranked_from_one() {
    let data = parse(serde_json::json!({
        "actions": [
            { "lead_id": 12, "category": "Hot", "score": 91, "action": "Call today", "reason": "Budget approved" },
            { "lead_id": 4, "category": "Warm", "score": 63, "action": "Send case study", "reason": "Evaluating" },
            { "lead_id": 9, "category": "Unknown", "score": 10, "action": "Nurture", "reason": "" }
        ]
    }));
    let NextActionsView::Ranked(cards) = next_actions_view(&data) else {
        panic!("expected ranked list");
    };
    assert_eq!(cards.len(), 3);
    assert_eq!(
        cards[0],
        ActionCard {
            rank: 1,
            heading: "Lead #12".to_owned(),
            badge: "Hot • 91".to_owned(),
            color: "#f87171",
            action: "Call today".to_owned(),
            reason: "Budget approved".to_owned(),
        }
    );
    assert_eq!(cards[1].color, "#f59e0b");
    assert_eq!(cards[2].rank, 3);
    assert_eq!(cards[2].color, "#60a5fa");
}
