use super::*;

fn reply(text: &str, follow_up: Option<&str>, suggestions: &[&str]) -> ChatReply {
    ChatReply {
        reply: text.to_owned(),
        follow_up: follow_up.map(str::to_owned),
        suggestions: suggestions.iter().map(|s| (*s).to_owned()).collect(),
    }
}

#[test]
fn default_shows_three_initial_chips() {
    let state = ChatState::default();
    assert!(!state.open);
    assert!(state.suggestions_visible);
    assert_eq!(
        state.suggestions,
        ["🔍 Which leads to focus on?", "📊 Pipeline risks?", "🚀 Campaign strategy?"]
    );
}

#[test]
fn session_id_shape() {
    let id = new_session_id();
    let suffix = id.strip_prefix("sess_").unwrap();
    assert_eq!(suffix.len(), 9);
    assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
}

#[test]
fn session_id_is_stable_per_state() {
    let state = ChatState::default();
    let copy = state.clone();
    assert_eq!(state.session_id, copy.session_id);
}

#[test]
fn toggle_flips_open() {
    let mut state = ChatState::default();
    state.toggle();
    assert!(state.open);
    state.toggle();
    assert!(!state.open);
}

#[test]
fn blank_message_is_ignored() {
    let mut state = ChatState::default();
    assert_eq!(state.begin_send("   "), None);
    assert!(state.messages.is_empty());
    assert!(!state.typing);
    assert!(state.suggestions_visible);
}

#[test]
fn send_hides_chips_and_shows_typing() {
    let mut state = ChatState::default();
    assert_eq!(state.begin_send("  Who should I call?  ").as_deref(), Some("Who should I call?"));
    assert!(!state.suggestions_visible);
    assert!(state.typing);
    assert_eq!(state.messages[0].role, ChatRole::User);
    assert_eq!(state.messages[0].text, "Who should I call?");
}

#[test]
fn reply_clears_typing_and_returns_follow_up() {
    let mut state = ChatState::default();
    state.begin_send("hi");
    let follow_up = state.receive_reply(reply("**Call Acme**", Some(" Want a script? "), &[]));
    assert!(!state.typing);
    assert_eq!(follow_up.as_deref(), Some("Want a script?"));
    assert_eq!(state.messages.last().unwrap().text, "**Call Acme**");
    assert!(!state.suggestions_visible);
}

#[test]
fn reply_with_suggestions_replaces_chips() {
    let mut state = ChatState::default();
    state.begin_send("hi");
    state.receive_reply(reply("ok", None, &["a", "b", "c", "d", "e", "f"]));
    assert!(state.suggestions_visible);
    assert_eq!(state.suggestions, ["🔍 a", "📊 b", "🚀 c", "💡 d", "🧠 e", "🔍 f"]);
}

#[test]
fn follow_up_is_emphasised_bot_bubble() {
    let mut state = ChatState::default();
    state.push_follow_up("Next?".to_owned());
    let last = state.messages.last().unwrap();
    assert_eq!(last.role, ChatRole::Bot);
    assert!(last.emphasis);
}

#[test]
fn failure_appends_error_bubble() {
    let mut state = ChatState::default();
    state.begin_send("hi");
    state.receive_failure();
    assert!(!state.typing);
    let last = state.messages.last().unwrap();
    assert_eq!(last.role, ChatRole::Error);
    assert_eq!(last.text, "⚠️ Error: Could not connect to SalesSpark Brain.");
}

#[test]
fn message_ids_are_unique() {
    let mut state = ChatState::default();
    state.begin_send("one");
    state.receive_failure();
    state.begin_send("two");
    assert_eq!(state.messages.iter().map(|m| m.id).collect::<Vec<_>>(), [1, 2, 3]);
}

#[test]
fn strip_chip_emoji_removes_known_prefix() {
    assert_eq!(strip_chip_emoji("🔍 Which leads to focus on?"), "Which leads to focus on?");
    assert_eq!(strip_chip_emoji("✨ Upsell ideas"), "Upsell ideas");
    assert_eq!(strip_chip_emoji("Plain text"), "Plain text");
}

#[test]
fn chip_label_round_trips_through_strip() {
    let label = chip_label(3, "Best channel?");
    assert_eq!(label, "💡 Best channel?");
    assert_eq!(strip_chip_emoji(&label), "Best channel?");
}
