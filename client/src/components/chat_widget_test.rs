use super::*;

fn message(role: ChatRole, text: &str, emphasis: bool) -> ChatMessage {
    ChatMessage { id: 1, role, text: text.to_owned(), emphasis }
}

#[test]
fn bubble_classes_by_role() {
    assert_eq!(bubble_class(ChatRole::User), "chat-message chat-message--user");
    assert!(bubble_class(ChatRole::Error).contains("chat-message--error"));
}

#[test]
fn bot_reply_renders_markdown() {
    let html = bubble_html(&message(ChatRole::Bot, "Focus on **Acme**", false));
    assert_eq!(html.as_deref(), Some("<p>Focus on <strong>Acme</strong></p>\n"));
}

#[test]
fn bot_reply_markup_is_stripped() {
    let html = bubble_html(&message(ChatRole::Bot, "<img src=x onerror=alert(1)>hi", false)).unwrap();
    assert!(!html.contains("<img"));
}

#[test]
fn user_and_error_bubbles_are_plain_text() {
    assert_eq!(bubble_html(&message(ChatRole::User, "**not bold**", false)), None);
    assert_eq!(bubble_html(&message(ChatRole::Error, "oops", false)), None);
}

#[test]
fn follow_up_bubble_is_plain_text() {
    assert_eq!(bubble_html(&message(ChatRole::Bot, "Want a script?", true)), None);
}
