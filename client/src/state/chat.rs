//! Chat widget state: transcript, suggestion chips, and typing indicator.
//!
//! DESIGN
//! ======
//! The widget's only state machine is open/closed plus the typing flag.
//! Transitions are plain methods so the send/reply/failure sequence is unit
//! tested without a browser; the component wires them to events and HTTP.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::error::CHAT_ERROR_MESSAGE;
use crate::net::types::ChatReply;

/// Emojis prefixed to suggestion chips, cycled by position.
pub const CHIP_EMOJIS: [&str; 5] = ["🔍", "📊", "🚀", "💡", "🧠"];

/// Leading markers removed from a chip before its text is sent.
const STRIPPED_PREFIXES: [&str; 6] = ["🔍", "📊", "🚀", "💡", "🧠", "✨"];

const INITIAL_SUGGESTIONS: [&str; 3] = ["Which leads to focus on?", "Pipeline risks?", "Campaign strategy?"];

/// Delay before a reply's follow-up question appears.
pub const FOLLOW_UP_DELAY_MS: u64 = 600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Bot,
    /// Transport failure notice, rendered as a bot bubble.
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: ChatRole,
    pub text: String,
    /// Render in italics (follow-up questions).
    pub emphasis: bool,
}

#[derive(Clone, Debug)]
pub struct ChatState {
    pub open: bool,
    pub typing: bool,
    pub messages: Vec<ChatMessage>,
    /// Chip labels, emoji included.
    pub suggestions: Vec<String>,
    pub suggestions_visible: bool,
    pub session_id: String,
    next_id: u64,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            open: false,
            typing: false,
            messages: Vec::new(),
            suggestions: chip_labels(INITIAL_SUGGESTIONS),
            suggestions_visible: true,
            session_id: new_session_id(),
            next_id: 0,
        }
    }
}

impl ChatState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Start sending `raw`. Returns the trimmed message, or `None` if blank.
    pub fn begin_send(&mut self, raw: &str) -> Option<String> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        self.suggestions_visible = false;
        self.push(ChatRole::User, text.to_owned(), false);
        self.typing = true;
        Some(text.to_owned())
    }

    /// Apply a reply. Returns the follow-up question to show after a delay.
    pub fn receive_reply(&mut self, reply: ChatReply) -> Option<String> {
        self.typing = false;
        let follow_up = reply.follow_up_text().map(str::to_owned);
        self.push(ChatRole::Bot, reply.reply, false);
        if !reply.suggestions.is_empty() {
            self.suggestions = chip_labels(reply.suggestions);
            self.suggestions_visible = true;
        }
        follow_up
    }

    pub fn push_follow_up(&mut self, text: String) {
        self.push(ChatRole::Bot, text, true);
    }

    pub fn receive_failure(&mut self) {
        self.typing = false;
        self.push(ChatRole::Error, CHAT_ERROR_MESSAGE.to_owned(), false);
    }

    fn push(&mut self, role: ChatRole, text: String, emphasis: bool) {
        self.next_id += 1;
        self.messages.push(ChatMessage { id: self.next_id, role, text, emphasis });
    }
}

/// `sess_` followed by 9 lowercase alphanumeric characters.
pub fn new_session_id() -> String {
    let random = uuid::Uuid::new_v4().simple().to_string();
    format!("sess_{}", &random[..9])
}

/// Chip label for the `index`-th suggestion.
pub fn chip_label(index: usize, text: &str) -> String {
    format!("{} {text}", CHIP_EMOJIS[index % CHIP_EMOJIS.len()])
}

fn chip_labels<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items.into_iter().enumerate().map(|(i, text)| chip_label(i, text.as_ref())).collect()
}

/// Text a chip sends: its label without the leading emoji.
pub fn strip_chip_emoji(label: &str) -> &str {
    STRIPPED_PREFIXES
        .iter()
        .find_map(|prefix| label.strip_prefix(prefix))
        .map_or(label, str::trim_start)
}
