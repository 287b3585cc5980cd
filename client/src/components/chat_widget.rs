//! Floating chat assistant.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted once by the app shell so the conversation survives route changes.
//! Sends `{message, session_id}` to `POST /chat` and appends replies as
//! bubbles. Bot replies are markdown with raw HTML stripped; everything else
//! renders as plain text.

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod chat_widget_test;

use leptos::prelude::*;

use crate::net::api::ApiConfig;
use crate::state::chat::{ChatMessage, ChatRole, ChatState, strip_chip_emoji};
use crate::util::markdown::render_markdown_html;

/// CSS modifier for a bubble's sender.
pub fn bubble_class(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "chat-message chat-message--user",
        ChatRole::Bot => "chat-message chat-message--bot",
        ChatRole::Error => "chat-message chat-message--bot chat-message--error",
    }
}

/// Markdown HTML for bubbles that carry backend prose; `None` renders as text.
pub fn bubble_html(message: &ChatMessage) -> Option<String> {
    (message.role == ChatRole::Bot && !message.emphasis).then(|| render_markdown_html(&message.text))
}

#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let config = expect_context::<ApiConfig>();
    let input = RwSignal::new(String::new());

    let send = Callback::new(move |raw: String| {
        let mut outgoing = None;
        chat.update(|c| outgoing = c.begin_send(&raw));
        if let Some(message) = outgoing {
            dispatch(config.clone(), chat, message);
        }
    });

    let submit_input = move || {
        let raw = input.get_untracked();
        input.set(String::new());
        send.run(raw);
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            submit_input();
        }
    };

    view! {
        <div class="chatbot-widget">
            <button
                class="chat-toggle-btn"
                class:chat-toggle-btn--active=move || chat.with(|c| c.open)
                on:click=move |_| chat.update(ChatState::toggle)
                title="SalesSpark AI"
            >
                <span class="chat-toggle-btn__icon">"🤖"</span>
            </button>
            <div class="chat-window" class:chat-window--open=move || chat.with(|c| c.open)>
                <div class="chat-window__header">
                    <div>
                        <h3>"SalesSpark AI"</h3>
                        <span class="chat-window__subtitle">"Your sales intelligence copilot"</span>
                    </div>
                    <button class="chat-window__close" on:click=move |_| chat.update(ChatState::toggle)>
                        "✕"
                    </button>
                </div>
                <div class="chat-window__body">
                    <div class=bubble_class(ChatRole::Bot)>
                        <div class="chat-message__avatar">"🤖"</div>
                        <div class="chat-message__bubble">
                            "👋 Hi! I'm your AI Sales Analyst."
                            <br/>
                            "I have access to your "
                            <strong>"real-time pipeline data"</strong>
                            "."
                            <br/>
                            <br/>
                            <em>"Ask me \"How is my pipeline?\" or \"Who should I call?\""</em>
                        </div>
                    </div>
                    {move || chat.with(|c| c.messages.iter().map(render_message).collect_view())}
                    <Show when=move || chat.with(|c| c.suggestions_visible)>
                        <div class="chat-suggestions">
                            {move || {
                                chat.with(|c| c.suggestions.clone())
                                    .into_iter()
                                    .map(|label| {
                                        let text = strip_chip_emoji(&label).to_owned();
                                        view! {
                                            <button
                                                class="chat-suggestions__chip"
                                                on:click=move |_| send.run(text.clone())
                                            >
                                                {label}
                                            </button>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                    <Show when=move || chat.with(|c| c.typing)>
                        <div class=bubble_class(ChatRole::Bot)>
                            <div class="chat-message__avatar">"🤖"</div>
                            <div class="chat-message__bubble chat-message__typing">
                                <span class="dot"></span>
                                <span class="dot"></span>
                                <span class="dot"></span>
                            </div>
                        </div>
                    </Show>
                </div>
                <div class="chat-window__footer">
                    <input
                        class="chat-window__input"
                        type="text"
                        placeholder="Ask your analyst..."
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                    <button class="chat-window__send" on:click=move |_| submit_input()>
                        "➤"
                    </button>
                </div>
            </div>
        </div>
    }
}

fn render_message(message: &ChatMessage) -> AnyView {
    let class = bubble_class(message.role);
    let avatar = (message.role != ChatRole::User).then(|| view! { <div class="chat-message__avatar">"🤖"</div> });
    let body = match bubble_html(message) {
        Some(html) => view! { <div class="chat-message__bubble chat-message__markdown" inner_html=html></div> }.into_any(),
        None if message.emphasis => {
            view! {
                <div class="chat-message__bubble">
                    <em>{message.text.clone()}</em>
                </div>
            }
                .into_any()
        }
        None => view! { <div class="chat-message__bubble">{message.text.clone()}</div> }.into_any(),
    };
    view! {
        <div class=class>
            {avatar}
            {body}
        </div>
    }
        .into_any()
}

/// Post `message` and fold the reply (or failure) into the chat state.
fn dispatch(config: ApiConfig, chat: RwSignal<ChatState>, message: String) {
    #[cfg(feature = "hydrate")]
    {
        use crate::net::api::send_chat;
        use crate::net::types::ChatRequest;
        use crate::state::chat::FOLLOW_UP_DELAY_MS;

        leptos::task::spawn_local(async move {
            let session_id = chat.with_untracked(|c| c.session_id.clone());
            let request = ChatRequest { message, session_id };
            match send_chat(&config, &request).await {
                Ok(reply) => {
                    let mut follow_up = None;
                    chat.update(|c| follow_up = c.receive_reply(reply));
                    if let Some(text) = follow_up {
                        gloo_timers::future::sleep(std::time::Duration::from_millis(FOLLOW_UP_DELAY_MS)).await;
                        chat.update(|c| c.push_follow_up(text));
                    }
                }
                Err(_) => chat.update(ChatState::receive_failure),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, chat, message);
    }
}
