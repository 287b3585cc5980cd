//! Small building blocks for generator and advisory output.

use leptos::prelude::*;

/// Labelled output line: `<label> <value>`.
#[component]
pub fn OutputField(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="output-card__field">
            <strong>{label}</strong>
            " "
            <span>{value}</span>
        </div>
    }
}

/// Closing "AI Insight" box shown under generator output.
#[component]
pub fn InsightBox(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <div class="ai-insight">
            "🧠 "
            <b>"AI Insight:"</b>
            " "
            {text}
        </div>
    }
}
