//! Horizontal average-lead-score bar.

#[cfg(test)]
#[path = "score_bar_test.rs"]
mod score_bar_test;

use leptos::prelude::*;

/// Bar fill in percent. Scores above 100 are capped; negatives and NaN draw empty.
pub fn score_bar_width(score: f64) -> f64 {
    if score.is_nan() { 0.0 } else { score.clamp(0.0, 100.0) }
}

#[component]
pub fn ScoreBar(#[prop(into)] score: Signal<f64>) -> impl IntoView {
    view! {
        <div class="score-bar">
            <div class="score-bar__caption">"AVG LEAD SCORE PERFORMANCE"</div>
            <div class="score-bar__track">
                <div
                    class="score-bar__fill"
                    style=move || format!("width: {}%", score_bar_width(score.get()))
                ></div>
            </div>
            <div class="score-bar__scale">
                <span>"0"</span>
                <span>"100"</span>
            </div>
        </div>
    }
}
