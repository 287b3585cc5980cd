//! Pill showing where metrics came from (live database vs. demo data).

use leptos::prelude::*;

use crate::net::types::is_live_source;
use crate::util::palette::data_source_badge;

#[component]
pub fn DataSourceBadge(#[prop(into)] source: String) -> impl IntoView {
    let (icon, color) = data_source_badge(is_live_source(&source));
    view! {
        <span class="data-source-badge" style=format!("--accent: {color}")>
            {icon}
            " "
            {source}
        </span>
    }
}
