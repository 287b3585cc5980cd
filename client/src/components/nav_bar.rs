//! Top navigation bar with active-route highlighting.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::nav::{NAV_LINKS, active_href};

#[component]
pub fn NavBar() -> impl IntoView {
    let pathname = use_location().pathname;
    let active = Memo::new(move |_| pathname.with(|path| active_href(path, NAV_LINKS.iter().map(|&(href, _)| href))));

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"⚡ SalesSpark AI"</span>
            <div class="nav-bar__links">
                {NAV_LINKS
                    .iter()
                    .map(|&(href, label)| {
                        view! {
                            <a
                                href=href
                                class="nav-bar__link"
                                class:nav-bar__link--active=move || active.get() == Some(href)
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
