//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{chat_widget::ChatWidget, nav_bar::NavBar};
use crate::net::api::{API_BASE_META, ApiConfig};
use crate::net::sync::SyncRegistry;
use crate::pages::{
    copilot::CopilotPage, dashboard::DashboardPage, deal_tools::DealToolsPage, generators::GeneratorsPage,
    market::MarketPage, prediction::PredictionPage,
};
use crate::state::{chat::ChatState, counters::CountersState};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `api_base` is written into a `<meta>` tag so the hydrated client knows
/// where the backend lives.
pub fn shell(options: LeptosOptions, api_base: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ApiConfig::from_document());
    provide_context(SyncRegistry::default());
    provide_context(RwSignal::new(CountersState::load()));
    provide_context(RwSignal::new(ChatState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/salesspark.css"/>
        <Title text="SalesSpark AI"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("copilot") view=CopilotPage/>
                    <Route path=StaticSegment("generators") view=GeneratorsPage/>
                    <Route path=StaticSegment("deals") view=DealToolsPage/>
                    <Route path=StaticSegment("prediction") view=PredictionPage/>
                    <Route path=StaticSegment("market") view=MarketPage/>
                </Routes>
            </main>
            <ChatWidget/>
        </Router>
    }
}
