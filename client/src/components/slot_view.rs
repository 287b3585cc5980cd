//! Shared rendering for refreshable slots.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every panel shows the same four slot states (nothing yet, loading, data,
//! error). Panels supply only the data renderer; loading text, inline errors,
//! and the stale notice are uniform.

use leptos::prelude::*;

use crate::net::sync::{SlotView, SyncSlot};

/// Reactive view of `slot`, delegating loaded data to `render`.
pub fn render_slot<T, F>(slot: RwSignal<SyncSlot<T>>, render: F) -> impl IntoView
where
    T: Send + Sync + 'static,
    F: Fn(&T) -> AnyView + Send + Sync + 'static,
{
    move || {
        slot.with(|s| match s.view() {
            SlotView::Pending if s.loading => view! { <p class="panel__muted">"Loading..."</p> }.into_any(),
            SlotView::Pending => ().into_any(),
            SlotView::Failed(err) => view! { <p class="panel__error">{err.to_owned()}</p> }.into_any(),
            SlotView::Ready(data) => render(data),
            SlotView::Stale(data, err) => {
                let notice = err.to_owned();
                view! {
                    {render(data)}
                    <p class="panel__stale">{notice}</p>
                }
                .into_any()
            }
        })
    }
}
