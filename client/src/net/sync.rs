//! API-sync view refresh: fetch, then replace one slot's content.
//!
//! DESIGN
//! ======
//! Every panel owns a `SyncSlot` and refreshes it through a shared
//! `SyncRegistry`. Refreshes are keyed by endpoint: starting one aborts any
//! in-flight request for the same key and hands out a fresh ticket, and a
//! completion is applied only while its ticket is still the newest. The most
//! recently initiated request therefore wins even when responses arrive out
//! of order.
//!
//! ERROR HANDLING
//! ==============
//! A failed refresh never propagates. It records one inline message on the
//! slot and keeps whatever data the slot already had. Superseded requests are
//! dropped without touching the slot.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use futures::future::{AbortHandle, AbortRegistration, Abortable};
use leptos::prelude::*;

use super::error::ApiError;

/// Dashboard metrics refresh cadence.
pub const DASHBOARD_POLL_INTERVAL_MS: u64 = 5_000;

// =============================================================================
// SLOT
// =============================================================================

/// Content of one refreshable region of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct SyncSlot<T> {
    pub data: Option<T>,
    pub error: Option<String>,
    pub loading: bool,
}

impl<T> Default for SyncSlot<T> {
    fn default() -> Self {
        Self { data: None, error: None, loading: false }
    }
}

/// How a failed refresh is described on its slot.
#[derive(Clone, Copy)]
pub enum Failure {
    /// One generic message regardless of cause.
    Fixed(&'static str),
    /// Message derived from the error, e.g. a backend refusal reason.
    Describe(fn(&ApiError) -> String),
}

impl Failure {
    pub fn describe(self, err: &ApiError) -> String {
        match self {
            Self::Fixed(message) => message.to_owned(),
            Self::Describe(describe) => describe(err),
        }
    }
}

impl From<&'static str> for Failure {
    fn from(message: &'static str) -> Self {
        Self::Fixed(message)
    }
}

/// What a slot should display right now.
#[derive(Debug, PartialEq)]
pub enum SlotView<'a, T> {
    /// Nothing loaded yet.
    Pending,
    Ready(&'a T),
    /// Last good data plus the error from the most recent refresh.
    Stale(&'a T, &'a str),
    /// Failed before anything was ever loaded.
    Failed(&'a str),
}

impl<T> SyncSlot<T> {
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Apply a completed request. Returns `false` if the slot was left as is.
    pub fn apply(&mut self, result: Result<T, ApiError>, failure: impl Into<Failure>) -> bool {
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(ApiError::Aborted) => return false,
            Err(err) => self.error = Some(failure.into().describe(&err)),
        }
        self.loading = false;
        true
    }

    pub fn view(&self) -> SlotView<'_, T> {
        match (&self.data, &self.error) {
            (Some(data), None) => SlotView::Ready(data),
            (Some(data), Some(err)) => SlotView::Stale(data, err),
            (None, Some(err)) => SlotView::Failed(err),
            (None, None) => SlotView::Pending,
        }
    }
}

// =============================================================================
// SEQUENCING
// =============================================================================

/// Proof that a request was the newest for its key when it started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    key: &'static str,
    seq: u64,
}

#[derive(Default)]
struct Inflight {
    seq: u64,
    abort: Option<AbortHandle>,
}

/// Per-key request sequencing shared by every panel on the page.
#[derive(Clone, Default)]
pub struct SyncRegistry {
    inner: Arc<Mutex<HashMap<&'static str, Inflight>>>,
}

impl SyncRegistry {
    /// Start a request for `key`, aborting the previous one if still pending.
    pub fn begin(&self, key: &'static str) -> (Ticket, AbortRegistration) {
        let (handle, registration) = AbortHandle::new_pair();
        let mut map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let entry = map.entry(key).or_default();
        if let Some(previous) = entry.abort.replace(handle) {
            previous.abort();
        }
        entry.seq += 1;
        (Ticket { key, seq: entry.seq }, registration)
    }

    /// Mark a request finished. Returns whether it may still be applied.
    pub fn finish(&self, ticket: &Ticket) -> bool {
        let mut map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        match map.get_mut(ticket.key) {
            Some(entry) if entry.seq == ticket.seq => {
                entry.abort = None;
                true
            }
            _ => false,
        }
    }

    /// Wrap `request` so it is sequenced under `key`.
    ///
    /// The ticket is taken immediately, not on first poll, so call order is
    /// initiation order.
    pub fn run<T, F>(&self, key: &'static str, request: F) -> impl Future<Output = Result<T, ApiError>> + use<T, F>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let (ticket, registration) = self.begin(key);
        let registry = self.clone();
        async move {
            match Abortable::new(request, registration).await {
                Err(_) => Err(ApiError::Aborted),
                Ok(result) if registry.finish(&ticket) => result,
                Ok(_) => Err(ApiError::Aborted),
            }
        }
    }
}

// =============================================================================
// REACTIVE GLUE
// =============================================================================

/// Refresh `slot` from `fetch`, sequenced under `key`.
///
/// Never fails: errors land on the slot as described by `failure`.
pub fn refresh<T, F, Fut>(
    registry: &SyncRegistry,
    key: &'static str,
    slot: RwSignal<SyncSlot<T>>,
    failure: impl Into<Failure>,
    fetch: F,
) where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    refresh_then(registry, key, slot, failure, fetch, |_: &T| {});
}

/// Like [`refresh`], handing the fresh data to `on_success` once it is in
/// the slot.
pub fn refresh_then<T, F, Fut, S>(
    registry: &SyncRegistry,
    key: &'static str,
    slot: RwSignal<SyncSlot<T>>,
    failure: impl Into<Failure>,
    fetch: F,
    on_success: S,
) where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
    S: FnOnce(&T) + 'static,
{
    let failure = failure.into();
    slot.update(SyncSlot::begin);

    #[cfg(feature = "hydrate")]
    {
        let request = registry.run(key, fetch());
        leptos::task::spawn_local(async move {
            let result = request.await;
            if result.as_ref().is_err_and(ApiError::is_aborted) {
                log::debug!("{key}: superseded by newer refresh");
                return;
            }
            complete(key, slot, result, failure, on_success);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (registry, key, failure, fetch, on_success);
    }
}

/// Fold a finished request into `slot`, then hand fresh data to `on_success`.
///
/// The owning view may have unmounted while the request was in flight; a
/// disposed slot is left alone and `on_success` does not run. Returns whether
/// `on_success` ran.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn complete<T, S>(
    key: &'static str,
    slot: RwSignal<SyncSlot<T>>,
    result: Result<T, ApiError>,
    failure: Failure,
    on_success: S,
) -> bool
where
    T: Send + Sync + 'static,
    S: FnOnce(&T),
{
    let succeeded = result.is_ok();
    let Some(applied) = slot.try_update(|s| s.apply(result, failure)) else {
        log::debug!("{key}: view gone, dropping response");
        return false;
    };
    if !(applied && succeeded) {
        return false;
    }
    slot.try_with_untracked(|s| s.data.as_ref().map(on_success)).flatten().is_some()
}

/// Run `tick` now and then every `interval_ms` until the owning view unmounts.
pub fn poll<F>(interval_ms: u64, tick: F)
where
    F: Fn() + 'static,
{
    tick();

    #[cfg(feature = "hydrate")]
    {
        let alive = Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(interval_ms)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                tick();
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = interval_ms;
    }
}
