use std::cell::Cell;

use futures::channel::oneshot;
use futures::executor::block_on;

use super::*;

const KEY: &str = "/dashboard";
const FAILED: &str = "Backend Offline";

fn pending(rx: oneshot::Receiver<u32>) -> impl Future<Output = Result<u32, ApiError>> {
    async move { rx.await.map_err(|_| ApiError::Network("sender dropped".to_owned())) }
}

// =============================================================
// SyncSlot
// =============================================================

#[test]
fn new_slot_is_pending() {
    let slot: SyncSlot<u32> = SyncSlot::default();
    assert_eq!(slot.view(), SlotView::Pending);
    assert!(!slot.loading);
}

#[test]
fn success_replaces_data_and_clears_error() {
    let mut slot = SyncSlot { data: Some(1), error: Some(FAILED.to_owned()), loading: true };
    assert!(slot.apply(Ok(2), FAILED));
    assert_eq!(slot.view(), SlotView::Ready(&2));
    assert!(!slot.loading);
}

#[test]
fn failure_without_data_shows_message() {
    let mut slot: SyncSlot<u32> = SyncSlot::default();
    slot.begin();
    slot.apply(Err(ApiError::Status(500)), FAILED);
    assert_eq!(slot.view(), SlotView::Failed(FAILED));
    assert!(!slot.loading);
}

#[test]
fn failure_keeps_previous_data() {
    let mut slot = SyncSlot { data: Some(7), error: None, loading: false };
    slot.apply(Err(ApiError::Network("offline".to_owned())), FAILED);
    assert_eq!(slot.view(), SlotView::Stale(&7, FAILED));
}

#[test]
fn aborted_result_leaves_slot_untouched() {
    let mut slot = SyncSlot { data: Some(7), error: None, loading: true };
    assert!(!slot.apply(Err(ApiError::Aborted), FAILED));
    assert_eq!(slot, SyncSlot { data: Some(7), error: None, loading: true });
}

// =============================================================
// SyncRegistry
// =============================================================

#[test]
fn newer_ticket_supersedes_older() {
    let registry = SyncRegistry::default();
    let (first, _r1) = registry.begin(KEY);
    let (second, _r2) = registry.begin(KEY);
    assert!(!registry.finish(&first));
    assert!(registry.finish(&second));
}

#[test]
fn keys_are_sequenced_independently() {
    let registry = SyncRegistry::default();
    let (dash, _r1) = registry.begin(KEY);
    let (alerts, _r2) = registry.begin("/alerts");
    assert!(registry.finish(&dash));
    assert!(registry.finish(&alerts));
}

#[test]
fn latest_initiated_wins_when_completions_arrive_out_of_order() {
    let registry = SyncRegistry::default();
    let (tx_old, rx_old) = oneshot::channel();
    let (tx_new, rx_new) = oneshot::channel();

    let older = registry.run(KEY, pending(rx_old));
    let newer = registry.run(KEY, pending(rx_new));

    tx_new.send(2).unwrap();
    let _ = tx_old.send(1);

    let mut slot = SyncSlot::default();
    slot.apply(block_on(newer), FAILED);
    let stale = block_on(older);
    assert_eq!(stale, Err(ApiError::Aborted));
    slot.apply(stale, FAILED);

    assert_eq!(slot.view(), SlotView::Ready(&2));
}

#[test]
fn superseded_failure_does_not_mark_slot() {
    let registry = SyncRegistry::default();
    let older = registry.run(KEY, async { Err::<u32, _>(ApiError::Status(503)) });
    let newer = registry.run(KEY, async { Ok::<u32, ApiError>(5) });

    let mut slot = SyncSlot::default();
    slot.apply(block_on(newer), FAILED);
    slot.apply(block_on(older), FAILED);
    assert_eq!(slot.view(), SlotView::Ready(&5));
}

#[test]
fn sole_request_resolves_normally() {
    let registry = SyncRegistry::default();
    let result = block_on(registry.run(KEY, async { Ok::<u32, ApiError>(9) }));
    assert_eq!(result, Ok(9));
}

#[test]
fn sole_failure_passes_through() {
    let registry = SyncRegistry::default();
    let result = block_on(registry.run(KEY, async { Err::<u32, _>(ApiError::Status(404)) }));
    assert_eq!(result, Err(ApiError::Status(404)));
}

#[test]
fn described_failure_uses_error_detail() {
    fn describe(err: &ApiError) -> String {
        format!("failed: {err}")
    }
    let mut slot: SyncSlot<u32> = SyncSlot::default();
    slot.apply(Err(ApiError::Backend("Lead ID 9 not found".to_owned())), Failure::Describe(describe));
    assert_eq!(slot.view(), SlotView::Failed("failed: Lead ID 9 not found"));
}

// =============================================================
// Completion
// =============================================================

#[test]
fn completion_fills_live_slot_and_runs_success_hook() {
    let owner = Owner::new();
    let slot = owner.with(|| RwSignal::new(SyncSlot::<u32>::default()));
    let seen = Cell::new(None);
    assert!(complete(KEY, slot, Ok(4), FAILED.into(), |v: &u32| seen.set(Some(*v))));
    assert_eq!(seen.get(), Some(4));
    assert_eq!(slot.get_untracked().data, Some(4));
}

#[test]
fn failed_completion_skips_success_hook() {
    let owner = Owner::new();
    let slot = owner.with(|| RwSignal::new(SyncSlot::<u32>::default()));
    let ran = Cell::new(false);
    assert!(!complete(KEY, slot, Err(ApiError::Status(500)), FAILED.into(), |_: &u32| ran.set(true)));
    assert!(!ran.get());
    assert_eq!(slot.get_untracked().error.as_deref(), Some(FAILED));
}

#[test]
fn completion_after_view_unmounts_is_dropped() {
    let owner = Owner::new();
    let slot = owner.with(|| RwSignal::new(SyncSlot::<u32>::default()));
    owner.cleanup();

    let ran = Cell::new(false);
    assert!(!complete(KEY, slot, Ok(4), FAILED.into(), |_: &u32| ran.set(true)));
    assert!(!complete(KEY, slot, Err(ApiError::Status(500)), FAILED.into(), |_: &u32| ran.set(true)));
    assert!(!ran.get());
}
