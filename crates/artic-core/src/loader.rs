//! Effect runner: turns an [`Effect`] into a fetch and its result message

use crate::source::ArtworkSource;
use crate::state::{update, Effect, Msg, TableState};

/// Perform the fetch an effect describes and wrap the result
pub async fn run_effect(source: &dyn ArtworkSource, effect: Effect) -> Msg {
    let (page, limit) = effect.request();
    let result = source.fetch_page(page, limit).await;

    if let Err(e) = &result {
        tracing::warn!(token = %effect.token(), page, limit, error = %e, "fetch failed");
    }

    match effect {
        Effect::LoadPage { token, .. } => Msg::PageLoaded { token, result },
        Effect::BulkSelect { token, count } => Msg::BulkLoaded {
            token,
            count,
            result,
        },
    }
}

/// Apply a message and run every resulting fetch in order until nothing is
/// left in flight.
///
/// The interactive front end runs effects concurrently instead; this is the
/// sequential path used by one-shot callers and tests.
pub async fn dispatch(source: &dyn ArtworkSource, state: TableState, msg: Msg) -> TableState {
    let (mut state, mut pending) = update(state, msg);

    while !pending.is_empty() {
        let mut next = Vec::new();
        for effect in pending {
            let msg = run_effect(source, effect).await;
            let (s, effects) = update(state, msg);
            state = s;
            next.extend(effects);
        }
        pending = next;
    }

    state
}
