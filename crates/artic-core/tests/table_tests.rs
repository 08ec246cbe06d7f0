//! Table behavior against in-memory sources
//!
//! Drives [`TableState`] through `dispatch` and `run_effect` the same way the
//! terminal front end does.

mod common;

use std::time::Duration;

use artic_core::api::parse_artworks;
use artic_core::{
    dispatch, run_effect, update, Artwork, MemorySource, Msg, SelectionSet, TableState,
};
use common::fixtures::load_response_fixture;
use common::sources::SlowSource;

async fn loaded_table(source: &MemorySource, page_size: u32) -> TableState {
    dispatch(source, TableState::new(page_size), Msg::ChangePage { page_index: 0 }).await
}

// === Page Loader ===

#[tokio::test]
async fn test_initial_load_requests_first_page() {
    let source = MemorySource::synthetic(100_123);
    let state = loaded_table(&source, 12).await;

    assert_eq!(source.requests(), vec![(1, 12)]);
    assert_eq!(state.records.len(), 12);
    assert_eq!(state.page.total_count, 100_123);
    assert_eq!(state.page.first, 0);
    assert!(!state.loading);
}

#[tokio::test]
async fn test_displayed_rows_match_remaining_total() {
    let total = 30u64;
    let size = 12u32;
    let source = MemorySource::synthetic(total);
    let mut state = loaded_table(&source, size).await;

    for p in 0..3u32 {
        state = dispatch(&source, state, Msg::ChangePage { page_index: p }).await;
        let expected = (size as u64).min(total - p as u64 * size as u64);
        assert_eq!(state.records.len() as u64, expected, "page {}", p);
        assert_eq!(state.page.expected_rows(), expected);
        assert_eq!(state.page.total_count, total);
    }
}

#[tokio::test]
async fn test_failed_page_load_keeps_state() {
    let source = MemorySource::synthetic(50);
    let state = loaded_table(&source, 12).await;
    let before = state.records.clone();

    source.set_failing(true);
    let state = dispatch(&source, state, Msg::NextPage).await;

    assert_eq!(state.records, before);
    assert_eq!(state.page.total_count, 50);
    assert_eq!(state.page.page_index(), 0);
    assert!(state.last_error.is_some());

    source.set_failing(false);
    let state = dispatch(&source, state, Msg::NextPage).await;
    assert_eq!(state.records[0].id, 13);
    assert!(state.last_error.is_none());
}

#[tokio::test]
async fn test_slow_earlier_response_does_not_win() {
    let source = SlowSource::new(
        MemorySource::synthetic(100),
        vec![(2, Duration::from_millis(80))],
    );

    let state = TableState::new(10);
    let (state, slow) = update(state, Msg::ChangePage { page_index: 1 });
    let (state, fast) = update(state, Msg::ChangePage { page_index: 2 });

    let (slow_msg, fast_msg) = tokio::join!(
        run_effect(&source, slow[0]),
        run_effect(&source, fast[0])
    );

    // Apply in arrival order: the fast, newer page lands first.
    let (state, _) = update(state, fast_msg);
    let (state, _) = update(state, slow_msg);

    assert_eq!(state.records.first().map(|r| r.id), Some(21));
    assert_eq!(state.page.page_index(), 2);
}

// === Bulk Selector ===

#[tokio::test]
async fn test_bulk_select_first_n_in_response_order() {
    let source = MemorySource::synthetic(500);
    let state = loaded_table(&source, 12).await;
    let state = dispatch(&source, state, Msg::ChangePage { page_index: 3 }).await;

    let state = dispatch(&source, state, Msg::ToggleBulk).await;
    assert!(state.popover.open);
    let state = dispatch(&source, state, Msg::EditBulkInput("25".to_string())).await;
    let state = dispatch(&source, state, Msg::ApplyBulk).await;

    assert_eq!(state.selection.ids(), (1..=25).collect::<Vec<_>>());
    assert!(!state.popover.open);
    // Current page is untouched by the bulk fetch.
    assert_eq!(state.page.page_index(), 3);
    assert_eq!(state.records[0].id, 37);
    assert_eq!(source.requests().last(), Some(&(1, 25)));
}

#[tokio::test]
async fn test_bulk_select_invalid_input_is_ignored() {
    let source = MemorySource::synthetic(100);
    let mut state = loaded_table(&source, 12).await;
    state.selection = SelectionSet::from_records(vec![Artwork::new(7, "picked")]);

    for input in ["", "-3"] {
        let s = dispatch(&source, state.clone(), Msg::ToggleBulk).await;
        let s = dispatch(&source, s, Msg::EditBulkInput(input.to_string())).await;
        let s = dispatch(&source, s, Msg::ApplyBulk).await;

        assert_eq!(s.selection.ids(), vec![7]);
        assert!(!s.popover.open);
    }
    assert_eq!(source.requests(), vec![(1, 12)]);
}

#[tokio::test]
async fn test_bulk_select_overwrites_row_toggles() {
    let source = MemorySource::synthetic(100);
    let state = loaded_table(&source, 12).await;
    let state = dispatch(&source, state, Msg::ChangePage { page_index: 2 }).await;
    let state = dispatch(&source, state, Msg::ToggleRow { id: 30 }).await;
    assert_eq!(state.selection.ids(), vec![30]);

    let state = dispatch(&source, state, Msg::EditBulkInput("3".to_string())).await;
    let state = dispatch(&source, state, Msg::ApplyBulk).await;
    assert_eq!(state.selection.ids(), vec![1, 2, 3]);

    // And row toggles apply on top afterwards.
    let state = dispatch(&source, state, Msg::ToggleRow { id: 30 }).await;
    assert_eq!(state.selection.ids(), vec![1, 2, 3, 30]);
}

#[tokio::test]
async fn test_bulk_select_failure_keeps_selection() {
    let source = MemorySource::synthetic(100);
    let state = loaded_table(&source, 12).await;
    let state = dispatch(&source, state, Msg::TogglePage).await;
    assert_eq!(state.selection.len(), 12);

    source.set_failing(true);
    let state = dispatch(&source, state, Msg::EditBulkInput("40".to_string())).await;
    let state = dispatch(&source, state, Msg::ApplyBulk).await;

    assert_eq!(state.selection.len(), 12);
    assert!(!state.popover.open);
}

// === Table View selection ===

#[tokio::test]
async fn test_selection_survives_page_changes() {
    let source = MemorySource::synthetic(100);
    let state = loaded_table(&source, 12).await;
    let state = dispatch(&source, state, Msg::ToggleRow { id: 2 }).await;
    let state = dispatch(&source, state, Msg::NextPage).await;
    let state = dispatch(&source, state, Msg::ToggleRow { id: 14 }).await;

    assert_eq!(state.selection.ids(), vec![2, 14]);
    assert_eq!(state.selection.count_on(&state.records), 1);
}

// === Response fixtures ===

#[test]
fn test_fixture_page_parses() {
    let page = parse_artworks(&load_response_fixture("artworks_page1_limit3.json")).unwrap();
    assert_eq!(page.total(), 129884);
    assert_eq!(page.data.len(), 3);
    assert_eq!(page.data[2].title.as_deref(), Some("Nighthawks"));
    assert_eq!(page.data[0].inscription, None);
}

#[test]
fn test_fixture_missing_total_is_malformed() {
    let err = parse_artworks(&load_response_fixture("artworks_missing_total.json")).unwrap_err();
    assert!(err.is_malformed());
}
