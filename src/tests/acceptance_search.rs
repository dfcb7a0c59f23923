//! Acceptance tests: searching and paging through results.

use crate::model::{FetchError, PageSize};
use crate::state::FocusPane;
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;

#[test]
fn search_then_load_more_appends_in_order() {
    // GIVEN: 17 results for "cats" at 12 per page
    let mut harness = AcceptanceTestHarness::with_total_hits(17);

    // WHEN: User searches and the first page lands
    harness.search("cats");
    assert_eq!(harness.settle(), 1);

    // THEN: 12 items, more available
    assert_eq!(harness.state().items().len(), 12);
    assert!(harness.state().session().can_load_more());

    // WHEN: User loads more
    harness.send_key(KeyCode::Char('m'));
    harness.settle();

    // THEN: 17 items, page 1 first and page 2 appended
    let ids: Vec<u64> = harness.state().items().iter().map(|i| i.id().get()).collect();
    assert_eq!(ids, (1..=17).collect::<Vec<_>>());
    assert!(!harness.state().session().can_load_more());
}

#[test]
fn load_more_after_exhaustion_is_ignored() {
    let mut harness = AcceptanceTestHarness::with_total_hits(5);
    harness.search("cats");
    harness.settle();

    harness.send_key(KeyCode::Char('m'));
    assert!(!harness.state().session().is_loading());
    assert_eq!(harness.provider().calls().len(), 1);
}

#[test]
fn whitespace_search_is_a_no_op() {
    let mut harness = AcceptanceTestHarness::with_total_hits(20);
    harness.search("cats");
    harness.settle();

    harness.search("   ");
    assert_eq!(harness.settle(), 0);

    // Previous results and query stay put
    assert_eq!(harness.state().items().len(), 12);
    assert_eq!(
        harness.state().session().query().map(|q| q.as_str()),
        Some("cats")
    );
    assert_eq!(harness.provider().calls().len(), 1);
}

#[test]
fn new_search_replaces_results_and_restarts_at_page_one() {
    let mut harness = AcceptanceTestHarness::with_total_hits(40);
    harness.search("cats");
    harness.settle();
    harness.send_key(KeyCode::Char('m'));
    harness.settle();
    assert_eq!(harness.state().items().len(), 24);

    harness.search("dogs");
    assert!(harness.state().items().is_empty(), "old results cleared on submit");
    harness.settle();

    assert_eq!(harness.state().items().len(), 12);
    assert_eq!(harness.state().session().page().get(), 1);
    assert_eq!(
        harness.provider().calls().last(),
        Some(&("dogs".to_string(), 1))
    );
}

#[test]
fn failed_page_shows_error_and_retry_recovers() {
    let mut harness = AcceptanceTestHarness::with_total_hits(30);
    harness.search("cats");
    harness.settle();

    harness.provider().fail_next(FetchError::Network("connection reset".to_string()));
    harness.send_key(KeyCode::Char('m'));
    harness.settle();

    let screen = harness.render_to_string();
    assert!(screen.contains("Error: Network error: connection reset"), "{screen}");
    assert_eq!(harness.state().items().len(), 12, "loaded items survive a failure");

    harness.send_key(KeyCode::Char('m'));
    harness.settle();
    assert_eq!(harness.state().session().error(), None);
    assert_eq!(harness.state().items().len(), 24);
}

#[test]
fn failed_first_page_can_be_retried() {
    let mut harness = AcceptanceTestHarness::with_total_hits(30);
    harness
        .provider()
        .fail_next(FetchError::Status {
            code: 429,
            message: "rate limited".to_string(),
        });
    harness.search("cats");
    harness.settle();
    assert!(harness.state().session().error().is_some());
    assert_eq!(harness.state().focus, FocusPane::Grid);

    harness.send_key(KeyCode::Char('m'));
    harness.settle();
    assert_eq!(harness.state().items().len(), 12);
    let pages: Vec<u32> = harness.provider().calls().iter().map(|(_, p)| *p).collect();
    assert_eq!(pages, vec![1, 1]);
}

#[test]
fn custom_page_size_is_requested() {
    let mut harness =
        AcceptanceTestHarness::with_options(50, PageSize::new(20).unwrap(), 120, 40);
    harness.search("flowers");
    harness.settle();
    assert_eq!(harness.state().items().len(), 20);
}

#[test]
fn status_bar_tracks_progress() {
    let mut harness = AcceptanceTestHarness::with_total_hits(17);
    harness.search("cats");

    let loading = harness.render_to_string();
    assert!(loading.contains("Loading…"), "{loading}");

    harness.settle();
    let loaded = harness.render_to_string();
    assert!(loaded.contains("12 of 17"), "{loaded}");
    assert!(loaded.contains("m: load more"));
}

#[test]
fn grid_cursor_moves_by_rendered_columns() {
    let mut harness = AcceptanceTestHarness::with_total_hits(12);
    harness.search("cats");
    harness.settle();
    harness.render_to_string(); // records 3 columns at width 80

    harness.send_key(KeyCode::Char('j'));
    assert_eq!(harness.state().grid_cursor(), 3);
    harness.send_key(KeyCode::Char('l'));
    assert_eq!(harness.state().grid_cursor(), 4);
    harness.send_key(KeyCode::Char('k'));
    assert_eq!(harness.state().grid_cursor(), 1);
    harness.send_key(KeyCode::End);
    assert_eq!(harness.state().grid_cursor(), 11);
}

#[test]
fn quit_from_grid() {
    let mut harness = AcceptanceTestHarness::with_total_hits(3);
    harness.search("cats");
    harness.settle();
    assert!(harness.send_key(KeyCode::Char('q')));
    assert!(!harness.is_running());
}
