//! Acceptance tests: browsing results in the image viewer.

use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;

fn open_position(harness: &AcceptanceTestHarness) -> Option<usize> {
    let state = harness.state();
    state.gallery.position(state.items())
}

fn open_id(harness: &AcceptanceTestHarness) -> Option<u64> {
    harness.state().gallery.open_image().map(|i| i.id().get())
}

#[test]
fn next_wraps_from_last_to_first() {
    // GIVEN: 17 loaded results with the viewer on the last one
    let mut harness = AcceptanceTestHarness::with_total_hits(17);
    harness.search("cats");
    harness.settle();
    harness.send_key(KeyCode::Char('m'));
    harness.settle();
    harness.send_keys(&[KeyCode::End, KeyCode::Enter]);
    assert_eq!(open_id(&harness), Some(17));

    // WHEN: next three times
    harness.send_keys(&[KeyCode::Right, KeyCode::Char('l'), KeyCode::Char('n')]);

    // THEN: wrapped to the start and moved on to #3
    assert_eq!(open_id(&harness), Some(3));
    assert_eq!(open_position(&harness), Some(2));
}

#[test]
fn previous_wraps_from_first_to_last() {
    let mut harness = AcceptanceTestHarness::with_total_hits(5);
    harness.search("cats");
    harness.settle();
    harness.send_key(KeyCode::Enter);
    assert_eq!(open_id(&harness), Some(1));

    harness.send_key(KeyCode::Left);
    assert_eq!(open_id(&harness), Some(5));
    harness.send_key(KeyCode::Char('h'));
    assert_eq!(open_id(&harness), Some(4));
}

#[test]
fn viewer_navigation_never_loads_more() {
    let mut harness = AcceptanceTestHarness::with_total_hits(40);
    harness.search("cats");
    harness.settle();
    harness.send_keys(&[KeyCode::End, KeyCode::Enter, KeyCode::Right]);

    assert_eq!(open_id(&harness), Some(1), "wraps instead of fetching page 2");
    assert_eq!(harness.provider().calls().len(), 1);
    assert!(!harness.state().session().is_loading());
}

#[test]
fn grid_cursor_follows_viewer() {
    let mut harness = AcceptanceTestHarness::with_total_hits(6);
    harness.search("cats");
    harness.settle();
    harness.send_keys(&[KeyCode::Enter, KeyCode::Right, KeyCode::Right, KeyCode::Esc]);

    assert!(!harness.state().gallery.is_open());
    assert_eq!(harness.state().grid_cursor(), 2);
}

#[test]
fn reopen_after_load_more_continues_into_new_page() {
    let mut harness = AcceptanceTestHarness::with_total_hits(20);
    harness.search("cats");
    harness.settle();
    harness.send_keys(&[KeyCode::End, KeyCode::Enter]);
    assert_eq!(open_id(&harness), Some(12));

    // Close, load more, reopen on the same cell
    harness.send_key(KeyCode::Esc);
    harness.send_key(KeyCode::Char('m'));
    harness.settle();
    harness.send_key(KeyCode::Enter);

    assert_eq!(open_id(&harness), Some(12));
    harness.send_key(KeyCode::Right);
    assert_eq!(open_id(&harness), Some(13), "next continues into the new page");
}

#[test]
fn viewer_swallows_grid_keys_until_closed() {
    let mut harness = AcceptanceTestHarness::with_total_hits(10);
    harness.search("cats");
    harness.settle();
    harness.send_key(KeyCode::Enter);

    // '/' and 'm' mean nothing inside the viewer
    harness.send_keys(&[KeyCode::Char('/'), KeyCode::Char('m')]);
    assert!(harness.state().gallery.is_open());
    assert_eq!(harness.provider().calls().len(), 1);

    assert!(!harness.send_key(KeyCode::Char('q')), "q closes, not quits");
    assert!(!harness.state().gallery.is_open());
    assert!(harness.is_running());
}

#[test]
fn viewer_renders_over_grid() {
    let mut harness = AcceptanceTestHarness::with_total_hits(4);
    harness.search("cats");
    harness.settle();
    harness.send_keys(&[KeyCode::Right, KeyCode::Enter]);

    let screen = harness.render_to_string();
    assert!(screen.contains("2 / 4"), "{screen}");
    assert!(screen.contains("tester"));
}

#[test]
fn enter_on_empty_results_does_not_open() {
    let mut harness = AcceptanceTestHarness::with_total_hits(0);
    harness.search("nothing");
    harness.settle();
    harness.send_key(KeyCode::Enter);
    assert!(!harness.state().gallery.is_open());
}
