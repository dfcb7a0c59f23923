//! Tests for help overlay key handling
//!
//! Verifies that pressing '?' toggles the help overlay and Escape dismisses it.

use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

fn harness_on_grid() -> AcceptanceTestHarness {
    let mut harness = AcceptanceTestHarness::with_total_hits(5);
    harness.search("cats");
    harness.settle();
    harness
}

#[test]
fn question_mark_shows_help_overlay() {
    let mut harness = harness_on_grid();
    assert!(!harness.state().help_visible);

    harness.send_key(KeyCode::Char('?'));

    assert!(harness.state().help_visible);
    assert!(harness.render_to_string().contains("Keyboard Shortcuts"));
}

#[test]
fn question_mark_toggles_help_overlay() {
    let mut harness = harness_on_grid();
    harness.send_key(KeyCode::Char('?'));
    harness.send_key(KeyCode::Char('?'));
    assert!(!harness.state().help_visible);
}

#[test]
fn escape_closes_help_when_visible() {
    let mut harness = harness_on_grid();
    harness.send_key(KeyCode::Char('?'));
    harness.send_key(KeyCode::Esc);
    assert!(!harness.state().help_visible);
    assert!(harness.is_running());
}

#[test]
fn question_mark_types_into_search_bar() {
    let mut harness = AcceptanceTestHarness::with_total_hits(5);
    harness.send_key(KeyCode::Char('?'));
    assert!(!harness.state().help_visible);
    assert_eq!(harness.state().search_input.text(), "?");
}

#[test]
fn keys_are_blocked_while_help_visible() {
    let mut harness = harness_on_grid();
    harness.send_key(KeyCode::Char('?'));
    harness.send_key(KeyCode::Enter);
    assert!(!harness.state().gallery.is_open());
}

#[test]
fn quit_works_from_help() {
    let mut harness = harness_on_grid();
    harness.send_key(KeyCode::Char('?'));
    assert!(harness.send_key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
}
