//! Internal test modules - whitebox tests with crate access
//!
//! Tests here drive the full TUI through the acceptance harness and can
//! reach crate-private helpers.

mod acceptance_search;
mod acceptance_viewer;
mod help_overlay_tests;
