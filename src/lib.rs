//! Pixabay image search (pixsearch)
//!
//! TUI application for searching Pixabay and browsing the results.
//!
//! Follows a Pure Core / Impure Shell architecture: `model` and `state` are
//! pure data and transitions, while `source` and `view` own the network and
//! the terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_support;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
