//! shortreel client library
//!
//! A mobile-styled short video feed with a player that is hidden, full
//! screen or minimized. The `shortreel` binary in `src/main.rs` wires these
//! modules into an iced application; the library is exposed mainly to
//! enable testing.

pub mod app;
pub mod common;
pub mod domains;
pub mod infra;
pub mod state;
pub mod subscriptions;
pub mod update;
pub mod view;
