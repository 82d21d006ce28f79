//! Session-scoped ingredient inventory for a small bakery.
//!
//! The [`inventory`] module holds the store and its update rules; the remaining
//! modules carry the configuration, error, and logging plumbing shared with the
//! console front end.

pub mod config;
pub mod error;
pub mod inventory;
pub mod telemetry;
