//! Facnet Core Library
//!
//! Graph store, routing algorithms and flat-file persistence for the
//! facnet facility network.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod records;
pub mod store;
