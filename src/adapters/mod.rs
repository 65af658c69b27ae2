//! Adapter implementations for port traits
//!
//! This module contains concrete implementations of the ports:
//!
//! - `memory/` - In-memory board, virtual-clock scheduler and toast host,
//!   used by the scenario replay and by tests
//! - `web/` - Browser DOM bindings (cargo feature `web`)

pub mod memory;

#[cfg(feature = "web")]
pub mod web;
