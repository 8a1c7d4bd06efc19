//! Common utilities for the maquette converter.
//!
//! This crate provides shared infrastructure used by all converter components:
//! - **Warning System** - colored terminal output for degraded or skipped input
//! - **Net** - blocking HTTP fetch for the document/URL loader

pub mod net;
pub mod warning;
