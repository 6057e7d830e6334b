//! Common utilities for the tagsmith HTML toolkit.
//!
//! This crate provides shared infrastructure used by all tagsmith components:
//! - **Warning System** - deduplicated warnings routed through `tracing`

pub mod warning;
