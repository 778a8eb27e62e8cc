//! Pure domain logic for the ad-serving platform.
//!
//! No I/O lives here: the selection engine, targeting predicates, and
//! statistics arithmetic all operate on plain values fetched by the
//! storage layer (`adserve-db`) and are unit-tested in isolation.

pub mod error;
pub mod selection;
pub mod stats;
pub mod types;
