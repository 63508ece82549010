//! Per-tick subsystems, each a set of free functions over the data types.
//!
//! The [`crate::world::World`] tick loop owns ordering; these modules own the
//! rules. None of them touch the RNG unless it is passed in explicitly, which
//! keeps every rule testable with a seeded generator.

pub mod action;
pub mod ecological;
pub mod interaction;
pub mod perception;
pub mod stats;
