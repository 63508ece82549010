//! Plain data types for the vivarium simulation.
//!
//! Value types only: genomes, creatures, food, hotspots, aggregate stats and
//! per-tick event records. All logic (neural forward pass, mutation, spatial
//! queries, the tick loop itself) lives in `vivarium_core`.

pub mod creature;
pub mod events;
pub mod food;
pub mod genome;
pub mod stats;
pub mod vector;

pub use creature::{Creature, Rgb, MAX_ENERGY};
pub use events::{BirthRecord, DeathCause, DeathRecord, KillRecord, TickReport};
pub use food::{Food, Hotspot};
pub use genome::{DietType, Genome};
pub use stats::WorldStats;
pub use vector::Vec2;
