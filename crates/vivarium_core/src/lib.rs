//! # Vivarium Core
//!
//! The world-tick engine for vivarium - an evolutionary creature simulation.
//!
//! This crate contains all algorithmic content of the simulation:
//! - Fixed-topology neural decision networks (7 inputs -> 8 hidden -> 3 outputs)
//! - Genome construction, mutation and diet-conditional coloring
//! - Wrap-aware spatial queries over a toroidal arena
//! - Per-creature systems: movement, metabolism, hunting, feeding
//! - Ecological systems: hotspot-biased food spawning, niche reseeding
//! - The tick orchestrator and its aggregate statistics
//!
//! ## Architecture
//!
//! One tick is one atomic, single-threaded pass: every live creature senses,
//! decides, moves, metabolizes, hunts, feeds and reproduces against the state
//! its predecessors in creation order left behind; deaths and consumed food
//! are marked during the pass and applied afterwards, so no collection is
//! mutated while it is being scanned. All randomness flows through a
//! world-owned seeded RNG, making whole runs reproducible.
//!
//! ## Example
//!
//! ```
//! use vivarium_core::config::WorldConfig;
//! use vivarium_core::world::World;
//!
//! let config = WorldConfig {
//!     seed: Some(42),
//!     ..WorldConfig::default()
//! };
//! let mut world = World::new(config).unwrap();
//! let report = world.update();
//! assert_eq!(world.tick, 1);
//! assert!(!world.creatures.is_empty());
//! println!("{} births, {} kills", report.births.len(), report.kills.len());
//! ```

/// Neural decision function over fixed-topology genome weights
pub mod brain;
/// Flat runtime configuration: defaults, validation, TOML loading, patching
pub mod config;
/// Genome construction, mutation and color derivation
pub mod genetics;
/// Creature construction and reproduction
pub mod lifecycle;
/// Logging setup and periodic run metrics
pub mod metrics;
/// Read-only serialization view over the world
pub mod snapshot;
/// Wrap-aware distance, bearing and nearest-neighbor scans
pub mod spatial;
/// Per-creature and ecological update systems
pub mod systems;
/// World state and the tick orchestrator
pub mod world;

pub use config::{WorldConfig, WorldConfigPatch};
pub use snapshot::WorldSnapshot;
pub use world::World;
