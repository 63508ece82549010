use serde::{Deserialize, Serialize};

/// Aggregate population statistics, recomputed after every tick.
///
/// The three `total_*` counters are cumulative and carried forward between
/// ticks; everything else is derived from the live population alone and an
/// empty world yields all zeros.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldStats {
    /// Creatures ever born through reproduction.
    pub total_creatures_ever: u64,
    pub total_deaths: u64,
    pub total_births: u64,
    pub current_population: usize,
    pub average_energy: f64,
    pub average_age: f64,
    /// Mean genome top speed, not mean realized speed.
    pub average_speed: f64,
    pub average_size: f64,
    /// Age in ticks of the oldest live creature.
    pub oldest_creature: u64,
    pub max_generation: u32,
}
