use crate::genome::DietType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Why a creature was removed from the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeathCause {
    /// Energy drained to zero or below.
    Starvation,
    /// Killed by a successful attack in the same tick.
    Predation,
}

/// A creature born through reproduction this tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirthRecord {
    pub id: Uuid,
    pub parent_id: Uuid,
    pub generation: u32,
    pub x: f64,
    pub y: f64,
}

/// A creature removed this tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeathRecord {
    pub id: Uuid,
    pub cause: DeathCause,
    pub age: u64,
    pub generation: u32,
}

/// A successful hunt: who killed whom, and on which tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KillRecord {
    pub hunter_id: Uuid,
    pub hunter_diet: DietType,
    pub prey_id: Uuid,
    pub prey_diet: DietType,
    pub tick: u64,
}

/// Everything observable that happened in one tick, for external consumers
/// (kill feeds, history samplers, log sinks). Pure data; the world itself has
/// already been updated by the time a report is returned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickReport {
    pub births: Vec<BirthRecord>,
    pub deaths: Vec<DeathRecord>,
    /// Ids of food items consumed this tick.
    pub food_eaten: Vec<Uuid>,
    pub kills: Vec<KillRecord>,
}

impl TickReport {
    pub fn is_empty(&self) -> bool {
        self.births.is_empty()
            && self.deaths.is_empty()
            && self.food_eaten.is_empty()
            && self.kills.is_empty()
    }
}
