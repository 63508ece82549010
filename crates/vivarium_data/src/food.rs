use crate::vector::Vec2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stationary plant-food item. Spawned with a fixed energy value and
/// removed from the world when eaten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub id: Uuid,
    pub position: Vec2,
    /// Energy granted to the eater (before efficiency and diet scaling).
    pub energy: f64,
    /// Display/collision radius, derived from energy at spawn.
    pub size: f64,
}

/// A circular region that attracts food spawns, generated once per world
/// reset. `probability` is the chance that a biased spawn actually lands
/// inside this hotspot instead of falling back to a uniform draw.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hotspot {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub probability: f64,
}
