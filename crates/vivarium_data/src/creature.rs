use crate::genome::Genome;
use crate::vector::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Hard ceiling on stored energy. Feeding and hunting gains saturate here.
pub const MAX_ENERGY: f64 = 100.0;

/// Display color derived from the genome, diet-conditional palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// One live agent: a genome plus all per-lifetime runtime state.
///
/// Identity is a world-scoped random `Uuid`, assigned once at creation and
/// never reused. Energy lives in [0, 100]: gains are capped at 100 by the
/// feeding/hunting rules, and reaching 0 or below kills the creature at the
/// next death check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creature {
    pub id: Uuid,
    pub genome: Genome,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Facing in radians; normalized into (-pi, pi] as the creature moves.
    pub angle: f64,
    pub energy: f64,
    /// Age in ticks.
    pub age: u64,
    /// Cached `genome` color; recomputed only when the genome changes.
    pub color: Rgb,
    /// Generation 0 for seeded creatures, parent + 1 for offspring.
    pub generation: u32,
    pub food_eaten: u32,
    pub creatures_killed: u32,
    pub distance_traveled: f64,
}
