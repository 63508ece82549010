//! World-level ecology: hotspot geometry, food spawning, niche reseeding.

use crate::genetics::GenomeLogic;
use crate::lifecycle::spawn_creature;
use rand::Rng;
use std::f64::consts::TAU;
use uuid::Uuid;
use vivarium_data::{Creature, DietType, Food, Hotspot, Vec2};

/// Ticks between niche-diversity checks.
pub const RESEED_INTERVAL: u64 = 300;
/// Reseeding only runs while the population is strictly above this floor; a
/// world this small is collapsing anyway and forced injections would just
/// mask it.
pub const RESEED_MIN_POPULATION: usize = 5;

/// Draw the world's persistent food hotspots: 3 to 5 circles kept 50 units
/// off every edge, each with its own spawn-bias probability.
pub fn generate_hotspots<R: Rng>(width: f64, height: f64, rng: &mut R) -> Vec<Hotspot> {
    let count = rng.gen_range(3..=5);
    (0..count)
        .map(|_| Hotspot {
            x: rng.gen_range(50.0..width - 50.0),
            y: rng.gen_range(50.0..height - 50.0),
            radius: rng.gen_range(60.0..140.0),
            probability: rng.gen_range(0.4..0.7),
        })
        .collect()
}

/// Create one food item, biased toward the hotspots.
pub fn spawn_food<R: Rng>(
    hotspots: &[Hotspot],
    width: f64,
    height: f64,
    energy: f64,
    rng: &mut R,
) -> Food {
    Food {
        id: Uuid::from_u128(rng.gen()),
        position: biased_position(hotspots, width, height, rng),
        energy,
        size: 4.0 + energy / 5.0,
    }
}

/// Pick one hotspot uniformly and admit it with its own bias probability,
/// placing the item at a uniform angle and distance inside the circle
/// (wrapped into bounds). A failed admission falls back to a uniform draw
/// over the whole arena.
fn biased_position<R: Rng>(hotspots: &[Hotspot], width: f64, height: f64, rng: &mut R) -> Vec2 {
    if !hotspots.is_empty() {
        let hotspot = hotspots[rng.gen_range(0..hotspots.len())];
        if rng.gen::<f64>() < hotspot.probability {
            let angle = rng.gen_range(0.0..TAU);
            let dist = rng.gen::<f64>() * hotspot.radius;
            return Vec2::new(
                (hotspot.x + angle.cos() * dist).rem_euclid(width),
                (hotspot.y + angle.sin() * dist).rem_euclid(height),
            );
        }
    }
    Vec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height))
}

/// Decide which diet niches get a forced injection this cycle.
///
/// A niche that is extinct among `creatures` is revived outright (herbivore
/// and carnivore always, omnivore with probability 0.1); a scarce niche is
/// revived probabilistically (herbivores under 3 at 0.3, carnivores under 2
/// at 0.2). The caller gates this on [`RESEED_INTERVAL`] and
/// [`RESEED_MIN_POPULATION`].
pub fn reseed_niches<R: Rng>(creatures: &[Creature], rng: &mut R) -> Vec<DietType> {
    let mut herbivores = 0usize;
    let mut carnivores = 0usize;
    let mut omnivores = 0usize;
    for creature in creatures {
        match creature.genome.diet {
            DietType::Herbivore => herbivores += 1,
            DietType::Carnivore => carnivores += 1,
            DietType::Omnivore => omnivores += 1,
        }
    }

    let mut revived = Vec::new();
    if herbivores == 0 || (herbivores < 3 && rng.gen::<f64>() < 0.3) {
        revived.push(DietType::Herbivore);
    }
    if carnivores == 0 || (carnivores < 2 && rng.gen::<f64>() < 0.2) {
        revived.push(DietType::Carnivore);
    }
    if omnivores == 0 && rng.gen::<f64>() < 0.1 {
        revived.push(DietType::Omnivore);
    }
    revived
}

/// Fresh random creature pushed into a specific niche, color recomputed to
/// match the overridden diet.
pub fn forced_spawn<R: Rng>(diet: DietType, width: f64, height: f64, rng: &mut R) -> Creature {
    let mut creature = spawn_creature(width, height, rng);
    creature.genome.diet = diet;
    creature.color = creature.genome.derive_color();
    creature
}
