//! Diet-gated predation and feeding rules.

use crate::spatial::wrapped_distance;
use rand::Rng;
use vivarium_data::{Creature, DietType, Food, MAX_ENERGY};

/// Asymmetric predation eligibility.
///
/// Herbivores never hunt. Carnivores take any herbivore, and omnivores only
/// when clearly bigger (hunter size > 0.8x prey size). Omnivores take only
/// strictly smaller herbivores. Carnivore-on-carnivore is always off the
/// table.
pub fn can_hunt(hunter: &Creature, prey: &Creature) -> bool {
    let hunter_size = hunter.genome.size;
    let prey_size = prey.genome.size;
    match (hunter.genome.diet, prey.genome.diet) {
        (DietType::Herbivore, _) => false,
        (DietType::Carnivore, DietType::Herbivore) => true,
        (DietType::Carnivore, DietType::Omnivore) => hunter_size > prey_size * 0.8,
        (DietType::Carnivore, DietType::Carnivore) => false,
        (DietType::Omnivore, DietType::Herbivore) => hunter_size > prey_size,
        (DietType::Omnivore, _) => false,
    }
}

/// A creature flees exactly the creatures that could legally hunt it.
pub fn should_flee(creature: &Creature, other: &Creature) -> bool {
    can_hunt(other, creature)
}

/// Resolve one attack attempt.
///
/// The reach check (wrapped distance within the two body sizes) always
/// applies. Past it, attack and defense each roll in [0.5, 1.0] of their
/// trait and the attacker must come out strictly ahead; `guaranteed` skips
/// the rolls, not the reach check.
pub fn attack_succeeds<R: Rng>(
    hunter: &Creature,
    prey: &Creature,
    guaranteed: bool,
    width: f64,
    height: f64,
    rng: &mut R,
) -> bool {
    let reach = hunter.genome.size + prey.genome.size;
    if wrapped_distance(hunter.position, prey.position, width, height) > reach {
        return false;
    }
    if guaranteed {
        return true;
    }
    let attack_roll = hunter.genome.attack_power * (0.5 + rng.gen::<f64>() * 0.5);
    let defense_roll = prey.genome.defense * (0.5 + rng.gen::<f64>() * 0.5);
    attack_roll > defense_roll
}

/// Credit a successful hunt: half the prey's remaining energy, scaled by the
/// hunter's efficiency, saturating at the energy cap.
pub fn apply_kill(hunter: &mut Creature, prey_energy: f64) {
    let gained = prey_energy * hunter.genome.energy_efficiency * 0.5;
    hunter.energy = (hunter.energy + gained).min(MAX_ENERGY);
    hunter.creatures_killed += 1;
}

/// Eat the first unclaimed food item the creature overlaps, at most one per
/// tick. `claimed` is the tick's shared claim ledger, parallel to `food`;
/// marking it here is what keeps one item from feeding two creatures.
/// Returns the eaten item's index for the tick report.
pub fn handle_feeding(
    creature: &mut Creature,
    food: &[Food],
    claimed: &mut [bool],
    width: f64,
    height: f64,
) -> Option<usize> {
    if creature.genome.diet == DietType::Carnivore {
        return None;
    }
    for (index, item) in food.iter().enumerate() {
        if claimed[index] {
            continue;
        }
        let distance = wrapped_distance(creature.position, item.position, width, height);
        if distance < creature.genome.size + item.size {
            // Omnivores digest plants at reduced efficiency.
            let diet_multiplier = if creature.genome.diet == DietType::Omnivore {
                0.6
            } else {
                1.0
            };
            let gained = item.energy * creature.genome.energy_efficiency * diet_multiplier;
            creature.energy = (creature.energy + gained).min(MAX_ENERGY);
            creature.food_eaten += 1;
            claimed[index] = true;
            return Some(index);
        }
    }
    None
}
