//! Per-creature sensing and neural input assembly.

use crate::brain::BRAIN_INPUTS;
use crate::spatial::{nearest_creature_where, nearest_food, Sensed};
use crate::systems::interaction::{can_hunt, should_flee};
use std::f64::consts::PI;
use vivarium_data::{Creature, DietType, Food, MAX_ENERGY};

/// Everything one creature perceives this tick. Sensing reads the population
/// as it stands mid-pass: creatures earlier in creation order have already
/// moved this tick, later ones have not.
#[derive(Debug, Clone, Copy, Default)]
pub struct Senses {
    pub food: Option<Sensed>,
    pub prey: Option<Sensed>,
    pub predator: Option<Sensed>,
}

/// Run the three nearest-target queries for one creature.
///
/// Carnivores skip the food scan outright (plants mean nothing to them);
/// prey and predator scans are gated per candidate by [`can_hunt`] and
/// [`should_flee`], so a herbivore's prey slot is always empty.
pub fn sense(
    creature: &Creature,
    creatures: &[Creature],
    food: &[Food],
    width: f64,
    height: f64,
) -> Senses {
    let food_target = if creature.genome.diet == DietType::Carnivore {
        None
    } else {
        nearest_food(creature, food, width, height)
    };
    let prey = nearest_creature_where(
        creature,
        creatures,
        |other| can_hunt(creature, other),
        width,
        height,
    );
    let predator = nearest_creature_where(
        creature,
        creatures,
        |other| should_flee(creature, other),
        width,
        height,
    );
    Senses {
        food: food_target,
        prey,
        predator,
    }
}

/// Pack senses into the fixed network input layout.
///
/// Bearings normalize to [-1, 1] by dividing by pi; distances normalize to
/// [0, 1] by the sense radius. An empty slot reads as bearing 0 at the far
/// edge of perception (distance 1), so "nothing there" and "something dead
/// ahead at the horizon" are deliberately indistinguishable to the network.
pub fn neural_inputs(creature: &Creature, senses: &Senses) -> [f32; BRAIN_INPUTS] {
    let (food_angle, food_distance) = target_pair(creature, senses.food);
    let (prey_angle, prey_distance) = target_pair(creature, senses.prey);
    let (predator_angle, _) = target_pair(creature, senses.predator);
    [
        food_angle,
        food_distance,
        prey_angle,
        prey_distance,
        predator_angle,
        (creature.energy / MAX_ENERGY) as f32,
        1.0,
    ]
}

fn target_pair(creature: &Creature, target: Option<Sensed>) -> (f32, f32) {
    match target {
        Some(sensed) => (
            (sensed.bearing / PI) as f32,
            (sensed.distance / creature.genome.sense_radius).min(1.0) as f32,
        ),
        None => (0.0, 1.0),
    }
}
