use crate::genetics::GenomeLogic;
use rand::Rng;
use std::f64::consts::TAU;
use uuid::Uuid;
use vivarium_data::{Creature, Genome, Vec2};

/// Energy every creature starts with, whether seeded or born.
pub const INITIAL_ENERGY: f64 = 50.0;

/// Side length of the square a newborn may land in around its parent.
pub const BIRTH_OFFSET_SPAN: f64 = 20.0;

/// Build a creature from an existing genome. Identity comes from the world
/// RNG so whole runs stay reproducible under a fixed seed.
pub fn create_creature<R: Rng>(
    position: Vec2,
    genome: Genome,
    generation: u32,
    rng: &mut R,
) -> Creature {
    let id = Uuid::from_u128(rng.gen());
    let angle = rng.gen_range(0.0..TAU);
    let color = genome.derive_color();

    Creature {
        id,
        genome,
        position,
        velocity: Vec2::ZERO,
        angle,
        energy: INITIAL_ENERGY,
        age: 0,
        color,
        generation,
        food_eaten: 0,
        creatures_killed: 0,
        distance_traveled: 0.0,
    }
}

/// A generation-zero creature with a random genome at a random position.
pub fn spawn_creature<R: Rng>(width: f64, height: f64, rng: &mut R) -> Creature {
    let position = Vec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height));
    let genome = Genome::new_random_with_rng(rng);
    create_creature(position, genome, 0, rng)
}

/// Spawn one offspring next to `parent` with a mutated copy of its genome.
///
/// The child lands within half of [`BIRTH_OFFSET_SPAN`] of the parent on each
/// axis, clamped into bounds rather than wrapped. The parent's energy
/// deduction is the caller's job; the child always starts at
/// [`INITIAL_ENERGY`].
pub fn reproduce<R: Rng>(
    parent: &Creature,
    mutation_rate: f64,
    mutation_strength: f64,
    width: f64,
    height: f64,
    rng: &mut R,
) -> Creature {
    let genome = parent
        .genome
        .mutate_with_rng(mutation_rate, mutation_strength, rng);

    let position = Vec2::new(
        (parent.position.x + (rng.gen::<f64>() - 0.5) * BIRTH_OFFSET_SPAN).clamp(0.0, width),
        (parent.position.y + (rng.gen::<f64>() - 0.5) * BIRTH_OFFSET_SPAN).clamp(0.0, height),
    );

    create_creature(position, genome, parent.generation + 1, rng)
}
