//! Hand-built genomes and creatures for scenario tests.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use vivarium_core::lifecycle;
use vivarium_data::{Creature, DietType, Genome, Vec2};

/// A genome with an all-zero brain: it always cruises at half speed,
/// never turns, and never crosses the attack threshold.
pub fn docile_genome(diet: DietType) -> Genome {
    Genome {
        max_speed: 2.0,
        turn_rate: 0.3,
        size: 8.0,
        sense_radius: 100.0,
        diet,
        attack_power: 0.8,
        defense: 0.5,
        energy_efficiency: 1.0,
        base_drain: 0.2,
        weights_ih: vec![0.0; 56],
        weights_ho: vec![0.0; 24],
        bias_h: vec![0.0; 8],
        bias_o: vec![0.0; 3],
    }
}

/// Same zeroed brain, but with the attack output bias pinned high so the
/// creature always tries to strike whatever prey it senses.
pub fn hunter_genome(diet: DietType) -> Genome {
    let mut genome = docile_genome(diet);
    genome.bias_o = vec![0.0, 0.0, 10.0];
    genome
}

/// Place a fully deterministic creature facing +x. The id draw is seeded
/// from the position, so creatures placed at different spots never collide
/// on identity.
pub fn creature_at(x: f64, y: f64, genome: Genome) -> Creature {
    let seed = x.to_bits().rotate_left(17) ^ y.to_bits();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut creature = lifecycle::create_creature(Vec2::new(x, y), genome, 0, &mut rng);
    creature.angle = 0.0;
    creature
}
