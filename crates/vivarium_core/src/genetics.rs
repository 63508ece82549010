use crate::brain::{BRAIN_HIDDEN, BRAIN_INPUTS, BRAIN_OUTPUTS};
use rand::Rng;
use vivarium_data::{DietType, Genome, Rgb};

pub const MAX_SPEED_RANGE: (f64, f64) = (0.5, 3.0);
pub const TURN_RATE_RANGE: (f64, f64) = (0.1, 0.5);
pub const SIZE_RANGE: (f64, f64) = (3.0, 15.0);
pub const SENSE_RADIUS_RANGE: (f64, f64) = (30.0, 150.0);
pub const ATTACK_POWER_RANGE: (f64, f64) = (0.3, 1.0);
pub const DEFENSE_RANGE: (f64, f64) = (0.3, 1.0);
pub const ENERGY_EFFICIENCY_RANGE: (f64, f64) = (0.5, 1.5);
pub const BASE_DRAIN_RANGE: (f64, f64) = (0.1, 0.5);

/// Weights and biases may drift past the initial [-1, 1] draw but never past
/// this bound.
pub const WEIGHT_CLAMP: f32 = 2.0;

/// Construction, mutation and appearance of genomes.
pub trait GenomeLogic: Sized {
    /// Draw every trait uniformly within its documented range, every weight
    /// uniformly in [-1, 1], and the diet with the 50/30/20
    /// herbivore/omnivore/carnivore split.
    fn new_random_with_rng<R: Rng>(rng: &mut R) -> Self;

    /// Produce an independently mutated copy. Each scalar trait and each
    /// weight mutates with probability `rate`; perturbations are uniform and
    /// scaled per trait, and results clamp back into the trait's range
    /// (weights into [-2, 2]). The diet shifts only to an adjacent niche and
    /// only on 5% of its mutation events.
    fn mutate_with_rng<R: Rng>(&self, rate: f64, strength: f64, rng: &mut R) -> Self;

    /// Deterministic display color from the genome, diet-conditional palette.
    fn derive_color(&self) -> Rgb;
}

impl GenomeLogic for Genome {
    fn new_random_with_rng<R: Rng>(rng: &mut R) -> Self {
        Genome {
            max_speed: rng.gen_range(MAX_SPEED_RANGE.0..MAX_SPEED_RANGE.1),
            turn_rate: rng.gen_range(TURN_RATE_RANGE.0..TURN_RATE_RANGE.1),
            size: rng.gen_range(SIZE_RANGE.0..SIZE_RANGE.1),
            sense_radius: rng.gen_range(SENSE_RADIUS_RANGE.0..SENSE_RADIUS_RANGE.1),
            diet: random_diet(rng),
            attack_power: rng.gen_range(ATTACK_POWER_RANGE.0..ATTACK_POWER_RANGE.1),
            defense: rng.gen_range(DEFENSE_RANGE.0..DEFENSE_RANGE.1),
            energy_efficiency: rng.gen_range(ENERGY_EFFICIENCY_RANGE.0..ENERGY_EFFICIENCY_RANGE.1),
            base_drain: rng.gen_range(BASE_DRAIN_RANGE.0..BASE_DRAIN_RANGE.1),
            weights_ih: random_weights(BRAIN_INPUTS * BRAIN_HIDDEN, rng),
            weights_ho: random_weights(BRAIN_HIDDEN * BRAIN_OUTPUTS, rng),
            bias_h: random_weights(BRAIN_HIDDEN, rng),
            bias_o: random_weights(BRAIN_OUTPUTS, rng),
        }
    }

    fn mutate_with_rng<R: Rng>(&self, rate: f64, strength: f64, rng: &mut R) -> Self {
        let roll = |rng: &mut R| rng.gen::<f64>() < rate;

        let max_speed = if roll(rng) {
            mutate_value(self.max_speed, MAX_SPEED_RANGE, strength, rng)
        } else {
            self.max_speed
        };
        let turn_rate = if roll(rng) {
            mutate_value(self.turn_rate, TURN_RATE_RANGE, strength * 0.1, rng)
        } else {
            self.turn_rate
        };
        let size = if roll(rng) {
            mutate_value(self.size, SIZE_RANGE, strength * 3.0, rng)
        } else {
            self.size
        };
        let sense_radius = if roll(rng) {
            mutate_value(self.sense_radius, SENSE_RADIUS_RANGE, strength * 20.0, rng)
        } else {
            self.sense_radius
        };
        let diet = if roll(rng) {
            mutate_diet(self.diet, rng)
        } else {
            self.diet
        };
        let attack_power = if roll(rng) {
            mutate_value(self.attack_power, ATTACK_POWER_RANGE, strength * 0.2, rng)
        } else {
            self.attack_power
        };
        let defense = if roll(rng) {
            mutate_value(self.defense, DEFENSE_RANGE, strength * 0.2, rng)
        } else {
            self.defense
        };
        let energy_efficiency = if roll(rng) {
            mutate_value(
                self.energy_efficiency,
                ENERGY_EFFICIENCY_RANGE,
                strength * 0.2,
                rng,
            )
        } else {
            self.energy_efficiency
        };
        let base_drain = if roll(rng) {
            mutate_value(self.base_drain, BASE_DRAIN_RANGE, strength * 0.1, rng)
        } else {
            self.base_drain
        };

        Genome {
            max_speed,
            turn_rate,
            size,
            sense_radius,
            diet,
            attack_power,
            defense,
            energy_efficiency,
            base_drain,
            weights_ih: mutate_weights(&self.weights_ih, rate, strength, rng),
            weights_ho: mutate_weights(&self.weights_ho, rate, strength, rng),
            bias_h: mutate_weights(&self.bias_h, rate, strength, rng),
            bias_o: mutate_weights(&self.bias_o, rate, strength, rng),
        }
    }

    fn derive_color(&self) -> Rgb {
        match self.diet {
            DietType::Herbivore => {
                let g = 180.0 + (self.energy_efficiency - 0.5) * 75.0;
                let b = 80.0 + (self.sense_radius / 150.0) * 80.0;
                Rgb::new(80, channel(g), channel(b))
            }
            DietType::Carnivore => {
                let r = 180.0 + self.attack_power * 75.0;
                let g = 40.0 + (self.max_speed / 3.0) * 60.0;
                Rgb::new(channel(r), channel(g), 60)
            }
            DietType::Omnivore => {
                let r = 150.0 + self.attack_power * 50.0;
                let b = 150.0 + self.defense * 50.0;
                Rgb::new(channel(r), 80, channel(b))
            }
        }
    }
}

fn channel(value: f64) -> u8 {
    value.min(255.0).max(0.0) as u8
}

fn random_diet<R: Rng>(rng: &mut R) -> DietType {
    let roll = rng.gen::<f64>();
    if roll < 0.5 {
        DietType::Herbivore
    } else if roll < 0.8 {
        DietType::Omnivore
    } else {
        DietType::Carnivore
    }
}

fn random_weights<R: Rng>(count: usize, rng: &mut R) -> Vec<f32> {
    (0..count).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

fn mutate_value<R: Rng>(value: f64, range: (f64, f64), strength: f64, rng: &mut R) -> f64 {
    let perturbation = (rng.gen::<f64>() - 0.5) * 2.0 * strength;
    (value + perturbation).clamp(range.0, range.1)
}

fn mutate_weights<R: Rng>(weights: &[f32], rate: f64, strength: f64, rng: &mut R) -> Vec<f32> {
    weights
        .iter()
        .map(|&w| {
            if rng.gen::<f64>() < rate {
                let perturbed = f64::from(w) + (rng.gen::<f64>() - 0.5) * 2.0 * strength;
                perturbed.clamp(f64::from(-WEIGHT_CLAMP), f64::from(WEIGHT_CLAMP)) as f32
            } else {
                w
            }
        })
        .collect()
}

/// Diet shifts one step along herbivore <-> omnivore <-> carnivore, never
/// jumping directly between the two ends. Only 5% of diet mutation events
/// actually shift.
fn mutate_diet<R: Rng>(diet: DietType, rng: &mut R) -> DietType {
    if rng.gen::<f64>() > 0.05 {
        return diet;
    }
    match diet {
        DietType::Herbivore => DietType::Omnivore,
        DietType::Carnivore => DietType::Omnivore,
        DietType::Omnivore => {
            if rng.gen::<f64>() < 0.5 {
                DietType::Herbivore
            } else {
                DietType::Carnivore
            }
        }
    }
}
