//! Movement integration and metabolic drain.

use crate::brain::Decision;
use crate::spatial::normalize_angle;
use vivarium_data::{Creature, Vec2};

/// Steer and advance one creature for one tick.
///
/// The decision's turn output scales the genome's turn rate, speed scales the
/// genome's max speed. Position wraps toroidally. Movement costs energy in
/// proportion to speed and body size, so sprinting is only worth it when the
/// payoff (food, a kill, an escape) covers the drain.
pub fn handle_movement(creature: &mut Creature, decision: &Decision, width: f64, height: f64) {
    creature.angle = normalize_angle(
        creature.angle + f64::from(decision.turn) * creature.genome.turn_rate,
    );

    let speed = f64::from(decision.speed) * creature.genome.max_speed;
    creature.velocity = Vec2::new(
        creature.angle.cos() * speed,
        creature.angle.sin() * speed,
    );

    creature.position.x = (creature.position.x + creature.velocity.x).rem_euclid(width);
    creature.position.y = (creature.position.y + creature.velocity.y).rem_euclid(height);

    // Displacement magnitude per tick is exactly `speed`; summing it keeps the
    // odometer free of seam-crossing artifacts.
    creature.distance_traveled += speed;

    creature.energy -= speed * 0.01 * (creature.genome.size / 10.0);
}

/// Unconditional per-tick drain: base rate plus a size penalty, scaled by the
/// world's drain multiplier. Also advances age.
pub fn handle_metabolism(creature: &mut Creature, drain_multiplier: f64) {
    let size_penalty = creature.genome.size * 0.01;
    creature.energy -= (creature.genome.base_drain + size_penalty) * drain_multiplier;
    creature.age += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::spawn_creature;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::f64::consts::PI;

    fn test_creature() -> Creature {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        spawn_creature(800.0, 600.0, &mut rng)
    }

    #[test]
    fn test_movement_turns_by_scaled_turn_rate() {
        let mut creature = test_creature();
        creature.angle = 0.0;
        creature.genome.turn_rate = 0.4;

        let decision = Decision {
            turn: 0.5,
            speed: 0.0,
            attack: 0.0,
        };
        handle_movement(&mut creature, &decision, 800.0, 600.0);

        assert!(
            (creature.angle - 0.2).abs() < 1e-9,
            "angle should advance by turn * turn_rate, got {}",
            creature.angle
        );
    }

    #[test]
    fn test_movement_advances_along_facing() {
        let mut creature = test_creature();
        creature.position = Vec2::new(100.0, 100.0);
        creature.angle = 0.0;
        creature.genome.turn_rate = 0.3;
        creature.genome.max_speed = 2.0;

        let decision = Decision {
            turn: 0.0,
            speed: 1.0,
            attack: 0.0,
        };
        handle_movement(&mut creature, &decision, 800.0, 600.0);

        assert!(
            (creature.position.x - 102.0).abs() < 1e-9,
            "full speed along +x should move by max_speed"
        );
        assert!((creature.position.y - 100.0).abs() < 1e-9);
        assert!((creature.velocity.x - 2.0).abs() < 1e-9);
        assert!(
            (creature.distance_traveled - 2.0).abs() < 1e-9,
            "odometer should accumulate the tick's speed"
        );
    }

    #[test]
    fn test_movement_wraps_across_the_seam() {
        let mut creature = test_creature();
        creature.position = Vec2::new(799.5, 300.0);
        creature.angle = 0.0;
        creature.genome.max_speed = 3.0;

        let decision = Decision {
            turn: 0.0,
            speed: 1.0,
            attack: 0.0,
        };
        handle_movement(&mut creature, &decision, 800.0, 600.0);

        assert!(
            (creature.position.x - 2.5).abs() < 1e-9,
            "x should wrap to the opposite edge, got {}",
            creature.position.x
        );
        assert!(
            (creature.distance_traveled - 3.0).abs() < 1e-9,
            "wrap must not inflate the odometer"
        );
    }

    #[test]
    fn test_movement_cost_scales_with_speed_and_size() {
        let mut creature = test_creature();
        creature.energy = 50.0;
        creature.genome.max_speed = 2.0;
        creature.genome.size = 10.0;

        let decision = Decision {
            turn: 0.0,
            speed: 1.0,
            attack: 0.0,
        };
        handle_movement(&mut creature, &decision, 800.0, 600.0);

        // speed 2.0 * 0.01 * (10 / 10) = 0.02
        assert!(
            (creature.energy - 49.98).abs() < 1e-9,
            "movement drain should be speed * 0.01 * size/10, energy {}",
            creature.energy
        );

        let before = creature.energy;
        let idle = Decision {
            turn: 0.0,
            speed: 0.0,
            attack: 0.0,
        };
        handle_movement(&mut creature, &idle, 800.0, 600.0);
        assert_eq!(creature.energy, before, "standing still must cost nothing");
    }

    #[test]
    fn test_angle_stays_normalized_over_many_turns() {
        let mut creature = test_creature();
        creature.genome.turn_rate = 0.5;
        let decision = Decision {
            turn: 1.0,
            speed: 0.1,
            attack: 0.0,
        };
        for _ in 0..200 {
            handle_movement(&mut creature, &decision, 800.0, 600.0);
            assert!(
                creature.angle > -PI - 1e-9 && creature.angle <= PI + 1e-9,
                "angle escaped its normalized range: {}",
                creature.angle
            );
        }
    }

    #[test]
    fn test_metabolism_drains_and_ages() {
        let mut creature = test_creature();
        creature.energy = 50.0;
        creature.age = 10;
        creature.genome.base_drain = 0.3;
        creature.genome.size = 10.0;

        handle_metabolism(&mut creature, 0.5);

        // (0.3 + 10 * 0.01) * 0.5 = 0.2
        assert!(
            (creature.energy - 49.8).abs() < 1e-9,
            "drain should be (base + size penalty) * multiplier, energy {}",
            creature.energy
        );
        assert_eq!(creature.age, 11, "metabolism advances age once per tick");
    }
}
