//! Aggregate population statistics, recomputed once per tick.

use vivarium_data::{Creature, WorldStats};

/// Recompute every derived field of `stats` from the live population.
///
/// Cumulative counters (`total_creatures_ever`, `total_deaths`,
/// `total_births`) are carried forward untouched; the tick loop advances
/// them from its own birth/death lists. An empty population zeroes the
/// derived fields rather than producing NaN averages.
pub fn refresh_stats(stats: &mut WorldStats, creatures: &[Creature]) {
    stats.current_population = creatures.len();

    if creatures.is_empty() {
        stats.average_energy = 0.0;
        stats.average_age = 0.0;
        stats.average_speed = 0.0;
        stats.average_size = 0.0;
        stats.oldest_creature = 0;
        stats.max_generation = 0;
        return;
    }

    let count = creatures.len() as f64;
    stats.average_energy = creatures.iter().map(|c| c.energy).sum::<f64>() / count;
    stats.average_age = creatures.iter().map(|c| c.age as f64).sum::<f64>() / count;
    stats.average_speed = creatures.iter().map(|c| c.genome.max_speed).sum::<f64>() / count;
    stats.average_size = creatures.iter().map(|c| c.genome.size).sum::<f64>() / count;
    stats.oldest_creature = creatures.iter().map(|c| c.age).max().unwrap_or(0);
    stats.max_generation = creatures.iter().map(|c| c.generation).max().unwrap_or(0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::spawn_creature;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_empty_population_zeroes_derived_fields_only() {
        let mut stats = WorldStats {
            total_creatures_ever: 500,
            total_deaths: 300,
            total_births: 470,
            average_energy: 55.0,
            oldest_creature: 900,
            ..WorldStats::default()
        };

        refresh_stats(&mut stats, &[]);

        assert_eq!(stats.current_population, 0);
        assert_eq!(stats.average_energy, 0.0, "no NaN from an empty division");
        assert_eq!(stats.oldest_creature, 0);
        assert_eq!(stats.max_generation, 0);
        assert_eq!(
            stats.total_creatures_ever, 500,
            "cumulative counters must survive extinction"
        );
        assert_eq!(stats.total_deaths, 300);
        assert_eq!(stats.total_births, 470);
    }

    #[test]
    fn test_averages_and_extrema_over_a_small_population() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let mut a = spawn_creature(800.0, 600.0, &mut rng);
        let mut b = spawn_creature(800.0, 600.0, &mut rng);

        a.energy = 40.0;
        a.age = 10;
        a.generation = 2;
        a.genome.max_speed = 1.0;
        a.genome.size = 6.0;

        b.energy = 60.0;
        b.age = 30;
        b.generation = 7;
        b.genome.max_speed = 3.0;
        b.genome.size = 10.0;

        let mut stats = WorldStats::default();
        refresh_stats(&mut stats, &[a, b]);

        assert_eq!(stats.current_population, 2);
        assert!((stats.average_energy - 50.0).abs() < 1e-9);
        assert!((stats.average_age - 20.0).abs() < 1e-9);
        assert!((stats.average_speed - 2.0).abs() < 1e-9);
        assert!((stats.average_size - 8.0).abs() < 1e-9);
        assert_eq!(stats.oldest_creature, 30);
        assert_eq!(stats.max_generation, 7);
    }
}
