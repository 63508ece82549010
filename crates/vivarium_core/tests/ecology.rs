mod common;

use common::{creature_at, docile_genome, hunter_genome};
use vivarium_data::{DeathCause, DietType, Food, Vec2};
use vivarium_core::{World, WorldConfig};

/// Bare arena: no seeded creatures or food, no food spawning.
fn bare_config(seed: u64) -> WorldConfig {
    WorldConfig {
        initial_creatures: 0,
        initial_food: 0,
        food_spawn_rate: 0.0,
        seed: Some(seed),
        ..WorldConfig::default()
    }
}

#[test]
fn test_herbivore_finds_and_eats_food() {
    let mut world = World::new(bare_config(50)).unwrap();

    let herbivore = creature_at(400.0, 300.0, docile_genome(DietType::Herbivore));
    let herbivore_id = herbivore.id;
    world.creatures.push(herbivore);
    world.food.push(Food {
        id: uuid::Uuid::from_u128(600),
        position: Vec2::new(401.5, 300.0),
        energy: 20.0,
        size: 8.0,
    });

    let report = world.update();

    let creature = &world.creatures[0];
    assert_eq!(creature.id, herbivore_id);
    assert!(
        (creature.position.x - 401.0).abs() < 1e-6,
        "the zeroed brain cruises at half speed, so x should advance by 1, got {}",
        creature.position.x
    );
    assert_eq!(creature.food_eaten, 1, "the overlapping item should be eaten");
    assert!(
        creature.energy > 69.0 && creature.energy < 70.0,
        "energy should be 50 - drains + 20, got {}",
        creature.energy
    );
    assert!(world.food.is_empty(), "eaten food leaves the world");
    assert_eq!(report.food_eaten.len(), 1);
    assert!(report.births.is_empty());
    assert!(report.deaths.is_empty());
    assert!(report.kills.is_empty());
}

#[test]
fn test_guaranteed_hunting_kills_adjacent_prey() {
    let mut config = bare_config(51);
    config.guaranteed_hunting = true;
    let mut world = World::new(config).unwrap();

    let hunter = creature_at(400.0, 300.0, hunter_genome(DietType::Carnivore));
    let prey = creature_at(402.0, 300.0, docile_genome(DietType::Herbivore));
    let hunter_id = hunter.id;
    let prey_id = prey.id;
    world.creatures.push(hunter);
    world.creatures.push(prey);

    let report = world.update();

    assert_eq!(world.creatures.len(), 1, "the prey must be removed");
    let survivor = &world.creatures[0];
    assert_eq!(survivor.id, hunter_id);
    assert_eq!(survivor.creatures_killed, 1);
    assert!(
        survivor.energy > 74.0 && survivor.energy < 75.0,
        "hunter should absorb half the prey's 50 energy, got {}",
        survivor.energy
    );

    assert_eq!(report.kills.len(), 1, "exactly one kill this tick");
    let kill = &report.kills[0];
    assert_eq!(kill.hunter_id, hunter_id);
    assert_eq!(kill.prey_id, prey_id);
    assert_eq!(kill.hunter_diet, DietType::Carnivore);
    assert_eq!(kill.prey_diet, DietType::Herbivore);
    assert_eq!(kill.tick, 0);

    assert_eq!(report.deaths.len(), 1);
    assert_eq!(report.deaths[0].id, prey_id);
    assert_eq!(report.deaths[0].cause, DeathCause::Predation);
    assert_eq!(world.stats.total_deaths, 1);
}

#[test]
fn test_herbivores_cannot_be_made_to_hunt() {
    let mut config = bare_config(52);
    config.guaranteed_hunting = true;
    let mut world = World::new(config).unwrap();

    // Even a herbivore with a pinned attack output has no legal prey.
    let aggressor = creature_at(400.0, 300.0, hunter_genome(DietType::Herbivore));
    let bystander = creature_at(402.0, 300.0, docile_genome(DietType::Herbivore));
    world.creatures.push(aggressor);
    world.creatures.push(bystander);

    let report = world.update();

    assert_eq!(world.creatures.len(), 2);
    assert!(report.kills.is_empty(), "diet gating overrides attack intent");
    assert!(report.deaths.is_empty());
}

#[test]
fn test_extinct_world_ticks_cleanly_and_recreates() {
    let mut world = World::new(bare_config(53)).unwrap();

    for _ in 0..5 {
        let report = world.update();
        assert!(report.births.is_empty());
        assert!(report.deaths.is_empty());
        assert!(report.kills.is_empty());
        assert!(report.food_eaten.is_empty());
    }
    assert_eq!(world.tick, 5);
    assert_eq!(world.stats.current_population, 0);

    // The driver's reaction to extinction: build a fresh world, which must
    // come up fully populated.
    let fresh = World::new(WorldConfig {
        seed: Some(54),
        ..WorldConfig::default()
    })
    .unwrap();
    assert_eq!(fresh.creatures.len(), 30);
    assert_eq!(fresh.food.len(), 100);
}

#[test]
fn test_generations_advance_and_never_regress() {
    // Five herbivores in a food-rich arena, run shorter than the first
    // reseed cycle so no predator is ever injected.
    let config = WorldConfig {
        initial_creatures: 5,
        initial_food: 200,
        max_food: 200,
        food_spawn_rate: 1.0,
        food_energy: 30.0,
        mutation_rate: 0.05,
        seed: Some(4242),
        ..WorldConfig::default()
    };
    let mut world = World::new(config).unwrap();
    for creature in &mut world.creatures {
        creature.genome.diet = DietType::Herbivore;
    }

    let mut last_generation = 0;
    for _ in 0..280 {
        world.update();
        assert!(
            world.stats.max_generation >= last_generation,
            "max generation regressed from {last_generation} to {} at tick {}",
            world.stats.max_generation,
            world.tick
        );
        last_generation = world.stats.max_generation;
    }

    assert!(
        world.stats.total_births >= 5,
        "a rich arena should see steady reproduction, got {} births",
        world.stats.total_births
    );
    assert!(
        world.stats.max_generation >= 2,
        "descendants of descendants should exist by tick 280, max generation {}",
        world.stats.max_generation
    );
}
