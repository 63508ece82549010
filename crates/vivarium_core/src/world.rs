//! The world: owned state plus the per-tick step function.

use crate::brain::BrainLogic;
use crate::config::{WorldConfig, WorldConfigPatch};
use crate::lifecycle;
use crate::snapshot::WorldSnapshot;
use crate::systems::{action, ecological, interaction, perception, stats};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use vivarium_data::{
    BirthRecord, Creature, DeathCause, DeathRecord, Food, Hotspot, KillRecord, TickReport,
    WorldStats,
};

/// One simulation arena: creatures, food, hotspots, stats and the RNG that
/// drives every stochastic rule. Exclusively owned by whoever steps it; a
/// tick is a single synchronous [`World::update`] call with no suspension
/// points, so readers only ever observe between-tick states.
pub struct World {
    pub creatures: Vec<Creature>,
    pub food: Vec<Food>,
    pub hotspots: Vec<Hotspot>,
    pub tick: u64,
    pub stats: WorldStats,
    pub config: WorldConfig,
    rng: ChaCha8Rng,
}

impl World {
    /// Validate the configuration and seed a fresh arena: hotspots first,
    /// then the initial population and food spread.
    ///
    /// A configured seed makes the whole run reproducible; without one the
    /// RNG starts from OS entropy. The seed is consumed here once - later
    /// config patches never reseed a running world.
    pub fn new(config: WorldConfig) -> anyhow::Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let hotspots = ecological::generate_hotspots(config.width, config.height, &mut rng);

        let creatures: Vec<Creature> = (0..config.initial_creatures)
            .map(|_| lifecycle::spawn_creature(config.width, config.height, &mut rng))
            .collect();

        let food: Vec<Food> = (0..config.initial_food)
            .map(|_| {
                ecological::spawn_food(
                    &hotspots,
                    config.width,
                    config.height,
                    config.food_energy,
                    &mut rng,
                )
            })
            .collect();

        let mut world = Self {
            creatures,
            food,
            hotspots,
            tick: 0,
            stats: WorldStats::default(),
            config,
            rng,
        };
        stats::refresh_stats(&mut world.stats, &world.creatures);

        tracing::info!(
            fingerprint = %world.config.fingerprint(),
            seed = ?world.config.seed,
            creatures = world.creatures.len(),
            food = world.food.len(),
            hotspots = world.hotspots.len(),
            "World created"
        );

        Ok(world)
    }

    /// Advance the simulation by exactly one tick and report what happened.
    ///
    /// The pass is mark-then-apply: deaths and food claims collect into side
    /// ledgers while every creature acts against stable indices, and the
    /// removals land in one sweep afterwards. A creature killed earlier in
    /// the pass neither acts nor can be killed twice.
    pub fn update(&mut self) -> TickReport {
        let mut report = TickReport::default();
        let mut dead = vec![false; self.creatures.len()];
        let mut claimed = vec![false; self.food.len()];
        let mut newborns: Vec<Creature> = Vec::new();

        let width = self.config.width;
        let height = self.config.height;

        for i in 0..self.creatures.len() {
            if dead[i] {
                continue;
            }

            let senses =
                perception::sense(&self.creatures[i], &self.creatures, &self.food, width, height);
            let inputs = perception::neural_inputs(&self.creatures[i], &senses);
            let decision = self.creatures[i].genome.forward(inputs);

            {
                let creature = &mut self.creatures[i];
                action::handle_movement(creature, &decision, width, height);
                action::handle_metabolism(creature, self.config.energy_drain_multiplier);
            }

            if decision.attack > 0.5 {
                if let Some(target) = senses.prey {
                    let j = target.index;
                    if !dead[j]
                        && interaction::attack_succeeds(
                            &self.creatures[i],
                            &self.creatures[j],
                            self.config.guaranteed_hunting,
                            width,
                            height,
                            &mut self.rng,
                        )
                    {
                        let prey_energy = self.creatures[j].energy;
                        let prey_id = self.creatures[j].id;
                        let prey_diet = self.creatures[j].genome.diet;
                        let prey_age = self.creatures[j].age;
                        let prey_generation = self.creatures[j].generation;
                        dead[j] = true;

                        let hunter = &mut self.creatures[i];
                        interaction::apply_kill(hunter, prey_energy);
                        report.kills.push(KillRecord {
                            hunter_id: hunter.id,
                            hunter_diet: hunter.genome.diet,
                            prey_id,
                            prey_diet,
                            tick: self.tick,
                        });
                        report.deaths.push(DeathRecord {
                            id: prey_id,
                            cause: DeathCause::Predation,
                            age: prey_age,
                            generation: prey_generation,
                        });
                    }
                }
            }

            if let Some(index) = interaction::handle_feeding(
                &mut self.creatures[i],
                &self.food,
                &mut claimed,
                width,
                height,
            ) {
                report.food_eaten.push(self.food[index].id);
            }

            if self.creatures[i].energy >= self.config.reproduction_threshold {
                self.creatures[i].energy -= self.config.reproduction_cost;
                let child = lifecycle::reproduce(
                    &self.creatures[i],
                    self.config.mutation_rate,
                    self.config.mutation_strength,
                    width,
                    height,
                    &mut self.rng,
                );
                report.births.push(BirthRecord {
                    id: child.id,
                    parent_id: self.creatures[i].id,
                    generation: child.generation,
                    x: child.position.x,
                    y: child.position.y,
                });
                newborns.push(child);
            }

            let creature = &self.creatures[i];
            if creature.energy <= 0.0 {
                dead[i] = true;
                report.deaths.push(DeathRecord {
                    id: creature.id,
                    cause: DeathCause::Starvation,
                    age: creature.age,
                    generation: creature.generation,
                });
            }
        }

        let mut index = 0;
        self.creatures.retain(|_| {
            let keep = !dead[index];
            index += 1;
            keep
        });

        let mut index = 0;
        self.food.retain(|_| {
            let keep = !claimed[index];
            index += 1;
            keep
        });

        self.creatures.append(&mut newborns);

        if self.tick % ecological::RESEED_INTERVAL == 0
            && self.creatures.len() > ecological::RESEED_MIN_POPULATION
        {
            for diet in ecological::reseed_niches(&self.creatures, &mut self.rng) {
                tracing::info!(
                    diet = diet.as_str(),
                    tick = self.tick,
                    "Reseeding scarce niche"
                );
                let creature =
                    ecological::forced_spawn(diet, width, height, &mut self.rng);
                self.creatures.push(creature);
            }
        }

        if self.food.len() < self.config.max_food
            && self.rng.gen::<f64>() < self.config.food_spawn_rate
        {
            let item = ecological::spawn_food(
                &self.hotspots,
                width,
                height,
                self.config.food_energy,
                &mut self.rng,
            );
            self.food.push(item);
        }

        self.tick += 1;

        stats::refresh_stats(&mut self.stats, &self.creatures);
        self.stats.total_creatures_ever += report.births.len() as u64;
        self.stats.total_births += report.births.len() as u64;
        self.stats.total_deaths += report.deaths.len() as u64;

        report
    }

    /// Merge a partial override into the live configuration between ticks.
    /// The merged result is validated before it is committed, so a bad patch
    /// leaves the running configuration untouched.
    pub fn apply_config_patch(&mut self, patch: &WorldConfigPatch) -> anyhow::Result<()> {
        let mut next = self.config.clone();
        next.apply_patch(patch);
        next.validate()?;
        self.config = next;
        Ok(())
    }

    /// Read-only serialization view of the current state.
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot::capture(self)
    }
}
