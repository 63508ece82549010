//! Read-only serialization view of a world.
//!
//! The sole contract with renderers, push channels or metrics collectors:
//! a pure function of world state, with no engine internals leaking through.
//! Capturing twice without an intervening tick yields identical output.

use crate::world::World;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vivarium_data::{Creature, DietType, WorldStats};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreatureSnapshot {
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    pub size: f64,
    pub energy: f64,
    /// CSS-style `rgb(r, g, b)` string.
    pub color: String,
    pub generation: u32,
    pub sense_radius: f64,
    pub max_speed: f64,
    pub age: u64,
    pub food_eaten: u32,
    pub creatures_killed: u32,
    pub diet: DietType,
    /// Full genome as hex-encoded JSON, for export and offline inspection.
    pub genome_hex: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FoodSnapshot {
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HotspotSnapshot {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ArenaBounds {
    pub width: f64,
    pub height: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub creatures: Vec<CreatureSnapshot>,
    pub food: Vec<FoodSnapshot>,
    pub hotspots: Vec<HotspotSnapshot>,
    pub stats: WorldStats,
    pub world: ArenaBounds,
}

impl WorldSnapshot {
    pub fn capture(world: &World) -> Self {
        Self {
            tick: world.tick,
            creatures: world.creatures.iter().map(CreatureSnapshot::from).collect(),
            food: world
                .food
                .iter()
                .map(|f| FoodSnapshot {
                    id: f.id,
                    x: f.position.x,
                    y: f.position.y,
                    size: f.size,
                })
                .collect(),
            hotspots: world
                .hotspots
                .iter()
                .map(|h| HotspotSnapshot {
                    x: h.x,
                    y: h.y,
                    radius: h.radius,
                })
                .collect(),
            stats: world.stats.clone(),
            world: ArenaBounds {
                width: world.config.width,
                height: world.config.height,
            },
        }
    }
}

impl From<&Creature> for CreatureSnapshot {
    fn from(creature: &Creature) -> Self {
        Self {
            id: creature.id,
            x: creature.position.x,
            y: creature.position.y,
            angle: creature.angle,
            size: creature.genome.size,
            energy: creature.energy,
            color: creature.color.to_string(),
            generation: creature.generation,
            sense_radius: creature.genome.sense_radius,
            max_speed: creature.genome.max_speed,
            age: creature.age,
            food_eaten: creature.food_eaten,
            creatures_killed: creature.creatures_killed,
            diet: creature.genome.diet,
            genome_hex: creature.genome.to_hex(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;
    use vivarium_data::Genome;

    fn test_world() -> World {
        let config = WorldConfig {
            seed: Some(99),
            ..WorldConfig::default()
        };
        World::new(config).expect("world")
    }

    #[test]
    fn test_capture_mirrors_world_shape() {
        let world = test_world();
        let snapshot = world.snapshot();

        assert_eq!(snapshot.tick, 0);
        assert_eq!(snapshot.creatures.len(), world.creatures.len());
        assert_eq!(snapshot.food.len(), world.food.len());
        assert_eq!(snapshot.hotspots.len(), world.hotspots.len());
        assert_eq!(snapshot.world.width, 800.0);
        assert_eq!(snapshot.world.height, 600.0);
        assert_eq!(
            snapshot.stats.current_population,
            world.stats.current_population
        );
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let world = test_world();

        let first = serde_json::to_string(&world.snapshot()).expect("serialize");
        let second = serde_json::to_string(&world.snapshot()).expect("serialize");
        assert_eq!(
            first, second,
            "capturing twice without a tick must be byte-identical"
        );
    }

    #[test]
    fn test_creature_view_formats_color_and_diet() {
        let world = test_world();
        let snapshot = world.snapshot();
        let creature = &snapshot.creatures[0];

        assert!(
            creature.color.starts_with("rgb(") && creature.color.ends_with(')'),
            "unexpected color format: {}",
            creature.color
        );

        let json = serde_json::to_string(creature).expect("serialize");
        let diet_label = creature.diet.as_str();
        assert!(
            json.contains(&format!("\"diet\":\"{diet_label}\"")),
            "diet should serialize as its lowercase label: {json}"
        );
    }

    #[test]
    fn test_genome_hex_round_trips() {
        let world = test_world();
        let snapshot = world.snapshot();

        let restored = Genome::from_hex(&snapshot.creatures[0].genome_hex)
            .expect("snapshot hex should decode");
        assert_eq!(restored, world.creatures[0].genome);
    }
}
