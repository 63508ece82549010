use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Flat runtime configuration for one world.
///
/// Read-only to the tick engine while a tick is in flight; the owning process
/// may replace values between ticks through [`WorldConfigPatch`]. Every field
/// has a default, so partial TOML files (and patches) merge over the defaults
/// without resetting unrelated fields. Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Arena width in distance units.
    pub width: f64,
    /// Arena height in distance units.
    pub height: f64,
    /// Creatures seeded at world creation.
    pub initial_creatures: usize,
    /// Food items seeded at world creation.
    pub initial_food: usize,
    /// Hard cap on live food items.
    pub max_food: usize,
    /// Per-tick chance to spawn one food item while below `max_food`.
    pub food_spawn_rate: f64,
    /// Energy carried by each spawned food item.
    pub food_energy: f64,
    /// Energy at or above which a creature reproduces.
    pub reproduction_threshold: f64,
    /// Energy deducted from the parent per birth.
    pub reproduction_cost: f64,
    /// Per-trait, per-weight mutation probability.
    pub mutation_rate: f64,
    /// Base magnitude of mutation perturbations.
    pub mutation_strength: f64,
    /// Global scale on metabolic drain; lower means longer lifespans.
    pub energy_drain_multiplier: f64,
    /// When set, every in-range attack succeeds without a combat roll.
    pub guaranteed_hunting: bool,
    /// Seed for the world RNG; `None` draws from entropy. Applied at world
    /// creation only - patching it later does not reseed a running world.
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            initial_creatures: 30,
            initial_food: 100,
            max_food: 200,
            food_spawn_rate: 0.5,
            food_energy: 20.0,
            reproduction_threshold: 80.0,
            reproduction_cost: 40.0,
            mutation_rate: 0.1,
            mutation_strength: 0.3,
            energy_drain_multiplier: 0.5,
            guaranteed_hunting: false,
            seed: None,
        }
    }
}

impl WorldConfig {
    /// Reject values outside documented bounds. Runs at the configuration
    /// boundary so the tick loop never has to defend against them.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.width >= 200.0,
            "Width must be at least 200 (got {})",
            self.width
        );
        anyhow::ensure!(
            self.height >= 200.0,
            "Height must be at least 200 (got {})",
            self.height
        );
        anyhow::ensure!(
            self.max_food >= self.initial_food,
            "Max food ({}) must not be below initial food ({})",
            self.max_food,
            self.initial_food
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.food_spawn_rate),
            "Food spawn rate must be within [0, 1] (got {})",
            self.food_spawn_rate
        );
        anyhow::ensure!(
            self.food_energy > 0.0,
            "Food energy must be positive (got {})",
            self.food_energy
        );
        anyhow::ensure!(
            self.reproduction_threshold > 0.0 && self.reproduction_threshold <= 100.0,
            "Reproduction threshold must be within (0, 100] (got {})",
            self.reproduction_threshold
        );
        anyhow::ensure!(
            self.reproduction_cost >= 0.0 && self.reproduction_cost < self.reproduction_threshold,
            "Reproduction cost must be within [0, threshold) (got {})",
            self.reproduction_cost
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.mutation_rate),
            "Mutation rate must be within [0, 1] (got {})",
            self.mutation_rate
        );
        anyhow::ensure!(
            (0.0..=2.0).contains(&self.mutation_strength),
            "Mutation strength must be within [0, 2] (got {})",
            self.mutation_strength
        );
        anyhow::ensure!(
            self.energy_drain_multiplier > 0.0 && self.energy_drain_multiplier <= 10.0,
            "Energy drain multiplier must be within (0, 10] (got {})",
            self.energy_drain_multiplier
        );
        Ok(())
    }

    /// Parse and validate a TOML document. Absent keys keep their defaults.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: WorldConfig = toml::from_str(content).context("Failed to parse config TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
    }

    /// Overlay every present patch field; absent fields stay untouched.
    /// Callers should re-validate the result before trusting it.
    pub fn apply_patch(&mut self, patch: &WorldConfigPatch) {
        if let Some(v) = patch.width {
            self.width = v;
        }
        if let Some(v) = patch.height {
            self.height = v;
        }
        if let Some(v) = patch.initial_creatures {
            self.initial_creatures = v;
        }
        if let Some(v) = patch.initial_food {
            self.initial_food = v;
        }
        if let Some(v) = patch.max_food {
            self.max_food = v;
        }
        if let Some(v) = patch.food_spawn_rate {
            self.food_spawn_rate = v;
        }
        if let Some(v) = patch.food_energy {
            self.food_energy = v;
        }
        if let Some(v) = patch.reproduction_threshold {
            self.reproduction_threshold = v;
        }
        if let Some(v) = patch.reproduction_cost {
            self.reproduction_cost = v;
        }
        if let Some(v) = patch.mutation_rate {
            self.mutation_rate = v;
        }
        if let Some(v) = patch.mutation_strength {
            self.mutation_strength = v;
        }
        if let Some(v) = patch.energy_drain_multiplier {
            self.energy_drain_multiplier = v;
        }
        if let Some(v) = patch.guaranteed_hunting {
            self.guaranteed_hunting = v;
        }
        if let Some(v) = patch.seed {
            self.seed = Some(v);
        }
    }

    /// Stable digest of the full configuration, logged at startup so any run
    /// can be traced back to its exact settings.
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{self:?}").as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// Partial configuration override, e.g. decoded from an external control
/// request between ticks. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfigPatch {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub initial_creatures: Option<usize>,
    pub initial_food: Option<usize>,
    pub max_food: Option<usize>,
    pub food_spawn_rate: Option<f64>,
    pub food_energy: Option<f64>,
    pub reproduction_threshold: Option<f64>,
    pub reproduction_cost: Option<f64>,
    pub mutation_rate: Option<f64>,
    pub mutation_strength: Option<f64>,
    pub energy_drain_multiplier: Option<f64>,
    pub guaranteed_hunting: Option<bool>,
    pub seed: Option<u64>,
}
