use serde::{Deserialize, Serialize};

/// Feeding niche of a creature. Gates what it may eat, hunt and flee from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietType {
    /// Eats plants only; never hunts.
    Herbivore,
    /// Eats plants (at reduced efficiency) and hunts smaller herbivores.
    Omnivore,
    /// Hunts only; ignores plant food entirely.
    Carnivore,
}

impl DietType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietType::Herbivore => "herbivore",
            DietType::Omnivore => "omnivore",
            DietType::Carnivore => "carnivore",
        }
    }
}

/// Heritable parameter set of one creature: physical traits, combat traits,
/// metabolism and the full neural weight set.
///
/// A genome is immutable once attached to a creature; reproduction produces a
/// freshly mutated copy rather than editing the parent's in place. Weight
/// vectors follow the fixed 7 -> 8 -> 3 network topology (56 input-hidden
/// weights, 24 hidden-output weights, 8 hidden biases, 3 output biases).
/// Trait values live inside documented ranges; weights are unconstrained in
/// sign and soft-clamped to [-2, 2] on mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genome {
    /// Top speed in distance units per tick, in [0.5, 3.0].
    pub max_speed: f64,
    /// Maximum turn per tick in radians, in [0.1, 0.5].
    pub turn_rate: f64,
    /// Body radius; drives collision ranges and metabolic cost, in [3, 15].
    pub size: f64,
    /// Perception range for food, prey and predators, in [30, 150].
    pub sense_radius: f64,
    /// Feeding niche.
    pub diet: DietType,
    /// Attack roll multiplier, in [0.3, 1.0].
    pub attack_power: f64,
    /// Defense roll multiplier, in [0.3, 1.0].
    pub defense: f64,
    /// Scales every energy gain from feeding and hunting, in [0.5, 1.5].
    pub energy_efficiency: f64,
    /// Per-tick idle energy drain before the size penalty, in [0.1, 0.5].
    pub base_drain: f64,
    /// Input-to-hidden weights, row per hidden neuron.
    pub weights_ih: Vec<f32>,
    /// Hidden-to-output weights, row per output neuron.
    pub weights_ho: Vec<f32>,
    /// Hidden layer biases.
    pub bias_h: Vec<f32>,
    /// Output layer biases.
    pub bias_o: Vec<f32>,
}

impl Genome {
    /// Hex dump of the JSON encoding, for export and inspection tooling.
    pub fn to_hex(&self) -> String {
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        hex::encode(bytes)
    }

    pub fn from_hex(hex_str: &str) -> anyhow::Result<Self> {
        let bytes = hex::decode(hex_str)?;
        let genome = serde_json::from_slice(&bytes)?;
        Ok(genome)
    }
}
