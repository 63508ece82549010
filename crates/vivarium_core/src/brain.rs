use vivarium_data::Genome;

/// Labels for the network inputs, in wire order.
pub const INPUT_LABELS: [&str; 7] = [
    "food_angle",
    "food_distance",
    "prey_angle",
    "prey_distance",
    "predator_angle",
    "energy",
    "bias",
];

/// Labels for the network outputs, in wire order.
pub const OUTPUT_LABELS: [&str; 3] = ["turn", "speed", "attack"];

pub const BRAIN_INPUTS: usize = INPUT_LABELS.len();
pub const BRAIN_HIDDEN: usize = 8;
pub const BRAIN_OUTPUTS: usize = OUTPUT_LABELS.len();

/// What a creature decided to do this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    /// Turn amount in [-1, 1], scaled by the genome turn rate.
    pub turn: f32,
    /// Throttle in [0, 1], scaled by the genome max speed.
    pub speed: f32,
    /// Attack intent in [0, 1]; an attack is attempted above 0.5.
    pub attack: f32,
}

/// Neural decision function over a genome's weight set.
///
/// Fixed feed-forward topology, 7 inputs -> 8 hidden (tanh) -> 3 outputs:
///
/// Inputs:
/// 0. Bearing to nearest food / pi (-1 to 1, 0 when none)
/// 1. Distance to nearest food / sense radius (0 to 1, 1 when none)
/// 2. Bearing to nearest huntable prey / pi (-1 to 1, 0 when none)
/// 3. Distance to nearest prey / sense radius (0 to 1, 1 when none)
/// 4. Bearing to nearest predator / pi (-1 to 1, 0 when none)
/// 5. Energy level / 100 (0 to 1)
/// 6. Bias, always 1
///
/// Outputs:
/// 0. Turn, tanh (-1 to 1)
/// 1. Speed, sigmoid (0 to 1)
/// 2. Attack intent, sigmoid (0 to 1)
pub trait BrainLogic {
    /// Pure function of (inputs, weights); no state is read or written.
    fn forward(&self, inputs: [f32; BRAIN_INPUTS]) -> Decision;
}

impl BrainLogic for Genome {
    fn forward(&self, inputs: [f32; BRAIN_INPUTS]) -> Decision {
        // Input -> Hidden
        let mut hidden = [0.0f32; BRAIN_HIDDEN];
        for (j, h) in hidden.iter_mut().enumerate() {
            let mut sum = weight(&self.bias_h, j);
            for (i, &input) in inputs.iter().enumerate() {
                sum += input * weight(&self.weights_ih, j * BRAIN_INPUTS + i);
            }
            *h = sum.tanh();
        }

        // Hidden -> Output
        let mut raw = [0.0f32; BRAIN_OUTPUTS];
        for (k, out) in raw.iter_mut().enumerate() {
            let mut sum = weight(&self.bias_o, k);
            for (j, &h) in hidden.iter().enumerate() {
                sum += h * weight(&self.weights_ho, k * BRAIN_HIDDEN + j);
            }
            *out = sum;
        }

        Decision {
            turn: raw[0].tanh(),
            speed: sigmoid(raw[1]),
            attack: sigmoid(raw[2]),
        }
    }
}

/// Missing or short weight arrays read as zero instead of panicking, so a
/// malformed genome degrades to a neutral decision rather than killing the
/// tick.
fn weight(values: &[f32], idx: usize) -> f32 {
    values.get(idx).copied().unwrap_or(0.0)
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}
