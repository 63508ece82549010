use std::f64::consts::PI;
use vivarium_data::{Creature, Food, Vec2};

/// A sensed target: where it sits in the scanned collection, how far away it
/// is, and its bearing relative to the observer's facing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sensed {
    /// Index into the collection that was scanned (stable for the whole
    /// tick; removals happen only after the per-creature pass).
    pub index: usize,
    pub distance: f64,
    /// Relative bearing, normalized into (-pi, pi].
    pub bearing: f64,
}

/// Shortest-path distance on the torus: per axis, any delta beyond half the
/// arena extent goes the other way around.
pub fn wrapped_distance(a: Vec2, b: Vec2, width: f64, height: f64) -> f64 {
    let mut dx = (a.x - b.x).abs();
    let mut dy = (a.y - b.y).abs();
    if dx > width / 2.0 {
        dx = width - dx;
    }
    if dy > height / 2.0 {
        dy = height - dy;
    }
    (dx * dx + dy * dy).sqrt()
}

/// Absolute bearing from `from` to `to` along the shortest toroidal path.
pub fn wrapped_bearing(from: Vec2, to: Vec2, width: f64, height: f64) -> f64 {
    let mut dx = to.x - from.x;
    let mut dy = to.y - from.y;
    if dx > width / 2.0 {
        dx -= width;
    }
    if dx < -width / 2.0 {
        dx += width;
    }
    if dy > height / 2.0 {
        dy -= height;
    }
    if dy < -height / 2.0 {
        dy += height;
    }
    dy.atan2(dx)
}

/// Fold an angle into (-pi, pi].
pub fn normalize_angle(mut angle: f64) -> f64 {
    while angle > PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

fn relative_bearing(creature: &Creature, target: Vec2, width: f64, height: f64) -> f64 {
    let absolute = wrapped_bearing(creature.position, target, width, height);
    normalize_angle(absolute - creature.angle)
}

/// Closest food item within the creature's sense radius.
///
/// Scans in collection order with a strict `<` comparison, so ties go to the
/// earliest-created item and the result never depends on incidental
/// iteration differences.
pub fn nearest_food(creature: &Creature, food: &[Food], width: f64, height: f64) -> Option<Sensed> {
    let mut nearest: Option<Sensed> = None;
    for (index, item) in food.iter().enumerate() {
        let distance = wrapped_distance(creature.position, item.position, width, height);
        if distance <= creature.genome.sense_radius
            && nearest.map_or(true, |n| distance < n.distance)
        {
            nearest = Some(Sensed {
                index,
                distance,
                bearing: relative_bearing(creature, item.position, width, height),
            });
        }
    }
    nearest
}

/// Closest other creature within sense radius that satisfies `eligible`.
/// Same deterministic creation-order tie-break as [`nearest_food`].
pub fn nearest_creature_where<F>(
    creature: &Creature,
    creatures: &[Creature],
    eligible: F,
    width: f64,
    height: f64,
) -> Option<Sensed>
where
    F: Fn(&Creature) -> bool,
{
    let mut nearest: Option<Sensed> = None;
    for (index, other) in creatures.iter().enumerate() {
        if other.id == creature.id || !eligible(other) {
            continue;
        }
        let distance = wrapped_distance(creature.position, other.position, width, height);
        if distance <= creature.genome.sense_radius
            && nearest.map_or(true, |n| distance < n.distance)
        {
            nearest = Some(Sensed {
                index,
                distance,
                bearing: relative_bearing(creature, other.position, width, height),
            });
        }
    }
    nearest
}
