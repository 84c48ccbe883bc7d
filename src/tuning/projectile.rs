use serde::{Deserialize, Serialize};

/// Gameplay tuning for a projectile type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileTuning {
    /// Muzzle velocity in world units per second.
    pub velocity: f32,

    /// Armor points ignored before the weapon's bonus is added.
    pub base_penetration: i32,

    /// Per-type damage floor. Fire events currently take damage from
    /// the weapon instead.
    pub base_damage: i32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            velocity: 100.0,
            base_penetration: 2,
            base_damage: 10,
        }
    }
}
