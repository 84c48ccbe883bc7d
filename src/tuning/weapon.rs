use serde::{Deserialize, Serialize};

/// Gameplay tuning for weapons. A fire event folds these numbers into
/// the spawn request together with the projectile type's own tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponTuning {
    /// Damage a fresh projectile from this weapon carries.
    pub damage: i32,

    /// Effective range in world units.
    pub range: f32,

    /// Armor points added on top of the projectile type's base
    /// penetration.
    pub penetration: i32,
}

impl Default for WeaponTuning {
    fn default() -> Self {
        Self {
            damage: 20,
            range: 150.0,
            penetration: 3,
        }
    }
}
