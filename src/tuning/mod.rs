pub mod projectile;
pub mod weapon;

use serde::{Deserialize, Serialize};

use projectile::ProjectileTuning;
use weapon::WeaponTuning;

/// Gameplay tuning tables, loadable from a TOML document. Missing
/// sections fall back to the defaults.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningTable {
    pub projectile: ProjectileTuning,
    pub weapon: WeaponTuning,
}

impl TuningTable {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
