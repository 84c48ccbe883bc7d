use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ports::CombatTarget;

/// Current/max hit points plus armor; the stats shared by everything
/// that can be shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub current: i32,
    pub max: i32,
    pub armor: i32,
}

impl HealthStatus {
    pub fn new(current: i32, max: i32, armor: i32) -> Self {
        Self {
            current,
            max,
            armor,
        }
    }

    /// Subtracts health. Armor is accounted for by the hit resolver,
    /// not here. A negative amount cannot heal. Returns true when
    /// health reaches zero.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.current = (self.current - amount).clamp(0, self.current);
        self.current == 0
    }
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self::new(1, 1, 0)
    }
}

/// Health for characters. A dead character stays in the world as a
/// body; the host decides what that looks like.
#[derive(Debug, Clone)]
pub struct CharacterHealth {
    pub status: HealthStatus,
    name: String,
    log_damage: bool,
}

impl CharacterHealth {
    pub fn new(name: impl Into<String>, status: HealthStatus) -> Self {
        Self {
            status,
            name: name.into(),
            log_damage: false,
        }
    }

    pub fn with_logging(mut self, on: bool) -> Self {
        self.log_damage = on;
        self
    }

    pub fn is_dead(&self) -> bool {
        self.status.current == 0
    }
}

impl CombatTarget for CharacterHealth {
    fn armor(&self) -> i32 {
        self.status.armor
    }

    fn apply_damage(&mut self, amount: i32) -> bool {
        let died = self.status.take_damage(amount);
        if self.log_damage {
            debug!(
                name = %self.name,
                amount,
                remaining = self.status.current,
                max = self.status.max,
                "character took damage"
            );
        }
        died
    }
}

/// Health for destructible scenery. Once destroyed, the host removes it
/// from the scene entirely.
#[derive(Debug, Clone)]
pub struct DestructibleHealth {
    pub status: HealthStatus,
    destroyed: bool,
}

impl DestructibleHealth {
    pub fn new(status: HealthStatus) -> Self {
        Self {
            status,
            destroyed: false,
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl CombatTarget for DestructibleHealth {
    fn armor(&self) -> i32 {
        self.status.armor
    }

    fn apply_damage(&mut self, amount: i32) -> bool {
        if self.status.take_damage(amount) {
            self.destroyed = true;
        }
        self.destroyed
    }
}
