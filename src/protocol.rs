use glam::Vec3;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::warn;

use crate::state::{EntityId, HitRecord, PrefabRef, ProjectileSnapshot};
use crate::tuning::projectile::ProjectileTuning;

/// On-hit effect descriptor. The whole set attached to a projectile is
/// spawned once, on its first hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectSpec {
    pub prefab: PrefabRef,
    pub explosive: bool,
}

/// Immutable description of a projectile to create. Produced by
/// weapon-fire logic, consumed exactly once when the scheduler drains
/// its spawn queue.
#[derive(Debug, Clone)]
pub struct SpawnRequest {
    pub origin: Vec3,
    pub dir: Vec3,
    /// Shooter identity. Carried through the projectile's life but not
    /// currently consulted during hit resolution.
    pub sender_id: EntityId,
    pub weapon_penetration: i32,
    pub weapon_damage: i32,
    pub effects: Vec<EffectSpec>,
    /// The projectile type's own numbers (velocity, base penetration).
    pub projectile: ProjectileTuning,
    pub prefab: PrefabRef,
}

/// Emitted exactly once per projectile when it leaves the simulation,
/// so presentation can release whatever it allocated for `prefab`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinishedProjectile {
    pub slot: usize,
    pub prefab: PrefabRef,
    pub pos: Vec3,
    pub travelled: f32,
    pub first_hit: Option<HitRecord>,
}

/// Per-tick combat state broadcast to observers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombatUpdate {
    pub tick: u64,
    pub projectiles: Vec<ProjectileSnapshot>,
    pub finished: Vec<FinishedProjectile>,
}

/// Clone-able producer handle held by weapon-fire logic. Pushing never
/// blocks; a full channel drops the request with a warning.
#[derive(Debug, Clone)]
pub struct SpawnHandle {
    tx: mpsc::Sender<SpawnRequest>,
}

impl SpawnHandle {
    pub fn new(tx: mpsc::Sender<SpawnRequest>) -> Self {
        Self { tx }
    }

    pub fn fire(&self, req: SpawnRequest) {
        if let Err(err) = self.tx.try_send(req) {
            warn!(reason = %err, "spawn request dropped");
        }
    }
}
