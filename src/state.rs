// Simulation-side projectile records and the snapshot types derived from them.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::protocol::EffectSpec;

pub type EntityId = u64;

/// Opaque handle to the presentation asset a projectile or effect was
/// fired with. The simulation never dereferences it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrefabRef(pub u32);

/// A recorded collision. `entity` is absent for scenery without a
/// combat-facing component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HitRecord {
    pub point: Vec3,
    pub normal: Vec3,
    pub entity: Option<EntityId>,
    pub layer: u32,
}

/// Mutable per-projectile record. Owned exclusively by the scheduler's
/// pool; `slot` is stable for as long as the projectile is live.
#[derive(Debug, Clone)]
pub struct ProjectileState {
    pub slot: usize,
    pub pos: Vec3,
    pub dir: Vec3,
    /// World units per second, from the projectile type.
    pub velocity: f32,
    /// Armor points this projectile can still ignore. Never negative.
    pub penetration: i32,
    /// Damage this projectile can still deal. Never negative.
    pub damage: i32,
    /// Total distance flown. Only ever grows.
    pub travelled: f32,
    /// First collision of this projectile's life. Set at most once.
    pub first_hit: Option<HitRecord>,
    pub sender_id: EntityId,
    pub effects: Vec<EffectSpec>,
    pub prefab: PrefabRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectileSnapshot {
    pub slot: usize,
    pub pos: Vec3,
    pub dir: Vec3,
    pub travelled: f32,
    pub prefab: PrefabRef,
}

impl From<&ProjectileState> for ProjectileSnapshot {
    fn from(p: &ProjectileState) -> Self {
        Self {
            slot: p.slot,
            pos: p.pos,
            dir: p.dir,
            travelled: p.travelled,
            prefab: p.prefab,
        }
    }
}
