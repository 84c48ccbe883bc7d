use glam::Vec3;

use crate::protocol::EffectSpec;
use crate::state::{EntityId, HitRecord};

/// One ray of a frame batch.
#[derive(Debug, Clone, Copy)]
pub struct RayQuery {
    pub origin: Vec3,
    /// Unit direction.
    pub dir: Vec3,
    /// Distance budget for this frame: velocity x frame delta.
    pub max_dist: f32,
    pub layer_mask: u32,
}

/// One intersection reported by the scene.
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    pub distance: f32,
    pub point: Vec3,
    pub normal: Vec3,
    pub layer: u32,
    pub entity: Option<EntityId>,
}

// Port for the batch raycast capability the host physics layer provides.
// Must be callable from worker threads; one call per frame covers every
// live projectile.
pub trait RayScene: Send + Sync {
    /// Casts every query, returning up to `max_hits` intersections per
    /// ray. The outer result must have one entry per query.
    fn cast_batch(&self, rays: &[RayQuery], max_hits: usize) -> Result<Vec<Vec<RayHit>>, String>;
}

// Port for the health/damage capability struck entities expose.
pub trait CombatTarget {
    fn armor(&self) -> i32;

    /// Applies raw damage (armor is already accounted for by the hit
    /// resolver). Returns true when the target died from it.
    fn apply_damage(&mut self, amount: i32) -> bool;
}

// Port for host-side world access while resolving hits: target lookup
// and one-shot effect spawning.
pub trait CombatWorld {
    fn target_mut(&mut self, id: EntityId) -> Option<&mut dyn CombatTarget>;

    /// Instantiates an on-hit effect anchored at the hit (and at the
    /// struck entity, when there is one).
    fn spawn_effect(&mut self, spec: &EffectSpec, hit: &HitRecord);
}
