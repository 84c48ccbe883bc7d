use glam::Vec3;
use tracing::{debug, warn};

use crate::config::layers;
use crate::ports::{CombatWorld, RayHit};
use crate::state::{HitRecord, ProjectileState};

/// Surface classification by collision layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceClass {
    /// Ground and indestructible scenery. Absorbs everything.
    Hard,
    /// Characters and destructible scenery. Has armor and a health sink.
    Soft,
    /// Everything else. The ray passes through without consequence.
    Ignored,
}

pub fn classify(layer: u32) -> SurfaceClass {
    if layer & layers::HARD != 0 {
        SurfaceClass::Hard
    } else if layer & layers::SOFT != 0 {
        SurfaceClass::Soft
    } else {
        SurfaceClass::Ignored
    }
}

/// Where a projectile ended up after its hits were applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitOutcome {
    /// Set when a hit absorbed the projectile; it stops here instead of
    /// at its advanced position.
    pub stop_point: Option<Vec3>,
}

/// Resolves one projectile's hit list for this frame, in ascending
/// hit-distance order. Mutates the projectile's penetration/damage and
/// the struck targets; stops once either stat is exhausted.
///
/// Single-threaded on purpose: targets are shared between projectiles,
/// and same-frame damage must apply in pool-slot order.
pub fn resolve_hits(
    p: &mut ProjectileState,
    hits: &mut [RayHit],
    world: &mut dyn CombatWorld,
) -> HitOutcome {
    // Resolution order is hit-proximity order, not raycast-return order.
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    let mut stop_point = None;

    for hit in hits.iter() {
        match classify(hit.layer) {
            SurfaceClass::Ignored => continue,
            SurfaceClass::Hard => {
                p.penetration = 0;
                p.damage = 0;
            }
            SurfaceClass::Soft => {
                match hit.entity.and_then(|id| world.target_mut(id)) {
                    Some(target) => {
                        let armor = target.armor();
                        // Policy: decrement by armor first, then apply the
                        // decremented value to the target.
                        p.damage = (p.damage - armor).max(0);
                        let died = target.apply_damage(p.damage);
                        p.penetration = (p.penetration - armor).max(0);
                        debug!(
                            slot = p.slot,
                            entity = hit.entity,
                            armor,
                            applied = p.damage,
                            died,
                            "projectile hit target"
                        );
                    }
                    None => {
                        // Classification mismatch: the layer promised a
                        // target that is not there. Degrade to a hard hit.
                        warn!(
                            slot = p.slot,
                            layer = hit.layer,
                            "soft-classified hit without a combat target, stopping projectile"
                        );
                        p.penetration = 0;
                        p.damage = 0;
                    }
                }
            }
        }

        if p.first_hit.is_none() {
            let record = HitRecord {
                point: hit.point,
                normal: hit.normal,
                entity: hit.entity,
                layer: hit.layer,
            };
            p.first_hit = Some(record);
            for spec in &p.effects {
                world.spawn_effect(spec, &record);
            }
        }

        if p.penetration <= 0 || p.damage <= 0 {
            stop_point = Some(hit.point);
            break;
        }
    }

    HitOutcome { stop_point }
}
